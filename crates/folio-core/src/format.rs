//! Pure formatting helpers used while building views.

use std::cmp::Ordering;

/// Maximum number of direct links rendered in one listing column.
pub const MAX_COLUMN_LINKS: usize = 99;

/// Tag id standing for "items without any tag".
pub const UNTAGGED_ID: i64 = 0;

const BYTE_UNITS: [&str; 5] = ["B", "kB", "MB", "GB", "TB"];

/// Format a byte count using 1024-based units.
///
/// Values below 1 kB print as whole bytes, larger values with one decimal.
pub fn format_bytes(bytes: u64) -> String {
    if bytes < 1024 {
        return format!("{} B", bytes);
    }

    let mut value = bytes as f64;
    let mut unit = 0;
    while value >= 1024.0 && unit < BYTE_UNITS.len() - 1 {
        value /= 1024.0;
        unit += 1;
    }

    format!("{:.1} {}", value, BYTE_UNITS[unit])
}

/// Compare two dotted version strings.
///
/// Segments compare numerically at any length, missing segments count as
/// zero, and only the leading digits of a segment are used ("2-1ubuntu"
/// reads as 2).
pub fn compare_versions(a: &str, b: &str) -> Ordering {
    let left = version_segments(a);
    let right = version_segments(b);
    let len = left.len().max(right.len());

    for i in 0..len {
        let l = left.get(i).copied().unwrap_or("");
        let r = right.get(i).copied().unwrap_or("");
        match compare_digits(l, r) {
            Ordering::Equal => continue,
            other => return other,
        }
    }

    Ordering::Equal
}

/// Leading digits of each segment with leading zeros removed.
fn version_segments(version: &str) -> Vec<&str> {
    version
        .trim()
        .trim_start_matches(['v', 'V'])
        .split('.')
        .map(|segment| {
            let end = segment
                .find(|c: char| !c.is_ascii_digit())
                .unwrap_or(segment.len());
            segment[..end].trim_start_matches('0')
        })
        .collect()
}

/// Numeric order of two zero-stripped digit strings.
fn compare_digits(a: &str, b: &str) -> Ordering {
    a.len().cmp(&b.len()).then_with(|| a.cmp(b))
}

/// Outcome of checking a present version against a requirement.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RequirementStatus {
    Satisfied,
    Unsatisfied,
}

impl RequirementStatus {
    /// Widget context for rendering this status.
    pub fn context(&self) -> &'static str {
        match self {
            Self::Satisfied => "success",
            Self::Unsatisfied => "danger",
        }
    }

    pub fn is_satisfied(&self) -> bool {
        matches!(self, Self::Satisfied)
    }
}

/// An environment requirement (interpreter, extension, tool).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Requirement {
    pub name: String,
    pub present: String,
    pub required: String,
}

impl Requirement {
    pub fn new(
        name: impl Into<String>,
        present: impl Into<String>,
        required: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            present: present.into(),
            required: required.into(),
        }
    }

    /// Satisfied when present >= required. An empty present version means
    /// not installed and never satisfies anything.
    pub fn status(&self) -> RequirementStatus {
        if self.present.trim().is_empty() {
            return RequirementStatus::Unsatisfied;
        }
        match compare_versions(&self.present, &self.required) {
            Ordering::Less => RequirementStatus::Unsatisfied,
            _ => RequirementStatus::Satisfied,
        }
    }
}
