//! Rendered HTML fragments.

use std::fmt;

use folio_core::sanitize::escape_html;

/// An immutable piece of rendered HTML.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct Fragment(String);

impl Fragment {
    /// Wrap markup that is already safe to embed.
    pub fn new(html: impl Into<String>) -> Self {
        Self(html.into())
    }

    /// Build a fragment from plain text, escaping it.
    pub fn text(text: &str) -> Self {
        Self(escape_html(text))
    }

    /// Concatenate fragments in order.
    pub fn concat<I>(parts: I) -> Self
    where
        I: IntoIterator<Item = Fragment>,
    {
        parts.into_iter().collect()
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_string(self) -> String {
        self.0
    }

    /// Length in bytes.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Display for Fragment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromIterator<Fragment> for Fragment {
    fn from_iter<I: IntoIterator<Item = Fragment>>(iter: I) -> Self {
        let mut html = String::new();
        for part in iter {
            html.push_str(&part.0);
        }
        Self(html)
    }
}

impl AsRef<str> for Fragment {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_text_is_escaped() {
        assert_eq!(Fragment::text("<b>").as_str(), "&lt;b&gt;");
        assert_eq!(Fragment::new("<b>").as_str(), "<b>");
    }

    #[test]
    fn test_concat_preserves_order() {
        let joined = Fragment::concat(vec![
            Fragment::new("<li>1</li>"),
            Fragment::new("<li>2</li>"),
        ]);
        assert_eq!(joined.as_str(), "<li>1</li><li>2</li>");
        assert_eq!(joined.len(), 18);
        assert!(Fragment::concat(Vec::new()).is_empty());
    }
}
