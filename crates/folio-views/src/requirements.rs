//! Environment requirement check.

use serde_json::Value;

use folio_core::format::Requirement;
use folio_core::{as_record, field_str, RenderRequest, RenderResult};
use folio_streaming::{BufferedResponder, Response};
use folio_widgets::{Badge, Fragment, Table, Widget};

use crate::context::ViewContext;
use crate::services::Services;
use crate::view::View;

/// Table of required vs. present versions.
///
/// Input: `{"requirements": [{"name", "present", "required"}]}`; a missing
/// or null `present` means not installed. Adds the field `satisfied`.
#[derive(Debug, Clone, Copy, Default)]
pub struct RequirementsView;

impl RequirementsView {
    fn requirements(request: &RenderRequest) -> RenderResult<Vec<Requirement>> {
        request
            .array("requirements")?
            .iter()
            .map(|value| {
                let record = as_record(value, "requirement")?;
                Ok(Requirement::new(
                    field_str(record, "name")?,
                    record
                        .get("present")
                        .and_then(Value::as_str)
                        .unwrap_or_default(),
                    field_str(record, "required")?,
                ))
            })
            .collect()
    }
}

impl View for RequirementsView {
    fn name(&self) -> &'static str {
        "requirements"
    }

    fn main(&self, services: &Services, request: &RenderRequest) -> RenderResult<Response> {
        let mut ctx = ViewContext::new(self.name());
        let requirements = Self::requirements(request)?;

        let head = [
            services.translate("Requirement"),
            services.translate("Present"),
            services.translate("Required"),
        ];
        let head: Vec<&str> = head.iter().map(String::as_str).collect();
        let mut table = ctx.create::<Table>()?.head(&head);

        for requirement in &requirements {
            let status = requirement.status();
            let present = if requirement.present.is_empty() {
                services.translate("not installed")
            } else {
                requirement.present.clone()
            };
            let badge = ctx
                .create::<Badge>()?
                .context(status.context())
                .text(&present)
                .render();

            table = table.body_row(vec![
                Fragment::text(&requirement.name),
                badge,
                Fragment::text(&requirement.required),
            ]);
        }

        ctx.append(&table.render())?;
        ctx.insert(
            "satisfied",
            requirements.iter().all(|r| r.status().is_satisfied()),
        )?;
        ctx.send(BufferedResponder::json())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn run(requirements: Value) -> Value {
        let request = RenderRequest::from_value(json!({ "requirements": requirements })).unwrap();
        RequirementsView
            .main(&Services::default(), &request)
            .unwrap()
            .json()
            .unwrap()
    }

    #[test]
    fn test_satisfied_and_unsatisfied_badges() {
        let body = run(json!([
            {"name": "Python", "present": "3.6.0", "required": "3.5"},
            {"name": "Ghostscript", "present": "3.4", "required": "3.6"}
        ]));
        let html = body["html"].as_str().unwrap();
        assert!(html.contains(r#"<span class="badge badge-success">3.6.0</span>"#));
        assert!(html.contains(r#"<span class="badge badge-danger">3.4</span>"#));
        assert_eq!(body["satisfied"], false);
    }

    #[test]
    fn test_all_satisfied() {
        let body = run(json!([{"name": "SQLite", "present": "3.40.1", "required": "3.8"}]));
        assert_eq!(body["satisfied"], true);
    }

    #[test]
    fn test_missing_present_is_unsatisfied() {
        let body = run(json!([{"name": "Tesseract", "required": "4"}]));
        assert!(body["html"]
            .as_str()
            .unwrap()
            .contains(r#"badge-danger">not installed</span>"#));
        assert_eq!(body["satisfied"], false);
    }

    #[test]
    fn test_missing_present_against_zero_requirement() {
        let body = run(json!([
            {"name": "Tesseract", "required": "0"},
            {"name": "Poppler", "present": null, "required": ""}
        ]));
        let html = body["html"].as_str().unwrap();
        assert_eq!(html.matches(r#"badge-danger">not installed</span>"#).count(), 2);
        assert!(!html.contains("badge-success"));
        assert_eq!(body["satisfied"], false);
    }

    #[test]
    fn test_missing_name_is_upstream_error() {
        let request =
            RenderRequest::from_value(json!({"requirements": [{"required": "1"}]})).unwrap();
        let err = RequirementsView
            .main(&Services::default(), &request)
            .unwrap_err();
        assert_eq!(err.kind(), folio_core::ErrorKind::UpstreamData);
    }
}
