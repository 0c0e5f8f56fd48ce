//! Form widget.

use folio_core::sanitize::escape_html;
use folio_core::{RenderError, RenderResult};

use crate::attributes::Attributes;
use crate::fragment::Fragment;
use crate::value::WidgetValue;
use crate::widget::{unknown_field, Widget, WidgetKind};

const KIND: WidgetKind = WidgetKind::Form;

/// A `<form>` wrapping already rendered controls.
#[derive(Debug, Clone, PartialEq)]
pub struct Form {
    attrs: Attributes,
    action: String,
    method: String,
    html: Vec<Fragment>,
}

impl Form {
    /// Create a POST form with an empty action.
    pub fn new() -> Self {
        Self {
            attrs: Attributes::default(),
            action: String::new(),
            method: "POST".to_string(),
            html: Vec::new(),
        }
    }

    pub fn action(mut self, action: &str) -> Self {
        self.action = action.to_string();
        self
    }

    /// Use GET instead of POST.
    pub fn get(mut self) -> Self {
        self.method = "GET".to_string();
        self
    }

    /// Append rendered content.
    pub fn html(mut self, html: Fragment) -> Self {
        self.html.push(html);
        self
    }

    pub fn id(mut self, id: &str) -> Self {
        self.attrs.set_id(id);
        self
    }
}

impl Default for Form {
    fn default() -> Self {
        Self::new()
    }
}

impl Widget for Form {
    fn kind(&self) -> WidgetKind {
        KIND
    }

    fn configure(&mut self, field: &str, value: WidgetValue) -> RenderResult<()> {
        match field {
            "action" => self.action = value.into_text(KIND.name(), field)?,
            "method" => {
                let method = value.into_text(KIND.name(), field)?.to_uppercase();
                if method != "GET" && method != "POST" {
                    return Err(RenderError::invalid_value(
                        KIND.name(),
                        field,
                        format!("unsupported method '{}'", method),
                    ));
                }
                self.method = method;
            }
            "html" => self.html.push(value.into_markup(KIND.name(), field)?),
            "id" | "class" | "attr" => self.attrs.configure(KIND.name(), field, value)?,
            _ => return Err(unknown_field(KIND, field)),
        }
        Ok(())
    }

    fn render(&self) -> Fragment {
        let content: Fragment = self.html.iter().cloned().collect();
        Fragment::new(format!(
            r#"<form action="{}" method="{}"{}>{}</form>"#,
            escape_html(&self.action),
            self.method,
            self.attrs.render(&[]),
            content
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_html_appends() {
        let mut form = Form::new();
        form.configure("action", "/signup".into()).unwrap();
        form.configure("html", Fragment::new("<input>").into()).unwrap();
        form.configure("html", Fragment::new("<button></button>").into()).unwrap();

        assert_eq!(
            form.render().as_str(),
            r#"<form action="/signup" method="POST"><input><button></button></form>"#
        );
    }

    #[test]
    fn test_method_validation() {
        let mut form = Form::new();
        form.configure("method", "get".into()).unwrap();
        assert!(form.render().as_str().contains(r#"method="GET""#));
        assert!(form.configure("method", "DELETE".into()).is_err());
    }
}
