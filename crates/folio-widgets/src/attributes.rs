//! HTML attributes shared by every widget (`id`, `class`, `attr`).

use folio_core::sanitize::escape_html;
use folio_core::{RenderError, RenderResult};

use crate::value::WidgetValue;

/// Field names every widget kind understands.
pub const COMMON_FIELDS: [&str; 3] = ["id", "class", "attr"];

/// Identifier, extra CSS classes and free attributes of one widget.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Attributes {
    id: Option<String>,
    classes: Vec<String>,
    attrs: Vec<(String, String)>,
}

impl Attributes {
    /// Apply one of the common fields.
    pub fn configure(
        &mut self,
        widget: &'static str,
        field: &str,
        value: WidgetValue,
    ) -> RenderResult<()> {
        match field {
            "id" => self.id = Some(value.into_text(widget, field)?),
            "class" => {
                let classes = value.into_text(widget, field)?;
                self.add_class(&classes);
            }
            "attr" => {
                let (name, value) = value.into_pair(widget, field)?;
                if !is_valid_name(&name) {
                    return Err(RenderError::invalid_value(
                        widget,
                        field,
                        format!("invalid attribute name '{}'", name),
                    ));
                }
                self.attrs.push((name, value));
            }
            _ => {
                return Err(RenderError::UnknownField {
                    widget,
                    field: field.to_string(),
                })
            }
        }
        Ok(())
    }

    /// Set the element id.
    pub fn set_id(&mut self, id: impl Into<String>) {
        self.id = Some(id.into());
    }

    /// Add one or more space-separated classes.
    pub fn add_class(&mut self, classes: &str) {
        self.classes
            .extend(classes.split_whitespace().map(str::to_string));
    }

    /// Add an attribute with a name fixed in code.
    pub fn add_attr(&mut self, name: &'static str, value: impl Into<String>) {
        self.attrs.push((name.to_string(), value.into()));
    }

    pub fn id(&self) -> Option<&str> {
        self.id.as_deref()
    }

    /// Render as ` id=".." class=".." name=".."` with a leading space per attribute.
    ///
    /// `base` classes come before classes added through configuration.
    pub fn render(&self, base: &[&str]) -> String {
        let mut out = String::new();

        if let Some(id) = &self.id {
            out.push_str(&format!(r#" id="{}""#, escape_html(id)));
        }

        let classes: Vec<&str> = base
            .iter()
            .copied()
            .filter(|c| !c.is_empty())
            .chain(self.classes.iter().map(String::as_str))
            .collect();
        if !classes.is_empty() {
            out.push_str(&format!(r#" class="{}""#, escape_html(&classes.join(" "))));
        }

        for (name, value) in &self.attrs {
            out.push_str(&format!(r#" {}="{}""#, name, escape_html(value)));
        }

        out
    }
}

fn is_valid_name(name: &str) -> bool {
    !name.is_empty()
        && name
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || matches!(c, '-' | '_' | ':' | '.'))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_order() {
        let mut attrs = Attributes::default();
        attrs.configure("button", "attr", ("data-id", "7").into()).unwrap();
        attrs.configure("button", "class", "ml-2 extra".into()).unwrap();
        attrs.configure("button", "id", "save".into()).unwrap();

        assert_eq!(
            attrs.render(&["btn", "btn-primary"]),
            r#" id="save" class="btn btn-primary ml-2 extra" data-id="7""#
        );
    }

    #[test]
    fn test_empty_render() {
        assert_eq!(Attributes::default().render(&[]), "");
        assert_eq!(Attributes::default().render(&[""]), "");
    }

    #[test]
    fn test_values_escaped() {
        let mut attrs = Attributes::default();
        attrs.configure("card", "attr", ("title", "\"quoted\"").into()).unwrap();
        assert_eq!(attrs.render(&[]), r#" title="&quot;quoted&quot;""#);
    }

    #[test]
    fn test_invalid_attribute_name() {
        let mut attrs = Attributes::default();
        let err = attrs
            .configure("card", "attr", ("onclick=\"x\"", "y").into())
            .unwrap_err();
        assert!(matches!(err, RenderError::InvalidValue { .. }));
    }

    #[test]
    fn test_unknown_common_field() {
        let mut attrs = Attributes::default();
        assert!(matches!(
            attrs.configure("card", "style", "x".into()),
            Err(RenderError::UnknownField { .. })
        ));
    }
}
