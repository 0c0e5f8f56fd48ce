//! Form input widget.

use folio_core::sanitize::escape_html;
use folio_core::{RenderError, RenderResult};

use crate::attributes::Attributes;
use crate::fragment::Fragment;
use crate::value::WidgetValue;
use crate::widget::{unknown_field, Widget, WidgetKind};

const KIND: WidgetKind = WidgetKind::Input;
const TYPES: [&str; 9] = [
    "text", "email", "password", "hidden", "number", "search", "url", "file", "checkbox",
];

/// A labelled `<input>` inside a form group.
#[derive(Debug, Clone, PartialEq)]
pub struct Input {
    attrs: Attributes,
    input_type: String,
    name: String,
    label: Option<String>,
    value: Option<String>,
    placeholder: Option<String>,
    required: bool,
}

impl Input {
    pub fn new() -> Self {
        Self {
            attrs: Attributes::default(),
            input_type: "text".to_string(),
            name: String::new(),
            label: None,
            value: None,
            placeholder: None,
            required: false,
        }
    }

    pub fn name(mut self, name: &str) -> Self {
        self.name = name.to_string();
        self
    }

    pub fn label(mut self, label: &str) -> Self {
        self.label = Some(label.to_string());
        self
    }

    pub fn required(mut self) -> Self {
        self.required = true;
        self
    }

    fn element_id(&self) -> String {
        match self.attrs.id() {
            Some(id) => id.to_string(),
            None => format!("input-{}", self.name),
        }
    }
}

impl Default for Input {
    fn default() -> Self {
        Self::new()
    }
}

impl Widget for Input {
    fn kind(&self) -> WidgetKind {
        KIND
    }

    fn configure(&mut self, field: &str, value: WidgetValue) -> RenderResult<()> {
        match field {
            "type" => {
                let input_type = value.into_text(KIND.name(), field)?;
                if !TYPES.contains(&input_type.as_str()) {
                    return Err(RenderError::invalid_value(
                        KIND.name(),
                        field,
                        format!("unsupported input type '{}'", input_type),
                    ));
                }
                self.input_type = input_type;
            }
            "name" => self.name = value.into_text(KIND.name(), field)?,
            "label" => self.label = Some(value.into_text(KIND.name(), field)?),
            "value" => self.value = Some(value.into_text(KIND.name(), field)?),
            "placeholder" => self.placeholder = Some(value.into_text(KIND.name(), field)?),
            "required" => self.required = value.into_flag(KIND.name(), field)?,
            "id" | "class" | "attr" => self.attrs.configure(KIND.name(), field, value)?,
            _ => return Err(unknown_field(KIND, field)),
        }
        Ok(())
    }

    fn render(&self) -> Fragment {
        let mut attrs = self.attrs.clone();
        if self.label.is_some() && attrs.id().is_none() {
            attrs.set_id(self.element_id());
        }

        let base = if self.input_type == "checkbox" {
            "form-check-input"
        } else {
            "form-control"
        };

        let mut input = format!(
            r#"<input type="{}" name="{}"{}"#,
            self.input_type,
            escape_html(&self.name),
            attrs.render(&[base])
        );
        if let Some(value) = &self.value {
            input.push_str(&format!(r#" value="{}""#, escape_html(value)));
        }
        if let Some(placeholder) = &self.placeholder {
            input.push_str(&format!(r#" placeholder="{}""#, escape_html(placeholder)));
        }
        if self.required {
            input.push_str(" required");
        }
        input.push('>');

        if self.input_type == "hidden" {
            return Fragment::new(input);
        }

        let label = match &self.label {
            Some(label) => format!(
                r#"<label for="{}">{}</label>"#,
                escape_html(&self.element_id()),
                escape_html(label)
            ),
            None => String::new(),
        };

        Fragment::new(format!(r#"<div class="form-group">{}{}</div>"#, label, input))
    }
}
