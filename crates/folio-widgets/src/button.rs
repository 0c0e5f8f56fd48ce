//! Button widget.

use std::fmt;
use std::str::FromStr;

use folio_core::{RenderError, RenderResult};

use crate::attributes::Attributes;
use crate::fragment::Fragment;
use crate::value::WidgetValue;
use crate::widget::{unknown_field, Widget, WidgetKind};

const KIND: WidgetKind = WidgetKind::Button;

/// Value of a button's `type` attribute.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ButtonType {
    #[default]
    Button,
    Submit,
    Reset,
}

impl ButtonType {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Button => "button",
            Self::Submit => "submit",
            Self::Reset => "reset",
        }
    }
}

impl fmt::Display for ButtonType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ButtonType {
    type Err = RenderError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "button" => Ok(Self::Button),
            "submit" => Ok(Self::Submit),
            "reset" => Ok(Self::Reset),
            other => Err(RenderError::invalid_value(
                KIND.name(),
                "type",
                format!("unsupported button type '{}'", other),
            )),
        }
    }
}

/// A `<button>` with a Bootstrap context class.
#[derive(Debug, Clone, PartialEq)]
pub struct Button {
    attrs: Attributes,
    context: String,
    button_type: ButtonType,
    html: Fragment,
}

impl Button {
    /// Create a secondary, non-submitting button.
    pub fn new() -> Self {
        Self {
            attrs: Attributes::default(),
            context: "secondary".to_string(),
            button_type: ButtonType::Button,
            html: Fragment::default(),
        }
    }

    /// Set the context (primary, danger, outline-secondary, ...).
    pub fn context(mut self, context: &str) -> Self {
        self.context = context.to_string();
        self
    }

    pub fn button_type(mut self, button_type: ButtonType) -> Self {
        self.button_type = button_type;
        self
    }

    /// Set the label markup.
    pub fn html(mut self, html: Fragment) -> Self {
        self.html = html;
        self
    }

    /// Set a plain-text label.
    pub fn text(mut self, text: &str) -> Self {
        self.html = Fragment::text(text);
        self
    }

    pub fn id(mut self, id: &str) -> Self {
        self.attrs.set_id(id);
        self
    }

    pub fn class(mut self, classes: &str) -> Self {
        self.attrs.add_class(classes);
        self
    }

    pub fn attr(mut self, name: &'static str, value: impl Into<String>) -> Self {
        self.attrs.add_attr(name, value);
        self
    }
}

impl Default for Button {
    fn default() -> Self {
        Self::new()
    }
}

impl Widget for Button {
    fn kind(&self) -> WidgetKind {
        KIND
    }

    fn configure(&mut self, field: &str, value: WidgetValue) -> RenderResult<()> {
        match field {
            "context" => self.context = value.into_text(KIND.name(), field)?,
            "type" => self.button_type = value.into_text(KIND.name(), field)?.parse()?,
            "html" => self.html = value.into_markup(KIND.name(), field)?,
            "id" | "class" | "attr" => self.attrs.configure(KIND.name(), field, value)?,
            _ => return Err(unknown_field(KIND, field)),
        }
        Ok(())
    }

    fn render(&self) -> Fragment {
        let context = format!("btn-{}", self.context);
        Fragment::new(format!(
            r#"<button type="{}"{}>{}</button>"#,
            self.button_type,
            self.attrs.render(&["btn", &context]),
            self.html
        ))
    }
}
