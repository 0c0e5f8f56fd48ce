//! Alert widget.

use folio_core::RenderResult;

use crate::attributes::Attributes;
use crate::fragment::Fragment;
use crate::value::WidgetValue;
use crate::widget::{unknown_field, Widget, WidgetKind};

const KIND: WidgetKind = WidgetKind::Alert;

/// A contextual message box.
#[derive(Debug, Clone, PartialEq)]
pub struct Alert {
    attrs: Attributes,
    context: String,
    html: Fragment,
    dismissible: bool,
}

impl Alert {
    pub fn new() -> Self {
        Self {
            attrs: Attributes::default(),
            context: "info".to_string(),
            html: Fragment::default(),
            dismissible: false,
        }
    }

    pub fn context(mut self, context: &str) -> Self {
        self.context = context.to_string();
        self
    }

    pub fn html(mut self, html: Fragment) -> Self {
        self.html = html;
        self
    }

    /// Set a plain-text message.
    pub fn text(mut self, text: &str) -> Self {
        self.html = Fragment::text(text);
        self
    }

    pub fn dismissible(mut self, dismissible: bool) -> Self {
        self.dismissible = dismissible;
        self
    }
}

impl Default for Alert {
    fn default() -> Self {
        Self::new()
    }
}

impl Widget for Alert {
    fn kind(&self) -> WidgetKind {
        KIND
    }

    fn configure(&mut self, field: &str, value: WidgetValue) -> RenderResult<()> {
        match field {
            "context" => self.context = value.into_text(KIND.name(), field)?,
            "html" => self.html = value.into_markup(KIND.name(), field)?,
            "dismissible" => self.dismissible = value.into_flag(KIND.name(), field)?,
            "id" | "class" | "attr" => self.attrs.configure(KIND.name(), field, value)?,
            _ => return Err(unknown_field(KIND, field)),
        }
        Ok(())
    }

    fn render(&self) -> Fragment {
        let context = format!("alert-{}", self.context);
        let dismissible = if self.dismissible { "alert-dismissible" } else { "" };
        let close = if self.dismissible {
            r#"<button type="button" class="close" data-dismiss="alert" aria-label="Close"><span aria-hidden="true">&times;</span></button>"#
        } else {
            ""
        };

        Fragment::new(format!(
            r#"<div role="alert"{}>{}{}</div>"#,
            self.attrs.render(&["alert", &context, dismissible]),
            self.html,
            close
        ))
    }
}
