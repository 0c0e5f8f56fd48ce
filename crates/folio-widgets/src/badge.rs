//! Badge widget.

use folio_core::RenderResult;

use crate::attributes::Attributes;
use crate::fragment::Fragment;
use crate::value::WidgetValue;
use crate::widget::{unknown_field, Widget, WidgetKind};

const KIND: WidgetKind = WidgetKind::Badge;

/// A small inline label.
#[derive(Debug, Clone, PartialEq)]
pub struct Badge {
    attrs: Attributes,
    context: String,
    html: Fragment,
}

impl Badge {
    pub fn new() -> Self {
        Self {
            attrs: Attributes::default(),
            context: "secondary".to_string(),
            html: Fragment::default(),
        }
    }

    pub fn context(mut self, context: &str) -> Self {
        self.context = context.to_string();
        self
    }

    pub fn text(mut self, text: &str) -> Self {
        self.html = Fragment::text(text);
        self
    }
}

impl Default for Badge {
    fn default() -> Self {
        Self::new()
    }
}

impl Widget for Badge {
    fn kind(&self) -> WidgetKind {
        KIND
    }

    fn configure(&mut self, field: &str, value: WidgetValue) -> RenderResult<()> {
        match field {
            "context" => self.context = value.into_text(KIND.name(), field)?,
            "html" => self.html = value.into_markup(KIND.name(), field)?,
            "id" | "class" | "attr" => self.attrs.configure(KIND.name(), field, value)?,
            _ => return Err(unknown_field(KIND, field)),
        }
        Ok(())
    }

    fn render(&self) -> Fragment {
        let context = format!("badge-{}", self.context);
        Fragment::new(format!(
            "<span{}>{}</span>",
            self.attrs.render(&["badge", &context]),
            self.html
        ))
    }
}
