//! Card widget.

use folio_core::RenderResult;

use crate::attributes::Attributes;
use crate::fragment::Fragment;
use crate::value::WidgetValue;
use crate::widget::{unknown_field, Widget, WidgetKind};

const KIND: WidgetKind = WidgetKind::Card;

/// A bordered container with optional header and footer.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Card {
    attrs: Attributes,
    header: Option<Fragment>,
    body: Fragment,
    footer: Option<Fragment>,
}

impl Card {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn header(mut self, header: Fragment) -> Self {
        self.header = Some(header);
        self
    }

    pub fn body(mut self, body: Fragment) -> Self {
        self.body = body;
        self
    }

    pub fn footer(mut self, footer: Fragment) -> Self {
        self.footer = Some(footer);
        self
    }

    pub fn class(mut self, classes: &str) -> Self {
        self.attrs.add_class(classes);
        self
    }
}

impl Widget for Card {
    fn kind(&self) -> WidgetKind {
        KIND
    }

    fn configure(&mut self, field: &str, value: WidgetValue) -> RenderResult<()> {
        match field {
            "header" => self.header = Some(value.into_markup(KIND.name(), field)?),
            "body" => self.body = value.into_markup(KIND.name(), field)?,
            "footer" => self.footer = Some(value.into_markup(KIND.name(), field)?),
            "id" | "class" | "attr" => self.attrs.configure(KIND.name(), field, value)?,
            _ => return Err(unknown_field(KIND, field)),
        }
        Ok(())
    }

    fn render(&self) -> Fragment {
        let mut html = format!("<div{}>", self.attrs.render(&["card"]));

        if let Some(header) = &self.header {
            html.push_str(&format!(r#"<div class="card-header">{}</div>"#, header));
        }

        html.push_str(&format!(r#"<div class="card-body">{}</div>"#, self.body));

        if let Some(footer) = &self.footer {
            html.push_str(&format!(r#"<div class="card-footer">{}</div>"#, footer));
        }

        html.push_str("</div>");
        Fragment::new(html)
    }
}
