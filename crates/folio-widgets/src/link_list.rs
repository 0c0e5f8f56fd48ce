//! Capped list of links.

use folio_core::format::MAX_COLUMN_LINKS;
use folio_core::sanitize::escape_html;
use folio_core::RenderResult;

use crate::attributes::Attributes;
use crate::fragment::Fragment;
use crate::value::WidgetValue;
use crate::widget::{unknown_field, Widget, WidgetKind};

const KIND: WidgetKind = WidgetKind::LinkList;

/// A column of links.
///
/// At most [`MAX_COLUMN_LINKS`] links are rendered; anything beyond is
/// replaced by a single ellipsis item. An empty list renders the placeholder.
#[derive(Debug, Clone, PartialEq)]
pub struct LinkList {
    attrs: Attributes,
    links: Vec<(String, String)>,
    placeholder: String,
}

impl LinkList {
    pub fn new() -> Self {
        Self {
            attrs: Attributes::default(),
            links: Vec::new(),
            placeholder: "No items".to_string(),
        }
    }

    pub fn link(mut self, label: &str, href: &str) -> Self {
        self.links.push((label.to_string(), href.to_string()));
        self
    }

    pub fn placeholder(mut self, text: &str) -> Self {
        self.placeholder = text.to_string();
        self
    }

    /// Number of links configured (not all may be rendered).
    pub fn len(&self) -> usize {
        self.links.len()
    }

    pub fn is_empty(&self) -> bool {
        self.links.is_empty()
    }
}

impl Default for LinkList {
    fn default() -> Self {
        Self::new()
    }
}

impl Widget for LinkList {
    fn kind(&self) -> WidgetKind {
        KIND
    }

    fn configure(&mut self, field: &str, value: WidgetValue) -> RenderResult<()> {
        match field {
            "link" => self.links.push(value.into_pair(KIND.name(), field)?),
            "placeholder" => self.placeholder = value.into_text(KIND.name(), field)?,
            "id" | "class" | "attr" => self.attrs.configure(KIND.name(), field, value)?,
            _ => return Err(unknown_field(KIND, field)),
        }
        Ok(())
    }

    fn render(&self) -> Fragment {
        if self.links.is_empty() {
            return Fragment::new(format!(
                "<div{}>{}</div>",
                self.attrs.render(&["text-muted"]),
                escape_html(&self.placeholder)
            ));
        }

        let mut items: String = self
            .links
            .iter()
            .take(MAX_COLUMN_LINKS)
            .map(|(label, href)| {
                format!(
                    r#"<li><a href="{}">{}</a></li>"#,
                    escape_html(href),
                    escape_html(label)
                )
            })
            .collect();

        if self.links.len() > MAX_COLUMN_LINKS {
            items.push_str(r#"<li class="text-muted">&hellip;</li>"#);
        }

        Fragment::new(format!(
            "<ul{}>{}</ul>",
            self.attrs.render(&["list-unstyled"]),
            items
        ))
    }
}
