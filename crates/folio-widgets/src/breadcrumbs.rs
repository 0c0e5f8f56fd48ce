//! Breadcrumb navigation widget.

use folio_core::sanitize::escape_html;
use folio_core::RenderResult;

use crate::attributes::Attributes;
use crate::fragment::Fragment;
use crate::value::WidgetValue;
use crate::widget::{unknown_field, Widget, WidgetKind};

const KIND: WidgetKind = WidgetKind::Breadcrumbs;

/// Breadcrumb trail. The last item is rendered as the active page.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Breadcrumbs {
    attrs: Attributes,
    items: Vec<(String, String)>,
}

impl Breadcrumbs {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a crumb.
    pub fn item(mut self, label: &str, href: &str) -> Self {
        self.items.push((label.to_string(), href.to_string()));
        self
    }
}

impl Widget for Breadcrumbs {
    fn kind(&self) -> WidgetKind {
        KIND
    }

    fn configure(&mut self, field: &str, value: WidgetValue) -> RenderResult<()> {
        match field {
            "item" => self.items.push(value.into_pair(KIND.name(), field)?),
            "id" | "class" | "attr" => self.attrs.configure(KIND.name(), field, value)?,
            _ => return Err(unknown_field(KIND, field)),
        }
        Ok(())
    }

    fn render(&self) -> Fragment {
        let last = self.items.len().saturating_sub(1);
        let crumbs: String = self
            .items
            .iter()
            .enumerate()
            .map(|(i, (label, href))| {
                if i == last {
                    format!(
                        r#"<li class="breadcrumb-item active" aria-current="page">{}</li>"#,
                        escape_html(label)
                    )
                } else {
                    format!(
                        r#"<li class="breadcrumb-item"><a href="{}">{}</a></li>"#,
                        escape_html(href),
                        escape_html(label)
                    )
                }
            })
            .collect();

        Fragment::new(format!(
            r#"<nav aria-label="breadcrumb"{}><ol class="breadcrumb">{}</ol></nav>"#,
            self.attrs.render(&[]),
            crumbs
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_last_item_active() {
        let html = Breadcrumbs::new()
            .item("Dashboard", "#dashboard/main")
            .item("Items", "#items/main")
            .render();
        assert_eq!(
            html.as_str(),
            concat!(
                r#"<nav aria-label="breadcrumb"><ol class="breadcrumb">"#,
                r##"<li class="breadcrumb-item"><a href="#dashboard/main">Dashboard</a></li>"##,
                r#"<li class="breadcrumb-item active" aria-current="page">Items</li>"#,
                "</ol></nav>"
            )
        );
    }

    #[test]
    fn test_empty_trail() {
        let html = Breadcrumbs::new().render();
        assert_eq!(
            html.as_str(),
            r#"<nav aria-label="breadcrumb"><ol class="breadcrumb"></ol></nav>"#
        );
    }

    #[test]
    fn test_item_requires_pair() {
        let mut crumbs = Breadcrumbs::new();
        assert!(crumbs.configure("item", "Items".into()).is_err());
        crumbs.configure("item", ("Items", "#items").into()).unwrap();
        assert!(crumbs.render().as_str().contains("Items"));
    }
}
