//! Modal dialog widget.

use folio_core::{RenderError, RenderResult};

use crate::attributes::Attributes;
use crate::fragment::Fragment;
use crate::value::WidgetValue;
use crate::widget::{unknown_field, Widget, WidgetKind};

const KIND: WidgetKind = WidgetKind::Modal;
const SIZES: [&str; 3] = ["sm", "lg", "xl"];

/// A hidden dialog, opened client-side.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Modal {
    attrs: Attributes,
    header: Fragment,
    body: Fragment,
    buttons: Vec<Fragment>,
    size: Option<String>,
}

impl Modal {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn id(mut self, id: &str) -> Self {
        self.attrs.set_id(id);
        self
    }

    pub fn header(mut self, header: Fragment) -> Self {
        self.header = header;
        self
    }

    pub fn body(mut self, body: Fragment) -> Self {
        self.body = body;
        self
    }

    /// Append a footer button.
    pub fn button(mut self, button: Fragment) -> Self {
        self.buttons.push(button);
        self
    }
}

impl Widget for Modal {
    fn kind(&self) -> WidgetKind {
        KIND
    }

    fn configure(&mut self, field: &str, value: WidgetValue) -> RenderResult<()> {
        match field {
            "header" => self.header = value.into_markup(KIND.name(), field)?,
            "body" => self.body = value.into_markup(KIND.name(), field)?,
            "button" => self.buttons.push(value.into_markup(KIND.name(), field)?),
            "size" => {
                let size = value.into_text(KIND.name(), field)?;
                if !SIZES.contains(&size.as_str()) {
                    return Err(RenderError::invalid_value(
                        KIND.name(),
                        field,
                        format!("unsupported size '{}'", size),
                    ));
                }
                self.size = Some(size);
            }
            "id" | "class" | "attr" => self.attrs.configure(KIND.name(), field, value)?,
            _ => return Err(unknown_field(KIND, field)),
        }
        Ok(())
    }

    fn render(&self) -> Fragment {
        let dialog_class = match &self.size {
            Some(size) => format!("modal-dialog modal-{}", size),
            None => "modal-dialog".to_string(),
        };
        let buttons: Fragment = self.buttons.iter().cloned().collect();

        let mut html = format!(
            r#"<div tabindex="-1" role="dialog" aria-hidden="true"{}>"#,
            self.attrs.render(&["modal", "fade"])
        );
        html.push_str(&format!(
            r#"<div class="{}" role="document"><div class="modal-content">"#,
            dialog_class
        ));
        html.push_str(&format!(
            concat!(
                r#"<div class="modal-header"><h5 class="modal-title">{}</h5>"#,
                r#"<button type="button" class="close" data-dismiss="modal" aria-label="Close">"#,
                r#"<span aria-hidden="true">&times;</span></button></div>"#
            ),
            self.header
        ));
        html.push_str(&format!(r#"<div class="modal-body">{}</div>"#, self.body));
        if !buttons.is_empty() {
            html.push_str(&format!(r#"<div class="modal-footer">{}</div>"#, buttons));
        }
        html.push_str("</div></div></div>");

        Fragment::new(html)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Button;

    #[test]
    fn test_render_structure() {
        let close = Button::new().text("Close").attr("data-dismiss", "modal").render();
        let html = Modal::new()
            .id("rename-tag")
            .header(Fragment::text("Rename tag"))
            .body(Fragment::new("<form></form>"))
            .button(close.clone())
            .render();

        let s = html.as_str();
        assert!(s.starts_with(
            r#"<div tabindex="-1" role="dialog" aria-hidden="true" id="rename-tag" class="modal fade">"#
        ));
        assert!(s.contains(r#"<h5 class="modal-title">Rename tag</h5>"#));
        assert!(s.contains(r#"<div class="modal-body"><form></form></div>"#));
        assert!(s.contains(&format!(r#"<div class="modal-footer">{}</div>"#, close)));
        assert!(s.ends_with("</div></div></div>"));
    }

    #[test]
    fn test_size() {
        let mut modal = Modal::new();
        modal.configure("size", "lg".into()).unwrap();
        assert!(modal.render().as_str().contains(r#"class="modal-dialog modal-lg""#));
        assert!(modal.configure("size", "huge".into()).is_err());
    }

    #[test]
    fn test_no_footer_without_buttons() {
        assert!(!Modal::new().render().as_str().contains("modal-footer"));
    }
}
