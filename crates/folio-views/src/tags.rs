//! Tag browser.

use folio_core::format::UNTAGGED_ID;
use folio_core::sanitize::url_query;
use folio_core::{as_record, field_i64, field_str, RenderRequest, RenderResult};
use folio_streaming::{BufferedResponder, Response};
use folio_widgets::{Button, ButtonType, Card, Form, Fragment, Input, LinkList, Modal, Widget};

use crate::context::ViewContext;
use crate::services::Services;
use crate::view::View;

/// Id of the rename dialog, referenced by client-side handlers.
pub const RENAME_MODAL_ID: &str = "modal-rename-tag";

const RENAME_FORM_ID: &str = "form-rename-tag";

/// One tag record.
#[derive(Debug, Clone, PartialEq)]
pub struct Tag {
    pub id: i64,
    pub name: String,
}

/// Tag list with an untagged filter and a rename dialog.
///
/// Input: `{"tags": [{"id", "tag"}]}`. The `filter` sub-view renders just
/// the list, optionally narrowed by `q`.
#[derive(Debug, Clone, Copy, Default)]
pub struct TagsView;

impl TagsView {
    /// Refresh only the tag list, keeping tags whose name contains `q`.
    pub fn filter(&self, services: &Services, request: &RenderRequest) -> RenderResult<Response> {
        let mut ctx = ViewContext::new("tags.filter");

        let needle = request.opt_str("q").unwrap_or_default().to_lowercase();
        let tags: Vec<Tag> = Self::tags(request)?
            .into_iter()
            .filter(|tag| tag.name.to_lowercase().contains(&needle))
            .collect();

        let list = Self::tag_list(&ctx, services, &tags)?;
        ctx.append(&list)?;
        ctx.insert("count", tags.len())?;
        ctx.send(BufferedResponder::json())
    }

    fn tags(request: &RenderRequest) -> RenderResult<Vec<Tag>> {
        request
            .array("tags")?
            .iter()
            .map(|value| {
                let record = as_record(value, "tag")?;
                Ok(Tag {
                    id: field_i64(record, "id")?,
                    name: field_str(record, "tag")?.to_string(),
                })
            })
            .collect()
    }

    fn tag_list(ctx: &ViewContext, services: &Services, tags: &[Tag]) -> RenderResult<Fragment> {
        let empty = ctx
            .create::<LinkList>()?
            .placeholder(&services.translate("No tags"));
        let list = tags
            .iter()
            .fold(empty, |list, tag| list.link(&tag.name, &items_href(tag.id)));
        Ok(list.render())
    }

    fn rename_modal(ctx: &ViewContext, services: &Services) -> RenderResult<Fragment> {
        let mut tag_id = ctx.create::<Input>()?.name("tag_id");
        tag_id.configure("type", "hidden".into())?;

        let new_name = ctx
            .create::<Input>()?
            .name("new_tag")
            .label(&services.translate("New name"))
            .required()
            .render();

        let form = ctx
            .create::<Form>()?
            .id(RENAME_FORM_ID)
            .action("tags/rename")
            .html(Fragment::concat([tag_id.render(), new_name]))
            .render();

        let save = ctx
            .create::<Button>()?
            .context("primary")
            .button_type(ButtonType::Submit)
            .attr("form", RENAME_FORM_ID)
            .text(&services.translate("Save"))
            .render();

        Ok(ctx
            .create::<Modal>()?
            .id(RENAME_MODAL_ID)
            .header(Fragment::text(&services.translate("Rename tag")))
            .body(form)
            .button(save)
            .render())
    }
}

impl View for TagsView {
    fn name(&self) -> &'static str {
        "tags"
    }

    fn main(&self, services: &Services, request: &RenderRequest) -> RenderResult<Response> {
        let mut ctx = ViewContext::new(self.name());
        let tags = Self::tags(request)?;

        let untagged = ctx
            .create::<Button>()?
            .context("outline-secondary")
            .class("mb-2")
            .attr("data-tag", UNTAGGED_ID.to_string())
            .text(&services.translate("Untagged"))
            .render();
        let list = Self::tag_list(&ctx, services, &tags)?;

        let card = ctx
            .create::<Card>()?
            .header(Fragment::text(&services.translate("Tags")))
            .body(Fragment::concat([untagged, list]))
            .render();
        let modal = Self::rename_modal(&ctx, services)?;

        ctx.append(&card)?;
        ctx.append(&modal)?;
        ctx.insert("count", tags.len())?;
        ctx.send(BufferedResponder::json())
    }
}

fn items_href(tag_id: i64) -> String {
    format!("#items/main?{}", url_query(&[("tag", &tag_id.to_string())]))
}
