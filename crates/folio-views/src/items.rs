//! Item listing.

use serde::Serialize;
use serde_json::{Map, Value};

use folio_core::format::format_bytes;
use folio_core::sanitize::escape_html;
use folio_core::{as_record, field_i64, field_str, RenderRequest, RenderResult};
use folio_streaming::{BufferedResponder, Response};
use folio_widgets::{Breadcrumbs, Fragment, Table, Widget};

use crate::context::ViewContext;
use crate::services::Services;
use crate::view::View;

/// Display-ready copy of one item record.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ItemRow {
    pub id: i64,
    pub title: String,
    /// Localized date of `added_time`.
    pub added_date: String,
    /// Localized time of `added_time`.
    pub added_time: String,
    /// Formatted file size, empty when the item has no file.
    pub size: String,
}

impl ItemRow {
    fn from_record(services: &Services, record: &Map<String, Value>) -> RenderResult<Self> {
        let added = field_str(record, "added_time")?;
        let size = match record.get("filesize") {
            Some(Value::Null) | None => String::new(),
            Some(_) => format_bytes(field_i64(record, "filesize")?.max(0) as u64),
        };

        Ok(Self {
            id: field_i64(record, "id")?,
            title: field_str(record, "title")?.to_string(),
            added_date: services.dates.to_user_date(added)?,
            added_time: services.dates.to_user_time(added)?,
            size,
        })
    }
}

/// Breadcrumbs plus an item table.
///
/// Input: `{"items": [{"id", "title", "added_time", "filesize"?}]}`. Adds
/// the field `rows` holding localized copies; the input is left as is.
#[derive(Debug, Clone, Copy, Default)]
pub struct ItemsView;

impl View for ItemsView {
    fn name(&self) -> &'static str {
        "items"
    }

    fn main(&self, services: &Services, request: &RenderRequest) -> RenderResult<Response> {
        let mut ctx = ViewContext::new(self.name());

        let rows = request
            .array("items")?
            .iter()
            .map(|value| ItemRow::from_record(services, as_record(value, "item")?))
            .collect::<RenderResult<Vec<_>>>()?;

        let breadcrumbs = ctx
            .create::<Breadcrumbs>()?
            .item(&services.translate("Dashboard"), "#dashboard/main")
            .item(&services.translate("Items"), "#items/main")
            .render();

        let head = [
            services.translate("Title"),
            services.translate("Added"),
            services.translate("Size"),
        ];
        let head: Vec<&str> = head.iter().map(String::as_str).collect();
        let table = rows.iter().fold(
            ctx.create::<Table>()?.class("table-hover").head(&head),
            |table, row| {
                table.body_row(vec![
                    Fragment::new(format!(
                        r##"<a href="#item/{}">{}</a>"##,
                        row.id,
                        escape_html(&row.title)
                    )),
                    Fragment::text(&format!("{} {}", row.added_date, row.added_time)),
                    Fragment::text(&row.size),
                ])
            },
        );

        ctx.append(&breadcrumbs)?;
        ctx.append(&table.render())?;
        ctx.insert("rows", &rows)?;
        ctx.send(BufferedResponder::json())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn request() -> RenderRequest {
        RenderRequest::from_value(json!({"items": [
            {"id": 7, "title": "On <growth>", "added_time": "2024-03-05 14:07:00", "filesize": 1536},
            {"id": 8, "title": "No file", "added_time": "2024-03-06", "filesize": null}
        ]}))
        .unwrap()
    }

    #[test]
    fn test_rows_are_localized() {
        let original = request();
        let request = original.clone();
        let response = ItemsView.main(&Services::default(), &request).unwrap();
        let body: Value = response.json().unwrap();

        assert_eq!(body["rows"][0]["added_date"], "Mar 5, 2024");
        assert_eq!(body["rows"][0]["added_time"], "14:07");
        assert_eq!(body["rows"][0]["size"], "1.5 kB");
        assert_eq!(body["rows"][1]["size"], "");
        assert_eq!(request, original);
    }

    #[test]
    fn test_html_has_breadcrumbs_then_table() {
        let response = ItemsView.main(&Services::default(), &request()).unwrap();
        let body: Value = response.json().unwrap();
        let html = body["html"].as_str().unwrap();

        assert!(html.starts_with(r#"<nav aria-label="breadcrumb">"#));
        assert!(html.contains(r##"<a href="#item/7">On &lt;growth&gt;</a>"##));
        assert!(html.contains("<td>Mar 5, 2024 14:07</td>"));
    }

    #[test]
    fn test_bad_date_is_upstream_error() {
        let request = RenderRequest::from_value(json!({"items": [
            {"id": 1, "title": "x", "added_time": "yesterday"}
        ]}))
        .unwrap();
        let err = ItemsView.main(&Services::default(), &request).unwrap_err();
        assert_eq!(err.kind(), folio_core::ErrorKind::UpstreamData);
    }
}
