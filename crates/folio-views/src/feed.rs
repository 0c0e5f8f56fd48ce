//! Atom feed of recently added items.

use folio_core::{RenderRequest, RenderResult};
use folio_streaming::{Feed, FeedEntry, FeedResponder, Response};

use crate::context::ViewContext;
use crate::services::Services;
use crate::view::View;

/// Path of the feed document below the site base URL.
pub const FEED_PATH: &str = "feed";

/// Input: `{"items": [{"id", "title", "abstract"?, "added_time"}]}`, newest first.
#[derive(Debug, Clone, Copy, Default)]
pub struct FeedView;

impl View for FeedView {
    fn name(&self) -> &'static str {
        "feed"
    }

    fn main(&self, services: &Services, request: &RenderRequest) -> RenderResult<Response> {
        let mut ctx = ViewContext::new(self.name());
        let entries = FeedEntry::from_records(request.array("items")?)?;
        let feed = Feed::for_site(&services.config.site, FEED_PATH);
        ctx.send(FeedResponder::new(feed, entries))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use folio_streaming::ATOM_CONTENT_TYPE;
    use serde_json::json;

    #[test]
    fn test_feed_from_items() {
        let request = RenderRequest::from_value(json!({"items": [{
            "title": "T",
            "abstract": "A",
            "id": 7,
            "added_time": "2024-01-01T00:00:00Z"
        }]}))
        .unwrap();

        let response = FeedView.main(&Services::default(), &request).unwrap();
        assert_eq!(response.content_type(), Some(ATOM_CONTENT_TYPE));

        let xml = response.text().unwrap();
        assert_eq!(xml.matches("<entry>").count(), 1);
        assert!(xml.contains("#item/7</id>"));
        assert!(xml.contains("<title>T</title>"));
        assert!(xml.contains("<content type=\"html\">A</content>"));
        assert!(xml.contains("<updated>2024-01-01T00:00:00+00:00</updated>"));
        assert!(xml.contains("<title>I, Librarian</title>"));
    }

    #[test]
    fn test_missing_items_key() {
        let err = FeedView
            .main(&Services::default(), &RenderRequest::empty())
            .unwrap_err();
        assert!(matches!(err, folio_core::RenderError::MissingField(key) if key == "items"));
    }
}
