//! Atom feed documents.

use chrono::{DateTime, FixedOffset, SecondsFormat, Utc};
use http::StatusCode;
use serde_json::{Map, Value};
use tracing::debug;

use folio_core::sanitize::escape_xml;
use folio_core::{as_record, field_i64, field_str, parse_timestamp, RenderResult, SiteConfig};

use crate::envelope::{Payload, Responder};
use crate::response::Response;

/// Content type of Atom documents.
pub const ATOM_CONTENT_TYPE: &str = "application/atom+xml; charset=utf-8";

/// Feed-level metadata.
#[derive(Debug, Clone, PartialEq)]
pub struct Feed {
    pub title: String,
    /// Permanent feed identifier (an absolute URL).
    pub id: String,
    /// URL of the feed document itself.
    pub self_link: String,
    /// URL of the site the entries link into.
    pub site_link: String,
    pub author: String,
}

impl Feed {
    /// Feed for the configured site, served at `path` below the base URL.
    pub fn for_site(site: &SiteConfig, path: &str) -> Self {
        let base = if site.base_url.ends_with('/') {
            site.base_url.clone()
        } else {
            format!("{}/", site.base_url)
        };
        let self_link = format!("{}{}", base, path.trim_start_matches('/'));
        Self {
            title: site.title.clone(),
            id: self_link.clone(),
            self_link,
            site_link: base,
            author: site.author.clone(),
        }
    }

    /// Link to one item on the site.
    pub fn item_link(&self, id: i64) -> String {
        format!("{}#item/{}", self.site_link, id)
    }
}

/// One feed entry.
#[derive(Debug, Clone, PartialEq)]
pub struct FeedEntry {
    pub id: i64,
    pub title: String,
    /// HTML content, escaped into the document.
    pub content: String,
    pub updated: DateTime<FixedOffset>,
}

impl FeedEntry {
    /// Build an entry from a record with `id`, `title`, `abstract` and `added_time`.
    ///
    /// A missing abstract yields empty content.
    pub fn from_record(record: &Map<String, Value>) -> RenderResult<Self> {
        Ok(Self {
            id: field_i64(record, "id")?,
            title: field_str(record, "title")?.to_string(),
            content: record
                .get("abstract")
                .and_then(Value::as_str)
                .unwrap_or_default()
                .to_string(),
            updated: parse_timestamp(field_str(record, "added_time")?)?,
        })
    }

    /// Build entries from a list of records, in order.
    pub fn from_records(records: &[Value]) -> RenderResult<Vec<Self>> {
        records
            .iter()
            .map(|value| Self::from_record(as_record(value, "feed entry")?))
            .collect()
    }
}

/// Sends an Atom document built from the feed and its entries.
///
/// Accumulated envelope content is ignored.
#[derive(Debug, Clone)]
pub struct FeedResponder {
    feed: Feed,
    entries: Vec<FeedEntry>,
    fallback_updated: DateTime<FixedOffset>,
}

impl FeedResponder {
    pub fn new(feed: Feed, entries: Vec<FeedEntry>) -> Self {
        Self {
            feed,
            entries,
            fallback_updated: Utc::now().fixed_offset(),
        }
    }

    /// Feed timestamp used when there are no entries (now by default).
    pub fn with_fallback_updated(mut self, updated: DateTime<FixedOffset>) -> Self {
        self.fallback_updated = updated;
        self
    }

    /// Feed timestamp: the first entry's, or the fallback when empty.
    pub fn updated(&self) -> DateTime<FixedOffset> {
        self.entries
            .first()
            .map(|entry| entry.updated)
            .unwrap_or(self.fallback_updated)
    }

    /// Render the complete Atom document.
    pub fn render_document(&self) -> String {
        let feed = &self.feed;
        let mut xml = String::from("<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n");
        xml.push_str("<feed xmlns=\"http://www.w3.org/2005/Atom\">\n");
        xml.push_str(&format!("<title>{}</title>\n", escape_xml(&feed.title)));
        xml.push_str(&format!("<id>{}</id>\n", escape_xml(&feed.id)));
        xml.push_str(&format!(
            "<link rel=\"self\" type=\"application/atom+xml\" href=\"{}\"/>\n",
            escape_xml(&feed.self_link)
        ));
        xml.push_str(&format!(
            "<link rel=\"alternate\" type=\"text/html\" href=\"{}\"/>\n",
            escape_xml(&feed.site_link)
        ));
        xml.push_str(&format!("<updated>{}</updated>\n", timestamp(&self.updated())));
        xml.push_str(&format!(
            "<author><name>{}</name></author>\n",
            escape_xml(&feed.author)
        ));

        for entry in &self.entries {
            let link = escape_xml(&feed.item_link(entry.id));
            xml.push_str("<entry>\n");
            xml.push_str(&format!("<id>{}</id>\n", link));
            xml.push_str(&format!(
                "<link rel=\"alternate\" type=\"text/html\" href=\"{}\"/>\n",
                link
            ));
            xml.push_str(&format!("<title>{}</title>\n", escape_xml(&entry.title)));
            xml.push_str(&format!("<updated>{}</updated>\n", timestamp(&entry.updated)));
            xml.push_str(&format!(
                "<content type=\"html\">{}</content>\n",
                escape_xml(&entry.content)
            ));
            xml.push_str("</entry>\n");
        }

        xml.push_str("</feed>\n");
        xml
    }
}

impl Responder for FeedResponder {
    fn respond(self, _payload: Payload) -> RenderResult<Response> {
        let document = self.render_document();
        debug!(
            entries = self.entries.len(),
            bytes = document.len(),
            "feed response"
        );
        Response::with_body(StatusCode::OK, ATOM_CONTENT_TYPE, document.into_bytes())
    }
}

/// RFC 3339 timestamp with an explicit offset, e.g. `2024-01-01T00:00:00+00:00`.
fn timestamp(time: &DateTime<FixedOffset>) -> String {
    time.to_rfc3339_opts(SecondsFormat::Secs, false)
}
