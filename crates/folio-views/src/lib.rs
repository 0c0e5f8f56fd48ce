//! Request-scoped views.
//!
//! A view reads a [`RenderRequest`](folio_core::RenderRequest), builds
//! widget fragments through its [`ViewContext`], and finishes with exactly
//! one terminal send.
//!
//! ```ignore
//! let services = Services::from_config(RenderConfig::default())?;
//! let request = RenderRequest::from_json(r#"{"tags": []}"#)?;
//! let response = TagsView.main(&services, &request)?;
//! ```

mod context;
mod download;
mod feed;
mod import;
mod items;
mod requirements;
mod services;
mod signup;
mod tags;
mod view;

pub use context::*;
pub use download::*;
pub use feed::*;
pub use import::*;
pub use items::*;
pub use requirements::*;
pub use services::*;
pub use signup::*;
pub use tags::*;
pub use view::*;
