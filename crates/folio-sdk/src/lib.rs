//! Public SDK for the folio view layer.
//!
//! This crate re-exports the whole stack:
//!
//! ```ignore
//! use folio_sdk::prelude::*;
//!
//! let services = Services::from_config(RenderConfig::load("folio.toml")?)?;
//! let request = RenderRequest::from_json(body)?;
//!
//! let response = RequirementsView.main(&services, &request)?;
//! response.write_to(&mut socket)?;
//! ```

pub use folio_core;
pub use folio_streaming;
pub use folio_views;
pub use folio_widgets;

/// Prelude for convenient imports.
pub mod prelude {
    pub use folio_core::format::{compare_versions, format_bytes, Requirement, RequirementStatus};
    pub use folio_core::*;
    pub use folio_streaming::*;
    pub use folio_views::*;
    pub use folio_widgets::*;
}
