//! Core types for the view rendering contract.
//!
//! This crate provides the pieces every view and responder shares:
//! - `RenderError` - Error taxonomy (configuration, lifecycle, upstream data)
//! - `RenderRequest` - Read-only structured input handed to a view
//! - `ViewState` / `TimingContext` - Per-invocation lifecycle tracking
//! - `RenderConfig` - Site, locale, feature and streaming settings
//! - `format` / `sanitize` - Pure formatting and escaping helpers
//! - `Translator` / `DateLocalizer` - Collaborator services

mod config;
mod error;
mod lifecycle;
mod request;
mod services;

pub mod format;
pub mod sanitize;

pub use config::*;
pub use error::*;
pub use lifecycle::*;
pub use request::*;
pub use services::*;
