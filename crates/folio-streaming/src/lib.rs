//! Response envelopes and terminal responders.
//!
//! A view accumulates output in an `Envelope` and hands it to exactly one
//! `Responder`:
//! - `BufferedResponder` - Whole body at once, JSON envelope or HTML
//! - `ChunkedResponder` - Incremental writes to an open stream
//! - `FileResponder` - File download with inline/attachment disposition
//! - `FeedResponder` - Atom feed document
//!
//! `Shell` wraps fragments into a full HTML document for page responses.

mod buffered;
mod chunked;
mod envelope;
mod feed;
mod file;
mod flush;
mod response;
mod shell;

pub use buffered::*;
pub use chunked::*;
pub use envelope::*;
pub use feed::*;
pub use file::*;
pub use flush::*;
pub use response::*;
pub use shell::*;
