//! recently: read freedesktop.org `recently-used.xbel` files.
//!
//! Parsing lives in [`recently_core`]; this crate adds the pieces the
//! command-line tool needs around it and re-exports the core so integration
//! tests can import everything from one place.
//!
//! # Architecture
//!
//! ```text
//! source::load ──► recently_core::extract ──► render ──► stdout
//!                          │
//!                          └──► TracingSink ──► stderr / log file
//! ```

pub mod render;
pub mod source;

pub use recently_core::config::{Config, OutputConfig};
pub use recently_core::{
    extract, extract_with_sink, normalize, ApplicationRecord, BookmarkRecord, Diagnostic,
    DiagnosticSink, DocumentError, Entries, Entry, IconRecord, Timestamp, TimestampError,
    TracingSink, BOOKMARK_NS, MIME_NS,
};
