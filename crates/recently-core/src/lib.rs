//! recently-core: parser for freedesktop.org `recently-used.xbel` files.
//!
//! GNOME-based desktops record recently opened resources in an XBEL
//! bookmark file extended with desktop-bookmark metadata (groups, icon,
//! applications, private marker, MIME type). This crate turns the raw bytes
//! of one such file into a lazy stream of typed [`Entry`] values.
//!
//! # Architecture
//!
//! ```text
//! bytes ──► Document (hardened XML tree) ──► Entries (iterator)
//!                                               │
//!                         timestamp::normalize ◄┤
//!                                               └──► DiagnosticSink
//! ```
//!
//! Nothing in this crate fails loudly on bad input. A document that is not
//! well-formed yields no entries; a malformed timestamp becomes
//! [`Timestamp::Unknown`]. Both are reported to the [`DiagnosticSink`]
//! supplied by the caller.

pub mod config;
pub mod diagnostics;
pub mod document;
pub mod error;
pub mod extract;
pub mod timestamp;
pub mod types;

pub use diagnostics::{Diagnostic, DiagnosticSink, TracingSink};
pub use error::{DocumentError, TimestampError};
pub use extract::{extract, extract_with_sink, Entries};
pub use timestamp::{normalize, Timestamp};
pub use types::{ApplicationRecord, BookmarkRecord, Entry, IconRecord};

/// Namespace URI for the desktop-bookmark metadata elements.
pub const BOOKMARK_NS: &str = "http://www.freedesktop.org/standards/desktop-bookmarks";

/// Namespace URI for the shared-mime-info `mime-type` element.
pub const MIME_NS: &str = "http://www.freedesktop.org/standards/shared-mime-info";
