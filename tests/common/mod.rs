//! Shared test utilities for recently integration harnesses.
//!
//! Import everything you need via `mod common; use common::*;` at the top of
//! each harness file.

#![allow(dead_code)]

pub mod builders;

pub use assertions::*;
pub use builders::*;
pub use fixtures::*;

use recently::{extract_with_sink, Diagnostic, Entry};

/// Extract `xml` with a collecting sink and return both streams.
pub fn extract_collecting(xml: &str) -> (Vec<Entry>, Vec<Diagnostic>) {
    let mut diagnostics = Vec::new();
    let entries =
        extract_with_sink(xml.as_bytes(), TEST_USER, TEST_SOURCE, &mut diagnostics).collect();
    (entries, diagnostics)
}

/// Only the primary entries, in emission order.
pub fn primaries(entries: &[Entry]) -> Vec<&recently::BookmarkRecord> {
    entries
        .iter()
        .filter(|e| e.is_primary())
        .map(|e| e.bookmark())
        .collect()
}
