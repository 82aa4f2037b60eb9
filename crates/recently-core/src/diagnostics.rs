//! Diagnostics raised while extracting a bookmark file.
//!
//! The extractor reports problems through a caller-supplied
//! [`DiagnosticSink`] instead of a process-wide logger. [`TracingSink`]
//! forwards them as `tracing` events; a `Vec<Diagnostic>` collects them.

use crate::error::{DocumentError, TimestampError};

/// A non-fatal problem found in one bookmark file.
#[derive(Debug)]
pub enum Diagnostic {
    /// The file is not well-formed XML (or carries a DTD) and was skipped.
    MalformedDocument {
        source_path: String,
        error: DocumentError,
    },
    /// A timestamp attribute did not parse and was replaced by `Unknown`.
    MalformedTimestamp { raw: String, error: TimestampError },
}

impl Diagnostic {
    /// User-facing summary, logged at warning level.
    pub fn summary(&self) -> String {
        match self {
            Diagnostic::MalformedDocument { source_path, .. } => {
                format!("Could not parse {source_path}, skipping")
            }
            Diagnostic::MalformedTimestamp { raw, .. } => {
                format!("Could not parse timestamp {raw}, using unknown instead")
            }
        }
    }

    /// Underlying failure detail, logged at debug level.
    pub fn detail(&self) -> String {
        match self {
            Diagnostic::MalformedDocument { error, .. } => error.to_string(),
            Diagnostic::MalformedTimestamp { error, .. } => error.to_string(),
        }
    }
}

/// Receiver for diagnostics produced during extraction.
pub trait DiagnosticSink {
    fn record(&mut self, diagnostic: Diagnostic);
}

impl<S: DiagnosticSink + ?Sized> DiagnosticSink for &mut S {
    fn record(&mut self, diagnostic: Diagnostic) {
        (**self).record(diagnostic);
    }
}

impl DiagnosticSink for Vec<Diagnostic> {
    fn record(&mut self, diagnostic: Diagnostic) {
        self.push(diagnostic);
    }
}

/// Emits each diagnostic as a `warn!` summary followed by a `debug!` detail.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingSink;

impl DiagnosticSink for TracingSink {
    fn record(&mut self, diagnostic: Diagnostic) {
        match &diagnostic {
            Diagnostic::MalformedDocument { source_path, error } => {
                tracing::warn!(source = %source_path, "{}", diagnostic.summary());
                tracing::debug!(source = %source_path, error = ?error, "{error}");
            }
            Diagnostic::MalformedTimestamp { raw, error } => {
                tracing::warn!(raw = %raw, "{}", diagnostic.summary());
                tracing::debug!(raw = %raw, error = ?error, "{error}");
            }
        }
    }
}
