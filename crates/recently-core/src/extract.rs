//! Bookmark extractor: turns one file's bytes into a lazy [`Entry`] stream.
//!
//! Nothing is parsed until the first call to [`Iterator::next`]. The whole
//! document is then parsed into a [`Document`]; if that fails, a
//! [`Diagnostic::MalformedDocument`] is recorded and the stream is empty.
//! Otherwise each pull advances to the next `bookmark` element in document
//! order and yields its primary record followed by its grouped icon and
//! application records.

use std::collections::VecDeque;
use std::iter::FusedIterator;
use std::sync::Arc;

use crate::diagnostics::{Diagnostic, DiagnosticSink, TracingSink};
use crate::document::{Document, NodeId, Step};
use crate::timestamp::normalize;
use crate::types::{ApplicationRecord, BookmarkRecord, Entry, IconRecord};
use crate::{BOOKMARK_NS, MIME_NS};

const BOOKMARK: Step = Step::plain("bookmark");
const INFO: Step = Step::plain("info");
const METADATA: Step = Step::plain("metadata");

const MIME_TYPE_PATH: &[Step] = &[INFO, METADATA, Step::qualified(MIME_NS, "mime-type")];
const GROUP_PATH: &[Step] = &[
    INFO,
    METADATA,
    Step::qualified(BOOKMARK_NS, "groups"),
    Step::qualified(BOOKMARK_NS, "group"),
];
const PRIVATE_PATH: &[Step] = &[INFO, METADATA, Step::qualified(BOOKMARK_NS, "private")];
const ICON_PATH: &[Step] = &[INFO, METADATA, Step::qualified(BOOKMARK_NS, "icon")];
const APPLICATION_PATH: &[Step] = &[
    INFO,
    METADATA,
    Step::qualified(BOOKMARK_NS, "applications"),
    Step::qualified(BOOKMARK_NS, "application"),
];

/// Extract entries from `content`, reporting diagnostics through `tracing`.
pub fn extract<'a>(
    content: &'a [u8],
    owning_user: &str,
    source_path: &str,
) -> Entries<'a, TracingSink> {
    extract_with_sink(content, owning_user, source_path, TracingSink)
}

/// Extract entries from `content`, reporting diagnostics to `sink`.
///
/// Pass `&mut sink` to keep ownership of a collecting sink.
pub fn extract_with_sink<'a, S: DiagnosticSink>(
    content: &'a [u8],
    owning_user: &str,
    source_path: &str,
    sink: S,
) -> Entries<'a, S> {
    Entries {
        state: State::Unparsed(content),
        owning_user: owning_user.to_string(),
        source_path: source_path.to_string(),
        sink,
        pending: VecDeque::new(),
    }
}

/// Single-pass iterator over the entries of one bookmark file.
pub struct Entries<'a, S> {
    state: State<'a>,
    owning_user: String,
    source_path: String,
    sink: S,
    pending: VecDeque<Entry>,
}

enum State<'a> {
    Unparsed(&'a [u8]),
    Walking { doc: Document, cursor: NodeId },
    Finished,
}

impl<'a, S: DiagnosticSink> Entries<'a, S> {
    /// Give back the sink, e.g. to inspect collected diagnostics.
    pub fn into_sink(self) -> S {
        self.sink
    }

    fn queue_bookmark(&mut self, doc: &Document, node: NodeId) {
        let element = doc.element(node);

        let mime_types = doc.find_all(node, MIME_TYPE_PATH);
        let mime_type = match mime_types.as_slice() {
            [only] => doc.element(*only).attribute("type").map(str::to_string),
            _ => None,
        };

        let groups = doc
            .find_all(node, GROUP_PATH)
            .iter()
            .map(|&id| doc.element(id).text.as_str())
            .collect::<Vec<_>>()
            .join(", ");

        let is_private = !doc.find_all(node, PRIVATE_PATH).is_empty();

        let added = normalize(element.attribute("added"), &mut self.sink);
        let modified = normalize(element.attribute("modified"), &mut self.sink);
        let visited = normalize(element.attribute("visited"), &mut self.sink);

        let bookmark = Arc::new(BookmarkRecord {
            ts: visited,
            owning_user: self.owning_user.clone(),
            source_path: self.source_path.clone(),
            href: element.attribute("href").map(str::to_string),
            added,
            modified,
            visited,
            mime_type,
            groups,
            is_private,
        });
        self.pending.push_back(Entry::Primary(bookmark.clone()));

        for id in doc.find_all(node, ICON_PATH) {
            let icon = doc.element(id);
            self.pending.push_back(Entry::Icon(
                bookmark.clone(),
                IconRecord {
                    icon_type: icon.attribute("type").map(str::to_string),
                    href: icon.attribute("href").map(str::to_string),
                    name: icon.attribute("name").map(str::to_string),
                },
            ));
        }

        for id in doc.find_all(node, APPLICATION_PATH) {
            let app = doc.element(id);
            let last_modified = normalize(app.attribute("modified"), &mut self.sink);
            self.pending.push_back(Entry::Application(
                bookmark.clone(),
                ApplicationRecord {
                    last_modified,
                    name: app.attribute("name").map(str::to_string),
                    exec: app.attribute("exec").map(str::to_string),
                    count: app.attribute("count").map(str::to_string),
                },
            ));
        }
    }
}

impl<'a, S: DiagnosticSink> Iterator for Entries<'a, S> {
    type Item = Entry;

    fn next(&mut self) -> Option<Entry> {
        loop {
            if let Some(entry) = self.pending.pop_front() {
                return Some(entry);
            }
            match std::mem::replace(&mut self.state, State::Finished) {
                State::Unparsed(content) => match Document::parse(content) {
                    Ok(doc) => self.state = State::Walking { doc, cursor: 0 },
                    Err(error) => {
                        self.sink.record(Diagnostic::MalformedDocument {
                            source_path: self.source_path.clone(),
                            error,
                        });
                        return None;
                    }
                },
                State::Walking { doc, cursor } => {
                    let node = doc.next_matching(cursor, &BOOKMARK)?;
                    self.queue_bookmark(&doc, node);
                    self.state = State::Walking {
                        doc,
                        cursor: node + 1,
                    };
                }
                State::Finished => return None,
            }
        }
    }
}

impl<'a, S: DiagnosticSink> FusedIterator for Entries<'a, S> {}
