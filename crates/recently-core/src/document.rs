//! Hardened in-memory XML tree for one bookmark file.
//!
//! Built on `quick-xml`'s namespace-aware reader. The reader never fetches
//! external resources and only resolves the predefined entities and
//! character references; on top of that a DOCTYPE is refused outright, so
//! no DTD, internal subset or external entity is ever processed.
//!
//! `quick-xml` leaves several lexical rules of XML 1.0 to the caller, so
//! names, attribute values, character data and comments are checked here as
//! they are read. Any well-formedness problem rejects the whole document.
//! Nodes are stored
//! in an arena in document (pre-)order, which makes "every `bookmark`
//! element anywhere, in document order" a forward scan.

use quick_xml::events::{BytesStart, Event};
use quick_xml::name::ResolveResult;
use quick_xml::NsReader;

use crate::error::DocumentError;

/// Arena index of a node.
pub type NodeId = usize;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Element {
    /// Resolved namespace URI, `None` when unqualified.
    pub namespace: Option<String>,
    /// Local name without prefix.
    pub name: String,
    /// Attributes by qualified name, in source order.
    pub attributes: Vec<(String, String)>,
    /// Character data before the first child element.
    pub text: String,
    pub children: Vec<NodeId>,
}

impl Element {
    pub fn attribute(&self, name: &str) -> Option<&str> {
        self.attributes
            .iter()
            .find(|(key, _)| key == name)
            .map(|(_, value)| value.as_str())
    }

    fn matches(&self, step: &Step) -> bool {
        self.name == step.name && self.namespace.as_deref() == step.namespace
    }
}

/// One location step of a child path: an element name in a namespace.
#[derive(Debug, Clone, Copy)]
pub struct Step {
    pub namespace: Option<&'static str>,
    pub name: &'static str,
}

impl Step {
    pub const fn plain(name: &'static str) -> Self {
        Self {
            namespace: None,
            name,
        }
    }

    pub const fn qualified(namespace: &'static str, name: &'static str) -> Self {
        Self {
            namespace: Some(namespace),
            name,
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct Document {
    nodes: Vec<Element>,
}

impl Document {
    /// Parse `content` into a tree, rejecting anything not well-formed.
    pub fn parse(content: &[u8]) -> Result<Self, DocumentError> {
        let mut reader = NsReader::from_reader(content);
        let mut buf = Vec::new();
        let mut nodes: Vec<Element> = Vec::new();
        let mut open: Vec<NodeId> = Vec::new();
        let mut root_closed = false;

        loop {
            let (resolved, event) = reader.read_resolved_event_into(&mut buf)?;
            let namespace = namespace_of(resolved)?;
            match event {
                Event::Start(start) => {
                    let id = open_element(&mut nodes, &open, root_closed, namespace, &start)?;
                    open.push(id);
                }
                Event::Empty(start) => {
                    open_element(&mut nodes, &open, root_closed, namespace, &start)?;
                    if open.is_empty() {
                        root_closed = true;
                    }
                }
                Event::End(end) => {
                    if open.pop().is_none() {
                        let qname = end.name();
                        let name = std::str::from_utf8(qname.as_ref())?;
                        return Err(DocumentError::UnmatchedEnd(name.to_string()));
                    }
                    if open.is_empty() {
                        root_closed = true;
                    }
                }
                Event::Text(text) => {
                    if contains(&text, b"]]>") {
                        return Err(DocumentError::CdataEndInText);
                    }
                    let text = text.unescape()?;
                    check_chars(&text)?;
                    append_text(&mut nodes, &open, &text)?;
                }
                Event::CData(cdata) => {
                    let bytes = cdata.into_inner();
                    let text = std::str::from_utf8(&bytes)?;
                    check_chars(text)?;
                    append_text(&mut nodes, &open, text)?;
                }
                Event::Comment(comment) => {
                    if contains(&comment, b"--") || comment.ends_with(b"-") {
                        return Err(DocumentError::DoubleHyphenInComment);
                    }
                }
                Event::DocType(_) => return Err(DocumentError::DtdForbidden),
                Event::Decl(_) | Event::PI(_) => {}
                Event::Eof => break,
            }
            buf.clear();
        }

        if let Some(&id) = open.last() {
            return Err(DocumentError::Unclosed(nodes[id].name.clone()));
        }
        if nodes.is_empty() {
            return Err(DocumentError::NoRoot);
        }
        Ok(Self { nodes })
    }

    pub fn element(&self, id: NodeId) -> &Element {
        &self.nodes[id]
    }

    /// First element at or after `from` (in document order) matching `step`.
    pub fn next_matching(&self, from: NodeId, step: &Step) -> Option<NodeId> {
        (from..self.nodes.len()).find(|&id| self.nodes[id].matches(step))
    }

    /// All elements reached from `start` by following `path` one child level
    /// per step, in document order.
    pub fn find_all(&self, start: NodeId, path: &[Step]) -> Vec<NodeId> {
        let mut current = vec![start];
        for step in path {
            current = current
                .iter()
                .flat_map(|&id| self.nodes[id].children.iter().copied())
                .filter(|&child| self.nodes[child].matches(step))
                .collect();
            if current.is_empty() {
                break;
            }
        }
        current
    }
}

fn namespace_of(resolved: ResolveResult<'_>) -> Result<Option<String>, DocumentError> {
    match resolved {
        ResolveResult::Bound(ns) => Ok(Some(std::str::from_utf8(ns.as_ref())?.to_string())),
        ResolveResult::Unbound => Ok(None),
        ResolveResult::Unknown(prefix) => Err(DocumentError::UnboundPrefix(
            String::from_utf8_lossy(&prefix).into_owned(),
        )),
    }
}

fn open_element(
    nodes: &mut Vec<Element>,
    open: &[NodeId],
    root_closed: bool,
    namespace: Option<String>,
    start: &BytesStart<'_>,
) -> Result<NodeId, DocumentError> {
    if root_closed {
        return Err(DocumentError::JunkAfterRoot);
    }

    check_name(std::str::from_utf8(start.name().as_ref())?)?;
    let name = std::str::from_utf8(start.local_name().as_ref())?.to_string();
    let mut attributes = Vec::new();
    for attribute in start.attributes() {
        let attribute = attribute?;
        let key = std::str::from_utf8(attribute.key.as_ref())?.to_string();
        check_name(&key)?;
        if contains(&attribute.value, b"<") {
            return Err(DocumentError::LessThanInAttribute(key));
        }
        let value = attribute.unescape_value()?.into_owned();
        check_chars(&value)?;
        attributes.push((key, value));
    }

    let id = nodes.len();
    nodes.push(Element {
        namespace,
        name,
        attributes,
        text: String::new(),
        children: Vec::new(),
    });
    if let Some(&parent) = open.last() {
        nodes[parent].children.push(id);
    }
    Ok(id)
}

fn append_text(nodes: &mut [Element], open: &[NodeId], text: &str) -> Result<(), DocumentError> {
    match open.last() {
        Some(&id) => {
            let element = &mut nodes[id];
            if element.children.is_empty() {
                element.text.push_str(text);
            }
            Ok(())
        }
        None if text.trim().is_empty() => Ok(()),
        None if nodes.is_empty() => Err(DocumentError::NoRoot),
        None => Err(DocumentError::JunkAfterRoot),
    }
}

fn contains(haystack: &[u8], needle: &[u8]) -> bool {
    haystack.windows(needle.len()).any(|window| window == needle)
}

/// Reject C0 controls other than tab, LF and CR. These are not XML 1.0
/// characters, not even via a character reference.
fn check_chars(text: &str) -> Result<(), DocumentError> {
    match text
        .chars()
        .find(|&c| c < '\u{20}' && !matches!(c, '\t' | '\n' | '\r'))
    {
        Some(c) => Err(DocumentError::ControlCharacter(u32::from(c))),
        None => Ok(()),
    }
}

/// Element and attribute names must be XML 1.0 `Name`s. The colon is
/// allowed here; prefixes are resolved by the reader.
fn check_name(name: &str) -> Result<(), DocumentError> {
    let mut chars = name.chars();
    let valid = chars.next().is_some_and(is_name_start) && chars.all(is_name_char);
    if valid {
        Ok(())
    } else {
        Err(DocumentError::InvalidName(name.to_string()))
    }
}

fn is_name_start(c: char) -> bool {
    matches!(c,
        ':' | 'A'..='Z' | '_' | 'a'..='z'
        | '\u{C0}'..='\u{D6}'
        | '\u{D8}'..='\u{F6}'
        | '\u{F8}'..='\u{2FF}'
        | '\u{370}'..='\u{37D}'
        | '\u{37F}'..='\u{1FFF}'
        | '\u{200C}'..='\u{200D}'
        | '\u{2070}'..='\u{218F}'
        | '\u{2C00}'..='\u{2FEF}'
        | '\u{3001}'..='\u{D7FF}'
        | '\u{F900}'..='\u{FDCF}'
        | '\u{FDF0}'..='\u{FFFD}'
        | '\u{10000}'..='\u{EFFFF}')
}

fn is_name_char(c: char) -> bool {
    is_name_start(c)
        || matches!(c,
            '-' | '.' | '0'..='9' | '\u{B7}'
            | '\u{300}'..='\u{36F}'
            | '\u{203F}'..='\u{2040}')
}
