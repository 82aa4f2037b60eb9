//! Error types for document and timestamp parsing.
//!
//! These never escape [`extract`](crate::extract) or
//! [`normalize`](crate::normalize): they are wrapped in a
//! [`Diagnostic`](crate::Diagnostic) and handed to the caller's sink.

use thiserror::Error;

/// Reasons a bookmark file is rejected as a whole.
#[derive(Debug, Error)]
pub enum DocumentError {
    /// Syntax error reported by the XML reader.
    #[error("XML syntax error: {0}")]
    Xml(#[from] quick_xml::Error),

    /// Malformed or duplicated attribute.
    #[error("invalid attribute: {0}")]
    Attribute(#[from] quick_xml::events::attributes::AttrError),

    /// Element or attribute name that is not valid UTF-8.
    #[error("invalid UTF-8: {0}")]
    Utf8(#[from] std::str::Utf8Error),

    /// The document carries a DOCTYPE declaration. DTD processing is
    /// disabled, so the file is refused outright.
    #[error("DTD declarations are forbidden")]
    DtdForbidden,

    /// An element uses a namespace prefix that was never declared.
    #[error("unbound namespace prefix `{0}`")]
    UnboundPrefix(String),

    /// Input ended while the named element was still open.
    #[error("unclosed element `{0}` at end of input")]
    Unclosed(String),

    /// An end tag with no matching start tag.
    #[error("unmatched end tag `{0}`")]
    UnmatchedEnd(String),

    /// The input contains no root element.
    #[error("no root element found")]
    NoRoot,

    /// Element or text content after the root element was closed.
    #[error("junk after document element")]
    JunkAfterRoot,

    /// Element or attribute name that is not an XML `Name`.
    #[error("invalid name `{0}`")]
    InvalidName(String),

    /// Literal `<` inside the value of the named attribute.
    #[error("`<` in value of attribute `{0}`")]
    LessThanInAttribute(String),

    /// A character outside the XML 1.0 `Char` production.
    #[error("control character U+{0:04X} not allowed")]
    ControlCharacter(u32),

    /// `]]>` outside a CDATA section.
    #[error("`]]>` not allowed in character data")]
    CdataEndInText,

    /// `--` inside a comment, or a comment ending in `--->`.
    #[error("`--` not allowed inside a comment")]
    DoubleHyphenInComment,
}

/// Reasons a timestamp attribute could not be normalised.
#[derive(Debug, Error)]
pub enum TimestampError {
    /// The string does not have the `YYYY-MM-DDTHH:MM:SS.ffffffZ` shape.
    #[error("expected YYYY-MM-DDTHH:MM:SS.ffffffZ, got {0:?}")]
    Shape(String),

    /// The shape matched but the fields do not form a valid instant.
    #[error("invalid date or time: {0}")]
    Calendar(#[from] chrono::ParseError),

    /// Seconds field of `60`. chrono accepts it as a leap second at any
    /// minute; XBEL files never carry one.
    #[error("seconds out of range in {0:?}")]
    LeapSecond(String),
}
