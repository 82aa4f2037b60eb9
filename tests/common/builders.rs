//! Test builders: ergonomic constructors for XBEL documents.
//!
//! These builders are designed for readability in test setup, not for
//! production use. Attribute values are XML-escaped; group text is escaped
//! as character data.

use std::fmt::Write as _;

// ---------------------------------------------------------------------------
// BookmarkBuilder
// ---------------------------------------------------------------------------

/// One `bookmark:application` element.
#[derive(Clone, Default)]
pub struct AppSpec {
    pub name: Option<String>,
    pub exec: Option<String>,
    pub modified: Option<String>,
    pub count: Option<String>,
}

impl AppSpec {
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
            ..Self::default()
        }
    }

    pub fn exec(mut self, exec: impl Into<String>) -> Self {
        self.exec = Some(exec.into());
        self
    }

    pub fn modified(mut self, modified: impl Into<String>) -> Self {
        self.modified = Some(modified.into());
        self
    }

    pub fn count(mut self, count: impl Into<String>) -> Self {
        self.count = Some(count.into());
        self
    }
}

/// Fluent builder for one `bookmark` element.
///
/// # Example
///
/// ```rust
/// let bookmark = BookmarkBuilder::new("http://example.com")
///     .visited("2023-01-02T03:04:05.123456Z")
///     .mime_type("text/html")
///     .icon(None, Some("icon.png"), None)
///     .application(AppSpec::named("app1"));
/// ```
#[derive(Clone, Default)]
pub struct BookmarkBuilder {
    href: Option<String>,
    added: Option<String>,
    modified: Option<String>,
    visited: Option<String>,
    mime_types: Vec<String>,
    groups: Vec<String>,
    private_markers: usize,
    icons: Vec<(Option<String>, Option<String>, Option<String>)>,
    applications: Vec<AppSpec>,
}

impl BookmarkBuilder {
    pub fn new(href: impl Into<String>) -> Self {
        Self {
            href: Some(href.into()),
            ..Self::default()
        }
    }

    /// A bookmark with no `href` attribute at all.
    pub fn without_href() -> Self {
        Self::default()
    }

    pub fn added(mut self, ts: impl Into<String>) -> Self {
        self.added = Some(ts.into());
        self
    }

    pub fn modified(mut self, ts: impl Into<String>) -> Self {
        self.modified = Some(ts.into());
        self
    }

    pub fn visited(mut self, ts: impl Into<String>) -> Self {
        self.visited = Some(ts.into());
        self
    }

    pub fn mime_type(mut self, mime: impl Into<String>) -> Self {
        self.mime_types.push(mime.into());
        self
    }

    pub fn group(mut self, group: impl Into<String>) -> Self {
        self.groups.push(group.into());
        self
    }

    pub fn private(mut self) -> Self {
        self.private_markers += 1;
        self
    }

    pub fn icon(mut self, icon_type: Option<&str>, href: Option<&str>, name: Option<&str>) -> Self {
        self.icons.push((
            icon_type.map(str::to_string),
            href.map(str::to_string),
            name.map(str::to_string),
        ));
        self
    }

    pub fn application(mut self, app: AppSpec) -> Self {
        self.applications.push(app);
        self
    }

    fn write_to(&self, out: &mut String) {
        out.push_str("  <bookmark");
        attr(out, "href", &self.href);
        attr(out, "added", &self.added);
        attr(out, "modified", &self.modified);
        attr(out, "visited", &self.visited);
        out.push_str(">\n    <info>\n      <metadata owner=\"http://freedesktop.org\">\n");

        for mime in &self.mime_types {
            let _ = writeln!(out, "        <mime:mime-type type=\"{}\"/>", escape(mime));
        }
        if !self.groups.is_empty() {
            out.push_str("        <bookmark:groups>\n");
            for group in &self.groups {
                let _ = writeln!(
                    out,
                    "          <bookmark:group>{}</bookmark:group>",
                    escape(group)
                );
            }
            out.push_str("        </bookmark:groups>\n");
        }
        for _ in 0..self.private_markers {
            out.push_str("        <bookmark:private/>\n");
        }
        for (icon_type, href, name) in &self.icons {
            out.push_str("        <bookmark:icon");
            attr(out, "type", icon_type);
            attr(out, "href", href);
            attr(out, "name", name);
            out.push_str("/>\n");
        }
        if !self.applications.is_empty() {
            out.push_str("        <bookmark:applications>\n");
            for app in &self.applications {
                out.push_str("          <bookmark:application");
                attr(out, "name", &app.name);
                attr(out, "exec", &app.exec);
                attr(out, "modified", &app.modified);
                attr(out, "count", &app.count);
                out.push_str("/>\n");
            }
            out.push_str("        </bookmark:applications>\n");
        }

        out.push_str("      </metadata>\n    </info>\n  </bookmark>\n");
    }
}

// ---------------------------------------------------------------------------
// XbelBuilder
// ---------------------------------------------------------------------------

/// Fluent builder for a whole `recently-used.xbel` document.
#[derive(Clone, Default)]
pub struct XbelBuilder {
    bookmarks: Vec<BookmarkBuilder>,
}

impl XbelBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn bookmark(mut self, bookmark: BookmarkBuilder) -> Self {
        self.bookmarks.push(bookmark);
        self
    }

    pub fn build(&self) -> String {
        let mut out = String::from(
            "<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n\
             <xbel version=\"1.0\"\n      \
             xmlns:bookmark=\"http://www.freedesktop.org/standards/desktop-bookmarks\"\n      \
             xmlns:mime=\"http://www.freedesktop.org/standards/shared-mime-info\">\n",
        );
        for bookmark in &self.bookmarks {
            bookmark.write_to(&mut out);
        }
        out.push_str("</xbel>\n");
        out
    }
}

/// Shorthand for a one-bookmark document.
pub fn single_bookmark(bookmark: BookmarkBuilder) -> String {
    XbelBuilder::new().bookmark(bookmark).build()
}

// ---------------------------------------------------------------------------
// Escaping
// ---------------------------------------------------------------------------

fn attr(out: &mut String, key: &str, value: &Option<String>) {
    if let Some(value) = value {
        let _ = write!(out, " {key}=\"{}\"", escape(value));
    }
}

pub fn escape(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    for c in raw.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&apos;"),
            _ => out.push(c),
        }
    }
    out
}
