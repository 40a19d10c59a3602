//! Document rendering.
//!
//! This module turns a [`PeponFile`] back into format text. Rendering is a
//! pure function of the document and its quoting preference: groups print
//! in declaration order, separated by one blank line, each preceded by its
//! comment block in the requested dialect. Printing never fails — an empty
//! document renders a placeholder line instead of nothing.
//!
//! ## Examples
//!
//! ```rust
//! use pepon::{parse_str, printer, CommentStyle, Quotes};
//!
//! let mut doc = parse_str("// speed of light, rounded\n[Physics]\nc : uint = 300000000\n").unwrap();
//! doc.use_quotation(Quotes::disabled());
//!
//! let text = printer::render_with_style(&doc, CommentStyle::Lua);
//! assert_eq!(text, "-- speed of light, rounded\n[Physics]\nc : uint = 300000000\n");
//! ```

use std::io;

use crate::document::PeponFile;
use crate::error::{Error, Result};
use crate::options::{CommentStyle, Quotes};

/// Placeholder written when rendering a document with no groups.
pub const EMPTY_DOCUMENT: &str = "PeponFile is empty!";

/// Renders a document with C++-style comment markers.
#[must_use]
pub fn render(doc: &PeponFile) -> String {
    render_with_style(doc, CommentStyle::Cpp)
}

/// Renders a document with the given comment dialect, using the
/// document's own quoting preference.
#[must_use]
pub fn render_with_style(doc: &PeponFile, style: CommentStyle) -> String {
    render_with(doc, doc.quotes(), style)
}

/// Renders a document with an explicit quoting preference, overriding the
/// one the document carries.
#[must_use]
pub fn render_with(doc: &PeponFile, quotes: &Quotes, style: CommentStyle) -> String {
    let mut out = String::with_capacity(256);

    if doc.is_empty() {
        out.push_str(EMPTY_DOCUMENT);
        out.push('\n');
        return out;
    }

    let total = doc.len();
    for (written, group) in doc.groups().enumerate() {
        group.render(quotes, style, &mut out);
        if written < total - 1 {
            out.push('\n');
        }
    }

    out
}

/// Renders a document and writes the text to a writer.
///
/// # Errors
///
/// Returns [`Error::Io`] if the writer fails; rendering itself cannot.
pub fn write_to<W: io::Write>(doc: &PeponFile, style: CommentStyle, mut writer: W) -> Result<()> {
    writer
        .write_all(render_with_style(doc, style).as_bytes())
        .map_err(|e| Error::io(&e.to_string()))
}
