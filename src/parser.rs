//! The line scanner.
//!
//! This module parses Pepon text into a [`PeponFile`]. The scanner is a
//! single-pass state machine over pre-split input lines:
//!
//! - **Comment lines** (`//`, `--`, `#`) accumulate in a pending buffer
//!   that the next `[Group]` header takes ownership of
//! - **Headers** open a new group; everything that follows lands there
//! - **Assignment lines** (`name : type = ...`) become scalar values,
//!   single-line containers, or open a multi-line construct when the
//!   closing `}` or `"` has not appeared yet
//! - **Continuation lines** feed the active multi-line buffer until its
//!   closing delimiter arrives
//!
//! Every line is trimmed before classification, so indentation and spacing
//! around `:`, `=`, `<`, `>`, braces, and quotes never matter. All fatal
//! errors unwind immediately out of the parse call; there is no recovery
//! or resynchronization to a later line.
//!
//! ## Usage
//!
//! Most users should go through the crate-root functions:
//!
//! ```rust
//! use pepon::parse_str;
//!
//! let doc = parse_str("[G]\na : int = 1\n").unwrap();
//! assert_eq!(doc.len(), 1);
//! ```

use std::mem;

use crate::document::PeponFile;
use crate::error::{Error, Result};
use crate::group::Group;
use crate::types::{ContainerKind, TypeTag};

/// Parses an ordered sequence of raw text lines into a document.
///
/// Lines must already be split on line boundaries and carry no terminators.
/// A multi-line block still open when input runs out is discarded without
/// error.
///
/// # Errors
///
/// Any structural violation aborts the parse; see [`Error`](crate::Error)
/// for the taxonomy.
pub fn parse_lines<S: AsRef<str>>(lines: &[S]) -> Result<PeponFile> {
    let mut scanner = Scanner::new();
    for (line_no, raw) in lines.iter().enumerate() {
        scanner.scan_line(line_no, raw.as_ref())?;
    }
    Ok(scanner.doc)
}

/// Which construct an open multi-line block belongs to.
#[derive(Clone, Copy, Debug, PartialEq)]
enum MultilineKind {
    Container,
    Str,
}

/// Accumulated state of a value whose closing delimiter has not appeared
/// on its opening line.
#[derive(Debug)]
struct Multiline {
    kind: MultilineKind,
    start_line: usize,
    name: String,
    /// Raw declared-type text; container kind resolution is deferred to
    /// the closing line.
    declared_type: String,
    buffer: String,
}

/// The stateful line scanner.
struct Scanner {
    doc: PeponFile,
    /// Name of the group currently being populated.
    current: Option<String>,
    /// Comment lines collected since the last header.
    pending_comments: Vec<String>,
    multi: Option<Multiline>,
}

impl Scanner {
    fn new() -> Scanner {
        Scanner {
            doc: PeponFile::new(),
            current: None,
            pending_comments: Vec::new(),
            multi: None,
        }
    }

    fn scan_line(&mut self, line_no: usize, raw: &str) -> Result<()> {
        let line = raw.trim();

        // Comments: C/C++ and Lua markers take two characters, Python one.
        if let Some(rest) = line.strip_prefix("//").or_else(|| line.strip_prefix("--")) {
            self.pending_comments.push(rest.trim().to_string());
            return Ok(());
        }
        if let Some(rest) = line.strip_prefix('#') {
            self.pending_comments.push(rest.trim().to_string());
            return Ok(());
        }

        // [Group] header
        if let Some(open) = line.find('[') {
            return self.scan_header(line_no, line, open);
        }

        // Assignment
        if let Some(assign) = line.find('=') {
            return self.scan_assignment(line_no, line, assign);
        }

        // No assignment: a continuation of an open multi-line block, or a
        // stray line to ignore.
        self.scan_continuation(line_no, line)
    }

    fn scan_header(&mut self, line_no: usize, line: &str, open: usize) -> Result<()> {
        let after_open = &line[open + 1..];
        let close = after_open
            .find(']')
            .ok_or_else(|| Error::syntax(line_no, "expected ']' after group name"))?;
        let name = after_open[..close].trim();

        let comments = mem::take(&mut self.pending_comments);
        let group = self.doc.add_group(name)?;
        group.take_comments(comments);
        self.current = Some(name.to_string());
        Ok(())
    }

    fn scan_assignment(&mut self, line_no: usize, line: &str, assign: usize) -> Result<()> {
        if self.current.is_none() {
            return Err(Error::syntax(
                line_no,
                "you cannot create variables without defining a [Group] first",
            ));
        }

        let open_brace = line[assign + 1..].find('{').map(|i| assign + 1 + i);
        let close_brace = line.rfind('}');

        match (open_brace, close_brace) {
            (Some(open), Some(close)) => {
                if close < open {
                    return Err(Error::syntax(
                        line_no,
                        "assignment with a closing '}' but no opening '{'",
                    ));
                }
                let (name, declared) = name_and_type(line, assign, line_no)?;
                let (kind, elem) = container_annotation(declared)?;
                let inner = &line[open + 1..close];
                self.append_container(line_no, name, kind, elem, inner)
            }
            (Some(open), None) => {
                // Opening brace only: start a multi-line container.
                let (name, declared) = name_and_type(line, assign, line_no)?;
                let mut buffer = String::new();
                let trailing = line[open + 1..].trim();
                if !trailing.is_empty() {
                    buffer.push_str(trailing);
                    buffer.push('\n');
                }
                self.multi = Some(Multiline {
                    kind: MultilineKind::Container,
                    start_line: line_no,
                    name: name.to_string(),
                    declared_type: declared.to_string(),
                    buffer,
                });
                Ok(())
            }
            (None, Some(_)) => Err(Error::syntax(
                line_no,
                "assignment with a closing '}' but no opening '{'",
            )),
            (None, None) => self.scan_quoted_or_plain(line_no, line, assign),
        }
    }

    fn scan_quoted_or_plain(&mut self, line_no: usize, line: &str, assign: usize) -> Result<()> {
        let open_quote = line[assign + 1..].find('"').map(|i| assign + 1 + i);
        let close_quote = line.rfind('"');

        match (open_quote, close_quote) {
            (Some(open), Some(close)) if close > open => {
                // Single-line string; the declared type must say so.
                let (name, declared) = name_and_type(line, assign, line_no)?;
                if TypeTag::parse(declared) != Some(TypeTag::Str) {
                    return Err(Error::syntax(
                        line_no,
                        "opening and closing quotation marks should be used only for strings",
                    ));
                }
                let value = line[open + 1..close].to_string();
                self.current_group(line_no)?
                    .add_scalar(name, TypeTag::Str, &value)
            }
            (Some(open), _) => {
                // Opening quote only: start a multi-line string.
                let (name, declared) = name_and_type(line, assign, line_no)?;
                if TypeTag::parse(declared) != Some(TypeTag::Str) {
                    return Err(Error::syntax(
                        line_no,
                        "opening quotation marks should be used only for strings",
                    ));
                }
                let mut buffer = String::new();
                buffer.push_str(&line[open + 1..]);
                buffer.push('\n');
                self.multi = Some(Multiline {
                    kind: MultilineKind::Str,
                    start_line: line_no,
                    name: name.to_string(),
                    declared_type: declared.to_string(),
                    buffer,
                });
                Ok(())
            }
            _ => {
                // Plain single-line scalar.
                let (name, declared) = name_and_type(line, assign, line_no)?;
                let tag = TypeTag::parse(declared).ok_or_else(|| Error::unknown_type(name))?;
                let value = line[assign + 1..].trim().to_string();
                self.current_group(line_no)?.add_scalar(name, tag, &value)
            }
        }
    }

    fn scan_continuation(&mut self, line_no: usize, line: &str) -> Result<()> {
        let Some(mut multi) = self.multi.take() else {
            // Blank or stray line between constructs.
            return Ok(());
        };

        match multi.kind {
            MultilineKind::Container => {
                if let Some(close) = line.rfind('}') {
                    let before = line[..close].trim();
                    if !before.is_empty() {
                        multi.buffer.push_str(before);
                    }
                    // Deferred resolution: a bad annotation is reported at
                    // the line that opened the container.
                    let (kind, elem) =
                        container_annotation(&multi.declared_type).map_err(|_| {
                            Error::syntax(
                                multi.start_line,
                                format!(
                                    "container variables must include a complete kind<type> annotation, got \"{}\"",
                                    multi.declared_type
                                ),
                            )
                        })?;
                    self.append_container(line_no, &multi.name, kind, elem, &multi.buffer)
                } else {
                    multi.buffer.push_str(line);
                    multi.buffer.push('\n');
                    self.multi = Some(multi);
                    Ok(())
                }
            }
            MultilineKind::Str => {
                if let Some(close) = line.rfind('"') {
                    multi.buffer.push_str(&line[..close]);
                    self.current_group(line_no)?
                        .add_scalar(&multi.name, TypeTag::Str, &multi.buffer)
                } else {
                    // Blank lines are content for strings.
                    multi.buffer.push_str(line);
                    multi.buffer.push('\n');
                    self.multi = Some(multi);
                    Ok(())
                }
            }
        }
    }

    fn append_container(
        &mut self,
        line_no: usize,
        name: &str,
        kind: ContainerKind,
        elem: TypeTag,
        raw_elements: &str,
    ) -> Result<()> {
        let parts = if elem == TypeTag::Str {
            split_string_elements(raw_elements)
        } else {
            split_elements(raw_elements)
        };
        self.current_group(line_no)?
            .add_container(name, kind, elem, parts.iter().map(String::as_str))
    }

    fn current_group(&mut self, line_no: usize) -> Result<&mut Group> {
        match &self.current {
            Some(name) => self.doc.group_mut(name),
            None => Err(Error::syntax(
                line_no,
                "you cannot create variables without defining a [Group] first",
            )),
        }
    }
}

/// Splits an assignment line into its name and declared-type parts: the
/// text before the `:` and the text between `:` and `=`, both trimmed.
fn name_and_type(line: &str, assign: usize, line_no: usize) -> Result<(&str, &str)> {
    match line.find(':') {
        Some(colon) if colon < assign => {
            let name = line[..colon].trim();
            let declared = line[colon + 1..assign].trim();
            Ok((name, declared))
        }
        _ => Err(Error::syntax(
            line_no,
            "colon character ':' not found, or equal sign '=' is in the wrong position",
        )),
    }
}

/// Resolves a `kind<type>` annotation into its parts.
///
/// The kind and the element type are resolved independently, each trimmed
/// and case-folded.
fn container_annotation(declared: &str) -> Result<(ContainerKind, TypeTag)> {
    let (lt, gt) = match (declared.find('<'), declared.find('>')) {
        (Some(lt), Some(gt)) if lt < gt => (lt, gt),
        _ => return Err(Error::bad_annotation(declared)),
    };

    let kind =
        ContainerKind::parse(&declared[..lt]).ok_or_else(|| Error::bad_annotation(declared))?;
    let elem =
        TypeTag::parse(&declared[lt + 1..gt]).ok_or_else(|| Error::bad_annotation(declared))?;
    Ok((kind, elem))
}

/// Splits bracketed element text on commas, trimming each piece and
/// dropping empty ones. Multi-line buffers keep their embedded newlines
/// until this trim.
fn split_elements(text: &str) -> Vec<String> {
    text.split(',')
        .map(str::trim)
        .filter(|part| !part.is_empty())
        .map(str::to_string)
        .collect()
}

/// Splits string element text on commas, except inside `'` or `"` quotes,
/// so embedded separators survive. One pair of surrounding quotes per
/// element is stripped; unquoted elements are trimmed.
fn split_string_elements(text: &str) -> Vec<String> {
    let mut segments = Vec::new();
    let mut segment = String::new();
    let mut quote: Option<char> = None;

    for ch in text.chars() {
        match quote {
            Some(q) => {
                if ch == q {
                    quote = None;
                }
                segment.push(ch);
            }
            None => match ch {
                '\'' | '"' => {
                    quote = Some(ch);
                    segment.push(ch);
                }
                ',' => segments.push(mem::take(&mut segment)),
                _ => segment.push(ch),
            },
        }
    }
    segments.push(segment);

    segments
        .iter()
        .filter_map(|s| clean_string_element(s))
        .collect()
}

fn clean_string_element(raw: &str) -> Option<String> {
    let trimmed = raw.trim();
    let bytes = trimmed.as_bytes();
    if trimmed.len() >= 2
        && (bytes[0] == b'\'' || bytes[0] == b'"')
        && bytes[bytes.len() - 1] == bytes[0]
    {
        return Some(trimmed[1..trimmed.len() - 1].to_string());
    }
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}
