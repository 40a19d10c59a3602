//! # pepon
//!
//! A typed, human-editable configuration format with `[Group]` sections,
//! scalar values, and homogeneous containers.
//!
//! ## What is Pepon?
//!
//! Pepon groups named, typed values under bracketed headers. Values carry
//! an explicit type annotation, comments come in three dialects (`//`,
//! `--`, `#`), and strings and containers may span multiple lines:
//!
//! ```text
//! // Display configuration
//! [Window]
//! width : uint = 1280
//! height : uint = 720
//! title : string = "peponized"
//! modes : vector<string> = { 'windowed', 'borderless' }
//! ```
//!
//! ## Key Features
//!
//! - **Typed values**: `int`, `uint`, `bool`, `float`, `double`, `string`
//!   scalars plus `vector`/`deque`/`list` containers of those
//! - **Whitespace-insensitive**: `a:int=1` and `  a : int =  1` parse the
//!   same; type names are case-insensitive
//! - **Multi-line values**: containers and strings close on a later line
//! - **Faithful printing**: groups and values render in declaration order,
//!   comments included
//! - **No Unsafe Code**: written entirely in safe Rust
//!
//! ## Quick Start
//!
//! Add this to your `Cargo.toml`:
//!
//! ```toml
//! [dependencies]
//! pepon = "0.1"
//! ```
//!
//! ### Parsing and reading values
//!
//! ```rust
//! use pepon::parse_str;
//!
//! let doc = parse_str(
//!     "[Network]\n\
//!      port : uint = 8080\n\
//!      hosts : list<string> = { 'alpha', 'beta' }\n",
//! )
//! .unwrap();
//!
//! let network = doc.group("Network").unwrap();
//! let port = network.get("port").unwrap().as_scalar().unwrap();
//! assert_eq!(port.as_u32(), Some(8080));
//! ```
//!
//! ### Building and rendering
//!
//! ```rust
//! use pepon::{PeponFile, Quotes, TypeTag};
//!
//! let mut doc = PeponFile::new();
//! doc.add_group("Audio").unwrap();
//! doc.add_scalar("Audio", "volume", TypeTag::Uint, "80").unwrap();
//! doc.use_quotation(Quotes::disabled());
//!
//! assert_eq!(pepon::to_string(&doc), "[Audio]\nvolume : uint = 80\n");
//! ```
//!
//! ## Format Specification
//!
//! The full text format is documented in the [`spec`] module.

pub mod document;
pub mod error;
pub mod group;
pub mod options;
pub mod parser;
pub mod printer;
pub mod spec;
pub mod types;
pub mod value;

pub use document::PeponFile;
pub use error::{Error, Result};
pub use group::Group;
pub use options::{CommentStyle, Quotes};
pub use parser::parse_lines;
pub use types::{ContainerKind, TypeTag};
pub use value::{Elements, Scalar, Value};

use std::io;

/// Parses a whole document from a string, splitting it into lines first.
///
/// # Examples
///
/// ```rust
/// use pepon::parse_str;
///
/// let doc = parse_str("[G]\na : int = 1\n").unwrap();
/// assert_eq!(doc.len(), 1);
/// ```
///
/// # Errors
///
/// Returns the first fatal syntax error; the parse has no partial-result
/// recovery.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn parse_str(input: &str) -> Result<PeponFile> {
    let lines: Vec<&str> = input.lines().collect();
    parse_lines(&lines)
}

/// Renders a document to a string with C++-style comment markers.
///
/// Never fails; an empty document renders a placeholder line.
#[must_use]
pub fn to_string(doc: &PeponFile) -> String {
    printer::render(doc)
}

/// Renders a document to a string with the given comment dialect.
#[must_use]
pub fn to_string_with_style(doc: &PeponFile, style: CommentStyle) -> String {
    printer::render_with_style(doc, style)
}

/// Renders a document and writes the text to a writer.
///
/// # Errors
///
/// Returns an error only if writing to the writer fails.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn to_writer<W>(writer: W, doc: &PeponFile) -> Result<()>
where
    W: io::Write,
{
    printer::write_to(doc, CommentStyle::Cpp, writer)
}

/// Parses a document from an I/O stream.
///
/// # Examples
///
/// ```rust
/// use pepon::from_reader;
/// use std::io::Cursor;
///
/// let doc = from_reader(Cursor::new(b"[G]\na : int = 1\n")).unwrap();
/// assert!(doc.group("G").is_ok());
/// ```
///
/// # Errors
///
/// Returns an error if reading fails or the content is not valid Pepon.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn from_reader<R>(mut reader: R) -> Result<PeponFile>
where
    R: io::Read,
{
    let mut string = String::new();
    reader
        .read_to_string(&mut string)
        .map_err(|e| Error::io(&e.to_string()))?;
    parse_str(&string)
}
