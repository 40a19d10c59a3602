//! Configuration options for Pepon output.
//!
//! This module provides the two knobs that shape rendered text:
//!
//! - [`Quotes`]: whether values are wrapped in a quote character, and which
//!   character that is
//! - [`CommentStyle`]: which comment dialect group comment blocks are
//!   written in (`//`, `--`, or `#`)
//!
//! Neither affects parsing — the scanner accepts all three comment dialects
//! and both quoted and bare values regardless of these settings.
//!
//! ## Examples
//!
//! ```rust
//! use pepon::{parse_str, CommentStyle, Quotes};
//!
//! let mut doc = parse_str("[G]\na : int = 1\n").unwrap();
//!
//! // Bare values, Python-style comments
//! doc.use_quotation(Quotes::disabled());
//! let text = pepon::to_string_with_style(&doc, CommentStyle::Python);
//! assert!(text.contains("a : int = 1"));
//! ```

use serde::Serialize;

/// Quoting preference applied by the printer.
///
/// With quoting enabled every scalar and container element is wrapped in
/// `quote_char`. String scalars are the exception: they always print inside
/// double quotes, whatever this preference says.
///
/// # Examples
///
/// ```rust
/// use pepon::Quotes;
///
/// let default = Quotes::new();
/// assert!(default.use_quotes);
/// assert_eq!(default.quote_char, '\'');
///
/// let custom = Quotes::new().with_quote_char('`');
/// assert_eq!(custom.quote_char, '`');
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct Quotes {
    pub use_quotes: bool,
    pub quote_char: char,
}

impl Default for Quotes {
    fn default() -> Self {
        Quotes {
            use_quotes: true,
            quote_char: '\'',
        }
    }
}

impl Quotes {
    /// Creates the default preference: quoting on, single-quote character.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a preference with quoting turned off.
    ///
    /// Bare output is what round-trips: numeric text wrapped in quote
    /// characters does not survive a re-parse as a number.
    #[must_use]
    pub fn disabled() -> Self {
        Quotes {
            use_quotes: false,
            ..Default::default()
        }
    }

    /// Sets whether values are quoted at all.
    #[must_use]
    pub fn with_quoting(mut self, use_quotes: bool) -> Self {
        self.use_quotes = use_quotes;
        self
    }

    /// Sets the quote character used when quoting is enabled.
    #[must_use]
    pub fn with_quote_char(mut self, quote_char: char) -> Self {
        self.quote_char = quote_char;
        self
    }
}

/// Comment dialect used when printing a group's comment block.
///
/// # Examples
///
/// ```rust
/// use pepon::CommentStyle;
///
/// assert_eq!(CommentStyle::Cpp.marker(), "//");
/// assert_eq!(CommentStyle::Lua.marker(), "--");
/// assert_eq!(CommentStyle::Python.marker(), "#");
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default, Serialize)]
pub enum CommentStyle {
    /// `// comment`
    #[default]
    Cpp,
    /// `-- comment`
    Lua,
    /// `# comment`
    Python,
}

impl CommentStyle {
    /// Returns the marker written before each comment line.
    #[must_use]
    pub const fn marker(&self) -> &'static str {
        match self {
            CommentStyle::Cpp => "//",
            CommentStyle::Lua => "--",
            CommentStyle::Python => "#",
        }
    }
}
