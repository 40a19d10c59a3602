//! Error types for Pepon parsing and document access.
//!
//! This module provides the error taxonomy of the crate:
//!
//! - **Syntax errors**: malformed document structure, reported with the line
//!   number of the offending input line and aborting the whole parse
//! - **Type errors**: unresolvable type annotations and malformed
//!   `kind<type>` container declarations
//! - **Lookup errors**: a group requested by name that does not exist
//! - **I/O errors**: file reading/writing failures in the path helpers
//!
//! Every message is prefixed with the library name (`pepon: `), so callers
//! can treat the rendered string as a self-identifying diagnostic.
//!
//! ## Examples
//!
//! ```rust
//! use pepon::{parse_str, Error};
//!
//! let result = parse_str("[Unclosed group\n");
//! assert!(result.is_err());
//!
//! if let Err(err) = result {
//!     // "pepon: syntax error at line 0: expected ']' after group name"
//!     eprintln!("{}", err);
//! }
//! ```

use thiserror::Error;

use crate::types::TypeTag;

/// Represents all possible errors that can occur while parsing Pepon text
/// or accessing a [`PeponFile`](crate::PeponFile).
#[derive(Debug, Clone, PartialEq, Error)]
pub enum Error {
    /// Structural syntax error; `line` is the zero-based input line index.
    #[error("pepon: syntax error at line {line}: {msg}")]
    Syntax { line: usize, msg: String },

    /// A declared type name that matches none of the known primitives.
    #[error("pepon: unknown variable type for '{name}'")]
    UnknownType { name: String },

    /// A container annotation without a complete `kind<type>` shape,
    /// or with an unrecognized kind or element type.
    #[error("pepon: incomplete or unknown container annotation \"{annotation}\"\nexpected kind<type>, e.g. elements : vector<int> = {{ -1, -2, -3 }}")]
    BadContainerAnnotation { annotation: String },

    /// `vector<bool>` has no backing representation and is rejected.
    #[error("pepon: vector<bool> is not supported")]
    UnsupportedContainer,

    /// A `[Group]` header whose name is already taken.
    #[error("pepon: group [{name}] is already defined")]
    DuplicateGroup { name: String },

    /// Lookup of a group by a name that is not in the document.
    #[error("pepon: group [{name}] not found")]
    GroupNotFound { name: String },

    /// A malformed floating-point literal. Integer parsing is lenient and
    /// never produces this; float and double parsing is strict.
    #[error("pepon: invalid {tag} literal \"{text}\" for '{name}'")]
    InvalidNumber {
        name: String,
        tag: TypeTag,
        text: String,
    },

    /// IO error during reading or writing.
    #[error("pepon: IO error: {0}")]
    Io(String),

    /// Generic message, used by value extraction conversions.
    #[error("pepon: {0}")]
    Message(String),
}

impl Error {
    /// Creates a syntax error for the given input line.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use pepon::Error;
    ///
    /// let err = Error::syntax(3, "expected ']' after group name");
    /// assert!(err.to_string().contains("line 3"));
    /// ```
    pub fn syntax(line: usize, msg: impl Into<String>) -> Self {
        Error::Syntax {
            line,
            msg: msg.into(),
        }
    }

    /// Creates an unknown-type error for the named variable.
    pub fn unknown_type(name: impl Into<String>) -> Self {
        Error::UnknownType { name: name.into() }
    }

    /// Creates a bad-annotation error carrying the raw annotation text.
    pub fn bad_annotation(annotation: impl Into<String>) -> Self {
        Error::BadContainerAnnotation {
            annotation: annotation.into(),
        }
    }

    /// Creates a not-found error for a group lookup.
    pub fn group_not_found(name: impl Into<String>) -> Self {
        Error::GroupNotFound { name: name.into() }
    }

    /// Creates an I/O error from a display message.
    pub fn io(msg: &str) -> Self {
        Error::Io(msg.to_string())
    }
}

pub type Result<T> = std::result::Result<T, Error>;
