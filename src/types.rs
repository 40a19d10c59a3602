//! Type tags for Pepon values.
//!
//! This module provides the two closed enumerations the format is typed
//! over:
//!
//! - [`TypeTag`]: the six primitive kinds a value or container element can
//!   have (`int`, `uint`, `bool`, `float`, `double`, `string`)
//! - [`ContainerKind`]: the three sequence containers (`vector`, `deque`,
//!   `list`)
//!
//! Both parse from declared-type text with surrounding whitespace and ASCII
//! case ignored, so `vEctOr<inT>` resolves the same as `vector<int>`. An
//! unresolvable name parses to `None`; the parser turns that into a syntax
//! error before any value is built, so an unknown tag is never stored.
//!
//! ## Examples
//!
//! ```rust
//! use pepon::{ContainerKind, TypeTag};
//!
//! assert_eq!(TypeTag::parse(" inT "), Some(TypeTag::Int));
//! assert_eq!(TypeTag::parse("unsigned int"), Some(TypeTag::Uint));
//! assert_eq!(TypeTag::parse("i64"), None);
//!
//! assert_eq!(ContainerKind::parse("Deque"), Some(ContainerKind::Deque));
//! assert_eq!(ContainerKind::Vector.name(), "vector");
//! ```

use serde::Serialize;
use std::fmt;

/// The primitive kind of a scalar value or of a container's elements.
///
/// # Examples
///
/// ```rust
/// use pepon::TypeTag;
///
/// assert_eq!(TypeTag::parse("double"), Some(TypeTag::Double));
/// assert_eq!(TypeTag::Double.name(), "double");
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
pub enum TypeTag {
    /// Signed integer (`int`).
    Int,
    /// Unsigned integer (`uint` or `unsigned int`).
    Uint,
    /// Boolean (`bool`).
    Bool,
    /// Single-precision floating point (`float`).
    Float,
    /// Double-precision floating point (`double`).
    Double,
    /// UTF-8 string (`string`).
    Str,
}

impl TypeTag {
    /// Resolves a declared-type name, trimming whitespace and folding ASCII
    /// case. Returns `None` for anything outside the known type set.
    #[must_use]
    pub fn parse(text: &str) -> Option<TypeTag> {
        match text.trim().to_ascii_lowercase().as_str() {
            "int" => Some(TypeTag::Int),
            "uint" | "unsigned int" => Some(TypeTag::Uint),
            "bool" => Some(TypeTag::Bool),
            "float" => Some(TypeTag::Float),
            "double" => Some(TypeTag::Double),
            "string" => Some(TypeTag::Str),
            _ => None,
        }
    }

    /// Returns the canonical lowercase spelling used when printing.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            TypeTag::Int => "int",
            TypeTag::Uint => "uint",
            TypeTag::Bool => "bool",
            TypeTag::Float => "float",
            TypeTag::Double => "double",
            TypeTag::Str => "string",
        }
    }
}

impl fmt::Display for TypeTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// The storage kind of a container value.
///
/// The kind decides the in-memory sequence a container's elements live in
/// (contiguous for [`Vector`](ContainerKind::Vector), segmented for
/// [`Deque`](ContainerKind::Deque), node-based for
/// [`List`](ContainerKind::List)). All three share one wire form:
/// `name : kind<type> = { a, b, c }`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
pub enum ContainerKind {
    Vector,
    Deque,
    List,
}

impl ContainerKind {
    /// Resolves a container-kind name, trimming whitespace and folding
    /// ASCII case. Returns `None` for anything outside the known kind set.
    #[must_use]
    pub fn parse(text: &str) -> Option<ContainerKind> {
        match text.trim().to_ascii_lowercase().as_str() {
            "vector" => Some(ContainerKind::Vector),
            "deque" => Some(ContainerKind::Deque),
            "list" => Some(ContainerKind::List),
            _ => None,
        }
    }

    /// Returns the canonical lowercase spelling used when printing.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            ContainerKind::Vector => "vector",
            ContainerKind::Deque => "deque",
            ContainerKind::List => "list",
        }
    }
}

impl fmt::Display for ContainerKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
