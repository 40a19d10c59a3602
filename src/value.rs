//! Typed values: scalars and containers.
//!
//! This module provides the value model of a parsed document:
//!
//! - [`Scalar`]: a tagged union over the six primitive kinds
//! - [`Elements`]: the per-kind element storage of a container
//!   (contiguous vector, double-ended queue, or linked list)
//! - [`Value`]: a named scalar or a named homogeneous container
//!
//! The tag of a [`Scalar`] and its payload agree by construction — there is
//! no separately stored type field to drift out of sync. Each value knows
//! how to render itself back to format text.
//!
//! ## Construction from text
//!
//! ```rust
//! use pepon::{Scalar, TypeTag};
//!
//! let speed = Scalar::from_text(TypeTag::Int, "speed", "88").unwrap();
//! assert_eq!(speed.as_i32(), Some(88));
//!
//! // Integer parsing is lenient: unparseable text yields zero
//! let zero = Scalar::from_text(TypeTag::Uint, "retries", "-3").unwrap();
//! assert_eq!(zero.as_u32(), Some(0));
//!
//! // Float parsing is strict
//! assert!(Scalar::from_text(TypeTag::Float, "ratio", "fast").is_err());
//! ```
//!
//! ## Programmatic building
//!
//! ```rust
//! use pepon::{Quotes, Scalar, Value};
//!
//! let value = Value::scalar("answer", Scalar::Int(42));
//! let mut out = String::new();
//! value.render(&Quotes::disabled(), &mut out);
//! assert_eq!(out, "answer : int = 42\n");
//! ```

use serde::ser::{Serialize, SerializeSeq, Serializer};
use std::collections::{LinkedList, VecDeque};
use std::fmt;

use crate::error::{Error, Result};
use crate::options::Quotes;
use crate::types::{ContainerKind, TypeTag};

/// A single typed datum.
///
/// # Examples
///
/// ```rust
/// use pepon::{Scalar, TypeTag};
///
/// let s = Scalar::from("hello");
/// assert_eq!(s.type_tag(), TypeTag::Str);
/// assert_eq!(s.as_str(), Some("hello"));
/// ```
#[derive(Clone, Debug, PartialEq)]
pub enum Scalar {
    Int(i32),
    Uint(u32),
    Bool(bool),
    Float(f32),
    Double(f64),
    Str(String),
}

impl Scalar {
    /// Converts source text into a scalar of the tagged kind.
    ///
    /// Conversion rules follow the format:
    ///
    /// - `int`/`uint`: locale-independent, non-failing — unparseable text
    ///   yields zero
    /// - `float`/`double`: strict — malformed text is a fatal
    ///   [`Error::InvalidNumber`]
    /// - `bool`: `true`/`1` (any ASCII case, surrounding whitespace
    ///   ignored) is true, everything else false
    /// - `string`: copied verbatim
    ///
    /// `name` only feeds error messages.
    pub fn from_text(tag: TypeTag, name: &str, text: &str) -> Result<Scalar> {
        let scalar = match tag {
            TypeTag::Int => Scalar::Int(text.parse().unwrap_or(0)),
            TypeTag::Uint => Scalar::Uint(text.parse().unwrap_or(0)),
            TypeTag::Bool => Scalar::Bool(bool_from_text(text)),
            TypeTag::Float => Scalar::Float(parse_strict(tag, name, text)?),
            TypeTag::Double => Scalar::Double(parse_strict(tag, name, text)?),
            TypeTag::Str => Scalar::Str(text.to_string()),
        };
        Ok(scalar)
    }

    /// Returns the type tag matching the active variant.
    #[must_use]
    pub const fn type_tag(&self) -> TypeTag {
        match self {
            Scalar::Int(_) => TypeTag::Int,
            Scalar::Uint(_) => TypeTag::Uint,
            Scalar::Bool(_) => TypeTag::Bool,
            Scalar::Float(_) => TypeTag::Float,
            Scalar::Double(_) => TypeTag::Double,
            Scalar::Str(_) => TypeTag::Str,
        }
    }

    /// If this is a signed integer, returns it. Otherwise returns `None`.
    #[inline]
    #[must_use]
    pub fn as_i32(&self) -> Option<i32> {
        match self {
            Scalar::Int(v) => Some(*v),
            _ => None,
        }
    }

    /// If this is an unsigned integer, returns it. Otherwise returns `None`.
    #[inline]
    #[must_use]
    pub fn as_u32(&self) -> Option<u32> {
        match self {
            Scalar::Uint(v) => Some(*v),
            _ => None,
        }
    }

    /// If this is a boolean, returns it. Otherwise returns `None`.
    #[inline]
    #[must_use]
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Scalar::Bool(v) => Some(*v),
            _ => None,
        }
    }

    /// If this is a single-precision float, returns it. Otherwise `None`.
    #[inline]
    #[must_use]
    pub fn as_f32(&self) -> Option<f32> {
        match self {
            Scalar::Float(v) => Some(*v),
            _ => None,
        }
    }

    /// If this is a double-precision float, returns it. Otherwise `None`.
    #[inline]
    #[must_use]
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Scalar::Double(v) => Some(*v),
            _ => None,
        }
    }

    /// If this is a string, returns a reference to it. Otherwise `None`.
    #[inline]
    #[must_use]
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Scalar::Str(s) => Some(s),
            _ => None,
        }
    }

    /// Writes this scalar as a container element, applying the quote
    /// character per the preference. Booleans render as `true`/`false`.
    pub(crate) fn write_element(&self, quotes: &Quotes, out: &mut String) {
        if quotes.use_quotes {
            out.push(quotes.quote_char);
        }
        match self {
            Scalar::Int(v) => out.push_str(&v.to_string()),
            Scalar::Uint(v) => out.push_str(&v.to_string()),
            Scalar::Bool(v) => out.push_str(if *v { "true" } else { "false" }),
            Scalar::Float(v) => out.push_str(&v.to_string()),
            Scalar::Double(v) => out.push_str(&v.to_string()),
            Scalar::Str(s) => out.push_str(s),
        }
        if quotes.use_quotes {
            out.push(quotes.quote_char);
        }
    }
}

impl fmt::Display for Scalar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Scalar::Int(v) => write!(f, "{}", v),
            Scalar::Uint(v) => write!(f, "{}", v),
            Scalar::Bool(v) => write!(f, "{}", v),
            Scalar::Float(v) => write!(f, "{}", v),
            Scalar::Double(v) => write!(f, "{}", v),
            Scalar::Str(s) => f.write_str(s),
        }
    }
}

/// Recognizes boolean text: `true` or `1`, any ASCII case, trimmed.
fn bool_from_text(text: &str) -> bool {
    let text = text.trim();
    text.eq_ignore_ascii_case("true") || text == "1"
}

fn parse_strict<T: std::str::FromStr>(tag: TypeTag, name: &str, text: &str) -> Result<T> {
    text.parse().map_err(|_| Error::InvalidNumber {
        name: name.to_string(),
        tag,
        text: text.to_string(),
    })
}

impl From<i32> for Scalar {
    fn from(value: i32) -> Self {
        Scalar::Int(value)
    }
}

impl From<u32> for Scalar {
    fn from(value: u32) -> Self {
        Scalar::Uint(value)
    }
}

impl From<bool> for Scalar {
    fn from(value: bool) -> Self {
        Scalar::Bool(value)
    }
}

impl From<f32> for Scalar {
    fn from(value: f32) -> Self {
        Scalar::Float(value)
    }
}

impl From<f64> for Scalar {
    fn from(value: f64) -> Self {
        Scalar::Double(value)
    }
}

impl From<String> for Scalar {
    fn from(value: String) -> Self {
        Scalar::Str(value)
    }
}

impl From<&str> for Scalar {
    fn from(value: &str) -> Self {
        Scalar::Str(value.to_string())
    }
}

impl TryFrom<Scalar> for i32 {
    type Error = Error;

    fn try_from(value: Scalar) -> Result<Self> {
        match value {
            Scalar::Int(v) => Ok(v),
            other => Err(Error::Message(format!(
                "expected int, found {}",
                other.type_tag()
            ))),
        }
    }
}

impl TryFrom<Scalar> for u32 {
    type Error = Error;

    fn try_from(value: Scalar) -> Result<Self> {
        match value {
            Scalar::Uint(v) => Ok(v),
            other => Err(Error::Message(format!(
                "expected uint, found {}",
                other.type_tag()
            ))),
        }
    }
}

impl TryFrom<Scalar> for bool {
    type Error = Error;

    fn try_from(value: Scalar) -> Result<Self> {
        match value {
            Scalar::Bool(v) => Ok(v),
            other => Err(Error::Message(format!(
                "expected bool, found {}",
                other.type_tag()
            ))),
        }
    }
}

impl TryFrom<Scalar> for f32 {
    type Error = Error;

    fn try_from(value: Scalar) -> Result<Self> {
        match value {
            Scalar::Float(v) => Ok(v),
            other => Err(Error::Message(format!(
                "expected float, found {}",
                other.type_tag()
            ))),
        }
    }
}

impl TryFrom<Scalar> for f64 {
    type Error = Error;

    fn try_from(value: Scalar) -> Result<Self> {
        match value {
            Scalar::Double(v) => Ok(v),
            other => Err(Error::Message(format!(
                "expected double, found {}",
                other.type_tag()
            ))),
        }
    }
}

impl TryFrom<Scalar> for String {
    type Error = Error;

    fn try_from(value: Scalar) -> Result<Self> {
        match value {
            Scalar::Str(s) => Ok(s),
            other => Err(Error::Message(format!(
                "expected string, found {}",
                other.type_tag()
            ))),
        }
    }
}

impl Serialize for Scalar {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match self {
            Scalar::Int(v) => serializer.serialize_i32(*v),
            Scalar::Uint(v) => serializer.serialize_u32(*v),
            Scalar::Bool(v) => serializer.serialize_bool(*v),
            Scalar::Float(v) => serializer.serialize_f32(*v),
            Scalar::Double(v) => serializer.serialize_f64(*v),
            Scalar::Str(s) => serializer.serialize_str(s),
        }
    }
}

/// Element storage of a container value, one variant per container kind.
///
/// The kind controls only how elements live in memory; all three variants
/// print identically.
#[derive(Clone, Debug, PartialEq)]
pub enum Elements {
    Vector(Vec<Scalar>),
    Deque(VecDeque<Scalar>),
    List(LinkedList<Scalar>),
}

impl Elements {
    /// Builds element storage of the requested kind from pre-split element
    /// substrings, converting each through [`Scalar::from_text`].
    ///
    /// `vector<bool>` is rejected as unsupported; `deque<bool>` and
    /// `list<bool>` are accepted.
    pub fn from_text_parts<'a, I>(
        kind: ContainerKind,
        elem: TypeTag,
        name: &str,
        parts: I,
    ) -> Result<Elements>
    where
        I: IntoIterator<Item = &'a str>,
    {
        if kind == ContainerKind::Vector && elem == TypeTag::Bool {
            return Err(Error::UnsupportedContainer);
        }

        let mut scalars = Vec::new();
        for part in parts {
            scalars.push(Scalar::from_text(elem, name, part)?);
        }

        Ok(match kind {
            ContainerKind::Vector => Elements::Vector(scalars),
            ContainerKind::Deque => Elements::Deque(scalars.into()),
            ContainerKind::List => Elements::List(scalars.into_iter().collect()),
        })
    }

    /// Returns the container kind matching the active variant.
    #[must_use]
    pub const fn kind(&self) -> ContainerKind {
        match self {
            Elements::Vector(_) => ContainerKind::Vector,
            Elements::Deque(_) => ContainerKind::Deque,
            Elements::List(_) => ContainerKind::List,
        }
    }

    /// Returns the number of elements.
    #[must_use]
    pub fn len(&self) -> usize {
        match self {
            Elements::Vector(v) => v.len(),
            Elements::Deque(d) => d.len(),
            Elements::List(l) => l.len(),
        }
    }

    /// Returns `true` if the container holds no elements.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns an iterator over the elements, in order.
    pub fn iter(&self) -> ElementsIter<'_> {
        match self {
            Elements::Vector(v) => ElementsIter::Vector(v.iter()),
            Elements::Deque(d) => ElementsIter::Deque(d.iter()),
            Elements::List(l) => ElementsIter::List(l.iter()),
        }
    }
}

impl<'a> IntoIterator for &'a Elements {
    type Item = &'a Scalar;
    type IntoIter = ElementsIter<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Iterator over the elements of any container kind.
pub enum ElementsIter<'a> {
    Vector(std::slice::Iter<'a, Scalar>),
    Deque(std::collections::vec_deque::Iter<'a, Scalar>),
    List(std::collections::linked_list::Iter<'a, Scalar>),
}

impl<'a> Iterator for ElementsIter<'a> {
    type Item = &'a Scalar;

    fn next(&mut self) -> Option<&'a Scalar> {
        match self {
            ElementsIter::Vector(it) => it.next(),
            ElementsIter::Deque(it) => it.next(),
            ElementsIter::List(it) => it.next(),
        }
    }
}

impl Serialize for Elements {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut seq = serializer.serialize_seq(Some(self.len()))?;
        for scalar in self {
            seq.serialize_element(scalar)?;
        }
        seq.end()
    }
}

/// A named value inside a group: a scalar or a homogeneous container.
///
/// # Examples
///
/// ```rust
/// use pepon::{parse_str, ContainerKind, TypeTag};
///
/// let doc = parse_str("[G]\nv : vector<int> = { 1, 2, 3 }\n").unwrap();
/// let value = doc.group("G").unwrap().get("v").unwrap();
///
/// assert_eq!(value.container_kind(), Some(ContainerKind::Vector));
/// assert_eq!(value.type_tag(), TypeTag::Int);
/// assert_eq!(value.as_elements().unwrap().len(), 3);
/// ```
#[derive(Clone, Debug, PartialEq)]
pub enum Value {
    Scalar { name: String, scalar: Scalar },
    Container {
        name: String,
        elem: TypeTag,
        items: Elements,
    },
}

impl Value {
    /// Creates a named scalar value.
    pub fn scalar(name: impl Into<String>, scalar: impl Into<Scalar>) -> Value {
        Value::Scalar {
            name: name.into(),
            scalar: scalar.into(),
        }
    }

    /// Creates a named container value.
    ///
    /// Every element of `items` must already match `elem`; parsing and the
    /// group-level builders uphold this.
    pub fn container(name: impl Into<String>, elem: TypeTag, items: Elements) -> Value {
        Value::Container {
            name: name.into(),
            elem,
            items,
        }
    }

    /// Returns the value's name.
    #[must_use]
    pub fn name(&self) -> &str {
        match self {
            Value::Scalar { name, .. } => name,
            Value::Container { name, .. } => name,
        }
    }

    /// Returns the scalar type, or the element type for containers.
    #[must_use]
    pub fn type_tag(&self) -> TypeTag {
        match self {
            Value::Scalar { scalar, .. } => scalar.type_tag(),
            Value::Container { elem, .. } => *elem,
        }
    }

    /// Returns the container kind, or `None` for scalars.
    #[must_use]
    pub fn container_kind(&self) -> Option<ContainerKind> {
        match self {
            Value::Scalar { .. } => None,
            Value::Container { items, .. } => Some(items.kind()),
        }
    }

    /// Returns `true` if this is a scalar value.
    #[inline]
    #[must_use]
    pub const fn is_scalar(&self) -> bool {
        matches!(self, Value::Scalar { .. })
    }

    /// Returns `true` if this is a container value.
    #[inline]
    #[must_use]
    pub const fn is_container(&self) -> bool {
        matches!(self, Value::Container { .. })
    }

    /// If this is a scalar, returns it. Otherwise returns `None`.
    #[must_use]
    pub fn as_scalar(&self) -> Option<&Scalar> {
        match self {
            Value::Scalar { scalar, .. } => Some(scalar),
            Value::Container { .. } => None,
        }
    }

    /// If this is a container, returns its elements. Otherwise `None`.
    #[must_use]
    pub fn as_elements(&self) -> Option<&Elements> {
        match self {
            Value::Scalar { .. } => None,
            Value::Container { items, .. } => Some(items),
        }
    }

    /// Renders this value as one format line (with trailing newline).
    ///
    /// Scalars print as `name : type = value`, the value wrapped in the
    /// quote character when quoting is on — except strings, which always
    /// print inside double quotes. Containers print as
    /// `name : kind<type> = { e1, e2 }` with every element quoted per the
    /// preference.
    pub fn render(&self, quotes: &Quotes, out: &mut String) {
        match self {
            Value::Scalar { name, scalar } => {
                out.push_str(name);
                out.push_str(" : ");
                out.push_str(scalar.type_tag().name());
                out.push_str(" = ");
                if let Scalar::Str(s) = scalar {
                    out.push('"');
                    out.push_str(s);
                    out.push('"');
                } else {
                    scalar.write_element(quotes, out);
                }
                out.push('\n');
            }
            Value::Container { name, elem, items } => {
                out.push_str(name);
                out.push_str(" : ");
                out.push_str(items.kind().name());
                out.push('<');
                out.push_str(elem.name());
                out.push_str("> = { ");
                let mut shown = 0;
                for item in items {
                    item.write_element(quotes, out);
                    if shown < items.len() - 1 {
                        out.push_str(", ");
                    }
                    shown += 1;
                }
                out.push_str(" }\n");
            }
        }
    }
}

impl Serialize for Value {
    /// Serializes the payload only: the scalar primitive, or the element
    /// sequence. [`Group`](crate::Group) supplies the name as the map key.
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match self {
            Value::Scalar { scalar, .. } => scalar.serialize(serializer),
            Value::Container { items, .. } => items.serialize(serializer),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lenient_integer_construction() {
        let s = Scalar::from_text(TypeTag::Int, "a", "-12").unwrap();
        assert_eq!(s, Scalar::Int(-12));

        // Unparseable text collapses to zero instead of failing
        let s = Scalar::from_text(TypeTag::Int, "a", "12abc").unwrap();
        assert_eq!(s, Scalar::Int(0));

        let s = Scalar::from_text(TypeTag::Uint, "a", "-1").unwrap();
        assert_eq!(s, Scalar::Uint(0));
    }

    #[test]
    fn strict_float_construction() {
        let s = Scalar::from_text(TypeTag::Float, "ratio", "2.5").unwrap();
        assert_eq!(s, Scalar::Float(2.5));

        let s = Scalar::from_text(TypeTag::Double, "ratio", "1e-3").unwrap();
        assert_eq!(s, Scalar::Double(1e-3));

        let err = Scalar::from_text(TypeTag::Float, "ratio", "fast").unwrap_err();
        assert!(matches!(err, Error::InvalidNumber { .. }));
    }

    #[test]
    fn bool_recognition() {
        for text in ["true", "TRUE", " True ", "1"] {
            assert_eq!(
                Scalar::from_text(TypeTag::Bool, "b", text).unwrap(),
                Scalar::Bool(true),
                "{text}"
            );
        }
        for text in ["false", "0", "yes", ""] {
            assert_eq!(
                Scalar::from_text(TypeTag::Bool, "b", text).unwrap(),
                Scalar::Bool(false),
                "{text}"
            );
        }
    }

    #[test]
    fn tag_and_payload_agree() {
        assert_eq!(Scalar::from(3i32).type_tag(), TypeTag::Int);
        assert_eq!(Scalar::from(3u32).type_tag(), TypeTag::Uint);
        assert_eq!(Scalar::from(true).type_tag(), TypeTag::Bool);
        assert_eq!(Scalar::from(3.5f32).type_tag(), TypeTag::Float);
        assert_eq!(Scalar::from(3.5f64).type_tag(), TypeTag::Double);
        assert_eq!(Scalar::from("x").type_tag(), TypeTag::Str);
    }

    #[test]
    fn elements_keep_their_kind() {
        let parts = ["1", "2", "3"];
        for kind in [
            ContainerKind::Vector,
            ContainerKind::Deque,
            ContainerKind::List,
        ] {
            let items = Elements::from_text_parts(kind, TypeTag::Int, "v", parts).unwrap();
            assert_eq!(items.kind(), kind);
            assert_eq!(items.len(), 3);
            let collected: Vec<i32> = items.iter().filter_map(Scalar::as_i32).collect();
            assert_eq!(collected, vec![1, 2, 3]);
        }
    }

    #[test]
    fn vector_of_bool_is_rejected() {
        let err = Elements::from_text_parts(ContainerKind::Vector, TypeTag::Bool, "v", ["true"])
            .unwrap_err();
        assert_eq!(err, Error::UnsupportedContainer);

        // Queue and list kinds accept boolean elements
        for kind in [ContainerKind::Deque, ContainerKind::List] {
            let items =
                Elements::from_text_parts(kind, TypeTag::Bool, "v", ["true", "false"]).unwrap();
            assert_eq!(items.len(), 2);
        }
    }

    #[test]
    fn scalar_rendering_honors_quotes() {
        let mut out = String::new();
        Value::scalar("a", Scalar::Int(1)).render(&Quotes::new(), &mut out);
        assert_eq!(out, "a : int = '1'\n");

        out.clear();
        Value::scalar("a", Scalar::Int(1)).render(&Quotes::disabled(), &mut out);
        assert_eq!(out, "a : int = 1\n");

        out.clear();
        Value::scalar("ok", Scalar::Bool(true)).render(&Quotes::disabled(), &mut out);
        assert_eq!(out, "ok : bool = true\n");
    }

    #[test]
    fn string_scalars_always_double_quote() {
        let mut out = String::new();
        Value::scalar("b", Scalar::from("hi")).render(&Quotes::disabled(), &mut out);
        assert_eq!(out, "b : string = \"hi\"\n");

        out.clear();
        Value::scalar("b", Scalar::from("hi")).render(&Quotes::new(), &mut out);
        assert_eq!(out, "b : string = \"hi\"\n");
    }

    #[test]
    fn container_rendering() {
        let items =
            Elements::from_text_parts(ContainerKind::Deque, TypeTag::Uint, "d", ["10", "20"])
                .unwrap();
        let value = Value::container("d", TypeTag::Uint, items);

        let mut out = String::new();
        value.render(&Quotes::disabled(), &mut out);
        assert_eq!(out, "d : deque<uint> = { 10, 20 }\n");

        out.clear();
        value.render(&Quotes::new(), &mut out);
        assert_eq!(out, "d : deque<uint> = { '10', '20' }\n");
    }

    #[test]
    fn serialize_to_json() {
        let value = Value::scalar("a", Scalar::Int(5));
        assert_eq!(serde_json::to_string(&value).unwrap(), "5");

        let items =
            Elements::from_text_parts(ContainerKind::List, TypeTag::Str, "l", ["x", "y"]).unwrap();
        let value = Value::container("l", TypeTag::Str, items);
        assert_eq!(serde_json::to_string(&value).unwrap(), "[\"x\",\"y\"]");
    }
}
