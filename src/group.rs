//! Named groups of values.
//!
//! A [`Group`] is what a `[Header]` line opens in a document: an ordered
//! run of typed values plus the comment block that immediately preceded
//! the header. Values keep their declaration order so a printed document
//! matches its source.

use serde::ser::{Serialize, SerializeMap, Serializer};

use crate::error::Result;
use crate::options::{CommentStyle, Quotes};
use crate::types::{ContainerKind, TypeTag};
use crate::value::{Elements, Scalar, Value};

/// A named, ordered collection of values with an owned comment block.
///
/// # Examples
///
/// ```rust
/// use pepon::{Group, TypeTag};
///
/// let mut group = Group::new("Window");
/// group.add_scalar("width", TypeTag::Uint, "1280").unwrap();
/// group.add_scalar("title", TypeTag::Str, "peponized").unwrap();
///
/// assert_eq!(group.values().len(), 2);
/// assert_eq!(group.get("width").unwrap().as_scalar().unwrap().as_u32(), Some(1280));
/// ```
#[derive(Clone, Debug, PartialEq, Default)]
pub struct Group {
    name: String,
    values: Vec<Value>,
    comments: Vec<String>,
}

impl Group {
    /// Creates an empty group with the given name.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Group {
        Group {
            name: name.into(),
            values: Vec::new(),
            comments: Vec::new(),
        }
    }

    /// Returns the group name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the values in declaration order.
    #[must_use]
    pub fn values(&self) -> &[Value] {
        &self.values
    }

    /// Returns the values for in-place modification.
    pub fn values_mut(&mut self) -> &mut Vec<Value> {
        &mut self.values
    }

    /// Returns the comment block preceding this group's header.
    #[must_use]
    pub fn comments(&self) -> &[String] {
        &self.comments
    }

    /// Finds a value by name.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&Value> {
        self.values.iter().find(|v| v.name() == name)
    }

    /// Constructs a scalar from source text and appends it.
    ///
    /// Conversion follows [`Scalar::from_text`]; a malformed float or
    /// double literal fails the whole call.
    pub fn add_scalar(&mut self, name: &str, tag: TypeTag, text: &str) -> Result<()> {
        let scalar = Scalar::from_text(tag, name, text)?;
        self.values.push(Value::scalar(name, scalar));
        Ok(())
    }

    /// Constructs a container from pre-split element substrings and
    /// appends it.
    pub fn add_container<'a, I>(
        &mut self,
        name: &str,
        kind: ContainerKind,
        elem: TypeTag,
        parts: I,
    ) -> Result<()>
    where
        I: IntoIterator<Item = &'a str>,
    {
        let items = Elements::from_text_parts(kind, elem, name, parts)?;
        self.values.push(Value::container(name, elem, items));
        Ok(())
    }

    /// Appends an already-built value.
    pub fn push(&mut self, value: Value) {
        self.values.push(value);
    }

    /// Takes ownership of a comment block collected by the parser.
    pub(crate) fn take_comments(&mut self, comments: Vec<String>) {
        self.comments = comments;
    }

    /// Renders the comment block, the `[name]` header, and every value.
    pub fn render(&self, quotes: &Quotes, style: CommentStyle, out: &mut String) {
        for comment in &self.comments {
            out.push_str(style.marker());
            out.push(' ');
            out.push_str(comment);
            out.push('\n');
        }

        out.push('[');
        out.push_str(&self.name);
        out.push_str("]\n");

        for value in &self.values {
            value.render(quotes, out);
        }
    }
}

impl Serialize for Group {
    /// Serializes as a map of value name to payload, in declaration order.
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut map = serializer.serialize_map(Some(self.values.len()))?;
        for value in &self.values {
            map.serialize_entry(value.name(), value)?;
        }
        map.end()
    }
}
