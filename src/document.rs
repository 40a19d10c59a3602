//! The in-memory document.
//!
//! This module provides [`PeponFile`], the root of a parsed document: an
//! insertion-ordered map from group name to [`Group`], plus the quoting
//! preference the printer applies.
//!
//! ## Why IndexMap?
//!
//! Groups are keyed by name but rendered by iterating the map, so the map's
//! iteration order decides the printed order. `IndexMap` keeps insertion
//! order, which makes printing reproduce the declaration order of the
//! source document.
//!
//! ## Examples
//!
//! ```rust
//! use pepon::{PeponFile, Quotes, TypeTag};
//!
//! let mut doc = PeponFile::new();
//! doc.add_group("Window").unwrap();
//! doc.add_scalar("Window", "width", TypeTag::Uint, "1280").unwrap();
//!
//! doc.use_quotation(Quotes::disabled());
//! assert!(pepon::to_string(&doc).contains("[Window]"));
//! ```

use indexmap::IndexMap;
use serde::ser::{Serialize, SerializeMap, Serializer};
use std::fs;
use std::path::Path;

use crate::error::{Error, Result};
use crate::group::Group;
use crate::options::Quotes;
use crate::types::{ContainerKind, TypeTag};

/// A parsed Pepon document: named groups in declaration order.
///
/// Built once per parse call; afterwards the only mutations are explicit
/// group/value insertion and quoting-preference updates. There is no
/// deletion API. Each group owns its values outright.
#[derive(Clone, Debug, PartialEq, Default)]
pub struct PeponFile {
    groups: IndexMap<String, Group>,
    quotes: Quotes,
}

impl PeponFile {
    /// Creates an empty document with the default quoting preference.
    #[must_use]
    pub fn new() -> PeponFile {
        PeponFile::default()
    }

    /// Reads a file from disk, splits it into lines, and parses it.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Io`] if the file cannot be read, or any parse
    /// error the content produces.
    pub fn load_path(path: impl AsRef<Path>) -> Result<PeponFile> {
        let text = fs::read_to_string(path).map_err(|e| Error::io(&e.to_string()))?;
        crate::parse_str(&text)
    }

    /// Renders this document and writes it to disk.
    ///
    /// An empty document writes nothing and leaves the target untouched.
    pub fn save_path(&self, path: impl AsRef<Path>) -> Result<()> {
        if self.groups.is_empty() {
            return Ok(());
        }
        fs::write(path, crate::to_string(self)).map_err(|e| Error::io(&e.to_string()))
    }

    /// Inserts a new empty group.
    ///
    /// # Errors
    ///
    /// Returns [`Error::DuplicateGroup`] if the name is already taken.
    pub fn add_group(&mut self, name: impl Into<String>) -> Result<&mut Group> {
        let name = name.into();
        if self.groups.contains_key(&name) {
            return Err(Error::DuplicateGroup { name });
        }
        let group = Group::new(name.clone());
        Ok(self.groups.entry(name).or_insert(group))
    }

    /// Looks up a group by name.
    ///
    /// # Errors
    ///
    /// Returns [`Error::GroupNotFound`] if no group has this name.
    pub fn group(&self, name: &str) -> Result<&Group> {
        self.groups
            .get(name)
            .ok_or_else(|| Error::group_not_found(name))
    }

    /// Looks up a group by name for modification.
    ///
    /// # Errors
    ///
    /// Returns [`Error::GroupNotFound`] if no group has this name.
    pub fn group_mut(&mut self, name: &str) -> Result<&mut Group> {
        self.groups
            .get_mut(name)
            .ok_or_else(|| Error::group_not_found(name))
    }

    /// Constructs a scalar from source text and appends it to the named
    /// group.
    pub fn add_scalar(&mut self, group: &str, name: &str, tag: TypeTag, text: &str) -> Result<()> {
        self.group_mut(group)?.add_scalar(name, tag, text)
    }

    /// Constructs a container from pre-split element substrings and
    /// appends it to the named group.
    pub fn add_container<'a, I>(
        &mut self,
        group: &str,
        name: &str,
        kind: ContainerKind,
        elem: TypeTag,
        parts: I,
    ) -> Result<()>
    where
        I: IntoIterator<Item = &'a str>,
    {
        self.group_mut(group)?.add_container(name, kind, elem, parts)
    }

    /// Sets the quoting preference the printer applies.
    pub fn use_quotation(&mut self, quotes: Quotes) {
        self.quotes = quotes;
    }

    /// Returns the active quoting preference.
    #[must_use]
    pub fn quotes(&self) -> &Quotes {
        &self.quotes
    }

    /// Returns the number of groups.
    #[must_use]
    pub fn len(&self) -> usize {
        self.groups.len()
    }

    /// Returns `true` if the document holds no groups.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }

    /// Returns an iterator over the groups, in declaration order.
    pub fn groups(&self) -> impl Iterator<Item = &Group> {
        self.groups.values()
    }
}

impl Serialize for PeponFile {
    /// Serializes as a map of group name to group, in declaration order.
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut map = serializer.serialize_map(Some(self.groups.len()))?;
        for (name, group) in &self.groups {
            map.serialize_entry(name, group)?;
        }
        map.end()
    }
}
