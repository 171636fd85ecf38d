//! Schema compilation.
//!
//! A schema is a comma separated list of flag declarations. Each declaration
//! is a single alphabetic identifier, optionally followed by a marker that
//! selects the kind of value the flag carries:
//!
//! - `l` declares a boolean flag
//! - `p#` declares an integer flag
//! - `d*` declares a string flag
//!
//! Whitespace around declarations is ignored, as are empty declarations, so
//! `"l, p#,d*,"` compiles to the same schema as `"l,p#,d*"`.

use std::fmt::{Display, Formatter};
use std::str::FromStr;

use indexmap::IndexMap;
use log::debug;
use serde::Serialize;

use crate::error::{Error, Result};

const SEPARATOR: char = ',';
const INTEGER_MARKER: &str = "#";
const STRING_MARKER: &str = "*";

/// The kind of value a flag carries.
#[derive(Serialize, Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum ArgumentKind {
    Boolean,
    Integer,
    String,
}

impl ArgumentKind {
    fn from_tail(tail: &str) -> Option<Self> {
        match tail {
            "" => Some(Self::Boolean),
            INTEGER_MARKER => Some(Self::Integer),
            STRING_MARKER => Some(Self::String),
            _ => None,
        }
    }
}

impl Display for ArgumentKind {
    /// Writes the schema marker for the kind, which is empty for booleans.
    fn fmt(&self, formatter: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Boolean => Ok(()),
            Self::Integer => formatter.write_str(INTEGER_MARKER),
            Self::String => formatter.write_str(STRING_MARKER),
        }
    }
}

/// One declaration from a schema string.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SchemaEntry {
    pub id: char,
    pub kind: ArgumentKind,
}

impl Display for SchemaEntry {
    fn fmt(&self, formatter: &mut Formatter<'_>) -> std::fmt::Result {
        write!(formatter, "{}{}", self.id, self.kind)
    }
}

/// A compiled schema: the declared identifiers and their kinds, in
/// declaration order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Schema {
    source: String,
    entries: IndexMap<char, ArgumentKind>,
}

impl Schema {
    /// Compiles a schema string.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - A declaration does not start with an alphabetic character
    /// - A declaration has a tail other than nothing, `#` or `*`
    /// - An identifier is declared twice
    ///
    /// # Examples
    ///
    /// ```
    /// use schema_args_core::schema::{ArgumentKind, Schema};
    ///
    /// let schema = Schema::parse("l,p#,d*")?;
    /// assert_eq!(schema.kind('p'), Some(ArgumentKind::Integer));
    /// assert!(Schema::parse("u=").is_err());
    /// # Ok::<(), schema_args_core::error::Error>(())
    /// ```
    pub fn parse(source: &str) -> Result<Self> {
        let mut entries = IndexMap::new();

        for element in source.split(SEPARATOR) {
            let element = element.trim();
            if element.is_empty() {
                continue;
            }

            let entry = parse_element(element, source)?;
            if entries.insert(entry.id, entry.kind).is_some() {
                return Err(Error::DuplicateIdentifier(entry.id));
            }
            debug!("Declared argument `{}` as {:?}", entry.id, entry.kind);
        }

        Ok(Self {
            source: source.to_string(),
            entries,
        })
    }

    /// The schema string this was compiled from, verbatim.
    #[must_use]
    pub fn source(&self) -> &str {
        &self.source
    }

    #[must_use]
    pub fn kind(&self, id: char) -> Option<ArgumentKind> {
        self.entries.get(&id).copied()
    }

    #[must_use]
    pub fn contains(&self, id: char) -> bool {
        self.entries.contains_key(&id)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = SchemaEntry> + '_ {
        self.entries
            .iter()
            .map(|(&id, &kind)| SchemaEntry { id, kind })
    }

    /// The usage line for this schema: `-[<schema>]`, or an empty string for
    /// an empty schema string.
    #[must_use]
    pub fn usage(&self) -> String {
        if self.source.is_empty() {
            String::new()
        } else {
            format!("-[{}]", self.source)
        }
    }
}

impl FromStr for Schema {
    type Err = Error;

    fn from_str(source: &str) -> Result<Self> {
        Self::parse(source)
    }
}

/// Parses one trimmed, non-empty declaration.
fn parse_element(element: &str, source: &str) -> Result<SchemaEntry> {
    let mut chars = element.chars();
    let Some(id) = chars.next() else {
        unreachable!("empty schema elements are skipped before parsing");
    };

    if !id.is_alphabetic() {
        return Err(Error::invalid_identifier(id, source));
    }

    let tail = chars.as_str();
    let kind = ArgumentKind::from_tail(tail).ok_or_else(|| Error::invalid_format(id, tail))?;

    Ok(SchemaEntry { id, kind })
}
