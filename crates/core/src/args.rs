//! The parsed, read-only view of a command line.

use std::collections::HashMap;

use indexmap::IndexSet;

use crate::error::{ArgsError, Result};
use crate::scan::{scan, ScanOutcome};
use crate::schema::Schema;
use crate::value::ArgumentValue;

/// Panic message for [`Args::error_message`] on a valid argument set.
pub const NO_ERROR_DIAGNOSTIC: &str = "TILT: error_message called on a valid argument set";

/// Arguments parsed against a schema.
///
/// All parsing happens on construction. Invalid user input does not fail
/// construction; check [`Args::is_valid`] and read [`Args::error_message`]
/// instead. Only a malformed schema is an error.
///
/// Getters never fail: identifiers that were not declared read as `false`,
/// `0` or an empty string.
///
/// # Examples
///
/// ```
/// use schema_args_core::Args;
///
/// let args = Args::new("l,p#,d*", &["-l", "-p", "8080"])?;
/// assert!(args.is_valid());
/// assert!(args.get_boolean('l'));
/// assert_eq!(args.get_int('p'), 8080);
/// assert_eq!(args.get_string('d'), "");
/// assert_eq!(args.cardinality(), 2);
/// # Ok::<(), schema_args_core::error::Error>(())
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Args {
    schema: Schema,
    values: HashMap<char, ArgumentValue>,
    found: IndexSet<char>,
    unexpected: Vec<char>,
    error: Option<ArgsError>,
}

impl Args {
    /// Compiles `schema` and parses `arguments` against it. `arguments`
    /// should not include the program name.
    ///
    /// # Errors
    ///
    /// Returns an error if the schema string is malformed. See
    /// [`Schema::parse`].
    pub fn new<S: AsRef<str>>(schema: &str, arguments: &[S]) -> Result<Self> {
        let schema = Schema::parse(schema)?;
        Ok(Self::from_outcome(scan(&schema, arguments), schema))
    }

    /// Parses `arguments` against an already compiled schema.
    #[must_use]
    pub fn parse_with<S: AsRef<str>>(schema: &Schema, arguments: &[S]) -> Self {
        Self::from_outcome(scan(schema, arguments), schema.clone())
    }

    fn from_outcome(outcome: ScanOutcome, schema: Schema) -> Self {
        let ScanOutcome {
            values,
            found,
            unexpected,
            error,
        } = outcome;

        Self {
            schema,
            values,
            found,
            unexpected,
            error,
        }
    }

    #[must_use]
    pub fn is_valid(&self) -> bool {
        self.error.is_none()
    }

    /// The error that made these arguments invalid, if any.
    #[must_use]
    pub fn error(&self) -> Option<&ArgsError> {
        self.error.as_ref()
    }

    /// Describes why the arguments are invalid.
    ///
    /// # Panics
    ///
    /// Panics if the arguments are valid. Check [`Args::is_valid`] first, or
    /// use [`Args::error`].
    #[must_use]
    pub fn error_message(&self) -> String {
        match &self.error {
            Some(error) => error.to_string(),
            None => panic!("{NO_ERROR_DIAGNOSTIC}"),
        }
    }

    #[must_use]
    pub fn usage(&self) -> String {
        self.schema.usage()
    }

    /// The number of distinct declared arguments found on the command line.
    #[must_use]
    pub fn cardinality(&self) -> usize {
        self.found.len()
    }

    #[must_use]
    pub fn has(&self, id: char) -> bool {
        self.found.contains(&id)
    }

    #[must_use]
    pub fn get_boolean(&self, id: char) -> bool {
        match self.values.get(&id) {
            Some(ArgumentValue::Boolean(value)) => *value,
            _ => false,
        }
    }

    #[must_use]
    pub fn get_int(&self, id: char) -> i32 {
        match self.values.get(&id) {
            Some(ArgumentValue::Integer(value)) => *value,
            _ => 0,
        }
    }

    #[must_use]
    pub fn get_string(&self, id: char) -> &str {
        match self.values.get(&id) {
            Some(ArgumentValue::String(value)) => value,
            _ => "",
        }
    }

    /// The current value of a declared argument.
    #[must_use]
    pub fn value(&self, id: char) -> Option<&ArgumentValue> {
        self.values.get(&id)
    }

    /// Found identifiers, in the order they were first seen.
    pub fn found(&self) -> impl Iterator<Item = char> + '_ {
        self.found.iter().copied()
    }

    /// Identifiers on the command line that the schema does not declare.
    #[must_use]
    pub fn unexpected(&self) -> &[char] {
        &self.unexpected
    }

    #[must_use]
    pub fn schema(&self) -> &Schema {
        &self.schema
    }
}
