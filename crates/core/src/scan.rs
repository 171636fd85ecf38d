//! The argument scan.
//!
//! Walks the argument tokens once, against a compiled [`Schema`]. Tokens that
//! start with [`MARKER`] hold one or more flag identifiers; every other token
//! is skipped unless a preceding integer or string flag consumed it as its
//! parameter.
//!
//! Unknown identifiers are collected and the scan carries on. A missing or
//! malformed parameter stops the scan at that point.

use std::collections::HashMap;

use indexmap::IndexSet;
use log::{debug, trace, warn};

use crate::error::ArgsError;
use crate::schema::{ArgumentKind, Schema};
use crate::value::ArgumentValue;

/// Introduces a group of flag identifiers in an argument token.
pub const MARKER: char = '-';

/// Everything a scan learned about the arguments.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct ScanOutcome {
    pub values: HashMap<char, ArgumentValue>,
    pub found: IndexSet<char>,
    pub unexpected: Vec<char>,
    pub error: Option<ArgsError>,
}

struct Scanner<'a, S> {
    schema: &'a Schema,
    arguments: &'a [S],
    cursor: usize,
    values: HashMap<char, ArgumentValue>,
    found: IndexSet<char>,
    unexpected: Vec<char>,
}

pub(crate) fn scan<S: AsRef<str>>(schema: &Schema, arguments: &[S]) -> ScanOutcome {
    let mut scanner = Scanner::new(schema, arguments);
    let aborted = scanner.run().err();

    if let Some(error) = &aborted {
        warn!("Stopped scanning arguments: {error}");
    }

    scanner.finish(aborted)
}

impl<'a, S: AsRef<str>> Scanner<'a, S> {
    fn new(schema: &'a Schema, arguments: &'a [S]) -> Self {
        let values = schema
            .iter()
            .map(|entry| (entry.id, ArgumentValue::default_for(entry.kind)))
            .collect();

        Self {
            schema,
            arguments,
            cursor: 0,
            values,
            found: IndexSet::new(),
            unexpected: Vec::new(),
        }
    }

    fn run(&mut self) -> Result<(), ArgsError> {
        let arguments = self.arguments;

        while let Some(argument) = arguments.get(self.cursor) {
            let argument = argument.as_ref();

            match argument.strip_prefix(MARKER) {
                Some(ids) => {
                    for id in ids.chars() {
                        self.parse_element(id)?;
                    }
                }
                None => trace!("Ignoring argument without marker: `{argument}`"),
            }

            self.cursor += 1;
        }

        Ok(())
    }

    fn parse_element(&mut self, id: char) -> Result<(), ArgsError> {
        let value = match self.schema.kind(id) {
            Some(ArgumentKind::Boolean) => ArgumentValue::Boolean(true),
            Some(ArgumentKind::Integer) => ArgumentValue::Integer(self.integer_parameter(id)?),
            Some(ArgumentKind::String) => ArgumentValue::String(self.string_parameter(id)?),
            None => {
                warn!("Unexpected argument `{id}`");
                self.unexpected.push(id);
                return Ok(());
            }
        };

        debug!("Argument `{id}` set to `{value}`");
        self.values.insert(id, value);
        self.found.insert(id);
        Ok(())
    }

    /// Moves the cursor onto the next token and returns it, if there is one.
    fn next_parameter(&mut self) -> Option<&'a str> {
        self.cursor += 1;
        self.arguments.get(self.cursor).map(AsRef::as_ref)
    }

    fn integer_parameter(&mut self, id: char) -> Result<i32, ArgsError> {
        let parameter = self
            .next_parameter()
            .ok_or(ArgsError::MissingInteger(id))?;

        parameter
            .parse::<i32>()
            .map_err(|_| ArgsError::InvalidInteger(id))
    }

    fn string_parameter(&mut self, id: char) -> Result<String, ArgsError> {
        self.next_parameter()
            .map(ToString::to_string)
            .ok_or(ArgsError::MissingString(id))
    }

    /// An aborting error takes precedence over unexpected arguments seen
    /// before it.
    fn finish(self, aborted: Option<ArgsError>) -> ScanOutcome {
        let error = aborted.or_else(|| {
            (!self.unexpected.is_empty())
                .then(|| ArgsError::UnexpectedArguments(self.unexpected.clone()))
        });

        ScanOutcome {
            values: self.values,
            found: self.found,
            unexpected: self.unexpected,
            error,
        }
    }
}
