//! Serializable snapshot of a parse, for printing results.

use serde::Serialize;

use crate::args::Args;
use crate::schema::ArgumentKind;
use crate::value::ArgumentValue;

#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
pub struct ArgumentReport {
    pub id: char,
    pub kind: ArgumentKind,
    pub value: ArgumentValue,
    pub found: bool,
}

#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
pub struct Report {
    pub schema: String,
    pub usage: String,
    pub valid: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    pub arguments: Vec<ArgumentReport>,
    pub found: Vec<char>,
}

impl From<&Args> for Report {
    fn from(args: &Args) -> Self {
        let arguments = args
            .schema()
            .iter()
            .map(|entry| ArgumentReport {
                id: entry.id,
                kind: entry.kind,
                value: args
                    .value(entry.id)
                    .cloned()
                    .unwrap_or_else(|| ArgumentValue::default_for(entry.kind)),
                found: args.has(entry.id),
            })
            .collect();

        Self {
            schema: args.schema().source().to_string(),
            usage: args.usage(),
            valid: args.is_valid(),
            error: args.error().map(ToString::to_string),
            arguments,
            found: args.found().collect(),
        }
    }
}
