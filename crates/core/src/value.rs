use std::fmt::{Display, Formatter};

use serde::Serialize;

use crate::schema::ArgumentKind;

/// The current value of a declared argument.
#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
#[serde(untagged)]
pub enum ArgumentValue {
    Boolean(bool),
    Integer(i32),
    String(String),
}

impl ArgumentValue {
    /// The value an argument of `kind` holds until it is found on the
    /// command line.
    #[must_use]
    pub fn default_for(kind: ArgumentKind) -> Self {
        match kind {
            ArgumentKind::Boolean => Self::Boolean(false),
            ArgumentKind::Integer => Self::Integer(0),
            ArgumentKind::String => Self::String(String::new()),
        }
    }

    #[must_use]
    pub fn kind(&self) -> ArgumentKind {
        match self {
            Self::Boolean(_) => ArgumentKind::Boolean,
            Self::Integer(_) => ArgumentKind::Integer,
            Self::String(_) => ArgumentKind::String,
        }
    }
}

impl Display for ArgumentValue {
    fn fmt(&self, formatter: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Boolean(value) => write!(formatter, "{value}"),
            Self::Integer(value) => write!(formatter, "{value}"),
            Self::String(value) => formatter.write_str(value),
        }
    }
}
