use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

/// Errors raised while compiling a schema string.
///
/// These indicate a mistake in the schema itself rather than in the user's
/// command line, so construction fails outright instead of producing an
/// invalid [`Args`](crate::args::Args).
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    #[error("Bad character: {} in Args format {}", .id, .schema)]
    InvalidIdentifier { id: char, schema: String },

    #[error("Argument {} has invalid format : {}", .id, .tail)]
    InvalidFormat { id: char, tail: String },

    #[error("Argument {} is declared more than once in the schema", .0)]
    DuplicateIdentifier(char),
}

impl Error {
    pub fn invalid_identifier(id: char, schema: &str) -> Self {
        Self::InvalidIdentifier {
            id,
            schema: schema.to_string(),
        }
    }

    pub fn invalid_format(id: char, tail: &str) -> Self {
        Self::InvalidFormat {
            id,
            tail: tail.to_string(),
        }
    }
}

/// Problems found in the supplied arguments.
///
/// The `Display` output of each variant is the user-facing error message.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ArgsError {
    #[error("Argument(s) -{} unexpected.", join_ids(.0))]
    UnexpectedArguments(Vec<char>),

    #[error("Could not find string parameter for {}", .0)]
    MissingString(char),

    #[error("Argument {} expects an integer but was {}", .0, INVALID_INTEGER_PLACEHOLDER)]
    InvalidInteger(char),

    #[error("Could not find integer parameter for {}", .0)]
    MissingInteger(char),
}

fn join_ids(ids: &[char]) -> String {
    ids.iter().collect()
}

/// Stands in for the offending text in [`ArgsError::InvalidInteger`] messages.
pub const INVALID_INTEGER_PLACEHOLDER: &str = "TILT";

impl ArgsError {
    /// The identifier the error is about. For unexpected arguments this is
    /// the first one encountered.
    #[must_use]
    pub fn argument_id(&self) -> Option<char> {
        match self {
            Self::UnexpectedArguments(ids) => ids.first().copied(),
            Self::MissingString(id) | Self::InvalidInteger(id) | Self::MissingInteger(id) => {
                Some(*id)
            }
        }
    }
}
