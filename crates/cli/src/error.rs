use schema_args_core::error::ArgsError;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Schema error: {}", .0)]
    Schema(#[from] schema_args_core::error::Error),

    #[error("Argument error: {}\nUsage: {}", .source, .usage)]
    InvalidArguments { source: ArgsError, usage: String },

    #[error("Error writing YAML report: {}", .0)]
    Yaml(#[from] serde_yaml::Error),
}

impl Error {
    pub fn invalid_arguments(source: ArgsError, usage: String) -> Self {
        Self::InvalidArguments { source, usage }
    }
}
