//! Schema resolution for the command-line front end.

use std::env;

use log::debug;

/// Schema used when none is given on the command line or in the environment.
pub const DEFAULT_SCHEMA: &str = "l,p#,d*";

/// Environment variable that may hold a schema string.
pub const SCHEMA_ENV_VAR: &str = "SCHEMA_ARGS_SCHEMA";

/// Resolves the schema string to parse with.
///
/// An explicit schema wins, then [`SCHEMA_ENV_VAR`], then
/// [`DEFAULT_SCHEMA`].
///
/// # Examples
///
/// ```
/// use schema_args_core::config::get_schema;
///
/// assert_eq!(get_schema(&Some("a,b#".to_string())), "a,b#");
/// ```
#[must_use]
pub fn get_schema(schema_arg: &Option<String>) -> String {
    resolve_schema(schema_arg, env::var(SCHEMA_ENV_VAR).ok())
}

fn resolve_schema(schema_arg: &Option<String>, from_environment: Option<String>) -> String {
    if let Some(schema) = schema_arg {
        return schema.clone();
    }

    match from_environment {
        Some(schema) => {
            debug!("Using schema from `{SCHEMA_ENV_VAR}`: `{schema}`");
            schema
        }
        None => DEFAULT_SCHEMA.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_explicit_schema_wins() {
        let result = resolve_schema(&Some("x*".to_string()), Some("y#".to_string()));
        assert_eq!(result, "x*");
    }

    #[test]
    fn test_environment_schema_used_when_not_explicit() {
        let result = resolve_schema(&None, Some("y#".to_string()));
        assert_eq!(result, "y#");
    }

    #[test]
    fn test_default_schema() {
        let result = resolve_schema(&None, None);
        assert_eq!(result, DEFAULT_SCHEMA);
        assert_eq!(DEFAULT_SCHEMA, "l,p#,d*");
    }

    #[test]
    fn test_empty_explicit_schema_is_kept() {
        let result = resolve_schema(&Some(String::new()), Some("y#".to_string()));
        assert_eq!(result, "");
    }
}
