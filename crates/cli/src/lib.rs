//! Schema Args CLI Library
//!
//! Command-line front end for `schema-args-core`. The `sargs` binary takes a
//! schema and a list of raw arguments, parses the arguments against the
//! schema and prints the typed results, or the parse error and usage line.
//!
//! # Examples
//!
//! ```bash
//! # Default schema `l,p#,d*`
//! sargs -- -l -p 8080 -d /srv
//!
//! # Custom schema, YAML output
//! sargs --schema "v,n#" --format yaml -- -v -n 3
//!
//! # Schema from the environment
//! SCHEMA_ARGS_SCHEMA="x*" sargs -- -x value
//! ```
//!
//! Set `RUST_LOG=debug` to see how the schema and arguments are interpreted.

pub mod cli_args;
pub mod error;
pub mod output;
