//! Command-line argument parsing for the `sargs` binary.
//!
//! `sargs` takes its own options first, then `--`, then the raw arguments to
//! check against the schema. Everything after `--` is passed through
//! untouched, so it can contain flags that look like `sargs`'s own.

use clap::{Parser, ValueEnum};

/// How parsed results are printed.
#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum Format {
    /// One `id : value` line per declared argument
    #[default]
    Text,
    /// A YAML report of the whole parse
    Yaml,
}

/// Command-line arguments for the `sargs` tool.
///
/// # Examples
///
/// ```rust
/// use clap::Parser;
/// use schema_args_cli::cli_args::Cli;
///
/// let cli = Cli::parse_from(["sargs", "-s", "l,p#", "--", "-l", "-p", "80"]);
/// assert_eq!(cli.arguments, vec!["-l", "-p", "80"]);
/// ```
#[derive(Parser, Debug)] // requires `derive` feature
#[command(term_width = 0)] // Just to make testing across clap features easier
pub struct Cli {
    /// Schema describing the expected flags, e.g. `l,p#,d*`.
    ///
    /// A bare letter is a boolean flag, `#` marks an integer flag and `*` a
    /// string flag. If not provided, `SCHEMA_ARGS_SCHEMA` is read from the
    /// environment, falling back to `l,p#,d*`.
    #[arg(long, short = 's')]
    pub schema: Option<String>,

    /// Output format for the parsed values.
    #[arg(long, short = 'f', value_enum, default_value_t = Format::Text)]
    pub format: Format,

    /// Arguments to parse against the schema, given after `--`.
    ///
    /// # Examples
    /// ```bash
    /// sargs -s "l,p#,d*" -- -l -p 8080 -d /srv
    /// ```
    #[arg(last = true, allow_hyphen_values = true)]
    pub arguments: Vec<String>,
}
