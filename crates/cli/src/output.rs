//! Rendering parsed arguments for the terminal.

use itertools::Itertools;
use schema_args_core::report::Report;
use schema_args_core::Args;

use crate::cli_args::Format;
use crate::error::Result;

/// Renders valid arguments in the requested format.
///
/// # Errors
///
/// Returns an error if the YAML report cannot be serialized.
pub fn render(args: &Args, format: Format) -> Result<String> {
    match format {
        Format::Text => Ok(render_text(args)),
        Format::Yaml => render_yaml(args),
    }
}

/// One `id : value` line per declared argument, in schema order, followed
/// by the identifiers found on the command line.
#[must_use]
pub fn render_text(args: &Args) -> String {
    let mut lines: Vec<String> = args
        .schema()
        .iter()
        .map(|entry| match args.value(entry.id) {
            Some(value) => format!("{} : {}", entry.id, value),
            None => format!("{} : ", entry.id),
        })
        .collect();

    let found = if args.cardinality() == 0 {
        "(none)".to_string()
    } else {
        args.found().join(", ")
    };
    lines.push(format!("Found : {found}"));

    lines.join("\n") + "\n"
}

/// # Errors
///
/// Returns an error if serialization fails.
pub fn render_yaml(args: &Args) -> Result<String> {
    Ok(serde_yaml::to_string(&Report::from(args))?)
}
