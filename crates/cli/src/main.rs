use std::process::ExitCode;

use clap::Parser;
use log::debug;
use schema_args_core::{config, Args};

use schema_args_cli::cli_args::Cli;
use schema_args_cli::error::{Error, Result};
use schema_args_cli::output;

fn execute() -> Result<()> {
    let cli = Cli::parse();

    let schema = config::get_schema(&cli.schema);
    debug!("Schema: `{schema}`");

    let args = Args::new(&schema, cli.arguments.as_slice())?;

    if let Some(error) = args.error() {
        return Err(Error::invalid_arguments(error.clone(), args.usage()));
    }

    print!("{}", output::render(&args, cli.format)?);
    Ok(())
}

fn main() -> ExitCode {
    env_logger::init();

    match execute() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{e}");
            ExitCode::FAILURE
        }
    }
}
