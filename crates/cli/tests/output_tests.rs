#[cfg(test)]
mod tests {
    use clap::Parser;
    use schema_args_cli::cli_args::{Cli, Format};
    use schema_args_cli::error::Error;
    use schema_args_cli::output::{render, render_text, render_yaml};
    use schema_args_core::error::ArgsError;
    use schema_args_core::{config, Args};

    fn parse_cli(argv: &[&str]) -> (Cli, Args) {
        let cli = Cli::parse_from(argv.iter().copied());
        let schema = config::get_schema(&cli.schema);
        let args = Args::new(&schema, cli.arguments.as_slice()).unwrap();
        (cli, args)
    }

    #[test]
    fn test_text_output_for_command_line() {
        let (cli, args) = parse_cli(&[
            "sargs", "-s", "l,p#,d*", "--", "-l", "-p", "3000", "-d", "/var/www",
        ]);

        assert!(args.is_valid());
        assert_eq!(
            render(&args, cli.format).unwrap(),
            "l : true\np : 3000\nd : /var/www\nFound : l, p, d\n"
        );
    }

    #[test]
    fn test_yaml_output_contains_report() {
        let (cli, args) = parse_cli(&[
            "sargs", "-s", "v,c#", "-f", "yaml", "--", "-v", "-c", "12",
        ]);
        assert_eq!(cli.format, Format::Yaml);

        let rendered = render(&args, cli.format).unwrap();
        let report: serde_yaml::Value = serde_yaml::from_str(&rendered).unwrap();

        assert_eq!(report["schema"].as_str(), Some("v,c#"));
        assert_eq!(report["valid"].as_bool(), Some(true));
        assert!(report.get("error").is_none());

        let arguments = report["arguments"].as_sequence().unwrap();
        assert_eq!(arguments.len(), 2);
        assert_eq!(arguments[0]["id"].as_str(), Some("v"));
        assert_eq!(arguments[0]["kind"].as_str(), Some("boolean"));
        assert_eq!(arguments[0]["value"].as_bool(), Some(true));
        assert_eq!(arguments[1]["kind"].as_str(), Some("integer"));
        assert_eq!(arguments[1]["value"].as_i64(), Some(12));
        assert_eq!(arguments[1]["found"].as_bool(), Some(true));
    }

    #[test]
    fn test_yaml_output_for_invalid_arguments_includes_error() {
        let args = Args::new("v", &["-vq"]).unwrap();

        let rendered = render_yaml(&args).unwrap();
        let report: serde_yaml::Value = serde_yaml::from_str(&rendered).unwrap();

        assert_eq!(report["valid"].as_bool(), Some(false));
        assert_eq!(
            report["error"].as_str(),
            Some("Argument(s) -q unexpected.")
        );
    }

    #[test]
    fn test_text_output_for_empty_schema() {
        let (_, args) = parse_cli(&["sargs", "-s", ""]);
        assert_eq!(render_text(&args), "Found : (none)\n");
        assert_eq!(args.usage(), "");
    }

    #[test]
    fn test_invalid_arguments_error_message() {
        let error = Error::invalid_arguments(
            ArgsError::MissingInteger('p'),
            "-[l,p#,d*]".to_string(),
        );

        assert_eq!(
            error.to_string(),
            "Argument error: Could not find integer parameter for p\nUsage: -[l,p#,d*]"
        );
    }

    #[test]
    fn test_schema_error_converts() {
        let schema_error = Args::new("l,9", &[] as &[&str]).unwrap_err();
        let error: Error = schema_error.into();

        assert_eq!(
            error.to_string(),
            "Schema error: Bad character: 9 in Args format l,9"
        );
    }
}
