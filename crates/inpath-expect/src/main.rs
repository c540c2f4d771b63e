//! inpath-expect - expected in-path rule table rows
//!
//! Prints the rows a management UI is expected to show for in-path rules,
//! either for every rule in a fixture file or for a single rule given on the
//! command line.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use inpath_expect::{expected_rule_from_fields, ExpectError, ExpectedData, RuleTable};
use std::path::PathBuf;
use std::process::ExitCode;
use tracing::{error, info};
use tracing_subscriber::{EnvFilter, FmtSubscriber};

/// Expected in-path rule table rows
#[derive(Parser, Debug)]
#[command(name = "inpath-expect")]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Log level (trace, debug, info, warn, error)
    #[arg(short = 'l', long, default_value = "info", global = true)]
    log_level: String,

    /// Output format
    #[arg(short = 'f', long, value_enum, default_value = "json", global = true)]
    format: OutputFormat,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Expected rows for every rule in a fixture file
    Table {
        /// YAML or JSON fixture file
        path: PathBuf,
    },

    /// Expected rows for a single rule
    Rule {
        /// Rule type label (Auto Discover, Fixed-Target, Pass Through, Discard, Deny)
        #[arg(short = 't', long = "type")]
        type_of_rule: String,

        /// Rule parameter as name=value (repeatable)
        #[arg(short = 'p', long = "param", value_name = "NAME=VALUE")]
        params: Vec<String>,

        /// Rules already in the table; used as the position when none is given
        #[arg(short = 'n', long)]
        number_of_rules: Option<usize>,
    },
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum OutputFormat {
    Json,
    Yaml,
}

/// Initializes tracing/logging subsystem
fn init_logging(level: &str) -> Result<()> {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(level))
        .with_context(|| format!("Invalid log level '{}'", level))?;

    let subscriber = FmtSubscriber::builder()
        .with_env_filter(filter)
        .with_target(true)
        .with_writer(std::io::stderr)
        .finish();

    tracing::subscriber::set_global_default(subscriber)
        .context("Failed to set tracing subscriber")?;
    Ok(())
}

/// Splits a `name=value` command line parameter.
fn parse_param(param: &str) -> Result<(String, String), ExpectError> {
    param
        .split_once('=')
        .map(|(name, value)| (name.trim().to_string(), value.to_string()))
        .ok_or_else(|| ExpectError::invalid_parameter(param, "expected NAME=VALUE"))
}

fn render(data: &[ExpectedData], format: OutputFormat) -> Result<String> {
    Ok(match format {
        OutputFormat::Json => serde_json::to_string_pretty(data)?,
        OutputFormat::Yaml => serde_yaml::to_string(data)?,
    })
}

fn run(args: &Args) -> Result<()> {
    let data = match &args.command {
        Command::Table { path } => {
            let table = RuleTable::load(path)?;
            table.expected_data().with_context(|| {
                format!("Failed to build expected rows for '{}'", path.display())
            })?
        }
        Command::Rule {
            type_of_rule,
            params,
            number_of_rules,
        } => {
            let mut fields = vec![("type_of_rule".to_string(), type_of_rule.clone())];
            for param in params {
                fields.push(parse_param(param)?);
            }
            vec![expected_rule_from_fields(fields, *number_of_rules)?]
        }
    };

    info!(rules = data.len(), "Built expected in-path rule rows");
    println!("{}", render(&data, args.format)?);
    Ok(())
}

fn main() -> ExitCode {
    let args = Args::parse();

    if let Err(e) = init_logging(&args.log_level) {
        eprintln!("inpath-expect: {:#}", e);
        return ExitCode::FAILURE;
    }

    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!(error = %format!("{:#}", e), "inpath-expect failed");
            eprintln!("inpath-expect: {:#}", e);
            ExitCode::FAILURE
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_param() {
        assert_eq!(
            parse_param("vlan_id=corp").unwrap(),
            ("vlan_id".to_string(), "corp".to_string())
        );
        assert_eq!(
            parse_param("description=a=b").unwrap(),
            ("description".to_string(), "a=b".to_string())
        );
        assert!(parse_param("vlan_id").is_err());
    }

    #[test]
    fn test_args_parse_rule() {
        let args = Args::try_parse_from([
            "inpath-expect",
            "rule",
            "--type",
            "Pass Through",
            "-p",
            "position=2",
            "--format",
            "yaml",
        ])
        .unwrap();
        assert!(matches!(args.format, OutputFormat::Yaml));
        match args.command {
            Command::Rule {
                type_of_rule,
                params,
                number_of_rules,
            } => {
                assert_eq!(type_of_rule, "Pass Through");
                assert_eq!(params, vec!["position=2".to_string()]);
                assert_eq!(number_of_rules, None);
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn test_render_json() {
        let data = vec![expected_rule_from_fields([("type_of_rule", "Deny")], Some(1)).unwrap()];
        let json = render(&data, OutputFormat::Json).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value[0][0][1], serde_json::json!(["Deny"]));
    }
}
