//! Numscript CLI.

use std::io::IsTerminal;
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use numscript::commands::{check, check_human, read_stdin, run, CheckFormat, RunOptions};
use numscript::{init_tracing, CliError};
use numscript_diagnostic::emitter::ColorMode;

#[derive(Parser, Debug)]
#[command(name = "numscript", version)]
#[command(about = "Check and run Numscript programs")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Read a script from stdin and report its diagnostics.
    Check {
        #[arg(long, value_enum, default_value_t = CheckFormat::Json)]
        format: CheckFormat,
    },
    /// Read a run request from stdin and print the postings and metadata.
    Run {
        /// Enable an experimental behavior; may be repeated.
        #[arg(long = "feature-flag", value_name = "NAME")]
        feature_flags: Vec<String>,
        /// Abort after this many statements.
        #[arg(long, value_name = "N")]
        step_limit: Option<u64>,
    },
}

fn main() -> ExitCode {
    init_tracing();
    let cli = Cli::parse();

    match execute(cli.command) {
        Ok(output) => {
            println!("{output}");
            ExitCode::SUCCESS
        }
        Err(error) => {
            eprintln!("{error}");
            ExitCode::FAILURE
        }
    }
}

fn execute(command: Command) -> Result<String, CliError> {
    let input = read_stdin()?;
    match command {
        Command::Check {
            format: CheckFormat::Json,
        } => check(&input),
        Command::Check {
            format: CheckFormat::Human,
        } => check_human(&input, ColorMode::Auto, std::io::stdout().is_terminal()),
        Command::Run {
            feature_flags,
            step_limit,
        } => {
            let options = RunOptions {
                feature_flags,
                step_limit,
                ..RunOptions::default()
            };
            run(&input, &options)
        }
    }
}
