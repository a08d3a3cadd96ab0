mod history;
mod repl;
mod samples;

use anyhow::Result;
use clap::{Parser, Subcommand};
use clap_verbosity_flag::Verbosity;
use log::debug;
use postfix_trainer::validator::infix_converter::infix_to_postfix;
use postfix_trainer::validator::{lexer, tokens_to_string, validate};
use std::process::ExitCode;

/// Trains converting shell-like command lines into postfix order
#[derive(Parser, Debug)]
#[clap(author, version, about, long_about = None)]
struct Arguments {
    #[clap(flatten)]
    verbose: Verbosity,

    #[clap(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Check a postfix attempt against a command line
    Check {
        /// The command line, in infix order
        command: String,
        /// The attempted postfix rendition of the same tokens
        postfix: String,
    },
    /// Print the expected postfix form of a command line
    Convert {
        /// The command line, in infix order
        command: String,
    },
    /// Start an interactive practice session
    Practice,
}

fn main() -> ExitCode {
    let arguments = Arguments::parse();
    env_logger::Builder::new()
        .filter_level(arguments.verbose.log_level_filter())
        .init();

    let outcome = match arguments.command {
        Command::Check { command, postfix } => check(&command, &postfix),
        Command::Convert { command } => convert(&command),
        Command::Practice => repl::run().map(|_| ExitCode::SUCCESS),
    };

    match outcome {
        Ok(code) => code,
        Err(error) => {
            eprintln!("error: {:#}", error);
            ExitCode::FAILURE
        }
    }
}

fn check(command: &str, postfix: &str) -> Result<ExitCode> {
    debug!("checking {:?} against {:?}", postfix, command);
    let result = validate(command, postfix);
    repl::render_verdict(&result)?;
    if result.is_valid {
        Ok(ExitCode::SUCCESS)
    } else {
        Ok(ExitCode::FAILURE)
    }
}

fn convert(command: &str) -> Result<ExitCode> {
    let postfix = infix_to_postfix(lexer::tokenize(command));
    debug!("expected sequence: {:?}", postfix);
    println!("{}", tokens_to_string(&postfix)?);
    Ok(ExitCode::SUCCESS)
}
