use crate::history::{History, HISTORY_CAPACITY};
use crate::samples::SAMPLES;
use anyhow::{Context, Result};
use log::{debug, info};
use postfix_trainer::validator::operator::OPERATORS;
use postfix_trainer::validator::{tokens_to_string, validate, ValidationResult};
use std::io;
use std::io::Write;

/// Runs the interactive practice session: prompt for a command line and a
/// postfix attempt, render the verdict, repeat. Lines starting with `:`
/// are session commands; end-of-input quits like `:quit`.
pub fn run() -> Result<()> {
    let mut history = History::new();
    let mut next_sample = 0;

    println!("postfix practice session, :help for commands");

    loop {
        let line = match prompt("command> ")? {
            None => break,
            Some(line) => line,
        };

        if line.is_empty() {
            continue;
        }

        if let Some(command) = line.strip_prefix(':') {
            match command {
                "help" => print_help(),
                "example" => {
                    show_sample(&mut history, next_sample)?;
                    next_sample = (next_sample + 1) % SAMPLES.len();
                }
                "history" => print_history(&history),
                "clear" => {
                    history.clear();
                    println!("history cleared");
                }
                "quit" => break,
                other => println!("unknown command :{}, try :help", other),
            }
            continue;
        }

        let attempt = match prompt("postfix> ")? {
            None => break,
            Some(attempt) => attempt,
        };

        debug!("validating {:?} against {:?}", attempt, line);
        let result = validate(&line, &attempt);
        render_verdict(&result)?;
        history.record(result);
    }

    info!("practice session over");
    Ok(())
}

/// Prints the verdict for one result: the error message for empty input,
/// otherwise correct/incorrect with the two sequences and the first
/// differing position on a mismatch.
pub fn render_verdict(result: &ValidationResult) -> Result<()> {
    if let Some(message) = &result.error_message {
        println!("error: {}", message);
        return Ok(());
    }

    if result.is_valid {
        println!("correct");
        return Ok(());
    }

    println!("incorrect");
    println!("expected: {}", tokens_to_string(&result.expected_sequence)?);
    println!("provided: {}", tokens_to_string(&result.provided_sequence)?);
    if let Some(index) = result.first_mismatch() {
        println!("first difference at token {}", index + 1);
    }
    Ok(())
}

fn prompt(label: &str) -> Result<Option<String>> {
    print!("{}", label);
    io::stdout().flush().context("Failed to flush prompt")?;

    let mut line = String::new();
    let bytes_read = io::stdin()
        .read_line(&mut line)
        .context("Failed to read input")?;
    if bytes_read == 0 {
        // End of input.
        return Ok(None);
    }
    Ok(Some(line.trim().to_string()))
}

fn show_sample(history: &mut History, index: usize) -> Result<()> {
    let sample = &SAMPLES[index];
    println!("command:  {}", sample.command);
    println!("postfix:  {}", sample.postfix);
    println!("note:     {}", sample.note);

    let result = validate(sample.command, sample.postfix);
    render_verdict(&result)?;
    history.record(result);
    Ok(())
}

fn print_help() {
    println!("enter a command line, then its postfix rendition");
    println!();
    println!("session commands:");
    println!("  :help     show this panel");
    println!("  :example  load and solve a canned example pair");
    println!("  :history  show the {} most recent results", HISTORY_CAPACITY);
    println!("  :clear    drop the history");
    println!("  :quit     leave the session");
    println!();
    println!("operators, higher precedence binds tighter:");
    for descriptor in &OPERATORS {
        println!(
            "  {:<3} {}  {}",
            descriptor.symbol, descriptor.precedence, descriptor.description
        );
    }
}

fn print_history(history: &History) {
    if history.is_empty() {
        println!("no results yet");
        return;
    }
    for entry in history.iter() {
        let verdict = match &entry.error_message {
            Some(_) => "error",
            None if entry.is_valid => "correct",
            None => "incorrect",
        };
        println!(
            "[{}] {:<9} {}  =>  {}",
            entry.timestamp, verdict, entry.input_command, entry.input_postfix
        );
    }
}
