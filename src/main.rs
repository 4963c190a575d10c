use std::io::Read as _;
use std::process::ExitCode;

use clap::{Parser, Subcommand};

use guestlog::model::person::Person;
use guestlog::parser::{commands, dispatcher};
use guestlog::search::predicate::PersonPredicate;

#[derive(Parser)]
#[command(name = "guestlog")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Parse a command line and print the command object as JSON
    Check(CheckArgs),
    /// Filter a JSON array of persons from stdin with a find-style query
    Filter(FilterArgs),
}

#[derive(clap::Args)]
struct CheckArgs {
    /// Command string to parse (skips stdin)
    #[arg(long)]
    command: Option<String>,
}

#[derive(clap::Args)]
struct FilterArgs {
    /// find-style query, e.g. "n/John t/friend" or "bd/2024-10-15"
    #[arg(long)]
    query: String,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let exit_code = match cli.command {
        Commands::Check(args) => run_check(&args),
        Commands::Filter(args) => run_filter(&args),
    };

    ExitCode::from(exit_code)
}

fn run_check(args: &CheckArgs) -> u8 {
    let line = match resolve_command_line(args) {
        Ok(line) => line,
        Err(e) => {
            eprintln!("guestlog: {e}");
            return 2;
        }
    };
    let command = match dispatcher::parse(&line) {
        Ok(command) => command,
        Err(e) => {
            eprintln!("guestlog: {e}");
            return 1;
        }
    };
    match serde_json::to_string_pretty(&command) {
        Ok(json) => {
            println!("{json}");
            0
        }
        Err(e) => {
            eprintln!("guestlog: {e}");
            2
        }
    }
}

/// `--command` wins; otherwise read a `{"command": "..."}` JSON document
/// from stdin.
fn resolve_command_line(args: &CheckArgs) -> Result<String, anyhow::Error> {
    if let Some(command) = &args.command {
        return Ok(command.clone());
    }
    let input = read_stdin_to_string()?;
    let value: serde_json::Value =
        serde_json::from_str(&input).map_err(|e| anyhow::anyhow!("JSON parse error: {e}"))?;
    match value.get("command").and_then(serde_json::Value::as_str) {
        Some(command) => Ok(command.to_string()),
        None => Err(anyhow::anyhow!(
            "expected a 'command' string field in the stdin document"
        )),
    }
}

fn run_filter(args: &FilterArgs) -> u8 {
    let predicate = match build_predicate(&args.query) {
        Ok(predicate) => predicate,
        Err(e) => {
            eprintln!("guestlog: {e}");
            return 1;
        }
    };
    let persons = match read_persons() {
        Ok(persons) => persons,
        Err(e) => {
            eprintln!("guestlog: {e}");
            return 2;
        }
    };
    let matches: Vec<Person> = persons
        .into_iter()
        .filter(|person| predicate.matches(person))
        .collect();
    match serde_json::to_string_pretty(&matches) {
        Ok(json) => {
            println!("{json}");
            // grep-like: an empty result is reported through the exit code
            if matches.is_empty() { 1 } else { 0 }
        }
        Err(e) => {
            eprintln!("guestlog: {e}");
            2
        }
    }
}

fn build_predicate(query: &str) -> Result<PersonPredicate, anyhow::Error> {
    let criteria = commands::parse_criteria(query)?;
    Ok(PersonPredicate::new(criteria)?)
}

fn read_persons() -> Result<Vec<Person>, anyhow::Error> {
    let input = read_stdin_to_string()?;
    serde_json::from_str(&input).map_err(|e| anyhow::anyhow!("JSON parse error: {e}"))
}

fn read_stdin_to_string() -> Result<String, anyhow::Error> {
    let mut buf = String::new();
    std::io::stdin().read_to_string(&mut buf)?;
    Ok(buf)
}
