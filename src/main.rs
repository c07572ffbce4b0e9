//! CLI tool to validate, format and export Gherkin feature files.

use std::fs;
use std::io::Write;
use std::process::ExitCode;

use gherkin_scanner::{Error, json};

fn main() -> ExitCode {
    let args: Vec<String> = std::env::args().collect();

    if args.len() < 2 || args[1] == "--help" || args[1] == "-h" {
        eprintln!("Usage: gherkin <command> [files...]");
        eprintln!();
        eprintln!("Commands:");
        eprintln!("  validate  Check if feature file(s) parse");
        eprintln!("  fmt       Format feature file(s) and print to stdout");
        eprintln!("  check     Check if feature file(s) are formatted");
        eprintln!("  json      Print the parsed document(s) as JSON");
        eprintln!();
        eprintln!("Examples:");
        eprintln!("  gherkin validate features/*.feature");
        eprintln!("  gherkin fmt login.feature");
        eprintln!("  gherkin json login.feature");
        return ExitCode::from(2);
    }

    let command = args[1].as_str();
    let files = &args[2..];

    if !matches!(command, "validate" | "fmt" | "check" | "json") {
        eprintln!("Unknown command: {command}");
        return ExitCode::from(2);
    }

    if files.is_empty() {
        eprintln!("Error: no files specified");
        return ExitCode::from(2);
    }

    let mut had_error = false;

    for path in files {
        match run(command, path) {
            Ok(passed) => had_error |= !passed,
            Err(e) => {
                eprintln!("{e}");
                had_error = true;
            }
        }
    }

    if had_error {
        ExitCode::FAILURE
    } else {
        ExitCode::SUCCESS
    }
}

/// Run one command on one file; `Ok(false)` means the check failed.
fn run(command: &str, path: &str) -> Result<bool, Error> {
    let document = gherkin_scanner::parse_file(path)?;
    match command {
        "validate" => {
            let (scenarios, steps) = document.feature.as_ref().map_or((0, 0), |feature| {
                (feature.scenarios.len(), feature.steps().count())
            });
            eprintln!("{path}: valid ({scenarios} scenario(s), {steps} step(s))");
        }
        "fmt" => print!("{}", gherkin_scanner::format(&document)),
        "check" => {
            let content = fs::read_to_string(path).map_err(|source| Error::Io {
                path: path.into(),
                source,
            })?;
            if gherkin_scanner::format(&document) != content {
                eprintln!("{path}: not formatted");
                return Ok(false);
            }
            eprintln!("{path}: formatted");
        }
        _ => {
            let mut stdout = std::io::stdout().lock();
            json::write(&mut stdout, &document)?;
            let _ = writeln!(stdout);
        }
    }
    Ok(true)
}
