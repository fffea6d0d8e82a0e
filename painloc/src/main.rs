//! # painloc
//!
//! A CLI tool that tells you how many lines of C# and XAML you have written.
//!
//! ## Overview
//!
//! painloc is built on top of painloclib. Run with no arguments, it walks the
//! current directory, counts the non-blank, non-comment lines of every `.cs`
//! and `.xaml` file and prints a single sentence with the total.
//!
//! ## Usage
//!
//! ```bash
//! # Count code lines under the current directory
//! painloc
//!
//! # Count every physical line, blank and comment lines included
//! painloc --policy raw
//!
//! # Count another directory and show per-file counts on stderr
//! painloc path/to/Solution -v
//!
//! # Wait for Enter before exiting (handy when launched from a file manager)
//! painloc --pause
//! ```

use std::io::{self, BufRead, IsTerminal};
use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Context;
use clap::{Arg, ArgAction, ArgMatches, Command};
use console::{Style, Term};
use painloclib::{count_directory, report, CountOptions, LinePolicy};
use tracing::debug;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Build the clap Command structure
fn build_command() -> Command {
    Command::new("painloc")
        .version(env!("CARGO_PKG_VERSION"))
        .author("Arthur Debert")
        .about("Counts the lines of C# and XAML you have painfully written")
        .arg(
            Arg::new("path")
                .help("Directory to analyze (defaults to current directory)")
                .default_value("."),
        )
        .arg(
            Arg::new("policy")
                .short('p')
                .long("policy")
                .value_parser(["raw", "filtered"])
                .default_value("filtered")
                .help("Which lines count: raw (every line) or filtered (no blank or // lines)"),
        )
        .arg(
            Arg::new("pause")
                .long("pause")
                .action(ArgAction::SetTrue)
                .help("Wait for Enter before exiting"),
        )
        .arg(
            Arg::new("verbose")
                .short('v')
                .long("verbose")
                .action(ArgAction::SetTrue)
                .help("Log per-file counts to stderr"),
        )
}

/// Install the stderr log subscriber. `RUST_LOG` wins over `--verbose`.
fn setup_logging(verbose: bool) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(if verbose { "debug" } else { "warn" }));

    tracing_subscriber::registry()
        .with(
            fmt::layer()
                .with_writer(std::io::stderr)
                .with_ansi(console::colors_enabled_stderr()),
        )
        .with(filter)
        .init();
}

/// Run the count and build the report line.
fn run(matches: &ArgMatches) -> anyhow::Result<String> {
    let path = matches
        .get_one::<String>("path")
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from("."));

    let policy = matches
        .get_one::<String>("policy")
        .map(|s| s.parse::<LinePolicy>())
        .transpose()
        .map_err(anyhow::Error::msg)?
        .unwrap_or_default();

    let options = CountOptions::new().policy(policy);
    let result = count_directory(&path, options)
        .with_context(|| format!("counting lines under '{}'", path.display()))?;

    debug!(
        files = result.file_count(),
        total = result.total,
        %policy,
        "count finished"
    );

    Ok(report(result.total))
}

/// Block until the user presses Enter. Returns at once when stdin is not a terminal.
fn wait_for_enter() {
    let stdin = io::stdin();
    if !stdin.is_terminal() {
        debug!("stdin is not a terminal, not pausing");
        return;
    }

    let mut line = String::new();
    let answer = Term::stderr()
        .write_line("Press Enter to exit")
        .and_then(|_| stdin.lock().read_line(&mut line));
    if let Err(e) = answer {
        debug!(error = %e, "pause interrupted");
    }
}

fn main() -> ExitCode {
    let matches = build_command().get_matches();
    setup_logging(matches.get_flag("verbose"));

    match run(&matches) {
        Ok(line) => {
            println!("{}", line);
            if matches.get_flag("pause") {
                wait_for_enter();
            }
            ExitCode::SUCCESS
        }
        Err(e) => {
            let label = Style::new().red().bold().for_stderr().apply_to("Error:");
            eprintln!("{} {:#}", label, e);
            ExitCode::FAILURE
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_command_is_valid() {
        build_command().debug_assert();
    }

    #[test]
    fn test_defaults() {
        let matches = build_command().get_matches_from(["painloc"]);

        assert_eq!(matches.get_one::<String>("path").unwrap(), ".");
        assert_eq!(matches.get_one::<String>("policy").unwrap(), "filtered");
        assert!(!matches.get_flag("pause"));
        assert!(!matches.get_flag("verbose"));
    }

    #[test]
    fn test_rejects_unknown_policy() {
        let result = build_command().try_get_matches_from(["painloc", "--policy", "fast"]);

        assert!(result.is_err());
    }

    #[test]
    fn test_run_reports_total() {
        let temp = tempfile::tempdir().unwrap();
        std::fs::write(temp.path().join("Main.cs"), "// c\n\nint x;\n").unwrap();
        let path = temp.path().to_string_lossy().to_string();

        let matches = build_command().get_matches_from(["painloc", path.as_str(), "-p", "raw"]);
        let line = run(&matches).unwrap();

        assert_eq!(line, report(3));
    }
}
