use clap::{Arg, ArgAction, Command};
use std::io::IsTerminal;
use std::path::Path;
use tracing::{debug, Level};

use hscpp_scan::output::{self, Format};
use hscpp_scan::parsing;
use hscpp_scan::problem::{concise_loading_error, full_parsing_error};
use hscpp_scan::rendering::{Identity, Render, Syntax, Terminal};

fn main() {
    const VERSION: &str = concat!("v", env!("CARGO_PKG_VERSION"));

    let matches = Command::new("hscpp-scan")
        .version(VERSION)
        .propagate_version(true)
        .author("Andrew Cowie")
        .about("Extract hscpp build directives from C++ source files.")
        .disable_help_subcommand(true)
        .arg(
            Arg::new("verbose")
                .short('v')
                .long("verbose")
                .global(true)
                .action(ArgAction::SetTrue)
                .help("Log debugging information to standard error."),
        )
        .subcommand(
            Command::new("scan")
                .about("List the directives found in the given source files")
                .arg(
                    Arg::new("output")
                        .short('o')
                        .long("output")
                        .value_parser(["native", "json"])
                        .default_value("native")
                        .help("Which format to print the directives in."),
                )
                .arg(
                    Arg::new("raw-control-chars")
                        .short('R')
                        .long("raw-control-chars")
                        .action(ArgAction::SetTrue)
                        .help("Emit ANSI escape codes in diagnostics even if output is redirected to a pipe or file."),
                )
                .arg(
                    Arg::new("filenames")
                        .required(true)
                        .num_args(1..)
                        .help("The source files to scan."),
                ),
        )
        .subcommand(
            Command::new("check")
                .about("Report malformed directives in the given source files")
                .arg(
                    Arg::new("raw-control-chars")
                        .short('R')
                        .long("raw-control-chars")
                        .action(ArgAction::SetTrue)
                        .help("Emit ANSI escape codes in diagnostics even if output is redirected to a pipe or file."),
                )
                .arg(
                    Arg::new("filenames")
                        .required(true)
                        .num_args(1..)
                        .help("The source files to check."),
                ),
        )
        .get_matches();

    let level = if matches.get_flag("verbose") {
        Level::DEBUG
    } else {
        Level::WARN
    };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();

    match matches.subcommand() {
        Some(("scan", submatches)) => {
            let format = match submatches
                .get_one::<String>("output")
                .map(String::as_str)
            {
                Some("json") => Format::Json,
                _ => Format::Native,
            };
            let raw = submatches.get_flag("raw-control-chars");
            let filenames = filenames(submatches);

            let failed = if raw || std::io::stderr().is_terminal() {
                run_scan(&filenames, format, &Terminal)
            } else {
                run_scan(&filenames, format, &Identity)
            };
            if failed {
                std::process::exit(1);
            }
        }
        Some(("check", submatches)) => {
            let raw = submatches.get_flag("raw-control-chars");
            let filenames = filenames(submatches);

            let failed = if raw || std::io::stderr().is_terminal() {
                run_check(&filenames, &Terminal)
            } else {
                run_check(&filenames, &Identity)
            };
            if failed {
                std::process::exit(1);
            }
        }
        Some(_) => {
            println!("No valid subcommand was used")
        }
        None => {
            println!("usage: hscpp-scan [COMMAND] ...");
            println!("Try '--help' for more information.");
        }
    }
}

fn filenames(submatches: &clap::ArgMatches) -> Vec<&Path> {
    submatches
        .get_many::<String>("filenames")
        .into_iter()
        .flatten()
        .map(Path::new)
        .collect()
}

/// Print the directives found in each file. Malformed directives are
/// reported but do not stop the remaining directives being listed. Returns
/// true if any file could not be read.
fn run_scan(filenames: &[&Path], format: Format, renderer: &impl Render) -> bool {
    let mut failed = false;

    for filename in filenames {
        debug!(?filename);

        let content = match parsing::load(filename) {
            Ok(content) => content,
            Err(error) => {
                eprintln!("{}", concise_loading_error(&error, renderer));
                failed = true;
                continue;
            }
        };

        let (result, errors) = parsing::parse(filename, &content);
        for error in &errors {
            eprintln!(
                "{}\n",
                full_parsing_error(error, filename, &content, renderer)
            );
        }

        match output::render(filename, &result, format) {
            Ok(text) => print!("{}", text),
            Err(error) => {
                eprintln!("{}: {}", renderer.style(Syntax::Error, "error"), error);
                failed = true;
            }
        }
        if format == Format::Json {
            println!();
        }
    }

    failed
}

/// Report every problem in each file. Returns true if there were any.
fn run_check(filenames: &[&Path], renderer: &impl Render) -> bool {
    let mut failed = false;

    for filename in filenames {
        let content = match parsing::load(filename) {
            Ok(content) => content,
            Err(error) => {
                eprintln!("{}", concise_loading_error(&error, renderer));
                failed = true;
                continue;
            }
        };

        let (_, errors) = parsing::parse(filename, &content);
        for error in &errors {
            eprintln!(
                "{}\n",
                full_parsing_error(error, filename, &content, renderer)
            );
        }
        if !errors.is_empty() {
            failed = true;
        }
    }

    failed
}
