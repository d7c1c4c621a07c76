use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use exactpaths::{parser, ParseSourceError, Solver};

/// Print which vertex pairs of an edge list are joined by a walk of total weight zero.
#[derive(Parser)]
struct Cli {
    /// Edge-list file; reads standard input when absent or `-`.
    path: Option<PathBuf>,
    /// Log solver progress.
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let filter = if cli.verbose {
        tracing_subscriber::EnvFilter::from_default_env().add_directive(tracing::Level::DEBUG.into())
    } else {
        tracing_subscriber::EnvFilter::from_default_env().add_directive(tracing::Level::WARN.into())
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();

    let parsed = match cli.path {
        Some(path) if path.as_os_str() != "-" => parser::parse_file(path),
        _ => parser::parse_stdin(),
    };

    let edges = match parsed {
        Ok(edges) => edges,
        Err(ParseSourceError::Parse(err)) => {
            eprintln!("{err}\n\n{}", err.pointer());
            return ExitCode::FAILURE;
        }
        Err(err) => {
            eprintln!("{err}");
            return ExitCode::FAILURE;
        }
    };

    print!("{edges}");
    match Solver::default().solve_edges(&edges) {
        Ok(zero) => {
            println!();
            print!("{zero}");
            ExitCode::SUCCESS
        }
        Err(err) => {
            eprintln!("{err}");
            ExitCode::FAILURE
        }
    }
}
