//! Thin CLI driver around the `yang_front` library. Does its own file
//! I/O and reports results on stdout/stderr; everything else (parsing,
//! resolution) happens in the library.

use clap::{Parser, Subcommand};
use std::path::PathBuf;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;
use yang_front::{parse_module, parse_submodule, resolve_module, Severity};

#[derive(Parser)]
#[command(name = "yang-front", about = "Parse and inspect a YANG module or submodule")]
struct Cli {
    #[command(subcommand)]
    command: Command,

    /// Print each resolved type/grouping reference alongside diagnostics.
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Command {
    /// Parse a file and report whether it's a well-formed module or submodule.
    Validate {
        /// Path to a `.yang` file.
        file: PathBuf,
    },
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .without_time()
        .init();

    let cli = Cli::parse();
    match cli.command {
        Command::Validate { file } => validate(&file, cli.verbose),
    }
}

fn validate(path: &std::path::Path, verbose: bool) -> ExitCode {
    let text = match std::fs::read_to_string(path) {
        Ok(text) => text,
        Err(err) => {
            eprintln!("error: could not read {}: {err}", path.display());
            return ExitCode::FAILURE;
        }
    };

    let first_keyword = text.split_whitespace().next().unwrap_or("");
    let outcome = match first_keyword {
        "submodule" => parse_submodule(&text).map(|o| (o, true)),
        _ => parse_module(&text).map(|o| (o, false)),
    };

    let (outcome, is_submodule) = match outcome {
        Ok(pair) => pair,
        Err(err) => {
            eprintln!("error: {err}");
            return ExitCode::FAILURE;
        }
    };

    for diagnostic in &outcome.diagnostics {
        match diagnostic.severity {
            Severity::Warning => eprintln!("warning: {diagnostic}"),
            Severity::Error => eprintln!("error: {diagnostic}"),
        }
    }

    let module = outcome.value;
    if is_submodule {
        println!("Detected submodule: {}", module.name);
    } else {
        println!("Detected module: {}", module.name);
    }

    if verbose {
        let nodes = resolve_module(&module);
        for node in &nodes {
            if let Some(describe) = describe_use(&node.kind) {
                println!("  {} {describe}", node.path);
            }
        }
    }

    ExitCode::SUCCESS
}

fn describe_use(kind: &yang_front::resolver::NodeKind) -> Option<String> {
    use yang_front::resolver::NodeKind::*;
    match kind {
        TypeUse { name, sequence: Some(seq) } => Some(format!("type {name} -> #{seq}")),
        TypeUse { name, sequence: None } => Some(format!("type {name} -> (unresolved)")),
        GroupingUse { name, sequence: Some(seq) } => Some(format!("uses {name} -> #{seq}")),
        GroupingUse { name, sequence: None } => Some(format!("uses {name} -> (unresolved)")),
        _ => None,
    }
}

