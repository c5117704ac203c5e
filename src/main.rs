//! FlexaFlow CLI
//!
//! Usage:
//!   flexaflow [OPTIONS] <COMMAND>
//!
//! Commands:
//!   place [FILE]     Resolve every [[placement]] entry of a document
//!   validate [FILE]  Validate every [[field]] entry of a document
//!   rules <DECL>     Parse a rule declaration and list its rules
//!
//! Options:
//!   -c, --config <FILE>  Settings file (TOML format)
//!   -v, --verbose        Debug logging (otherwise RUST_LOG applies)
//!   -h, --help           Print help

use std::fs;
use std::io::{self, Read};
use std::path::PathBuf;
use std::process;

use clap::{Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use flexaflow::{parse_rules, Document, Settings};

/// Exit status for a document whose form is invalid
const EXIT_INVALID: i32 = 2;

#[derive(Parser)]
#[command(name = "flexaflow")]
#[command(about = "Floating panel placement and form validation")]
struct Cli {
    /// Settings file (TOML format)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Enable debug logging
    #[arg(short, long)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Resolve placement requests (reads stdin if no file is given)
    Place { input: Option<PathBuf> },
    /// Validate form fields (reads stdin if no file is given)
    Validate { input: Option<PathBuf> },
    /// Parse a rule declaration, e.g. `required minLength(3)`
    Rules { declaration: String },
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let settings = match &cli.config {
        Some(path) => match Settings::from_file(path) {
            Ok(s) => s,
            Err(e) => {
                eprintln!("Error loading settings '{}': {}", path.display(), e);
                process::exit(1);
            }
        },
        None => Settings::default(),
    };

    match &cli.command {
        Command::Place { input } => place(&settings, input.as_ref()),
        Command::Validate { input } => validate(&settings, input.as_ref()),
        Command::Rules { declaration } => rules(declaration),
    }
}

fn init_logging(verbose: bool) {
    let filter = if verbose {
        tracing_subscriber::EnvFilter::new("debug")
    } else {
        tracing_subscriber::EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn"))
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();
}

fn place(settings: &Settings, input: Option<&PathBuf>) {
    let doc = load_document(input);

    for (name, result) in doc.resolve_placements(&settings.placement) {
        println!(
            "{}: top={} left={} placement={} flipped={} arrow={}@{}",
            name, result.top, result.left, result.effective, result.flipped, result.arrow.edge,
            result.arrow.left
        );
    }
}

fn validate(settings: &Settings, input: Option<&PathBuf>) {
    let doc = load_document(input);

    let registry = match settings.registry() {
        Ok(r) => r,
        Err(e) => {
            eprintln!("Error: {}", e);
            process::exit(1);
        }
    };

    let result = match doc.validate_fields(&registry) {
        Ok(r) => r,
        Err(e) => {
            eprint!("{}", e.report());
            process::exit(1);
        }
    };

    for (field, outcome) in doc.fields.iter().zip(&result.results) {
        match (&outcome.rule, &outcome.message) {
            (Some(rule), Some(message)) => println!("{}: invalid ({}): {}", field.name, rule, message),
            _ => println!("{}: ok", field.name),
        }
    }

    if !result.valid {
        eprintln!("{} invalid field(s)", result.error_count());
        process::exit(EXIT_INVALID);
    }
}

fn rules(declaration: &str) {
    match parse_rules(declaration) {
        Ok(rules) => {
            for rule in rules {
                println!("{}", rule);
            }
        }
        Err(errors) => {
            for err in errors {
                eprint!("{}", err.format(declaration, "<rules>"));
            }
            process::exit(1);
        }
    }
}

fn load_document(input: Option<&PathBuf>) -> Document {
    let source = match input {
        Some(path) => match fs::read_to_string(path) {
            Ok(content) => content,
            Err(e) => {
                eprintln!("Error reading file '{}': {}", path.display(), e);
                process::exit(1);
            }
        },
        None => {
            let mut buffer = String::new();
            match io::stdin().read_to_string(&mut buffer) {
                Ok(_) => buffer,
                Err(e) => {
                    eprintln!("Error reading from stdin: {}", e);
                    process::exit(1);
                }
            }
        }
    };

    match Document::from_str(&source) {
        Ok(doc) => doc,
        Err(e) => {
            eprintln!("Error: {}", e);
            process::exit(1);
        }
    }
}
