use std::{
    fs::{read_to_string, write},
    path::PathBuf,
    process::ExitCode,
    time::Instant,
};

use anyhow::{anyhow, bail, Context, Result};
use clap::Parser;
use sqeez::{errors::errors::Error, format_error, lexer::lexer::tokenize, parser::parser::parse};
use tracing::{info, Level};

const OUTPUT_FILE: &str = "output.log";
const LEXER_OUTPUT_FILE: &str = "output-lexer.log";

/// Parses a sQeeZ source file into its syntax tree.
#[derive(Parser, Debug)]
#[command(author, version, long_about = None)]
struct Args {
    /// Path to the `.sqz` source file
    file: PathBuf,

    /// Trace the parsed program
    #[arg(long)]
    dev: bool,

    /// Write the parsed program to output.log
    #[arg(long)]
    output: bool,

    /// Trace every token produced by the lexer
    #[arg(long)]
    dev_lexer: bool,

    /// Write the token stream to output-lexer.log
    #[arg(long)]
    output_lexer: bool,
}

fn main() -> ExitCode {
    let args = Args::parse();

    // Initialize logging
    let level = if args.dev || args.dev_lexer {
        Level::DEBUG
    } else {
        Level::WARN
    };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .init();

    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(error) => {
            eprintln!("{:#}", error);
            ExitCode::FAILURE
        }
    }
}

fn run(args: &Args) -> Result<()> {
    if args.file.extension().and_then(|ext| ext.to_str()) != Some("sqz") {
        bail!("expected a `.sqz` file, got {}", args.file.display());
    }

    let file_name = args
        .file
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_default();
    let source = read_to_string(&args.file)
        .with_context(|| format!("failed to read {}", args.file.display()))?;

    let diagnostic = |error: Error| anyhow!(format_error(&error, &source, &args.file.display().to_string()));

    let start = Instant::now();
    let tokens = tokenize(source.clone(), Some(file_name), args.dev_lexer).map_err(diagnostic)?;
    info!("Tokenized {} tokens in {:?}", tokens.len(), start.elapsed());

    if args.output_lexer {
        let rendered: Vec<String> = tokens.iter().map(|token| token.to_string()).collect();
        write(LEXER_OUTPUT_FILE, rendered.join("\n"))
            .with_context(|| format!("failed to write {}", LEXER_OUTPUT_FILE))?;
    }

    let parse_start = Instant::now();
    let program = parse(tokens, args.dev).map_err(diagnostic)?;
    info!("Parsed {} statements in {:?}", program.body.len(), parse_start.elapsed());

    if args.output {
        write(OUTPUT_FILE, program.to_string())
            .with_context(|| format!("failed to write {}", OUTPUT_FILE))?;
    }

    Ok(())
}
