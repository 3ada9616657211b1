//! Glossa CLI - Transcript Annotation
//!
//! Command-line interface for cleaning and annotating transcript files.

use clap::Parser;
use log::error;
use std::path::PathBuf;
use std::str::FromStr;

use glossa::{Config, Language, OutputTarget, Result, RuleAnnotator};

#[derive(Parser)]
#[command(name = "glossa")]
#[command(author = "Glossa Contributors")]
#[command(version)]
#[command(about = "Transcript cleanup and token annotation", long_about = None)]
struct Cli {
    /// Input transcript file (UTF-8 text)
    file: PathBuf,

    /// Transcript language (english, spanish, french)
    language: String,

    /// Write the JSON document to this path instead of deriving it from
    /// the input file name
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Directory holding the pre-trained annotation pipelines
    #[arg(short, long, default_value = "models")]
    models_dir: PathBuf,

    /// Load cleanup and output configuration from a JSON file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Keep lemmas exactly as the annotator produced them
    #[arg(long)]
    keep_lemma_case: bool,

    /// Verbose output
    #[arg(short, long)]
    verbose: bool,
}

fn main() {
    let cli = Cli::parse();

    // Initialize logging
    if cli.verbose {
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    } else {
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();
    }

    if let Err(e) = annotate_transcript(cli) {
        error!("Error: {}", e);
        std::process::exit(1);
    }
}

fn annotate_transcript(cli: Cli) -> Result<()> {
    // An unsupported language name must fail before any file is opened.
    let language = Language::from_str(&cli.language)?;

    let mut config = match &cli.config {
        Some(path) => Config::from_file(path)?,
        None => Config::default(),
    };
    if let Some(path) = cli.output {
        config.output.target = OutputTarget::Fixed(path);
    }
    if cli.keep_lemma_case {
        config.output.lowercase_lemmas = false;
    }

    let annotator = RuleAnnotator::new(&cli.models_dir, language)?;
    glossa::run(&cli.file, &annotator, &config)?;

    Ok(())
}
