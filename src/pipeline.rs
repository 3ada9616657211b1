//! The read → clean → annotate → serialize run.

use std::fs;
use std::io::BufWriter;
use std::path::{Path, PathBuf};

use crate::annotate::Annotator;
use crate::config::{Config, OutputTarget};
use crate::error::{GlossaError, Result};
use crate::output::JsonStreamWriter;
use crate::text::TranscriptCleaner;

/// Runs the full pipeline for one transcript file.
///
/// Reads `input`, cleans it, annotates it through `annotator`, and streams
/// the JSON document to the path resolved from the output configuration.
/// Returns the path the document was written to.
///
/// A read failure aborts before any output file is created. A write failure
/// aborts and leaves the partially written file as-is.
pub fn run<A: Annotator>(input: &Path, annotator: &A, config: &Config) -> Result<PathBuf> {
    if !input.is_file() {
        return Err(GlossaError::FileNotFound(input.to_path_buf()));
    }

    println!("reading from {}", input.display());
    let raw = fs::read_to_string(input)?;

    let cleaner = TranscriptCleaner::new(&config.cleanup)?;
    let cleaned = cleaner.clean(&raw);
    log::info!("cleaned transcript: {} characters", cleaned.len());

    let sentences = annotator.annotate(&cleaned)?;
    log::info!("annotated {} sentences", sentences.len());

    let output_path = resolve_output_path(input, &config.output.target);
    let file = fs::File::create(&output_path)?;
    let writer = JsonStreamWriter::new(BufWriter::new(file), &config.output);
    writer.write_document(sentences)?;

    println!("results written into {}", output_path.display());
    Ok(output_path)
}

/// Resolves where the JSON document goes.
///
/// The derived target keeps the input's directory and takes its file name
/// up to (but not including) the first period, with `.json` appended.
pub fn resolve_output_path(input: &Path, target: &OutputTarget) -> PathBuf {
    match target {
        OutputTarget::Fixed(path) => path.clone(),
        OutputTarget::Derived => {
            let name = input
                .file_name()
                .map(|n| n.to_string_lossy().into_owned())
                .unwrap_or_default();
            let base = match name.find('.') {
                Some(idx) => &name[..idx],
                None => name.as_str(),
            };
            input.with_file_name(format!("{}.json", base))
        }
    }
}
