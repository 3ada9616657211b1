//! # Glossa - Transcript Annotation
//!
//! Glossa reads a plain-text transcript, cleans it with ordered pattern
//! substitutions, runs an external NLP pipeline for sentence segmentation,
//! lemmatization and part-of-speech tagging, and streams the per-token
//! annotations to a JSON document.
//!
//! ## Overview
//!
//! The whole program is one linear pipeline:
//!
//! 1. read the transcript file,
//! 2. clean it (speaker labels, boilerplate markers, ellipses, whitespace),
//! 3. annotate it through a pre-trained per-language pipeline,
//! 4. stream sentences of `{text, lemma, pos}` tokens to JSON.
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use std::path::Path;
//! use glossa::{Config, Language, RuleAnnotator};
//!
//! let language: Language = "spanish".parse()?;
//! let annotator = RuleAnnotator::new(Path::new("models"), language)?;
//! let written = glossa::run(Path::new("interview.txt"), &annotator, &Config::default())?;
//! println!("{}", written.display());
//! ```
//!
//! ## Architecture
//!
//! - [`text`] - transcript cleanup
//! - [`annotate`] - boundary to the external NLP pipeline
//! - [`output`] - streaming JSON serialization
//! - [`pipeline`] - the read → clean → annotate → serialize run
//! - [`config`] - cleanup rules, override set and output target

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod annotate;
pub mod config;
pub mod error;
pub mod output;
pub mod pipeline;
pub mod text;

// Re-export commonly used types
pub use annotate::{AnnotatedSentence, AnnotatedToken, Annotator, Language, RuleAnnotator};
pub use config::{CleanupConfig, Config, OutputConfig, OutputTarget, SubstitutionRule};
pub use error::{GlossaError, Result};
pub use output::{JsonStreamWriter, PUNCT_TAG};
pub use pipeline::run;
pub use text::TranscriptCleaner;

/// Library version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
