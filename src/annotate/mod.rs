//! Sentence and token annotation.
//!
//! The statistical work (sentence segmentation, lemmatization,
//! part-of-speech tagging) is delegated to an external NLP pipeline behind
//! the [`Annotator`] trait. The concrete backend lives in [`engine`] and is
//! selected per language through a static resource lookup.

mod engine;

pub use engine::RuleAnnotator;

use std::fmt;
use std::str::FromStr;

use crate::error::{GlossaError, Result};

/// A language with a pre-trained annotation pipeline.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Language {
    /// English.
    English,
    /// Spanish.
    Spanish,
    /// French.
    French,
}

impl Language {
    /// All supported language names, as accepted on the command line.
    pub const NAMES: [&'static str; 3] = ["english", "spanish", "french"];

    /// File name of the pre-trained pipeline resource for this language.
    pub fn resource_name(&self) -> &'static str {
        match self {
            Language::English => "en_tokenizer.bin",
            Language::Spanish => "es_tokenizer.bin",
            Language::French => "fr_tokenizer.bin",
        }
    }
}

impl FromStr for Language {
    type Err = GlossaError;

    /// Resolves a language name, failing closed on anything outside the
    /// supported set.
    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "english" => Ok(Language::English),
            "spanish" => Ok(Language::Spanish),
            "french" => Ok(Language::French),
            _ => Err(GlossaError::UnsupportedLanguage(s.to_string())),
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Language::English => "english",
            Language::Spanish => "spanish",
            Language::French => "french",
        };
        write!(f, "{}", name)
    }
}

/// A single annotated token.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnnotatedToken {
    /// Raw surface form.
    pub text: String,
    /// Base (dictionary) form assigned by the pipeline.
    pub lemma: String,
    /// Coarse part-of-speech category assigned by the pipeline.
    pub pos: String,
}

impl AnnotatedToken {
    /// Creates a new annotated token.
    pub fn new(text: &str, lemma: &str, pos: &str) -> Self {
        Self {
            text: text.to_string(),
            lemma: lemma.to_string(),
            pos: pos.to_string(),
        }
    }
}

/// An ordered sequence of tokens forming one sentence.
pub type AnnotatedSentence = Vec<AnnotatedToken>;

/// Boundary to the external NLP collaborator.
///
/// Implementations take already-cleaned text and return sentences of
/// annotated tokens. Any toolkit exposing sentence segmentation,
/// lemmatization and POS tagging for the needed language can sit behind
/// this trait.
pub trait Annotator {
    /// Splits text into sentences of annotated tokens.
    fn annotate(&self, text: &str) -> Result<Vec<AnnotatedSentence>>;
}
