//! Annotation backend over pre-trained nlprule pipelines.

use std::path::Path;

use nlprule::Tokenizer;

use crate::annotate::{AnnotatedSentence, AnnotatedToken, Annotator, Language};
use crate::error::Result;

/// Annotator backed by an nlprule tokenizer pipeline.
///
/// The pipeline resource is a pre-trained per-language binary
/// (e.g. `es_tokenizer.bin`) resolved inside a models directory. A missing
/// or unreadable resource surfaces as the pipeline's own load error.
pub struct RuleAnnotator {
    tokenizer: Tokenizer,
}

impl std::fmt::Debug for RuleAnnotator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RuleAnnotator").finish()
    }
}

impl RuleAnnotator {
    /// Loads the pipeline for `language` from `models_dir`.
    pub fn new(models_dir: &Path, language: Language) -> Result<Self> {
        let path = models_dir.join(language.resource_name());
        log::info!("loading {} pipeline from {}", language, path.display());
        let tokenizer = Tokenizer::new(path)?;
        Ok(Self { tokenizer })
    }
}

impl Annotator for RuleAnnotator {
    fn annotate(&self, text: &str) -> Result<Vec<AnnotatedSentence>> {
        let mut sentences = Vec::new();

        for sentence in self.tokenizer.pipe(text) {
            let tokens: AnnotatedSentence = sentence
                .tokens()
                .iter()
                .filter(|token| !token.word().text().as_str().is_empty())
                .map(|token| {
                    let word = token.word();
                    let text = word.text().as_str();
                    // The disambiguated reading comes first; tokens the
                    // pipeline could not tag keep their surface form.
                    match word.tags().first() {
                        Some(tag) => AnnotatedToken::new(
                            text,
                            tag.lemma().as_str(),
                            tag.pos().as_str(),
                        ),
                        None => AnnotatedToken::new(text, text, ""),
                    }
                })
                .collect();

            if !tokens.is_empty() {
                sentences.push(tokens);
            }
        }

        Ok(sentences)
    }
}
