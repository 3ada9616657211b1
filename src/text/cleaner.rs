//! Transcript cleanup via ordered pattern substitution.

use regex::Regex;

use crate::config::CleanupConfig;
use crate::error::{GlossaError, Result};

/// Applies an ordered list of regex substitutions, then trims the result.
///
/// A rule that matches nothing is a no-op. The default rule set strips
/// bracketed speaker labels and archive-soundbite markers, turns ellipses
/// into periods so the annotator sees a sentence boundary, and collapses
/// whitespace runs to a single space.
#[derive(Debug)]
pub struct TranscriptCleaner {
    rules: Vec<(Regex, String)>,
}

impl TranscriptCleaner {
    /// Compiles the rule list from the given configuration.
    ///
    /// Returns a configuration error if any pattern fails to compile.
    pub fn new(config: &CleanupConfig) -> Result<Self> {
        let mut rules = Vec::with_capacity(config.rules.len());
        for rule in &config.rules {
            let regex = Regex::new(&rule.pattern).map_err(|e| {
                GlossaError::Config(format!(
                    "invalid cleanup pattern `{}`: {}",
                    rule.pattern, e
                ))
            })?;
            rules.push((regex, rule.replacement.clone()));
        }
        Ok(Self { rules })
    }

    /// Creates a cleaner with the default transcript rule set.
    pub fn default_rules() -> Self {
        Self::new(&CleanupConfig::default()).expect("default cleanup rules compile")
    }

    /// Cleans raw transcript text.
    ///
    /// Every rule is applied globally across the text, in list order, and
    /// leading/trailing whitespace is stripped at the end.
    pub fn clean(&self, text: &str) -> String {
        let mut result = text.to_string();
        for (regex, replacement) in &self.rules {
            result = regex.replace_all(&result, replacement.as_str()).into_owned();
        }
        result.trim().to_string()
    }
}
