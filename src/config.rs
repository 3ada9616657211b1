//! Configuration for the Glossa transcript annotator.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::error::Result;

/// Main configuration for a Glossa run.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// Text cleanup configuration.
    pub cleanup: CleanupConfig,

    /// Output configuration.
    pub output: OutputConfig,
}

impl Config {
    /// Loads configuration from a JSON file.
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config: Self = serde_json::from_str(&content)?;
        Ok(config)
    }
}

/// One substitution rule: a regex pattern and its replacement.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SubstitutionRule {
    /// Regex pattern to match.
    pub pattern: String,

    /// Replacement text for every match.
    pub replacement: String,
}

impl SubstitutionRule {
    /// Creates a new substitution rule.
    pub fn new(pattern: &str, replacement: &str) -> Self {
        Self {
            pattern: pattern.to_string(),
            replacement: replacement.to_string(),
        }
    }
}

/// Text cleanup configuration.
///
/// Rules are applied globally across the text, in list order. Order is part
/// of the contract: the ellipsis rule must run before whitespace collapsing,
/// and bracket removal must see the original spacing.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CleanupConfig {
    /// Ordered substitution rules.
    pub rules: Vec<SubstitutionRule>,
}

impl Default for CleanupConfig {
    fn default() -> Self {
        Self {
            rules: vec![
                // Bracketed speaker label followed by a colon and space.
                SubstitutionRule::new(r"\[[^\[\]]+\]: ", ""),
                // Archive soundbite marker found in radio transcripts.
                SubstitutionRule::new(r"\(SOUNDBITE ARCHIVO\)", ""),
                // Horizontal ellipsis becomes a sentence terminator.
                SubstitutionRule::new("…", "."),
                // Collapse whitespace runs last.
                SubstitutionRule::new(r"\s+", " "),
            ],
        }
    }
}

/// Where the JSON document is written.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum OutputTarget {
    /// Next to the input: file name up to the first `.`, with `.json`
    /// appended.
    #[default]
    Derived,

    /// A fixed path, regardless of the input name.
    Fixed(PathBuf),
}

/// Output configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutputConfig {
    /// Surface strings always reported with the punctuation tag, whatever
    /// category the annotator assigned.
    /// Default: dash, guillemets, curly quotes, inverted exclamation mark
    /// and ampersand.
    pub punctuation_overrides: Vec<String>,

    /// Lower-case lemmas before writing.
    /// Default: true.
    pub lowercase_lemmas: bool,

    /// Output path selection.
    /// Default: derived from the input file name.
    pub target: OutputTarget,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            punctuation_overrides: ["—", "«", "»", "“", "”", "¡", "&"]
                .iter()
                .map(|s| s.to_string())
                .collect(),
            lowercase_lemmas: true,
            target: OutputTarget::Derived,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.cleanup.rules.len(), 4);
        assert_eq!(config.cleanup.rules[0].pattern, r"\[[^\[\]]+\]: ");
        assert!(config.output.lowercase_lemmas);
        assert_eq!(config.output.target, OutputTarget::Derived);
    }

    #[test]
    fn test_default_overrides_contain_inverted_exclamation() {
        let config = OutputConfig::default();
        assert!(config.punctuation_overrides.iter().any(|s| s == "¡"));
        assert!(config.punctuation_overrides.iter().any(|s| s == "&"));
    }

    #[test]
    fn test_config_file_roundtrip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.json");

        let mut config = Config::default();
        config.output.lowercase_lemmas = false;
        config.output.target = OutputTarget::Fixed(PathBuf::from("out.json"));
        std::fs::write(&path, serde_json::to_string(&config).unwrap()).unwrap();

        let loaded = Config::from_file(&path).unwrap();
        assert!(!loaded.output.lowercase_lemmas);
        assert_eq!(
            loaded.output.target,
            OutputTarget::Fixed(PathBuf::from("out.json"))
        );
        assert_eq!(loaded.cleanup.rules.len(), config.cleanup.rules.len());
    }

    #[test]
    fn test_invalid_config_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.json");
        std::fs::write(&path, "not json").unwrap();

        assert!(Config::from_file(&path).is_err());
    }
}
