//! Integration tests for the Glossa annotation pipeline.

use glossa::{
    AnnotatedSentence, AnnotatedToken, Annotator, Config, GlossaError, Language, OutputTarget,
    Result, TranscriptCleaner, PUNCT_TAG,
};
use std::fs;
use std::path::Path;
use std::str::FromStr;
use tempfile::tempdir;

/// Annotator that splits cleaned text on whitespace and sentence enders,
/// standing in for the statistical pipeline so tests need no model binary.
///
/// Every word is tagged `X` with its surface form as lemma; `.`, `!` and
/// `?` are split off as their own tokens tagged `PUNCT` and close the
/// current sentence.
struct WordAnnotator;

fn token(text: &str, pos: &str) -> AnnotatedToken {
    AnnotatedToken::new(text, text, pos)
}

impl Annotator for WordAnnotator {
    fn annotate(&self, text: &str) -> Result<Vec<AnnotatedSentence>> {
        let mut sentences = Vec::new();
        let mut current: AnnotatedSentence = Vec::new();

        for word in text.split_whitespace() {
            if let Some(stem) = word.strip_suffix(['.', '!', '?']) {
                let ender = &word[stem.len()..];
                if !stem.is_empty() {
                    current.push(token(stem, "X"));
                }
                current.push(token(ender, "PUNCT"));
                sentences.push(std::mem::take(&mut current));
            } else {
                current.push(token(word, "X"));
            }
        }
        if !current.is_empty() {
            sentences.push(current);
        }

        Ok(sentences)
    }
}

fn parse_output(path: &Path) -> serde_json::Value {
    let content = fs::read_to_string(path).expect("output file readable");
    serde_json::from_str(&content).expect("output is valid JSON")
}

#[test]
fn test_end_to_end_scenario() {
    let dir = tempdir().unwrap();
    let input = dir.path().join("interview.txt");
    fs::write(&input, "[SPEAKER]: Hello… world!").unwrap();

    let written = glossa::run(&input, &WordAnnotator, &Config::default()).unwrap();
    assert_eq!(written, dir.path().join("interview.json"));

    let value = parse_output(&written);
    let sentences = value["sentences"].as_array().unwrap();
    assert_eq!(sentences.len(), 2, "expected 2 sentences: {}", value);

    let first = sentences[0].as_array().unwrap();
    assert_eq!(first.len(), 2);
    assert_eq!(first[0]["text"], "Hello");
    assert_eq!(first[1]["text"], ".");
    assert_eq!(first[1]["pos"], PUNCT_TAG);

    let second = sentences[1].as_array().unwrap();
    assert_eq!(second.len(), 2);
    assert_eq!(second[0]["text"], "world");
    assert_eq!(second[1]["text"], "!");
    assert_eq!(second[1]["pos"], PUNCT_TAG);
}

#[test]
fn test_round_trip_document_shape() {
    let dir = tempdir().unwrap();
    let input = dir.path().join("shape.txt");
    fs::write(&input, "uno dos tres. cuatro.").unwrap();

    let written = glossa::run(&input, &WordAnnotator, &Config::default()).unwrap();

    // 2 sentences with token counts [4, 2]: three words plus the period,
    // then one word plus the period.
    let value = parse_output(&written);
    let sentences = value["sentences"].as_array().unwrap();
    assert_eq!(sentences.len(), 2);
    assert_eq!(sentences[0].as_array().unwrap().len(), 4);
    assert_eq!(sentences[1].as_array().unwrap().len(), 2);
}

#[test]
fn test_single_token_document() {
    let dir = tempdir().unwrap();
    let input = dir.path().join("tiny.txt");
    fs::write(&input, "Hola").unwrap();

    let written = glossa::run(&input, &WordAnnotator, &Config::default()).unwrap();

    let value = parse_output(&written);
    let sentences = value["sentences"].as_array().unwrap();
    assert_eq!(sentences.len(), 1);
    let tokens = sentences[0].as_array().unwrap();
    assert_eq!(tokens.len(), 1);
    assert_eq!(tokens[0]["text"], "Hola");
}

#[test]
fn test_override_set_forces_punct() {
    let dir = tempdir().unwrap();
    let input = dir.path().join("quotes.txt");
    // The stand-in annotator tags « and » as X; serialization must
    // override both to PUNCT while leaving casa alone.
    fs::write(&input, "« casa »").unwrap();

    let written = glossa::run(&input, &WordAnnotator, &Config::default()).unwrap();

    let value = parse_output(&written);
    let tokens = value["sentences"][0].as_array().unwrap();
    assert_eq!(tokens[0]["text"], "«");
    assert_eq!(tokens[0]["pos"], PUNCT_TAG);
    assert_eq!(tokens[1]["pos"], "X");
    assert_eq!(tokens[2]["pos"], PUNCT_TAG);
}

#[test]
fn test_fixed_output_target() {
    let dir = tempdir().unwrap();
    let input = dir.path().join("in.txt");
    let fixed = dir.path().join("elsewhere.json");
    fs::write(&input, "hola.").unwrap();

    let mut config = Config::default();
    config.output.target = OutputTarget::Fixed(fixed.clone());

    let written = glossa::run(&input, &WordAnnotator, &config).unwrap();
    assert_eq!(written, fixed);
    assert!(fixed.is_file());
}

#[test]
fn test_unsupported_language_fails_closed() {
    let err = Language::from_str("german").unwrap_err();
    assert!(matches!(err, GlossaError::UnsupportedLanguage(ref name) if name == "german"));
}

#[test]
fn test_missing_input_creates_no_output() {
    let dir = tempdir().unwrap();
    let input = dir.path().join("absent.txt");

    let err = glossa::run(&input, &WordAnnotator, &Config::default()).unwrap_err();
    assert!(matches!(err, GlossaError::FileNotFound(_)));
    assert!(
        !dir.path().join("absent.json").exists(),
        "no output file may be created when the read fails"
    );
}

#[test]
fn test_cleanup_invariants_on_transcript() {
    let cleaner = TranscriptCleaner::default_rules();
    let cleaned = cleaner.clean(
        "[LOCUTORA]: En los  años ochenta…\n(SOUNDBITE ARCHIVO)\n[JOVEN]: Nosotros  no somos punks.",
    );

    assert!(!cleaned.contains("]: "), "speaker labels must be gone: {}", cleaned);
    assert!(!cleaned.contains("SOUNDBITE"), "boilerplate must be gone: {}", cleaned);
    assert!(!cleaned.contains("  "), "no whitespace runs may remain: {}", cleaned);
    assert!(!cleaned.contains('…'), "ellipses must become periods: {}", cleaned);
    assert_eq!(cleaned, cleaner.clean(&cleaned), "cleanup must be idempotent here");
}
