//! Streaming JSON serialization of annotated sentences.

use std::io::Write;

use crate::annotate::AnnotatedToken;
use crate::config::OutputConfig;
use crate::error::Result;

/// Part-of-speech label forced onto override tokens.
pub const PUNCT_TAG: &str = "PUNCT";

/// Forward-only writer for the annotated-transcript JSON document.
///
/// Sentences and tokens are written as they are consumed; separators are
/// decided by position (first element or not), never by look-ahead, and
/// nothing is buffered beyond the underlying writer. There is no rollback:
/// a failure mid-stream leaves a partially written document behind.
///
/// Token text and lemmas are written verbatim. A surface form containing a
/// raw `"` or `\` would produce invalid JSON; transcript tokenization does
/// not produce such tokens, so no escaping is applied.
pub struct JsonStreamWriter<'a, W: Write> {
    out: W,
    config: &'a OutputConfig,
    sentences_written: usize,
    tokens_written: usize,
}

impl<'a, W: Write> JsonStreamWriter<'a, W> {
    /// Creates a writer over `out`.
    pub fn new(out: W, config: &'a OutputConfig) -> Self {
        Self {
            out,
            config,
            sentences_written: 0,
            tokens_written: 0,
        }
    }

    /// Writes the document prologue.
    pub fn begin_document(&mut self) -> Result<()> {
        write!(self.out, "{{\n  \"sentences\": [")?;
        Ok(())
    }

    /// Opens the next sentence array.
    pub fn begin_sentence(&mut self) -> Result<()> {
        if self.sentences_written > 0 {
            write!(self.out, ",")?;
        }
        writeln!(self.out, "\n    [")?;
        self.tokens_written = 0;
        Ok(())
    }

    /// Writes one token into the current sentence.
    ///
    /// Tokens whose surface form is in the override set are reported with
    /// [`PUNCT_TAG`] regardless of the category the annotator assigned.
    pub fn write_token(&mut self, token: &AnnotatedToken) -> Result<()> {
        if self.tokens_written > 0 {
            writeln!(self.out, ",")?;
        }

        let pos = if self
            .config
            .punctuation_overrides
            .iter()
            .any(|p| p == &token.text)
        {
            PUNCT_TAG
        } else {
            token.pos.as_str()
        };
        let lemma = if self.config.lowercase_lemmas {
            token.lemma.to_lowercase()
        } else {
            token.lemma.clone()
        };

        write!(
            self.out,
            "      {{\n        \"text\":\"{}\",\n        \"lemma\":\"{}\",\n        \"pos\":\"{}\"\n      }}",
            token.text, lemma, pos
        )?;
        self.tokens_written += 1;
        Ok(())
    }

    /// Closes the current sentence array.
    pub fn end_sentence(&mut self) -> Result<()> {
        write!(self.out, "\n    ]")?;
        self.sentences_written += 1;
        Ok(())
    }

    /// Writes the document epilogue and flushes the underlying writer.
    pub fn end_document(&mut self) -> Result<()> {
        write!(self.out, "\n  ]\n}}")?;
        self.out.flush()?;
        Ok(())
    }

    /// Streams a whole document from a sequence of sentences.
    pub fn write_document<I>(mut self, sentences: I) -> Result<()>
    where
        I: IntoIterator<Item = Vec<AnnotatedToken>>,
    {
        self.begin_document()?;
        for sentence in sentences {
            self.begin_sentence()?;
            for token in &sentence {
                self.write_token(token)?;
            }
            self.end_sentence()?;
        }
        self.end_document()
    }
}
