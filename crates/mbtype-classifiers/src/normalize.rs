//! Text normalization for classifier input
//!
//! Converts a raw post into the cleaned, tokenized, stemmed form the axis
//! models were trained on: lowercase, URLs stripped, word-tokenized,
//! alphabetic-only, stopword-filtered, stemmed, space-joined.

use crate::stopwords::ENGLISH_STOP_WORDS;
use mbtype_core::{CleanedPost, Error, Result};
use regex::Regex;
use rust_stemmers::{Algorithm, Stemmer};
use std::collections::HashSet;
use unicode_segmentation::UnicodeSegmentation;

/// Matches schemed (`http://`, `https://`) and schemeless (`www.`) URLs,
/// with or without a trailing path/query. Applied after lowercasing.
const URL_PATTERN: &str =
    r"(?:https?://(?:www\.)?[a-z0-9](?:[a-z0-9-]*[a-z0-9])?\.\S{2,}|www\.[a-z0-9](?:[a-z0-9-]*[a-z0-9])?\.\S{2,})";

/// Deterministic normalizer shared read-only across requests.
///
/// All matcher state (compiled URL regex, stopword set, stemmer) is built
/// once in [`TextNormalizer::new`].
pub struct TextNormalizer {
    url_pattern: Regex,
    stop_words: HashSet<&'static str>,
    stemmer: Stemmer,
}

impl TextNormalizer {
    /// Create a new normalizer
    pub fn new() -> Result<Self> {
        let url_pattern = Regex::new(URL_PATTERN)
            .map_err(|e| Error::config(format!("failed to compile URL pattern: {e}")))?;

        Ok(Self {
            url_pattern,
            stop_words: ENGLISH_STOP_WORDS.iter().copied().collect(),
            stemmer: Stemmer::create(Algorithm::English),
        })
    }

    /// Normalize a raw post into classifier input.
    ///
    /// Total over arbitrary text: input that is only URLs, stopwords,
    /// digits, or punctuation yields an empty cleaned post.
    pub fn normalize(&self, raw: &str) -> CleanedPost {
        let lowered = raw.to_lowercase();
        let stripped = self.url_pattern.replace_all(&lowered, "");

        let mut stemmed: Vec<String> = Vec::new();
        for word in stripped.unicode_words() {
            for token in split_clitics(word) {
                if token.chars().all(char::is_alphabetic)
                    && !self.stop_words.contains(token)
                {
                    stemmed.push(self.stemmer.stem(token).into_owned());
                }
            }
        }

        CleanedPost::new(stemmed.join(" "))
    }
}

/// Split an English contraction into host and clitic, the way standard
/// word tokenization does: `don't` -> `do` + `n't`, `he's` -> `he` + `'s`.
/// Tokens without an apostrophe pass through unchanged.
fn split_clitics(word: &str) -> impl Iterator<Item = &str> {
    let parts = match word.find('\'') {
        Some(_) if word.ends_with("n't") => {
            let split = word.len() - "n't".len();
            [Some(&word[..split]), Some(&word[split..])]
        }
        Some(pos) => [Some(&word[..pos]), Some(&word[pos..])],
        None => [Some(word), None],
    };
    parts.into_iter().flatten().filter(|part| !part.is_empty())
}
