//! Bottom-up enumeration of the Arabic strings a phonetic input can spell.
//!
//! The input is consumed from the end: every table token that matches a suffix
//! is turned into its graphemes, and each is joined to every decoding of the
//! remaining head through a fixed set of orthographic combinations. Candidates
//! that are not a prefix of indexed text are dropped immediately; only this
//! pruning keeps the enumeration from growing exponentially.

use crate::index::VerseIndex;
use crate::transliteration::TransliterationTable;
use std::collections::HashSet;

const WORD_BREAK: &str = " ";
const ALEF: &str = "ا";
const DEFINITE_ARTICLE: &str = "ال";
const WAW: &str = "و";

/// A final letter outside this set may be silent in recitation.
const SPOKEN_FINAL_VOWELS: [char; 5] = ['a', 'e', 'i', 'o', 'u'];

/// Removes spaces and lowercases; spacing in the input carries no word breaks.
pub fn normalize(input: &str) -> String {
    input.replace(' ', "").to_lowercase()
}

/// Drops the last character unless it is a vowel.
fn trim_final_consonant(s: &str) -> &str {
    match s.chars().next_back() {
        Some(c) if !SPOKEN_FINAL_VOWELS.contains(&c) => &s[..s.len() - c.len_utf8()],
        _ => s,
    }
}

/// Every way `tail` can follow `head` in written text:
/// plain concatenation, a word break, an unwritten long alef, the attached and
/// detached definite article, and the silent alef after a final waw.
fn combine(head: &str, tail: &str) -> Vec<String> {
    let mut combinations = vec![
        format!("{head}{tail}"),
        format!("{head}{WORD_BREAK}{tail}"),
        format!("{head}{ALEF}{tail}"),
        format!("{head}{DEFINITE_ARTICLE}{tail}"),
        format!("{head}{WORD_BREAK}{DEFINITE_ARTICLE}{tail}"),
    ];
    if tail == WAW {
        combinations.push(format!("{head}{tail}{ALEF}"));
    }
    combinations
}

struct Decoder<'a> {
    table: &'a TransliterationTable,
    index: &'a VerseIndex,
}

impl Decoder<'_> {
    /// Decodes every prefix of `s`: entry `k` holds the decodings of `s[..k]`.
    ///
    /// Entries are filled in order of increasing length, so each one only
    /// reads shorter prefixes that are already complete. Offsets that are not
    /// on a character boundary stay empty.
    fn decode_prefixes(&self, s: &str) -> Vec<Vec<String>> {
        let mut prefixes: Vec<Vec<String>> = Vec::with_capacity(s.len() + 1);
        prefixes.push(vec![String::new()]);

        for end in 1..=s.len() {
            let mut candidates = Vec::new();
            if s.is_char_boundary(end) {
                let mut seen = HashSet::new();
                for width in 1..=self.table.max_token_len().min(end) {
                    let split = end - width;
                    if !s.is_char_boundary(split) {
                        continue;
                    }
                    let Some(graphemes) = self.table.lookup(&s[split..end]) else {
                        continue;
                    };

                    for head in &prefixes[split] {
                        for grapheme in graphemes {
                            for candidate in combine(head, grapheme) {
                                if self.index.contains_prefix(&candidate)
                                    && seen.insert(candidate.clone())
                                {
                                    candidates.push(candidate);
                                }
                            }
                        }
                    }
                }
            }
            prefixes.push(candidates);
        }
        prefixes
    }
}

/// Returns the Arabic strings from the index that `input` can represent,
/// deduplicated in first-seen order.
///
/// The input is decoded as given and once more with a trailing consonant
/// dropped; decodings of the full input come first. Only candidates that occur
/// as whole word(s) in the index are returned.
pub fn encode(input: &str, table: &TransliterationTable, index: &VerseIndex) -> Vec<String> {
    let normalized = normalize(input);
    let decoder = Decoder { table, index };

    // the trimmed input is a prefix of the full one
    let prefixes = decoder.decode_prefixes(&normalized);
    let full = &prefixes[normalized.len()];
    let trimmed = &prefixes[trim_final_consonant(&normalized).len()];

    let mut seen = HashSet::new();
    let results: Vec<String> = full
        .iter()
        .chain(trimmed.iter())
        .filter(|candidate| seen.insert(candidate.as_str()))
        .filter(|candidate| !index.locate(candidate).is_empty())
        .cloned()
        .collect();

    tracing::debug!(
        input_len = normalized.len(),
        candidates = seen.len(),
        matches = results.len(),
        live_prefixes = prefixes.iter().filter(|p| !p.is_empty()).count(),
        "encoded phonetic input"
    );
    results
}
