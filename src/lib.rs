//! Main library for the quranize project.
//!
//! This library decodes a Latin-alphabet transcription of Quranic recitation
//! (e.g. `bismillah`) into the Arabic word sequences of the Quran text that it
//! could have come from (e.g. `بسم الله`). A [`TransliterationTable`] supplies
//! the phonetic spellings of every letter, a [`VerseIndex`] built over the
//! corpus prunes the search and locates the results, and [`Quranize`] bundles
//! both into a context that is built once and queried many times.

use rayon::iter::{IntoParallelRefIterator, ParallelIterator};
use serde::Serialize;
use std::sync::Arc;
use thiserror::Error;

pub use crate::corpus::{CorpusError, VerseCorpus};
pub use crate::decoder::normalize;
pub use crate::index::VerseIndex;
pub use crate::location::Location;
pub use crate::transliteration::{DEFAULT_RULES, PhoneticRule, TransliterationTable};

mod corpus;
mod decoder;
mod index;
mod location;
mod transliteration;

#[derive(Error, Debug)]
pub enum QuranizeError {
    #[error("Failed to serialize the result to JSON: {0}")]
    SerializationFailed(#[from] serde_json::Error),
}

/// An encoding of the input together with where it occurs.
#[derive(Debug, Serialize, Clone, PartialEq, Eq)]
pub struct Match {
    pub text: String,
    pub locations: Vec<Location>,
}

/// Builds the verse index for `corpus`.
pub fn build_index(corpus: &VerseCorpus) -> VerseIndex {
    VerseIndex::build(corpus)
}

/// Builds the transliteration table from rule lines.
pub fn build_table<I, S>(rules: I) -> TransliterationTable
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    TransliterationTable::build(rules)
}

/// Returns every string of the indexed corpus that `input` can represent.
///
/// # Example
/// ```
/// # use quranize::{build_index, build_table, encode, VerseCorpus, DEFAULT_RULES};
/// let corpus: VerseCorpus = [vec!["بسم الله الرحمن الرحيم"]].into_iter().collect();
/// let index = build_index(&corpus);
/// let table = build_table(DEFAULT_RULES.lines());
///
/// assert!(encode("bismillah", &table, &index).contains(&"بسم الله".to_string()));
/// ```
pub fn encode(input: &str, table: &TransliterationTable, index: &VerseIndex) -> Vec<String> {
    decoder::encode(input, table, index)
}

/// Returns the locations of `s` as whole word(s), in corpus order.
pub fn locate<'a>(s: &str, index: &'a VerseIndex) -> &'a [Location] {
    index.locate(s)
}

#[derive(Debug)]
struct QuranizeInner {
    table: TransliterationTable,
    index: VerseIndex,
}

/// A transliteration table and a verse index, built once and shared.
///
/// Cloning is cheap and every query takes `&self`, so one value can serve any
/// number of threads.
#[derive(Debug, Clone)]
pub struct Quranize {
    inner: Arc<QuranizeInner>,
}

impl Quranize {
    pub fn new(table: TransliterationTable, index: VerseIndex) -> Self {
        Self {
            inner: Arc::new(QuranizeInner { table, index }),
        }
    }

    /// Builds the table and the index concurrently.
    pub fn build<I, S>(rules: I, corpus: &VerseCorpus) -> Self
    where
        I: IntoIterator<Item = S> + Send,
        S: AsRef<str>,
    {
        let (table, index) = rayon::join(
            || TransliterationTable::build(rules),
            || VerseIndex::build(corpus),
        );
        Self::new(table, index)
    }

    /// Builds a context using the bundled [`DEFAULT_RULES`].
    ///
    /// # Example
    /// ```
    /// # use quranize::{Quranize, VerseCorpus};
    /// let corpus: VerseCorpus = [vec!["الحمد لله رب العالمين"]].into_iter().collect();
    /// let quranize = Quranize::with_default_rules(&corpus);
    ///
    /// assert!(quranize.encode("alhamdulillah").contains(&"الحمد لله".to_string()));
    /// assert_eq!(quranize.locate("الحمد لله")[0].to_string(), "1.1.0");
    /// ```
    pub fn with_default_rules(corpus: &VerseCorpus) -> Self {
        Self::build(DEFAULT_RULES.lines(), corpus)
    }

    pub fn table(&self) -> &TransliterationTable {
        &self.inner.table
    }

    pub fn index(&self) -> &VerseIndex {
        &self.inner.index
    }

    pub fn encode(&self, input: &str) -> Vec<String> {
        decoder::encode(input, &self.inner.table, &self.inner.index)
    }

    pub fn locate(&self, s: &str) -> &[Location] {
        self.inner.index.locate(s)
    }

    /// Encodes many inputs in parallel. The output order follows `inputs`.
    pub fn encode_batch<S: AsRef<str> + Sync>(&self, inputs: &[S]) -> Vec<Vec<String>> {
        inputs
            .par_iter()
            .map(|input| self.encode(input.as_ref()))
            .collect()
    }

    /// Encodes `input` and attaches the locations of every result.
    pub fn search(&self, input: &str) -> Vec<Match> {
        self.encode(input)
            .into_iter()
            .map(|text| {
                let locations = self.locate(&text).to_vec();
                Match { text, locations }
            })
            .collect()
    }

    /// [`Quranize::search`] rendered as pretty-printed JSON.
    pub fn search_json(&self, input: &str) -> Result<String, QuranizeError> {
        Ok(serde_json::to_string_pretty(&self.search(input))?)
    }
}
