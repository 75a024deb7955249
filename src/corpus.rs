//! The in-memory verse corpus the index is built from.

use crate::location::Location;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CorpusError {
    #[error("invalid sura number {sura}")]
    SuraNotFound { sura: usize },

    #[error("sura {sura} has no name")]
    SuraNameNotFound { sura: usize },

    #[error("invalid aya number {aya} in sura {sura}")]
    AyaNotFound { sura: usize, aya: usize },

    #[error("{word_count} word(s) starting at {location} run past the end of the aya")]
    WordNotFound { location: Location, word_count: usize },
}

/// Ordered suras, each an ordered list of ayas.
///
/// Every aya is a string of Arabic words separated by single spaces, without
/// leading or trailing space. Sura and aya numbers are 1-based positions.
///
/// Only suras up to [`Location::MAX_SURA`], ayas up to [`Location::MAX_AYA`]
/// and the first `Location::MAX_WORD_INDEX + 1` words of an aya are indexed;
/// text beyond that is kept here but cannot be located.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct VerseCorpus {
    suras: Vec<Vec<String>>,
    names: Vec<String>,
}

impl VerseCorpus {
    pub fn new(suras: Vec<Vec<String>>) -> Self {
        Self {
            suras,
            names: Vec::new(),
        }
    }

    /// Attaches sura names, in sura order. Names may be fewer than suras.
    pub fn with_sura_names<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.names = names.into_iter().map(Into::into).collect();
        self
    }

    /// Returns the name of a sura.
    ///
    /// # Errors
    ///
    /// `SuraNotFound` when the sura is out of range, `SuraNameNotFound` when it
    /// exists but was given no name.
    pub fn sura_name(&self, sura: usize) -> Result<&str, CorpusError> {
        self.sura(sura)?;
        self.names
            .get(sura - 1)
            .map(String::as_str)
            .ok_or(CorpusError::SuraNameNotFound { sura })
    }

    pub fn sura_count(&self) -> usize {
        self.suras.len()
    }

    pub fn is_empty(&self) -> bool {
        self.suras.iter().all(Vec::is_empty)
    }

    /// Iterates `(sura_number, ayas)` in corpus order.
    pub fn suras(&self) -> impl Iterator<Item = (usize, &[String])> {
        self.suras
            .iter()
            .enumerate()
            .map(|(i, ayas)| (i + 1, ayas.as_slice()))
    }

    pub fn aya_count(&self, sura: usize) -> Result<usize, CorpusError> {
        self.sura(sura).map(<[String]>::len)
    }

    /// Returns the text of an aya.
    ///
    /// # Errors
    ///
    /// `SuraNotFound` or `AyaNotFound` when either number is out of range.
    pub fn aya(&self, sura: usize, aya: usize) -> Result<&str, CorpusError> {
        let ayas = self.sura(sura)?;
        aya.checked_sub(1)
            .and_then(|i| ayas.get(i))
            .map(String::as_str)
            .ok_or(CorpusError::AyaNotFound { sura, aya })
    }

    /// Extracts `word_count` consecutive words starting at `location`.
    pub fn words_at(&self, location: Location, word_count: usize) -> Result<String, CorpusError> {
        let text = self.aya(location.sura(), location.aya())?;
        let words: Vec<&str> = text
            .split(' ')
            .skip(location.word_index())
            .take(word_count)
            .collect();
        if words.len() < word_count {
            return Err(CorpusError::WordNotFound {
                location,
                word_count,
            });
        }
        Ok(words.join(" "))
    }

    fn sura(&self, sura: usize) -> Result<&[String], CorpusError> {
        sura.checked_sub(1)
            .and_then(|i| self.suras.get(i))
            .map(Vec::as_slice)
            .ok_or(CorpusError::SuraNotFound { sura })
    }
}

impl<S: Into<String>> FromIterator<Vec<S>> for VerseCorpus {
    fn from_iter<I: IntoIterator<Item = Vec<S>>>(iter: I) -> Self {
        Self::new(
            iter.into_iter()
                .map(|ayas| ayas.into_iter().map(Into::into).collect())
                .collect(),
        )
    }
}
