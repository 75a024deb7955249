//! Defines the `Location` value attached to word boundaries in the index.

use serde::{Serialize, Serializer, ser::SerializeStruct};
use std::fmt;

/// Radix used to pack the three coordinates into one integer.
/// Larger than any aya count in a sura and any word count in an aya.
const RADIX: u32 = 1 << 10;

/// A (sura, aya, word-index) coordinate in the corpus.
///
/// Sura and aya numbers start at 1, the word index starts at 0. The value is
/// stored packed as `sura * RADIX^2 + aya * RADIX + word_index`, so the derived
/// ordering is the natural (sura, aya, word) order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Location(u32);

impl Location {
    pub const MAX_SURA: usize = (u32::MAX / (RADIX * RADIX)) as usize;
    pub const MAX_AYA: usize = RADIX as usize - 1;
    pub const MAX_WORD_INDEX: usize = RADIX as usize - 1;

    /// # Panics
    ///
    /// When a coordinate is out of range; see [`Location::try_new`].
    pub fn new(sura: usize, aya: usize, word_index: usize) -> Self {
        match Self::try_new(sura, aya, word_index) {
            Some(location) => location,
            None => panic!("location {sura}.{aya}.{word_index} cannot be packed"),
        }
    }

    /// Packs the coordinates, or returns `None` when sura or aya is 0 or any
    /// coordinate exceeds `MAX_SURA`, `MAX_AYA` or `MAX_WORD_INDEX`.
    pub fn try_new(sura: usize, aya: usize, word_index: usize) -> Option<Self> {
        if sura == 0 || aya == 0 {
            return None;
        }
        let sura = u32::try_from(sura).ok()?;
        let aya = u32::try_from(aya).ok().filter(|&aya| aya < RADIX)?;
        let word_index = u32::try_from(word_index).ok().filter(|&w| w < RADIX)?;
        let packed_sura = sura.checked_mul(RADIX * RADIX)?;
        Some(Self(packed_sura + aya * RADIX + word_index))
    }

    pub fn sura(&self) -> usize {
        (self.0 / (RADIX * RADIX)) as usize
    }

    pub fn aya(&self) -> usize {
        (self.0 / RADIX % RADIX) as usize
    }

    pub fn word_index(&self) -> usize {
        (self.0 % RADIX) as usize
    }
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}.{}", self.sura(), self.aya(), self.word_index())
    }
}

impl Serialize for Location {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut state = serializer.serialize_struct("Location", 3)?;
        state.serialize_field("sura", &self.sura())?;
        state.serialize_field("aya", &self.aya())?;
        state.serialize_field("word_index", &self.word_index())?;
        state.end()
    }
}
