//! Phonetic rule parsing and the token → grapheme table used by the decoder.

use std::collections::HashMap;

/// The bundled Arabic to Latin-alphabet rule table, one grapheme per line
/// followed by its phonetic spellings.
pub const DEFAULT_RULES: &str = include_str!("../data/arabic-to-alphabet.txt");

/// Trailing vowels that mark a token as consonant + vowel for gemination.
const GEMINATION_VOWELS: [char; 4] = ['a', 'i', 'o', 'u'];

/// A single rule line: an Arabic grapheme and the spellings that produce it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PhoneticRule {
    pub grapheme: String,
    pub spellings: Vec<String>,
}

impl PhoneticRule {
    /// Parses `"<grapheme> <spelling> <spelling> ..."`.
    /// Returns `None` for blank lines and lines without any spelling.
    pub fn from_line(line: &str) -> Option<Self> {
        let mut fields = line.split_whitespace();
        let grapheme = fields.next()?.to_string();
        let spellings: Vec<String> = fields.map(str::to_string).collect();
        if spellings.is_empty() {
            return None;
        }
        Some(Self { grapheme, spellings })
    }
}

/// The doubled spelling modelling a geminated (shadda) letter:
/// `ba` → `bba`, `sya` → `sysya`, `r` → `rr`.
pub fn geminate(spelling: &str) -> String {
    match spelling.strip_suffix(GEMINATION_VOWELS) {
        Some(consonant) => {
            let vowel = &spelling[consonant.len()..];
            format!("{consonant}{consonant}{vowel}")
        }
        None => spelling.repeat(2),
    }
}

/// Maps phonetic tokens to their candidate Arabic graphemes.
#[derive(Debug, Clone, Default)]
pub struct TransliterationTable {
    graphemes: HashMap<String, Vec<String>>,
    max_token_len: usize,
}

impl TransliterationTable {
    /// Builds the table from rule lines. Malformed lines are skipped.
    pub fn build<I, S>(rules: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let _span = tracing::info_span!("TransliterationTable::build").entered();

        let mut table = Self::default();
        let mut skipped = 0;
        for (line_number, line) in rules.into_iter().enumerate() {
            let Some(rule) = PhoneticRule::from_line(line.as_ref()) else {
                tracing::trace!(line = line_number + 1, "skipping rule line without spellings");
                skipped += 1;
                continue;
            };
            table.add_rule(&rule);
        }

        tracing::info!(
            tokens = table.graphemes.len(),
            max_token_len = table.max_token_len,
            skipped,
            "built transliteration table"
        );
        table
    }

    pub fn add_rule(&mut self, rule: &PhoneticRule) {
        for spelling in &rule.spellings {
            self.register(spelling.clone(), &rule.grapheme);
            self.register(geminate(spelling), &rule.grapheme);
        }
    }

    fn register(&mut self, token: String, grapheme: &str) {
        self.max_token_len = self.max_token_len.max(token.len());
        let candidates = self.graphemes.entry(token).or_default();
        if !candidates.iter().any(|g| g == grapheme) {
            candidates.push(grapheme.to_string());
        }
    }

    /// Exact-match lookup of a phonetic token.
    pub fn lookup(&self, token: &str) -> Option<&[String]> {
        self.graphemes.get(token).map(Vec::as_slice)
    }

    /// Length in bytes of the longest token; bounds the decoder's scan width.
    pub fn max_token_len(&self) -> usize {
        self.max_token_len
    }

    pub fn len(&self) -> usize {
        self.graphemes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.graphemes.is_empty()
    }

    pub fn tokens(&self) -> impl Iterator<Item = &str> {
        self.graphemes.keys().map(String::as_str)
    }

    /// The table built from [`DEFAULT_RULES`].
    pub fn with_default_rules() -> Self {
        Self::build(DEFAULT_RULES.lines())
    }
}
