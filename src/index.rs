//! A character trie over every word-initial position of every aya.
//!
//! For each word start the rest of the aya is inserted from the root, and each
//! node reached at a word boundary records the `Location` of the starting word.
//! A single path therefore answers both "is this a prefix of some scripture
//! text starting at a word" and "where does this whole word or phrase occur".

use crate::corpus::VerseCorpus;
use crate::location::Location;

type NodeId = u32;

const ROOT: NodeId = 0;

#[derive(Debug, Clone, Default)]
struct Node {
    /// Sorted by character; the fan-out stays below the size of the alphabet.
    children: Vec<(char, NodeId)>,
    locations: Vec<Location>,
}

impl Node {
    fn child(&self, c: char) -> Option<NodeId> {
        self.children
            .binary_search_by_key(&c, |&(key, _)| key)
            .ok()
            .map(|i| self.children[i].1)
    }
}

#[derive(Debug, Clone)]
pub struct VerseIndex {
    nodes: Vec<Node>,
}

impl Default for VerseIndex {
    fn default() -> Self {
        Self {
            nodes: vec![Node::default()],
        }
    }
}

impl VerseIndex {
    /// Indexes every aya of `corpus` in corpus order, so that each node's
    /// location list ends up sorted by (sura, aya, word index).
    pub fn build(corpus: &VerseCorpus) -> Self {
        let _span = tracing::info_span!("VerseIndex::build", suras = corpus.sura_count()).entered();

        let mut index = Self::default();
        let mut location_count = 0;
        for (sura, ayas) in corpus.suras() {
            for (i, text) in ayas.iter().enumerate() {
                location_count += index.index_aya(text, sura, i + 1);
            }
        }

        tracing::info!(
            nodes = index.nodes.len(),
            locations = location_count,
            "built verse index"
        );
        index
    }

    fn index_aya(&mut self, text: &str, sura: usize, aya: usize) -> usize {
        let chars: Vec<char> = text.chars().collect();
        let mut added = 0;
        let mut word_index = 0;
        for i in 0..chars.len() {
            if i == 0 || chars[i - 1] == ' ' {
                let Some(location) = Location::try_new(sura, aya, word_index) else {
                    tracing::warn!(
                        sura,
                        aya,
                        word_index,
                        "location out of range, skipping rest of aya"
                    );
                    break;
                };
                added += self.insert(&chars[i..], location);
                word_index += 1;
            }
        }
        added
    }

    /// Inserts `chars` from the root, tagging every word boundary on the way.
    fn insert(&mut self, chars: &[char], location: Location) -> usize {
        let mut node = ROOT;
        let mut added = 0;
        for (i, &c) in chars.iter().enumerate() {
            node = self.child_or_insert(node, c);
            if chars.get(i + 1).is_none_or(|&next| next == ' ') {
                self.nodes[node as usize].locations.push(location);
                added += 1;
            }
        }
        added
    }

    fn child_or_insert(&mut self, parent: NodeId, c: char) -> NodeId {
        let new_id = self.nodes.len() as NodeId;
        let children = &mut self.nodes[parent as usize].children;
        match children.binary_search_by_key(&c, |&(key, _)| key) {
            Ok(i) => children[i].1,
            Err(i) => {
                children.insert(i, (c, new_id));
                self.nodes.push(Node::default());
                new_id
            }
        }
    }

    fn walk(&self, s: &str) -> Option<NodeId> {
        s.chars()
            .try_fold(ROOT, |node, c| self.nodes[node as usize].child(c))
    }

    /// Structural existence check: true when `s` is a prefix of some text
    /// starting at a word boundary. The empty string is always a prefix.
    pub fn contains_prefix(&self, s: &str) -> bool {
        self.walk(s).is_some()
    }

    /// Returns the locations where `s` occurs as whole word(s), in corpus order.
    pub fn locate(&self, s: &str) -> &[Location] {
        self.walk(s)
            .map(|node| self.nodes[node as usize].locations.as_slice())
            .unwrap_or(&[])
    }

    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }
}
