//! Dictionary trie
//!
//! Holds the acceptable guesses for one locale and resolves typed words,
//! possibly made of ambiguous tiles, to a concrete dictionary spelling.

use crate::core::{CharacterUnit, WORD_LENGTH, Word, canonical};
use crate::game::{Constraints, Rejection};
use rustc_hash::FxHashMap;
use unicode_normalization::UnicodeNormalization;

#[derive(Debug, Clone, Default)]
struct Node {
    children: FxHashMap<char, usize>,
    terminal: bool,
}

/// A trie of 5-letter words over canonical (uppercase) letters
///
/// Nodes live in one arena vector; index 0 is the root.
#[derive(Debug, Clone)]
pub struct WordTree {
    nodes: Vec<Node>,
    count: usize,
}

impl Default for WordTree {
    fn default() -> Self {
        Self::new()
    }
}

impl WordTree {
    #[must_use]
    pub fn new() -> Self {
        Self {
            nodes: vec![Node::default()],
            count: 0,
        }
    }

    /// Build a tree from a list, silently skipping words that are not 5 letters
    #[must_use]
    pub fn from_words<'a>(words: impl IntoIterator<Item = &'a str>) -> Self {
        let mut tree = Self::new();
        for word in words {
            tree.add(word);
        }
        tree
    }

    /// Insert a word; returns false if it is not exactly 5 letters
    ///
    /// Inserting a word twice keeps a single entry.
    pub fn add(&mut self, word: &str) -> bool {
        let letters: Vec<char> = word.trim().nfc().map(canonical).collect();
        if letters.len() != WORD_LENGTH {
            return false;
        }

        let mut node = 0;
        for letter in letters {
            node = if let Some(&next) = self.nodes[node].children.get(&letter) {
                next
            } else {
                let next = self.nodes.len();
                self.nodes.push(Node::default());
                self.nodes[node].children.insert(letter, next);
                next
            };
        }

        if !self.nodes[node].terminal {
            self.nodes[node].terminal = true;
            self.count += 1;
        }
        true
    }

    /// Number of distinct words
    #[must_use]
    pub fn len(&self) -> usize {
        self.count
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.count == 0
    }

    /// Exact, case-insensitive lookup of a concrete spelling
    #[must_use]
    pub fn contains(&self, word: &str) -> bool {
        let mut node = 0;
        for letter in word.nfc().map(canonical) {
            match self.nodes[node].children.get(&letter) {
                Some(&next) => node = next,
                None => return false,
            }
        }
        self.nodes[node].terminal
    }

    /// Every dictionary spelling `word` can stand for, in tile-letter order
    #[must_use]
    pub fn spellings(&self, word: &Word) -> Vec<Word> {
        let mut found = Vec::new();
        if word.is_complete() {
            self.collect(word, 0, &mut Vec::with_capacity(WORD_LENGTH), &mut found);
        }
        found
    }

    fn collect(&self, word: &Word, node: usize, prefix: &mut Vec<char>, found: &mut Vec<Word>) {
        let depth = prefix.len();
        if depth == word.len() {
            if self.nodes[node].terminal {
                found.push(Word::from_units(
                    prefix.iter().map(|&c| CharacterUnit::single(c)).collect(),
                ));
            }
            return;
        }

        for &letter in word[depth].letters() {
            if let Some(&next) = self.nodes[node].children.get(&letter) {
                prefix.push(letter);
                self.collect(word, next, prefix, found);
                prefix.pop();
            }
        }
    }

    /// Resolve a typed word to the dictionary spelling to submit
    ///
    /// Spellings are tried in [`WordTree::spellings`] order, so each tile's
    /// typed letter comes before its twin. The first one that passes
    /// `constraints` wins.
    ///
    /// # Errors
    /// `NotInWordList` when no spelling exists; otherwise, if every spelling
    /// breaks a constraint, the reason found deepest into the word.
    ///
    /// # Examples
    /// ```
    /// use wordle_daily::core::{GameLocale, Word};
    /// use wordle_daily::wordlists::WordTree;
    ///
    /// let tree = WordTree::from_words(["šķīla", "skala"]);
    /// let lv = GameLocale::LvLv { simplified: true };
    /// let typed = Word::parse("skila", lv).unwrap();
    ///
    /// let resolved = tree.resolve(&typed, None).unwrap();
    /// assert_eq!(resolved.text(), "ŠĶĪLA");
    /// ```
    pub fn resolve(
        &self,
        word: &Word,
        constraints: Option<&Constraints>,
    ) -> Result<Word, Rejection> {
        let mut deepest: Option<Rejection> = None;

        for spelling in self.spellings(word) {
            match constraints.map(|c| c.check(&spelling)) {
                Some(Err(reason)) => {
                    if deepest.as_ref().is_none_or(|d| reason.depth() > d.depth()) {
                        deepest = Some(reason);
                    }
                }
                _ => return Ok(spelling),
            }
        }

        Err(deepest.unwrap_or(Rejection::NotInWordList))
    }
}
