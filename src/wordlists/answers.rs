//! Daily answer pool

use crate::core::{Word, WordError};
use rand::{RngCore, SeedableRng};
use rand_chacha::ChaCha8Rng;
use unicode_normalization::UnicodeNormalization;

/// Default seed for the answer shuffle
pub const DEFAULT_SEED: u64 = 14_384_982_345;

/// Candidate secrets in play order
///
/// The source list is shuffled once with a fixed seed so every player gets
/// the same word for the same turn without the order being alphabetical.
/// The shuffle draws from ChaCha8, whose output is fixed for a given key,
/// so the order does not change between releases.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnswerPool {
    words: Vec<String>,
}

impl AnswerPool {
    /// Shuffle `words` deterministically with `seed`, dropping blank lines
    ///
    /// Fisher-Yates from the back, each swap index taken as a 64-bit draw
    /// modulo the remaining length. The seed fills the first eight key bytes
    /// little-endian.
    #[must_use]
    pub fn shuffled<S: AsRef<str>>(words: impl IntoIterator<Item = S>, seed: u64) -> Self {
        let mut words = Self::ordered(words).words;

        let mut key = [0u8; 32];
        key[..8].copy_from_slice(&seed.to_le_bytes());
        let mut rng = ChaCha8Rng::from_seed(key);
        for i in (1..words.len()).rev() {
            let j = (rng.next_u64() % (i as u64 + 1)) as usize;
            words.swap(i, j);
        }
        Self { words }
    }

    /// Keep `words` in the given order
    #[must_use]
    pub fn ordered<S: AsRef<str>>(words: impl IntoIterator<Item = S>) -> Self {
        Self {
            words: words
                .into_iter()
                .map(|w| w.as_ref().trim().nfc().collect::<String>().to_uppercase())
                .filter(|w| !w.is_empty())
                .collect(),
        }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    #[must_use]
    pub fn words(&self) -> &[String] {
        &self.words
    }

    /// Secret for a turn: `words[turn_index mod len]`
    ///
    /// Negative indices (times before the epoch start) wrap around as well.
    ///
    /// # Errors
    /// `WordError::InvalidLength(0)` for an empty pool, or the parse error of
    /// a malformed entry.
    pub fn answer(&self, turn_index: i64) -> Result<Word, WordError> {
        if self.words.is_empty() {
            return Err(WordError::InvalidLength(0));
        }
        let len = self.words.len() as i64;
        let ix = turn_index.rem_euclid(len) as usize;
        Word::new(&self.words[ix])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const WORDS: [&str; 5] = ["cigar", "rebut", "sissy", "humph", "awake"];

    #[test]
    fn shuffle_is_deterministic() {
        let a = AnswerPool::shuffled(WORDS, DEFAULT_SEED);
        let b = AnswerPool::shuffled(WORDS, DEFAULT_SEED);
        assert_eq!(a, b);
        assert_eq!(a.len(), WORDS.len());

        let mut sorted = a.words().to_vec();
        sorted.sort();
        assert_eq!(sorted, ["AWAKE", "CIGAR", "HUMPH", "REBUT", "SISSY"]);
    }

    #[test]
    fn shuffle_order_is_pinned() {
        let pool = AnswerPool::shuffled(WORDS, DEFAULT_SEED);
        assert_eq!(pool.words(), ["SISSY", "REBUT", "CIGAR", "AWAKE", "HUMPH"]);

        let bundled = AnswerPool::shuffled(crate::wordlists::ANSWERS.iter().copied(), DEFAULT_SEED);
        assert_eq!(bundled.words()[..3], ["PLUMB", "DIGIT", "FLAME"]);
    }

    #[test]
    fn decomposed_entries_are_composed() {
        let pool = AnswerPool::ordered(["s\u{30C}aurs"]);
        assert_eq!(pool.words(), ["ŠAURS"]);
        assert_eq!(pool.answer(0).unwrap(), Word::new("šaurs").unwrap());
    }

    #[test]
    fn answer_wraps_around() {
        let pool = AnswerPool::ordered(WORDS);
        assert_eq!(pool.answer(0).unwrap().text(), "CIGAR");
        assert_eq!(pool.answer(6).unwrap().text(), "REBUT");
        assert_eq!(pool.answer(-1).unwrap().text(), "AWAKE");
    }

    #[test]
    fn blank_lines_are_dropped() {
        let pool = AnswerPool::ordered(["cigar", "", "  "]);
        assert_eq!(pool.len(), 1);
    }

    #[test]
    fn empty_pool_has_no_answer() {
        let pool = AnswerPool::ordered(Vec::<String>::new());
        assert!(pool.is_empty());
        assert_eq!(pool.answer(3), Err(WordError::InvalidLength(0)));
    }
}
