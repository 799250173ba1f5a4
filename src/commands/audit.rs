//! Word list audit
//!
//! Finds entries the game would choke on: wrong length, foreign letters,
//! duplicates, and answers that could never be typed in.

use crate::core::{GameLocale, WORD_LENGTH, canonical};
use crate::wordlists::WordTree;
use indicatif::{ProgressBar, ProgressStyle};
use rayon::prelude::*;
use rustc_hash::FxHashMap;
use std::cmp::Ordering;
use tracing::debug;
use unicode_normalization::UnicodeNormalization;

/// Problems found in a pair of lists
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AuditReport {
    pub answers_checked: usize,
    pub guesses_checked: usize,
    pub wrong_length: Vec<String>,
    pub foreign_letters: Vec<String>,
    pub duplicates: Vec<String>,
    /// Answers that the guess list does not accept
    pub missing_answers: Vec<String>,
}

impl AuditReport {
    #[must_use]
    pub fn is_clean(&self) -> bool {
        self.wrong_length.is_empty()
            && self.foreign_letters.is_empty()
            && self.duplicates.is_empty()
            && self.missing_answers.is_empty()
    }

    #[must_use]
    pub fn problem_count(&self) -> usize {
        self.wrong_length.len()
            + self.foreign_letters.len()
            + self.duplicates.len()
            + self.missing_answers.len()
    }
}

enum Issue {
    WrongLength,
    ForeignLetter,
    Missing,
}

/// Check `answers` and `guesses` for `locale` in parallel
///
/// Each finding list is sorted in the locale's alphabet order. Duplicates
/// are reported once per word and list, compared case-insensitively.
#[must_use]
pub fn audit_lists(
    locale: GameLocale,
    answers: &[String],
    guesses: &[String],
    show_progress: bool,
) -> AuditReport {
    let tree = WordTree::from_words(guesses.iter().map(String::as_str));
    let total = (answers.len() + guesses.len()) as u64;

    let pb = if show_progress {
        ProgressBar::new(total)
    } else {
        ProgressBar::hidden()
    };
    if let Ok(style) = ProgressStyle::default_bar()
        .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} ({percent}%)")
    {
        pb.set_style(style.progress_chars("█▓▒░"));
    }

    let tagged: Vec<(&String, bool)> = answers
        .iter()
        .map(|w| (w, true))
        .chain(guesses.iter().map(|w| (w, false)))
        .collect();

    let issues: Vec<(Issue, String)> = tagged
        .par_iter()
        .flat_map_iter(|&(word, is_answer)| {
            let found = check_word(locale, &tree, word, is_answer);
            pb.inc(1);
            found.into_iter().map(move |issue| (issue, word.clone()))
        })
        .collect();
    pb.finish_and_clear();

    let mut report = AuditReport {
        answers_checked: answers.len(),
        guesses_checked: guesses.len(),
        duplicates: duplicates(answers)
            .into_iter()
            .chain(duplicates(guesses))
            .collect(),
        ..AuditReport::default()
    };
    for (issue, word) in issues {
        match issue {
            Issue::WrongLength => report.wrong_length.push(word),
            Issue::ForeignLetter => report.foreign_letters.push(word),
            Issue::Missing => report.missing_answers.push(word),
        }
    }
    for list in [
        &mut report.wrong_length,
        &mut report.foreign_letters,
        &mut report.duplicates,
        &mut report.missing_answers,
    ] {
        list.sort_by(|a, b| alphabet_cmp(locale, a, b));
    }

    debug!(problems = report.problem_count(), "audit finished");
    report
}

fn check_word(locale: GameLocale, tree: &WordTree, word: &str, is_answer: bool) -> Vec<Issue> {
    let mut issues = Vec::new();
    let letters: Vec<char> = word.nfc().collect();
    if letters.len() != WORD_LENGTH {
        issues.push(Issue::WrongLength);
    }
    if !letters.iter().all(|&c| locale.has_letter(canonical(c))) {
        issues.push(Issue::ForeignLetter);
    }
    if is_answer && !tree.contains(word) {
        issues.push(Issue::Missing);
    }
    issues
}

fn duplicates(words: &[String]) -> Vec<String> {
    let mut seen: FxHashMap<String, usize> = FxHashMap::default();
    for word in words {
        *seen.entry(word.nfc().collect::<String>().to_uppercase()).or_insert(0) += 1;
    }
    seen.into_iter()
        .filter(|&(_, n)| n > 1)
        .map(|(word, _)| word)
        .collect()
}

/// Compare words letter by letter in `locale` alphabet order, shorter first on a shared prefix
fn alphabet_cmp(locale: GameLocale, a: &str, b: &str) -> Ordering {
    let mut a = a.nfc().map(canonical);
    let mut b = b.nfc().map(canonical);
    loop {
        match (a.next(), b.next()) {
            (None, None) => return Ordering::Equal,
            (None, Some(_)) => return Ordering::Less,
            (Some(_), None) => return Ordering::Greater,
            (Some(x), Some(y)) => match locale.alphabet_order(x, y) {
                Ordering::Equal => {}
                other => return other,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::wordlists::{ANSWERS, GUESSES};

    fn owned(words: &[&str]) -> Vec<String> {
        words.iter().map(|w| (*w).to_string()).collect()
    }

    #[test]
    fn bundled_lists_are_clean() {
        let report = audit_lists(GameLocale::EnUs, &owned(ANSWERS), &owned(GUESSES), false);
        assert!(report.is_clean(), "{report:?}");
        assert_eq!(report.answers_checked, ANSWERS.len());
    }

    #[test]
    fn finds_every_kind_of_problem() {
        let answers = owned(&["crane", "zebra", "cat", "crane"]);
        let guesses = owned(&["crane", "cat", "cāfés", "Slate", "slate"]);
        let report = audit_lists(GameLocale::EnUs, &answers, &guesses, false);

        assert_eq!(report.wrong_length, ["cat", "cat"]);
        assert_eq!(report.foreign_letters, ["cāfés"]);
        assert_eq!(report.duplicates, ["CRANE", "SLATE"]);
        assert_eq!(report.missing_answers, ["cat", "zebra"]);
        assert_eq!(report.problem_count(), 7);
    }

    #[test]
    fn latvian_letters_belong_to_latvian() {
        let words = owned(&["ŠĶĪLA"]);
        let lv = audit_lists(GameLocale::LvLv { simplified: false }, &words, &words, false);
        assert!(lv.is_clean());
        let en = audit_lists(GameLocale::EnUs, &words, &words, false);
        assert_eq!(en.foreign_letters.len(), 2);
    }

    #[test]
    fn findings_follow_alphabet_order() {
        let answers = owned(&["zīles", "šaurs", "saule"]);
        let lv = audit_lists(GameLocale::LvLv { simplified: false }, &answers, &[], false);
        assert_eq!(lv.missing_answers, ["saule", "šaurs", "zīles"]);
    }

    #[test]
    fn decomposed_entries_count_composed_letters() {
        let words = owned(&["s\u{30C}aurs"]);
        let lv = audit_lists(GameLocale::LvLv { simplified: false }, &words, &words, false);
        assert!(lv.is_clean(), "{lv:?}");
    }
}
