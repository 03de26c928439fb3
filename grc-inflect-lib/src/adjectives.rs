// Comparatives and superlatives built on a different root from their
// positive (ἀγαθός / ἀμείνων / ἄριστος).

use std::sync::LazyLock;

use serde::{Deserialize, Serialize};

use crate::multistring::{lcs_distance, lcs_length};
use crate::writing::bare;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Degree {
    Comparative,
    Superlative,
}

impl Degree {
    /// Slot 8 of a treebank tag: `c` comparative, `s` superlative.
    pub fn from_code(c: char) -> Option<Self> {
        match c {
            'c' => Some(Degree::Comparative),
            's' => Some(Degree::Superlative),
            _ => None,
        }
    }
}

// positive; comparatives; superlatives
const IRREGULAR: &[(&str, &[&str], &[&str])] = &[
    ("ἀγαθός", &["ἀμείνων", "βελτίων", "κρείσσων", "λωίων"], &["ἄριστος", "βέλτιστος", "κράτιστος"]),
    ("κακός", &["χείρων", "ἥσσων"], &["χείριστος", "ἥκιστος"]),
    ("μέγας", &["μείζων"], &[]),
    ("μικρός", &["ἐλάσσων"], &["ἐλάχιστος"]),
    ("ῥᾴδιος", &["ῥᾴων", "ῥηίων"], &["ῥᾷστος"]),
    ("ταχύς", &["θάσσων"], &[]),
];

struct Entry {
    regular_stem: String,
    comparatives: Vec<String>,
    superlatives: Vec<String>,
    positive: String,
}

fn strip_one<'a>(word: &'a str, endings: &[&str]) -> &'a str {
    endings
        .iter()
        .find_map(|e| word.strip_suffix(e).filter(|s| !s.is_empty()))
        .unwrap_or(word)
}

fn irregular_stems(lemmas: &[&str]) -> Vec<String> {
    lemmas
        .iter()
        .map(|l| strip_one(&bare(l), &["ων", "οσ"]).to_string())
        .collect()
}

static TABLE: LazyLock<Vec<Entry>> = LazyLock::new(|| {
    IRREGULAR
        .iter()
        .map(|&(positive, comparatives, superlatives)| {
            let positive = bare(positive);
            Entry {
                regular_stem: strip_one(&positive, &["οσ", "ασ", "υσ"]).to_string(),
                comparatives: irregular_stems(comparatives),
                superlatives: irregular_stems(superlatives),
                positive,
            }
        })
        .collect()
});

/// Whether `form`, tagged with `degree`, is an irregular comparative or
/// superlative of `lemma`.
///
/// Conservative: the lemma must be listed, the irregular stem must share at
/// most half of the regular stem, and the inflected form must begin with
/// that irregular stem give or take one letter.
pub fn is_irregular_comparative(form: &str, lemma: &str, degree: Degree) -> bool {
    let lemma = bare(lemma);
    let Some(entry) = TABLE.iter().find(|e| e.positive == lemma) else {
        return false;
    };
    let candidates = match degree {
        Degree::Comparative => &entry.comparatives,
        Degree::Superlative => &entry.superlatives,
    };
    let form: Vec<char> = bare(form).chars().collect();
    let reg_len = entry.regular_stem.chars().count();

    candidates.iter().any(|irregular| {
        let lcs = lcs_length(&entry.regular_stem, irregular);
        let unlike = lcs <= reg_len / 2 && lcs < reg_len;
        let n = irregular.chars().count().min(form.len());
        let head: String = form[..n].iter().collect();
        unlike && lcs_distance(irregular, &head) <= 1
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_irregular() {
        assert!(is_irregular_comparative("θᾶσσον", "ταχύς", Degree::Comparative));
        assert!(is_irregular_comparative("ἀμείνονες", "ἀγαθός", Degree::Comparative));
        assert!(is_irregular_comparative("ἀρίστους", "ἀγαθός", Degree::Superlative));
        assert!(is_irregular_comparative("χείρονες", "κακός", Degree::Comparative));
    }

    #[test]
    fn test_regular_or_unlisted() {
        assert!(!is_irregular_comparative("δηλότερος", "δῆλος", Degree::Comparative));
        // listed lemma, but the form is not one of the irregular ones
        assert!(!is_irregular_comparative("ταχύτερος", "ταχύς", Degree::Comparative));
        // μείζων keeps too much of μεγ- to count
        assert!(!is_irregular_comparative("μείζονα", "μέγας", Degree::Comparative));
        // no irregular superlative recorded
        assert!(!is_irregular_comparative("τάχιστος", "ταχύς", Degree::Superlative));
    }

    #[test]
    fn test_degree_code() {
        assert_eq!(Degree::from_code('c'), Some(Degree::Comparative));
        assert_eq!(Degree::from_code('s'), Some(Degree::Superlative));
        assert_eq!(Degree::from_code('-'), None);
    }
}
