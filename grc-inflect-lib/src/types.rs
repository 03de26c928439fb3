use serde::Serialize;

use crate::features::VerbForm;

/// A recognized prepositional prefix.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PrefixMatch {
    /// The prefix as spelled in the word (e.g. ἐξ, ἀφ, συμ).
    pub prefix: String,
    /// What follows the prefix, diacritics as in the word.
    pub stem: String,
    /// Dictionary form of the preposition (e.g. ἐκ, ἀπό, σύν).
    pub preposition: &'static str,
}

/// A verb form with its preposition split off and the stem re-accented.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Detached {
    pub preposition: &'static str,
    pub stem: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub lemma_stem: Option<String>,
}

/// Intermediate stems compared by the verb scorer.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StemDebug {
    pub word_stem: String,
    pub lemma_stem: String,
    /// Ending stripped from the word, `None` if nothing in the table matched.
    pub word_ending: Option<String>,
    pub lemma_ending: Option<String>,
    /// Every spelling the word stem was allowed to have.
    pub word_variants: Vec<String>,
    pub lemma_variants: Vec<String>,
    pub distance: usize,
}

/// Result of the verb difficulty scorer.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct VerbDifficulty {
    pub word: String,
    pub lemma: String,
    pub form: VerbForm,
    pub is_hard: bool,
    pub score: f64,
    pub threshold: f64,
    pub debug: StemDebug,
}

/// Apparent declension class read off a lemma.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Declension {
    First,
    Second,
    Third,
}

/// Result of the noun declension scorer.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DeclensionDifficulty {
    pub word: String,
    pub lemma: String,
    pub score: f64,
    pub is_hard: bool,
    pub threshold: f64,
    pub declension: Declension,
    /// The inflected form looks like a hard (third-declension) case form.
    pub hard_declension: bool,
    /// The lemma is a feminine noun in -ος.
    pub feminine_in_os: bool,
    pub word_stem: String,
    pub lemma_stem: String,
}

/// Syllable split of one word.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Syllabification {
    pub word: String,
    pub syllables: Vec<String>,
    pub hyphenated: String,
}

/// Accent position of a word, and optionally the word re-accented.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AccentReport {
    pub word: String,
    /// Syllable bearing the accent, counted from the end (0 = ultima).
    pub accent: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub moved: Option<String>,
}
