// How hard is it to recognize a noun form as an inflection of its lemma?
//
// The declension is judged by how the lemma *looks*, not by what it is: a
// reader who sees -ος expects the second declension. The score is the
// fraction of the stem that a longest-common-subsequence alignment cannot
// explain, plus fixed penalties for third-declension-looking forms and for
// the feminine nouns in -ος.

use std::collections::HashSet;
use std::sync::LazyLock;

use tracing::debug;

use crate::features::{Case, Gender, NounForm, Number};
use crate::multistring::lcs_distance;
use crate::types::{Declension, DeclensionDifficulty};
use crate::writing::{self, bare, stem_form};

pub const THRESHOLD: f64 = 0.4;
pub const HARD_DECLENSION_PENALTY: f64 = 0.2;
pub const FEMININE_OS_PENALTY: f64 = 0.2;

// ---------------------------------------------------------------------------
// Ending tables
// ---------------------------------------------------------------------------

const FIRST_LEMMA_ENDINGS: &[&str] = &["η", "α"];
const SECOND_LEMMA_ENDINGS: &[&str] = &["οσ", "ον"];
const THIRD_LEMMA_ENDINGS: &[&str] = &["α", "οσ", "υσ", "ισ", "ασ"];

// What a reader would take for a case ending on the inflected form.
const CASE_ENDINGS: &[&str] = &[
    "ησ", "ασ", "ουσ", "οιο", "ω", "ι", "ην", "αν", "ον", "ν", "αι", "οι", "ων", "αων", "οισ",
    "εσσι", "εσσιν", "σι", "σιν", "ισ", "υσ",
];

/// Feminine nouns of the second declension, lemma spelling.
const FEMININE_IN_OS: &[&str] = &[
    "νυός", "νῆσος", "φηγός", "ἄμπελος", "διάλεκτος", "διάμετρος", "αὔλειος", "σύγκλητος",
    "ἔρημος", "ἤπειρος", "ὁδός", "κέλευθος", "ἁμαξιτός", "ἀτραπός", "βάσανος", "βίβλος",
    "γέρανος", "γνάθος", "γύψος", "δέλτος", "δοκός", "δρόσος", "κάμινος", "κάρδοπος", "κιβωτός",
    "κόπρος", "ληνός", "λίθος", "νόσος", "πλίνθος", "ῥάβδος", "σορός", "σποδός", "τάφρος",
    "χηλός", "ψάμμος", "ψῆφος",
];

static FEMININE_BARE: LazyLock<HashSet<String>> =
    LazyLock::new(|| FEMININE_IN_OS.iter().map(|w| bare(w)).collect());

/// Whether `lemma` is one of the feminine nouns that end in -ος. Accents and
/// breathings are ignored.
pub fn is_feminine_ending_in_os(lemma: &str) -> bool {
    FEMININE_BARE.contains(&bare(lemma))
}

/// Strip the longest of `endings`, never the whole word.
fn strip_longest<'a>(word: &'a str, endings: &[&str]) -> &'a str {
    endings
        .iter()
        .filter(|e| word.len() > e.len() && word.ends_with(*e))
        .max_by_key(|e| e.len())
        .map_or(word, |e| &word[..word.len() - e.len()])
}

// ---------------------------------------------------------------------------
// Scorer
// ---------------------------------------------------------------------------

/// Score how hard `word` (tagged `tag`, e.g. `n-p---md-`) is to recognize as
/// a form of `lemma`.
pub fn guess_declension_difficulty(word: &str, lemma: &str, tag: &str) -> DeclensionDifficulty {
    let hard_declension = guess_whether_hard_declension(word, lemma, tag);
    let w = stem_form(word);
    let l = stem_form(lemma);

    let declension = if hard_declension {
        Declension::Third
    } else if l.ends_with("οσ") || l.ends_with("ον") {
        Declension::Second
    } else {
        Declension::First
    };
    let lemma_endings = match declension {
        Declension::First => FIRST_LEMMA_ENDINGS,
        Declension::Second => SECOND_LEMMA_ENDINGS,
        Declension::Third => THIRD_LEMMA_ENDINGS,
    };
    let lemma_stem = strip_longest(&l, lemma_endings);
    let mut endings: Vec<&str> = lemma_endings.to_vec();
    endings.extend_from_slice(CASE_ENDINGS);
    let word_stem = strip_longest(&w, &endings);

    let distance = lcs_distance(lemma_stem, word_stem);
    let longest = lemma_stem.chars().count().max(word_stem.chars().count()).max(1);
    let mut score = distance as f64 / longest as f64;
    if hard_declension {
        score += HARD_DECLENSION_PENALTY;
    }
    let feminine_in_os = is_feminine_ending_in_os(lemma);
    if feminine_in_os {
        score += FEMININE_OS_PENALTY;
    }
    debug!(word, lemma, tag, lemma_stem, word_stem, distance, score, "declension difficulty");

    DeclensionDifficulty {
        word: word.to_string(),
        lemma: lemma.to_string(),
        score,
        is_hard: score > THRESHOLD,
        threshold: THRESHOLD,
        declension,
        hard_declension,
        feminine_in_os,
        word_stem: word_stem.to_string(),
        lemma_stem: lemma_stem.to_string(),
    }
}

/// Third declension, or the archaic -φι(ν) case ending.
pub fn guess_whether_hard_declension(word: &str, lemma: &str, tag: &str) -> bool {
    if guess_whether_third_declension(word, lemma, tag) {
        return true;
    }
    let w = bare(word);
    if w.ends_with("φι") || w.ends_with("φιν") {
        let case = NounForm::from_tag(tag).case;
        return !matches!(
            case,
            Some(Case::Nominative | Case::Accusative | Case::Vocative)
        );
    }
    false
}

/// Guess from the lemma's shape and the form's ending whether a noun is
/// third declension. Duals, locatives and vocatives are never guessed.
pub fn guess_whether_third_declension(word: &str, lemma: &str, tag: &str) -> bool {
    let form = NounForm::from_tag(tag);
    if !form.is_noun {
        return false;
    }
    // Elided forms such as ἄλγε᾽. Accents on the last letter, composed or
    // not, belong to the letter.
    if writing::decompose(word)
        .last()
        .is_some_and(|l| !l.base.is_alphabetic())
    {
        return false;
    }
    if form.number == Some(Number::Dual)
        || matches!(form.case, Some(Case::Locative | Case::Vocative))
    {
        return false;
    }
    if !lemma.is_empty() && lemma_looks_third(form.gender, &bare(lemma)) {
        return true;
    }

    let w = bare(word);
    let ends = |suffixes: &[&str]| suffixes.iter().any(|s| w.ends_with(s));
    match (form.number, form.case) {
        (Some(Number::Singular), Some(Case::Nominative)) => lemma_looks_third(form.gender, &w),
        (Some(Number::Singular), Some(Case::Genitive)) => ends(&["εσ", "οσ", "υσ"]),
        (Some(Number::Singular), Some(Case::Dative)) => ends(&["ι"]),
        (Some(Number::Singular), Some(Case::Accusative)) => !ends(&["ην", "αν", "ον"]),
        (Some(Number::Plural), Some(Case::Nominative)) => !ends(&["αι", "οι", "α"]),
        (Some(Number::Plural), Some(Case::Dative)) => ends(&["εσσι", "εσσιν"]),
        (Some(Number::Plural), Some(Case::Accusative)) => !ends(&["ασ", "ουσ", "α"]),
        _ => false,
    }
}

/// Given a nominative singular, does its ending fail to match the gender's
/// first/second-declension endings?
fn lemma_looks_third(gender: Option<Gender>, nominative: &str) -> bool {
    if is_feminine_ending_in_os(nominative) {
        return false;
    }
    match gender {
        Some(Gender::Masculine) => !nominative.ends_with("οσ"),
        Some(Gender::Feminine) => !(nominative.ends_with('α') || nominative.ends_with('η')),
        Some(Gender::Neuter) => !nominative.ends_with("ον"),
        None => false,
    }
}
