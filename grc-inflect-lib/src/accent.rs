// Locating and moving the tonal accent.
//
// Positions count syllables from the end of the word: 0 is the ultima,
// 1 the penult, 2 the antepenult.

use crate::dialect::Dialect;
use crate::error::{Error, Result};
use crate::features::VerbForm;
use crate::syllab::syllabify;
use crate::writing::{self, has_tonal_accent, is_diphthong, set_accent, strip_tonal, Letter, Tone};

/// Position of the accented syllable, or `None` for an unaccented word.
pub fn locate_accent(word: &str, dialect: Dialect) -> Option<usize> {
    syllabify(word, dialect)
        .iter()
        .rev()
        .position(|s| has_tonal_accent(s))
}

/// Re-render `word` with its accent on syllable `k` from the end.
///
/// The penult takes a circumflex instead of an acute when the dialect has
/// the sôtêra rule, the penult is long and the ultima is light. Final -αι and
/// -οι count as light, except in the optative.
pub fn move_accent_to(
    word: &str,
    k: usize,
    form: Option<&VerbForm>,
    dialect: Dialect,
) -> Result<String> {
    let bare = strip_tonal(word);
    let mut syllables = syllabify(&bare, dialect);
    let n = syllables.len();
    if n == 0 {
        return Err(Error::EmptyWord);
    }
    if k >= n {
        return Err(Error::AccentOutOfRange {
            word: word.to_string(),
            index: k,
            syllables: n,
        });
    }

    let optative = form.is_some_and(|f| f.is_optative());
    let tone = if k == 1
        && dialect.has_sotera_rule()
        && !is_heavy_ultima(&syllables[n - 1], optative)
        && is_long_nucleus(&syllables[n - 2])
    {
        Tone::Circumflex
    } else {
        Tone::Acute
    };

    let target = n - 1 - k;
    if let Some(pos) = nucleus_position(&syllables[target]) {
        syllables[target] = set_accent(&syllables[target], pos, tone);
    }
    Ok(syllables.concat())
}

/// Where a recessive accent falls: the antepenult after a light ultima, the
/// penult after a heavy one, never beyond the first syllable.
pub fn recessive_position(word: &str, form: Option<&VerbForm>, dialect: Dialect) -> usize {
    let syllables = syllabify(&strip_tonal(word), dialect);
    let Some(ultima) = syllables.last() else {
        return 0;
    };
    let optative = form.is_some_and(|f| f.is_optative());
    let k = if is_heavy_ultima(ultima, optative) { 1 } else { 2 };
    k.min(syllables.len() - 1)
}

// ---------------------------------------------------------------------------
// Syllable weight
// ---------------------------------------------------------------------------

fn letters_of(syllable: &str) -> Vec<Letter> {
    writing::decompose(syllable)
        .into_iter()
        .filter(|l| !writing::is_mark(l.base))
        .map(|mut l| {
            l.base = writing::base_letter(l.base);
            l
        })
        .collect()
}

/// Index of the letter that carries the accent: the last vowel of the first
/// vowel group (the second letter of a diphthong).
fn nucleus_position(syllable: &str) -> Option<usize> {
    let letters = letters_of(syllable);
    let first = letters.iter().position(Letter::is_vowel)?;
    let mut pos = first;
    while pos + 1 < letters.len()
        && letters[pos + 1].is_vowel()
        && !letters[pos + 1].marks.diaeresis
        && is_diphthong(letters[pos].base, letters[pos + 1].base)
    {
        pos += 1;
    }
    Some(pos)
}

fn nucleus(letters: &[Letter]) -> &[Letter] {
    match letters.iter().position(Letter::is_vowel) {
        Some(start) => {
            let len = letters[start..]
                .iter()
                .take_while(|l| l.is_vowel())
                .count();
            &letters[start..start + len]
        }
        None => &[],
    }
}

fn is_long_nucleus(syllable: &str) -> bool {
    let letters = letters_of(syllable);
    let nuc = nucleus(&letters);
    nuc.len() > 1
        || nuc.iter().any(|l| {
            matches!(l.base, 'η' | 'ω') || l.marks.macron || l.marks.iota_subscript
        })
}

fn is_heavy_ultima(syllable: &str, optative: bool) -> bool {
    let letters = letters_of(syllable);
    let nuc = nucleus(&letters);
    let coda: usize = letters
        .iter()
        .skip_while(|l| !l.is_vowel())
        .skip_while(|l| l.is_vowel())
        .map(|l| if matches!(l.base, 'ξ' | 'ψ') { 2 } else { 1 })
        .sum();
    if coda >= 2 {
        return true;
    }
    if nuc.len() > 1 {
        let short_final = coda == 0
            && matches!(
                (nuc[0].base, nuc[nuc.len() - 1].base),
                ('α', 'ι') | ('ο', 'ι')
            );
        return !short_final || optative;
    }
    is_long_nucleus(syllable)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn epic() -> Dialect {
        Dialect::epic()
    }

    #[test]
    fn test_locate() {
        assert_eq!(locate_accent("ἄνθρωπος", epic()), Some(2));
        assert_eq!(locate_accent("λόγος", epic()), Some(1));
        assert_eq!(locate_accent("θεός", epic()), Some(0));
        assert_eq!(locate_accent("σωτηρα", epic()), None);
    }

    #[test]
    fn test_sotera() {
        assert_eq!(move_accent_to("σωτηρα", 1, None, epic()).unwrap(), "σωτῆρα");
        assert_eq!(move_accent_to("δῶρον", 1, None, epic()).unwrap(), "δῶρον");
        // a long ultima keeps the acute
        assert_eq!(move_accent_to("σωτηρων", 1, None, epic()).unwrap(), "σωτήρων");
        assert_eq!(move_accent_to("σωτηρος", 1, None, epic()).unwrap(), "σωτῆρος");
        assert_eq!(move_accent_to("σωτηρι", 1, None, epic()).unwrap(), "σωτῆρι");
        let medieval: Dialect = "medieval".parse().unwrap();
        assert_eq!(move_accent_to("σωτηρα", 1, None, medieval).unwrap(), "σωτήρα");
    }

    #[test]
    fn test_final_diphthong() {
        assert_eq!(move_accent_to("δουλοι", 1, None, epic()).unwrap(), "δοῦλοι");
        let opt = VerbForm::from_tag("v3saoa---").unwrap();
        assert_eq!(
            move_accent_to("παιδευσαι", 1, Some(&opt), epic()).unwrap(),
            "παιδεύσαι"
        );
        let inf = VerbForm::from_tag("v--ana---").unwrap();
        assert_eq!(
            move_accent_to("παιδευσαι", 1, Some(&inf), epic()).unwrap(),
            "παιδεῦσαι"
        );
    }

    #[test]
    fn test_move_to_other_positions() {
        assert_eq!(move_accent_to("ἀνθρωπος", 2, None, epic()).unwrap(), "ἄνθρωπος");
        assert_eq!(move_accent_to("ἄνθρωπος", 0, None, epic()).unwrap(), "ἀνθρωπός");
        assert_eq!(move_accent_to("οἰκος", 1, None, epic()).unwrap(), "οἶκος");
    }

    #[test]
    fn test_out_of_range() {
        let err = move_accent_to("λόγος", 2, None, epic()).unwrap_err();
        assert_eq!(
            err,
            Error::AccentOutOfRange {
                word: "λόγος".to_string(),
                index: 2,
                syllables: 2
            }
        );
        assert_eq!(move_accent_to("", 0, None, epic()).unwrap_err(), Error::EmptyWord);
    }

    #[test]
    fn test_recessive() {
        assert_eq!(recessive_position("ἀνθρωπος", None, epic()), 2);
        assert_eq!(recessive_position("ἀνθρωπου", None, epic()), 1);
        assert_eq!(recessive_position("λυε", None, epic()), 1);
        assert_eq!(recessive_position("ειμι", None, epic()), 1);
        assert_eq!(recessive_position("", None, epic()), 0);
    }
}
