// Prepositional prefixes of compound verbs: recognition, the spellings a
// preposition takes in front of a stem, and detachment with accent repair.
//
// Prefixes are matched in their assimilated/elided shapes (ἐξ-, ἀφ-, συμ-,
// ...) against the word lowercased with diacritics removed, longest first.

use std::sync::LazyLock;

use tracing::trace;

use crate::accent;
use crate::dialect::Dialect;
use crate::error::Result;
use crate::features::VerbForm;
use crate::multistring::MultiString;
use crate::types::{Detached, PrefixMatch};
use crate::writing::{self, is_vowel};

// ---------------------------------------------------------------------------
// Allomorph table
// ---------------------------------------------------------------------------

/// What the letter after a prefix must be for the allomorph to apply.
#[derive(Debug, Clone, Copy)]
enum Next {
    Any,
    Vowel,
    Consonant,
    OneOf(&'static str),
}

impl Next {
    fn admits(self, c: char) -> bool {
        match self {
            Next::Any => true,
            Next::Vowel => is_vowel(c),
            Next::Consonant => !is_vowel(c),
            Next::OneOf(set) => set.contains(c),
        }
    }
}

const LABIALS: &str = "βμπφψ";
const VELARS: &str = "γκξχ";

// (bare form, dictionary form, condition on the following letter)
const ALLOMORPHS: &[(&str, &str, Next)] = &[
    ("αμφι", "ἀμφί", Next::Consonant),
    ("αμφ", "ἀμφί", Next::Vowel),
    ("ανα", "ἀνά", Next::Consonant),
    ("αν", "ἀνά", Next::Vowel),
    ("αντι", "ἀντί", Next::Consonant),
    ("αντ", "ἀντί", Next::Vowel),
    ("ανθ", "ἀντί", Next::Vowel),
    ("απο", "ἀπό", Next::Consonant),
    ("απ", "ἀπό", Next::Vowel),
    ("αφ", "ἀπό", Next::Vowel),
    ("δια", "διά", Next::Consonant),
    ("δι", "διά", Next::Vowel),
    ("εισ", "εἰς", Next::Any),
    ("εκ", "ἐκ", Next::Consonant),
    ("εξ", "ἐκ", Next::Vowel),
    ("εγ", "ἐκ", Next::OneOf("βδλμ")),
    ("εγ", "ἐν", Next::OneOf(VELARS)),
    ("εμ", "ἐν", Next::OneOf(LABIALS)),
    ("ενι", "ἐν", Next::Consonant),
    ("εν", "ἐν", Next::Any),
    ("επι", "ἐπί", Next::Consonant),
    ("επ", "ἐπί", Next::Vowel),
    ("εφ", "ἐπί", Next::Vowel),
    ("κατα", "κατά", Next::Consonant),
    ("κατ", "κατά", Next::Vowel),
    ("καθ", "κατά", Next::Vowel),
    ("μετα", "μετά", Next::Consonant),
    ("μετ", "μετά", Next::Vowel),
    ("μεθ", "μετά", Next::Vowel),
    ("παρα", "παρά", Next::Consonant),
    ("παρ", "παρά", Next::Vowel),
    ("περι", "περί", Next::Any),
    ("προσ", "πρός", Next::Any),
    ("προ", "πρό", Next::Any),
    ("συν", "σύν", Next::Any),
    ("συμ", "σύν", Next::OneOf(LABIALS)),
    ("συγ", "σύν", Next::OneOf(VELARS)),
    ("συλ", "σύν", Next::OneOf("λ")),
    ("συρ", "σύν", Next::OneOf("ρ")),
    ("συσ", "σύν", Next::OneOf("σ")),
    ("συ", "σύν", Next::OneOf("ζσ")),
    ("υπερ", "ὑπέρ", Next::Any),
    ("υπο", "ὑπό", Next::Consonant),
    ("υπ", "ὑπό", Next::Vowel),
    ("υφ", "ὑπό", Next::Vowel),
];

// Homeric ξύν for σύν.
const EPIC_ALLOMORPHS: &[(&str, &str, Next)] = &[
    ("ξυν", "σύν", Next::Any),
    ("ξυμ", "σύν", Next::OneOf(LABIALS)),
    ("ξυγ", "σύν", Next::OneOf(VELARS)),
    ("ξυλ", "σύν", Next::OneOf("λ")),
];

type Allomorph = (Vec<char>, &'static str, Next);

fn longest_first(tables: &[&[(&'static str, &'static str, Next)]]) -> Vec<Allomorph> {
    let mut all: Vec<Allomorph> = tables
        .iter()
        .flat_map(|t| t.iter())
        .map(|&(form, prep, next)| (form.chars().collect(), prep, next))
        .collect();
    // Stable: equal lengths keep table order.
    all.sort_by(|a, b| b.0.len().cmp(&a.0.len()));
    all
}

static COMMON: LazyLock<Vec<Allomorph>> = LazyLock::new(|| longest_first(&[ALLOMORPHS]));
static EPIC: LazyLock<Vec<Allomorph>> =
    LazyLock::new(|| longest_first(&[ALLOMORPHS, EPIC_ALLOMORPHS]));

fn fold(c: char) -> char {
    match c.to_lowercase().next().unwrap_or(c) {
        'ς' => 'σ',
        other => other,
    }
}

// ---------------------------------------------------------------------------
// Recognition
// ---------------------------------------------------------------------------

/// Find a prepositional prefix at the start of `word`. A non-match is the
/// ordinary answer for a simple word.
pub fn recognize_prefix(word: &str, dialect: Dialect) -> Option<PrefixMatch> {
    let letters = writing::decompose(word);
    let folded: Vec<char> = letters.iter().map(|l| fold(l.base)).collect();
    let table: &[Allomorph] = if dialect.is_epic() { &EPIC } else { &COMMON };

    for (form, preposition, next) in table {
        let n = form.len();
        if folded.len() <= n || folded[..n] != form[..] {
            continue;
        }
        if !next.admits(folded[n]) {
            continue;
        }
        let rest = &folded[n..];
        if !rest.iter().any(|&c| is_vowel(c)) {
            continue;
        }
        // Stems don't begin with a geminate, except ρρ after a vowel-final
        // prefix (ἀπορρίπτω).
        if rest.len() > 1 && rest[0] == rest[1] && rest[0] != 'ρ' && !is_vowel(rest[0]) {
            continue;
        }
        return Some(PrefixMatch {
            prefix: writing::compose(&letters[..n]),
            stem: writing::compose(&letters[n..]),
            preposition: *preposition,
        });
    }
    None
}

// ---------------------------------------------------------------------------
// Prefix forms
// ---------------------------------------------------------------------------

/// The spellings `preposition` (dictionary form, e.g. ἐκ not ἐξ) can take in
/// front of `stem`. Accent and breathing of the result are not adjusted.
pub fn prefix_forms(preposition: &str, stem: &str) -> MultiString {
    let phonetic = writing::stem_form(stem);
    let mut stem_chars = phonetic.chars();
    let first = stem_chars.next().unwrap_or(' ');
    let second = stem_chars.next();
    let vowel = first == 'h' || is_vowel(first);
    let velar = VELARS.contains(first);
    let labial = LABIALS.contains(first);
    let s_vowel = first == 'σ' && second.is_some_and(is_vowel);
    let s_consonant = first == 'σ' && second.is_some_and(|c| !is_vowel(c));

    let bare_prep = writing::bare(preposition);
    match bare_prep.as_str() {
        "εκ" => {
            if vowel {
                return MultiString::new("ἐξ");
            }
            if "βδλμ".contains(first) {
                return MultiString::new("ἐγ");
            }
        }
        "εν" => {
            let mut forms = Vec::new();
            if labial {
                forms.push("ἐμ");
            }
            if velar {
                forms.push("ἐγ");
            }
            if forms.is_empty() {
                forms.push("ἐν");
            }
            forms.push("ἐνι");
            return MultiString::alternatives(forms);
        }
        "συν" => {
            let mut forms = vec!["σύν"];
            if labial {
                forms.push("σύμ");
            }
            if velar {
                forms.push("σύγ");
            }
            if first == 'λ' {
                forms.push("σύλ");
            }
            if first == 'ρ' {
                forms.push("σύρ");
            }
            if s_vowel {
                forms.push("σύσ");
            }
            if first == 'ζ' || s_consonant {
                forms.push("σύ");
            }
            let epic: Vec<String> = forms.iter().map(|f| f.replacen('σ', "ξ", 1)).collect();
            let mut all: Vec<String> = forms.into_iter().map(String::from).collect();
            all.extend(epic);
            return MultiString::alternatives(all);
        }
        _ => {}
    }

    if first == 'h' {
        let aspirated = match bare_prep.as_str() {
            "απο" => Some("ἀφ"),
            "επι" => Some("ἐφ"),
            "υπο" => Some("ὑφ"),
            "κατα" => Some("καθ"),
            "μετα" => Some("μεθ"),
            "αντι" => Some("ἀνθ"),
            _ => None,
        };
        if let Some(form) = aspirated {
            return MultiString::new(form);
        }
    }

    if vowel && bare_prep.chars().last().is_some_and(is_vowel) {
        let mut chars: Vec<char> = preposition.chars().collect();
        chars.pop();
        let elided: String = chars.into_iter().collect();
        return MultiString::alternatives([preposition.to_string(), elided]);
    }

    MultiString::new(preposition)
}

/// Every spelling of the compound `preposition` + `stem`.
pub fn prefix_to_stem(preposition: &str, stem: &str) -> MultiString {
    prefix_forms(preposition, stem) + MultiString::new(stem)
}

// ---------------------------------------------------------------------------
// Detachment
// ---------------------------------------------------------------------------

/// Split the preposition off an inflected compound verb and re-accent the
/// bare stem as a word of its own. With a lemma, the lemma must be a
/// compound too, otherwise nothing is detached.
pub fn detach_preposition(
    word: &str,
    lemma: Option<&str>,
    form: &VerbForm,
    dialect: Dialect,
) -> Result<Option<Detached>> {
    let Some(found) = recognize_prefix(word, dialect) else {
        return Ok(None);
    };
    let lemma_match = match lemma {
        Some(l) => match recognize_prefix(l, dialect) {
            Some(m) => Some(m),
            None => return Ok(None),
        },
        None => None,
    };

    let stem = reaccent(&restore_breathing(&found), Some(form), dialect)?;
    let lemma_stem = match (&lemma_match, lemma) {
        (Some(m), Some(l)) => {
            let shape = form.lemma_shape(l);
            Some(reaccent(&restore_breathing(m), Some(&shape), dialect)?)
        }
        _ => None,
    };
    trace!(word, preposition = found.preposition, %stem, "detached preposition");

    Ok(Some(Detached {
        preposition: found.preposition,
        stem,
        lemma_stem,
    }))
}

/// A vowel-initial stem regains the breathing it lost inside the compound:
/// rough after an aspirated prefix (ἀφ-, καθ-), smooth otherwise. A doubled
/// ρρ reverts to initial ῥ.
fn restore_breathing(m: &PrefixMatch) -> String {
    let mut letters = writing::decompose(&m.stem);
    if let Some(first) = letters.first_mut() {
        first.marks.diaeresis = false;
    }
    if letters.len() > 2 && fold(letters[0].base) == 'ρ' && fold(letters[1].base) == 'ρ' {
        letters.remove(0);
    }
    let stem = writing::compose(&letters);

    let prefix: Vec<char> = writing::bare(&m.prefix).chars().collect();
    let plain: Vec<char> = writing::bare(m.preposition).chars().collect();
    let aspirated = match prefix.last() {
        Some(&c @ ('φ' | 'θ')) => plain.get(prefix.len() - 1) != Some(&c),
        _ => false,
    };

    match letters.first().map(|l| fold(l.base)) {
        Some('ρ') => writing::add_rough_breathing(&stem),
        Some(c) if is_vowel(c) && aspirated => writing::add_rough_breathing(&stem),
        Some(c) if is_vowel(c) => writing::add_smooth_breathing(&stem),
        _ => stem,
    }
}

fn reaccent(stem: &str, form: Option<&VerbForm>, dialect: Dialect) -> Result<String> {
    let k = match accent::locate_accent(stem, dialect) {
        Some(k) => k,
        None => accent::recessive_position(stem, form, dialect),
    };
    accent::move_accent_to(stem, k, form, dialect)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn epic() -> Dialect {
        Dialect::epic()
    }

    fn split(word: &str) -> Option<(String, String, &'static str)> {
        recognize_prefix(word, epic()).map(|m| (m.prefix, m.stem, m.preposition))
    }

    #[test]
    fn test_recognize_assimilated_forms() {
        assert_eq!(
            split("ἐκβάλλω"),
            Some(("ἐκ".to_string(), "βάλλω".to_string(), "ἐκ"))
        );
        assert_eq!(
            split("ἐξάγω"),
            Some(("ἐξ".to_string(), "άγω".to_string(), "ἐκ"))
        );
        assert_eq!(split("ἀφίημι").map(|s| s.2), Some("ἀπό"));
        assert_eq!(split("συμφέρω").map(|s| s.2), Some("σύν"));
        assert_eq!(split("καθίζω").map(|s| s.2), Some("κατά"));
        assert_eq!(split("ἀναπίμπλημι").map(|s| s.1), Some("πίμπλημι".to_string()));
        assert_eq!(split("ὑπερβαίνω").map(|s| s.2), Some("ὑπέρ"));
    }

    #[test]
    fn test_no_prefix() {
        assert_eq!(split("λύω"), None);
        assert_eq!(split("ἄνθρωπος"), None);
        assert_eq!(split("παρθένος"), None);
        assert_eq!(split("περισσός"), None);
    }

    #[test]
    fn test_xun_only_in_epic() {
        assert_eq!(split("ξυμβάλλω").map(|s| s.2), Some("σύν"));
        let attic: Dialect = "attic".parse().unwrap();
        assert_eq!(recognize_prefix("ξυμβάλλω", attic), None);
    }

    #[test]
    fn test_prefix_forms() {
        assert_eq!(prefix_forms("ἐκ", "ἄγω").enumerate(), vec!["ἐξ"]);
        assert_eq!(prefix_forms("ἐκ", "βάλλω").enumerate(), vec!["ἐγ"]);
        assert_eq!(prefix_forms("ἐκ", "φέρω").enumerate(), vec!["ἐκ"]);
        assert_eq!(prefix_forms("ἐν", "πλήσσω").enumerate(), vec!["ἐμ", "ἐνι"]);
        assert_eq!(prefix_forms("ἀπό", "ἵημι").enumerate(), vec!["ἀφ"]);
        assert_eq!(prefix_forms("ἀπό", "ἄρχω").enumerate(), vec!["ἀπό", "ἀπ"]);
        assert_eq!(prefix_forms("περί", "βάλλω").enumerate(), vec!["περί"]);
        assert_eq!(
            prefix_forms("σύν", "λέγω").enumerate(),
            vec!["σύν", "σύλ", "ξύν", "ξύλ"]
        );
    }

    #[test]
    fn test_prefix_to_stem() {
        let all = prefix_to_stem("ἀπό", "ἄρχω").enumerate();
        assert_eq!(all, vec!["ἀπόἄρχω", "ἀπἄρχω"]);
        assert_eq!(prefix_to_stem("σύν", "φέρω").segments().len(), 2);
    }

    #[test]
    fn test_detach_restores_breathing_and_accent() {
        let form = VerbForm::from_tag("v1spia---").unwrap();
        let d = detach_preposition("ἀφίημι", Some("ἀφίημι"), &form, epic())
            .unwrap()
            .unwrap();
        assert_eq!(d.preposition, "ἀπό");
        assert_eq!(d.stem, "ἵημι");
        assert_eq!(d.lemma_stem.as_deref(), Some("ἵημι"));

        let d = detach_preposition("πάρειμι", None, &form, epic()).unwrap().unwrap();
        assert_eq!(d.preposition, "παρά");
        assert_eq!(d.stem, "εἶμι");
    }

    #[test]
    fn test_detach_needs_compound_lemma() {
        let form = VerbForm::from_tag("v3saia---").unwrap();
        assert_eq!(
            detach_preposition("ἐξέβαλε", Some("βάλλω"), &form, epic()).unwrap(),
            None
        );
        assert_eq!(detach_preposition("ἔβαλε", None, &form, epic()).unwrap(), None);
    }
}
