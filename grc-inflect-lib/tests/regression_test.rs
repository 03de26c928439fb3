// Regression tests for known edge cases and the invariants the analysis
// relies on.

use std::collections::BTreeSet;

use grc_inflect_lib::writing::strip_tonal;
use grc_inflect_lib::{
    guess_declension_difficulty, guess_difficulty, lcs_distance, locate_accent, move_accent_to,
    syllabify, Dialect, MultiString, VerbForm,
};

fn epic() -> Dialect {
    Dialect::epic()
}

fn syl(word: &str) -> Vec<String> {
    syllabify(word, epic())
}

fn verb(tag: &str) -> VerbForm {
    VerbForm::from_tag(tag).unwrap()
}

const WORDS: &[&str] = &[
    "ἄνθρωπος", "μῆνιν", "ἄειδε", "θεὰ", "Πηληϊάδεω", "Ἀχιλῆος", "οὐλομένην", "μυρί᾽",
    "Ἀχαιοῖς", "ἄλγε᾽", "ἔθηκε", "πολλὰς", "ἰφθίμους", "ψυχὰς", "Ἄϊδι", "προΐαψεν", "ἡρώων",
    "ἑλώρια", "τεῦχε", "κύνεσσιν", "οἰωνοῖσί", "Διὸς", "ἐτελείετο", "βουλή", "ἐξ", "οὗ",
    "διαστήτην", "ἐρίσαντε", "Ἀτρεΐδης", "ἄναξ", "ἀνδρῶν", "δῖος", "Ἀχιλλεύς", "ᾠδή",
    "συμβάλλω", "ἀφίημι", "καθίζω",
];

#[test]
fn syllables_reconstruct_the_word() {
    for w in WORDS {
        assert_eq!(syl(w).concat(), *w, "{w}");
    }
}

#[test]
fn syllabification_fixtures() {
    assert_eq!(syl("ἄλλος"), vec!["ἄλ", "λος"]);
    assert_eq!(syl("ἀναπίμπλημι"), vec!["ἀ", "να", "πίμ", "πλη", "μι"]);
    assert_eq!(syl("ἐκβάλλω"), vec!["ἐκ", "βάλ", "λω"]);
    // ἐπ- looks like a prefix, but the rest is too short to be a stem
    assert_eq!(syl("ἔπος"), vec!["ἔ", "πος"]);
}

#[test]
fn lcs_distance_is_metric_like() {
    let samples = ["", "λυ", "ελυσ", "ειμι", "ιθι", "σωτηρ", "θυγατηρ"];
    for a in samples {
        assert_eq!(lcs_distance(a, a), 0);
        for b in samples {
            assert_eq!(lcs_distance(a, b), lcs_distance(b, a), "{a} {b}");
            if a != b {
                assert!(lcs_distance(a, b) > 0, "{a} {b}");
            }
        }
    }
}

#[test]
fn union_is_a_superset() {
    let a = MultiString::alternatives(["ε", ""]) + MultiString::new("λυ");
    let b = MultiString::alternatives(["λυσ", "λυ", "λυσσ"]);
    let expected: BTreeSet<String> = a.enumerate().into_iter().chain(b.enumerate()).collect();
    let got: BTreeSet<String> = a.union(&b).enumerate().into_iter().collect();
    assert_eq!(got, expected);
}

#[test]
fn accent_round_trip() {
    for w in ["ἄνθρωπος", "λόγος", "σωτῆρα", "θάλασσα", "ἀγορή", "ἥλιος", "οἶκος"] {
        let plain = strip_tonal(w);
        let n = syl(&plain).len();
        for k in 0..n.min(3) {
            let moved = move_accent_to(&plain, k, None, epic()).unwrap();
            assert_eq!(locate_accent(&moved, epic()), Some(k), "{w} -> {moved}");
        }
    }
}

#[test]
fn sotera_circumflex_on_penult() {
    let inf = verb("v--pna---");
    assert_eq!(move_accent_to("σωτηρα", 1, Some(&inf), epic()).unwrap(), "σωτῆρα");
    assert_eq!(move_accent_to("σωτηρα", 1, None, epic()).unwrap(), "σωτῆρα");
}

#[test]
fn regular_verb_is_easy() {
    let d = guess_difficulty("λύει", "λύω", &verb("v3spia---"), epic());
    assert!(!d.is_hard);
    assert_eq!(d.score, 0.0);
}

#[test]
fn suppletive_imperative_is_hard() {
    let d = guess_difficulty("ἴθι", "εἶμι", &verb("v2spma---"), epic());
    assert!(d.is_hard);
    assert!(d.score > d.threshold);
}

#[test]
fn feminine_in_os_raises_difficulty() {
    // same shape, same tag; only νόσος is on the feminine -ος list
    let fem = guess_declension_difficulty("νόσου", "νόσος", "n-s---mg-");
    let plain = guess_declension_difficulty("λόγου", "λόγος", "n-s---mg-");
    assert!(fem.feminine_in_os);
    assert!(!plain.feminine_in_os);
    assert!(fem.score > plain.score);
}

#[test]
fn verb_tag_errors() {
    assert!(VerbForm::from_tag("n-s---mn-").is_err());
    assert!(VerbForm::from_tag("v3s").is_err());
    assert!(VerbForm::from_tag("v3sxia---").is_err());
}
