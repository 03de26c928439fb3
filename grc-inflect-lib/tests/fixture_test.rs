// Table-driven fixtures: syllables, spellings, accent placement and the
// noun calibration set.

use grc_inflect_lib::output::to_hyphenated;
use grc_inflect_lib::writing::{normalize_with, stem_form, NormalizeOptions};
use grc_inflect_lib::{
    guess_declension_difficulty, guess_difficulty, locate_accent, move_accent_to, normalize,
    romanize, syllabify, Dialect, VerbForm,
};

fn epic() -> Dialect {
    Dialect::epic()
}

#[test]
fn syllables() {
    let cases: &[(&str, &str)] = &[
        ("ἄλλος", "ἄλ-λος"),
        ("ἔπος", "ἔ-πος"),
        ("ἱερῆα", "ἱ-ε-ρῆ-α"),
        ("ταύρων", "ταύ-ρων"),
        ("ἄνθρωπος", "ἄν-θρω-πος"),
        ("ἔργον", "ἔρ-γον"),
        ("πατρός", "πα-τρός"),
        ("ἐκβάλλω", "ἐκ-βάλ-λω"),
        ("ἀναπίμπλημι", "ἀ-να-πίμ-πλη-μι"),
        ("Ἀτρεΐδης", "Ἀ-τρε-ΐ-δης"),
        ("ἐΰς", "ἐ-ΰς"),
        ("σωτηρα", "σω-τη-ρα"),
        ("ἅλς", "ἅλς"),
    ];
    for (word, expected) in cases {
        assert_eq!(to_hyphenated(&syllabify(word, epic())), *expected, "{word}");
    }
}

#[test]
fn spellings() {
    let phonetic = NormalizeOptions::phonetic();
    let cases: &[(&str, &str, &str, &str)] = &[
        // word, normalized, phonetic, stem form
        ("ῥέω", "hρέω", "hρε!ω", "hρεω"),
        ("δαμᾷ", "δαμᾶι", "δαμα~ι", "δαμαι"),
        ("ἑλώριον", "hελώριον", "hελω!ριον", "hελωριον"),
        ("μὲν", "μέν", "με!ν", "μεν"),
        ("λύεις", "λύεις", "λυ!εισ", "λυεισ"),
    ];
    for (word, norm, phon, stem) in cases {
        assert_eq!(normalize(word), *norm, "{word}");
        assert_eq!(normalize_with(word, &phonetic), *phon, "{word}");
        assert_eq!(stem_form(word), *stem, "{word}");
    }
}

#[test]
fn romanization() {
    let cases: &[(&str, &str)] = &[
        ("λόγος", "lógos"),
        ("ψυχή", "psychḗ"),
        ("Ἀχιλλεύς", "Achilleús"),
        ("ῥήτωρ", "rhḗtōr"),
    ];
    for (word, expected) in cases {
        assert_eq!(romanize(word), *expected, "{word}");
    }
}

#[test]
fn accent_positions() {
    let cases: &[(&str, Option<usize>)] = &[
        ("ἄνθρωπος", Some(2)),
        ("λόγος", Some(1)),
        ("θεός", Some(0)),
        ("δῶρον", Some(1)),
        ("σωτηρα", None),
    ];
    for (word, expected) in cases {
        assert_eq!(locate_accent(word, epic()), *expected, "{word}");
    }
}

#[test]
fn accent_moves() {
    let cases: &[(&str, usize, &str)] = &[
        ("σωτηρα", 1, "σωτῆρα"),
        ("σωτηρων", 1, "σωτήρων"),
        ("δουλοι", 1, "δοῦλοι"),
        ("ἀνθρωπος", 2, "ἄνθρωπος"),
        ("οἰκος", 1, "οἶκος"),
    ];
    for (word, k, expected) in cases {
        assert_eq!(move_accent_to(word, *k, None, epic()).unwrap(), *expected, "{word}");
    }
}

#[test]
fn noun_calibration() {
    // word, lemma, tag, score, hard
    let cases: &[(&str, &str, &str, f64, bool)] = &[
        ("κύνεσσι", "κύων", "n-p---md-", 0.45, true),
        ("νῆας", "ναῦς", "n-p---fa-", 0.7, true),
        ("θύγατρα", "θυγάτηρ", "n-s---fa-", 1.0 / 7.0 + 0.2, false),
        ("βασιλῆϊ", "βασιλεύς", "n-s---md-", 1.0 / 6.0 + 0.2, false),
        ("ἀνδρῶν", "ἀνήρ", "n-p---mg-", 0.45, true),
        ("λαοί", "λαός", "n-p---mn-", 0.0, false),
    ];
    for (word, lemma, tag, score, hard) in cases {
        let d = guess_declension_difficulty(word, lemma, tag);
        assert!((d.score - score).abs() < 1e-9, "{word}: {}", d.score);
        assert_eq!(d.is_hard, *hard, "{word}");
    }
}

#[test]
fn verb_calibration() {
    // word, lemma, tag, hard
    let cases: &[(&str, &str, &str, bool)] = &[
        ("λύει", "λύω", "v3spia---", false),
        ("λύουσιν", "λύω", "v3ppia---", false),
        ("ἔλυσε", "λύω", "v3saia---", false),
        ("λύσω", "λύω", "v1sfia---", false),
        ("ἐλύθη", "λύω", "v3saip---", false),
        ("ἦγον", "ἄγω", "v3piia---", false),
        ("ἴθι", "εἶμι", "v2spma---", true),
        ("ἤνεγκε", "φέρω", "v3saia---", true),
    ];
    for (word, lemma, tag, hard) in cases {
        let form = VerbForm::from_tag(tag).unwrap();
        let d = guess_difficulty(word, lemma, &form, epic());
        assert_eq!(d.is_hard, *hard, "{word} {lemma}: {}", d.score);
    }
}

#[test]
fn reports_serialize_to_json() {
    let form = VerbForm::from_tag("v3spia---").unwrap();
    let v = serde_json::to_value(guess_difficulty("λύει", "λύω", &form, epic())).unwrap();
    assert_eq!(v["is_hard"], false);
    assert_eq!(v["form"]["tense"], "present");
    assert_eq!(v["debug"]["word_stem"], "λυ");

    let v = serde_json::to_value(guess_declension_difficulty("λαοί", "λαός", "n-p---mn-")).unwrap();
    assert_eq!(v["declension"], "second");
}
