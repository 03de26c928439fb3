// Human-readable renderings of analysis results.

use crate::features::{Case, Gender, Mood, NounForm, Number, Person, Tense, VerbForm, Voice};

/// Join syllables with hyphens: `ἄν-θρω-πος`.
pub fn to_hyphenated(syllables: &[String]) -> String {
    syllables.join("-")
}

fn number_abbrev(n: Number) -> &'static str {
    match n {
        Number::Singular => "sg.",
        Number::Dual => "du.",
        Number::Plural => "pl.",
    }
}

fn case_abbrev(c: Case) -> &'static str {
    match c {
        Case::Nominative => "nom.",
        Case::Genitive => "gen.",
        Case::Dative => "dat.",
        Case::Accusative => "acc.",
        Case::Vocative => "voc.",
        Case::Locative => "loc.",
    }
}

/// Case and number of a nominal tag, long and short: `("dat. pl.", "dat.")`.
/// `None` when the tag has no case or no number.
pub fn describe_declension(tag: &str) -> Option<(String, String)> {
    let form = NounForm::from_tag(tag);
    let case = case_abbrev(form.case?);
    let number = number_abbrev(form.number?);
    Some((format!("{case} {number}"), case.to_string()))
}

/// Abbreviated description of a verb form, e.g. `3rd sg. pres. act. ind.`
/// Participles also carry gender and case when the tag has them.
pub fn describe_verb_form(form: &VerbForm) -> String {
    let mut parts: Vec<&str> = Vec::new();
    if let Some(p) = form.person {
        parts.push(match p {
            Person::First => "1st",
            Person::Second => "2nd",
            Person::Third => "3rd",
        });
    }
    if let Some(n) = form.number {
        parts.push(number_abbrev(n));
    }
    parts.push(match form.tense {
        Tense::Present => "pres.",
        Tense::Imperfect => "impf.",
        Tense::Aorist => "aor.",
        Tense::Future => "fut.",
        Tense::Perfect => "perf.",
        Tense::Pluperfect => "plupf.",
        Tense::FuturePerfect => "fut. perf.",
    });
    parts.push(match form.voice {
        Voice::Active => "act.",
        Voice::Middle => "mid.",
        Voice::Passive => "pass.",
        Voice::MedioPassive => "mp.",
    });
    parts.push(match form.mood {
        Mood::Indicative => "ind.",
        Mood::Subjunctive => "subj.",
        Mood::Optative => "opt.",
        Mood::Imperative => "imp.",
        Mood::Infinitive => "inf.",
        Mood::Participle => "part.",
    });
    if form.participle {
        if let Some(g) = form.gender {
            parts.push(match g {
                Gender::Masculine => "masc.",
                Gender::Feminine => "fem.",
                Gender::Neuter => "neut.",
            });
        }
        if let Some(c) = form.case {
            parts.push(case_abbrev(c));
        }
    }
    parts.join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hyphenated() {
        let s: Vec<String> = ["ἄν", "θρω", "πος"].iter().map(|s| s.to_string()).collect();
        assert_eq!(to_hyphenated(&s), "ἄν-θρω-πος");
        assert_eq!(to_hyphenated(&[]), "");
    }

    #[test]
    fn test_describe_declension() {
        assert_eq!(
            describe_declension("n-p---md-"),
            Some(("dat. pl.".to_string(), "dat.".to_string()))
        );
        assert_eq!(
            describe_declension("n-s---fa-"),
            Some(("acc. sg.".to_string(), "acc.".to_string()))
        );
        assert_eq!(describe_declension("v3spia---"), None);
    }

    #[test]
    fn test_describe_verb_form() {
        let f = VerbForm::from_tag("v3spia---").unwrap();
        assert_eq!(describe_verb_form(&f), "3rd sg. pres. act. ind.");
        let f = VerbForm::from_tag("v--ane---").unwrap();
        assert_eq!(describe_verb_form(&f), "aor. mp. inf.");
        let f = VerbForm::from_tag("t-sapmmg-").unwrap();
        assert_eq!(describe_verb_form(&f), "sg. aor. mid. part. masc. gen.");
    }
}
