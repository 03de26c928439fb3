// Grammatical feature vectors decoded from 9-character treebank tags.
//
// Tag layout (one character per slot, '-' for not applicable):
//   0 part of speech (v verb, t participle, n noun, a adjective, ...)
//   1 person  2 number  3 tense  4 mood  5 voice  6 gender  7 case  8 degree

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

const MANDATORY_VERB_SLOTS: usize = 6;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Person {
    First,
    Second,
    Third,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Number {
    Singular,
    Dual,
    Plural,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Tense {
    Present,
    Imperfect,
    Aorist,
    Future,
    Perfect,
    Pluperfect,
    FuturePerfect,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Mood {
    Indicative,
    Subjunctive,
    Optative,
    Infinitive,
    Imperative,
    Participle,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Voice {
    Active,
    Passive,
    Middle,
    MedioPassive,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Gender {
    Masculine,
    Feminine,
    Neuter,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Case {
    Nominative,
    Genitive,
    Dative,
    Accusative,
    Vocative,
    Locative,
}

/// Decoded verb or participle tag. Immutable once built.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct VerbForm {
    pub participle: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub person: Option<Person>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub number: Option<Number>,
    pub tense: Tense,
    pub mood: Mood,
    pub voice: Voice,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gender: Option<Gender>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub case: Option<Case>,
}

impl VerbForm {
    /// Decode a verb (`v`) or participle (`t`) tag such as `v3spia---`.
    /// The trailing gender/case/degree slots are optional.
    pub fn from_tag(tag: &str) -> Result<Self> {
        let chars: Vec<char> = tag.chars().collect();
        match chars.first() {
            Some('v') | Some('t') => {}
            _ => {
                return Err(Error::NotAVerbTag {
                    tag: tag.to_string(),
                })
            }
        }
        if chars.len() < MANDATORY_VERB_SLOTS {
            return Err(Error::TagTooShort {
                tag: tag.to_string(),
                expected: MANDATORY_VERB_SLOTS,
            });
        }
        let slot = |i: usize| chars.get(i).copied().unwrap_or('-');
        let bad = |i: usize| Error::MalformedTag {
            tag: tag.to_string(),
            position: i,
            found: slot(i),
        };

        let person = decode_person(slot(1)).ok_or_else(|| bad(1))?;
        let number = decode_number(slot(2)).ok_or_else(|| bad(2))?;
        let tense = decode_tense(slot(3)).ok_or_else(|| bad(3))?.ok_or_else(|| bad(3))?;
        let mood = decode_mood(slot(4)).ok_or_else(|| bad(4))?.ok_or_else(|| bad(4))?;
        let voice = decode_voice(slot(5)).ok_or_else(|| bad(5))?.ok_or_else(|| bad(5))?;
        let gender = decode_gender(slot(6)).ok_or_else(|| bad(6))?;
        let case = decode_case(slot(7)).ok_or_else(|| bad(7))?;

        Ok(Self {
            participle: chars[0] == 't' || mood == Mood::Participle,
            person,
            number,
            tense,
            mood,
            voice,
            gender,
            case,
        })
    }

    /// The citation-form shape of this form's lemma: first person singular
    /// indicative, with tense and voice read off the lemma's bare ending
    /// (-μαι middle, -α perfect used as a present, -ον aorist used as a
    /// present). The lemma may be given in surface or normalized spelling;
    /// accents are ignored.
    pub fn lemma_shape(&self, lemma: &str) -> Self {
        let bare = crate::writing::stem_form(lemma);
        let voice = if bare.ends_with("μαι") {
            Voice::Middle
        } else {
            Voice::Active
        };
        let tense = if bare.ends_with("ον") {
            Tense::Aorist
        } else if bare.ends_with('α') {
            Tense::Perfect
        } else {
            Tense::Present
        };
        Self {
            participle: false,
            person: Some(Person::First),
            number: Some(Number::Singular),
            tense,
            mood: Mood::Indicative,
            voice,
            gender: None,
            case: None,
        }
    }

    pub fn is_indicative(&self) -> bool {
        self.mood == Mood::Indicative
    }

    pub fn is_optative(&self) -> bool {
        self.mood == Mood::Optative
    }

    /// Imperfect, aorist and pluperfect: the tenses that take an augment in
    /// the indicative.
    pub fn is_past(&self) -> bool {
        matches!(
            self.tense,
            Tense::Imperfect | Tense::Aorist | Tense::Pluperfect
        )
    }

    pub fn is_perfect_system(&self) -> bool {
        matches!(
            self.tense,
            Tense::Perfect | Tense::Pluperfect | Tense::FuturePerfect
        )
    }

    pub fn is_sigmatic(&self) -> bool {
        matches!(self.tense, Tense::Aorist | Tense::Future)
    }

    /// Rebuild the 9-character tag.
    pub fn tag(&self) -> String {
        let mut s = String::with_capacity(9);
        s.push(if self.participle { 't' } else { 'v' });
        s.push(match self.person {
            Some(Person::First) => '1',
            Some(Person::Second) => '2',
            Some(Person::Third) => '3',
            None => '-',
        });
        s.push(match self.number {
            Some(Number::Singular) => 's',
            Some(Number::Dual) => 'd',
            Some(Number::Plural) => 'p',
            None => '-',
        });
        s.push(match self.tense {
            Tense::Present => 'p',
            Tense::Imperfect => 'i',
            Tense::Aorist => 'a',
            Tense::Future => 'f',
            Tense::Perfect => 'r',
            Tense::Pluperfect => 'l',
            Tense::FuturePerfect => 't',
        });
        s.push(match self.mood {
            Mood::Indicative => 'i',
            Mood::Subjunctive => 's',
            Mood::Optative => 'o',
            Mood::Infinitive => 'n',
            Mood::Imperative => 'm',
            Mood::Participle => 'p',
        });
        s.push(match self.voice {
            Voice::Active => 'a',
            Voice::Passive => 'p',
            Voice::Middle => 'm',
            Voice::MedioPassive => 'e',
        });
        s.push(match self.gender {
            Some(Gender::Masculine) => 'm',
            Some(Gender::Feminine) => 'f',
            Some(Gender::Neuter) => 'n',
            None => '-',
        });
        s.push(match self.case {
            Some(Case::Nominative) => 'n',
            Some(Case::Genitive) => 'g',
            Some(Case::Dative) => 'd',
            Some(Case::Accusative) => 'a',
            Some(Case::Vocative) => 'v',
            Some(Case::Locative) => 'l',
            None => '-',
        });
        s.push('-');
        s
    }
}

impl FromStr for VerbForm {
    type Err = Error;

    fn from_str(tag: &str) -> Result<Self> {
        Self::from_tag(tag)
    }
}

impl fmt::Display for VerbForm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.tag())
    }
}

/// Number, gender and case of a nominal tag (`n-p---md-`), any slot may be
/// absent. Non-nominal tags decode to all `None` with `is_noun == false`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct NounForm {
    pub is_noun: bool,
    pub number: Option<Number>,
    pub gender: Option<Gender>,
    pub case: Option<Case>,
}

impl NounForm {
    /// Lenient decoding: unknown letters in a slot read as "not applicable",
    /// since the declension heuristics treat missing information as
    /// inconclusive rather than wrong.
    pub fn from_tag(tag: &str) -> Self {
        let chars: Vec<char> = tag.chars().collect();
        let slot = |i: usize| chars.get(i).copied().unwrap_or('-');
        Self {
            is_noun: slot(0) == 'n',
            number: decode_number(slot(2)).flatten(),
            gender: decode_gender(slot(6)).flatten(),
            case: decode_case(slot(7)).flatten(),
        }
    }
}

// Each decoder returns None for a letter outside its alphabet and Some(None)
// for the '-' placeholder.

fn decode_person(c: char) -> Option<Option<Person>> {
    match c {
        '1' => Some(Some(Person::First)),
        '2' => Some(Some(Person::Second)),
        '3' => Some(Some(Person::Third)),
        '-' => Some(None),
        _ => None,
    }
}

fn decode_number(c: char) -> Option<Option<Number>> {
    match c {
        's' => Some(Some(Number::Singular)),
        'd' => Some(Some(Number::Dual)),
        'p' => Some(Some(Number::Plural)),
        '-' => Some(None),
        _ => None,
    }
}

fn decode_tense(c: char) -> Option<Option<Tense>> {
    match c {
        'p' => Some(Some(Tense::Present)),
        'i' => Some(Some(Tense::Imperfect)),
        'a' => Some(Some(Tense::Aorist)),
        'f' => Some(Some(Tense::Future)),
        'r' => Some(Some(Tense::Perfect)),
        'l' => Some(Some(Tense::Pluperfect)),
        't' => Some(Some(Tense::FuturePerfect)),
        '-' => Some(None),
        _ => None,
    }
}

fn decode_mood(c: char) -> Option<Option<Mood>> {
    match c {
        'i' => Some(Some(Mood::Indicative)),
        's' => Some(Some(Mood::Subjunctive)),
        'o' => Some(Some(Mood::Optative)),
        'n' => Some(Some(Mood::Infinitive)),
        'm' => Some(Some(Mood::Imperative)),
        'p' => Some(Some(Mood::Participle)),
        '-' => Some(None),
        _ => None,
    }
}

fn decode_voice(c: char) -> Option<Option<Voice>> {
    match c {
        'a' => Some(Some(Voice::Active)),
        'p' => Some(Some(Voice::Passive)),
        'm' => Some(Some(Voice::Middle)),
        'e' => Some(Some(Voice::MedioPassive)),
        '-' => Some(None),
        _ => None,
    }
}

fn decode_gender(c: char) -> Option<Option<Gender>> {
    match c {
        'm' => Some(Some(Gender::Masculine)),
        'f' => Some(Some(Gender::Feminine)),
        'n' => Some(Some(Gender::Neuter)),
        // Common gender ('c') carries no information for the heuristics.
        'c' | '-' => Some(None),
        _ => None,
    }
}

fn decode_case(c: char) -> Option<Option<Case>> {
    match c {
        'n' => Some(Some(Case::Nominative)),
        'g' => Some(Some(Case::Genitive)),
        'd' => Some(Some(Case::Dative)),
        'a' => Some(Some(Case::Accusative)),
        'v' => Some(Some(Case::Vocative)),
        'l' => Some(Some(Case::Locative)),
        '-' => Some(None),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_present_indicative() {
        let f = VerbForm::from_tag("v3spia---").unwrap();
        assert_eq!(f.person, Some(Person::Third));
        assert_eq!(f.number, Some(Number::Singular));
        assert_eq!(f.tense, Tense::Present);
        assert_eq!(f.mood, Mood::Indicative);
        assert_eq!(f.voice, Voice::Active);
        assert!(!f.participle);
        assert_eq!(f.tag(), "v3spia---");
    }

    #[test]
    fn test_decode_participle() {
        let f = VerbForm::from_tag("t-sapamn-").unwrap();
        assert!(f.participle);
        assert_eq!(f.person, None);
        assert_eq!(f.gender, Some(Gender::Masculine));
        assert_eq!(f.case, Some(Case::Nominative));
        assert_eq!(f.tag(), "t-sapamn-");
    }

    #[test]
    fn test_short_tag_with_optional_tail() {
        let f = VerbForm::from_tag("v1saia").unwrap();
        assert_eq!(f.tense, Tense::Aorist);
        assert_eq!(f.tag(), "v1saia---");
    }

    #[test]
    fn test_noun_tag_is_rejected() {
        let err = VerbForm::from_tag("n-s---mn-").unwrap_err();
        assert!(matches!(err, Error::NotAVerbTag { .. }));
    }

    #[test]
    fn test_malformed_slot() {
        let err = VerbForm::from_tag("v3sxia---").unwrap_err();
        assert_eq!(
            err,
            Error::MalformedTag {
                tag: "v3sxia---".to_string(),
                position: 3,
                found: 'x'
            }
        );
        assert!(matches!(
            VerbForm::from_tag("v3s").unwrap_err(),
            Error::TagTooShort { expected: 6, .. }
        ));
    }

    #[test]
    fn test_lemma_shape() {
        let f = VerbForm::from_tag("v2paoe---").unwrap();
        let l = f.lemma_shape("βούλομαι");
        assert_eq!(l.person, Some(Person::First));
        assert_eq!(l.number, Some(Number::Singular));
        assert_eq!(l.mood, Mood::Indicative);
        assert_eq!(l.tense, Tense::Present);
        assert_eq!(l.voice, Voice::Middle);
        assert_eq!(f.lemma_shape("ἄνωγα").tense, Tense::Perfect);
        assert_eq!(f.lemma_shape("λύω").voice, Voice::Active);
        // accent on the ultima does not hide the ending
        assert_eq!(f.lemma_shape("δεδιά").tense, Tense::Perfect);
    }

    #[test]
    fn test_noun_form_lenient() {
        let n = NounForm::from_tag("n-p---md-");
        assert!(n.is_noun);
        assert_eq!(n.number, Some(Number::Plural));
        assert_eq!(n.gender, Some(Gender::Masculine));
        assert_eq!(n.case, Some(Case::Dative));
        let a = NounForm::from_tag("a");
        assert!(!a.is_noun);
        assert_eq!(a.case, None);
    }
}
