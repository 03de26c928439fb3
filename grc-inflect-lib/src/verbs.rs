// How hard is it to recognize a verb form as an inflection of its lemma?
//
// Both strings are brought to stem spelling (lowercase, no diacritics, rough
// breathing as h, plain σ), the personal ending expected for each is
// stripped, and the stems are compared as multi-valued strings so that
// regular alternations (augment, sigmatic stem, reduplication, contraction)
// cost nothing. Whatever is left over is the difficulty.
//
// A form whose ending cannot be found in the table keeps its ending; the
// extra distance that causes is intended, since an unrecognizable ending is
// itself a sign of irregularity.

use std::collections::HashMap;
use std::sync::LazyLock;

use tracing::{debug, trace};

use crate::dialect::Dialect;
use crate::features::{Mood, Number, Person, Tense, VerbForm, Voice};
use crate::multistring::MultiString;
use crate::types::{StemDebug, VerbDifficulty};
use crate::writing::{is_vowel, stem_form};

pub const THRESHOLD: f64 = 0.27;
/// Added to the normalized distance per unit of raw distance, so that long
/// stems with several differences still count as hard.
pub const DISTANCE_WEIGHT: f64 = 0.1;

// ---------------------------------------------------------------------------
// Ending table
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Conjugation {
    Thematic,
    Athematic,
    Any,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum VoiceClass {
    Active,
    MiddlePassive,
    /// Aorist and future passive, built on -θη-.
    Passive,
}

use Conjugation::{Any, Athematic, Thematic};
use Mood::{Imperative as Imp, Indicative as Ind, Infinitive as Inf, Optative as Opt};
use Mood::{Participle as Part, Subjunctive as Subj};
use Tense::{Aorist, Future, Imperfect, Perfect, Pluperfect, Present};
use VoiceClass::{Active as Act, MiddlePassive as Mid, Passive as Pass};

// Finite moods: nine space-separated slots, 1st/2nd/3rd person singular,
// dual, plural. Alternatives within a slot are separated by '/', tried in
// the order given. '-' marks a slot with no form, '0' an empty ending.
// Non-finite moods: one list of alternatives.
//
// A trailing '+' expands to the vowel-stem adjective endings, a trailing '*'
// to the consonant-stem ones (participles).
const ENDINGS: &[(Conjugation, VoiceClass, Tense, Mood, &str)] = &[
    // -- thematic active
    (Thematic, Act, Present, Ind, "ω εισ/εισθα ει - ετον ετον ομεν ετε ουσι/ουσιν"),
    (Thematic, Act, Present, Subj, "ω/ωμι ηισ/ηισθα ηι/ηισι/ηισιν - ητον ητον ωμεν ητε ωσι/ωσιν"),
    (Thematic, Act, Present, Opt, "οιμι οισ/οισθα οι - οιτον οιτην οιμεν οιτε οιεν"),
    (Thematic, Act, Present, Imp, "- ε ετω - ετον ετων - ετε οντων"),
    (Thematic, Act, Present, Inf, "εμεναι/εμεν/ειν"),
    (Thematic, Act, Present, Part, "οντ*/ουσ+/ων/ον"),
    (Thematic, Act, Imperfect, Ind, "ον εσ/εσκεσ ε/εν/εσκε - ετον ετην ομεν ετε ον"),
    (Thematic, Act, Future, Ind, "ω εισ/εισθα ει - ετον ετον ομεν ετε ουσι/ουσιν"),
    (Thematic, Act, Future, Opt, "οιμι οισ οι - οιτον οιτην οιμεν οιτε οιεν"),
    (Thematic, Act, Future, Inf, "εμεναι/εμεν/ειν"),
    (Thematic, Act, Future, Part, "οντ*/ουσ+/ων/ον"),
    (Thematic, Act, Aorist, Ind, "α/ον ασ/εσ ε/εν - ατον/ετον ατην/ετην αμεν/ομεν ατε/ετε αν/ον"),
    (Thematic, Act, Aorist, Subj, "ω/ωμι ηισ/ηισθα ηι/ηισι/ηισιν - ητον ητον ωμεν/ομεν ητε/ετε ωσι/ωσιν"),
    (Thematic, Act, Aorist, Opt, "αιμι/οιμι αισ/ειασ/οισ αι/ειε/ειεν/οι - αιτον/οιτον αιτην/οιτην αιμεν/οιμεν αιτε/οιτε αιεν/ειαν/οιεν"),
    (Thematic, Act, Aorist, Imp, "- ον/ε ατω/ετω - ατον/ετον ατων/ετων - ατε/ετε αντων/οντων"),
    (Thematic, Act, Aorist, Inf, "εειν/εμεναι/εμεν/ειν/αι"),
    (Thematic, Act, Aorist, Part, "αντ*/ασ+/οντ*/ουσ+/ασ/αν/ων/ον"),
    (Any, Act, Perfect, Ind, "α ασ/ησθα ε/εν - ατον ατον αμεν ατε ασι/ασιν"),
    (Any, Act, Perfect, Inf, "εναι/εμεναι/εμεν"),
    (Any, Act, Perfect, Part, "οτ*/υι+/ωσ/οσ"),
    (Any, Act, Pluperfect, Ind, "εα/η/ειν εασ/ησ/εισ ει/ειν/εε - ετον ετην εμεν ετε εσαν"),
    // -- athematic active
    (Athematic, Act, Present, Ind, "μι σ/σθα σι/σιν - τον τον μεν τε ασι/ασιν/ντι/σι/σιν"),
    (Athematic, Act, Present, Subj, "ω ηισ ηι - ητον ητον ωμεν ητε ωσι/ωσιν"),
    (Athematic, Act, Present, Opt, "ιην ιησ ιη - ιητον ιητην ιημεν/ιμεν ιητε/ιτε ιησαν/ιεν"),
    (Athematic, Act, Present, Imp, "- θι/ι/ε/ου/υ τω - τον των - τε ντων/σαν"),
    (Athematic, Act, Present, Inf, "μεναι/ναι/μεν"),
    (Athematic, Act, Present, Part, "ντ*/εισ+/ουσ+/υσ+/ασ+/εισ/ουσ/υσ/ασ"),
    (Athematic, Act, Imperfect, Ind, "ν σ/σθα 0 - τον την μεν τε σαν/ν"),
    (Athematic, Act, Aorist, Ind, "κα/ν κασ/σ κε/κεν/0 - τον την καμεν/μεν κατε/τε καν/σαν/ν"),
    (Athematic, Act, Aorist, Subj, "ω ηισ ηι - ητον ητον ωμεν ητε ωσι/ωσιν"),
    (Athematic, Act, Aorist, Opt, "ιην ιησ ιη - ιητον ιητην ιημεν/ιμεν ιητε/ιτε ιησαν/ιεν"),
    (Athematic, Act, Aorist, Imp, "- θι/σ τω - τον των - τε ντων"),
    (Athematic, Act, Aorist, Inf, "μεναι/ναι/μεν"),
    (Athematic, Act, Aorist, Part, "ντ*/εισ+/ουσ+/ασ+/εισ/ουσ/ασ"),
    // -- thematic middle and middle-passive
    (Thematic, Mid, Present, Ind, "ομαι ηι/ει/εαι εται - εσθον εσθον ομεθα/ομεσθα εσθε ονται/αται"),
    (Thematic, Mid, Present, Subj, "ωμαι ηι/ηαι ηται - ησθον ησθον ωμεθα ησθε ωνται"),
    (Thematic, Mid, Present, Opt, "οιμην οιο οιτο - οισθον οισθην οιμεθα οισθε οιντο/οιατο"),
    (Thematic, Mid, Present, Imp, "- ου/εο/ευ εσθω - εσθον εσθων - εσθε εσθων"),
    (Thematic, Mid, Present, Inf, "εσθαι"),
    (Thematic, Mid, Present, Part, "ομεν+"),
    (Thematic, Mid, Imperfect, Ind, "ομην ου/εο/ευ ετο - εσθον εσθην ομεθα/ομεσθα εσθε οντο/ατο"),
    (Thematic, Mid, Future, Ind, "ομαι ηι/ει/εαι εται - εσθον εσθον ομεθα/ομεσθα εσθε ονται"),
    (Thematic, Mid, Future, Opt, "οιμην οιο οιτο - οισθον οισθην οιμεθα οισθε οιντο"),
    (Thematic, Mid, Future, Inf, "εσθαι"),
    (Thematic, Mid, Future, Part, "ομεν+"),
    (Thematic, Mid, Aorist, Ind, "αμην/ομην ω/αο/ου/εο ατο/ετο - ασθον/εσθον ασθην/εσθην αμεθα/ομεθα ασθε/εσθε αντο/οντο"),
    (Thematic, Mid, Aorist, Subj, "ωμαι ηι/ηαι ηται - ησθον ησθον ωμεθα ησθε ωνται"),
    (Thematic, Mid, Aorist, Opt, "αιμην/οιμην αιο/οιο αιτο/οιτο - αισθον/οισθον αισθην/οισθην αιμεθα/οιμεθα αισθε/οισθε αιντο/οιντο/αιατο"),
    (Thematic, Mid, Aorist, Imp, "- αι/ου/εο ασθω/εσθω - ασθον/εσθον ασθων/εσθων - ασθε/εσθε ασθων/εσθων"),
    (Thematic, Mid, Aorist, Inf, "ασθαι/εσθαι"),
    (Thematic, Mid, Aorist, Part, "αμεν+/ομεν+"),
    (Any, Mid, Perfect, Ind, "μαι σαι ται - σθον σθον μεθα σθε νται/αται"),
    (Any, Mid, Perfect, Inf, "σθαι"),
    (Any, Mid, Perfect, Part, "μεν+"),
    (Any, Mid, Pluperfect, Ind, "μην σο το - σθον σθην μεθα σθε ντο/ατο"),
    // -- athematic middle
    (Athematic, Mid, Present, Ind, "μαι σαι/αι ται - σθον σθον μεθα/μεσθα σθε νται/αται"),
    (Athematic, Mid, Present, Subj, "ωμαι ηι ηται - ησθον ησθον ωμεθα ησθε ωνται"),
    (Athematic, Mid, Present, Opt, "ιμην ιο ιτο - ισθον ισθην ιμεθα ισθε ιντο"),
    (Athematic, Mid, Present, Imp, "- σο/ο σθω - σθον σθων - σθε σθων"),
    (Athematic, Mid, Present, Inf, "σθαι"),
    (Athematic, Mid, Present, Part, "μεν+"),
    (Athematic, Mid, Imperfect, Ind, "μην σο/ο το - σθον σθην μεθα/μεσθα σθε ντο/ατο"),
    (Athematic, Mid, Aorist, Ind, "μην σο/ο το - σθον σθην μεθα σθε ντο"),
    (Athematic, Mid, Aorist, Inf, "σθαι"),
    (Athematic, Mid, Aorist, Part, "μεν+"),
    // -- aorist and future passive
    (Any, Pass, Aorist, Ind, "θην/ην θησ/ησ θη/η - θητον/ητον θητην/ητην θημεν/ημεν θητε/ητε θησαν/ησαν/θεν/εν"),
    (Any, Pass, Aorist, Subj, "θω/ω θηισ/ηισ θηι/ηι - θητον θητον θωμεν/ωμεν θητε/ητε θωσι/θωσιν/ωσι/ωσιν"),
    (Any, Pass, Aorist, Opt, "θειην/ειην θειησ/ειησ θειη/ειη - θειητον θειητην θειημεν/θειμεν/ειμεν θειητε/θειτε θειησαν/θειεν/ειεν"),
    (Any, Pass, Aorist, Imp, "- θητι/ηθι θητω/ητω - θητον θητων - θητε/ητε θεντων/εντων"),
    (Any, Pass, Aorist, Inf, "θημεναι/θηναι/ημεναι/ηναι/ημεν"),
    (Any, Pass, Aorist, Part, "θεντ*/θεισ+/θεισ/εντ*/εισ+/εισ"),
    (Any, Pass, Future, Ind, "θησομαι θησηι/θησει θησεται - θησεσθον θησεσθον θησομεθα θησεσθε θησονται"),
    (Any, Pass, Future, Opt, "θησοιμην θησοιο θησοιτο - - - θησοιμεθα θησοισθε θησοιντο"),
    (Any, Pass, Future, Inf, "θησεσθαι"),
    (Any, Pass, Future, Part, "θησομεν+"),
];

// Case endings that follow a participle's stem suffix.
const VOWEL_STEM_ENDINGS: &[&str] = &[
    "οιο", "οισι", "οισιν", "οισ", "ουσ", "ου", "ωι", "ον", "οι", "ων", "οσ", "ε", "ω", "ηισι",
    "ηισ", "ησ", "ηι", "ην", "η", "αων", "αισ", "ασ", "αι", "αν", "α",
];
const CONSONANT_STEM_ENDINGS: &[&str] = &[
    "εσσιν", "εσσι", "οσ", "ι", "α", "εσ", "ων", "ασ", "σι", "σιν", "ε", "οιν",
];

type Key = (Conjugation, VoiceClass, Tense, Mood);

#[derive(Debug, Clone)]
enum Slots {
    Finite(Vec<Vec<String>>),
    NonFinite(Vec<String>),
}

fn expand(alternative: &str, out: &mut Vec<String>) {
    let (head, tail) = if let Some(h) = alternative.strip_suffix('+') {
        (h, VOWEL_STEM_ENDINGS)
    } else if let Some(h) = alternative.strip_suffix('*') {
        (h, CONSONANT_STEM_ENDINGS)
    } else if alternative == "0" {
        out.push(String::new());
        return;
    } else {
        out.push(alternative.to_string());
        return;
    };
    let mut expanded: Vec<String> = tail.iter().map(|t| format!("{head}{t}")).collect();
    expanded.sort_by_key(|e| std::cmp::Reverse(e.chars().count()));
    out.extend(expanded);
}

fn parse_alternatives(field: &str) -> Vec<String> {
    let mut out = Vec::new();
    if field != "-" {
        for alt in field.split('/') {
            expand(alt, &mut out);
        }
    }
    out
}

fn parse_row(mood: Mood, row: &str) -> Slots {
    if matches!(mood, Inf | Part) {
        Slots::NonFinite(parse_alternatives(row))
    } else {
        let mut slots: Vec<Vec<String>> = row.split_whitespace().map(parse_alternatives).collect();
        slots.resize(9, Vec::new());
        Slots::Finite(slots)
    }
}

static TABLE: LazyLock<HashMap<Key, Slots>> = LazyLock::new(|| {
    ENDINGS
        .iter()
        .map(|&(conj, voice, tense, mood, row)| ((conj, voice, tense, mood), parse_row(mood, row)))
        .collect()
});

/// Thematic (-ω, -ομαι) or athematic (-μι, -μαι after a non-thematic vowel),
/// judged from a lemma in stem spelling.
pub fn conjugation_of(lemma: &str) -> Conjugation {
    if lemma.ends_with("μι") || (lemma.ends_with("μαι") && !lemma.ends_with("ομαι")) {
        Athematic
    } else {
        Thematic
    }
}

pub fn voice_class(form: &VerbForm) -> VoiceClass {
    match form.voice {
        Voice::Active => Act,
        Voice::Middle => Mid,
        Voice::Passive | Voice::MedioPassive if form.is_sigmatic() => Pass,
        Voice::Passive | Voice::MedioPassive => Mid,
    }
}

fn slot_index(form: &VerbForm) -> Option<usize> {
    let person = match form.person? {
        Person::First => 0,
        Person::Second => 1,
        Person::Third => 2,
    };
    let number = match form.number? {
        Number::Singular => 0,
        Number::Dual => 1,
        Number::Plural => 2,
    };
    Some(number * 3 + person)
}

/// Candidate endings for a form, in the order they are tried.
pub fn endings_for(form: &VerbForm, conj: Conjugation) -> &'static [String] {
    let voice = voice_class(form);
    let slots = [conj, Any, Thematic]
        .iter()
        .find_map(|&c| TABLE.get(&(c, voice, form.tense, form.mood)));
    match slots {
        Some(Slots::NonFinite(alts)) => alts,
        Some(Slots::Finite(slots)) => match slot_index(form) {
            Some(i) => &slots[i],
            None => &[],
        },
        None => &[],
    }
}

/// Strip the first matching ending. Returns the stem and the ending, or the
/// whole word and `None` when nothing matches.
pub fn strip_ending(word: &str, form: &VerbForm, conj: Conjugation) -> (String, Option<String>) {
    for ending in endings_for(form, conj) {
        if word.len() > ending.len() && word.ends_with(ending.as_str()) {
            trace!(word, ending = %ending, tag = %form, "stripped ending");
            return (word[..word.len() - ending.len()].to_string(), Some(ending.clone()));
        }
    }
    trace!(word, tag = %form, "no ending matched");
    (word.to_string(), None)
}

// ---------------------------------------------------------------------------
// Stem alternations
// ---------------------------------------------------------------------------

fn split_h(stem: &str) -> (&str, &str) {
    match stem.strip_prefix('h') {
        Some(rest) => ("h", rest),
        None => ("", stem),
    }
}

const LENGTHENED: &[(&str, &[&str])] = &[
    ("αι", &["ηι"]),
    ("ει", &["ηι"]),
    ("οι", &["ωι"]),
    ("αυ", &["ηυ"]),
    ("ευ", &["ηυ"]),
    ("α", &["η"]),
    ("ε", &["η", "ει"]),
    ("ο", &["ω"]),
];

/// The stem with and without the augment, in both directions: an augmented
/// stem yields its unaugmented source and vice versa.
pub fn augment_variants(stem: &str) -> MultiString {
    let (h, body) = split_h(stem);
    let mut alts = vec![stem.to_string()];
    let first = body.chars().next();

    match first {
        Some(c) if !is_vowel(c) => {
            // syllabic augment: ε + consonant
            return MultiString::from_segments(vec![
                vec![String::new(), "ε".to_string()],
                vec![stem.to_string()],
            ]);
        }
        Some(_) => {}
        None => return MultiString::new(stem),
    }

    if let Some(rest) = body.strip_prefix('ε') {
        if rest.chars().next().is_some_and(|c| !is_vowel(c)) {
            alts.push(format!("{h}{rest}"));
        }
    }
    for &(short, longs) in LENGTHENED {
        if let Some(rest) = body.strip_prefix(short) {
            for long in longs {
                alts.push(format!("{h}{long}{rest}"));
            }
            break;
        }
    }
    for &(short, longs) in LENGTHENED {
        for long in longs {
            if let Some(rest) = body.strip_prefix(long) {
                alts.push(format!("{h}{short}{rest}"));
            }
        }
    }
    MultiString::alternatives(alts)
}

/// Stem of the sigmatic future/aorist built on `stem`.
pub fn sigmatic_stems(stem: &str, dialect: Dialect) -> Vec<String> {
    let chars: Vec<char> = stem.chars().collect();
    let Some(&last) = chars.last() else {
        return Vec::new();
    };
    let head = |n: usize| chars[..chars.len() - n].iter().collect::<String>();
    let ends = |s: &str| stem.ends_with(s);

    if ends("πτ") {
        return vec![format!("{}ψ", head(2))];
    }
    if ends("σσ") || ends("ττ") {
        return vec![format!("{}ξ", head(2))];
    }
    match last {
        'ζ' | 'τ' | 'δ' | 'θ' => vec![format!("{}σ", head(1))],
        'γ' | 'κ' | 'χ' => vec![format!("{}ξ", head(1))],
        'π' | 'β' | 'φ' => vec![format!("{}ψ", head(1))],
        'σ' | 'λ' | 'μ' | 'ν' | 'ρ' | 'ξ' | 'ψ' => Vec::new(),
        _ => {
            let mut out = vec![format!("{stem}σ")];
            if dialect.is_epic() {
                out.push(format!("{stem}σσ"));
            }
            out
        }
    }
}

/// Contract-verb stems (-αω, -εω, -οω) also appear without the contract
/// vowel or with it lengthened.
fn contract_variants(stem: &str) -> Vec<String> {
    let mut chars: Vec<char> = stem.chars().collect();
    let long = match chars.last() {
        Some('α') => 'η',
        Some('ε') => 'η',
        Some('ο') => 'ω',
        _ => return Vec::new(),
    };
    if chars.len() < 2 {
        return Vec::new();
    }
    chars.pop();
    let shorter: String = chars.iter().collect();
    vec![shorter.clone(), format!("{shorter}{long}")]
}

/// Athematic presents show a short-vowel grade outside the singular
/// (τίθημι / τίθεμεν, ἵστημι / ἵσταμεν, δίδωμι / δίδομεν).
fn short_grade_variants(stem: &str) -> Vec<String> {
    let mut chars: Vec<char> = stem.chars().collect();
    let shorts: &[char] = match chars.last() {
        Some('η') => &['ε', 'α'],
        Some('ω') => &['ο'],
        _ => return Vec::new(),
    };
    chars.pop();
    let head: String = chars.iter().collect();
    shorts.iter().map(|s| format!("{head}{s}")).collect()
}

/// Perfect reduplication: consonant + ε, aspirates deaspirated; vowel- and
/// cluster-initial stems lengthen or take ε.
fn reduplicated(stem: &str) -> Vec<String> {
    let (h, body) = split_h(stem);
    let mut chars = body.chars();
    let (Some(c0), c1) = (chars.next(), chars.next()) else {
        return Vec::new();
    };
    if is_vowel(c0) {
        return augment_variants(stem).enumerate();
    }
    let simple_onset = c1.is_some_and(|c| is_vowel(c) || matches!(c, 'λ' | 'ρ' | 'ν' | 'μ'));
    if simple_onset && !matches!(c0, 'ρ' | 'ζ' | 'ξ' | 'ψ' | 'σ') {
        let plain = match c0 {
            'φ' => 'π',
            'θ' => 'τ',
            'χ' => 'κ',
            other => other,
        };
        vec![format!("{h}{plain}ε{body}")]
    } else {
        vec![format!("{h}ε{body}")]
    }
}

// ---------------------------------------------------------------------------
// Scorer
// ---------------------------------------------------------------------------

/// Score how hard it is to see `word` (with grammatical form `form`) as an
/// inflection of `lemma`.
pub fn guess_difficulty(word: &str, lemma: &str, form: &VerbForm, dialect: Dialect) -> VerbDifficulty {
    let w = stem_form(word);
    let l = stem_form(lemma);
    let conj = conjugation_of(&l);
    let lemma_form = form.lemma_shape(lemma);

    let (word_stem, word_ending) = strip_ending(&w, form, conj);
    let (lemma_stem, lemma_ending) = strip_ending(&l, &lemma_form, conj);

    let mut plain = vec![lemma_stem.clone()];
    match conj {
        Thematic => plain.extend(contract_variants(&lemma_stem)),
        Athematic => plain.extend(short_grade_variants(&lemma_stem)),
        Any => {}
    }
    if form.is_perfect_system() {
        let mut redup: Vec<String> = plain.iter().flat_map(|s| reduplicated(s)).collect();
        if voice_class(form) == Act {
            // κ-perfect of vowel stems: λέλυκα
            let kappa: Vec<String> = redup
                .iter()
                .filter(|s| s.chars().last().is_some_and(is_vowel))
                .map(|s| format!("{s}κ"))
                .collect();
            redup.extend(kappa);
        }
        if form.tense == Tense::Pluperfect {
            plain.extend(redup.iter().map(|s| format!("ε{s}")));
        }
        plain.extend(redup);
    }

    let mut lemma_ms = MultiString::alternatives(plain.clone());
    if form.is_sigmatic() && voice_class(form) != Pass {
        let sigma: Vec<String> = plain.iter().flat_map(|s| sigmatic_stems(s, dialect)).collect();
        // Liquid and nasal stems have none; an empty set would enumerate as "".
        if !sigma.is_empty() {
            lemma_ms = lemma_ms.union(&MultiString::alternatives(sigma));
        }
    }

    let mut word_ms = MultiString::new(&word_stem);
    // Outside epic the augment belongs to the indicative only.
    if form.is_past() && (dialect.has_optional_augment() || form.is_indicative()) {
        word_ms = augment_all(&word_ms);
        lemma_ms = augment_all(&lemma_ms);
    }

    let distance = word_ms.edit_distance(&lemma_ms);
    let longest = word_stem
        .chars()
        .count()
        .max(lemma_stem.chars().count())
        .max(1);
    let score = distance as f64 / longest as f64 + DISTANCE_WEIGHT * distance as f64;
    let is_hard = score > THRESHOLD;
    debug!(
        word,
        lemma,
        tag = %form,
        word_stem = %word_stem,
        lemma_stem = %lemma_stem,
        distance,
        score,
        is_hard,
        "verb difficulty"
    );

    VerbDifficulty {
        word: word.to_string(),
        lemma: lemma.to_string(),
        form: *form,
        is_hard,
        score,
        threshold: THRESHOLD,
        debug: StemDebug {
            word_stem,
            lemma_stem,
            word_ending,
            lemma_ending,
            word_variants: word_ms.enumerate(),
            lemma_variants: lemma_ms.enumerate(),
            distance,
        },
    }
}

fn augment_all(ms: &MultiString) -> MultiString {
    MultiString::alternatives(
        ms.enumerate()
            .iter()
            .flat_map(|s| augment_variants(s).enumerate()),
    )
}
