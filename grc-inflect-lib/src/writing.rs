// Polytonic script handling: decomposition into letters + diacritics,
// phonetic normalization, accent/breathing editing and romanization.
//
// Everything here works on canonically decomposed text (NFD) internally and
// hands back composed text (NFC), so callers may pass either form.

use unicode_normalization::char::{decompose_canonical, is_combining_mark};
use unicode_normalization::UnicodeNormalization;

// ---------------------------------------------------------------------------
// Combining diacritics
// ---------------------------------------------------------------------------

const GRAVE: char = '\u{0300}';
const ACUTE: char = '\u{0301}';
const MACRON: char = '\u{0304}';
const BREVE: char = '\u{0306}';
const DIAERESIS: char = '\u{0308}';
const SMOOTH: char = '\u{0313}';
const ROUGH: char = '\u{0314}';
const CIRCUMFLEX: char = '\u{0342}';
const IOTA_SUBSCRIPT: char = '\u{0345}';

const VOWELS: &[char] = &['α', 'ε', 'η', 'ι', 'ο', 'υ', 'ω'];

/// Diphthongs in encoding priority order.
pub const DIPHTHONGS: &[&str] = &["αι", "ει", "οι", "υι", "αυ", "ευ", "ηυ", "ου", "ωυ"];

/// Marker characters used by [`AccentMode::Mark`].
pub const ACUTE_MARKER: char = '!';
pub const CIRCUMFLEX_MARKER: char = '~';

/// Tonal accent kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tone {
    Acute,
    Grave,
    Circumflex,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub(crate) struct Marks {
    pub tone: Option<Tone>,
    pub smooth: bool,
    pub rough: bool,
    pub iota_subscript: bool,
    pub diaeresis: bool,
    pub macron: bool,
    pub breve: bool,
}

/// A base letter with the Greek diacritics stacked on it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Letter {
    pub base: char,
    pub marks: Marks,
}

impl Letter {
    fn plain(base: char) -> Self {
        Self {
            base,
            marks: Marks::default(),
        }
    }

    pub fn is_vowel(&self) -> bool {
        is_vowel(self.base)
    }

    fn push_to(&self, out: &mut String) {
        out.push(self.base);
        let m = &self.marks;
        if m.macron {
            out.push(MACRON);
        }
        if m.breve {
            out.push(BREVE);
        }
        if m.diaeresis {
            out.push(DIAERESIS);
        }
        if m.smooth {
            out.push(SMOOTH);
        }
        if m.rough {
            out.push(ROUGH);
        }
        match m.tone {
            Some(Tone::Acute) => out.push(ACUTE),
            Some(Tone::Grave) => out.push(GRAVE),
            Some(Tone::Circumflex) => out.push(CIRCUMFLEX),
            None => {}
        }
        if m.iota_subscript {
            out.push(IOTA_SUBSCRIPT);
        }
    }
}

/// Split a word into letters. Combining marks we do not model become
/// letters of their own so that nothing is lost on recomposition.
pub(crate) fn decompose(word: &str) -> Vec<Letter> {
    let mut letters: Vec<Letter> = Vec::with_capacity(word.len());
    for c in word.nfd() {
        if let Some(last) = letters.last_mut() {
            if apply_mark(c, &mut last.marks) {
                continue;
            }
        }
        letters.push(Letter::plain(c));
    }
    letters
}

fn apply_mark(c: char, m: &mut Marks) -> bool {
    match c {
        ACUTE | '\u{0341}' => m.tone = Some(Tone::Acute),
        GRAVE | '\u{0340}' => m.tone = Some(Tone::Grave),
        CIRCUMFLEX => m.tone = Some(Tone::Circumflex),
        SMOOTH | '\u{0343}' => m.smooth = true,
        ROUGH => m.rough = true,
        IOTA_SUBSCRIPT => m.iota_subscript = true,
        DIAERESIS => m.diaeresis = true,
        MACRON => m.macron = true,
        BREVE => m.breve = true,
        _ => return false,
    }
    true
}

pub(crate) fn compose(letters: &[Letter]) -> String {
    let mut s = String::with_capacity(letters.len() * 2);
    for l in letters {
        l.push_to(&mut s);
    }
    s.nfc().collect()
}

// ---------------------------------------------------------------------------
// Character predicates
// ---------------------------------------------------------------------------

/// Lowercase base letter of a (possibly precomposed) character, diacritics
/// removed.
pub fn base_letter(c: char) -> char {
    let mut base = c;
    let mut first = true;
    decompose_canonical(c, |d| {
        if first {
            base = d;
            first = false;
        }
    });
    base.to_lowercase().next().unwrap_or(base)
}

/// True for the seven vowel letters, in any case and with any diacritics.
pub fn is_vowel(c: char) -> bool {
    VOWELS.contains(&base_letter(c))
}

pub fn is_diphthong(first: char, second: char) -> bool {
    let pair: String = [base_letter(first), base_letter(second)].iter().collect();
    DIPHTHONGS.contains(&pair.as_str())
}

/// Whether `c` carries a diaeresis.
pub fn has_diaeresis(c: char) -> bool {
    let mut found = false;
    decompose_canonical(c, |d| found |= d == DIAERESIS);
    found
}

/// True when `c` is a combining mark that belongs to the preceding letter.
pub fn is_mark(c: char) -> bool {
    is_combining_mark(c)
}

pub fn has_tonal_accent(s: &str) -> bool {
    s.nfd()
        .any(|c| matches!(c, ACUTE | GRAVE | CIRCUMFLEX | '\u{0340}' | '\u{0341}'))
}

// ---------------------------------------------------------------------------
// Accent and breathing editing
// ---------------------------------------------------------------------------

/// Remove acute, grave and circumflex accents; breathings, iota subscripts
/// and everything else survive.
pub fn strip_tonal(word: &str) -> String {
    let mut letters = decompose(word);
    for l in &mut letters {
        l.marks.tone = None;
    }
    compose(&letters)
}

/// Remove every diacritic, leaving base letters in their original case.
pub fn strip_diacritics(word: &str) -> String {
    let mut letters = decompose(word);
    for l in &mut letters {
        l.marks = Marks::default();
    }
    compose(&letters)
}

/// Put `tone` on the letter at `index` (a base character together with its
/// diacritics), clearing any other tonal accent in the word.
pub fn set_accent(word: &str, index: usize, tone: Tone) -> String {
    let mut letters = decompose(word);
    let mut seen = 0;
    for l in &mut letters {
        l.marks.tone = None;
    }
    // Marks outside the Greek set are letters of their own; they don't count.
    for l in &mut letters {
        if is_combining_mark(l.base) {
            continue;
        }
        if seen == index {
            l.marks.tone = Some(tone);
            break;
        }
        seen += 1;
    }
    compose(&letters)
}

fn set_breathing(word: &str, rough: bool) -> String {
    let mut letters = decompose(word);
    for l in &mut letters {
        l.marks.smooth = false;
        l.marks.rough = false;
    }
    let target = match letters.first() {
        Some(first) if base_letter(first.base) == 'ρ' => {
            if !rough {
                return compose(&letters);
            }
            Some(0)
        }
        Some(first) if first.is_vowel() => {
            let diphthong = letters
                .get(1)
                .is_some_and(|second| !second.marks.diaeresis && is_diphthong(first.base, second.base));
            Some(if diphthong { 1 } else { 0 })
        }
        _ => None,
    };
    if let Some(i) = target {
        if rough {
            letters[i].marks.rough = true;
        } else {
            letters[i].marks.smooth = true;
        }
    }
    compose(&letters)
}

/// Put a rough breathing on the initial vowel (the second vowel of an initial
/// diphthong) or on an initial rho.
pub fn add_rough_breathing(word: &str) -> String {
    set_breathing(word, true)
}

/// Put a smooth breathing on an initial vowel or diphthong; consonant-initial
/// words come back without breathing.
pub fn add_smooth_breathing(word: &str) -> String {
    set_breathing(word, false)
}

// ---------------------------------------------------------------------------
// Normalization
// ---------------------------------------------------------------------------

/// What normalization does with tonal accents.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AccentMode {
    /// Keep acute and circumflex (grave becomes acute).
    #[default]
    Keep,
    /// Drop all tonal accents, diaeresis and vowel-length marks.
    Strip,
    /// Like `Strip`, but write `!` or `~` after an accented vowel.
    Mark,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct NormalizeOptions {
    pub accents: AccentMode,
    /// Write final ς as σ.
    pub plain_sigma: bool,
    /// Respell ψ ξ and nasal γ phonetically (πσ κσ νκ νκσ νχ).
    pub respell_clusters: bool,
}

impl NormalizeOptions {
    /// The representation stems are compared in.
    pub fn stem() -> Self {
        Self {
            accents: AccentMode::Strip,
            plain_sigma: true,
            respell_clusters: false,
        }
    }

    /// Full phonetic spelling with accent markers.
    pub fn phonetic() -> Self {
        Self {
            accents: AccentMode::Mark,
            plain_sigma: true,
            respell_clusters: true,
        }
    }
}

/// Canonical phonetic form with default options: lowercase, grave as acute,
/// iota subscript as a trailing ι, breathings removed with rough breathing
/// written as a leading `h`.
pub fn normalize(word: &str) -> String {
    normalize_with(word, &NormalizeOptions::default())
}

pub fn normalize_with(word: &str, opts: &NormalizeOptions) -> String {
    let mut out: Vec<Letter> = Vec::with_capacity(word.len() + 2);
    for letter in decompose(word) {
        let mut marks = letter.marks;
        let mut base = letter.base.to_lowercase().next().unwrap_or(letter.base);
        if opts.plain_sigma && base == 'ς' {
            base = 'σ';
        }

        if marks.rough {
            // h goes before the whole vowel group: οἱ → hοι, ῥ → hρ.
            let mut at = out.len();
            if is_vowel(base) {
                while at > 0 && out[at - 1].is_vowel() {
                    at -= 1;
                }
            }
            out.insert(at, Letter::plain('h'));
        }
        marks.rough = false;
        marks.smooth = false;

        if marks.tone == Some(Tone::Grave) {
            marks.tone = Some(Tone::Acute);
        }
        let tone = marks.tone;
        let iota = marks.iota_subscript;
        marks.iota_subscript = false;
        if opts.accents != AccentMode::Keep {
            marks = Marks::default();
        }

        out.push(Letter { base, marks });
        if opts.accents == AccentMode::Mark {
            match tone {
                Some(Tone::Circumflex) => out.push(Letter::plain(CIRCUMFLEX_MARKER)),
                Some(_) => out.push(Letter::plain(ACUTE_MARKER)),
                None => {}
            }
        }
        if iota {
            out.push(Letter::plain('ι'));
        }
    }

    let s = compose(&out);
    if opts.respell_clusters {
        respell_clusters(&s)
    } else {
        s
    }
}

fn respell_clusters(s: &str) -> String {
    s.replace("γξ", "νκσ")
        .replace('ψ', "πσ")
        .replace('ξ', "κσ")
        .replace("γκ", "νκ")
        .replace("γχ", "νχ")
        .replace("γγ", "νγ")
}

/// Lowercase with every diacritic removed and rough breathing as `h`: the
/// spelling used for table lookups.
pub fn stem_form(word: &str) -> String {
    normalize_with(word, &NormalizeOptions::stem())
}

/// Lowercase with all diacritics removed and no `h`.
pub fn bare(word: &str) -> String {
    strip_diacritics(word)
        .chars()
        .map(|c| {
            let c = c.to_lowercase().next().unwrap_or(c);
            if c == 'ς' {
                'σ'
            } else {
                c
            }
        })
        .collect()
}

// ---------------------------------------------------------------------------
// Romanization
// ---------------------------------------------------------------------------

fn latin_for(c: char) -> &'static str {
    match c {
        'α' => "a",
        'β' => "b",
        'γ' => "g",
        'δ' => "d",
        'ε' => "e",
        'ζ' => "z",
        'η' => "ē",
        'θ' => "th",
        'ι' => "i",
        'κ' => "k",
        'λ' => "l",
        'μ' => "m",
        'ν' => "n",
        'ξ' => "ks",
        'ο' => "o",
        'π' => "p",
        'ρ' => "r",
        'σ' | 'ς' => "s",
        'τ' => "t",
        'υ' => "y",
        'φ' => "ph",
        'χ' => "ch",
        'ψ' => "ps",
        'ω' => "ō",
        _ => "",
    }
}

/// Standard Latin transliteration, keeping tonal accents as combining marks.
pub fn romanize(word: &str) -> String {
    let letters = decompose(word);
    let title = letters
        .iter()
        .find(|l| !is_combining_mark(l.base))
        .is_some_and(|l| l.base.is_uppercase());
    let mut out = String::with_capacity(word.len() * 2);
    let mut prev: Option<char> = None;

    for (i, l) in letters.iter().enumerate() {
        let c = l.base.to_lowercase().next().unwrap_or(l.base);
        let next = letters
            .get(i + 1)
            .map(|n| n.base.to_lowercase().next().unwrap_or(n.base));

        if l.marks.rough && c != 'ρ' {
            // Rough breathing sits on the last vowel of a diphthong but is
            // pronounced before the first.
            let start = match prev {
                Some(p) if is_diphthong(p, c) => out
                    .char_indices()
                    .rev()
                    .find(|(_, ch)| !is_combining_mark(*ch))
                    .map_or(0, |(pos, _)| pos),
                _ => out.len(),
            };
            out.insert(start, 'h');
        }

        let latin: String = match c {
            'γ' if matches!(next, Some('γ' | 'κ' | 'ξ' | 'χ')) => "n".to_string(),
            'υ' if prev.is_some_and(|p| is_diphthong(p, 'υ')) && !l.marks.diaeresis => {
                "u".to_string()
            }
            'ρ' if l.marks.rough => "rh".to_string(),
            _ => {
                let s = latin_for(c);
                if s.is_empty() {
                    c.to_string()
                } else {
                    s.to_string()
                }
            }
        };
        out.push_str(&latin);
        match l.marks.tone {
            Some(Tone::Acute) => out.push(ACUTE),
            Some(Tone::Grave) => out.push(GRAVE),
            Some(Tone::Circumflex) => out.push(CIRCUMFLEX),
            None => {}
        }
        if l.marks.iota_subscript {
            out.push('i');
        }
        prev = Some(c);
    }

    let out: String = out.nfc().collect();
    if title {
        let mut chars = out.chars();
        match chars.next() {
            Some(first) => first.to_uppercase().chain(chars).collect(),
            None => out,
        }
    } else {
        out
    }
}
