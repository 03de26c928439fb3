// Syllabification.
//
// The word is cut, in order of precedence:
//   1. at a vowel carrying a diaeresis,
//   2. between a recognized prepositional prefix and its stem,
//   3. inside a simple chunk, by recursive rightmost splitting of a buffer in
//      which each diphthong is a single vowel unit.
//
// Syllables are substrings of the input, so joining them gives back the
// input byte for byte.

use tracing::trace;

use crate::dialect::Dialect;
use crate::preposition::recognize_prefix;
use crate::writing::{self, base_letter, has_diaeresis, is_vowel, DIPHTHONGS};

/// A compound split is only trusted when the stem is at least this long.
pub const MIN_COMPOUND_STEM: usize = 4;

/// Consonants that can be written double, tried in this order.
const DOUBLED: &[char] = &['γ', 'κ', 'λ', 'μ', 'ν', 'π', 'ρ', 'σ', 'τ'];

/// Clusters that can begin a word, and so can begin a syllable.
const ONSETS: &[&str] = &[
    "βδ", "βλ", "βρ", "γλ", "γν", "γρ", "δμ", "δν", "δρ", "θλ", "θν", "θρ", "κλ", "κμ", "κν",
    "κρ", "κτ", "μν", "πλ", "πν", "πρ", "πτ", "σβ", "σθ", "σκ", "σμ", "σπ", "στ", "σφ", "σχ",
    "τλ", "τμ", "τρ", "φθ", "φλ", "φρ", "χθ", "χλ", "χν", "χρ",
];

/// Split `word` into syllables.
pub fn syllabify(word: &str, dialect: Dialect) -> Vec<String> {
    let g = graphemes(word);
    let mut out = Vec::new();
    let mut start = 0;
    for len in split_word(&g, dialect) {
        out.push(g[start..start + len].concat());
        start += len;
    }
    out
}

/// Number of syllables.
pub fn count(word: &str, dialect: Dialect) -> usize {
    split_word(&graphemes(word), dialect).len()
}

/// A base character with whatever combining marks follow it.
fn graphemes(word: &str) -> Vec<String> {
    let mut out: Vec<String> = Vec::new();
    for c in word.chars() {
        match out.last_mut() {
            Some(g) if writing::is_mark(c) => g.push(c),
            _ => out.push(c.to_string()),
        }
    }
    out
}

fn grapheme_has_diaeresis(g: &str) -> bool {
    g.chars().any(has_diaeresis)
}

// Each function below returns syllable lengths counted in graphemes.

fn split_word(g: &[String], dialect: Dialect) -> Vec<usize> {
    if g.is_empty() {
        return Vec::new();
    }

    if let Some(i) = (1..g.len()).find(|&i| grapheme_has_diaeresis(&g[i])) {
        let mut lens = split_word(&g[..i], dialect);
        lens.extend(split_word(&g[i..], dialect));
        return lens;
    }

    let whole = g.concat();
    if let Some(m) = recognize_prefix(&whole, dialect) {
        let n = graphemes(&m.prefix).len();
        if n < g.len() && g.len() - n >= MIN_COMPOUND_STEM {
            trace!(word = %whole, prefix = %m.prefix, stem = %m.stem, "compound split");
            let mut lens = split_chunk(&g[..n]);
            lens.extend(split_word(&g[n..], dialect));
            return lens;
        }
    }

    split_chunk(g)
}

#[derive(Debug, Clone, Copy)]
struct Unit {
    base: char,
    vowel: bool,
    /// Graphemes covered: 2 for a diphthong, else 1.
    width: usize,
}

fn split_chunk(g: &[String]) -> Vec<usize> {
    let units = encode(g);
    let mut out = Vec::new();
    let mut start = 0;
    for n in split_units(&units) {
        out.push(units[start..start + n].iter().map(|u| u.width).sum());
        start += n;
    }
    out
}

fn encode(g: &[String]) -> Vec<Unit> {
    let mut units: Vec<Unit> = g
        .iter()
        .map(|s| {
            let c = s.chars().next().map(base_letter).unwrap_or(' ');
            let base = if c == 'ς' { 'σ' } else { c };
            Unit {
                base,
                vowel: is_vowel(base),
                width: 1,
            }
        })
        .collect();
    let diaeresis: Vec<bool> = g.iter().map(|s| grapheme_has_diaeresis(s)).collect();

    // One pass per diphthong, in priority order.
    for d in DIPHTHONGS {
        let mut pair = d.chars();
        let (Some(a), Some(b)) = (pair.next(), pair.next()) else {
            continue;
        };
        let mut i = 0;
        let mut pos = 0;
        while i + 1 < units.len() {
            let (x, y) = (units[i], units[i + 1]);
            let second_pos = pos + x.width;
            if x.width == 1
                && y.width == 1
                && x.base == a
                && y.base == b
                && !diaeresis.get(second_pos).copied().unwrap_or(false)
            {
                units[i].width = 2;
                units.remove(i + 1);
            }
            pos += units[i].width;
            i += 1;
        }
    }
    units
}

fn split_units(u: &[Unit]) -> Vec<usize> {
    let n_vowels = u.iter().filter(|x| x.vowel).count();
    if n_vowels <= 1 {
        return vec![u.len()];
    }
    let has_vowel = |s: &[Unit]| s.iter().any(|x| x.vowel);

    // (a) after the first of a doubled consonant
    for &c in DOUBLED {
        let found = (0..u.len() - 1).rev().find(|&i| {
            u[i].base == c
                && u[i + 1].base == c
                && has_vowel(&u[..=i])
                && has_vowel(&u[i + 1..])
        });
        if let Some(i) = found {
            return join(u, i + 1);
        }
    }

    // (b) V | CV
    if u.len() >= 3 {
        if let Some(i) = (0..u.len() - 2)
            .rev()
            .find(|&i| u[i].vowel && !u[i + 1].vowel && u[i + 2].vowel)
        {
            return join(u, i + 1);
        }
    }

    // (c) V | V
    if let Some(i) = (0..u.len() - 1).rev().find(|&i| u[i].vowel && u[i + 1].vowel) {
        return join(u, i + 1);
    }

    // (d) consonant cluster between vowels
    if let Some(at) = cluster_split(u) {
        return join(u, at);
    }

    vec![u.len()]
}

/// Where to cut the rightmost run of two or more consonants that sits
/// between two vowels.
fn cluster_split(u: &[Unit]) -> Option<usize> {
    let end = (1..u.len()).rev().find(|&k| {
        u[k].vowel && !u[k - 1].vowel && u[..k].iter().any(|x| x.vowel)
    })?;
    let start = (0..end).rev().find(|&j| u[j].vowel)? + 1;
    let run = end - start;
    if run < 2 {
        return None;
    }
    let onset = |from: usize| {
        let s: String = u[from..end].iter().map(|x| x.base).collect();
        ONSETS.contains(&s.as_str())
    };
    if run == 2 {
        Some(if onset(start) { start } else { start + 1 })
    } else if onset(end - 2) {
        Some(end - 2)
    } else {
        Some(end - 1)
    }
}

fn join(u: &[Unit], at: usize) -> Vec<usize> {
    let mut lens = split_units(&u[..at]);
    lens.extend(split_units(&u[at..]));
    lens
}

#[cfg(test)]
mod tests {
    use super::*;

    fn syl(word: &str) -> Vec<String> {
        syllabify(word, Dialect::epic())
    }

    #[test]
    fn test_simple_words() {
        assert_eq!(syl("ἅλς"), vec!["ἅλς"]);
        assert_eq!(syl("ἄλλος"), vec!["ἄλ", "λος"]);
        assert_eq!(syl("ἔπος"), vec!["ἔ", "πος"]);
        assert_eq!(syl("ἱερῆα"), vec!["ἱ", "ε", "ρῆ", "α"]);
        assert_eq!(syl("ταύρων"), vec!["ταύ", "ρων"]);
        assert_eq!(syl("σωτηρα"), vec!["σω", "τη", "ρα"]);
    }

    #[test]
    fn test_clusters() {
        assert_eq!(syl("ἄνθρωπος"), vec!["ἄν", "θρω", "πος"]);
        assert_eq!(syl("ἔργον"), vec!["ἔρ", "γον"]);
        assert_eq!(syl("πατρός"), vec!["πα", "τρός"]);
    }

    #[test]
    fn test_compound() {
        assert_eq!(syl("ἐκβάλλω"), vec!["ἐκ", "βάλ", "λω"]);
        assert_eq!(syl("ἀναπίμπλημι"), vec!["ἀ", "να", "πίμ", "πλη", "μι"]);
    }

    #[test]
    fn test_diaeresis() {
        assert_eq!(syl("Ἀτρεΐδης"), vec!["Ἀ", "τρε", "ΐ", "δης"]);
        assert_eq!(syl("ἐΰς"), vec!["ἐ", "ΰς"]);
    }

    #[test]
    fn test_empty_and_reconstruction() {
        assert!(syl("").is_empty());
        assert_eq!(count("λύω", Dialect::epic()), 2);
        for w in ["ἀνδράσι", "Ἀχιλλεύς", "οἰκία", "ἀφίημι", "ᾠδή"] {
            assert_eq!(syl(w).concat(), w);
        }
    }
}
