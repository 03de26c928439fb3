// Multi-valued strings: a sequence of segments, each segment a set of
// alternative spellings. Used to carry the phonologically equivalent stems
// (with or without augment, sigma, reduplication) side by side.

use std::fmt;
use std::ops::Add;

use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct MultiString {
    segments: Vec<Vec<String>>,
}

impl MultiString {
    /// A single fixed value.
    pub fn new(s: &str) -> Self {
        Self {
            segments: vec![vec![s.to_string()]],
        }
    }

    /// One segment holding the given alternatives (duplicates dropped,
    /// first occurrence kept).
    pub fn alternatives<I, S>(alts: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::from_segments(vec![alts.into_iter().map(Into::into).collect()])
    }

    /// Build from raw segments. Empty segments are dropped.
    pub fn from_segments(segments: Vec<Vec<String>>) -> Self {
        let segments = segments
            .into_iter()
            .map(dedup)
            .filter(|seg| !seg.is_empty())
            .collect();
        Self { segments }
    }

    pub fn segments(&self) -> &[Vec<String>] {
        &self.segments
    }

    /// Number of values in the product space.
    pub fn complexity(&self) -> usize {
        self.segments.iter().map(Vec::len).product()
    }

    /// The `n`-th value, reading `n` as a mixed-radix number whose least
    /// significant digit selects from the first segment. Wraps modulo
    /// [`complexity`](Self::complexity).
    pub fn nth(&self, n: usize) -> String {
        let mut rest = n % self.complexity();
        let mut s = String::new();
        for seg in &self.segments {
            s.push_str(&seg[rest % seg.len()]);
            rest /= seg.len();
        }
        s
    }

    /// Every value, first segment varying fastest. A string with no segments
    /// has exactly one value, the empty string.
    pub fn enumerate(&self) -> Vec<String> {
        (0..self.complexity()).map(|n| self.nth(n)).collect()
    }

    /// A single-segment string holding every value of either operand.
    pub fn union(&self, other: &MultiString) -> MultiString {
        let mut all = self.enumerate();
        all.extend(other.enumerate());
        Self::alternatives(all)
    }

    /// Positional concatenation: `self` followed by `other`.
    pub fn concat(&self, other: &MultiString) -> MultiString {
        let mut segments = self.segments.clone();
        segments.extend(other.segments.iter().cloned());
        Self { segments }
    }

    /// Smallest [`lcs_distance`] over all pairs of values.
    pub fn edit_distance(&self, other: &MultiString) -> usize {
        let theirs = other.enumerate();
        self.enumerate()
            .iter()
            .flat_map(|a| theirs.iter().map(move |b| lcs_distance(a, b)))
            .min()
            .unwrap_or(0)
    }
}

impl From<&str> for MultiString {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

impl From<String> for MultiString {
    fn from(s: String) -> Self {
        Self {
            segments: vec![vec![s]],
        }
    }
}

impl Add for MultiString {
    type Output = MultiString;

    fn add(mut self, other: MultiString) -> MultiString {
        self.segments.extend(other.segments);
        self
    }
}

impl fmt::Display for MultiString {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for seg in &self.segments {
            if seg.len() == 1 {
                f.write_str(&seg[0])?;
            } else {
                write!(f, "({})", seg.join("|"))?;
            }
        }
        Ok(())
    }
}

fn dedup(seg: Vec<String>) -> Vec<String> {
    let mut out: Vec<String> = Vec::with_capacity(seg.len());
    for s in seg {
        if !out.contains(&s) {
            out.push(s);
        }
    }
    out
}

// ---------------------------------------------------------------------------
// Longest common subsequence
// ---------------------------------------------------------------------------

/// Length of the longest common subsequence of two strings, in characters.
pub fn lcs_length(a: &str, b: &str) -> usize {
    let a: Vec<char> = a.chars().collect();
    let b: Vec<char> = b.chars().collect();
    // Rolling two rows of the (len(a)+1) x (len(b)+1) table.
    let mut prev = vec![0usize; b.len() + 1];
    let mut cur = vec![0usize; b.len() + 1];
    for ca in &a {
        for (j, cb) in b.iter().enumerate() {
            cur[j + 1] = if ca == cb {
                prev[j] + 1
            } else {
                cur[j].max(prev[j + 1])
            };
        }
        std::mem::swap(&mut prev, &mut cur);
    }
    prev[b.len()]
}

/// `max(len(a), len(b)) - lcs(a, b)`: zero iff the strings are equal,
/// symmetric, and equal to the other length when one side is empty.
pub fn lcs_distance(a: &str, b: &str) -> usize {
    let longest = a.chars().count().max(b.chars().count());
    longest - lcs_length(a, b)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ms(segs: &[&[&str]]) -> MultiString {
        MultiString::from_segments(
            segs.iter()
                .map(|s| s.iter().map(|x| x.to_string()).collect())
                .collect(),
        )
    }

    #[test]
    fn test_enumerate_order() {
        let m = ms(&[&["a", "b"], &["x"], &["1", "2", "3"]]);
        assert_eq!(m.complexity(), 6);
        assert_eq!(m.enumerate(), vec!["ax1", "bx1", "ax2", "bx2", "ax3", "bx3"]);
        assert_eq!(m.nth(7), "bx1");
        assert_eq!(m.to_string(), "(a|b)x(1|2|3)");
    }

    #[test]
    fn test_empty() {
        let m = MultiString::default();
        assert_eq!(m.complexity(), 1);
        assert_eq!(m.enumerate(), vec![String::new()]);
        assert_eq!(ms(&[&[], &["a"]]).enumerate(), vec!["a"]);
        assert_eq!(m.edit_distance(&MultiString::new("abc")), 3);
    }

    #[test]
    fn test_union_dedups() {
        let a = ms(&[&["ε", ""], &["λυ"]]);
        let b = MultiString::alternatives(["λυ", "λυσ"]);
        let u = a.union(&b);
        assert_eq!(u.segments().len(), 1);
        assert_eq!(u.enumerate(), vec!["ελυ", "λυ", "λυσ"]);
    }

    #[test]
    fn test_concat() {
        let m = MultiString::alternatives(["ε", ""]) + MultiString::new("λυ");
        assert_eq!(m.enumerate(), vec!["ελυ", "λυ"]);
        assert_eq!(m, MultiString::alternatives(["ε", ""]).concat(&"λυ".into()));
    }

    #[test]
    fn test_lcs() {
        assert_eq!(lcs_length("λυε", "λυ"), 2);
        assert_eq!(lcs_length("αβγδ", "βδ"), 2);
        assert_eq!(lcs_length("", "abc"), 0);
        assert_eq!(lcs_distance("ι", "ει"), 1);
        assert_eq!(lcs_distance("abc", "abc"), 0);
        assert_eq!(lcs_distance("", "abcd"), 4);
        assert_eq!(lcs_distance("kitten", "sitting"), lcs_distance("sitting", "kitten"));
    }

    #[test]
    fn test_edit_distance_takes_best_pair() {
        let word = MultiString::alternatives(["ηλυ", "λυ"]);
        let lemma = MultiString::new("λυ");
        assert_eq!(word.edit_distance(&lemma), 0);
        assert_eq!(lemma.edit_distance(&word), 0);
        assert_eq!(MultiString::new("ι").edit_distance(&"ει".into()), 1);
    }
}
