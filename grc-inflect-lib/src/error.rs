// Error type for the inflection core.
//
// Only configuration mistakes and caller bugs are errors. A word whose ending,
// declension or prefix cannot be recognized is an ordinary result, not an
// error.

/// Result alias defaulting to [`Error`].
pub type Result<T, E = Error> = std::result::Result<T, E>;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// The dialect/period identifier is not one we know.
    #[error("unrecognized dialect '{name}', allowed values are {allowed}")]
    UnknownDialect { name: String, allowed: &'static str },

    /// A verb feature vector was requested from a tag that is not a verb or participle.
    #[error("tag '{tag}' is not a verb or participle tag")]
    NotAVerbTag { tag: String },

    /// A tag character is outside the coded alphabet for its slot.
    #[error("malformed tag '{tag}': unexpected '{found}' at position {position}")]
    MalformedTag {
        tag: String,
        position: usize,
        found: char,
    },

    /// The tag is shorter than its mandatory part.
    #[error("tag '{tag}' is too short, expected at least {expected} characters")]
    TagTooShort { tag: String, expected: usize },

    /// Accent target beyond the syllable count of the word.
    #[error("cannot accent syllable {index} from the end of '{word}', it has {syllables} syllables")]
    AccentOutOfRange {
        word: String,
        index: usize,
        syllables: usize,
    },

    /// Accent placement asked for a word with no syllables.
    #[error("cannot place an accent on an empty word")]
    EmptyWord,
}
