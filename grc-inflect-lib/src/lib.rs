pub mod error;
pub mod dialect;
pub mod features;
pub mod writing;
pub mod multistring;
pub mod preposition;
pub mod syllab;
pub mod accent;
pub mod verbs;
pub mod nouns;
pub mod adjectives;
pub mod types;
pub mod output;

pub use accent::{locate_accent, move_accent_to, recessive_position};
pub use adjectives::{is_irregular_comparative, Degree};
pub use dialect::{Dialect, Period, Region};
pub use error::{Error, Result};
pub use features::{NounForm, VerbForm};
pub use multistring::{lcs_distance, MultiString};
pub use nouns::{guess_declension_difficulty, guess_whether_hard_declension};
pub use preposition::{detach_preposition, prefix_forms, prefix_to_stem, recognize_prefix};
pub use syllab::syllabify;
pub use types::{DeclensionDifficulty, Detached, PrefixMatch, VerbDifficulty};
pub use verbs::guess_difficulty;
pub use writing::{normalize, romanize};
