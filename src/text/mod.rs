pub mod matching;
pub mod normalize;

pub use matching::{fuzzy_filter, fuzzy_match, fuzzy_match_opt};
pub use normalize::{normalize, normalize_opt, NormalizedText};
