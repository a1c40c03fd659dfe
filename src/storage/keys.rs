//! Well-known storage keys. Each holds exactly one JSON value.

/// Map of word id -> `true` for words the learner has mastered
pub const LEARNED_WORDS: &str = "jarman-learned-words";

/// Map of word id -> `true` for bookmarked words
pub const MARKED_WORDS: &str = "jarman-marked-words";

/// Newest-first array of user-entered words
pub const CUSTOM_WORDS: &str = "jarman-custom-words";

/// Map of item id -> spaced repetition record
pub const REVIEW_RECORDS: &str = "jarman-srs";

/// Selected CEFR level string
pub const SELECTED_LEVEL: &str = "jarman-level";

/// Interface language (`fa` or `en`)
pub const SELECTED_LANGUAGE: &str = "jarman-language";

pub const COMPLETED_LESSONS: &str = "jarman-completed-lessons";
pub const COMPLETED_GRAMMAR: &str = "jarman-grammar-completed";
pub const COMPLETED_DIALOGUES: &str = "jarman-dialogues-completed";

/// All keys owned by this crate, in the order they are listed to users
pub const ALL: [&str; 9] = [
    LEARNED_WORDS,
    MARKED_WORDS,
    CUSTOM_WORDS,
    REVIEW_RECORDS,
    SELECTED_LEVEL,
    SELECTED_LANGUAGE,
    COMPLETED_LESSONS,
    COMPLETED_GRAMMAR,
    COMPLETED_DIALOGUES,
];
