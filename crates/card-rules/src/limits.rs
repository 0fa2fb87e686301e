//! Field limits and the hiring-trait word policy.
//!
//! Lengths are measured in Unicode scalar values of the trimmed input.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::PolicyParseError;

/// Maximum length of the author's name.
pub const NAME_MAX: usize = 100;

/// Maximum length of the author's role.
pub const ROLE_MAX: usize = 150;

/// Maximum length of the advice text.
pub const ADVICE_MAX: usize = 300;

/// Maximum length of the hiring trait.
pub const HIRING_TRAIT_MAX: usize = 30;

/// Maximum number of words in the hiring trait under
/// [`HiringTraitPolicy::UpToThreeWords`].
pub const HIRING_TRAIT_MAX_WORDS: usize = 3;

/// Count characters the way every length rule in this crate does.
///
/// # Examples
///
/// ```
/// assert_eq!(card_rules::char_len("héllo"), 5);
/// ```
#[must_use]
pub fn char_len(value: &str) -> usize {
    value.chars().count()
}

/// Count words separated by runs of whitespace.
///
/// # Examples
///
/// ```
/// assert_eq!(card_rules::word_count("  team   player "), 2);
/// assert_eq!(card_rules::word_count(""), 0);
/// ```
#[must_use]
pub fn word_count(value: &str) -> usize {
    value.split_whitespace().count()
}

/// Word rule applied to the hiring trait.
///
/// A deployment picks exactly one policy and applies it on both the entry
/// form and the server boundary.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum HiringTraitPolicy {
    /// At most [`HIRING_TRAIT_MAX_WORDS`] whitespace-separated words.
    #[default]
    UpToThreeWords,
    /// Exactly one word with no whitespace at all.
    SingleWord,
}

impl HiringTraitPolicy {
    /// Stable configuration name of the policy.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::UpToThreeWords => "up-to-three-words",
            Self::SingleWord => "single-word",
        }
    }

    /// Return `true` when the trimmed trait satisfies the word rule.
    ///
    /// # Examples
    ///
    /// ```
    /// use card_rules::HiringTraitPolicy;
    ///
    /// assert!(HiringTraitPolicy::UpToThreeWords.admits("team player"));
    /// assert!(!HiringTraitPolicy::SingleWord.admits("team player"));
    /// ```
    #[must_use]
    pub fn admits(self, hiring_trait: &str) -> bool {
        let trimmed = hiring_trait.trim();
        match self {
            Self::UpToThreeWords => word_count(trimmed) <= HIRING_TRAIT_MAX_WORDS,
            Self::SingleWord => !trimmed.chars().any(char::is_whitespace),
        }
    }
}

impl fmt::Display for HiringTraitPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for HiringTraitPolicy {
    type Err = PolicyParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().replace('_', "-").as_str() {
            "up-to-three-words" | "three-words" => Ok(Self::UpToThreeWords),
            "single-word" | "one-word" => Ok(Self::SingleWord),
            _ => Err(PolicyParseError {
                value: s.to_owned(),
            }),
        }
    }
}
