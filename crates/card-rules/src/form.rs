//! Card form model and field validation.

use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::limits::{
    ADVICE_MAX, HIRING_TRAIT_MAX, HIRING_TRAIT_MAX_WORDS, HiringTraitPolicy, NAME_MAX, ROLE_MAX,
    char_len,
};

/// Raw input collected by the entry form.
///
/// Text fields are kept exactly as typed; every rule trims before checking.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CardForm {
    /// Author's name.
    pub name: String,
    /// Author's role or job title.
    pub role: String,
    /// The piece of advice to share.
    pub advice: String,
    /// The trait the author values most when hiring.
    pub hiring_trait: String,
    /// Whether the author agreed to publish the card.
    pub consent: bool,
}

/// Fields of a [`CardForm`], in reporting order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum CardField {
    /// The `name` field.
    Name,
    /// The `role` field.
    Role,
    /// The `advice` field.
    Advice,
    /// The `hiringTrait` field.
    HiringTrait,
    /// The `consent` checkbox.
    Consent,
}

impl CardField {
    /// Every field in reporting order.
    pub const ALL: [Self; 5] = [
        Self::Name,
        Self::Role,
        Self::Advice,
        Self::HiringTrait,
        Self::Consent,
    ];

    /// Wire name of the field as it appears in JSON payloads.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Name => "name",
            Self::Role => "role",
            Self::Advice => "advice",
            Self::HiringTrait => "hiringTrait",
            Self::Consent => "consent",
        }
    }

    const fn label(self) -> &'static str {
        match self {
            Self::Name => "Name",
            Self::Role => "Role",
            Self::Advice => "Advice",
            Self::HiringTrait => "Hiring trait",
            Self::Consent => "Consent",
        }
    }

    const fn max_len(self) -> Option<usize> {
        match self {
            Self::Name => Some(NAME_MAX),
            Self::Role => Some(ROLE_MAX),
            Self::Advice => Some(ADVICE_MAX),
            Self::HiringTrait => Some(HIRING_TRAIT_MAX),
            Self::Consent => None,
        }
    }

    fn text<'a>(self, form: &'a CardForm) -> Option<&'a str> {
        match self {
            Self::Name => Some(&form.name),
            Self::Role => Some(&form.role),
            Self::Advice => Some(&form.advice),
            Self::HiringTrait => Some(&form.hiring_trait),
            Self::Consent => None,
        }
    }
}

impl fmt::Display for CardField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Which rule a field broke.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RuleViolation {
    /// The trimmed value is empty.
    Required,
    /// The trimmed value exceeds the field's length limit.
    TooLong {
        /// Maximum permitted characters.
        max: usize,
    },
    /// The hiring trait has more words than allowed.
    TooManyWords {
        /// Maximum permitted words.
        max: usize,
    },
    /// The hiring trait contains whitespace under the single-word policy.
    NotSingleWord,
    /// Consent was not given.
    ConsentMissing,
}

impl RuleViolation {
    /// Stable machine-readable code for structured error details.
    #[must_use]
    pub const fn code(self) -> &'static str {
        match self {
            Self::Required => "required",
            Self::TooLong { .. } => "too_long",
            Self::TooManyWords { .. } => "too_many_words",
            Self::NotSingleWord => "not_single_word",
            Self::ConsentMissing => "consent_missing",
        }
    }
}

/// A rule violation attached to the field that caused it.
///
/// `Display` renders the user-facing message.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldViolation {
    /// The offending field.
    pub field: CardField,
    /// The broken rule.
    pub violation: RuleViolation,
}

impl fmt::Display for FieldViolation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = self.field.label();
        match self.violation {
            RuleViolation::Required => write!(f, "{label} is required"),
            RuleViolation::TooLong { max } => {
                write!(f, "{label} must be {max} characters or less")
            }
            RuleViolation::TooManyWords { max } => {
                write!(f, "{label} must be maximum {max} words")
            }
            RuleViolation::NotSingleWord => write!(f, "{label} must be a single word"),
            RuleViolation::ConsentMissing => {
                f.write_str("You must agree to share your wisdom publicly")
            }
        }
    }
}

/// Evaluate one field and return its first violation, if any.
///
/// Text rules run in the order required, length, then the hiring-trait word
/// rule.
///
/// # Examples
///
/// ```
/// use card_rules::{CardField, CardForm, HiringTraitPolicy, RuleViolation, check_field};
///
/// let form = CardForm { name: "  ".into(), ..CardForm::default() };
/// let violation = check_field(&form, CardField::Name, HiringTraitPolicy::default())
///     .expect("blank name is rejected");
/// assert_eq!(violation.violation, RuleViolation::Required);
/// assert_eq!(violation.to_string(), "Name is required");
/// ```
#[must_use]
pub fn check_field(
    form: &CardForm,
    field: CardField,
    policy: HiringTraitPolicy,
) -> Option<FieldViolation> {
    let violation = field.text(form).map_or_else(
        || (!form.consent).then_some(RuleViolation::ConsentMissing),
        |raw| check_text(field, raw.trim(), policy),
    )?;
    Some(FieldViolation { field, violation })
}

fn check_text(field: CardField, value: &str, policy: HiringTraitPolicy) -> Option<RuleViolation> {
    if value.is_empty() {
        return Some(RuleViolation::Required);
    }
    if let Some(max) = field.max_len()
        && char_len(value) > max
    {
        return Some(RuleViolation::TooLong { max });
    }
    if field == CardField::HiringTrait && !policy.admits(value) {
        return Some(match policy {
            HiringTraitPolicy::UpToThreeWords => RuleViolation::TooManyWords {
                max: HIRING_TRAIT_MAX_WORDS,
            },
            HiringTraitPolicy::SingleWord => RuleViolation::NotSingleWord,
        });
    }
    None
}

/// Validate a single field for on-blur feedback.
///
/// Returns the user-facing message when the field is invalid.
#[must_use]
pub fn validate_field(form: &CardForm, field: CardField, policy: HiringTraitPolicy) -> Option<String> {
    check_field(form, field, policy).map(|violation| violation.to_string())
}

/// Validate every field of the form independently.
///
/// An empty result means the card may be submitted.
#[must_use]
pub fn validate_card_form(form: &CardForm, policy: HiringTraitPolicy) -> FieldErrors {
    CardField::ALL
        .into_iter()
        .filter_map(|field| check_field(form, field, policy))
        .collect()
}

/// Field-to-message mapping produced by [`validate_card_form`].
///
/// Serialises as a JSON object keyed by wire field names.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct FieldErrors(BTreeMap<CardField, String>);

impl FieldErrors {
    /// Return `true` when no field failed.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Number of failing fields.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Message for `field`, if it failed.
    #[must_use]
    pub fn get(&self, field: CardField) -> Option<&str> {
        self.0.get(&field).map(String::as_str)
    }

    /// Iterate failures in reporting order.
    pub fn iter(&self) -> impl Iterator<Item = (CardField, &str)> {
        self.0.iter().map(|(field, message)| (*field, message.as_str()))
    }
}

impl FromIterator<FieldViolation> for FieldErrors {
    fn from_iter<I: IntoIterator<Item = FieldViolation>>(iter: I) -> Self {
        Self(
            iter.into_iter()
                .map(|violation| (violation.field, violation.to_string()))
                .collect(),
        )
    }
}
