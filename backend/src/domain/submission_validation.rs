//! Authoritative server-side checks for new submissions.
//!
//! The entry form validates every field independently, but the server never
//! trusts it. Here a request first passes a required-fields gate and then the
//! shared card rules in the order name, role, advice, hiring trait. Only the
//! first failure is reported.

use card_rules::{CardField, CardForm, HiringTraitPolicy, check_field};
use serde_json::json;

use crate::domain::Error;
use crate::domain::ports::CreateSubmissionRequest;

/// Message returned when a field is missing, blank, or consent was withheld.
pub const REQUIRED_FIELDS_MESSAGE: &str = "All fields are required and consent must be given";

const TEXT_FIELDS: [CardField; 4] = [
    CardField::Name,
    CardField::Role,
    CardField::Advice,
    CardField::HiringTrait,
];

/// A request that failed validation, with the field that caused it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubmissionRejection {
    /// Offending field.
    pub field: CardField,
    /// Machine-readable rule code.
    pub code: &'static str,
    /// User-facing message.
    pub message: String,
}

impl From<SubmissionRejection> for Error {
    fn from(value: SubmissionRejection) -> Self {
        Self::invalid_request(value.message).with_details(json!({
            "field": value.field.as_str(),
            "code": value.code,
        }))
    }
}

/// Trimmed card text that satisfied every rule.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidatedCard {
    /// Trimmed name.
    pub name: String,
    /// Trimmed role.
    pub role: String,
    /// Trimmed advice.
    pub advice: String,
    /// Trimmed hiring trait.
    pub hiring_trait: String,
}

fn trimmed(value: Option<&String>) -> &str {
    value.map_or("", |text| text.trim())
}

fn required_gate(request: &CreateSubmissionRequest) -> Result<(), SubmissionRejection> {
    let values = [
        (CardField::Name, trimmed(request.name.as_ref())),
        (CardField::Role, trimmed(request.role.as_ref())),
        (CardField::Advice, trimmed(request.advice.as_ref())),
        (CardField::HiringTrait, trimmed(request.hiring_trait.as_ref())),
    ];
    let missing = values
        .iter()
        .find(|(_, value)| value.is_empty())
        .map(|(field, _)| (*field, "required"));
    let missing = missing.or_else(|| {
        (request.consent != Some(true)).then_some((CardField::Consent, "consent_missing"))
    });

    match missing {
        Some((field, code)) => Err(SubmissionRejection {
            field,
            code,
            message: REQUIRED_FIELDS_MESSAGE.to_owned(),
        }),
        None => Ok(()),
    }
}

/// Validate a create request under the configured hiring-trait policy.
///
/// # Errors
/// Returns the first [`SubmissionRejection`] encountered.
///
/// # Examples
/// ```
/// use card_rules::{CardField, HiringTraitPolicy};
/// use wisdom_wall::domain::ports::CreateSubmissionRequest;
/// use wisdom_wall::domain::validate_submission;
///
/// let request = CreateSubmissionRequest {
///     name: Some(" Ada ".into()),
///     role: Some("Engineer".into()),
///     advice: Some("Ship small".into()),
///     hiring_trait: Some("one two three four".into()),
///     consent: Some(true),
/// };
/// let rejection = validate_submission(&request, HiringTraitPolicy::default())
///     .expect_err("four words are too many");
/// assert_eq!(rejection.field, CardField::HiringTrait);
/// assert_eq!(rejection.message, "Hiring trait must be maximum 3 words");
/// ```
pub fn validate_submission(
    request: &CreateSubmissionRequest,
    policy: HiringTraitPolicy,
) -> Result<ValidatedCard, SubmissionRejection> {
    required_gate(request)?;

    let form = CardForm {
        name: trimmed(request.name.as_ref()).to_owned(),
        role: trimmed(request.role.as_ref()).to_owned(),
        advice: trimmed(request.advice.as_ref()).to_owned(),
        hiring_trait: trimmed(request.hiring_trait.as_ref()).to_owned(),
        consent: true,
    };

    if let Some(violation) = TEXT_FIELDS
        .into_iter()
        .find_map(|field| check_field(&form, field, policy))
    {
        return Err(SubmissionRejection {
            field: violation.field,
            code: violation.violation.code(),
            message: violation.to_string(),
        });
    }

    Ok(ValidatedCard {
        name: form.name,
        role: form.role,
        advice: form.advice,
        hiring_trait: form.hiring_trait,
    })
}
