//! Shared validation rules and client-side vote state for wisdom cards.
//!
//! This crate holds the rules a wisdom card must satisfy before it may be
//! shared on the wall. It has no dependency on backend domain types so the
//! entry form (for example a WASM front end) and the server boundary apply
//! the same limits and the same hiring-trait policy.
//!
//! # Overview
//!
//! - [`validate_card_form`] checks every field of a [`CardForm`] and returns a
//!   [`FieldErrors`] mapping; an empty mapping means the card is acceptable.
//! - [`check_field`] evaluates a single field, used for on-blur feedback and
//!   by the server's first-failure reporting.
//! - [`HiringTraitPolicy`] selects the word rule for the hiring trait.
//! - [`vote`] models the optimistic vote button as an explicit state machine
//!   backed by an advisory [`vote::VotedMarkers`] cache.
//!
//! # Example
//!
//! ```
//! use card_rules::{CardField, CardForm, HiringTraitPolicy, validate_card_form};
//!
//! let form = CardForm {
//!     name: "Ada".to_owned(),
//!     role: "Engineer".to_owned(),
//!     advice: "Ship small".to_owned(),
//!     hiring_trait: "very very very curious".to_owned(),
//!     consent: false,
//! };
//!
//! let errors = validate_card_form(&form, HiringTraitPolicy::default());
//! assert_eq!(errors.len(), 2);
//! assert_eq!(
//!     errors.get(CardField::HiringTrait),
//!     Some("Hiring trait must be maximum 3 words")
//! );
//! assert!(errors.get(CardField::Consent).is_some());
//! ```

mod error;
mod form;
mod limits;
pub mod vote;

pub use error::{PolicyParseError, VoteTransitionError};
pub use form::{
    CardField, CardForm, FieldErrors, FieldViolation, RuleViolation, check_field,
    validate_card_form, validate_field,
};
pub use limits::{
    ADVICE_MAX, HIRING_TRAIT_MAX, HIRING_TRAIT_MAX_WORDS, HiringTraitPolicy, NAME_MAX, ROLE_MAX,
    char_len, word_count,
};
