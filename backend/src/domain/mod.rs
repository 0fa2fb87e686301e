//! Domain primitives, ports, and services for the wisdom wall.
//!
//! Purpose: define strongly typed entities and the use-cases operating on
//! them, independent of HTTP and storage. Inbound adapters call the driving
//! ports in [`ports`]; outbound adapters implement the driven ones.
//!
//! Public surface:
//! - `Error` / `ErrorCode`: transport-agnostic failure payload.
//! - `Submission`, `SubmissionId`, `CardColor`, `SortKey`: the card model.
//! - `SubmissionService`: implements `SubmissionCommand` and
//!   `SubmissionQuery` over a `SubmissionRepository`.
//! - `TraceId`: request-scoped correlation identifier.

pub mod error;
pub mod ports;
mod submission;
mod submission_service;
mod submission_validation;
mod trace_id;

pub use self::error::{Error, ErrorCode, ErrorValidationError};
pub use self::submission::{
    CardColor, CardColorParseError, NewSubmissionRecord, SortKey, Submission, SubmissionId,
    SubmissionIdValidationError,
};
pub use self::submission_service::SubmissionService;
pub use self::submission_validation::{
    REQUIRED_FIELDS_MESSAGE, SubmissionRejection, ValidatedCard, validate_submission,
};
pub use self::trace_id::{TRACE_ID_HEADER, TraceId};
