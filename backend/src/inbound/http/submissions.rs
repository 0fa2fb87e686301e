//! Submission HTTP handlers.
//!
//! ```text
//! POST /api/v1/submissions
//! GET  /api/v1/submissions?sort={top|latest}
//! POST /api/v1/submissions/{id}/vote
//! ```

use actix_web::{HttpResponse, get, post, web};
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

use crate::domain::ports::CreateSubmissionRequest;
use crate::domain::{SortKey, Submission};
use crate::inbound::http::ApiResult;
use crate::inbound::http::schemas::ErrorSchema;
use crate::inbound::http::state::HttpState;
use crate::inbound::http::validation::{FieldName, parse_submission_id};

/// Request payload for creating a wisdom card.
///
/// Every field is optional on the wire so that missing values reach the
/// required-fields check instead of failing deserialisation.
#[derive(Debug, Default, Deserialize, Serialize, ToSchema)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct CreateSubmissionBody {
    #[schema(example = "Ada")]
    pub name: Option<String>,
    #[schema(example = "Engineer")]
    pub role: Option<String>,
    #[schema(example = "Ship small")]
    pub advice: Option<String>,
    #[schema(example = "Curiosity")]
    pub hiring_trait: Option<String>,
    pub consent: Option<bool>,
}

impl From<CreateSubmissionBody> for CreateSubmissionRequest {
    fn from(value: CreateSubmissionBody) -> Self {
        Self {
            name: value.name,
            role: value.role,
            advice: value.advice,
            hiring_trait: value.hiring_trait,
            consent: value.consent,
        }
    }
}

/// Wire representation of a stored card.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct SubmissionResponse {
    #[schema(format = "uuid")]
    pub id: String,
    pub name: String,
    pub role: String,
    pub advice: String,
    pub hiring_trait: String,
    #[schema(example = "green")]
    pub color: String,
    pub votes: u64,
    #[schema(format = "date-time")]
    pub created_at: String,
}

impl From<Submission> for SubmissionResponse {
    fn from(value: Submission) -> Self {
        Self {
            id: value.id.to_string(),
            name: value.name,
            role: value.role,
            advice: value.advice,
            hiring_trait: value.hiring_trait,
            color: value.color.as_str().to_owned(),
            votes: value.votes,
            created_at: value.created_at.to_rfc3339(),
        }
    }
}

/// Query parameters accepted by the listing endpoint.
///
/// The query string is read as raw pairs so that repeated or unexpected keys
/// never reject the request; the first `sort` wins.
#[derive(Debug, Default, PartialEq, Eq, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct ListSubmissionsQuery {
    /// `top` (default) or `latest`; anything else falls back to `top`.
    pub sort: Option<String>,
}

impl ListSubmissionsQuery {
    /// Pick the first `sort` value out of decoded query pairs.
    #[must_use]
    pub fn from_pairs(pairs: Vec<(String, String)>) -> Self {
        Self {
            sort: pairs
                .into_iter()
                .find_map(|(key, value)| (key == "sort").then_some(value)),
        }
    }
}

/// Create a wisdom card.
#[utoipa::path(
    post,
    path = "/api/v1/submissions",
    request_body = CreateSubmissionBody,
    responses(
        (status = 201, description = "Card created", body = SubmissionResponse),
        (status = 400, description = "Validation failed or malformed body", body = ErrorSchema),
        (status = 500, description = "Card could not be stored", body = ErrorSchema)
    ),
    tags = ["submissions"],
    operation_id = "createSubmission"
)]
#[post("/submissions")]
pub async fn create_submission(
    state: web::Data<HttpState>,
    payload: web::Json<CreateSubmissionBody>,
) -> ApiResult<HttpResponse> {
    let created = state
        .submissions
        .create(payload.into_inner().into())
        .await?;
    Ok(HttpResponse::Created().json(SubmissionResponse::from(created)))
}

/// List every card in the requested order.
#[utoipa::path(
    get,
    path = "/api/v1/submissions",
    params(ListSubmissionsQuery),
    responses(
        (status = 200, description = "Cards in display order", body = [SubmissionResponse]),
        (status = 500, description = "Cards could not be fetched", body = ErrorSchema)
    ),
    tags = ["submissions"],
    operation_id = "listSubmissions"
)]
#[get("/submissions")]
pub async fn list_submissions(
    state: web::Data<HttpState>,
    query: web::Query<Vec<(String, String)>>,
) -> ApiResult<web::Json<Vec<SubmissionResponse>>> {
    let params = ListSubmissionsQuery::from_pairs(query.into_inner());
    let sort = SortKey::from_query(params.sort.as_deref());
    let submissions = state.submissions_query.list(sort).await?;
    Ok(web::Json(
        submissions
            .into_iter()
            .map(SubmissionResponse::from)
            .collect(),
    ))
}

/// Add one vote to a card.
#[utoipa::path(
    post,
    path = "/api/v1/submissions/{id}/vote",
    params(("id" = String, Path, format = "uuid", description = "Submission identifier")),
    responses(
        (status = 200, description = "Vote recorded", body = SubmissionResponse),
        (status = 400, description = "Identifier is not a UUID", body = ErrorSchema),
        (status = 404, description = "Unknown submission", body = ErrorSchema),
        (status = 500, description = "Vote could not be stored", body = ErrorSchema)
    ),
    tags = ["submissions"],
    operation_id = "voteSubmission"
)]
#[post("/submissions/{id}/vote")]
pub async fn vote_submission(
    state: web::Data<HttpState>,
    path: web::Path<String>,
) -> ApiResult<web::Json<SubmissionResponse>> {
    let id = parse_submission_id(&path.into_inner(), FieldName::new("id"))?;
    let updated = state.submissions.vote(&id).await?;
    Ok(web::Json(SubmissionResponse::from(updated)))
}

#[cfg(test)]
#[path = "submissions_tests.rs"]
mod tests;
