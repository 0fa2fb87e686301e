//! OpenAPI documentation configuration.
//!
//! [`ApiDoc`] registers the submission endpoints, health probes and the
//! error schema wrappers from [`crate::inbound::http::schemas`]. Swagger UI
//! serves it in debug builds; `cargo run --bin openapi-dump` prints it.

use utoipa::OpenApi;

use crate::inbound::http::schemas::{ErrorCodeSchema, ErrorSchema};
use crate::inbound::http::submissions::{CreateSubmissionBody, SubmissionResponse};

/// OpenAPI document for the REST API.
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Wisdom Wall API",
        description = "Submit wisdom cards, browse the wall and upvote favourites."
    ),
    servers(
        (url = "/", description = "Relative to the deployment base URL")
    ),
    paths(
        crate::inbound::http::submissions::create_submission,
        crate::inbound::http::submissions::list_submissions,
        crate::inbound::http::submissions::vote_submission,
        crate::inbound::http::health::ready,
        crate::inbound::http::health::live,
    ),
    components(schemas(
        CreateSubmissionBody,
        SubmissionResponse,
        ErrorSchema,
        ErrorCodeSchema
    )),
    tags(
        (name = "submissions", description = "Wisdom cards and votes"),
        (name = "health", description = "Endpoints for health checks")
    )
)]
pub struct ApiDoc;
