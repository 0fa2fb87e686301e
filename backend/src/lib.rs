//! Wisdom wall backend library.
//!
//! Hexagonal layout: [`domain`] holds the card model, validation and the
//! submission service; [`inbound`] exposes it over HTTP; [`outbound`]
//! provides the PostgreSQL, in-memory and Prometheus adapters.

pub mod doc;
pub mod domain;
pub mod inbound;
pub mod middleware;
pub mod outbound;
pub mod settings;

/// Public OpenAPI surface used by Swagger UI and tooling.
pub use doc::ApiDoc;
pub use domain::TraceId;
pub use middleware::Trace;
