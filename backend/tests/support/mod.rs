//! Shared helpers for HTTP integration tests over the in-memory store.

use std::sync::Arc;

use actix_web::dev::{ServiceFactory, ServiceRequest, ServiceResponse};
use actix_web::{App, web};
use card_rules::HiringTraitPolicy;
use mockable::DefaultClock;
use serde_json::{Value, json};
use wisdom_wall::Trace;
use wisdom_wall::domain::SubmissionService;
use wisdom_wall::inbound::http::json_config;
use wisdom_wall::inbound::http::state::HttpState;
use wisdom_wall::inbound::http::submissions::{
    create_submission, list_submissions, vote_submission,
};
use wisdom_wall::outbound::memory::InMemorySubmissionRepository;

/// Build the public API over a fresh in-memory store.
pub fn wall_app(
    policy: HiringTraitPolicy,
) -> App<
    impl ServiceFactory<
        ServiceRequest,
        Config = (),
        Response = ServiceResponse,
        Error = actix_web::Error,
        InitError = (),
    >,
> {
    let service = Arc::new(
        SubmissionService::new(
            Arc::new(InMemorySubmissionRepository::new()),
            Arc::new(DefaultClock),
        )
        .with_policy(policy),
    );
    let state = HttpState::new(service.clone(), service);

    App::new()
        .app_data(web::Data::new(state))
        .wrap(Trace)
        .service(
            web::scope("/api/v1")
                .app_data(json_config())
                .service(create_submission)
                .service(list_submissions)
                .service(vote_submission),
        )
}

/// A valid card body; override fields with `merge`.
pub fn card(name: &str) -> Value {
    json!({
        "name": name,
        "role": "Engineer",
        "advice": "Ship small",
        "hiringTrait": "Curiosity",
        "consent": true
    })
}

/// Shallow-merge `overrides` into `base`.
pub fn merge(mut base: Value, overrides: Value) -> Value {
    if let (Some(target), Some(source)) = (base.as_object_mut(), overrides.as_object()) {
        for (key, value) in source {
            target.insert(key.clone(), value.clone());
        }
    }
    base
}
