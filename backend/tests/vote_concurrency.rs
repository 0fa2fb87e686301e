//! Concurrent votes through the domain service never lose increments.

use std::sync::Arc;

use chrono::Utc;
use mockable::DefaultClock;
use rstest::rstest;
use wisdom_wall::domain::ports::{
    CreateSubmissionRequest, SubmissionCommand, SubmissionQuery,
};
use wisdom_wall::domain::{SortKey, SubmissionService};
use wisdom_wall::outbound::memory::InMemorySubmissionRepository;

fn request(name: &str) -> CreateSubmissionRequest {
    CreateSubmissionRequest {
        name: Some(name.to_owned()),
        role: Some("Engineer".to_owned()),
        advice: Some("Ship small".to_owned()),
        hiring_trait: Some("Curiosity".to_owned()),
        consent: Some(true),
    }
}

#[rstest]
#[case(1)]
#[case(50)]
#[case(200)]
#[tokio::test(flavor = "multi_thread", worker_threads = 8)]
async fn n_concurrent_votes_yield_n(#[case] voters: u64) {
    let service = Arc::new(SubmissionService::new(
        Arc::new(InMemorySubmissionRepository::new()),
        Arc::new(DefaultClock),
    ));
    let target = service.create(request("Ada")).await.expect("create target");
    let bystander = service.create(request("Grace")).await.expect("create bystander");
    let started = Utc::now();

    let handles: Vec<_> = (0..voters)
        .map(|_| {
            let service = Arc::clone(&service);
            let id = target.id;
            tokio::spawn(async move { service.vote(&id).await })
        })
        .collect();
    for handle in handles {
        handle.await.expect("vote task joins").expect("vote succeeds");
    }

    let listing = service.list(SortKey::Top).await.expect("list");
    let votes_for = |id| {
        listing
            .iter()
            .find(|card| card.id == id)
            .map(|card| card.votes)
    };
    assert_eq!(votes_for(target.id), Some(voters));
    assert_eq!(votes_for(bystander.id), Some(0));
    assert!(listing.iter().all(|card| card.created_at <= started));
}
