//! Tests for the submission service.

use std::sync::Arc;

use chrono::{DateTime, Local, TimeZone, Utc};
use rstest::{fixture, rstest};

use super::*;
use crate::domain::ports::{
    FixtureCardColorPicker, MockSubmissionMetrics, MockSubmissionRepository,
};
use crate::domain::{CardColor, ErrorCode, REQUIRED_FIELDS_MESSAGE};

struct FixtureClock {
    utc_now: DateTime<Utc>,
}

impl Clock for FixtureClock {
    fn local(&self) -> DateTime<Local> {
        self.utc_now.with_timezone(&Local)
    }

    fn utc(&self) -> DateTime<Utc> {
        self.utc_now
    }
}

fn fixture_timestamp() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2026, 3, 12, 18, 30, 0)
        .single()
        .expect("valid fixture timestamp")
}

fn service(repo: MockSubmissionRepository) -> SubmissionService<MockSubmissionRepository> {
    SubmissionService::new(
        Arc::new(repo),
        Arc::new(FixtureClock {
            utc_now: fixture_timestamp(),
        }),
    )
    .with_color_picker(Arc::new(FixtureCardColorPicker(CardColor::Green)))
}

#[fixture]
fn ada() -> CreateSubmissionRequest {
    CreateSubmissionRequest {
        name: Some("  Ada  ".to_owned()),
        role: Some("Engineer".to_owned()),
        advice: Some("Ship small".to_owned()),
        hiring_trait: Some("Curiosity".to_owned()),
        consent: Some(true),
    }
}

fn stored(id: SubmissionId, votes: u64) -> Submission {
    Submission {
        id,
        name: "Ada".to_owned(),
        role: "Engineer".to_owned(),
        advice: "Ship small".to_owned(),
        hiring_trait: "Curiosity".to_owned(),
        color: CardColor::Green,
        votes,
        created_at: fixture_timestamp(),
    }
}

#[rstest]
#[tokio::test]
async fn create_persists_trimmed_card_with_assigned_fields(ada: CreateSubmissionRequest) {
    let mut repo = MockSubmissionRepository::new();
    repo.expect_insert()
        .withf(|record| {
            record.name == "Ada"
                && record.color == CardColor::Green
                && record.created_at == fixture_timestamp()
        })
        .times(1)
        .returning(|record| Ok(Submission::from(record.clone())));

    let created = service(repo).create(ada).await.expect("create succeeds");

    assert_eq!(created.name, "Ada");
    assert_eq!(created.votes, 0);
    assert_eq!(created.created_at, fixture_timestamp());
}

#[rstest]
#[tokio::test]
async fn create_assigns_fresh_ids(ada: CreateSubmissionRequest) {
    let mut repo = MockSubmissionRepository::new();
    repo.expect_insert()
        .times(2)
        .returning(|record| Ok(Submission::from(record.clone())));
    let service = service(repo);

    let first = service.create(ada.clone()).await.expect("first create");
    let second = service.create(ada).await.expect("second create");

    assert_ne!(first.id, second.id);
}

#[rstest]
#[tokio::test]
async fn create_rejects_without_touching_the_store(mut ada: CreateSubmissionRequest) {
    ada.consent = Some(false);
    let mut repo = MockSubmissionRepository::new();
    repo.expect_insert().times(0);
    let mut metrics = MockSubmissionMetrics::new();
    metrics
        .expect_record_rejected()
        .withf(|field, code| field == "consent" && code == "consent_missing")
        .times(1)
        .returning(|_, _| Ok(()));
    metrics.expect_record_created().times(0);

    let error = service(repo)
        .with_metrics(Arc::new(metrics))
        .create(ada)
        .await
        .expect_err("consent required");

    assert_eq!(error.code(), ErrorCode::InvalidRequest);
    assert_eq!(error.message(), REQUIRED_FIELDS_MESSAGE);
}

#[rstest]
#[tokio::test]
async fn create_honours_configured_policy(mut ada: CreateSubmissionRequest) {
    ada.hiring_trait = Some("team player".to_owned());
    let mut repo = MockSubmissionRepository::new();
    repo.expect_insert().times(0);

    let error = service(repo)
        .with_policy(HiringTraitPolicy::SingleWord)
        .create(ada)
        .await
        .expect_err("single word required");

    assert_eq!(error.message(), "Hiring trait must be a single word");
}

#[rstest]
#[case(SubmissionRepositoryError::query("insert failed"))]
#[case(SubmissionRepositoryError::connection("pool exhausted"))]
#[tokio::test]
async fn create_hides_store_failures(
    ada: CreateSubmissionRequest,
    #[case] failure: SubmissionRepositoryError,
) {
    let mut repo = MockSubmissionRepository::new();
    repo.expect_insert()
        .times(1)
        .return_once(move |_| Err(failure));

    let error = service(repo).create(ada).await.expect_err("store fails");

    assert_eq!(error.code(), ErrorCode::InternalError);
    assert_eq!(error.message(), "Failed to create submission");
    assert!(error.details().is_none());
}

#[rstest]
#[tokio::test]
async fn create_survives_metrics_failures(ada: CreateSubmissionRequest) {
    let mut repo = MockSubmissionRepository::new();
    repo.expect_insert()
        .times(1)
        .returning(|record| Ok(Submission::from(record.clone())));
    let mut metrics = MockSubmissionMetrics::new();
    metrics
        .expect_record_created()
        .times(1)
        .returning(|| Err(SubmissionMetricsError::export("registry closed")));

    let created = service(repo)
        .with_metrics(Arc::new(metrics))
        .create(ada)
        .await;

    assert!(created.is_ok());
}

#[tokio::test]
async fn vote_returns_incremented_card() {
    let id = SubmissionId::random();
    let mut repo = MockSubmissionRepository::new();
    repo.expect_increment_votes()
        .withf(move |candidate| *candidate == id)
        .times(1)
        .return_once(move |_| Ok(stored(id, 4)));
    let mut metrics = MockSubmissionMetrics::new();
    metrics.expect_record_vote().times(1).returning(|| Ok(()));

    let updated = service(repo)
        .with_metrics(Arc::new(metrics))
        .vote(&id)
        .await
        .expect("vote succeeds");

    assert_eq!(updated.votes, 4);
}

#[tokio::test]
async fn vote_on_unknown_card_is_not_found() {
    let id = SubmissionId::random();
    let mut repo = MockSubmissionRepository::new();
    repo.expect_increment_votes()
        .times(1)
        .return_once(move |_| Err(SubmissionRepositoryError::not_found(id)));

    let error = service(repo).vote(&id).await.expect_err("unknown id");

    assert_eq!(error.code(), ErrorCode::NotFound);
    assert_eq!(error.message(), "Submission not found");
}

#[tokio::test]
async fn vote_hides_query_failures() {
    let mut repo = MockSubmissionRepository::new();
    repo.expect_increment_votes()
        .times(1)
        .return_once(|_| Err(SubmissionRepositoryError::query("deadlock detected")));

    let error = service(repo)
        .vote(&SubmissionId::random())
        .await
        .expect_err("store fails");

    assert_eq!(error.code(), ErrorCode::InternalError);
    assert_eq!(error.message(), "Failed to vote on submission");
}

#[rstest]
#[case(SortKey::Top)]
#[case(SortKey::Latest)]
#[tokio::test]
async fn list_passes_sort_key_through(#[case] sort: SortKey) {
    let mut repo = MockSubmissionRepository::new();
    repo.expect_list()
        .withf(move |requested| *requested == sort)
        .times(1)
        .returning(|_| Ok(vec![stored(SubmissionId::random(), 1)]));

    let listed = service(repo).list(sort).await.expect("list succeeds");

    assert_eq!(listed.len(), 1);
}

#[tokio::test]
async fn list_hides_query_failures() {
    let mut repo = MockSubmissionRepository::new();
    repo.expect_list()
        .times(1)
        .return_once(|_| Err(SubmissionRepositoryError::query("relation missing")));

    let error = service(repo)
        .list(SortKey::Top)
        .await
        .expect_err("store fails");

    assert_eq!(error.message(), "Failed to fetch submissions");
}

#[test]
fn default_policy_is_up_to_three_words() {
    let service = service(MockSubmissionRepository::new());
    assert_eq!(service.policy(), HiringTraitPolicy::UpToThreeWords);
}
