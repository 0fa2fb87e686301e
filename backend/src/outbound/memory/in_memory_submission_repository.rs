//! `SubmissionRepository` backed by a mutex-guarded map.
//!
//! Every mutation happens under one lock acquisition, which makes vote
//! increments atomic with respect to each other. Contents are lost when the
//! process exits.

use std::collections::HashMap;
use std::sync::{Mutex, MutexGuard};

use async_trait::async_trait;
use tracing::error;

use crate::domain::ports::{SubmissionRepository, SubmissionRepositoryError};
use crate::domain::{NewSubmissionRecord, SortKey, Submission, SubmissionId};

/// In-process submission store.
#[derive(Debug, Default)]
pub struct InMemorySubmissionRepository {
    submissions: Mutex<HashMap<SubmissionId, Submission>>,
}

impl InMemorySubmissionRepository {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(
        &self,
    ) -> Result<MutexGuard<'_, HashMap<SubmissionId, Submission>>, SubmissionRepositoryError> {
        self.submissions.lock().map_err(|_| {
            error!("in-memory submission store lock poisoned");
            SubmissionRepositoryError::query("submission store lock poisoned")
        })
    }
}

#[async_trait]
impl SubmissionRepository for InMemorySubmissionRepository {
    async fn insert(
        &self,
        record: &NewSubmissionRecord,
    ) -> Result<Submission, SubmissionRepositoryError> {
        let mut submissions = self.lock()?;
        if submissions.contains_key(&record.id) {
            return Err(SubmissionRepositoryError::query("duplicate submission id"));
        }
        let submission = Submission::from(record.clone());
        submissions.insert(submission.id, submission.clone());
        Ok(submission)
    }

    async fn increment_votes(
        &self,
        id: &SubmissionId,
    ) -> Result<Submission, SubmissionRepositoryError> {
        let mut submissions = self.lock()?;
        let submission = submissions
            .get_mut(id)
            .ok_or_else(|| SubmissionRepositoryError::not_found(*id))?;
        submission.votes = submission.votes.saturating_add(1);
        Ok(submission.clone())
    }

    async fn list(&self, sort: SortKey) -> Result<Vec<Submission>, SubmissionRepositoryError> {
        let mut listed: Vec<Submission> = self.lock()?.values().cloned().collect();
        sort.sort(&mut listed);
        Ok(listed)
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use chrono::{Duration, TimeZone, Utc};
    use rstest::{fixture, rstest};

    use super::*;
    use crate::domain::CardColor;

    fn record(name: &str, minutes: i64) -> NewSubmissionRecord {
        let base = Utc
            .with_ymd_and_hms(2026, 3, 12, 18, 0, 0)
            .single()
            .expect("valid timestamp");
        NewSubmissionRecord {
            id: SubmissionId::random(),
            name: name.to_owned(),
            role: "Engineer".to_owned(),
            advice: "Ship small".to_owned(),
            hiring_trait: "Curiosity".to_owned(),
            color: CardColor::Blue,
            created_at: base + Duration::minutes(minutes),
        }
    }

    #[fixture]
    fn repo() -> InMemorySubmissionRepository {
        InMemorySubmissionRepository::new()
    }

    #[rstest]
    #[tokio::test]
    async fn insert_starts_with_zero_votes(repo: InMemorySubmissionRepository) {
        let stored = repo.insert(&record("Ada", 0)).await.expect("insert");
        assert_eq!(stored.votes, 0);
    }

    #[rstest]
    #[tokio::test]
    async fn insert_rejects_duplicate_ids(repo: InMemorySubmissionRepository) {
        let first = record("Ada", 0);
        repo.insert(&first).await.expect("first insert");
        let err = repo.insert(&first).await.expect_err("duplicate id");
        assert!(matches!(err, SubmissionRepositoryError::Query { .. }));
    }

    #[rstest]
    #[tokio::test]
    async fn unknown_id_is_not_found_and_touches_nothing(repo: InMemorySubmissionRepository) {
        let stored = repo.insert(&record("Ada", 0)).await.expect("insert");
        let missing = SubmissionId::random();

        let err = repo.increment_votes(&missing).await.expect_err("unknown id");

        assert_eq!(err, SubmissionRepositoryError::not_found(missing));
        let listed = repo.list(SortKey::Top).await.expect("list");
        assert_eq!(listed, vec![stored]);
    }

    #[rstest]
    #[tokio::test]
    async fn list_orders_by_sort_key(repo: InMemorySubmissionRepository) {
        let old = repo.insert(&record("Old", 0)).await.expect("insert old");
        let new = repo.insert(&record("New", 5)).await.expect("insert new");
        repo.increment_votes(&old.id).await.expect("vote");

        let top: Vec<String> = repo
            .list(SortKey::Top)
            .await
            .expect("top")
            .into_iter()
            .map(|s| s.name)
            .collect();
        let latest: Vec<String> = repo
            .list(SortKey::Latest)
            .await
            .expect("latest")
            .into_iter()
            .map(|s| s.name)
            .collect();

        assert_eq!(top, ["Old", "New"]);
        assert_eq!(latest, ["New", "Old"]);
        assert_ne!(old.id, new.id);
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 4)]
    async fn concurrent_votes_are_never_lost() {
        let repo = Arc::new(InMemorySubmissionRepository::new());
        let stored = repo.insert(&record("Ada", 0)).await.expect("insert");

        let handles: Vec<_> = (0..64)
            .map(|_| {
                let repo = Arc::clone(&repo);
                let id = stored.id;
                tokio::spawn(async move { repo.increment_votes(&id).await })
            })
            .collect();
        for handle in handles {
            handle.await.expect("task joins").expect("vote succeeds");
        }

        let listed = repo.list(SortKey::Top).await.expect("list");
        assert_eq!(listed[0].votes, 64);
    }
}
