use async_trait::async_trait;
use uuid::Uuid;

use super::transition::transition;
use crate::auth::application::domain::entities::UserId;
use crate::matching::application::domain::entities::{MatchRequest, MatchStatus};
use crate::matching::application::ports::incoming::use_cases::{
    CancelMatchRequestUseCase, TransitionError,
};
use crate::matching::application::ports::outgoing::MatchRequestStore;

pub struct CancelMatchRequestService<S>
where
    S: MatchRequestStore,
{
    store: S,
}

impl<S> CancelMatchRequestService<S>
where
    S: MatchRequestStore,
{
    pub fn new(store: S) -> Self {
        Self { store }
    }
}

#[async_trait]
impl<S> CancelMatchRequestUseCase for CancelMatchRequestService<S>
where
    S: MatchRequestStore + Send + Sync,
{
    async fn execute(
        &self,
        mentee_id: UserId,
        request_id: Uuid,
    ) -> Result<MatchRequest, TransitionError> {
        transition(&self.store, mentee_id, request_id, MatchStatus::Cancelled).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::auth::application::domain::entities::UserRole;
    use crate::matching::application::ports::incoming::use_cases::AcceptMatchRequestUseCase;
    use crate::matching::application::service::AcceptMatchRequestService;
    use crate::tests::support::in_memory_match_store::InMemoryMatchStore;

    #[tokio::test]
    async fn test_owner_cancels_and_stranger_gets_not_found() {
        let store = InMemoryMatchStore::new();
        let mentor = store.add_user(UserRole::Mentor).await;
        let owner = store.add_user(UserRole::Mentee).await;
        let stranger = store.add_user(UserRole::Mentee).await;
        let id = store.seed_request(mentor, owner, MatchStatus::Pending).await;

        let service = CancelMatchRequestService::new(store.clone());

        let err = service.execute(stranger, id).await.unwrap_err();
        assert_eq!(err, TransitionError::NotFound);

        let cancelled = service.execute(owner, id).await.unwrap();
        assert_eq!(cancelled.status, MatchStatus::Cancelled);

        let err = service.execute(stranger, id).await.unwrap_err();
        assert_eq!(err, TransitionError::NotFound);
    }

    #[tokio::test]
    async fn test_cancel_racing_accept_has_one_winner() {
        let store = InMemoryMatchStore::new();
        let mentor = store.add_user(UserRole::Mentor).await;
        let mentee = store.add_user(UserRole::Mentee).await;
        let id = store.seed_request(mentor, mentee, MatchStatus::Pending).await;

        let cancel = CancelMatchRequestService::new(store.clone());
        let accept = AcceptMatchRequestService::new(store.clone());
        let (cancelled, accepted) =
            tokio::join!(cancel.execute(mentee, id), accept.execute(mentor, id));

        let stored = store.request(id).await.unwrap().status;
        match (cancelled, accepted) {
            (Ok(won), Err(e)) => {
                assert_eq!(won.status, MatchStatus::Cancelled);
                assert_eq!(e, TransitionError::NotPending(MatchStatus::Cancelled));
                assert_eq!(stored, MatchStatus::Cancelled);
            }
            (Err(e), Ok(won)) => {
                assert_eq!(won.status, MatchStatus::Accepted);
                assert_eq!(e, TransitionError::NotPending(MatchStatus::Accepted));
                assert_eq!(stored, MatchStatus::Accepted);
            }
            other => panic!("expected exactly one transition to succeed, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_concurrent_cancels_of_same_request() {
        let store = InMemoryMatchStore::new();
        let mentor = store.add_user(UserRole::Mentor).await;
        let mentee = store.add_user(UserRole::Mentee).await;
        let id = store.seed_request(mentor, mentee, MatchStatus::Pending).await;

        let service = CancelMatchRequestService::new(store.clone());
        let (r1, r2) = tokio::join!(service.execute(mentee, id), service.execute(mentee, id));

        let err = match (r1, r2) {
            (Ok(_), Err(e)) | (Err(e), Ok(_)) => e,
            other => panic!("expected exactly one cancel to succeed, got {other:?}"),
        };
        assert_eq!(err, TransitionError::NotPending(MatchStatus::Cancelled));
        assert_eq!(store.request(id).await.unwrap().status, MatchStatus::Cancelled);
    }

    #[tokio::test]
    async fn test_cancel_accepted_is_not_pending() {
        let store = InMemoryMatchStore::new();
        let mentor = store.add_user(UserRole::Mentor).await;
        let mentee = store.add_user(UserRole::Mentee).await;
        let id = store.seed_request(mentor, mentee, MatchStatus::Accepted).await;

        let err = CancelMatchRequestService::new(store.clone())
            .execute(mentee, id)
            .await
            .unwrap_err();

        assert_eq!(err, TransitionError::NotPending(MatchStatus::Accepted));
        assert_eq!(store.request(id).await.unwrap().status, MatchStatus::Accepted);
    }

    #[tokio::test]
    async fn test_mentor_cannot_cancel() {
        let store = InMemoryMatchStore::new();
        let mentor = store.add_user(UserRole::Mentor).await;
        let mentee = store.add_user(UserRole::Mentee).await;
        let id = store.seed_request(mentor, mentee, MatchStatus::Pending).await;

        let err = CancelMatchRequestService::new(store)
            .execute(mentor, id)
            .await
            .unwrap_err();

        assert_eq!(err, TransitionError::NotFound);
    }
}
