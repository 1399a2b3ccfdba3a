use async_trait::async_trait;
use uuid::Uuid;

use crate::auth::application::domain::entities::{UserId, UserRole};
use crate::matching::application::domain::entities::{MatchRequest, MatchStatus, NewMatchRequest};

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum MatchStoreError {
    /// The pair already has a pending or accepted request.
    #[error("Active request already exists for this pair")]
    PairActive,

    #[error("Mentee already has a pending request")]
    MenteePending,

    #[error("Mentor already has an accepted request")]
    MentorAccepted,

    /// Pool exhausted, connection lost or timed out. Safe to retry.
    #[error("Store unavailable: {0}")]
    Unavailable(String),

    #[error("Database error: {0}")]
    Database(String),
}

/// Entry point for transactional work on match requests.
#[async_trait]
pub trait MatchRequestStore: Send + Sync {
    type Txn: MatchRequestTxn;

    async fn begin(&self) -> Result<Self::Txn, MatchStoreError>;
}

/// One open transaction. Dropping it without `commit` discards the work.
#[async_trait]
pub trait MatchRequestTxn: Send {
    /// Reads a user's role and holds that user's row until the transaction ends.
    async fn lock_user_role(&mut self, user_id: UserId) -> Result<Option<UserRole>, MatchStoreError>;

    async fn find_user_role(&mut self, user_id: UserId) -> Result<Option<UserRole>, MatchStoreError>;

    async fn find_active_between(
        &mut self,
        mentor_id: UserId,
        mentee_id: UserId,
    ) -> Result<Option<MatchRequest>, MatchStoreError>;

    async fn find_pending_by_mentee(
        &mut self,
        mentee_id: UserId,
    ) -> Result<Option<MatchRequest>, MatchStoreError>;

    async fn find_accepted_by_mentor(
        &mut self,
        mentor_id: UserId,
    ) -> Result<Option<MatchRequest>, MatchStoreError>;

    /// Reads a request and holds its row until the transaction ends.
    async fn lock_request(&mut self, id: Uuid) -> Result<Option<MatchRequest>, MatchStoreError>;

    async fn insert(&mut self, new: NewMatchRequest) -> Result<MatchRequest, MatchStoreError>;

    async fn update_status(
        &mut self,
        id: Uuid,
        status: MatchStatus,
    ) -> Result<MatchRequest, MatchStoreError>;

    async fn commit(self) -> Result<(), MatchStoreError>;

    async fn rollback(self) -> Result<(), MatchStoreError>;
}
