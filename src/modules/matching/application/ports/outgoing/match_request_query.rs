use async_trait::async_trait;

use crate::auth::application::domain::entities::UserId;
use crate::matching::application::domain::entities::MatchRequest;

#[derive(Debug, Clone, thiserror::Error)]
pub enum MatchQueryError {
    #[error("Store unavailable: {0}")]
    Unavailable(String),

    #[error("Database error: {0}")]
    DatabaseError(String),
}

/// Read-only listings; no locks, read-committed is enough.
#[async_trait]
pub trait MatchRequestQuery: Send + Sync {
    async fn list_incoming(&self, mentor_id: UserId) -> Result<Vec<MatchRequest>, MatchQueryError>;

    async fn list_outgoing(&self, mentee_id: UserId) -> Result<Vec<MatchRequest>, MatchQueryError>;
}
