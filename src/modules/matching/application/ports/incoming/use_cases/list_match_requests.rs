use async_trait::async_trait;

use crate::auth::application::domain::entities::UserId;
use crate::matching::application::domain::entities::MatchRequest;

#[derive(Debug, Clone, thiserror::Error)]
pub enum ListMatchRequestsError {
    #[error("Store unavailable: {0}")]
    StoreUnavailable(String),

    #[error("Query error: {0}")]
    QueryError(String),
}

#[async_trait]
pub trait ListIncomingRequestsUseCase: Send + Sync {
    async fn execute(&self, mentor_id: UserId) -> Result<Vec<MatchRequest>, ListMatchRequestsError>;
}

#[async_trait]
pub trait ListOutgoingRequestsUseCase: Send + Sync {
    async fn execute(&self, mentee_id: UserId) -> Result<Vec<MatchRequest>, ListMatchRequestsError>;
}
