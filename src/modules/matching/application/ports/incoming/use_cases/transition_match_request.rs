use async_trait::async_trait;
use uuid::Uuid;

use crate::auth::application::domain::entities::UserId;
use crate::matching::application::domain::entities::{MatchRequest, MatchStatus};

/// Failure of accept, reject or cancel.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TransitionError {
    /// Missing, or addressed to someone else.
    #[error("Match request not found")]
    NotFound,

    #[error("Match request is already {0}")]
    NotPending(MatchStatus),

    #[error("Already have an accepted mentee")]
    MentorAlreadyMatched,

    #[error("Store unavailable: {0}")]
    StoreUnavailable(String),

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

#[async_trait]
pub trait AcceptMatchRequestUseCase: Send + Sync {
    async fn execute(&self, mentor_id: UserId, request_id: Uuid)
        -> Result<MatchRequest, TransitionError>;
}

#[async_trait]
pub trait RejectMatchRequestUseCase: Send + Sync {
    async fn execute(&self, mentor_id: UserId, request_id: Uuid)
        -> Result<MatchRequest, TransitionError>;
}

#[async_trait]
pub trait CancelMatchRequestUseCase: Send + Sync {
    async fn execute(&self, mentee_id: UserId, request_id: Uuid)
        -> Result<MatchRequest, TransitionError>;
}
