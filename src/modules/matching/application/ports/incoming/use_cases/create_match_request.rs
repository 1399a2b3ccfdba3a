use async_trait::async_trait;

use crate::auth::application::domain::entities::UserId;
use crate::matching::application::domain::entities::MatchRequest;

#[derive(Debug, Clone)]
pub struct CreateMatchRequestInput {
    /// Authenticated mentee filing the request.
    pub requester: UserId,
    pub mentor_id: UserId,
    pub mentee_id: UserId,
    pub message: String,
}

//
// ──────────────────────────────────────────────────────────
// Errors
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CreateMatchRequestError {
    #[error("Message cannot be empty")]
    EmptyMessage,

    #[error("Cannot create request for other mentee")]
    NotRequestOwner,

    #[error("Mentor not found")]
    MentorNotFound,

    #[error("Already have an active request to this mentor")]
    ActiveRequestExists,

    #[error("Cannot send multiple requests simultaneously")]
    PendingRequestExists,

    #[error("Store unavailable: {0}")]
    StoreUnavailable(String),

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

#[async_trait]
pub trait CreateMatchRequestUseCase: Send + Sync {
    async fn execute(
        &self,
        input: CreateMatchRequestInput,
    ) -> Result<MatchRequest, CreateMatchRequestError>;
}
