use async_trait::async_trait;

use crate::mentor::application::domain::directory::MentorSummary;

#[derive(Debug, Clone, thiserror::Error)]
pub enum MentorQueryError {
    #[error("Database error: {0}")]
    DatabaseError(String),

    #[error("Stored user record is invalid: {0}")]
    CorruptRecord(String),
}

#[async_trait]
pub trait MentorQuery: Send + Sync {
    /// Every mentor, in storage order.
    async fn list_mentors(&self) -> Result<Vec<MentorSummary>, MentorQueryError>;
}
