use async_trait::async_trait;

use crate::mentor::application::domain::directory::{MentorFilter, MentorSummary};

#[derive(Debug, Clone, thiserror::Error)]
pub enum ListMentorsError {
    #[error("Query error: {0}")]
    QueryError(String),
}

#[async_trait]
pub trait ListMentorsUseCase: Send + Sync {
    async fn execute(&self, filter: MentorFilter) -> Result<Vec<MentorSummary>, ListMentorsError>;
}
