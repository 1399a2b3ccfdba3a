use async_trait::async_trait;
use tracing::{debug, error};

use crate::mentor::application::domain::directory::{
    select_mentors, DirectoryConfig, MentorFilter, MentorSummary,
};
use crate::mentor::application::ports::incoming::use_cases::{
    ListMentorsError, ListMentorsUseCase,
};
use crate::mentor::application::ports::outgoing::MentorQuery;

pub struct ListMentorsService<Q>
where
    Q: MentorQuery,
{
    query: Q,
    config: DirectoryConfig,
}

impl<Q> ListMentorsService<Q>
where
    Q: MentorQuery,
{
    pub fn new(query: Q, config: DirectoryConfig) -> Self {
        Self { query, config }
    }
}

#[async_trait]
impl<Q> ListMentorsUseCase for ListMentorsService<Q>
where
    Q: MentorQuery + Send + Sync,
{
    async fn execute(&self, filter: MentorFilter) -> Result<Vec<MentorSummary>, ListMentorsError> {
        let mentors = self.query.list_mentors().await.map_err(|e| {
            error!(error = %e, "Failed to list mentors");
            ListMentorsError::QueryError(e.to_string())
        })?;

        let selected = select_mentors(mentors, &filter, self.config.skill_match);
        debug!(count = selected.len(), skill = ?filter.skill, "Mentor directory listed");

        Ok(selected)
    }
}
