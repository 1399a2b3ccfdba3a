use async_trait::async_trait;
use uuid::Uuid;

use super::transition::transition;
use crate::auth::application::domain::entities::UserId;
use crate::matching::application::domain::entities::{MatchRequest, MatchStatus};
use crate::matching::application::ports::incoming::use_cases::{
    AcceptMatchRequestUseCase, TransitionError,
};
use crate::matching::application::ports::outgoing::MatchRequestStore;

pub struct AcceptMatchRequestService<S>
where
    S: MatchRequestStore,
{
    store: S,
}

impl<S> AcceptMatchRequestService<S>
where
    S: MatchRequestStore,
{
    pub fn new(store: S) -> Self {
        Self { store }
    }
}

#[async_trait]
impl<S> AcceptMatchRequestUseCase for AcceptMatchRequestService<S>
where
    S: MatchRequestStore + Send + Sync,
{
    async fn execute(
        &self,
        mentor_id: UserId,
        request_id: Uuid,
    ) -> Result<MatchRequest, TransitionError> {
        transition(&self.store, mentor_id, request_id, MatchStatus::Accepted).await
    }
}
