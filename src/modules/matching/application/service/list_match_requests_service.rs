use async_trait::async_trait;
use tracing::error;

use crate::auth::application::domain::entities::UserId;
use crate::matching::application::domain::entities::MatchRequest;
use crate::matching::application::ports::incoming::use_cases::{
    ListIncomingRequestsUseCase, ListMatchRequestsError, ListOutgoingRequestsUseCase,
};
use crate::matching::application::ports::outgoing::{MatchQueryError, MatchRequestQuery};

impl From<MatchQueryError> for ListMatchRequestsError {
    fn from(e: MatchQueryError) -> Self {
        match e {
            MatchQueryError::Unavailable(msg) => ListMatchRequestsError::StoreUnavailable(msg),
            MatchQueryError::DatabaseError(msg) => ListMatchRequestsError::QueryError(msg),
        }
    }
}

pub struct ListIncomingRequestsService<Q>
where
    Q: MatchRequestQuery,
{
    query: Q,
}

impl<Q> ListIncomingRequestsService<Q>
where
    Q: MatchRequestQuery,
{
    pub fn new(query: Q) -> Self {
        Self { query }
    }
}

#[async_trait]
impl<Q> ListIncomingRequestsUseCase for ListIncomingRequestsService<Q>
where
    Q: MatchRequestQuery + Send + Sync,
{
    async fn execute(&self, mentor_id: UserId) -> Result<Vec<MatchRequest>, ListMatchRequestsError> {
        self.query.list_incoming(mentor_id).await.map_err(|e| {
            error!(mentor_id = %mentor_id, error = %e, "Failed to list incoming requests");
            e.into()
        })
    }
}

pub struct ListOutgoingRequestsService<Q>
where
    Q: MatchRequestQuery,
{
    query: Q,
}

impl<Q> ListOutgoingRequestsService<Q>
where
    Q: MatchRequestQuery,
{
    pub fn new(query: Q) -> Self {
        Self { query }
    }
}

#[async_trait]
impl<Q> ListOutgoingRequestsUseCase for ListOutgoingRequestsService<Q>
where
    Q: MatchRequestQuery + Send + Sync,
{
    async fn execute(&self, mentee_id: UserId) -> Result<Vec<MatchRequest>, ListMatchRequestsError> {
        self.query.list_outgoing(mentee_id).await.map_err(|e| {
            error!(mentee_id = %mentee_id, error = %e, "Failed to list outgoing requests");
            e.into()
        })
    }
}
