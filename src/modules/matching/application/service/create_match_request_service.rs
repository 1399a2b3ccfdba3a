use async_trait::async_trait;
use tracing::{error, info, warn};

use crate::auth::application::domain::entities::UserRole;
use crate::matching::application::domain::entities::{MatchRequest, NewMatchRequest};
use crate::matching::application::ports::incoming::use_cases::{
    CreateMatchRequestError, CreateMatchRequestInput, CreateMatchRequestUseCase,
};
use crate::matching::application::ports::outgoing::{
    MatchRequestStore, MatchRequestTxn, MatchStoreError,
};

impl From<MatchStoreError> for CreateMatchRequestError {
    fn from(e: MatchStoreError) -> Self {
        match e {
            MatchStoreError::PairActive => CreateMatchRequestError::ActiveRequestExists,
            MatchStoreError::MenteePending => CreateMatchRequestError::PendingRequestExists,
            MatchStoreError::Unavailable(msg) => CreateMatchRequestError::StoreUnavailable(msg),
            other => CreateMatchRequestError::RepositoryError(other.to_string()),
        }
    }
}

pub struct CreateMatchRequestService<S>
where
    S: MatchRequestStore,
{
    store: S,
}

impl<S> CreateMatchRequestService<S>
where
    S: MatchRequestStore,
{
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// Runs the checks and the insert on an open transaction. The mentee's
    /// user row is locked first, so two creates by the same mentee queue up
    /// and the second one sees the first one's pending request.
    async fn create_in<T>(
        txn: &mut T,
        input: CreateMatchRequestInput,
    ) -> Result<MatchRequest, CreateMatchRequestError>
    where
        T: MatchRequestTxn,
    {
        if txn.lock_user_role(input.mentee_id).await? != Some(UserRole::Mentee) {
            return Err(CreateMatchRequestError::NotRequestOwner);
        }

        if txn.find_user_role(input.mentor_id).await? != Some(UserRole::Mentor) {
            return Err(CreateMatchRequestError::MentorNotFound);
        }

        if txn
            .find_active_between(input.mentor_id, input.mentee_id)
            .await?
            .is_some()
        {
            return Err(CreateMatchRequestError::ActiveRequestExists);
        }

        if txn.find_pending_by_mentee(input.mentee_id).await?.is_some() {
            return Err(CreateMatchRequestError::PendingRequestExists);
        }

        Ok(txn
            .insert(NewMatchRequest {
                mentor_id: input.mentor_id,
                mentee_id: input.mentee_id,
                message: input.message,
            })
            .await?)
    }
}

#[async_trait]
impl<S> CreateMatchRequestUseCase for CreateMatchRequestService<S>
where
    S: MatchRequestStore + Send + Sync,
{
    async fn execute(
        &self,
        input: CreateMatchRequestInput,
    ) -> Result<MatchRequest, CreateMatchRequestError> {
        if input.message.trim().is_empty() {
            return Err(CreateMatchRequestError::EmptyMessage);
        }

        if input.requester != input.mentee_id {
            warn!(
                requester = %input.requester,
                mentee_id = %input.mentee_id,
                "Match request filed on behalf of another mentee"
            );
            return Err(CreateMatchRequestError::NotRequestOwner);
        }

        let mentor_id = input.mentor_id;
        let mentee_id = input.mentee_id;

        let mut txn = self.store.begin().await.map_err(|e| {
            error!(mentee_id = %mentee_id, error = %e, "Could not open transaction");
            CreateMatchRequestError::from(e)
        })?;

        match Self::create_in(&mut txn, input).await {
            Ok(created) => {
                txn.commit().await.map_err(|e| {
                    error!(mentee_id = %mentee_id, error = %e, "Commit failed");
                    CreateMatchRequestError::from(e)
                })?;
                info!(
                    request_id = %created.id,
                    mentor_id = %mentor_id,
                    mentee_id = %mentee_id,
                    "Match request created"
                );
                Ok(created)
            }
            Err(e) => {
                if let Err(rb) = txn.rollback().await {
                    error!(mentee_id = %mentee_id, error = %rb, "Rollback failed");
                }
                warn!(mentor_id = %mentor_id, mentee_id = %mentee_id, error = %e, "Match request refused");
                Err(e)
            }
        }
    }
}
