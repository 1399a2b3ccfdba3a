use tracing::{error, info, warn};
use uuid::Uuid;

use crate::auth::application::domain::entities::{UserId, UserRole};
use crate::matching::application::domain::entities::{MatchRequest, MatchStatus};
use crate::matching::application::ports::incoming::use_cases::TransitionError;
use crate::matching::application::ports::outgoing::{
    MatchRequestStore, MatchRequestTxn, MatchStoreError,
};

impl From<MatchStoreError> for TransitionError {
    fn from(e: MatchStoreError) -> Self {
        match e {
            MatchStoreError::MentorAccepted => TransitionError::MentorAlreadyMatched,
            MatchStoreError::Unavailable(msg) => TransitionError::StoreUnavailable(msg),
            other => TransitionError::RepositoryError(other.to_string()),
        }
    }
}

/// Moves a pending request owned by `actor` to `next` inside one transaction.
///
/// The request row is locked before its status is checked, so of two racing
/// transitions the second sees the first one's result and fails with
/// `NotPending`. Accepting additionally locks the mentor's user row, which
/// serialises all accepts of one mentor.
pub(super) async fn transition<S>(
    store: &S,
    actor: UserId,
    request_id: Uuid,
    next: MatchStatus,
) -> Result<MatchRequest, TransitionError>
where
    S: MatchRequestStore,
{
    let mut txn = store.begin().await.map_err(|e| {
        error!(request_id = %request_id, error = %e, "Could not open transaction");
        TransitionError::from(e)
    })?;

    match apply(&mut txn, actor, request_id, next).await {
        Ok(updated) => {
            txn.commit().await.map_err(|e| {
                error!(request_id = %request_id, error = %e, "Commit failed");
                TransitionError::from(e)
            })?;
            info!(request_id = %request_id, actor = %actor, status = %next, "Match request updated");
            Ok(updated)
        }
        Err(e) => {
            if let Err(rb) = txn.rollback().await {
                error!(request_id = %request_id, error = %rb, "Rollback failed");
            }
            match &e {
                TransitionError::StoreUnavailable(_) | TransitionError::RepositoryError(_) => {
                    error!(request_id = %request_id, error = %e, "Match request update failed")
                }
                _ => warn!(request_id = %request_id, actor = %actor, error = %e, "Match request update rejected"),
            }
            Err(e)
        }
    }
}

async fn apply<T>(
    txn: &mut T,
    actor: UserId,
    request_id: Uuid,
    next: MatchStatus,
) -> Result<MatchRequest, TransitionError>
where
    T: MatchRequestTxn,
{
    let acting_as_mentor = next != MatchStatus::Cancelled;

    if next == MatchStatus::Accepted && txn.lock_user_role(actor).await? != Some(UserRole::Mentor) {
        return Err(TransitionError::NotFound);
    }

    let request = txn
        .lock_request(request_id)
        .await?
        .filter(|r| {
            let owner = if acting_as_mentor { r.mentor_id } else { r.mentee_id };
            owner == actor
        })
        .ok_or(TransitionError::NotFound)?;

    if !request.status.can_transition_to(next) {
        return Err(TransitionError::NotPending(request.status));
    }

    if next == MatchStatus::Accepted && txn.find_accepted_by_mentor(actor).await?.is_some() {
        return Err(TransitionError::MentorAlreadyMatched);
    }

    Ok(txn.update_status(request_id, next).await?)
}
