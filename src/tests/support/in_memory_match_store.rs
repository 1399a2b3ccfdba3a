use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;
use tokio::sync::{Mutex, OwnedMutexGuard};
use uuid::Uuid;

use crate::auth::application::domain::entities::{UserId, UserRole};
use crate::matching::application::domain::entities::{MatchRequest, MatchStatus, NewMatchRequest};
use crate::matching::application::ports::outgoing::{
    MatchQueryError, MatchRequestQuery, MatchRequestStore, MatchRequestTxn, MatchStoreError,
};

#[derive(Debug, Clone, Default)]
pub struct StoreState {
    pub users: HashMap<UserId, UserRole>,
    pub requests: Vec<MatchRequest>,
}

impl StoreState {
    /// Same rules as the partial unique indexes on `match_requests`.
    fn check_unique(&self) -> Result<(), MatchStoreError> {
        for (i, a) in self.requests.iter().enumerate() {
            for b in self.requests.iter().skip(i + 1) {
                if a.mentor_id == b.mentor_id
                    && a.mentee_id == b.mentee_id
                    && a.status.is_active()
                    && b.status.is_active()
                {
                    return Err(MatchStoreError::PairActive);
                }
                if a.mentee_id == b.mentee_id
                    && a.status == MatchStatus::Pending
                    && b.status == MatchStatus::Pending
                {
                    return Err(MatchStoreError::MenteePending);
                }
                if a.mentor_id == b.mentor_id
                    && a.status == MatchStatus::Accepted
                    && b.status == MatchStatus::Accepted
                {
                    return Err(MatchStoreError::MentorAccepted);
                }
            }
        }
        Ok(())
    }

    fn find(&self, pred: impl Fn(&MatchRequest) -> bool) -> Option<MatchRequest> {
        self.requests.iter().find(|r| pred(r)).cloned()
    }
}

/// Transactional store held in memory. A transaction owns the whole state
/// until it commits or rolls back, so concurrent transactions run one after
/// another the way row locks serialise them in Postgres.
#[derive(Clone, Default)]
pub struct InMemoryMatchStore {
    state: Arc<Mutex<StoreState>>,
    begin_error: Arc<std::sync::Mutex<Option<MatchStoreError>>>,
}

impl InMemoryMatchStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn add_user(&self, role: UserRole) -> UserId {
        let id = UserId::from(Uuid::new_v4());
        self.state.lock().await.users.insert(id, role);
        id
    }

    pub async fn seed_request(&self, mentor_id: UserId, mentee_id: UserId, status: MatchStatus) -> Uuid {
        let now = Utc::now();
        let id = Uuid::new_v4();
        self.state.lock().await.requests.push(MatchRequest {
            id,
            mentor_id,
            mentee_id,
            message: "seeded".to_string(),
            status,
            created_at: now,
            updated_at: now,
        });
        id
    }

    pub async fn request(&self, id: Uuid) -> Option<MatchRequest> {
        self.state.lock().await.find(|r| r.id == id)
    }

    pub async fn snapshot(&self) -> StoreState {
        self.state.lock().await.clone()
    }

    /// Makes the next `begin` fail with `err`.
    pub fn fail_next_begin(&self, err: MatchStoreError) {
        if let Ok(mut slot) = self.begin_error.lock() {
            *slot = Some(err);
        }
    }
}

pub struct InMemoryTxn {
    guard: OwnedMutexGuard<StoreState>,
    work: StoreState,
}

#[async_trait]
impl MatchRequestStore for InMemoryMatchStore {
    type Txn = InMemoryTxn;

    async fn begin(&self) -> Result<Self::Txn, MatchStoreError> {
        let injected = self.begin_error.lock().ok().and_then(|mut slot| slot.take());
        if let Some(err) = injected {
            return Err(err);
        }

        let guard = self.state.clone().lock_owned().await;
        let work = guard.clone();
        Ok(InMemoryTxn { guard, work })
    }
}

#[async_trait]
impl MatchRequestTxn for InMemoryTxn {
    async fn lock_user_role(&mut self, user_id: UserId) -> Result<Option<UserRole>, MatchStoreError> {
        Ok(self.work.users.get(&user_id).copied())
    }

    async fn find_user_role(&mut self, user_id: UserId) -> Result<Option<UserRole>, MatchStoreError> {
        Ok(self.work.users.get(&user_id).copied())
    }

    async fn find_active_between(
        &mut self,
        mentor_id: UserId,
        mentee_id: UserId,
    ) -> Result<Option<MatchRequest>, MatchStoreError> {
        Ok(self.work.find(|r| {
            r.mentor_id == mentor_id && r.mentee_id == mentee_id && r.status.is_active()
        }))
    }

    async fn find_pending_by_mentee(
        &mut self,
        mentee_id: UserId,
    ) -> Result<Option<MatchRequest>, MatchStoreError> {
        Ok(self
            .work
            .find(|r| r.mentee_id == mentee_id && r.status == MatchStatus::Pending))
    }

    async fn find_accepted_by_mentor(
        &mut self,
        mentor_id: UserId,
    ) -> Result<Option<MatchRequest>, MatchStoreError> {
        Ok(self
            .work
            .find(|r| r.mentor_id == mentor_id && r.status == MatchStatus::Accepted))
    }

    async fn lock_request(&mut self, id: Uuid) -> Result<Option<MatchRequest>, MatchStoreError> {
        Ok(self.work.find(|r| r.id == id))
    }

    async fn insert(&mut self, new: NewMatchRequest) -> Result<MatchRequest, MatchStoreError> {
        let now = Utc::now();
        let created = MatchRequest {
            id: Uuid::new_v4(),
            mentor_id: new.mentor_id,
            mentee_id: new.mentee_id,
            message: new.message,
            status: MatchStatus::Pending,
            created_at: now,
            updated_at: now,
        };

        self.work.requests.push(created.clone());
        if let Err(e) = self.work.check_unique() {
            self.work.requests.pop();
            return Err(e);
        }

        Ok(created)
    }

    async fn update_status(
        &mut self,
        id: Uuid,
        status: MatchStatus,
    ) -> Result<MatchRequest, MatchStoreError> {
        let idx = self
            .work
            .requests
            .iter()
            .position(|r| r.id == id)
            .ok_or_else(|| MatchStoreError::Database("row vanished".to_string()))?;

        let previous = self.work.requests[idx].clone();
        self.work.requests[idx].status = status;
        self.work.requests[idx].updated_at = Utc::now();

        if let Err(e) = self.work.check_unique() {
            self.work.requests[idx] = previous;
            return Err(e);
        }

        Ok(self.work.requests[idx].clone())
    }

    async fn commit(mut self) -> Result<(), MatchStoreError> {
        *self.guard = self.work;
        Ok(())
    }

    async fn rollback(self) -> Result<(), MatchStoreError> {
        Ok(())
    }
}

#[async_trait]
impl MatchRequestQuery for InMemoryMatchStore {
    async fn list_incoming(&self, mentor_id: UserId) -> Result<Vec<MatchRequest>, MatchQueryError> {
        let state = self.state.lock().await;
        Ok(state
            .requests
            .iter()
            .filter(|r| r.mentor_id == mentor_id)
            .cloned()
            .collect())
    }

    async fn list_outgoing(&self, mentee_id: UserId) -> Result<Vec<MatchRequest>, MatchQueryError> {
        let state = self.state.lock().await;
        Ok(state
            .requests
            .iter()
            .filter(|r| r.mentee_id == mentee_id)
            .cloned()
            .collect())
    }
}
