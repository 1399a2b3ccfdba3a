use async_trait::async_trait;
use chrono::Utc;
use sea_orm::ActiveValue::Set;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, DatabaseTransaction, DbErr, EntityTrait,
    IntoActiveModel, QueryFilter, QuerySelect, TransactionTrait,
};
use std::sync::Arc;
use uuid::Uuid;

use crate::auth::adapter::outgoing::sea_orm_entity::users;
use crate::auth::application::domain::entities::{UserId, UserRole};
use crate::matching::adapter::outgoing::match_request_mapper::to_match_request;
use crate::matching::adapter::outgoing::sea_orm_entity::match_requests::{
    self, ActiveModel, Column, Entity as MatchRequestEntity,
};
use crate::matching::application::domain::entities::{MatchRequest, MatchStatus, NewMatchRequest};
use crate::matching::application::ports::outgoing::{
    MatchRequestStore, MatchRequestTxn, MatchStoreError,
};

// Names of the partial unique indexes created by the match_requests migration.
const PAIR_ACTIVE_INDEX: &str = "uq_match_requests_pair_active";
const MENTEE_PENDING_INDEX: &str = "uq_match_requests_mentee_pending";
const MENTOR_ACCEPTED_INDEX: &str = "uq_match_requests_mentor_accepted";

/// Classifies a database error. Unique-index violations become the matching
/// conflict; lost or exhausted connections become `Unavailable`.
pub fn map_db_err(e: DbErr) -> MatchStoreError {
    if matches!(e, DbErr::ConnectionAcquire(_) | DbErr::Conn(_)) {
        return MatchStoreError::Unavailable(e.to_string());
    }

    let msg = e.to_string();
    if msg.contains(PAIR_ACTIVE_INDEX) {
        MatchStoreError::PairActive
    } else if msg.contains(MENTEE_PENDING_INDEX) {
        MatchStoreError::MenteePending
    } else if msg.contains(MENTOR_ACCEPTED_INDEX) {
        MatchStoreError::MentorAccepted
    } else {
        MatchStoreError::Database(msg)
    }
}

fn map_row(model: match_requests::Model) -> Result<MatchRequest, MatchStoreError> {
    to_match_request(model).map_err(MatchStoreError::Database)
}

fn map_role(model: Option<users::Model>) -> Result<Option<UserRole>, MatchStoreError> {
    model
        .map(|m| m.role.parse::<UserRole>().map_err(|e| MatchStoreError::Database(e.to_string())))
        .transpose()
}

#[derive(Clone, Debug)]
pub struct MatchRequestStorePostgres {
    db: Arc<DatabaseConnection>,
}

impl MatchRequestStorePostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl MatchRequestStore for MatchRequestStorePostgres {
    type Txn = PostgresMatchTxn;

    async fn begin(&self) -> Result<Self::Txn, MatchStoreError> {
        let txn = self.db.begin().await.map_err(map_db_err)?;
        Ok(PostgresMatchTxn { txn })
    }
}

pub struct PostgresMatchTxn {
    txn: DatabaseTransaction,
}

impl PostgresMatchTxn {
    async fn first(
        &self,
        query: sea_orm::Select<MatchRequestEntity>,
    ) -> Result<Option<MatchRequest>, MatchStoreError> {
        query
            .one(&self.txn)
            .await
            .map_err(map_db_err)?
            .map(map_row)
            .transpose()
    }
}

#[async_trait]
impl MatchRequestTxn for PostgresMatchTxn {
    async fn lock_user_role(&mut self, user_id: UserId) -> Result<Option<UserRole>, MatchStoreError> {
        let model = users::Entity::find_by_id(user_id.value())
            .lock_exclusive()
            .one(&self.txn)
            .await
            .map_err(map_db_err)?;
        map_role(model)
    }

    async fn find_user_role(&mut self, user_id: UserId) -> Result<Option<UserRole>, MatchStoreError> {
        let model = users::Entity::find_by_id(user_id.value())
            .one(&self.txn)
            .await
            .map_err(map_db_err)?;
        map_role(model)
    }

    async fn find_active_between(
        &mut self,
        mentor_id: UserId,
        mentee_id: UserId,
    ) -> Result<Option<MatchRequest>, MatchStoreError> {
        self.first(
            MatchRequestEntity::find()
                .filter(Column::MentorId.eq(mentor_id.value()))
                .filter(Column::MenteeId.eq(mentee_id.value()))
                .filter(Column::Status.is_in([
                    MatchStatus::Pending.as_str(),
                    MatchStatus::Accepted.as_str(),
                ])),
        )
        .await
    }

    async fn find_pending_by_mentee(
        &mut self,
        mentee_id: UserId,
    ) -> Result<Option<MatchRequest>, MatchStoreError> {
        self.first(
            MatchRequestEntity::find()
                .filter(Column::MenteeId.eq(mentee_id.value()))
                .filter(Column::Status.eq(MatchStatus::Pending.as_str())),
        )
        .await
    }

    async fn find_accepted_by_mentor(
        &mut self,
        mentor_id: UserId,
    ) -> Result<Option<MatchRequest>, MatchStoreError> {
        self.first(
            MatchRequestEntity::find()
                .filter(Column::MentorId.eq(mentor_id.value()))
                .filter(Column::Status.eq(MatchStatus::Accepted.as_str())),
        )
        .await
    }

    async fn lock_request(&mut self, id: Uuid) -> Result<Option<MatchRequest>, MatchStoreError> {
        self.first(MatchRequestEntity::find_by_id(id).lock_exclusive())
            .await
    }

    async fn insert(&mut self, new: NewMatchRequest) -> Result<MatchRequest, MatchStoreError> {
        let now = Utc::now().fixed_offset();

        let model = ActiveModel {
            id: Set(Uuid::new_v4()),
            mentor_id: Set(new.mentor_id.value()),
            mentee_id: Set(new.mentee_id.value()),
            message: Set(new.message),
            status: Set(MatchStatus::Pending.as_str().to_string()),
            created_at: Set(now),
            updated_at: Set(now),
        }
        .insert(&self.txn)
        .await
        .map_err(map_db_err)?;

        map_row(model)
    }

    async fn update_status(
        &mut self,
        id: Uuid,
        status: MatchStatus,
    ) -> Result<MatchRequest, MatchStoreError> {
        let existing = MatchRequestEntity::find_by_id(id)
            .one(&self.txn)
            .await
            .map_err(map_db_err)?
            .ok_or_else(|| MatchStoreError::Database(format!("match request {id} vanished")))?;

        let mut active = existing.into_active_model();
        active.status = Set(status.as_str().to_string());
        active.updated_at = Set(Utc::now().fixed_offset());

        let updated = active.update(&self.txn).await.map_err(map_db_err)?;
        map_row(updated)
    }

    async fn commit(self) -> Result<(), MatchStoreError> {
        self.txn.commit().await.map_err(map_db_err)
    }

    async fn rollback(self) -> Result<(), MatchStoreError> {
        self.txn.rollback().await.map_err(map_db_err)
    }
}
