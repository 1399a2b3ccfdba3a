use async_trait::async_trait;
use sea_orm::{ColumnTrait, DatabaseConnection, DbErr, EntityTrait, QueryFilter, QueryOrder};
use std::sync::Arc;

use crate::auth::application::domain::entities::UserId;
use crate::matching::adapter::outgoing::match_request_mapper::to_match_request;
use crate::matching::adapter::outgoing::sea_orm_entity::match_requests::{
    Column, Entity as MatchRequestEntity,
};
use crate::matching::application::domain::entities::MatchRequest;
use crate::matching::application::ports::outgoing::{MatchQueryError, MatchRequestQuery};

#[derive(Clone, Debug)]
pub struct MatchRequestQueryPostgres {
    db: Arc<DatabaseConnection>,
}

impl MatchRequestQueryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }

    fn map_err(e: DbErr) -> MatchQueryError {
        match e {
            DbErr::ConnectionAcquire(_) | DbErr::Conn(_) => MatchQueryError::Unavailable(e.to_string()),
            other => MatchQueryError::DatabaseError(other.to_string()),
        }
    }

    async fn list_by(&self, column: Column, user_id: UserId) -> Result<Vec<MatchRequest>, MatchQueryError> {
        let models = MatchRequestEntity::find()
            .filter(column.eq(user_id.value()))
            .order_by_desc(Column::CreatedAt)
            .order_by_asc(Column::Id)
            .all(&*self.db)
            .await
            .map_err(Self::map_err)?;

        models
            .into_iter()
            .map(|m| to_match_request(m).map_err(MatchQueryError::DatabaseError))
            .collect()
    }
}

#[async_trait]
impl MatchRequestQuery for MatchRequestQueryPostgres {
    async fn list_incoming(&self, mentor_id: UserId) -> Result<Vec<MatchRequest>, MatchQueryError> {
        self.list_by(Column::MentorId, mentor_id).await
    }

    async fn list_outgoing(&self, mentee_id: UserId) -> Result<Vec<MatchRequest>, MatchQueryError> {
        self.list_by(Column::MenteeId, mentee_id).await
    }
}
