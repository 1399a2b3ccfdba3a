use async_trait::async_trait;
use sea_orm::{ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder};
use std::sync::Arc;

use crate::auth::adapter::outgoing::sea_orm_entity::users::{
    Column as UserColumn, Entity as UserEntity, Model as UserModel,
};
use crate::auth::application::domain::entities::{UserId, UserRole};
use crate::mentor::application::domain::directory::MentorSummary;
use crate::mentor::application::ports::outgoing::{MentorQuery, MentorQueryError};
use crate::user::adapter::outgoing::profile_mapper::skills_from_json;

#[derive(Clone, Debug)]
pub struct MentorQueryPostgres {
    db: Arc<DatabaseConnection>,
}

impl MentorQueryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }

    fn map_to_summary(model: UserModel) -> Result<MentorSummary, MentorQueryError> {
        let skills = skills_from_json(model.skills).map_err(MentorQueryError::CorruptRecord)?;

        Ok(MentorSummary {
            id: UserId::from(model.id),
            email: model.email,
            name: model.name,
            bio: model.bio,
            skills,
        })
    }
}

#[async_trait]
impl MentorQuery for MentorQueryPostgres {
    async fn list_mentors(&self) -> Result<Vec<MentorSummary>, MentorQueryError> {
        let models = UserEntity::find()
            .filter(UserColumn::Role.eq(UserRole::Mentor.as_str()))
            .order_by_asc(UserColumn::CreatedAt)
            .order_by_asc(UserColumn::Id)
            .all(&*self.db)
            .await
            .map_err(|e| MentorQueryError::DatabaseError(e.to_string()))?;

        models.into_iter().map(Self::map_to_summary).collect()
    }
}
