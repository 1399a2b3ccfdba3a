use async_trait::async_trait;
use sea_orm::{ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter};
use std::sync::Arc;

use super::sea_orm_entity::users::{Column as UserColumn, Entity as UserEntity, Model as UserModel};
use crate::auth::application::domain::entities::{UserId, UserRole};
use crate::auth::application::ports::outgoing::{UserCredentials, UserQuery, UserQueryError};

#[derive(Clone, Debug)]
pub struct UserQueryPostgres {
    db: Arc<DatabaseConnection>,
}

impl UserQueryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }

    fn map_to_credentials(model: UserModel) -> Result<UserCredentials, UserQueryError> {
        let role = model
            .role
            .parse::<UserRole>()
            .map_err(|e| UserQueryError::CorruptRecord(e.to_string()))?;

        Ok(UserCredentials {
            id: UserId::from(model.id),
            email: model.email,
            password_hash: model.password_hash,
            role,
            name: model.name,
        })
    }
}

#[async_trait]
impl UserQuery for UserQueryPostgres {
    async fn find_by_email(&self, email: &str) -> Result<Option<UserCredentials>, UserQueryError> {
        let user = UserEntity::find()
            .filter(UserColumn::Email.eq(email.trim().to_lowercase()))
            .one(&*self.db)
            .await
            .map_err(|e| UserQueryError::DatabaseError(e.to_string()))?;

        user.map(Self::map_to_credentials).transpose()
    }
}
