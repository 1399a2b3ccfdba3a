use async_trait::async_trait;
use sea_orm::ActiveValue::NotSet;
use sea_orm::{ActiveModelTrait, DatabaseConnection, DbErr, Set};
use std::sync::Arc;
use uuid::Uuid;

use super::sea_orm_entity::users::{ActiveModel as UserActiveModel, Model as UserModel};
use crate::auth::application::domain::entities::{UserId, UserRole};
use crate::auth::application::ports::outgoing::{
    CreateUserData, CreatedUser, UserRepository, UserRepositoryError,
};

#[derive(Clone, Debug)]
pub struct UserRepositoryPostgres {
    db: Arc<DatabaseConnection>,
}

impl UserRepositoryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }

    fn map_to_created(model: UserModel, role: UserRole) -> CreatedUser {
        CreatedUser {
            id: UserId::from(model.id),
            email: model.email,
            role,
            name: model.name,
        }
    }
}

fn map_insert_error(e: DbErr) -> UserRepositoryError {
    let msg = e.to_string().to_lowercase();

    if msg.contains("23505") || msg.contains("duplicate key") || msg.contains("unique constraint")
    {
        UserRepositoryError::EmailAlreadyExists
    } else {
        UserRepositoryError::DatabaseError(e.to_string())
    }
}

#[async_trait]
impl UserRepository for UserRepositoryPostgres {
    async fn create_user(&self, data: CreateUserData) -> Result<CreatedUser, UserRepositoryError> {
        let active_user = UserActiveModel {
            id: Set(Uuid::new_v4()),
            email: Set(data.email),
            password_hash: Set(data.password_hash),
            role: Set(data.role.as_str().to_string()),
            name: Set(data.name),
            bio: Set(String::new()),
            image_data: Set(None),
            image_format: Set(None),
            skills: Set(serde_json::json!([])),
            created_at: NotSet,
            updated_at: NotSet,
        };

        let inserted = active_user
            .insert(&*self.db)
            .await
            .map_err(map_insert_error)?;

        Ok(Self::map_to_created(inserted, data.role))
    }
}
