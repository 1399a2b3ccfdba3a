use async_trait::async_trait;
use sea_orm::{ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter};
use std::sync::Arc;

use super::profile_mapper::to_profile_view;
use crate::auth::adapter::outgoing::sea_orm_entity::users::{
    Column as UserColumn, Entity as UserEntity,
};
use crate::auth::application::domain::entities::{Avatar, ImageFormat, UserId, UserRole};
use crate::user::application::domain::entities::ProfileView;
use crate::user::application::ports::outgoing::{AvatarRecord, ProfileQuery, ProfileQueryError};

#[derive(Clone, Debug)]
pub struct ProfileQueryPostgres {
    db: Arc<DatabaseConnection>,
}

impl ProfileQueryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl ProfileQuery for ProfileQueryPostgres {
    async fn find_profile(&self, user_id: UserId) -> Result<Option<ProfileView>, ProfileQueryError> {
        let model = UserEntity::find_by_id(user_id.value())
            .one(&*self.db)
            .await
            .map_err(|e| ProfileQueryError::DatabaseError(e.to_string()))?;

        model
            .map(|m| to_profile_view(m).map_err(ProfileQueryError::CorruptRecord))
            .transpose()
    }

    async fn find_avatar(
        &self,
        user_id: UserId,
        role: UserRole,
    ) -> Result<AvatarRecord, ProfileQueryError> {
        let model = UserEntity::find_by_id(user_id.value())
            .filter(UserColumn::Role.eq(role.as_str()))
            .one(&*self.db)
            .await
            .map_err(|e| ProfileQueryError::DatabaseError(e.to_string()))?;

        let Some(model) = model else {
            return Ok(AvatarRecord::UserNotFound);
        };

        match (model.image_data, model.image_format) {
            (Some(data), Some(format)) if !data.is_empty() => {
                let format = ImageFormat::parse(&format).ok_or_else(|| {
                    ProfileQueryError::CorruptRecord(format!("image_format: {}", format))
                })?;
                Ok(AvatarRecord::Found(Avatar { data, format }))
            }
            _ => Ok(AvatarRecord::NoAvatar),
        }
    }
}
