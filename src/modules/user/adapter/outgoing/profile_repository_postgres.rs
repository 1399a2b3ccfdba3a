use async_trait::async_trait;
use sea_orm::{ActiveModelTrait, DatabaseConnection, EntityTrait, IntoActiveModel, Set};
use std::sync::Arc;

use super::profile_mapper::to_profile_view;
use crate::auth::adapter::outgoing::sea_orm_entity::users::Entity as UserEntity;
use crate::user::application::domain::entities::ProfileView;
use crate::user::application::ports::outgoing::{
    ProfileRepository, ProfileRepositoryError, UpdateProfileData,
};

#[derive(Clone, Debug)]
pub struct ProfileRepositoryPostgres {
    db: Arc<DatabaseConnection>,
}

impl ProfileRepositoryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl ProfileRepository for ProfileRepositoryPostgres {
    async fn update_profile(
        &self,
        data: UpdateProfileData,
    ) -> Result<ProfileView, ProfileRepositoryError> {
        let existing = UserEntity::find_by_id(data.user_id.value())
            .one(&*self.db)
            .await
            .map_err(|e| ProfileRepositoryError::DatabaseError(e.to_string()))?
            .ok_or(ProfileRepositoryError::NotFound)?;

        let mut active = existing.into_active_model();
        active.name = Set(data.name);
        active.bio = Set(data.bio);

        if let Some(skills) = data.skills {
            active.skills = Set(serde_json::json!(skills));
        }

        if let Some(avatar) = data.avatar {
            active.image_format = Set(Some(avatar.format.as_str().to_string()));
            active.image_data = Set(Some(avatar.data));
        }

        let updated = active
            .update(&*self.db)
            .await
            .map_err(|e| ProfileRepositoryError::DatabaseError(e.to_string()))?;

        to_profile_view(updated).map_err(ProfileRepositoryError::DatabaseError)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::auth::application::domain::entities::{Avatar, ImageFormat, UserId};
    use crate::tests::support::fixtures::user_model;
    use crate::user::application::domain::entities::Profile;
    use sea_orm::{DatabaseBackend, DbErr, MockDatabase};
    use uuid::Uuid;

    #[tokio::test]
    async fn test_update_mentor_profile() {
        let id = Uuid::new_v4();
        let before = user_model(id, "mentor", "Grace", &[]);
        let mut after = user_model(id, "mentor", "Grace Hopper", &["cobol", "rust"]);
        after.bio = "Admiral".to_string();
        after.image_data = Some(vec![1, 2, 3]);
        after.image_format = Some("jpeg".to_string());

        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results(vec![vec![before]])
            .append_query_results(vec![vec![after]])
            .into_connection();

        let repo = ProfileRepositoryPostgres::new(Arc::new(db));
        let view = repo
            .update_profile(UpdateProfileData {
                user_id: UserId::from(id),
                name: "Grace Hopper".to_string(),
                bio: "Admiral".to_string(),
                skills: Some(vec!["cobol".to_string(), "rust".to_string()]),
                avatar: Some(Avatar {
                    data: vec![1, 2, 3],
                    format: ImageFormat::Jpeg,
                }),
            })
            .await
            .unwrap();

        assert_eq!(
            view.profile,
            Profile::Mentor {
                name: "Grace Hopper".to_string(),
                bio: "Admiral".to_string(),
                skills: vec!["cobol".to_string(), "rust".to_string()],
            }
        );
    }

    #[tokio::test]
    async fn test_update_missing_user() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results(vec![Vec::<
                crate::auth::adapter::outgoing::sea_orm_entity::users::Model,
            >::new()])
            .into_connection();

        let result = ProfileRepositoryPostgres::new(Arc::new(db))
            .update_profile(UpdateProfileData {
                user_id: UserId::from(Uuid::new_v4()),
                name: "Nobody".to_string(),
                bio: String::new(),
                skills: None,
                avatar: None,
            })
            .await;

        assert!(matches!(result, Err(ProfileRepositoryError::NotFound)));
    }

    #[tokio::test]
    async fn test_update_database_error() {
        let id = Uuid::new_v4();
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results(vec![vec![user_model(id, "mentee", "Eve", &[])]])
            .append_query_errors(vec![DbErr::Custom("deadlock detected".to_string())])
            .into_connection();

        let result = ProfileRepositoryPostgres::new(Arc::new(db))
            .update_profile(UpdateProfileData {
                user_id: UserId::from(id),
                name: "Eve".to_string(),
                bio: String::new(),
                skills: None,
                avatar: None,
            })
            .await;

        assert!(matches!(result, Err(ProfileRepositoryError::DatabaseError(msg)) if msg.contains("deadlock")));
    }
}
