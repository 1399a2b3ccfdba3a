use async_trait::async_trait;
use tracing::error;

use crate::auth::application::domain::entities::UserId;
use crate::user::application::domain::entities::ProfileView;
use crate::user::application::ports::incoming::use_cases::{
    GetMyProfileError, GetMyProfileUseCase,
};
use crate::user::application::ports::outgoing::ProfileQuery;

pub struct GetMyProfileService<Q>
where
    Q: ProfileQuery,
{
    query: Q,
}

impl<Q> GetMyProfileService<Q>
where
    Q: ProfileQuery,
{
    pub fn new(query: Q) -> Self {
        Self { query }
    }
}

#[async_trait]
impl<Q> GetMyProfileUseCase for GetMyProfileService<Q>
where
    Q: ProfileQuery + Send + Sync,
{
    async fn execute(&self, user_id: UserId) -> Result<ProfileView, GetMyProfileError> {
        match self.query.find_profile(user_id).await {
            Ok(Some(view)) => Ok(view),
            Ok(None) => Err(GetMyProfileError::NotFound),
            Err(e) => {
                error!(user_id = %user_id, error = %e, "Failed to load profile");
                Err(GetMyProfileError::QueryError(e.to_string()))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::auth::application::domain::entities::UserRole;
    use crate::user::application::domain::entities::Profile;
    use crate::user::application::ports::outgoing::{AvatarRecord, ProfileQueryError};
    use uuid::Uuid;

    #[derive(Clone)]
    struct MockProfileQuery {
        result: Result<Option<ProfileView>, ProfileQueryError>,
    }

    #[async_trait]
    impl ProfileQuery for MockProfileQuery {
        async fn find_profile(
            &self,
            _user_id: UserId,
        ) -> Result<Option<ProfileView>, ProfileQueryError> {
            self.result.clone()
        }

        async fn find_avatar(
            &self,
            _user_id: UserId,
            _role: UserRole,
        ) -> Result<AvatarRecord, ProfileQueryError> {
            unimplemented!("not used in GetMyProfileService tests")
        }
    }

    fn mentee_view(id: UserId) -> ProfileView {
        ProfileView {
            id,
            email: "mentee@example.com".to_string(),
            profile: Profile::Mentee {
                name: "Mentee".to_string(),
                bio: String::new(),
            },
        }
    }

    #[tokio::test]
    async fn test_returns_profile() {
        let id = UserId::from(Uuid::new_v4());
        let service = GetMyProfileService::new(MockProfileQuery {
            result: Ok(Some(mentee_view(id))),
        });

        let view = service.execute(id).await.unwrap();
        assert_eq!(view.id, id);
        assert_eq!(view.role(), UserRole::Mentee);
    }

    #[tokio::test]
    async fn test_missing_user_is_not_found() {
        let service = GetMyProfileService::new(MockProfileQuery { result: Ok(None) });

        let err = service
            .execute(UserId::from(Uuid::new_v4()))
            .await
            .unwrap_err();
        assert!(matches!(err, GetMyProfileError::NotFound));
    }

    #[tokio::test]
    async fn test_query_error_is_propagated() {
        let service = GetMyProfileService::new(MockProfileQuery {
            result: Err(ProfileQueryError::DatabaseError("boom".to_string())),
        });

        let err = service
            .execute(UserId::from(Uuid::new_v4()))
            .await
            .unwrap_err();
        assert!(matches!(err, GetMyProfileError::QueryError(msg) if msg.contains("boom")));
    }
}
