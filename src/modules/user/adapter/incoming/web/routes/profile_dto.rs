use serde::Serialize;
use utoipa::ToSchema;

use crate::auth::application::domain::entities::UserRole;
use crate::user::application::domain::entities::ProfileView;

/// Profile as returned by `/api/me`, `/api/profile` and the mentor directory.
#[derive(Debug, Serialize, ToSchema)]
pub struct ProfileResponse {
    #[schema(example = "123e4567-e89b-12d3-a456-426614174000")]
    pub id: String,
    pub email: String,
    pub role: UserRole,
    pub profile: ProfileDetails,
}

#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ProfileDetails {
    pub name: String,
    pub bio: String,
    #[schema(example = "/api/images/mentor/123e4567-e89b-12d3-a456-426614174000")]
    pub image_url: String,
    /// Mentors only
    #[serde(skip_serializing_if = "Option::is_none")]
    pub skills: Option<Vec<String>>,
}

impl From<ProfileView> for ProfileResponse {
    fn from(view: ProfileView) -> Self {
        let image_url = view.image_url();
        let role = view.role();

        ProfileResponse {
            id: view.id.to_string(),
            email: view.email,
            role,
            profile: ProfileDetails {
                name: view.profile.name().to_string(),
                bio: view.profile.bio().to_string(),
                image_url,
                skills: view.profile.skills().map(|s| s.to_vec()),
            },
        }
    }
}
