use crate::auth::adapter::outgoing::sea_orm_entity::users::Model as UserModel;
use crate::auth::application::domain::entities::{UserId, UserRole};
use crate::user::application::domain::entities::{Profile, ProfileView};

/// Builds the role-shaped view of a `users` row. Errors describe which column
/// holds an unexpected value.
pub fn to_profile_view(model: UserModel) -> Result<ProfileView, String> {
    let role = model.role.parse::<UserRole>().map_err(|e| e.to_string())?;

    let profile = match role {
        UserRole::Mentor => Profile::Mentor {
            name: model.name,
            bio: model.bio,
            skills: skills_from_json(model.skills)?,
        },
        UserRole::Mentee => Profile::Mentee {
            name: model.name,
            bio: model.bio,
        },
    };

    Ok(ProfileView {
        id: UserId::from(model.id),
        email: model.email,
        profile,
    })
}

pub fn skills_from_json(value: serde_json::Value) -> Result<Vec<String>, String> {
    match value {
        serde_json::Value::Null => Ok(Vec::new()),
        other => serde_json::from_value(other).map_err(|e| format!("skills: {}", e)),
    }
}
