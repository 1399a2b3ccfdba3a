use crate::auth::application::domain::entities::{UserId, UserRole};

pub const MAX_NAME_LEN: usize = 100;

/// Role-shaped profile fields. Only mentors carry skills.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Profile {
    Mentor {
        name: String,
        bio: String,
        skills: Vec<String>,
    },
    Mentee {
        name: String,
        bio: String,
    },
}

impl Profile {
    pub fn role(&self) -> UserRole {
        match self {
            Profile::Mentor { .. } => UserRole::Mentor,
            Profile::Mentee { .. } => UserRole::Mentee,
        }
    }

    pub fn name(&self) -> &str {
        match self {
            Profile::Mentor { name, .. } | Profile::Mentee { name, .. } => name,
        }
    }

    pub fn bio(&self) -> &str {
        match self {
            Profile::Mentor { bio, .. } | Profile::Mentee { bio, .. } => bio,
        }
    }

    pub fn skills(&self) -> Option<&[String]> {
        match self {
            Profile::Mentor { skills, .. } => Some(skills),
            Profile::Mentee { .. } => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProfileView {
    pub id: UserId,
    pub email: String,
    pub profile: Profile,
}

impl ProfileView {
    pub fn role(&self) -> UserRole {
        self.profile.role()
    }

    /// Avatars are always served through the image route, which redirects to
    /// a placeholder when nothing is stored.
    pub fn image_url(&self) -> String {
        format!("/api/images/{}/{}", self.role(), self.id)
    }
}

/// Trims entries, drops blanks and keeps the first occurrence of each skill.
pub fn normalize_skills<I, S>(skills: I) -> Vec<String>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut out: Vec<String> = Vec::new();

    for skill in skills {
        let skill = skill.as_ref().trim();
        if skill.is_empty() || out.iter().any(|s| s == skill) {
            continue;
        }
        out.push(skill.to_string());
    }

    out
}

/// Returns the trimmed name, or a message describing why it is unusable.
pub fn normalize_name(name: &str) -> Result<String, String> {
    let name = name.trim();

    if name.is_empty() {
        return Err("Name cannot be empty".to_string());
    }
    if name.chars().count() > MAX_NAME_LEN {
        return Err(format!("Name must be at most {} characters", MAX_NAME_LEN));
    }

    Ok(name.to_string())
}
