use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use utoipa::ToSchema;
use uuid::Uuid;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct UserId(Uuid);

impl UserId {
    pub fn value(&self) -> Uuid {
        self.0
    }
}

impl From<Uuid> for UserId {
    fn from(id: Uuid) -> Self {
        Self(id)
    }
}

impl From<UserId> for Uuid {
    fn from(id: UserId) -> Self {
        id.0
    }
}

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Fixed at signup, never changes afterwards.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum UserRole {
    Mentor,
    Mentee,
}

impl UserRole {
    pub fn as_str(&self) -> &'static str {
        match self {
            UserRole::Mentor => "mentor",
            UserRole::Mentee => "mentee",
        }
    }
}

impl fmt::Display for UserRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Unknown role: {0}")]
pub struct UnknownRole(pub String);

impl FromStr for UserRole {
    type Err = UnknownRole;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "mentor" => Ok(UserRole::Mentor),
            "mentee" => Ok(UserRole::Mentee),
            other => Err(UnknownRole(other.to_string())),
        }
    }
}

/// The authenticated caller, with the role carried in the variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Actor {
    Mentor(UserId),
    Mentee(UserId),
}

impl Actor {
    pub fn new(user_id: UserId, role: UserRole) -> Self {
        match role {
            UserRole::Mentor => Actor::Mentor(user_id),
            UserRole::Mentee => Actor::Mentee(user_id),
        }
    }

    pub fn user_id(&self) -> UserId {
        match self {
            Actor::Mentor(id) | Actor::Mentee(id) => *id,
        }
    }

    pub fn role(&self) -> UserRole {
        match self {
            Actor::Mentor(_) => UserRole::Mentor,
            Actor::Mentee(_) => UserRole::Mentee,
        }
    }
}

/// Stored avatar image.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ImageFormat {
    Jpeg,
    Png,
}

impl ImageFormat {
    pub fn as_str(&self) -> &'static str {
        match self {
            ImageFormat::Jpeg => "jpeg",
            ImageFormat::Png => "png",
        }
    }

    pub fn content_type(&self) -> &'static str {
        match self {
            ImageFormat::Jpeg => "image/jpeg",
            ImageFormat::Png => "image/png",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "jpeg" | "jpg" => Some(ImageFormat::Jpeg),
            "png" => Some(ImageFormat::Png),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Avatar {
    pub data: Vec<u8>,
    pub format: ImageFormat,
}
