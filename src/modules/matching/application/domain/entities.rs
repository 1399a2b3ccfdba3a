use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use utoipa::ToSchema;
use uuid::Uuid;

use crate::auth::application::domain::entities::UserId;

/// `pending` is the only state with outgoing transitions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum MatchStatus {
    Pending,
    Accepted,
    Rejected,
    Cancelled,
}

impl MatchStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            MatchStatus::Pending => "pending",
            MatchStatus::Accepted => "accepted",
            MatchStatus::Rejected => "rejected",
            MatchStatus::Cancelled => "cancelled",
        }
    }

    pub fn is_terminal(&self) -> bool {
        !matches!(self, MatchStatus::Pending)
    }

    /// Pending or accepted; at most one per mentor/mentee pair.
    pub fn is_active(&self) -> bool {
        matches!(self, MatchStatus::Pending | MatchStatus::Accepted)
    }

    pub fn can_transition_to(&self, next: MatchStatus) -> bool {
        matches!(
            (self, next),
            (
                MatchStatus::Pending,
                MatchStatus::Accepted | MatchStatus::Rejected | MatchStatus::Cancelled
            )
        )
    }
}

impl fmt::Display for MatchStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Unknown match status: {0}")]
pub struct UnknownStatus(pub String);

impl FromStr for MatchStatus {
    type Err = UnknownStatus;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "pending" => Ok(MatchStatus::Pending),
            "accepted" => Ok(MatchStatus::Accepted),
            "rejected" => Ok(MatchStatus::Rejected),
            "cancelled" => Ok(MatchStatus::Cancelled),
            other => Err(UnknownStatus(other.to_string())),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MatchRequest {
    pub id: Uuid,
    pub mentor_id: UserId,
    pub mentee_id: UserId,
    pub message: String,
    pub status: MatchStatus,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewMatchRequest {
    pub mentor_id: UserId,
    pub mentee_id: UserId,
    pub message: String,
}
