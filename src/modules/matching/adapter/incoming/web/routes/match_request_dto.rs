use chrono::{DateTime, Utc};
use serde::Serialize;
use utoipa::ToSchema;
use uuid::Uuid;

use crate::matching::application::domain::entities::{MatchRequest, MatchStatus};

#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct MatchRequestResponse {
    pub id: Uuid,
    pub mentor_id: Uuid,
    pub mentee_id: Uuid,
    pub message: String,
    pub status: MatchStatus,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<MatchRequest> for MatchRequestResponse {
    fn from(r: MatchRequest) -> Self {
        Self {
            id: r.id,
            mentor_id: r.mentor_id.value(),
            mentee_id: r.mentee_id.value(),
            message: r.message,
            status: r.status,
            created_at: r.created_at,
            updated_at: r.updated_at,
        }
    }
}

/// A mentee's own request as listed back to them; the message is left out.
#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct OutgoingMatchRequestResponse {
    pub id: Uuid,
    pub mentor_id: Uuid,
    pub mentee_id: Uuid,
    pub status: MatchStatus,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<MatchRequest> for OutgoingMatchRequestResponse {
    fn from(r: MatchRequest) -> Self {
        Self {
            id: r.id,
            mentor_id: r.mentor_id.value(),
            mentee_id: r.mentee_id.value(),
            status: r.status,
            created_at: r.created_at,
            updated_at: r.updated_at,
        }
    }
}
