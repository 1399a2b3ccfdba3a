use crate::auth::application::domain::entities::UserId;
use crate::matching::adapter::outgoing::sea_orm_entity::match_requests::Model;
use crate::matching::application::domain::entities::{MatchRequest, MatchStatus};

pub fn to_match_request(model: Model) -> Result<MatchRequest, String> {
    let status: MatchStatus = model.status.parse().map_err(|e| format!("{e}"))?;

    Ok(MatchRequest {
        id: model.id,
        mentor_id: UserId::from(model.mentor_id),
        mentee_id: UserId::from(model.mentee_id),
        message: model.message,
        status,
        created_at: model.created_at.to_utc(),
        updated_at: model.updated_at.to_utc(),
    })
}
