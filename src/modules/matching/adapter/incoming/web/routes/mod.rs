mod create_match_request;
mod list_match_requests;
mod match_request_dto;
mod transition_match_request;

pub use create_match_request::*;
pub use list_match_requests::*;
pub use match_request_dto::*;
pub use transition_match_request::*;
