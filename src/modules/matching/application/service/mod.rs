mod accept_match_request_service;
mod cancel_match_request_service;
mod create_match_request_service;
mod list_match_requests_service;
mod reject_match_request_service;
mod transition;

pub use accept_match_request_service::AcceptMatchRequestService;
pub use cancel_match_request_service::CancelMatchRequestService;
pub use create_match_request_service::CreateMatchRequestService;
pub use list_match_requests_service::{ListIncomingRequestsService, ListOutgoingRequestsService};
pub use reject_match_request_service::RejectMatchRequestService;
