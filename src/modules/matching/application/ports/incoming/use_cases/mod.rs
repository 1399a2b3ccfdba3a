mod create_match_request;
mod list_match_requests;
mod transition_match_request;

pub use create_match_request::{
    CreateMatchRequestError, CreateMatchRequestInput, CreateMatchRequestUseCase,
};
pub use list_match_requests::{
    ListIncomingRequestsUseCase, ListMatchRequestsError, ListOutgoingRequestsUseCase,
};
pub use transition_match_request::{
    AcceptMatchRequestUseCase, CancelMatchRequestUseCase, RejectMatchRequestUseCase,
    TransitionError,
};
