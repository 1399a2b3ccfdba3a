use std::sync::Arc;

use crate::matching::application::ports::incoming::use_cases::{
    AcceptMatchRequestUseCase, CancelMatchRequestUseCase, CreateMatchRequestUseCase,
    ListIncomingRequestsUseCase, ListOutgoingRequestsUseCase, RejectMatchRequestUseCase,
};

#[derive(Clone)]
pub struct MatchingUseCases {
    pub create: Arc<dyn CreateMatchRequestUseCase + Send + Sync>,
    pub list_incoming: Arc<dyn ListIncomingRequestsUseCase + Send + Sync>,
    pub list_outgoing: Arc<dyn ListOutgoingRequestsUseCase + Send + Sync>,
    pub accept: Arc<dyn AcceptMatchRequestUseCase + Send + Sync>,
    pub reject: Arc<dyn RejectMatchRequestUseCase + Send + Sync>,
    pub cancel: Arc<dyn CancelMatchRequestUseCase + Send + Sync>,
}
