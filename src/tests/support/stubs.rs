use std::sync::Arc;

use async_trait::async_trait;
use uuid::Uuid;

use crate::auth::application::domain::entities::{UserId, UserRole};
use crate::auth::application::ports::incoming::use_cases::{
    LoginError, LoginInput, LoginOutput, LoginUserUseCase, SignupError, SignupInput,
    SignupUserUseCase,
};
use crate::auth::application::ports::outgoing::CreatedUser;
use crate::matching::application::domain::entities::MatchRequest;
use crate::matching::application::ports::incoming::use_cases::{
    AcceptMatchRequestUseCase, CancelMatchRequestUseCase, CreateMatchRequestError,
    CreateMatchRequestInput, CreateMatchRequestUseCase, ListIncomingRequestsUseCase,
    ListMatchRequestsError, ListOutgoingRequestsUseCase, RejectMatchRequestUseCase,
    TransitionError,
};
use crate::matching::application::service::{
    AcceptMatchRequestService, CancelMatchRequestService, CreateMatchRequestService,
    ListIncomingRequestsService, ListOutgoingRequestsService, RejectMatchRequestService,
};
use crate::matching::application::MatchingUseCases;
use crate::mentor::application::domain::directory::{MentorFilter, MentorSummary};
use crate::mentor::application::ports::incoming::use_cases::{
    ListMentorsError, ListMentorsUseCase,
};
use crate::tests::support::in_memory_match_store::InMemoryMatchStore;
use crate::user::application::domain::entities::ProfileView;
use crate::user::application::ports::incoming::use_cases::{
    AvatarOutcome, GetAvatarError, GetAvatarUseCase, GetMyProfileError, GetMyProfileUseCase,
    UpdateProfileError, UpdateProfileInput, UpdateProfileUseCase,
};

#[derive(Default, Clone)]
pub struct StubSignupUseCase;

#[async_trait]
impl SignupUserUseCase for StubSignupUseCase {
    async fn execute(&self, _input: SignupInput) -> Result<CreatedUser, SignupError> {
        unimplemented!("Not used in this test")
    }
}

#[derive(Default, Clone)]
pub struct StubLoginUseCase;

#[async_trait]
impl LoginUserUseCase for StubLoginUseCase {
    async fn execute(&self, _input: LoginInput) -> Result<LoginOutput, LoginError> {
        unimplemented!("Not used in this test")
    }
}

#[derive(Default, Clone)]
pub struct StubGetMyProfileUseCase;

#[async_trait]
impl GetMyProfileUseCase for StubGetMyProfileUseCase {
    async fn execute(&self, _user_id: UserId) -> Result<ProfileView, GetMyProfileError> {
        unimplemented!("Not used in this test")
    }
}

#[derive(Default, Clone)]
pub struct StubUpdateProfileUseCase;

#[async_trait]
impl UpdateProfileUseCase for StubUpdateProfileUseCase {
    async fn execute(&self, _input: UpdateProfileInput) -> Result<ProfileView, UpdateProfileError> {
        unimplemented!("Not used in this test")
    }
}

#[derive(Default, Clone)]
pub struct StubGetAvatarUseCase;

#[async_trait]
impl GetAvatarUseCase for StubGetAvatarUseCase {
    async fn execute(
        &self,
        _user_id: UserId,
        _role: UserRole,
    ) -> Result<AvatarOutcome, GetAvatarError> {
        unimplemented!("Not used in this test")
    }
}

#[derive(Default, Clone)]
pub struct StubListMentorsUseCase;

#[async_trait]
impl ListMentorsUseCase for StubListMentorsUseCase {
    async fn execute(&self, _filter: MentorFilter) -> Result<Vec<MentorSummary>, ListMentorsError> {
        Ok(vec![])
    }
}

#[derive(Default, Clone)]
pub struct StubMatching;

#[async_trait]
impl CreateMatchRequestUseCase for StubMatching {
    async fn execute(
        &self,
        _input: CreateMatchRequestInput,
    ) -> Result<MatchRequest, CreateMatchRequestError> {
        unimplemented!("Not used in this test")
    }
}

#[async_trait]
impl ListIncomingRequestsUseCase for StubMatching {
    async fn execute(&self, _mentor_id: UserId) -> Result<Vec<MatchRequest>, ListMatchRequestsError> {
        Ok(vec![])
    }
}

#[async_trait]
impl ListOutgoingRequestsUseCase for StubMatching {
    async fn execute(&self, _mentee_id: UserId) -> Result<Vec<MatchRequest>, ListMatchRequestsError> {
        Ok(vec![])
    }
}

#[async_trait]
impl AcceptMatchRequestUseCase for StubMatching {
    async fn execute(&self, _mentor_id: UserId, _id: Uuid) -> Result<MatchRequest, TransitionError> {
        Err(TransitionError::NotFound)
    }
}

#[async_trait]
impl RejectMatchRequestUseCase for StubMatching {
    async fn execute(&self, _mentor_id: UserId, _id: Uuid) -> Result<MatchRequest, TransitionError> {
        Err(TransitionError::NotFound)
    }
}

#[async_trait]
impl CancelMatchRequestUseCase for StubMatching {
    async fn execute(&self, _mentee_id: UserId, _id: Uuid) -> Result<MatchRequest, TransitionError> {
        Err(TransitionError::NotFound)
    }
}

pub fn stub_matching() -> MatchingUseCases {
    MatchingUseCases {
        create: Arc::new(StubMatching),
        list_incoming: Arc::new(StubMatching),
        list_outgoing: Arc::new(StubMatching),
        accept: Arc::new(StubMatching),
        reject: Arc::new(StubMatching),
        cancel: Arc::new(StubMatching),
    }
}

/// The real matching services wired to one shared in-memory store.
pub fn in_memory_matching(store: InMemoryMatchStore) -> MatchingUseCases {
    MatchingUseCases {
        create: Arc::new(CreateMatchRequestService::new(store.clone())),
        list_incoming: Arc::new(ListIncomingRequestsService::new(store.clone())),
        list_outgoing: Arc::new(ListOutgoingRequestsService::new(store.clone())),
        accept: Arc::new(AcceptMatchRequestService::new(store.clone())),
        reject: Arc::new(RejectMatchRequestService::new(store.clone())),
        cancel: Arc::new(CancelMatchRequestService::new(store)),
    }
}
