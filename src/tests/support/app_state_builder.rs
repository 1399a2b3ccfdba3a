use actix_web::web;
use std::sync::Arc;

use crate::auth::application::auth_use_cases::AuthUseCases;
use crate::auth::application::ports::incoming::use_cases::{LoginUserUseCase, SignupUserUseCase};
use crate::matching::application::MatchingUseCases;
use crate::mentor::application::ports::incoming::use_cases::ListMentorsUseCase;
use crate::mentor::application::MentorUseCases;
use crate::tests::support::stubs::*;
use crate::user::application::ports::incoming::use_cases::{
    GetAvatarUseCase, GetMyProfileUseCase, UpdateProfileUseCase,
};
use crate::user::application::UserUseCases;
use crate::AppState;

pub struct TestAppStateBuilder {
    auth: AuthUseCases,
    user: UserUseCases,
    mentor: MentorUseCases,
    matching: MatchingUseCases,
}

impl Default for TestAppStateBuilder {
    fn default() -> Self {
        Self {
            auth: AuthUseCases {
                signup: Arc::new(StubSignupUseCase),
                login: Arc::new(StubLoginUseCase),
            },
            user: UserUseCases {
                get_me: Arc::new(StubGetMyProfileUseCase),
                update_profile: Arc::new(StubUpdateProfileUseCase),
                get_avatar: Arc::new(StubGetAvatarUseCase),
            },
            mentor: MentorUseCases {
                list: Arc::new(StubListMentorsUseCase),
            },
            matching: stub_matching(),
        }
    }
}

impl TestAppStateBuilder {
    pub fn with_signup(mut self, uc: impl SignupUserUseCase + Send + Sync + 'static) -> Self {
        self.auth.signup = Arc::new(uc);
        self
    }

    pub fn with_login(mut self, uc: impl LoginUserUseCase + Send + Sync + 'static) -> Self {
        self.auth.login = Arc::new(uc);
        self
    }

    pub fn with_get_me(mut self, uc: impl GetMyProfileUseCase + Send + Sync + 'static) -> Self {
        self.user.get_me = Arc::new(uc);
        self
    }

    pub fn with_update_profile(
        mut self,
        uc: impl UpdateProfileUseCase + Send + Sync + 'static,
    ) -> Self {
        self.user.update_profile = Arc::new(uc);
        self
    }

    pub fn with_get_avatar(mut self, uc: impl GetAvatarUseCase + Send + Sync + 'static) -> Self {
        self.user.get_avatar = Arc::new(uc);
        self
    }

    pub fn with_list_mentors(mut self, uc: impl ListMentorsUseCase + Send + Sync + 'static) -> Self {
        self.mentor.list = Arc::new(uc);
        self
    }

    pub fn with_matching(mut self, matching: MatchingUseCases) -> Self {
        self.matching = matching;
        self
    }

    pub fn build(self) -> web::Data<AppState> {
        web::Data::new(AppState {
            auth: self.auth,
            user: self.user,
            mentor: self.mentor,
            matching: self.matching,
        })
    }
}
