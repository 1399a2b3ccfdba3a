use std::sync::Arc;

use crate::user::application::ports::incoming::use_cases::{
    GetAvatarUseCase, GetMyProfileUseCase, UpdateProfileUseCase,
};

#[derive(Clone)]
pub struct UserUseCases {
    pub get_me: Arc<dyn GetMyProfileUseCase + Send + Sync>,
    pub update_profile: Arc<dyn UpdateProfileUseCase + Send + Sync>,
    pub get_avatar: Arc<dyn GetAvatarUseCase + Send + Sync>,
}
