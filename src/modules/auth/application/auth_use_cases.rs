use std::sync::Arc;

use crate::auth::application::ports::incoming::use_cases::{LoginUserUseCase, SignupUserUseCase};

#[derive(Clone)]
pub struct AuthUseCases {
    pub signup: Arc<dyn SignupUserUseCase + Send + Sync>,
    pub login: Arc<dyn LoginUserUseCase + Send + Sync>,
}
