use std::sync::Arc;

use crate::mentor::application::ports::incoming::use_cases::ListMentorsUseCase;

#[derive(Clone)]
pub struct MentorUseCases {
    pub list: Arc<dyn ListMentorsUseCase + Send + Sync>,
}
