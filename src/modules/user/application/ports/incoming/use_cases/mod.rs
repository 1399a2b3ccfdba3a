mod get_avatar;
mod get_my_profile;
mod update_profile;

pub use get_avatar::{AvatarOutcome, GetAvatarError, GetAvatarUseCase};
pub use get_my_profile::{GetMyProfileError, GetMyProfileUseCase};
pub use update_profile::{ProfileUpdate, UpdateProfileError, UpdateProfileInput, UpdateProfileUseCase};
