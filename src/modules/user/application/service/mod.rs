mod get_avatar_service;
mod get_my_profile_service;
mod update_profile_service;

pub use get_avatar_service::GetAvatarService;
pub use get_my_profile_service::GetMyProfileService;
pub use update_profile_service::UpdateProfileService;
