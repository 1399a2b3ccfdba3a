mod get_avatar;
mod get_me;
mod profile_dto;
mod update_profile;

pub use get_avatar::*;
pub use get_me::*;
pub use profile_dto::*;
pub use update_profile::*;
