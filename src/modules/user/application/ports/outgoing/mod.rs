pub mod profile_query;
pub mod profile_repository;

pub use profile_query::{AvatarRecord, ProfileQuery, ProfileQueryError};
pub use profile_repository::{ProfileRepository, ProfileRepositoryError, UpdateProfileData};
