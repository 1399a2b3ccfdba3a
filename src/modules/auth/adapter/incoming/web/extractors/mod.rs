pub mod auth;

pub use auth::{AuthenticatedUser, MenteeUser, MentorUser};
