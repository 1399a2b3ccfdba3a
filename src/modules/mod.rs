pub mod auth;
pub mod matching;
pub mod mentor;
pub mod user;
