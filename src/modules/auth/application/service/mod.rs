mod basic_password_policy;
mod login_user_service;
mod signup_user_service;

pub use basic_password_policy::BasicPasswordPolicy;
pub use login_user_service::LoginUserService;
pub use signup_user_service::SignupUserService;
