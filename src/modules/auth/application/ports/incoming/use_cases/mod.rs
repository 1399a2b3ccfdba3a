mod login_user;
mod signup_user;

pub use login_user::{LoginError, LoginInput, LoginOutput, LoginUserUseCase};
pub use signup_user::{SignupError, SignupInput, SignupUserUseCase};
