mod login_user;
mod signup_user;

pub use login_user::*;
pub use signup_user::*;
