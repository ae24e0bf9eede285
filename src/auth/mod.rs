//! Login and signup forms. Authentication is simulated: a valid form
//! fabricates a [`UserProfile`](crate::data::user::UserProfile) in memory.

pub mod login;
pub mod signup;
pub mod user_id;
pub mod validation;

pub use login::{LoginField, LoginForm};
pub use signup::{SignupField, SignupForm};
