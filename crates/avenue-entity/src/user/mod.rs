//! User domain records.

pub mod model;
pub mod parse;
pub mod request;

pub use model::{User, UserProfile, UserRevision};
pub use parse::{parse_user, parse_user_with};
pub use request::{CreateUserRequest, RegisterRequest, UpdatePasswordRequest, UpdateProfileRequest};
