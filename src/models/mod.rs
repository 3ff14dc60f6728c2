pub mod user;

pub use user::{ProfileUpdate, User, PROFILE_ID};
