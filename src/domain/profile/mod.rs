//! User profile domain module.
//!
//! Display name, email, optional age and bio, and a list of personal goals.

mod errors;
mod user_profile;

pub use errors::UserError;
pub use user_profile::{ProfileChanges, UserProfile, MAX_BIO_LENGTH, MAX_GOALS, MAX_NAME_LENGTH};
