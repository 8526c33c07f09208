//! Request extractors

mod auth;
mod path;
mod validated;

pub use auth::{AuthUser, OptionalAuthUser};
pub use path::IdPath;
pub use validated::ValidatedJson;
