//! Value objects - immutable domain primitives

mod rsvp;
mod snowflake;

pub use rsvp::RsvpStatus;
pub use snowflake::{Snowflake, SnowflakeGenerator, SnowflakeParseError};
