//! Tournament RSVP status
//!
//! A user's attendance response is at most one of `Going` / `NotGoing`;
//! no response at all is represented as `None` throughout the codebase.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A recorded attendance response for a tournament
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RsvpStatus {
    Going,
    NotGoing,
}

impl RsvpStatus {
    /// Apply an attendance toggle.
    ///
    /// Choosing the status already held withdraws the response entirely;
    /// choosing anything else replaces the current response. Both the
    /// "going" and "not going" endpoints run through this one transition,
    /// which is what keeps the two sets disjoint: a user holds at most one
    /// status at a time.
    #[must_use]
    pub fn toggle(current: Option<RsvpStatus>, choice: RsvpStatus) -> Option<RsvpStatus> {
        if current == Some(choice) {
            None
        } else {
            Some(choice)
        }
    }

    /// Database representation of the status
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Going => "going",
            Self::NotGoing => "not_going",
        }
    }

    /// Parse the database representation
    pub fn from_db(s: &str) -> Option<Self> {
        match s {
            "going" => Some(Self::Going),
            "not_going" => Some(Self::NotGoing),
            _ => None,
        }
    }
}

impl fmt::Display for RsvpStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toggle_from_no_response() {
        assert_eq!(
            RsvpStatus::toggle(None, RsvpStatus::Going),
            Some(RsvpStatus::Going)
        );
        assert_eq!(
            RsvpStatus::toggle(None, RsvpStatus::NotGoing),
            Some(RsvpStatus::NotGoing)
        );
    }

    #[test]
    fn test_toggle_same_status_withdraws() {
        assert_eq!(
            RsvpStatus::toggle(Some(RsvpStatus::Going), RsvpStatus::Going),
            None
        );
        assert_eq!(
            RsvpStatus::toggle(Some(RsvpStatus::NotGoing), RsvpStatus::NotGoing),
            None
        );
    }

    #[test]
    fn test_toggle_switches_sets() {
        assert_eq!(
            RsvpStatus::toggle(Some(RsvpStatus::Going), RsvpStatus::NotGoing),
            Some(RsvpStatus::NotGoing)
        );
        assert_eq!(
            RsvpStatus::toggle(Some(RsvpStatus::NotGoing), RsvpStatus::Going),
            Some(RsvpStatus::Going)
        );
    }

    #[test]
    fn test_going_twice_returns_to_no_response() {
        let after_first = RsvpStatus::toggle(None, RsvpStatus::Going);
        let after_second = RsvpStatus::toggle(after_first, RsvpStatus::Going);
        assert_eq!(after_second, None);
    }

    #[test]
    fn test_going_then_not_going_ends_not_going() {
        let s = RsvpStatus::toggle(None, RsvpStatus::Going);
        let s = RsvpStatus::toggle(s, RsvpStatus::NotGoing);
        assert_eq!(s, Some(RsvpStatus::NotGoing));
    }

    #[test]
    fn test_db_roundtrip() {
        assert_eq!(RsvpStatus::from_db("going"), Some(RsvpStatus::Going));
        assert_eq!(RsvpStatus::from_db("not_going"), Some(RsvpStatus::NotGoing));
        assert_eq!(RsvpStatus::from_db("maybe"), None);
        assert_eq!(RsvpStatus::Going.as_str(), "going");
        assert_eq!(RsvpStatus::NotGoing.to_string(), "not_going");
    }
}
