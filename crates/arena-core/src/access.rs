//! Ownership-based access control
//!
//! Every mutating operation in the system is gated by the same rule: the
//! acting user must own the resource, or be a superuser. Resources expose
//! their owning user through the [`Owned`] trait and the check itself
//! lives in [`can_modify`], so no controller re-derives the logic.

use crate::value_objects::Snowflake;

/// The authenticated identity performing an operation.
///
/// Passed explicitly into every mutating service call; there is no
/// ambient "current user" state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Actor {
    pub id: Snowflake,
    pub superuser: bool,
}

impl Actor {
    /// Create a regular (non-superuser) actor
    pub fn new(id: Snowflake) -> Self {
        Self {
            id,
            superuser: false,
        }
    }

    /// Create a superuser actor
    pub fn superuser(id: Snowflake) -> Self {
        Self {
            id,
            superuser: true,
        }
    }
}

/// A resource with a single owning user (owner or creator field).
pub trait Owned {
    /// The user that owns this resource
    fn owner_id(&self) -> Snowflake;
}

/// Check whether `actor` may update or delete `resource`.
///
/// True iff the actor is a superuser or owns the resource.
#[inline]
pub fn can_modify<R: Owned>(actor: &Actor, resource: &R) -> bool {
    actor.superuser || resource.owner_id() == actor.id
}
