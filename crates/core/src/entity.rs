//! Entity trait: identity + continuity across state changes.

/// Entity marker + minimal interface.
///
/// Anything kept in a local list keyed by a server-assigned identifier
/// implements this so lookups don't depend on the concrete type.
pub trait Entity {
    /// Strongly-typed entity identifier.
    type Id: Copy + Eq + core::hash::Hash + core::fmt::Debug;

    /// Returns the entity identifier.
    fn id(&self) -> Self::Id;
}
