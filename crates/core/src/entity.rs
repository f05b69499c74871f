//! Entity trait: identity + continuity across state changes.

/// Entity marker + minimal interface.
///
/// Identity is what other entities point at (e.g. an account's link to its
/// bank). It is not necessarily what `PartialEq` compares: an entity type may
/// still define value equality over its attributes.
pub trait Entity {
    /// Strongly-typed entity identifier.
    type Id: Copy + Eq + core::hash::Hash + core::fmt::Debug;

    /// Returns the entity identifier.
    fn id(&self) -> &Self::Id;
}
