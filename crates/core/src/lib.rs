//! `banca-core` — domain foundation building blocks.
//!
//! Pure domain primitives shared by the banking crate: errors, identifiers and
//! the entity/value-object traits. No IO, no logging setup.

pub mod entity;
pub mod error;
pub mod id;
pub mod value_object;

pub use entity::Entity;
pub use error::{DomainError, DomainResult};
pub use id::{AccountId, BankId};
pub use value_object::ValueObject;
