//! Banking domain module: money, accounts and banks.
//!
//! Pure domain logic only: no IO, no persistence, no concurrency control.

pub mod account;
pub mod bank;
pub mod money;

pub use account::Account;
pub use bank::Bank;
pub use money::Money;
