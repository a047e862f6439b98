//! Wire and domain types shared by the admin panel crates.

pub mod domain;
pub mod error;
pub mod protocol;
