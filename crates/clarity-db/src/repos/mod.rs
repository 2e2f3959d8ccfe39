//! Repository modules implementing persistence for every Clarity entity.
//!
//! Each module adds methods to `ClarityService` via `impl ClarityService` blocks.

pub mod card;
pub mod history;
pub mod user;
