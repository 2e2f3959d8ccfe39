//! ID prefixes for every persisted entity.
//!
//! IDs are generated by the store as `{prefix}-{16 hex chars}`, e.g.
//! `"his-3fa85f6457174562"`.

pub const PREFIX_USER: &str = "usr";
pub const PREFIX_HISTORY: &str = "his";
pub const PREFIX_CARD: &str = "crd";
