//! # clarity-core
//!
//! Core types, wizard topics, validation, and error types for Clarity.
//!
//! This crate provides the foundational types shared across all Clarity crates:
//! - Entity structs for the questionnaire, parsed insights, history and bookmarks
//! - Wizard topic and step enums
//! - Username and answer validation rules
//! - ID prefix constants
//! - Cross-cutting error types
//! - HTTP/CLI response envelopes

pub mod entities;
pub mod enums;
pub mod errors;
pub mod identity;
pub mod ids;
pub mod responses;
pub mod validation;
