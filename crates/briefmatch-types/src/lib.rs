//! Shared domain types for briefmatch.
//!
//! Talent profiles, creative briefs, scored matches, feedback and the
//! error and configuration types shared by every other crate.
//!
//! Zero infrastructure dependencies -- only serde, uuid, chrono, thiserror.

pub mod brief;
pub mod config;
pub mod error;
pub mod feedback;
pub mod matching;
pub mod talent;
