//! HTTP request handlers for the REST API.

pub mod briefs;
pub mod feedback;
pub mod matches;
pub mod talents;
