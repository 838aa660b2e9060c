//! Infrastructure layer for briefmatch.
//!
//! Contains implementations of the repository and embedder traits defined in
//! `briefmatch-core`: SQLite storage, the Hugging Face embedding client, and
//! configuration loading.

pub mod config;
pub mod embedding;
pub mod sqlite;
