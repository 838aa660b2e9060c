//! Scoring engine and repository trait definitions for briefmatch.
//!
//! This crate defines the "ports" (repository and embedder traits) that the
//! infrastructure layer implements, plus the pure rule/vector scoring and the
//! hybrid ranker. It depends only on `briefmatch-types` -- never on
//! `briefmatch-infra` or any database/IO crate.

pub mod embedding;
pub mod matching;
pub mod repository;
pub mod service;
