//! Text embedding for briefs and talent profiles.
//!
//! The [`Embedder`](embedder::Embedder) trait is the capability the rest of
//! the crate depends on. [`HashedEmbedder`](hashed::HashedEmbedder) is the
//! pure, deterministic stand-in used when no provider is reachable, and
//! [`FallbackEmbedder`](resilient::FallbackEmbedder) combines a remote
//! embedder with it so callers always receive a vector.

pub mod box_embedder;
pub mod embedder;
pub mod hashed;
pub mod resilient;
