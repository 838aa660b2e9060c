//! Remote embedding providers.

pub mod huggingface;
