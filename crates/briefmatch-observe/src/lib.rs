//! Observability setup for briefmatch binaries.

pub mod tracing_setup;
