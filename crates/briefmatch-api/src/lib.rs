//! Application layer for briefmatch: CLI commands, REST API and the state
//! that wires services to their infrastructure.

pub mod cli;
pub mod http;
pub mod state;
