//! Business logic services (use cases).
//!
//! Services orchestrate repository calls, embedding and scoring. They depend
//! on traits (ports) -- never on concrete infrastructure implementations.

pub mod feedback;
pub mod matching;
pub mod talent;

#[cfg(test)]
pub(crate) mod testing;
