//! Placement readiness copilot.
//!
//! Scores a candidate's self-reported skill levels against static role thresholds, reads
//! interview feedback for strengths and gaps, and produces a seven day preparation plan plus a
//! short list of next actions. Every evaluation is a pure function of its inputs and the two
//! read-only rule tables in [`evaluation::rules`].

pub mod config;
pub mod error;
pub mod evaluation;
pub mod telemetry;
