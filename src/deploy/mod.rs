//! The deployment plan and its runner
//!
//! Deployment ordering is declared as data in [`plan`] and executed by the
//! generic sequential [`runner`]; [`raw`] covers the one contract created
//! from precomputed bytecode instead of a compiled artifact.

pub mod plan;
pub mod raw;
pub mod runner;
