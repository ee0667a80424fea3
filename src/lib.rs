//! # planted-qubo
//!
//! Generates dense QUBO benchmark instances with a planted global optimum,
//! for validating exact, heuristic, and annealing based solvers against a
//! ground truth that is known by construction.
//!
//! The generator returns a coefficient matrix A and a binary point x_opt
//! such that x_opt minimizes x^T A x over all binary points. All
//! randomness flows through an explicit `smolprng` generator, so instances
//! are reproducible from a seed.

pub mod planted;
pub mod qubo;
pub mod utils;

pub use crate::planted::{make_planted_qubo, make_planted_qubo_batch, PlantedError};
pub use crate::qubo::Qubo;
