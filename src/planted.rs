//! # Planted generates QUBO instances with a known global optimum
//!
//! The construction plants the optimum by sign structure. Partition the
//! variables into a selected block of size k and a non-selected block of
//! size d - k, and draw the selected-by-selected coefficients from the
//! negated unit interval while every other coefficient is drawn from the
//! unit interval. Turning a selected variable on can only lower the
//! objective and turning a non-selected variable on can only raise it, so
//! the point with the selected block set to 1 minimizes x^T A x over all
//! binary points. A random permutation is then applied to both matrix
//! axes and to the solution vector, which relabels the variables and
//! hides which ones carry the planted block.

use crate::qubo::Qubo;
use crate::utils::{make_permutation, permute_symmetric, permute_vector};
use ndarray::{Array1, Array2};
use rayon::prelude::*;
use smolprng::{Algorithm, JsfLarge, PRNG};
use thiserror::Error;

/// The ways a requested instance can be malformed.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PlantedError {
    #[error("invalid dimension: d = {d}, the matrix must have at least one row")]
    InvalidDimension { d: usize },
    #[error("invalid solution size: k = {k} exceeds dimension d = {d}")]
    InvalidSolutionSize { k: usize, d: usize },
}

/// Builds the unpermuted block matrix of a planted instance: the top left
/// k x k block is drawn from (-1, 0] and every other entry from [0, 1).
///
/// The caller is responsible for k <= d; `make_planted_qubo` checks it.
pub fn planted_block_matrix<T: Algorithm>(
    d: usize,
    k: usize,
    prng: &mut PRNG<T>,
) -> Array2<f64> {
    let mut a = Array2::<f64>::zeros((d, d));

    for i in 0..d {
        for j in 0..d {
            a[[i, j]] = if i < k && j < k {
                -prng.gen_f64()
            } else {
                prng.gen_f64()
            };
        }
    }

    a
}

/// Generates a planted QUBO instance of dimension d whose global optimum
/// is a binary point with exactly k ones, along with that optimum.
///
/// The returned matrix has already been scrambled: one uniformly random
/// permutation is applied to its rows, its columns, and the solution
/// vector, so the location of the planted block is not recoverable from
/// the sign pattern of any leading submatrix.
pub fn make_planted_qubo<T: Algorithm>(
    d: usize,
    k: usize,
    prng: &mut PRNG<T>,
) -> Result<(Qubo, Array1<f64>), PlantedError> {
    if d == 0 {
        return Err(PlantedError::InvalidDimension { d });
    }
    if k > d {
        return Err(PlantedError::InvalidSolutionSize { k, d });
    }

    let a = planted_block_matrix(d, k, prng);

    // the planted optimum in block order, k ones then d - k zeros
    let mut x_opt = Array1::<f64>::zeros(d);
    for i in 0..k {
        x_opt[i] = 1.0;
    }

    // relabel the variables with a single shared permutation
    let perm = make_permutation(d, prng);
    let a = permute_symmetric(&a, &perm);
    let x_opt = permute_vector(&x_opt, &perm);

    Ok((Qubo::new(a), x_opt))
}

/// Generates a batch of independent planted instances in parallel.
///
/// Each instance is drawn from its own generator seeded off the caller's,
/// so concurrent draws are uncorrelated and the batch is reproducible
/// from the caller's seed without locking a shared generator.
pub fn make_planted_qubo_batch<T: Algorithm>(
    num_instances: usize,
    d: usize,
    k: usize,
    prng: &mut PRNG<T>,
) -> Result<Vec<(Qubo, Array1<f64>)>, PlantedError> {
    let seeds: Vec<u64> = (0..num_instances).map(|_| prng.gen_u64()).collect();

    seeds
        .par_iter()
        .map(|&seed| {
            let mut prng = PRNG {
                generator: JsfLarge::from(seed),
            };
            make_planted_qubo(d, k, &mut prng)
        })
        .collect()
}
