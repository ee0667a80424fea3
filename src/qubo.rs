//! Defines the dense QUBO problem type and objective evaluation.

use ndarray::{Array1, Array2};

/// A dense QUBO instance, the coefficient matrix of the quadratic form
/// f(x) = x^T Q x over binary vectors x in {0, 1}^n.
pub struct Qubo {
    pub q: Array2<f64>,
}

impl Qubo {
    /// Wraps a square coefficient matrix as a QUBO instance.
    ///
    /// # Panics
    ///
    /// Will panic if the matrix is not square.
    pub fn new(q: Array2<f64>) -> Self {
        assert_eq!(q.nrows(), q.ncols());
        Self { q }
    }

    /// Number of binary variables in the problem.
    pub fn num_x(&self) -> usize {
        self.q.ncols()
    }

    /// Evaluates the objective x^T Q x at a point.
    pub fn eval(&self, x: &Array1<f64>) -> f64 {
        let temp = self.q.dot(x);
        x.dot(&temp)
    }
}
