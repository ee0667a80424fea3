//! This is the general Utils module, which contains the permutation and
//! binary point helpers shared by the instance generator and its tests.

use ndarray::{Array1, Array2};
use smolprng::{Algorithm, PRNG};

/// Generates a uniformly random permutation of {0, ..., n-1} with a
/// Fisher-Yates shuffle driven by the passed generator.
pub fn make_permutation<T: Algorithm>(n: usize, prng: &mut PRNG<T>) -> Vec<usize> {
    let mut perm: Vec<usize> = (0..n).collect();

    // swap each position with a uniformly chosen one at or after it
    for i in 0..n.saturating_sub(1) {
        let j = i + prng.gen_u64() as usize % (n - i);
        perm.swap(i, j);
    }

    perm
}

/// Applies the same index permutation to the rows and the columns of a
/// square matrix, e.g. output[i][j] = a[perm[i]][perm[j]].
///
/// # Panics
///
/// Will panic if the matrix is not square or perm is not of matching length.
pub fn permute_symmetric(a: &Array2<f64>, perm: &[usize]) -> Array2<f64> {
    let n = a.nrows();
    assert_eq!(n, a.ncols());
    assert_eq!(n, perm.len());

    let mut output = Array2::<f64>::zeros((n, n));
    for i in 0..n {
        for j in 0..n {
            output[[i, j]] = a[[perm[i], perm[j]]];
        }
    }

    output
}

/// Reorders a vector by an index permutation, e.g. output[i] = x[perm[i]].
pub fn permute_vector(x: &Array1<f64>, perm: &[usize]) -> Array1<f64> {
    let mut output = Array1::<f64>::zeros(x.len());
    for i in 0..x.len() {
        output[i] = x[perm[i]];
    }

    output
}

/// Counts the entries of a binary point that are set to 1.
pub fn count_ones(x: &Array1<f64>) -> usize {
    x.iter().filter(|&&x_i| x_i == 1.0).count()
}

#[cfg(test)]
mod tests {
    use crate::utils::{count_ones, make_permutation, permute_symmetric, permute_vector};
    use ndarray::{arr1, arr2};
    use smolprng::{JsfLarge, PRNG};

    #[test]
    fn test_make_permutation() {
        let mut prng = PRNG {
            generator: JsfLarge::default(),
        };
        let perm = make_permutation(25, &mut prng);

        // a permutation hits every index exactly once
        let mut sorted = perm.clone();
        sorted.sort_unstable();
        let identity: Vec<usize> = (0..25).collect();
        assert_eq!(sorted, identity);
    }

    #[test]
    fn test_make_permutation_degenerate() {
        let mut prng = PRNG {
            generator: JsfLarge::default(),
        };

        assert_eq!(make_permutation(0, &mut prng), Vec::<usize>::new());
        assert_eq!(make_permutation(1, &mut prng), vec![0]);
    }

    #[test]
    fn test_permute_symmetric() {
        let a = arr2(&[[0.0, 1.0, 2.0], [10.0, 11.0, 12.0], [20.0, 21.0, 22.0]]);

        // reversal of the index set
        let perm = [2, 1, 0];
        let b = permute_symmetric(&a, &perm);

        let target = arr2(&[[22.0, 21.0, 20.0], [12.0, 11.0, 10.0], [2.0, 1.0, 0.0]]);
        assert_eq!(b, target);
    }

    #[test]
    fn test_permute_symmetric_preserves_values() {
        let a = arr2(&[[0.5, -1.0, 3.0], [2.0, 0.25, -0.5], [1.5, 4.0, -2.0]]);
        let perm = [1, 2, 0];
        let b = permute_symmetric(&a, &perm);

        // relabeling only, the multiset of entries is unchanged
        let mut before: Vec<f64> = a.iter().copied().collect();
        let mut after: Vec<f64> = b.iter().copied().collect();
        before.sort_by(|x, y| x.partial_cmp(y).unwrap());
        after.sort_by(|x, y| x.partial_cmp(y).unwrap());
        assert_eq!(before, after);
    }

    #[test]
    fn test_permute_vector() {
        let x = arr1(&[1.0, 0.0, 0.0, 1.0]);
        let perm = [3, 2, 1, 0];
        let target = arr1(&[1.0, 0.0, 0.0, 1.0]);
        assert_eq!(permute_vector(&x, &perm), target);

        let perm = [1, 3, 0, 2];
        let target = arr1(&[0.0, 1.0, 1.0, 0.0]);
        assert_eq!(permute_vector(&x, &perm), target);
    }

    #[test]
    fn test_count_ones() {
        assert_eq!(count_ones(&arr1(&[1.0, 0.0, 1.0, 1.0])), 3);
        assert_eq!(count_ones(&arr1(&[0.0, 0.0])), 0);
    }
}
