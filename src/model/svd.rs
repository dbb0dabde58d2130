//! Singular value decomposition by one-sided Jacobi rotations.
//!
//! Hestenes' method orthogonalizes the columns of `A` (m × n) in place by plane
//! rotations, accumulating the same rotations into `V`. Once every pair of
//! columns is orthogonal, `A·V = U·Σ` with `σ_j = ‖a_j‖` and `u_j = a_j / σ_j`.
//!
//! Columns are sentences here, so `V` directly holds the topic weight of each
//! sentence. The method needs no bidiagonalization and handles rank-deficient
//! and zero matrices without special cases: a zero column simply has σ = 0.

use crate::model::budget::{Deadline, Termination};
use crate::model::term_matrix::TermSentenceMatrix;

/// Relative size below which a singular value counts as zero.
pub const RANK_TOLERANCE: f64 = 1e-10;

/// Result of a decomposition, components sorted by descending singular value.
#[derive(Clone, Debug)]
pub struct Svd {
    /// σ_1 ≥ σ_2 ≥ … ≥ 0
    pub singular_values: Vec<f64>,
    /// Left singular vectors (columns of U), one per component, length m
    pub left_vectors: Vec<Vec<f64>>,
    /// Right singular vectors (rows of Vᵗ), one per component, length n
    pub right_vectors: Vec<Vec<f64>>,
    /// Sweeps performed
    pub sweeps: usize,
    /// Largest normalized column inner product seen in the last sweep
    pub off_diagonal: f64,
    /// Why the sweeps stopped
    pub termination: Termination,
}

impl Svd {
    /// Number of components whose singular value is not numerically zero.
    pub fn rank(&self) -> usize {
        let largest = self.singular_values.first().copied().unwrap_or(0.0);
        if largest <= 0.0 {
            return 0;
        }
        self.singular_values
            .iter()
            .take_while(|&&sigma| sigma > largest * RANK_TOLERANCE)
            .count()
    }

    pub fn converged(&self) -> bool {
        self.termination.is_converged()
    }
}

/// One-sided Jacobi SVD solver.
#[derive(Debug, Clone)]
pub struct JacobiSvd {
    /// Maximum number of sweeps over all column pairs
    pub max_sweeps: usize,
    /// Orthogonality threshold on `|a_p·a_q| / (‖a_p‖‖a_q‖)`
    pub tolerance: f64,
}

impl Default for JacobiSvd {
    fn default() -> Self {
        Self {
            max_sweeps: 60,
            tolerance: 1e-12,
        }
    }
}

impl JacobiSvd {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the maximum sweep count.
    pub fn with_max_sweeps(mut self, max_sweeps: usize) -> Self {
        self.max_sweeps = max_sweeps;
        self
    }

    /// Set the orthogonality threshold.
    pub fn with_tolerance(mut self, tolerance: f64) -> Self {
        self.tolerance = tolerance;
        self
    }

    /// Decompose `matrix`.
    ///
    /// Returns the current factorization even when the sweep cap or the
    /// deadline is hit first; `termination` tells which.
    pub fn decompose(&self, matrix: TermSentenceMatrix, deadline: &Deadline) -> Svd {
        let m = matrix.rows();
        let n = matrix.cols();
        let mut a = matrix.into_columns();
        let mut v: Vec<Vec<f64>> = (0..n)
            .map(|j| {
                let mut column = vec![0.0; n];
                column[j] = 1.0;
                column
            })
            .collect();

        let mut sweeps = 0;
        let mut off_diagonal = 0.0;
        let mut termination = Termination::IterationCap;

        if n < 2 {
            termination = Termination::Converged;
        } else {
            while sweeps < self.max_sweeps {
                if deadline.expired() {
                    termination = Termination::Deadline;
                    break;
                }
                sweeps += 1;
                off_diagonal = self.sweep(&mut a, &mut v);
                tracing::trace!(sweeps, off_diagonal, "jacobi sweep");
                if off_diagonal <= self.tolerance {
                    termination = Termination::Converged;
                    break;
                }
            }
        }

        let norms: Vec<f64> = a.iter().map(|column| dot(column, column).sqrt()).collect();
        let mut order: Vec<usize> = (0..n).collect();
        order.sort_by(|&i, &j| norms[j].total_cmp(&norms[i]).then(i.cmp(&j)));

        let largest = order.first().map_or(0.0, |&j| norms[j]);
        let mut singular_values = Vec::with_capacity(n);
        let mut left_vectors = Vec::with_capacity(n);
        let mut right_vectors = Vec::with_capacity(n);
        for j in order {
            let sigma = norms[j];
            let left = if sigma > largest * RANK_TOLERANCE && sigma > 0.0 {
                a[j].iter().map(|x| x / sigma).collect()
            } else {
                vec![0.0; m]
            };
            singular_values.push(sigma);
            left_vectors.push(left);
            right_vectors.push(std::mem::take(&mut v[j]));
        }

        tracing::debug!(
            rows = m,
            cols = n,
            sweeps,
            converged = termination.is_converged(),
            "computed svd"
        );

        Svd {
            singular_values,
            left_vectors,
            right_vectors,
            sweeps,
            off_diagonal,
            termination,
        }
    }

    /// One cyclic sweep over all column pairs. Returns the largest normalized
    /// inner product found before rotating.
    fn sweep(&self, a: &mut [Vec<f64>], v: &mut [Vec<f64>]) -> f64 {
        let n = a.len();
        let mut max_off: f64 = 0.0;

        // Columns this small are rounding noise; rotating them never settles.
        let largest = a.iter().map(|c| dot(c, c)).fold(0.0, f64::max);
        let floor = largest * RANK_TOLERANCE * RANK_TOLERANCE;

        for p in 0..n {
            for q in (p + 1)..n {
                let alpha = dot(&a[p], &a[p]);
                let beta = dot(&a[q], &a[q]);
                let gamma = dot(&a[p], &a[q]);
                if alpha <= floor || beta <= floor || gamma == 0.0 {
                    continue;
                }

                let off = gamma.abs() / (alpha * beta).sqrt();
                max_off = max_off.max(off);
                if off <= self.tolerance {
                    continue;
                }

                let zeta = (beta - alpha) / (2.0 * gamma);
                let t = zeta.signum() / (zeta.abs() + (1.0 + zeta * zeta).sqrt());
                let c = 1.0 / (1.0 + t * t).sqrt();
                let s = c * t;

                let (ap, aq) = pair_mut(a, p, q);
                rotate(ap, aq, c, s);
                let (vp, vq) = pair_mut(v, p, q);
                rotate(vp, vq, c, s);
            }
        }

        max_off
    }
}

fn dot(x: &[f64], y: &[f64]) -> f64 {
    x.iter().zip(y).map(|(a, b)| a * b).sum()
}

fn rotate(x: &mut [f64], y: &mut [f64], c: f64, s: f64) {
    for (xi, yi) in x.iter_mut().zip(y.iter_mut()) {
        let (a, b) = (*xi, *yi);
        *xi = c * a - s * b;
        *yi = s * a + c * b;
    }
}

/// Two distinct mutable columns, `p < q`.
fn pair_mut(columns: &mut [Vec<f64>], p: usize, q: usize) -> (&mut Vec<f64>, &mut Vec<f64>) {
    let (left, right) = columns.split_at_mut(q);
    (&mut left[p], &mut right[0])
}

#[cfg(test)]
mod tests {
    use super::*;

    fn matrix(rows: usize, columns: Vec<Vec<f64>>) -> TermSentenceMatrix {
        TermSentenceMatrix::from_columns(rows, columns).unwrap()
    }

    fn reconstruct(svd: &Svd, term: usize, sentence: usize) -> f64 {
        (0..svd.singular_values.len())
            .map(|i| {
                svd.singular_values[i] * svd.left_vectors[i][term] * svd.right_vectors[i][sentence]
            })
            .sum()
    }

    #[test]
    fn test_diagonal_matrix() {
        let svd = JacobiSvd::new().decompose(
            matrix(3, vec![vec![1.0, 0.0, 0.0], vec![0.0, 3.0, 0.0], vec![0.0, 0.0, 2.0]]),
            &Deadline::none(),
        );

        assert!(svd.converged());
        assert_eq!(svd.singular_values, vec![3.0, 2.0, 1.0]);
        assert_eq!(svd.right_vectors[0], vec![0.0, 1.0, 0.0]);
        assert_eq!(svd.rank(), 3);
    }

    #[test]
    fn test_reconstruction() {
        let columns = vec![
            vec![2.0, 1.0, 0.0, 0.0],
            vec![1.0, 1.0, 1.0, 0.0],
            vec![0.0, 0.0, 1.0, 3.0],
        ];
        let svd = JacobiSvd::new().decompose(matrix(4, columns.clone()), &Deadline::none());

        assert!(svd.converged());
        assert!(svd.singular_values.windows(2).all(|w| w[0] >= w[1]));
        for (sentence, column) in columns.iter().enumerate() {
            for (term, &value) in column.iter().enumerate() {
                assert!((reconstruct(&svd, term, sentence) - value).abs() < 1e-9);
            }
        }

        // Right singular vectors are orthonormal.
        for i in 0..3 {
            for j in 0..3 {
                let expected = if i == j { 1.0 } else { 0.0 };
                assert!((dot(&svd.right_vectors[i], &svd.right_vectors[j]) - expected).abs() < 1e-9);
            }
        }
    }

    #[test]
    fn test_rank_deficient() {
        // Second column is twice the first; more sentences than terms.
        let svd = JacobiSvd::new().decompose(
            matrix(2, vec![vec![1.0, 1.0], vec![2.0, 2.0], vec![0.0, 0.0]]),
            &Deadline::none(),
        );

        assert_eq!(svd.rank(), 1);
        assert!((svd.singular_values[0] - 10f64.sqrt()).abs() < 1e-9);
        assert!(svd.singular_values[1].abs() < 1e-9);
    }

    #[test]
    fn test_zero_and_single_column() {
        let svd = JacobiSvd::new().decompose(matrix(2, vec![vec![0.0, 0.0]; 2]), &Deadline::none());
        assert_eq!(svd.rank(), 0);
        assert_eq!(svd.left_vectors[0], vec![0.0, 0.0]);

        let svd = JacobiSvd::new().decompose(matrix(2, vec![vec![3.0, 4.0]]), &Deadline::none());
        assert_eq!(svd.sweeps, 0);
        assert_eq!(svd.singular_values, vec![5.0]);
    }

    #[test]
    fn test_sweep_cap_and_deadline() {
        let columns = vec![vec![1.0, 1.0], vec![1.0, 0.0]];

        let svd = JacobiSvd::new()
            .with_max_sweeps(1)
            .decompose(matrix(2, columns.clone()), &Deadline::none());
        assert_eq!(svd.termination, Termination::IterationCap);
        assert_eq!(svd.sweeps, 1);

        let svd = JacobiSvd::new().decompose(
            matrix(2, columns),
            &Deadline::after(std::time::Duration::ZERO),
        );
        assert_eq!(svd.termination, Termination::Deadline);
        assert_eq!(svd.sweeps, 0);
        assert_eq!(svd.singular_values.len(), 2);
    }
}
