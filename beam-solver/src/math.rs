//! Mathematical utilities for the beam solver

use nalgebra::{DMatrix, DVector, Matrix3, Vector3};

pub type Mat = DMatrix<f64>;
pub type Vec = DVector<f64>;
pub type Mat3 = Matrix3<f64>;
pub type Vec3 = Vector3<f64>;

/// Solve a linear system, rejecting matrices that are numerically singular.
///
/// A pivot of `U` smaller than `tolerance` times the largest coefficient of
/// `a` counts as zero. Returns `None` for singular systems.
pub fn solve_nonsingular(a: &Mat, b: &Vec, tolerance: f64) -> Option<Vec> {
    if a.nrows() == 0 {
        return Some(Vec::zeros(0));
    }

    let scale = a.amax();
    if !scale.is_finite() || scale == 0.0 {
        return None;
    }

    let lu = a.clone().lu();
    let min_pivot = lu.u().diagonal().amin();
    if min_pivot <= tolerance * scale {
        return None;
    }

    lu.solve(b)
}

/// Cumulative trapezoidal integral of unit-spaced samples.
///
/// The result has the same length as `values` and starts at zero.
pub fn cumulative_trapezoid(values: &[f64]) -> std::vec::Vec<f64> {
    let mut out = std::vec::Vec::with_capacity(values.len());
    let mut acc = 0.0;
    for (i, v) in values.iter().enumerate() {
        if i > 0 {
            acc += 0.5 * (values[i - 1] + v);
        }
        out.push(acc);
    }
    out
}

/// Eigenvalues of a symmetric 3x3 matrix, sorted in descending order
pub fn symmetric_eigenvalues_desc(m: &Mat3) -> Vec3 {
    let e = m.symmetric_eigenvalues();
    let mut values = [e[0], e[1], e[2]];
    values.sort_by(|a, b| b.total_cmp(a));
    Vec3::new(values[0], values[1], values[2])
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_cumulative_trapezoid_linear() {
        // Integral of x from 0 to 4 is 8, exact for the trapezoid rule
        let values: std::vec::Vec<f64> = (0..=4).map(|x| x as f64).collect();
        let out = cumulative_trapezoid(&values);
        assert_eq!(out.len(), 5);
        assert_relative_eq!(out[0], 0.0);
        assert_relative_eq!(out[4], 8.0);
    }

    #[test]
    fn test_solve_nonsingular() {
        let a = Mat::from_row_slice(2, 2, &[4.0, 1.0, 1.0, 3.0]);
        let b = Vec::from_vec(vec![1.0, 2.0]);
        let x = solve_nonsingular(&a, &b, 1e-10).unwrap();
        // 4x + y = 1, x + 3y = 2
        assert_relative_eq!(x[0], 1.0 / 11.0, epsilon = 1e-12);
        assert_relative_eq!(x[1], 7.0 / 11.0, epsilon = 1e-12);
    }

    #[test]
    fn test_singular_rejected() {
        let a = Mat::from_row_slice(2, 2, &[2.0, 2.0, 2.0, 2.0]);
        let b = Vec::from_vec(vec![1.0, 1.0]);
        assert!(solve_nonsingular(&a, &b, 1e-10).is_none());
        assert!(solve_nonsingular(&Mat::zeros(2, 2), &b, 1e-10).is_none());
    }

    #[test]
    fn test_eigenvalues_sorted() {
        let m = Mat3::new(1.0, 0.0, 0.0, 0.0, -3.0, 0.0, 0.0, 0.0, 5.0);
        let e = symmetric_eigenvalues_desc(&m);
        assert_relative_eq!(e[0], 5.0, epsilon = 1e-12);
        assert_relative_eq!(e[1], 1.0, epsilon = 1e-12);
        assert_relative_eq!(e[2], -3.0, epsilon = 1e-12);
    }
}
