//! 3×3 determinants over arbitrary-precision integers.
//!
//! This is the building block for Cramer's rule in the three-point fit:
//! the coefficient matrix has rows `[x², x, 1]` and solving for one unknown
//! means swapping one column for the observed `y` values.

use num_bigint::BigInt;
use num_traits::One;

/// Row-major 3×3 integer matrix.
pub type Matrix3 = [[BigInt; 3]; 3];

/// Determinant by cofactor expansion (rule of Sarrus).
pub fn det(m: &Matrix3) -> BigInt {
    let [[m11, m12, m13], [m21, m22, m23], [m31, m32, m33]] = m;

    m11 * m22 * m33 + m12 * m23 * m31 + m13 * m21 * m32
        - m13 * m22 * m31
        - m11 * m23 * m32
        - m12 * m21 * m33
}

/// Coefficient matrix for `a·x² + b·x + c` at three abscissae.
pub fn vandermonde_rows(xs: [&BigInt; 3]) -> Matrix3 {
    xs.map(|x| [x * x, x.clone(), BigInt::one()])
}

/// Copy of `m` with column `col` replaced by `values`.
pub fn replace_column(m: &Matrix3, col: usize, values: [&BigInt; 3]) -> Matrix3 {
    let mut out = m.clone();
    for (row, value) in out.iter_mut().zip(values) {
        row[col] = value.clone();
    }
    out
}
