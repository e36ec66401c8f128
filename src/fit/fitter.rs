//! Three-point fit (mode B).
//!
//! Given candidate points `(x_i, y_i)` we look for the first triple (in
//! `i < j < k` order) whose coefficient matrix
//!
//! ```text
//! | x_i²  x_i  1 |
//! | x_j²  x_j  1 |
//! | x_k²  x_k  1 |
//! ```
//!
//! has a non-zero determinant, i.e. whose x-values are pairwise distinct.
//! Cramer's rule then gives `c = det(A_c) / det(A)` where `A_c` is `A` with
//! its last column replaced by the `y` values.
//!
//! Arithmetic is exact, so every non-degenerate triple on the same parabola
//! yields the same reduced fraction. The first one wins; there is no attempt
//! to find a "better" triple.

use std::collections::HashSet;

use num_bigint::BigInt;
use num_traits::Zero;
use rayon::prelude::*;
use tracing::{debug, trace};

use crate::domain::{Coefficients, Point, SearchStrategy};
use crate::error::SolveError;
use crate::fit::triples::{Triples, triples};
use crate::math::det::{replace_column, vandermonde_rows};
use crate::math::{Fraction, Matrix3, det};

/// Minimum number of points for a three-point fit.
pub const MIN_POINTS: usize = 3;

/// Result of a successful three-point fit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuadraticFit {
    pub c: Fraction,
    /// Labels of the three points used, in input order.
    pub used: [String; 3],
    /// Indices of the three points used.
    pub indices: (usize, usize, usize),
}

/// A non-degenerate triple and its coefficient matrix.
#[derive(Debug, Clone)]
struct Candidate {
    indices: (usize, usize, usize),
    matrix: Matrix3,
    det_a: BigInt,
}

/// Fit using the requested search strategy.
pub fn fit_with(points: &[Point], search: SearchStrategy) -> Result<QuadraticFit, SolveError> {
    match search {
        SearchStrategy::Sequential => fit(points),
        SearchStrategy::Parallel => fit_parallel(points),
    }
}

/// Solve for `c` from the first non-degenerate triple, scanning sequentially.
pub fn fit(points: &[Point]) -> Result<QuadraticFit, SolveError> {
    ensure_enough(points)?;

    let candidate = triples(points.len())
        .find_map(|idx| evaluate_triple(points, idx))
        .ok_or_else(|| degenerate(points))?;

    finish(points, candidate)
}

/// Same result as [`fit`], with rows of the search evaluated in parallel.
///
/// Work is split by the first index `i`; each row is scanned in order and
/// `find_map_first` keeps the lowest `i` that succeeds, so the winning triple
/// is still the minimum `(i, j, k)`.
pub fn fit_parallel(points: &[Point]) -> Result<QuadraticFit, SolveError> {
    ensure_enough(points)?;
    let n = points.len();

    let candidate = (0..n.saturating_sub(2))
        .into_par_iter()
        .find_map_first(|i| Triples::starting_at(n, i).find_map(|idx| evaluate_triple(points, idx)))
        .ok_or_else(|| degenerate(points))?;

    finish(points, candidate)
}

/// Recover all three coefficients from the triple chosen by a previous fit.
pub fn coefficients(points: &[Point], fit: &QuadraticFit) -> Result<Coefficients, SolveError> {
    let (i, j, k) = fit.indices;
    let (p1, p2, p3) = (
        point_at(points, i)?,
        point_at(points, j)?,
        point_at(points, k)?,
    );

    let a_matrix = vandermonde_rows([&p1.x, &p2.x, &p3.x]);
    let det_a = det(&a_matrix);
    let ys = [&p1.y, &p2.y, &p3.y];

    let solve_column = |col: usize| Fraction::reduce(det(&replace_column(&a_matrix, col, ys)), det_a.clone());

    Ok(Coefficients {
        a: solve_column(0)?,
        b: solve_column(1)?,
        c: solve_column(2)?,
    })
}

fn ensure_enough(points: &[Point]) -> Result<(), SolveError> {
    if points.len() < MIN_POINTS {
        return Err(SolveError::InsufficientData {
            what: "points",
            needed: MIN_POINTS,
            found: points.len(),
        });
    }
    Ok(())
}

fn evaluate_triple(points: &[Point], (i, j, k): (usize, usize, usize)) -> Option<Candidate> {
    let matrix = vandermonde_rows([&points[i].x, &points[j].x, &points[k].x]);
    let det_a = det(&matrix);
    if det_a.is_zero() {
        trace!(i, j, k, "degenerate triple");
        return None;
    }
    Some(Candidate {
        indices: (i, j, k),
        matrix,
        det_a,
    })
}

fn finish(points: &[Point], candidate: Candidate) -> Result<QuadraticFit, SolveError> {
    let (i, j, k) = candidate.indices;
    let ys = [&points[i].y, &points[j].y, &points[k].y];
    let det_ac = det(&replace_column(&candidate.matrix, 2, ys));

    let c = Fraction::reduce(det_ac, candidate.det_a)?;
    let used = [
        points[i].label.clone(),
        points[j].label.clone(),
        points[k].label.clone(),
    ];
    debug!(i, j, k, c = %c, "solved from triple");

    Ok(QuadraticFit {
        c,
        used,
        indices: (i, j, k),
    })
}

fn degenerate(points: &[Point]) -> SolveError {
    let distinct_x = points.iter().map(|p| &p.x).collect::<HashSet<_>>().len();
    SolveError::AllTriplesDegenerate {
        points: points.len(),
        distinct_x,
    }
}

fn point_at(points: &[Point], idx: usize) -> Result<&Point, SolveError> {
    points.get(idx).ok_or_else(|| {
        SolveError::invalid_input(format!(
            "triple index {idx} out of range for {} points",
            points.len()
        ))
    })
}
