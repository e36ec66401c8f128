//! Root-factor solve (mode A).
//!
//! With roots `r1`, `r2` the polynomial factors as `y = a·(x − r1)·(x − r2)`.
//! One sample point `(x0, y0)` fixes the leading coefficient
//! `a = y0 / ((x0 − r1)·(x0 − r2))`, and then `c = a·r1·r2`.

use tracing::debug;

use crate::domain::{Point, Root};
use crate::error::SolveError;
use crate::math::Fraction;

/// Result of a root-factor solve.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RootFit {
    pub a: Fraction,
    pub c: Fraction,
    /// The two roots actually used.
    pub roots: [Root; 2],
    /// The sample point actually used.
    pub point: Point,
}

/// Solve for `c` from the first two roots and one point.
///
/// Extra roots beyond the first two are ignored.
pub fn solve(roots: &[Root], point: &Point) -> Result<RootFit, SolveError> {
    let [r1, r2] = match roots {
        [r1, r2, ..] => [r1, r2],
        _ => {
            return Err(SolveError::InsufficientData {
                what: "roots",
                needed: 2,
                found: roots.len(),
            });
        }
    };

    let denom = (&point.x - &r1.r) * (&point.x - &r2.r);
    let a = Fraction::reduce(point.y.clone(), denom).map_err(|_| {
        SolveError::division_by_zero(format!(
            "point `{}` has x={} equal to a root; it cannot determine the leading coefficient",
            point.label, point.x
        ))
    })?;

    let c = a.scale(&(&r1.r * &r2.r));
    debug!(a = %a, c = %c, point = %point.label, "solved from roots");

    Ok(RootFit {
        a,
        c,
        roots: [r1.clone(), r2.clone()],
        point: point.clone(),
    })
}
