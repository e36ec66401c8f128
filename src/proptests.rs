//! Property-based tests for the exact-arithmetic core.

use num_bigint::{BigInt, Sign};
use num_traits::{One, Signed, Zero};
use proptest::prelude::*;

use crate::domain::{Point, Root};
use crate::fit::{coefficients, fit, fit_parallel, solve};
use crate::math::codec::{MAX_BASE, MIN_BASE, decode, encode};
use crate::math::det::{Matrix3, det};
use crate::math::fraction::{Fraction, gcd};

// Multi-limb integers, well past 64 bits.
fn big_int() -> impl Strategy<Value = BigInt> {
    (
        prop_oneof![Just(Sign::Minus), Just(Sign::NoSign), Just(Sign::Plus)],
        prop::collection::vec(any::<u32>(), 0..6),
    )
        .prop_map(|(sign, digits)| BigInt::from_slice(sign, &digits))
}

fn small_int() -> impl Strategy<Value = i64> {
    -1000i64..1000i64
}

fn non_zero_int() -> impl Strategy<Value = i64> {
    prop_oneof![(-50i64..=-1i64), (1i64..=50i64)]
}

fn matrix() -> impl Strategy<Value = Matrix3> {
    prop::array::uniform3(prop::array::uniform3(small_int()))
        .prop_map(|rows| rows.map(|row| row.map(BigInt::from)))
}

fn quadratic_points(a: i64, b: i64, c: i64, xs: impl IntoIterator<Item = i64>) -> Vec<Point> {
    xs.into_iter()
        .map(|x| Point::new(x, a * x * x + b * x + c, x.to_string()))
        .collect()
}

proptest! {
    #[test]
    fn codec_round_trips(value in big_int(), base in MIN_BASE..=MAX_BASE) {
        let text = encode(&value, base).unwrap();
        prop_assert_eq!(decode(&text, base).unwrap(), value.clone());
        prop_assert_eq!(decode(&text.to_uppercase(), base).unwrap(), value);
    }

    #[test]
    fn reduce_is_canonical(num in big_int(), den in big_int()) {
        prop_assume!(!den.is_zero());
        let f = Fraction::reduce(num, den).unwrap();
        prop_assert!(f.denom().is_positive());
        if f.numer().is_zero() {
            prop_assert!(f.denom().is_one());
        } else {
            prop_assert!(gcd(f.numer(), f.denom()).is_one());
        }
    }

    #[test]
    fn reduce_ignores_common_factors(num in small_int(), den in non_zero_int(), m in non_zero_int()) {
        let plain = Fraction::reduce(BigInt::from(num), BigInt::from(den)).unwrap();
        let scaled = Fraction::reduce(BigInt::from(num * m), BigInt::from(den * m)).unwrap();
        prop_assert_eq!(plain, scaled);
    }

    #[test]
    fn row_swap_negates_determinant(m in matrix()) {
        let mut swapped = m.clone();
        swapped.swap(0, 1);
        prop_assert_eq!(det(&swapped), -det(&m));
    }

    #[test]
    fn repeated_row_gives_zero_determinant(m in matrix()) {
        let mut repeated = m.clone();
        repeated[2] = repeated[0].clone();
        prop_assert!(det(&repeated).is_zero());
    }

    #[test]
    fn fitter_recovers_integer_quadratic(
        a in non_zero_int(),
        b in small_int(),
        c in small_int(),
        xs in prop::collection::btree_set(-100i64..100, 3..8),
    ) {
        let points = quadratic_points(a, b, c, xs);
        let found = fit(&points).unwrap();
        prop_assert_eq!(&found.c, &Fraction::from_integer(BigInt::from(c)));

        let coeffs = coefficients(&points, &found).unwrap();
        prop_assert_eq!(coeffs.a, Fraction::from_integer(BigInt::from(a)));
        prop_assert_eq!(coeffs.b, Fraction::from_integer(BigInt::from(b)));
        prop_assert_eq!(coeffs.c, found.c);
    }

    #[test]
    fn root_solver_recovers_constant(
        a in non_zero_int(),
        r1 in -100i64..100,
        r2 in -100i64..100,
        x in -100i64..100,
    ) {
        prop_assume!(x != r1 && x != r2);
        let y = a * (x - r1) * (x - r2);
        let roots = [Root::new(r1, "r1"), Root::new(r2, "r2")];
        let found = solve(&roots, &Point::new(x, y, "p")).unwrap();
        prop_assert_eq!(found.c, Fraction::from_integer(BigInt::from(a * r1 * r2)));
        prop_assert_eq!(found.a, Fraction::from_integer(BigInt::from(a)));
    }

    #[test]
    fn parallel_search_matches_sequential(
        pairs in prop::collection::vec((-4i64..4, small_int()), 0..12),
    ) {
        // Narrow x range so degenerate triples (and total degeneracy) are common.
        let points: Vec<Point> = pairs
            .iter()
            .enumerate()
            .map(|(i, (x, y))| Point::new(*x, *y, i.to_string()))
            .collect();
        prop_assert_eq!(fit(&points), fit_parallel(&points));
    }
}
