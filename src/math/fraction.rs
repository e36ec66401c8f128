//! Exact rationals in canonical form.
//!
//! A `Fraction` always has a positive denominator and a numerator/denominator
//! pair that is coprime, so two fractions are equal as values iff they are
//! equal as structs.

use std::fmt;

use num_bigint::BigInt;
use num_traits::{One, Signed, Zero};

use crate::error::SolveError;

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Fraction {
    num: BigInt,
    den: BigInt,
}

impl Fraction {
    /// Reduce `num / den` to lowest terms.
    ///
    /// Fails with `DivisionByZero` when `den == 0`.
    pub fn reduce(num: BigInt, den: BigInt) -> Result<Self, SolveError> {
        if den.is_zero() {
            return Err(SolveError::division_by_zero("fraction denominator is zero"));
        }
        if num.is_zero() {
            return Ok(Self::zero());
        }

        let (num, den) = if den.is_negative() { (-num, -den) } else { (num, den) };
        let g = gcd(&num, &den);
        Ok(Self {
            num: num / &g,
            den: den / g,
        })
    }

    pub fn from_integer(n: BigInt) -> Self {
        Self {
            num: n,
            den: BigInt::one(),
        }
    }

    pub fn zero() -> Self {
        Self::from_integer(BigInt::zero())
    }

    pub fn numer(&self) -> &BigInt {
        &self.num
    }

    pub fn denom(&self) -> &BigInt {
        &self.den
    }

    pub fn is_integer(&self) -> bool {
        self.den.is_one()
    }

    /// Multiply by an integer and re-reduce.
    pub fn scale(&self, factor: &BigInt) -> Self {
        let num = &self.num * factor;
        if num.is_zero() {
            return Self::zero();
        }
        // `den` is positive, so dividing by the (positive) gcd keeps it positive.
        let g = gcd(&num, &self.den);
        Self {
            num: num / &g,
            den: &self.den / g,
        }
    }
}

impl fmt::Display for Fraction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_integer() {
            write!(f, "{}", self.num)
        } else {
            write!(f, "{} / {}", self.num, self.den)
        }
    }
}

/// Greatest common divisor of `|a|` and `|b|` by repeated remainder.
pub fn gcd(a: &BigInt, b: &BigInt) -> BigInt {
    let mut a = a.abs();
    let mut b = b.abs();
    while !b.is_zero() {
        let r = &a % &b;
        a = std::mem::replace(&mut b, r);
    }
    a
}
