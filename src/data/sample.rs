//! Synthetic evidence-document generation from a known integer quadratic.
//!
//! Useful for end-to-end checks: generate documents, run `qc solve`, compare
//! with the `c` that went in. Values are written in random bases (2–36) so the
//! decoder is exercised too. Generation is deterministic for a given seed.

use num_bigint::BigInt;
use rand::prelude::*;
use rand::rngs::StdRng;
use serde_json::{Map, Value, json};

use crate::error::AppError;
use crate::io::ingest::SELECTION_KEY;
use crate::math::codec::{self, MAX_BASE, MIN_BASE};

/// Inputs for [`generate_sample`].
#[derive(Debug, Clone)]
pub struct SampleSpec {
    pub a: i64,
    pub b: i64,
    pub c: i64,
    /// Overrides `b` and `c`: the polynomial is `a·(x − r1)·(x − r2)`.
    pub roots: Option<(i64, i64)>,
    /// Number of points to emit.
    pub count: usize,
    pub seed: u64,
    /// `keys.k` written to the documents (defaults to `count`).
    pub k: Option<usize>,
}

/// Generated documents plus the coefficients they encode.
#[derive(Debug, Clone)]
pub struct SampleData {
    pub points: Value,
    /// Present when `spec.roots` was given.
    pub roots: Option<Value>,
    pub a: BigInt,
    pub b: BigInt,
    pub c: BigInt,
}

pub fn generate_sample(spec: &SampleSpec) -> Result<SampleData, AppError> {
    if spec.a == 0 {
        return Err(AppError::new(2, "Leading coefficient `a` must be non-zero."));
    }
    let min_count = if spec.roots.is_some() { 1 } else { 3 };
    if spec.count < min_count {
        return Err(AppError::new(
            2,
            format!("Point count must be >= {min_count} for this mode."),
        ));
    }

    let a = BigInt::from(spec.a);
    let (b, c) = match spec.roots {
        Some((r1, r2)) => {
            let (r1, r2) = (BigInt::from(r1), BigInt::from(r2));
            (-(&a * (&r1 + &r2)), &a * &r1 * &r2)
        }
        None => (BigInt::from(spec.b), BigInt::from(spec.c)),
    };

    let mut rng = StdRng::seed_from_u64(spec.seed);
    let xs = pick_abscissae(&mut rng, spec.count, spec.roots);

    let mut points = selection_header(spec.count, spec.k.unwrap_or(spec.count));
    for x in xs {
        let xb = BigInt::from(x);
        let y = &a * &xb * &xb + &b * &xb + &c;
        points.insert(x.to_string(), encoded_record(&mut rng, &y)?);
    }

    let roots = match spec.roots {
        Some((r1, r2)) => {
            let mut doc = selection_header(2, 2);
            doc.insert("1".to_string(), encoded_record(&mut rng, &BigInt::from(r1))?);
            doc.insert("2".to_string(), encoded_record(&mut rng, &BigInt::from(r2))?);
            Some(Value::Object(doc))
        }
        None => None,
    };

    Ok(SampleData {
        points: Value::Object(points),
        roots,
        a,
        b,
        c,
    })
}

/// Distinct positive x-values, sorted, never equal to a root.
fn pick_abscissae(rng: &mut StdRng, count: usize, roots: Option<(i64, i64)>) -> Vec<i64> {
    let span = (count as i64).saturating_mul(4).saturating_add(2);
    let mut pool: Vec<i64> = (1..=span)
        .filter(|x| roots.is_none_or(|(r1, r2)| *x != r1 && *x != r2))
        .collect();
    pool.shuffle(rng);
    pool.truncate(count);
    pool.sort_unstable();
    pool
}

fn selection_header(n: usize, k: usize) -> Map<String, Value> {
    let mut map = Map::new();
    map.insert(SELECTION_KEY.to_string(), json!({ "n": n, "k": k }));
    map
}

fn encoded_record(rng: &mut StdRng, value: &BigInt) -> Result<Value, AppError> {
    let base = rng.gen_range(MIN_BASE..=MAX_BASE);
    let text = codec::encode(value, base)?;
    Ok(json!({ "base": base.to_string(), "value": text }))
}
