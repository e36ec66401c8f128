//! Evidence-document ingest.
//!
//! An evidence document is a JSON object mapping labels to `{ base, value }`
//! records, plus an optional reserved `"keys"` entry carrying selection
//! metadata `{ n, k }`:
//!
//! ```json
//! { "keys": { "n": 4, "k": 3 },
//!   "1": { "base": "10", "value": "4" },
//!   "2": { "base": "2",  "value": "111" } }
//! ```
//!
//! This module turns such a document into an ordered, optionally truncated,
//! fully decoded sequence of `Point`s or `Root`s.
//!
//! Design goals:
//! - **Explicit schema**: each record becomes a typed `RawRecord`; `base` and
//!   `value` may be JSON numbers (any size) or strings
//! - **Shape tolerance only**: entries that are not objects, or lack `base` or
//!   `value`, are skipped and reported
//! - **Strict everything else**: a wrongly typed field, bad base, bad digit or
//!   unusable `keys.k` aborts the load with the offending key
//! - **Separation of concerns**: no solving logic here

use std::fmt;
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use num_bigint::BigInt;
use serde_json::{Map, Number, Value};
use tracing::{debug, warn};

use crate::domain::{DigitValue, Point, Root};
use crate::error::{AppError, SolveError};
use crate::math::codec::{self, check_base};

/// Reserved document key for selection metadata.
pub const SELECTION_KEY: &str = "keys";

/// A JSON scalar that may be written as a number or as a string.
#[derive(Debug, Clone, PartialEq)]
pub enum Scalar {
    Number(Number),
    Text(String),
}

impl Scalar {
    /// `None` for anything that is neither a number nor a string.
    pub fn from_json(value: &Value) -> Option<Self> {
        match value {
            Value::Number(n) => Some(Scalar::Number(n.clone())),
            Value::String(s) => Some(Scalar::Text(s.clone())),
            _ => None,
        }
    }

    /// Integer reading, accepting integral floats such as `10.0`.
    pub fn as_int(&self) -> Option<i64> {
        match self {
            Scalar::Number(n) => n.as_i64().or_else(|| {
                n.as_f64()
                    .filter(|f| f.fract() == 0.0 && *f >= i64::MIN as f64 && *f < i64::MAX as f64)
                    .map(|f| f as i64)
            }),
            Scalar::Text(s) => s.trim().parse().ok(),
        }
    }

    /// Digit text handed to the decoder.
    ///
    /// JSON integers of any width are rendered exactly. Floats are rejected:
    /// they cannot carry an exact value.
    pub fn digit_text(&self) -> Result<String, SolveError> {
        match self {
            Scalar::Number(n) if n.is_f64() => Err(SolveError::invalid_input(format!(
                "numeric value {n} is not an exact integer; write it as a string"
            ))),
            Scalar::Number(n) => Ok(n.to_string()),
            Scalar::Text(s) => Ok(s.trim().to_string()),
        }
    }
}

impl fmt::Display for Scalar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Scalar::Number(n) => write!(f, "{n}"),
            Scalar::Text(s) => write!(f, "{}", s.trim()),
        }
    }
}

/// One labelled `{ base, value }` record as it appears in the document.
#[derive(Debug, Clone, PartialEq)]
pub struct RawRecord {
    pub base: Scalar,
    pub value: Scalar,
}

impl RawRecord {
    /// Read a record entry.
    ///
    /// `Ok(None)` when the entry is not an object or lacks `base`/`value`;
    /// `InvalidInput` when either field is present with the wrong JSON type.
    pub fn from_entry(entry: &Value) -> Result<Option<Self>, SolveError> {
        let Value::Object(fields) = entry else {
            return Ok(None);
        };
        let (Some(base), Some(value)) = (fields.get("base"), fields.get("value")) else {
            return Ok(None);
        };
        Ok(Some(Self {
            base: scalar_field("base", base)?,
            value: scalar_field("value", value)?,
        }))
    }

    /// Validate the base and pair it with the digit text.
    pub fn digit_value(&self) -> Result<DigitValue, SolveError> {
        let base = self.base.as_int().ok_or_else(|| SolveError::UnsupportedBase {
            base: self.base.to_string(),
        })?;
        Ok(DigitValue {
            base: check_base(base)?,
            text: self.value.digit_text()?,
        })
    }
}

/// Selection metadata under the reserved `"keys"` entry.
///
/// Kept as written and validated only when truncation is requested.
#[derive(Debug, Clone, PartialEq)]
pub struct Selection {
    entry: Value,
}

impl Selection {
    pub fn new(entry: Value) -> Self {
        Self { entry }
    }

    /// `keys.k`, or `None` when absent.
    ///
    /// Anything other than a non-negative integer is `InvalidInput` on the
    /// `keys` entry.
    pub fn k(&self) -> Result<Option<usize>, SolveError> {
        let Value::Object(fields) = &self.entry else {
            return Err(SolveError::invalid_input(format!(
                "selection metadata must be an object, got {}",
                self.entry
            ))
            .at_record(SELECTION_KEY));
        };
        let Some(raw) = fields.get("k").filter(|v| !v.is_null()) else {
            return Ok(None);
        };

        Scalar::from_json(raw)
            .and_then(|k| k.as_int())
            .and_then(|k| usize::try_from(k).ok())
            .map(Some)
            .ok_or_else(|| {
                SolveError::invalid_input(format!("`k` must be a non-negative integer, got {raw}"))
                    .at_record(SELECTION_KEY)
            })
    }
}

/// A parsed (not yet decoded) evidence document.
#[derive(Debug, Clone, Default)]
pub struct EvidenceDocument {
    pub selection: Option<Selection>,
    /// Well-formed records, in document order.
    pub records: Vec<(String, RawRecord)>,
    /// Labels of entries that were not `{ base, value }` records.
    pub malformed: Vec<String>,
}

impl EvidenceDocument {
    /// Build from an already-parsed JSON value.
    pub fn from_value(value: Value) -> Result<Self, SolveError> {
        let Value::Object(map) = value else {
            return Err(SolveError::invalid_input(
                "evidence document must be a JSON object",
            ));
        };
        Self::from_map(map)
    }

    fn from_map(map: Map<String, Value>) -> Result<Self, SolveError> {
        let mut doc = EvidenceDocument::default();
        for (label, entry) in map {
            if label == SELECTION_KEY {
                doc.selection = Some(Selection::new(entry));
                continue;
            }
            match RawRecord::from_entry(&entry).map_err(|e| e.at_record(&label))? {
                Some(rec) => doc.records.push((label, rec)),
                None => {
                    warn!(label = %label, "skipping entry without `base` and `value`");
                    doc.malformed.push(label);
                }
            }
        }
        Ok(doc)
    }

    /// `keys.k` to truncate to, when `use_k` is set.
    fn limit(&self, use_k: bool) -> Result<Option<usize>, SolveError> {
        if !use_k {
            return Ok(None);
        }
        Ok(self.selection.as_ref().map(Selection::k).transpose()?.flatten())
    }

    /// Record labels in evidence order.
    ///
    /// Numeric order when every label is a base-10 integer, otherwise
    /// byte-wise lexicographic order.
    pub fn ordered(&self) -> Vec<&(String, RawRecord)> {
        let mut entries: Vec<&(String, RawRecord)> = self.records.iter().collect();
        let numeric: Option<Vec<BigInt>> = entries.iter().map(|(label, _)| numeric_label(label)).collect();

        match numeric {
            Some(keys) => {
                let mut keyed: Vec<(BigInt, &(String, RawRecord))> = keys.into_iter().zip(entries).collect();
                keyed.sort_by(|a, b| a.0.cmp(&b.0).then_with(|| a.1.0.cmp(&b.1.0)));
                keyed.into_iter().map(|(_, e)| e).collect()
            }
            None => {
                entries.sort_by(|a, b| a.0.cmp(&b.0));
                entries
            }
        }
    }

    /// Ordered records, truncated to `limit` when given.
    fn selected(&self, limit: Option<usize>) -> Vec<&(String, RawRecord)> {
        let mut ordered = self.ordered();
        if let Some(limit) = limit {
            ordered.truncate(limit);
        }
        ordered
    }
}

fn scalar_field(name: &str, value: &Value) -> Result<Scalar, SolveError> {
    Scalar::from_json(value).ok_or_else(|| {
        SolveError::invalid_input(format!("`{name}` must be a number or a string, got {value}"))
    })
}

/// Load output: decoded items + bookkeeping for the run summary.
#[derive(Debug, Clone)]
pub struct Loaded<T> {
    pub items: Vec<T>,
    /// Well-formed records in the document (before truncation).
    pub records_read: usize,
    /// Labels skipped because they were not `{ base, value }` records.
    pub malformed: Vec<String>,
    /// `k` applied to the selection, if any.
    pub k_applied: Option<usize>,
}

/// Decode the points set.
///
/// `x` is the label decoded in base 10 when it parses, otherwise the 1-based
/// position among points decoded so far. `y` is the record value.
pub fn load_points(doc: &EvidenceDocument, use_k: bool) -> Result<Loaded<Point>, SolveError> {
    let k_applied = doc.limit(use_k)?;

    let mut points = Vec::new();
    for (label, rec) in doc.selected(k_applied) {
        let y = decode_record(label, rec)?;
        let x = numeric_label(label).unwrap_or_else(|| BigInt::from(points.len() + 1));
        debug!(label = %label, x = %x, y = %y, "decoded point");
        points.push(Point {
            x,
            y,
            label: label.clone(),
        });
    }

    Ok(Loaded {
        items: points,
        records_read: doc.records.len(),
        malformed: doc.malformed.clone(),
        k_applied,
    })
}

/// Decode the roots set.
///
/// With `use_k`, keeps the first `max(2, k)` roots so a quadratic always has
/// both of its roots available.
pub fn load_roots(doc: &EvidenceDocument, use_k: bool) -> Result<Loaded<Root>, SolveError> {
    let k_applied = doc.limit(use_k)?.map(|k| k.max(2));

    let mut roots = Vec::new();
    for (label, rec) in doc.selected(k_applied) {
        let r = decode_record(label, rec)?;
        debug!(label = %label, r = %r, "decoded root");
        roots.push(Root {
            r,
            label: label.clone(),
        });
    }

    Ok(Loaded {
        items: roots,
        records_read: doc.records.len(),
        malformed: doc.malformed.clone(),
        k_applied,
    })
}

/// Read and parse an evidence document from disk.
pub fn read_document(path: &Path) -> Result<EvidenceDocument, AppError> {
    let file = File::open(path)
        .map_err(|e| AppError::new(2, format!("Failed to read '{}': {e}", path.display())))?;
    let value: Value = serde_json::from_reader(BufReader::new(file))
        .map_err(|e| AppError::new(2, format!("Failed to parse '{}': {e}", path.display())))?;
    EvidenceDocument::from_value(value)
        .map_err(|e| AppError::new(e.exit_code(), format!("'{}': {e}", path.display())))
}

fn decode_record(label: &str, rec: &RawRecord) -> Result<BigInt, SolveError> {
    rec.digit_value()
        .and_then(|dv| dv.decode())
        .map_err(|e| e.at_record(label))
}

fn numeric_label(label: &str) -> Option<BigInt> {
    codec::decode(label, 10).ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;
    use serde_json::json;

    fn doc(value: Value) -> EvidenceDocument {
        EvidenceDocument::from_value(value).unwrap()
    }

    fn labels<T>(loaded: &Loaded<T>, f: impl Fn(&T) -> &str) -> Vec<String> {
        loaded.items.iter().map(|i| f(i).to_string()).collect()
    }

    #[test]
    fn numeric_labels_sort_numerically() {
        let d = doc(json!({
            "10": { "base": "10", "value": "100" },
            "2":  { "base": "2",  "value": "100" },
            "1":  { "base": 16,   "value": "a" },
        }));
        let loaded = load_points(&d, false).unwrap();
        assert_eq!(labels(&loaded, |p| &p.label), ["1", "2", "10"]);
        assert_eq!(loaded.items[0].x, BigInt::from(1));
        assert_eq!(loaded.items[0].y, BigInt::from(10));
        assert_eq!(loaded.items[1].y, BigInt::from(4));
        assert_eq!(loaded.items[2].x, BigInt::from(10));
    }

    #[test]
    fn mixed_labels_sort_lexicographically_with_positional_x() {
        let d = doc(json!({
            "b": { "base": "10", "value": "2" },
            "10": { "base": "10", "value": "3" },
            "a": { "base": "10", "value": "1" },
        }));
        let loaded = load_points(&d, false).unwrap();
        assert_eq!(labels(&loaded, |p| &p.label), ["10", "a", "b"]);
        // "10" keeps its numeric x; the others take their 1-based position.
        assert_eq!(loaded.items[0].x, BigInt::from(10));
        assert_eq!(loaded.items[1].x, BigInt::from(2));
        assert_eq!(loaded.items[2].x, BigInt::from(3));
    }

    #[test]
    fn use_k_truncates_points_and_keeps_two_roots() {
        let d = doc(json!({
            "keys": { "n": 4, "k": "1" },
            "1": { "base": "10", "value": "1" },
            "2": { "base": "10", "value": "2" },
            "3": { "base": "10", "value": "3" },
            "4": { "base": "10", "value": "4" },
        }));

        let points = load_points(&d, true).unwrap();
        assert_eq!(points.items.len(), 1);
        assert_eq!(points.k_applied, Some(1));

        let roots = load_roots(&d, true).unwrap();
        assert_eq!(labels(&roots, |r| &r.label), ["1", "2"]);

        let untruncated = load_points(&d, false).unwrap();
        assert_eq!(untruncated.items.len(), 4);
        assert_eq!(untruncated.k_applied, None);
    }

    #[test]
    fn malformed_records_are_skipped_and_reported() {
        let d = doc(json!({
            "1": { "base": "10", "value": "5" },
            "2": { "base": "10" },
            "3": "not a record",
        }));
        let loaded = load_points(&d, false).unwrap();
        assert_eq!(loaded.items.len(), 1);
        assert_eq!(loaded.malformed, ["2", "3"]);
        assert_eq!(loaded.records_read, 1);
    }

    #[test]
    fn bad_base_fails_with_label() {
        let d = doc(json!({
            "1": { "base": "10", "value": "5" },
            "2": { "base": "37", "value": "5" },
        }));
        let err = load_points(&d, false).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::UnsupportedBase);
        assert!(err.to_string().starts_with("record `2`"));

        let d = doc(json!({ "1": { "base": "ten", "value": "5" } }));
        assert_eq!(load_roots(&d, false).unwrap_err().kind(), ErrorKind::UnsupportedBase);
    }

    #[test]
    fn bad_digit_fails_with_label() {
        let d = doc(json!({ "x": { "base": "16", "value": "fg" } }));
        let err = load_roots(&d, false).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidDigit);
        assert!(err.to_string().contains("`x`"));
    }

    #[test]
    fn empty_value_is_invalid_input() {
        let d = doc(json!({ "1": { "base": "10", "value": "" } }));
        assert_eq!(load_points(&d, false).unwrap_err().kind(), ErrorKind::InvalidInput);
    }

    #[test]
    fn non_object_document_is_rejected() {
        let err = EvidenceDocument::from_value(json!([1, 2, 3])).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidInput);
    }

    #[test]
    fn numeric_values_are_accepted() {
        let d = doc(json!({ "1": { "base": 10, "value": 42 } }));
        assert_eq!(load_points(&d, false).unwrap().items[0].y, BigInt::from(42));
    }

    #[test]
    fn wide_integers_and_integral_float_bases_are_kept() {
        let d = doc(json!({
            "1": { "base": 10, "value": 18446744073709551615u64 },
            "2": { "base": 10.0, "value": "5" },
            "3": { "base": "10", "value": "7" },
        }));
        let loaded = load_points(&d, false).unwrap();
        assert!(loaded.malformed.is_empty());
        assert_eq!(labels(&loaded, |p| &p.label), ["1", "2", "3"]);
        assert_eq!(loaded.items[0].y, BigInt::from(u64::MAX));
        assert_eq!(loaded.items[1].y, BigInt::from(5));
    }

    #[test]
    fn numeric_value_is_read_as_digits_in_its_base() {
        let d = doc(json!({ "1": { "base": 2, "value": 101 } }));
        assert_eq!(load_points(&d, false).unwrap().items[0].y, BigInt::from(5));
    }

    #[test]
    fn mistyped_fields_fail_with_label() {
        for entry in [
            json!({ "base": "10", "value": [1, 2] }),
            json!({ "base": true, "value": "1" }),
            json!({ "base": "10", "value": null }),
        ] {
            let err = EvidenceDocument::from_value(json!({ "7": entry })).unwrap_err();
            assert_eq!(err.kind(), ErrorKind::InvalidInput);
            assert!(err.to_string().starts_with("record `7`"));
        }
    }

    #[test]
    fn float_value_is_not_exact() {
        let d = doc(json!({ "1": { "base": 10, "value": 1.5 } }));
        let err = load_points(&d, false).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidInput);
        assert!(err.to_string().contains("`1`"));
    }

    #[test]
    fn unusable_k_fails_only_when_requested() {
        for k in [json!(-1), json!("three"), json!(3.5), json!(true)] {
            let d = doc(json!({
                "keys": { "k": k },
                "1": { "base": "10", "value": "1" },
                "2": { "base": "10", "value": "2" },
            }));
            let err = load_points(&d, true).unwrap_err();
            assert_eq!(err.kind(), ErrorKind::InvalidInput);
            assert!(err.to_string().starts_with("record `keys`"));
            assert_eq!(load_roots(&d, true).unwrap_err().kind(), ErrorKind::InvalidInput);

            assert_eq!(load_points(&d, false).unwrap().items.len(), 2);
        }

        let d = doc(json!({ "keys": 4, "1": { "base": "10", "value": "1" } }));
        assert_eq!(load_points(&d, true).unwrap_err().kind(), ErrorKind::InvalidInput);
    }

    #[test]
    fn integral_float_k_truncates() {
        let d = doc(json!({
            "keys": { "n": 3, "k": 2.0 },
            "1": { "base": "10", "value": "1" },
            "2": { "base": "10", "value": "2" },
            "3": { "base": "10", "value": "3" },
        }));
        let loaded = load_points(&d, true).unwrap();
        assert_eq!(loaded.k_applied, Some(2));
        assert_eq!(loaded.items.len(), 2);
    }

    #[test]
    fn reads_document_from_disk() {
        use std::io::Write;

        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{ "keys": {{ "k": 2 }}, "1": {{ "base": "2", "value": "101" }} }}"#).unwrap();
        let d = read_document(file.path()).unwrap();
        assert_eq!(d.selection.as_ref().map(Selection::k), Some(Ok(Some(2))));
        assert_eq!(d.records.len(), 1);

        let missing = read_document(Path::new("/definitely/not/here.json")).unwrap_err();
        assert_eq!(missing.exit_code(), 2);
    }
}
