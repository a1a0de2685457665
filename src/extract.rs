//! Loss extraction - pull `total_loss` values out of parsed log records
//!
//! Records without a `total_loss` field are skipped (training logs mix loss
//! lines with checkpoints, eval summaries and the like). Records that carry
//! the field with a non-float value are fatal: integer or string losses mean
//! the log format drifted, and the graph would silently lie about it.

use serde_json::Value;

use crate::reader::LogRecord;
use crate::{Error, Result};

/// A non-empty, ordered series of loss values.
///
/// Construction via [`LossSeries::try_new`] enforces non-emptiness, so every
/// series in circulation can be rendered without a degenerate axis.
#[derive(Debug, Clone, PartialEq)]
pub struct LossSeries(Vec<f64>);

impl LossSeries {
    /// Build a series from extracted values.
    ///
    /// # Errors
    ///
    /// Returns [`Error::EmptyData`] if `values` is empty.
    pub fn try_new(values: Vec<f64>) -> Result<Self> {
        if values.is_empty() {
            return Err(Error::EmptyData);
        }
        Ok(Self(values))
    }

    /// Number of points in the series (always at least 1).
    #[must_use]
    #[allow(clippy::len_without_is_empty)]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// The values in log order.
    #[must_use]
    pub fn values(&self) -> &[f64] {
        &self.0
    }

    /// Smallest loss in the series.
    #[must_use]
    pub fn min(&self) -> f64 {
        self.0.iter().copied().fold(f64::INFINITY, f64::min)
    }

    /// Largest loss in the series.
    #[must_use]
    pub fn max(&self) -> f64 {
        self.0.iter().copied().fold(f64::NEG_INFINITY, f64::max)
    }
}

/// Whether a JSON value is a float in the strict sense.
///
/// `1.0` and `1e3` qualify; `1` does not. Integer-looking losses are
/// rejected rather than coerced so that a format change upstream surfaces
/// as an error instead of a plausible graph.
#[must_use]
pub fn is_strict_float(value: &Value) -> bool {
    matches!(value, Value::Number(n) if n.is_f64())
}

/// Extract the ordered `total_loss` series from a batch of records.
///
/// # Errors
///
/// - [`Error::TypeMismatch`] if a record carries `total_loss` with a
///   non-float value, reporting the 0-based record index
/// - [`Error::EmptyData`] if no record carries `total_loss`
pub fn extract_losses(records: &[LogRecord]) -> Result<LossSeries> {
    let candidates: Vec<(usize, &Value)> = records
        .iter()
        .enumerate()
        .filter_map(|(idx, record)| record.total_loss().map(|value| (idx, value)))
        .collect();

    let mut values = Vec::with_capacity(candidates.len());
    for (idx, value) in candidates {
        match value.as_f64() {
            Some(f) if is_strict_float(value) => values.push(f),
            _ => {
                return Err(Error::TypeMismatch {
                    record: idx,
                    value: value.to_string(),
                })
            }
        }
    }

    LossSeries::try_new(values)
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    fn rec(s: &str) -> LogRecord {
        serde_json::from_str(s).unwrap()
    }

    #[test]
    fn test_extract_skips_records_without_loss() {
        let records = vec![
            rec(r#"{"total_loss": 4.5}"#),
            rec(r#"{"checkpoint": "step-100"}"#),
            rec(r#"{"total_loss": 3.25, "step": 2}"#),
        ];

        let series = extract_losses(&records).unwrap();
        assert_eq!(series.values(), &[4.5, 3.25], "order must follow the log");
    }

    #[test]
    fn test_extract_empty_input() {
        let err = extract_losses(&[]).unwrap_err();
        assert!(matches!(err, Error::EmptyData));
    }

    #[test]
    fn test_extract_no_loss_fields() {
        let records = vec![rec(r#"{"step": 1}"#), rec(r#"{"step": 2}"#)];
        let err = extract_losses(&records).unwrap_err();
        assert!(matches!(err, Error::EmptyData));
    }

    #[test]
    fn test_extract_rejects_integer_loss() {
        let records = vec![rec(r#"{"total_loss": 4.5}"#), rec(r#"{"total_loss": 4}"#)];

        let err = extract_losses(&records).unwrap_err();
        match err {
            Error::TypeMismatch { record, value } => {
                assert_eq!(record, 1);
                assert_eq!(value, "4");
            }
            other => panic!("expected TypeMismatch, got {other:?}"),
        }
    }

    #[test]
    fn test_extract_rejects_non_numeric_loss() {
        for bad in ["\"4.5\"", "true", "null", "[4.5]"] {
            let records = vec![rec(&format!(r#"{{"total_loss": {bad}}}"#))];
            let err = extract_losses(&records).unwrap_err();
            assert!(
                matches!(err, Error::TypeMismatch { record: 0, .. }),
                "value {bad} must be rejected"
            );
        }
    }

    #[test]
    fn test_extract_accepts_float_spellings() {
        let records = vec![
            rec(r#"{"total_loss": 1e3}"#),
            rec(r#"{"total_loss": -0.5}"#),
            rec(r#"{"total_loss": 0.0}"#),
        ];

        let series = extract_losses(&records).unwrap();
        assert_eq!(series.values(), &[1000.0, -0.5, 0.0]);
    }

    #[test]
    fn test_is_strict_float() {
        assert!(is_strict_float(&json!(1.0)));
        assert!(is_strict_float(&json!(1e3)));
        assert!(!is_strict_float(&json!(1)));
        assert!(!is_strict_float(&json!("1.0")));
        assert!(!is_strict_float(&json!(null)));
    }

    #[test]
    fn test_series_min_max() {
        let series = LossSeries::try_new(vec![3.0, 1.5, 2.25]).unwrap();
        assert_eq!(series.len(), 3);
        assert!((series.min() - 1.5).abs() < f64::EPSILON);
        assert!((series.max() - 3.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_series_rejects_empty() {
        let err = LossSeries::try_new(Vec::new()).unwrap_err();
        assert!(matches!(err, Error::EmptyData));
    }
}
