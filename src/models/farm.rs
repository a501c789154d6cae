//! Farm dataset structures
//!
//! This module contains the core data structures for loading and working with
//! the farm.json dataset: the ordered yield-prediction records plus the
//! finance and analytics sections rendered alongside them.

use serde::Deserialize;
use std::io;
use std::path::Path;
use thiserror::Error;

use super::enums::{CropKind, LoanStatus, MetricCategory, PredictionStatus};

/// A prediction record that violates the invariants the display logic assumes.
///
/// Raised at load time, never at display time. A bad record is skipped so the
/// rest of the dataset still renders.
#[derive(Debug, Error, PartialEq)]
pub enum ValidationError {
    #[error("{field}: confidence {confidence} is outside 0-100")]
    ConfidenceOutOfRange { field: String, confidence: u8 },
    #[error("{field}: predicted yield {value} is not a non-negative number")]
    InvalidYield { field: String, value: f64 },
}

/// One field's crop-yield prediction with its metadata.
///
/// Records are read-only once loaded; insertion order is display order.
#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct YieldPrediction {
    pub field: String,
    pub crop: CropKind,
    /// Predicted yield in tons/hectare. Rendered with exactly one decimal.
    pub predicted_yield: f64,
    /// Whole-number percentage in 0-100. Rendered as an integer.
    pub confidence: u8,
    pub is_encrypted: bool,
    pub status: PredictionStatus,
}

impl YieldPrediction {
    /// Check the range invariants the formatting layer assumes.
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.confidence > 100 {
            return Err(ValidationError::ConfidenceOutOfRange {
                field: self.field.clone(),
                confidence: self.confidence,
            });
        }
        if !self.predicted_yield.is_finite() || self.predicted_yield < 0.0 {
            return Err(ValidationError::InvalidYield {
                field: self.field.clone(),
                value: self.predicted_yield,
            });
        }
        Ok(())
    }

    /// Identity used to carry disclosure state across reloads.
    pub fn identity(&self) -> (&str, CropKind) {
        (self.field.as_str(), self.crop)
    }
}

/// A static dashboard tile that cannot be derived from the record list
/// (rainfall, temperature, available credit).
#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct StatEntry {
    pub title: String,
    pub value: String,
    pub trend: String,
    pub category: MetricCategory,
}

/// Credit standing shown on the finance page.
#[derive(Debug, Clone, Deserialize, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct CreditProfile {
    pub available_usd: u64,
    pub score: u32,
}

/// A loan application card on the finance page. Display only.
#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct LoanApplication {
    pub id: String,
    pub amount_usd: u64,
    pub purpose: String,
    pub status: LoanStatus,
    pub apr_percent: f64,
    pub term_months: u32,
}

/// Predicted vs. actual yield for one field on the analytics page.
#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct FieldPerformance {
    pub field: String,
    pub crop: CropKind,
    pub predicted: f64,
    pub actual: f64,
}

impl FieldPerformance {
    /// Prediction accuracy as a percentage: one minus the relative error of
    /// the prediction, so overshoot and undershoot score alike. Floors at 0
    /// when the actual is off by more than the whole prediction.
    pub fn accuracy(&self) -> f64 {
        if self.predicted <= 0.0 {
            return 0.0;
        }
        let error = (self.predicted - self.actual).abs() / self.predicted;
        ((1.0 - error) * 100.0).max(0.0)
    }
}

/// One month of prediction volume on the analytics page.
#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct MonthlyTrend {
    pub month: String,
    pub predictions: u32,
    pub verifications: u32,
}

impl MonthlyTrend {
    /// Share of predictions that reached verification, as a percentage.
    pub fn accuracy(&self) -> f64 {
        if self.predictions == 0 {
            return 0.0;
        }
        f64::from(self.verifications) / f64::from(self.predictions) * 100.0
    }
}

/// The full farm dataset.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FarmData {
    #[serde(default)]
    pub farm: String,
    /// Ordered yield-prediction records. Order is significant for stable
    /// layout, it carries no ranking.
    pub predictions: Vec<YieldPrediction>,
    #[serde(default)]
    pub stats: Vec<StatEntry>,
    #[serde(default)]
    pub credit: CreditProfile,
    #[serde(default)]
    pub loans: Vec<LoanApplication>,
    #[serde(default)]
    pub field_performance: Vec<FieldPerformance>,
    #[serde(default)]
    pub monthly_trends: Vec<MonthlyTrend>,
}

impl FarmData {
    /// Parse a farm dataset from JSON text.
    pub fn from_json(content: &str) -> io::Result<Self> {
        serde_json::from_str(content).map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))
    }

    /// Load a farm dataset from a JSON file.
    pub fn load(path: &Path) -> io::Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_json(&content)
    }

    /// Drop prediction records that fail validation, returning one error per
    /// rejected record. The surviving records keep their original order.
    pub fn sanitize(&mut self) -> Vec<ValidationError> {
        let mut rejected = Vec::new();
        self.predictions.retain(|p| match p.validate() {
            Ok(()) => true,
            Err(e) => {
                rejected.push(e);
                false
            }
        });
        rejected
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use std::path::PathBuf;

    fn prediction(field: &str, yield_value: f64, confidence: u8) -> YieldPrediction {
        YieldPrediction {
            field: field.to_string(),
            crop: CropKind::Corn,
            predicted_yield: yield_value,
            confidence,
            is_encrypted: false,
            status: PredictionStatus::Pending,
        }
    }

    fn create_temp_farm_file(content: &str) -> (tempfile::NamedTempFile, PathBuf) {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "{}", content).unwrap();
        let path = file.path().to_path_buf();
        (file, path)
    }

    #[test]
    fn test_farm_load_success() {
        let json = r#"{
            "farm": "Demo Farm",
            "predictions": [
                {
                    "field": "North Field A",
                    "crop": "corn",
                    "predictedYield": 12.4,
                    "confidence": 94,
                    "isEncrypted": false,
                    "status": "verified"
                }
            ],
            "loans": [
                {
                    "id": "LOAN-001",
                    "amountUsd": 50000,
                    "purpose": "Seed & Equipment",
                    "status": "approved",
                    "aprPercent": 4.5,
                    "termMonths": 12
                }
            ]
        }"#;
        let (_file, path) = create_temp_farm_file(json);

        let farm = FarmData::load(&path).unwrap();
        assert_eq!(farm.farm, "Demo Farm");
        assert_eq!(farm.predictions.len(), 1);
        assert_eq!(farm.predictions[0].field, "North Field A");
        assert_eq!(farm.predictions[0].crop, CropKind::Corn);
        assert_eq!(farm.predictions[0].status, PredictionStatus::Verified);
        assert_eq!(farm.loans.len(), 1);
        assert_eq!(farm.loans[0].status, LoanStatus::Approved);
        assert!(farm.stats.is_empty());
    }

    #[test]
    fn test_farm_load_file_not_found() {
        let path = PathBuf::from("/nonexistent/path/farm.json");
        let result = FarmData::load(&path);
        assert!(result.is_err());
        assert_eq!(result.unwrap_err().kind(), io::ErrorKind::NotFound);
    }

    #[test]
    fn test_farm_load_invalid_json() {
        let (_file, path) = create_temp_farm_file("{ invalid json }");

        let result = FarmData::load(&path);
        assert!(result.is_err());
        assert_eq!(result.unwrap_err().kind(), io::ErrorKind::InvalidData);
    }

    #[test]
    fn test_embedded_default_parses() {
        let farm = FarmData::from_json(include_str!("../../data/farm.json")).unwrap();
        assert_eq!(farm.predictions.len(), 6);
        assert_eq!(farm.loans.len(), 3);
        assert_eq!(farm.field_performance.len(), 4);
        assert_eq!(farm.monthly_trends.len(), 6);
    }

    #[test]
    fn test_validate_accepts_boundaries() {
        assert!(prediction("A", 0.0, 0).validate().is_ok());
        assert!(prediction("A", 12.4, 100).validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_out_of_range() {
        let err = prediction("A", 12.4, 101).validate().unwrap_err();
        assert_eq!(
            err,
            ValidationError::ConfidenceOutOfRange {
                field: "A".to_string(),
                confidence: 101
            }
        );

        let err = prediction("A", -1.0, 50).validate().unwrap_err();
        assert!(matches!(err, ValidationError::InvalidYield { .. }));

        let err = prediction("A", f64::NAN, 50).validate().unwrap_err();
        assert!(matches!(err, ValidationError::InvalidYield { .. }));
    }

    #[test]
    fn test_sanitize_skips_bad_records_keeps_rest() {
        let mut farm = FarmData::from_json(r#"{"predictions": []}"#).unwrap();
        farm.predictions = vec![
            prediction("Good 1", 12.4, 94),
            prediction("Bad", 8.7, 120),
            prediction("Good 2", 3.8, 87),
        ];

        let rejected = farm.sanitize();
        assert_eq!(rejected.len(), 1);
        assert_eq!(
            rejected[0].to_string(),
            "Bad: confidence 120 is outside 0-100"
        );
        let names: Vec<&str> = farm.predictions.iter().map(|p| p.field.as_str()).collect();
        assert_eq!(names, vec!["Good 1", "Good 2"]);
    }

    #[test]
    fn test_field_performance_accuracy() {
        // Values from the demo dataset; accuracy to one decimal.
        let cases = [
            (12.4, 12.1, 97.6),
            (8.7, 8.9, 97.7),
            (15.2, 14.8, 97.4),
            (3.8, 3.6, 94.7),
        ];
        for (predicted, actual, expected) in cases {
            let perf = FieldPerformance {
                field: "F".to_string(),
                crop: CropKind::Wheat,
                predicted,
                actual,
            };
            let rounded = (perf.accuracy() * 10.0).round() / 10.0;
            assert_eq!(rounded, expected);
        }
    }

    #[test]
    fn test_field_performance_accuracy_degenerate() {
        let perf = FieldPerformance {
            field: "F".to_string(),
            crop: CropKind::Wheat,
            predicted: 12.0,
            actual: 0.0,
        };
        assert_eq!(perf.accuracy(), 0.0);
    }

    #[test]
    fn test_monthly_trend_accuracy() {
        let trend = MonthlyTrend {
            month: "Jan".to_string(),
            predictions: 45,
            verifications: 42,
        };
        let rounded = (trend.accuracy() * 10.0).round() / 10.0;
        assert_eq!(rounded, 93.3);

        let empty = MonthlyTrend {
            month: "Jul".to_string(),
            predictions: 0,
            verifications: 0,
        };
        assert_eq!(empty.accuracy(), 0.0);
    }

    #[test]
    fn test_identity() {
        let p = prediction("East Field B", 8.7, 89);
        assert_eq!(p.identity(), ("East Field B", CropKind::Corn));
    }
}
