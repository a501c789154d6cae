//! Cross-record aggregation for dashboard and analytics tiles
//!
//! Summaries are computed over the true record values regardless of any
//! disclosure state: aggregation is privileged by design (the oracle sees
//! real values, the market does not). Tiles that cannot be derived from the
//! record list come from the dataset's static `stats` section instead.

use crate::models::{FarmData, MetricCategory, PredictionStatus, YieldPrediction};
use crate::utils::format_thousands;

/// Statistics derived from the full prediction list.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct FarmSummary {
    pub total: usize,
    pub verified: usize,
    pub encrypted: usize,
    pub average_confidence: f64,
    pub average_yield: f64,
}

/// A named dashboard statistic ready for rendering.
#[derive(Debug, Clone, PartialEq)]
pub struct SummaryMetric {
    pub title: String,
    pub value: String,
    pub trend: String,
    pub category: MetricCategory,
}

/// Aggregate the prediction list. Pure: output depends only on the input
/// sequence, and an empty sequence yields the zeroed summary.
pub fn summarize(records: &[YieldPrediction]) -> FarmSummary {
    if records.is_empty() {
        return FarmSummary::default();
    }

    let total = records.len();
    let verified = records
        .iter()
        .filter(|r| r.status == PredictionStatus::Verified)
        .count();
    let encrypted = records.iter().filter(|r| r.is_encrypted).count();
    let confidence_sum: f64 = records.iter().map(|r| f64::from(r.confidence)).sum();
    let yield_sum: f64 = records.iter().map(|r| r.predicted_yield).sum();

    FarmSummary {
        total,
        verified,
        encrypted,
        average_confidence: confidence_sum / total as f64,
        average_yield: yield_sum / total as f64,
    }
}

/// Dashboard header tiles: live-derived numbers first, then the static
/// environment/finance tiles carried in the dataset.
pub fn dashboard_metrics(farm: &FarmData) -> Vec<SummaryMetric> {
    let summary = summarize(&farm.predictions);

    let mut metrics = vec![
        SummaryMetric {
            title: "Fields Tracked".to_string(),
            value: summary.total.to_string(),
            trend: "This season".to_string(),
            category: MetricCategory::Predictions,
        },
        SummaryMetric {
            title: "Avg Confidence".to_string(),
            value: format!("{:.1}%", summary.average_confidence),
            trend: "Across all fields".to_string(),
            category: MetricCategory::Predictions,
        },
        SummaryMetric {
            title: "Verified".to_string(),
            value: format!("{}/{}", summary.verified, summary.total),
            trend: "Oracle confirmed".to_string(),
            category: MetricCategory::Predictions,
        },
    ];

    for stat in &farm.stats {
        metrics.push(SummaryMetric {
            title: stat.title.clone(),
            value: stat.value.clone(),
            trend: stat.trend.clone(),
            category: stat.category,
        });
    }

    metrics
}

/// Analytics header tiles, all derived live from the dataset.
pub fn analytics_metrics(farm: &FarmData) -> Vec<SummaryMetric> {
    let summary = summarize(&farm.predictions);

    let yield_accuracy = if farm.field_performance.is_empty() {
        0.0
    } else {
        let sum: f64 = farm.field_performance.iter().map(|f| f.accuracy()).sum();
        sum / farm.field_performance.len() as f64
    };

    let verifications: u64 = farm
        .monthly_trends
        .iter()
        .map(|m| u64::from(m.verifications))
        .sum();
    let logged: u64 = farm
        .monthly_trends
        .iter()
        .map(|m| u64::from(m.predictions))
        .sum();

    vec![
        SummaryMetric {
            title: "Yield Accuracy".to_string(),
            value: format!("{:.1}%", yield_accuracy),
            trend: "Predicted vs actual".to_string(),
            category: MetricCategory::Predictions,
        },
        SummaryMetric {
            title: "Oracle Verifications".to_string(),
            value: format_thousands(verifications),
            trend: "Last 6 months".to_string(),
            category: MetricCategory::Predictions,
        },
        SummaryMetric {
            title: "Predictions Logged".to_string(),
            value: format_thousands(logged),
            trend: "Last 6 months".to_string(),
            category: MetricCategory::Predictions,
        },
        SummaryMetric {
            title: "Prediction Confidence".to_string(),
            value: format!("{:.1}%", summary.average_confidence),
            trend: "Average across fields".to_string(),
            category: MetricCategory::Predictions,
        },
    ]
}
