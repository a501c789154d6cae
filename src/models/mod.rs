//! Data models for the AgroVault TUI
//!
//! This module contains the core data structures:
//! - Farm dataset types for loading farm.json (predictions, loans, analytics)
//! - Enums for crops, statuses, badge tones, and page navigation

pub mod enums;
pub mod farm;

// Re-exports for convenient access
pub use enums::{BadgeTone, CropKind, LoanStatus, MetricCategory, Page, PredictionStatus};
pub use farm::{
    CreditProfile, FarmData, FieldPerformance, LoanApplication, MonthlyTrend, StatEntry,
    ValidationError, YieldPrediction,
};
