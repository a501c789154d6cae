//! Enums used throughout the AgroVault TUI
//!
//! This module contains the closed variant types for crops, prediction and
//! loan statuses, badge tones, and page navigation.

use serde::Deserialize;

/// Crop kinds known to the demo dataset.
///
/// Purely descriptive: a display glyph and a label, no behavior beyond that.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CropKind {
    Corn,
    Wheat,
    Potato,
    Sunflower,
    Tomato,
    Blueberry,
}

impl CropKind {
    pub fn glyph(&self) -> &'static str {
        match self {
            CropKind::Corn => "🌽",
            CropKind::Wheat => "🌾",
            CropKind::Potato => "🥔",
            CropKind::Sunflower => "🌻",
            CropKind::Tomato => "🍅",
            CropKind::Blueberry => "🫐",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            CropKind::Corn => "Corn",
            CropKind::Wheat => "Wheat",
            CropKind::Potato => "Potatoes",
            CropKind::Sunflower => "Sunflower",
            CropKind::Tomato => "Tomatoes",
            CropKind::Blueberry => "Blueberries",
        }
    }
}

/// Visual tone for a status badge. Mapping tones to concrete colors is the
/// theme's job; nothing gates disclosure on these.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BadgeTone {
    Neutral,
    Accent,
    Primary,
}

/// Verification status of a yield prediction.
///
/// `verified` is terminal. Transitions are driven externally (the oracle
/// narrative); this crate only renders whichever status a record carries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PredictionStatus {
    Pending,
    Processing,
    Verified,
}

impl PredictionStatus {
    pub fn label(&self) -> &'static str {
        match self {
            PredictionStatus::Pending => "pending",
            PredictionStatus::Processing => "processing",
            PredictionStatus::Verified => "verified",
        }
    }

    /// Badge tone for this status. Exhaustive on purpose: adding a status
    /// without deciding its tone should not compile.
    pub fn badge(&self) -> BadgeTone {
        match self {
            PredictionStatus::Pending => BadgeTone::Neutral,
            PredictionStatus::Processing => BadgeTone::Accent,
            PredictionStatus::Verified => BadgeTone::Primary,
        }
    }
}

/// Status of a loan application on the finance page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LoanStatus {
    Approved,
    Pending,
    Processing,
}

impl LoanStatus {
    pub fn label(&self) -> &'static str {
        match self {
            LoanStatus::Approved => "approved",
            LoanStatus::Pending => "pending",
            LoanStatus::Processing => "processing",
        }
    }
}

/// Category tag for a dashboard metric tile.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MetricCategory {
    Predictions,
    Finance,
    Environment,
}

/// Pages of the dashboard, cycled with Tab / digit keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Page {
    #[default]
    Dashboard,
    Predictions,
    Finance,
    Analytics,
}

impl Page {
    pub const ALL: [Page; 4] = [
        Page::Dashboard,
        Page::Predictions,
        Page::Finance,
        Page::Analytics,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Page::Dashboard => "Dashboard",
            Page::Predictions => "Predictions",
            Page::Finance => "Finance",
            Page::Analytics => "Analytics",
        }
    }

    pub fn next(&self) -> Self {
        match self {
            Page::Dashboard => Page::Predictions,
            Page::Predictions => Page::Finance,
            Page::Finance => Page::Analytics,
            Page::Analytics => Page::Dashboard,
        }
    }

    pub fn prev(&self) -> Self {
        match self {
            Page::Dashboard => Page::Analytics,
            Page::Predictions => Page::Dashboard,
            Page::Finance => Page::Predictions,
            Page::Analytics => Page::Finance,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_badge_mapping() {
        assert_eq!(PredictionStatus::Pending.badge(), BadgeTone::Neutral);
        assert_eq!(PredictionStatus::Processing.badge(), BadgeTone::Accent);
        assert_eq!(PredictionStatus::Verified.badge(), BadgeTone::Primary);
    }

    #[test]
    fn test_status_deserialize_lowercase() {
        let status: PredictionStatus = serde_json::from_str(r#""processing""#).unwrap();
        assert_eq!(status, PredictionStatus::Processing);
    }

    #[test]
    fn test_crop_labels() {
        assert_eq!(CropKind::Potato.label(), "Potatoes");
        assert_eq!(CropKind::Corn.glyph(), "🌽");
    }

    #[test]
    fn test_page_cycle_roundtrip() {
        for page in Page::ALL {
            assert_eq!(page.next().prev(), page);
        }
        assert_eq!(Page::Analytics.next(), Page::Dashboard);
    }

    #[test]
    fn test_page_default() {
        assert_eq!(Page::default(), Page::Dashboard);
    }
}
