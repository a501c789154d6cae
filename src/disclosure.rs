//! Disclosure state for yield prediction records
//!
//! Each prediction card owns one `DisclosureState` deciding whether its
//! numeric values are shown in plaintext or masked. Unencrypted records have
//! nothing to hide and are always shown; encrypted records start masked and
//! are revealed only by an explicit user toggle. Reaching `verified` status
//! does not reveal a record by itself.

use crate::models::YieldPrediction;

/// Masked rendering of a yield value.
pub const MASKED_YIELD: &str = "••• tons/hectare";

/// Masked rendering of a confidence value.
pub const MASKED_CONFIDENCE: &str = "••%";

/// Per-record reveal toggle. States are fully isolated: one per record,
/// created and dropped with it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DisclosureState {
    encrypted: bool,
    revealed: bool,
}

impl DisclosureState {
    /// Initialize for a record: unencrypted records are revealed from the
    /// start, encrypted ones start masked.
    pub fn new(record: &YieldPrediction) -> Self {
        Self {
            encrypted: record.is_encrypted,
            revealed: !record.is_encrypted,
        }
    }

    /// Flip the reveal toggle. Silent no-op for unencrypted records, which
    /// never offer a toggle affordance in the first place.
    pub fn toggle(&mut self) {
        if self.encrypted {
            self.revealed = !self.revealed;
        }
    }

    /// Carry a previous reveal decision across a data reload. Only applies
    /// while the record is still encrypted; `new()` already forces revealed
    /// for unencrypted records.
    pub fn carry_over(&mut self, previous: DisclosureState) {
        if self.encrypted && previous.encrypted {
            self.revealed = previous.revealed;
        }
    }

    pub fn revealed(&self) -> bool {
        self.revealed
    }

    /// Whether a toggle affordance should be offered for this record.
    pub fn has_toggle(&self) -> bool {
        self.encrypted
    }
}

/// Format a record's predicted yield for display.
///
/// Revealed values render with exactly one fractional digit (Rust's `{:.1}`
/// formatting, which rounds half to even); masked values render as the
/// placeholder glyphs.
pub fn format_yield(record: &YieldPrediction, state: &DisclosureState) -> String {
    if state.revealed() {
        format!("{:.1} tons/hectare", record.predicted_yield)
    } else {
        MASKED_YIELD.to_string()
    }
}

/// Format a record's confidence for display. Confidence is always a whole
/// percentage; no fractional confidences occur.
pub fn format_confidence(record: &YieldPrediction, state: &DisclosureState) -> String {
    if state.revealed() {
        format!("{}%", record.confidence)
    } else {
        MASKED_CONFIDENCE.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{CropKind, PredictionStatus};

    fn record(yield_value: f64, confidence: u8, encrypted: bool) -> YieldPrediction {
        YieldPrediction {
            field: "North Field A".to_string(),
            crop: CropKind::Corn,
            predicted_yield: yield_value,
            confidence,
            is_encrypted: encrypted,
            status: PredictionStatus::Verified,
        }
    }

    #[test]
    fn test_unencrypted_always_revealed() {
        let r = record(12.4, 94, false);
        let mut state = DisclosureState::new(&r);
        assert!(state.revealed());
        assert!(!state.has_toggle());
        assert_eq!(format_yield(&r, &state), "12.4 tons/hectare");
        assert_eq!(format_confidence(&r, &state), "94%");

        // Toggle is a no-op regardless of call count.
        for _ in 0..5 {
            state.toggle();
            assert!(state.revealed());
        }
    }

    #[test]
    fn test_encrypted_starts_masked() {
        let r = record(8.7, 89, true);
        let state = DisclosureState::new(&r);
        assert!(!state.revealed());
        assert!(state.has_toggle());
        assert_eq!(format_yield(&r, &state), "••• tons/hectare");
        assert_eq!(format_confidence(&r, &state), "••%");
    }

    #[test]
    fn test_encrypted_toggle_is_involutive() {
        let r = record(8.7, 89, true);
        let mut state = DisclosureState::new(&r);

        for round in 1..=6 {
            state.toggle();
            // Odd number of toggles reveals, even masks again.
            assert_eq!(state.revealed(), round % 2 == 1);
        }
    }

    #[test]
    fn test_encrypted_reveal_shows_true_values() {
        let r = record(8.7, 89, true);
        let mut state = DisclosureState::new(&r);
        state.toggle();
        assert_eq!(format_yield(&r, &state), "8.7 tons/hectare");
        assert_eq!(format_confidence(&r, &state), "89%");
    }

    #[test]
    fn test_verified_encrypted_record_stays_masked() {
        // Verification never auto-reveals; only the manual toggle does.
        let r = record(15.2, 92, true);
        let state = DisclosureState::new(&r);
        assert_eq!(r.status, PredictionStatus::Verified);
        assert!(!state.revealed());
    }

    #[test]
    fn test_yield_always_one_decimal() {
        let state = DisclosureState::new(&record(12.0, 90, false));
        assert_eq!(format_yield(&record(12.0, 90, false), &state), "12.0 tons/hectare");
        assert_eq!(format_yield(&record(12.4, 90, false), &state), "12.4 tons/hectare");
        assert_eq!(format_yield(&record(18.55, 90, false), &state), "18.6 tons/hectare");
        assert_eq!(format_yield(&record(0.0, 90, false), &state), "0.0 tons/hectare");
    }

    #[test]
    fn test_confidence_bounds() {
        let state = DisclosureState::new(&record(1.0, 0, false));
        assert_eq!(format_confidence(&record(1.0, 0, false), &state), "0%");
        assert_eq!(format_confidence(&record(1.0, 100, false), &state), "100%");
    }

    #[test]
    fn test_carry_over_preserves_reveal_for_encrypted() {
        let r = record(8.7, 89, true);
        let mut old = DisclosureState::new(&r);
        old.toggle();
        assert!(old.revealed());

        let mut fresh = DisclosureState::new(&r);
        fresh.carry_over(old);
        assert!(fresh.revealed());
    }

    #[test]
    fn test_carry_over_ignored_when_no_longer_encrypted() {
        let encrypted = record(8.7, 89, true);
        let old = DisclosureState::new(&encrypted);

        let plain = record(8.7, 89, false);
        let mut fresh = DisclosureState::new(&plain);
        fresh.carry_over(old);
        // Unencrypted records are always revealed, whatever history says.
        assert!(fresh.revealed());
        assert!(!fresh.has_toggle());
    }
}
