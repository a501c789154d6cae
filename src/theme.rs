//! Theme module for agrovault-tui
//!
//! This module provides a centralized color palette and styling constants
//! for the "evening farmstead" aesthetic, plus the mapping from badge tones
//! to concrete colors.

use ratatui::style::Color;

use crate::models::{BadgeTone, LoanStatus};

// ============================================================================
// Background Colors - Dusk Palette
// ============================================================================

/// Primary background color - deep soil brown-black (#0e0c08)
pub const BG_PRIMARY: Color = Color::Rgb(14, 12, 8);

/// Secondary background color - slightly lighter (#18150f)
pub const BG_SECONDARY: Color = Color::Rgb(24, 21, 15);

/// Tertiary background color - for highlighted areas (#221e16)
pub const BG_TERTIARY: Color = Color::Rgb(34, 30, 22);

/// Subtle border color (#2a251a)
pub const BORDER_SUBTLE: Color = Color::Rgb(42, 37, 26);

// ============================================================================
// Accent Colors
// ============================================================================

/// Primary green accent - crop green (#4ade80)
pub const GREEN_PRIMARY: Color = Color::Rgb(74, 222, 128);

/// Amber accent - wheat gold (#fbbf24)
pub const AMBER_ACCENT: Color = Color::Rgb(251, 191, 36);

/// Sky blue - rainfall and water (#38bdf8)
pub const SKY_BLUE: Color = Color::Rgb(56, 189, 248);

/// Red error color (#f87171)
pub const RED_ERROR: Color = Color::Rgb(248, 113, 113);

// ============================================================================
// Text Colors
// ============================================================================

/// Primary text color - bright white (#e2e8f0)
pub const TEXT_PRIMARY: Color = Color::Rgb(226, 232, 240);

/// Secondary text color - muted gray (#94a3b8)
pub const TEXT_SECONDARY: Color = Color::Rgb(148, 163, 184);

/// Muted text color - for labels and hints (#64748b)
pub const TEXT_MUTED: Color = Color::Rgb(100, 116, 139);

/// Color for a status badge tone.
pub fn badge_color(tone: BadgeTone) -> Color {
    match tone {
        BadgeTone::Neutral => TEXT_MUTED,
        BadgeTone::Accent => AMBER_ACCENT,
        BadgeTone::Primary => GREEN_PRIMARY,
    }
}

/// Color for a loan status indicator.
pub fn loan_color(status: LoanStatus) -> Color {
    match status {
        LoanStatus::Approved => GREEN_PRIMARY,
        LoanStatus::Pending => AMBER_ACCENT,
        LoanStatus::Processing => SKY_BLUE,
    }
}
