//! Application state and core logic for the AgroVault TUI.
//!
//! This module contains the `App` struct which holds the loaded farm
//! dataset, one disclosure state per prediction record, and the
//! navigation/selection state for the UI.

use std::io;
use std::sync::{Arc, Mutex};

use crate::cli::{CliConfig, DataSource};
use crate::disclosure::DisclosureState;
use crate::models::{FarmData, Page, ValidationError};

/// Application state
pub struct App {
    pub source: DataSource,
    pub farm: FarmData,
    /// One disclosure state per prediction record, same order.
    pub disclosure: Vec<DisclosureState>,
    /// Records rejected by validation at the last load.
    pub skipped: usize,
    pub page: Page,
    /// Index of the selected prediction card.
    pub selected: usize,
    pub needs_reload: Arc<Mutex<bool>>,
}

impl App {
    pub fn new(config: CliConfig) -> io::Result<Self> {
        let farm = match &config.source {
            DataSource::File(path) => FarmData::load(path)?,
            DataSource::Embedded => FarmData::from_json(DataSource::embedded_content())?,
        };

        let mut app = Self {
            source: config.source,
            farm: FarmData::from_json(r#"{"predictions": []}"#)?,
            disclosure: Vec::new(),
            skipped: 0,
            page: Page::default(),
            selected: 0,
            needs_reload: Arc::new(Mutex::new(false)),
        };
        // Warnings go to stderr here only, before the alternate screen is
        // entered. Later reloads surface rejections through `skipped`.
        for err in &app.apply_dataset(farm) {
            eprintln!("Skipping prediction record: {}", err);
        }

        Ok(app)
    }

    /// Install a freshly loaded dataset: validate it, rebuild disclosure
    /// states, and carry over reveal decisions for records whose identity
    /// (field + crop) is unchanged. The swap is all-or-nothing; the UI never
    /// observes a partially populated record list. Returns the validation
    /// errors for the rejected records; must not write to the terminal, it
    /// runs inside the draw loop on live reload.
    pub fn apply_dataset(&mut self, mut farm: FarmData) -> Vec<ValidationError> {
        let rejected = farm.sanitize();

        let mut disclosure: Vec<DisclosureState> = Vec::with_capacity(farm.predictions.len());
        for record in &farm.predictions {
            let mut state = DisclosureState::new(record);
            let previous = self
                .farm
                .predictions
                .iter()
                .position(|p| p.identity() == record.identity())
                .map(|i| self.disclosure[i]);
            if let Some(previous) = previous {
                state.carry_over(previous);
            }
            disclosure.push(state);
        }

        self.farm = farm;
        self.disclosure = disclosure;
        self.skipped = rejected.len();
        if self.selected >= self.farm.predictions.len() {
            self.selected = self.farm.predictions.len().saturating_sub(1);
        }
        rejected
    }

    /// Reload the dataset from disk if the watcher flagged a change.
    pub fn reload_if_needed(&mut self) {
        let needs_reload = {
            let Ok(mut flag) = self.needs_reload.lock() else {
                return;
            };
            if *flag {
                *flag = false;
                true
            } else {
                false
            }
        };

        if needs_reload {
            if let DataSource::File(path) = &self.source {
                // A failed reload keeps the current dataset on screen.
                if let Ok(farm) = FarmData::load(path) {
                    self.apply_dataset(farm);
                }
            }
        }
    }

    /// Toggle the reveal state of the selected prediction card. No-op when
    /// the selected record is unencrypted or nothing is selected.
    pub fn toggle_selected(&mut self) {
        if let Some(state) = self.disclosure.get_mut(self.selected) {
            state.toggle();
        }
    }

    pub fn select_next(&mut self) {
        let len = self.farm.predictions.len();
        if len > 0 && self.selected + 1 < len {
            self.selected += 1;
        }
    }

    pub fn select_prev(&mut self) {
        self.selected = self.selected.saturating_sub(1);
    }

    pub fn next_page(&mut self) {
        self.page = self.page.next();
    }

    pub fn prev_page(&mut self) {
        self.page = self.page.prev();
    }
}
