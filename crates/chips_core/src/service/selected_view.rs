//! Ordered token rows for the selected chips.
//!
//! # Responsibility
//! - Mirror `selected_chips()` into positional rows a renderer can bind.
//! - Track whether the "N selected" header should be shown.
//!
//! # Invariants
//! - Rows are refreshed only from change notifications, never mutated here.
//! - Row order equals the store's title-sorted selected order.

use crate::model::chip::Chip;
use crate::store::data_source::ChipQuery;
use crate::store::observer::ChangeObserver;
use std::cell::{Cell, Ref, RefCell};

/// Change observer holding the last rendered selection.
#[derive(Debug, Default)]
pub struct SelectedChipsView {
    rows: RefCell<Vec<Chip>>,
    refreshes: Cell<u64>,
}

impl SelectedChipsView {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn item_count(&self) -> usize {
        self.rows.borrow().len()
    }

    pub fn chip_at(&self, position: usize) -> Option<Chip> {
        self.rows.borrow().get(position).cloned()
    }

    pub fn rows(&self) -> Ref<'_, Vec<Chip>> {
        self.rows.borrow()
    }

    /// The header (and token strip) is hidden while nothing is selected.
    pub fn header_visible(&self) -> bool {
        self.item_count() > 0
    }

    /// Number of change notifications received.
    pub fn refresh_count(&self) -> u64 {
        self.refreshes.get()
    }
}

impl ChangeObserver for SelectedChipsView {
    fn on_chip_data_source_changed(&self, source: &dyn ChipQuery) {
        *self.rows.borrow_mut() = source.selected_chips();
        self.refreshes.set(self.refreshes.get() + 1);
    }
}
