//! User-interaction controller over a chip data source.
//!
//! # Responsibility
//! - Translate input gestures (pick candidate, type text, delete) into data
//!   source mutations.
//! - Own the selected-token view and keep it registered on the source.
//!
//! # Invariants
//! - Every mutation goes through `ChipDataSource`; rows are never edited
//!   directly.
//! - Custom chips are created non-filterable, so unselecting one drops it.

use crate::model::chip::Chip;
use crate::options::ChipOptions;
use crate::service::selected_view::SelectedChipsView;
use crate::store::data_source::{ChipDataSource, DataSourceResult};
use crate::store::observer::ChangeObserver;
use log::debug;
use std::rc::Rc;

/// Expanded details of one selected token.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChipDetails {
    pub title: String,
    pub subtitle: Option<String>,
    /// Present only when avatars are enabled.
    pub avatar_uri: Option<String>,
    /// Whether the details panel offers a delete action.
    pub deletable: bool,
}

/// Chips input facade wiring a data source to its selected-token view.
pub struct ChipsInput<D: ChipDataSource> {
    source: D,
    options: ChipOptions,
    view: Rc<SelectedChipsView>,
}

impl<D: ChipDataSource> ChipsInput<D> {
    /// Wraps `source` and registers a fresh view on it.
    ///
    /// The view is seeded from the current selection, so a preloaded
    /// source renders immediately.
    pub fn new(mut source: D, options: ChipOptions) -> Self {
        let view = Rc::new(SelectedChipsView::new());
        view.on_chip_data_source_changed(&source);
        source.add_change_observer(view.clone());
        Self {
            source,
            options,
            view,
        }
    }

    pub fn source(&self) -> &D {
        &self.source
    }

    pub fn source_mut(&mut self) -> &mut D {
        &mut self.source
    }

    pub fn options(&self) -> &ChipOptions {
        &self.options
    }

    pub fn view(&self) -> &Rc<SelectedChipsView> {
        &self.view
    }

    /// Loads candidate chips into the picker pool.
    pub fn set_filterable_chips(&mut self, chips: Vec<Chip>) -> DataSourceResult<()> {
        self.source.set_filterable_chips(chips)
    }

    /// Candidates whose title contains `query` (case-insensitive), by title.
    pub fn candidates(&self, query: &str) -> Vec<Chip> {
        let needle = query.trim().to_lowercase();
        let mut matches: Vec<Chip> = self
            .source
            .filtered_chips()
            .into_iter()
            .filter(|chip| needle.is_empty() || chip.title.to_lowercase().contains(&needle))
            .collect();
        matches.sort_by(|a, b| a.title.cmp(&b.title).then_with(|| a.id.cmp(&b.id)));
        matches
    }

    /// Selects a candidate picked from the list.
    ///
    /// Returns whether the host should hide the keyboard.
    pub fn select_candidate(&mut self, chip: &Chip) -> DataSourceResult<bool> {
        self.source.take_chip(chip)?;
        Ok(self.options.hide_keyboard_on_chip_click)
    }

    /// Handles the keyboard "done" action for the typed `text`.
    ///
    /// Creates and selects a custom chip when allowed. Returns `None` for
    /// blank text or when custom chips are disabled.
    pub fn submit_text(&mut self, text: &str) -> DataSourceResult<Option<Chip>> {
        let title = text.trim();
        if title.is_empty() || !self.options.allow_custom_chips {
            debug!(
                "event=submit_text module=input status=ignored blank={} custom_allowed={}",
                title.is_empty(),
                self.options.allow_custom_chips
            );
            return Ok(None);
        }

        let chip = Chip::new(title);
        self.source.add_selected_chip(chip.clone())?;
        debug!(
            "event=submit_text module=input status=ok chip_id={}",
            chip.id
        );
        Ok(Some(chip))
    }

    /// Handles delete pressed on the input; unselects the last token when
    /// the input is already empty.
    pub fn delete_on_empty_input(&mut self, current_text: &str) -> DataSourceResult<Option<Chip>> {
        if !current_text.is_empty() {
            return Ok(None);
        }
        let count = self.source.selected_len();
        if count == 0 {
            return Ok(None);
        }
        self.source.replace_chip_at(count - 1).map(Some)
    }

    /// Token delete button.
    pub fn delete_chip_at(&mut self, position: usize) -> DataSourceResult<Chip> {
        self.source.replace_chip_at(position)
    }

    /// Token click; `None` when details are disabled.
    pub fn chip_details_at(&self, position: usize) -> DataSourceResult<Option<ChipDetails>> {
        if !self.options.show_details {
            return Ok(None);
        }
        let chip = self.source.selected_chip(position)?;
        Ok(Some(ChipDetails {
            title: chip.title,
            subtitle: chip.subtitle,
            avatar_uri: chip.avatar_uri.filter(|_| self.options.show_avatar),
            deletable: self.options.show_delete,
        }))
    }
}
