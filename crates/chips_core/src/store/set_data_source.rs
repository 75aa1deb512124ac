//! Hash-set backed chip data source.
//!
//! # Responsibility
//! - Own the `original`, `filtered` and `selected` partitions.
//! - Express every move between partitions as a paired remove + insert.
//! - Fan out notifications synchronously, change observers first.
//!
//! # Invariants
//! - `filtered ∩ selected = ∅`; inserts into `filtered` skip selected chips
//!   and inserts into `selected` pull the chip out of `filtered`.
//! - `filtered ⊆ original`.
//! - Stored chips decide filterable status, never the caller's lookalike.

use crate::model::chip::Chip;
use crate::store::data_source::{
    ChipDataSource, ChipQuery, DataSourceError, DataSourceResult, Partition,
};
use crate::store::observer::{ChangeObserver, ObserverRegistry, SelectionObserver};
use log::{debug, trace, warn};
use std::collections::HashSet;
use std::rc::Rc;

/// In-memory data source keyed on chip identity.
#[derive(Default)]
pub struct SetChipDataSource {
    original: HashSet<Chip>,
    filtered: HashSet<Chip>,
    selected: HashSet<Chip>,
    observers: ObserverRegistry,
}

impl SetChipDataSource {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn observers(&self) -> &ObserverRegistry {
        &self.observers
    }

    fn notify_changed(&self) {
        trace!(
            "event=notify_changed module=store observers={} original={} filtered={} selected={}",
            self.observers.change_observer_count(),
            self.original.len(),
            self.filtered.len(),
            self.selected.len()
        );
        self.observers.notify_changed(self);
    }

    /// Adds one candidate; returns `false` when the chip is currently selected.
    fn insert_candidate(&mut self, mut chip: Chip) -> bool {
        if self.selected.contains(&chip.id) {
            return false;
        }
        chip.set_filterable(true);
        self.original.insert(chip.clone());
        self.filtered.insert(chip);
        true
    }

    fn log_ok(&self, event: &str, chip: &Chip) {
        debug!(
            "event={} module=store status=ok chip_id={} filterable={} filtered={} selected={}",
            event,
            chip.id,
            chip.is_filterable(),
            self.filtered.len(),
            self.selected.len()
        );
    }
}

fn validated(event: &str, chip: &Chip) -> DataSourceResult<()> {
    chip.validate().map_err(|err| reject(event, err.into()))
}

fn validated_all(event: &str, chips: &[Chip]) -> DataSourceResult<()> {
    chips.iter().try_for_each(|chip| validated(event, chip))
}

fn reject(event: &str, err: DataSourceError) -> DataSourceError {
    warn!("event={event} module=store status=error error=\"{err}\"");
    err
}

fn nth_or_out_of_range(
    chips: Vec<Chip>,
    partition: Partition,
    position: usize,
) -> DataSourceResult<Chip> {
    let len = chips.len();
    chips
        .into_iter()
        .nth(position)
        .ok_or(DataSourceError::IndexOutOfRange {
            partition,
            index: position,
            len,
        })
}

impl ChipQuery for SetChipDataSource {
    fn selected_chips(&self) -> Vec<Chip> {
        let mut chips: Vec<Chip> = self.selected.iter().cloned().collect();
        // Id breaks title ties so positions stay stable between calls.
        chips.sort_by(|a, b| a.title.cmp(&b.title).then_with(|| a.id.cmp(&b.id)));
        chips
    }

    fn filtered_chips(&self) -> Vec<Chip> {
        self.filtered.iter().cloned().collect()
    }

    fn original_chips(&self) -> Vec<Chip> {
        self.original.iter().cloned().collect()
    }

    fn filtered_chip(&self, position: usize) -> DataSourceResult<Chip> {
        nth_or_out_of_range(self.filtered_chips(), Partition::Filtered, position)
    }

    fn selected_chip(&self, position: usize) -> DataSourceResult<Chip> {
        nth_or_out_of_range(self.selected_chips(), Partition::Selected, position)
    }

    fn filtered_len(&self) -> usize {
        self.filtered.len()
    }

    fn selected_len(&self) -> usize {
        self.selected.len()
    }

    fn original_len(&self) -> usize {
        self.original.len()
    }

    fn exists_in_filtered(&self, chip: &Chip) -> bool {
        self.filtered.contains(&chip.id)
    }

    fn exists_in_selected(&self, chip: &Chip) -> bool {
        self.selected.contains(&chip.id)
    }

    fn exists_in_data_source(&self, chip: &Chip) -> bool {
        self.original.contains(&chip.id)
            || self.filtered.contains(&chip.id)
            || self.selected.contains(&chip.id)
    }
}

impl ChipDataSource for SetChipDataSource {
    fn set_filterable_chips(&mut self, chips: Vec<Chip>) -> DataSourceResult<()> {
        validated_all("set_filterable_chips", &chips)?;

        let total = chips.len();
        let mut skipped = 0usize;
        for chip in chips {
            if !self.insert_candidate(chip) {
                skipped += 1;
            }
        }
        debug!(
            "event=set_filterable_chips module=store status=ok count={} skipped_selected={} filtered={}",
            total,
            skipped,
            self.filtered.len()
        );

        self.notify_changed();
        Ok(())
    }

    fn add_filtered_chip(&mut self, chip: Chip) -> DataSourceResult<()> {
        validated("add_filtered_chip", &chip)?;

        let id = chip.id;
        if self.insert_candidate(chip) {
            debug!(
                "event=add_filtered_chip module=store status=ok chip_id={} filtered={}",
                id,
                self.filtered.len()
            );
        } else {
            debug!("event=add_filtered_chip module=store status=skipped reason=selected chip_id={id}");
        }

        self.notify_changed();
        Ok(())
    }

    fn add_selected_chip(&mut self, mut chip: Chip) -> DataSourceResult<()> {
        validated("add_selected_chip", &chip)?;

        // A candidate selected by value keeps its pool home for replace_chip.
        if self.filtered.remove(&chip.id) {
            self.original.remove(&chip.id);
            chip.set_filterable(true);
        }
        // Reselecting keeps the stored chip; observers see what selected_chips() returns.
        let stored = match self.selected.get(&chip.id) {
            Some(stored) => stored.clone(),
            None => {
                self.selected.insert(chip.clone());
                chip
            }
        };
        self.log_ok("add_selected_chip", &stored);

        self.notify_changed();
        self.observers.notify_selected(&stored);
        Ok(())
    }

    fn remove_selected_chip(&mut self, chip: &Chip) -> DataSourceResult<bool> {
        validated("remove_selected_chip", chip)?;

        let removed = self.selected.remove(&chip.id);
        if removed {
            self.log_ok("remove_selected_chip", chip);
        } else {
            debug!(
                "event=remove_selected_chip module=store status=noop chip_id={}",
                chip.id
            );
        }

        self.notify_changed();
        Ok(removed)
    }

    fn set_selected_chips(&mut self, mut chips: Vec<Chip>) -> DataSourceResult<()> {
        validated_all("set_selected_chips", &chips)?;

        // A chip the store already knows as a candidate keeps its pool home.
        for chip in &mut chips {
            let pooled = self.filtered.remove(&chip.id)
                || self.original.get(&chip.id).is_some_and(Chip::is_filterable)
                || self.selected.get(&chip.id).is_some_and(Chip::is_filterable);
            chip.set_filterable(pooled);
        }
        self.selected.clear();
        self.original.clear();
        self.original.extend(self.filtered.iter().cloned());
        for chip in chips {
            self.original.insert(chip.clone());
            self.selected.insert(chip);
        }
        debug!(
            "event=set_selected_chips module=store status=ok original={} filtered={} selected={}",
            self.original.len(),
            self.filtered.len(),
            self.selected.len()
        );

        self.notify_changed();
        Ok(())
    }

    fn take_chip(&mut self, chip: &Chip) -> DataSourceResult<Chip> {
        validated("take_chip", chip)?;

        let Some(stored) = self.filtered.take(&chip.id) else {
            let custom_selected = self
                .selected
                .get(&chip.id)
                .is_some_and(|stored| !stored.is_filterable());
            let err = if custom_selected {
                DataSourceError::NotFilterable(chip.id)
            } else {
                DataSourceError::NotFound {
                    partition: Partition::Filtered,
                    id: chip.id,
                }
            };
            return Err(reject("take_chip", err));
        };
        if !stored.is_filterable() {
            self.filtered.insert(stored);
            return Err(reject("take_chip", DataSourceError::NotFilterable(chip.id)));
        }
        self.original.remove(&stored.id);
        self.selected.insert(stored.clone());
        self.log_ok("take_chip", &stored);

        self.notify_changed();
        self.observers.notify_selected(&stored);
        Ok(stored)
    }

    fn take_chip_at(&mut self, position: usize) -> DataSourceResult<Chip> {
        let chip = self
            .filtered_chip(position)
            .map_err(|err| reject("take_chip", err))?;
        self.take_chip(&chip)
    }

    fn replace_chip(&mut self, chip: &Chip) -> DataSourceResult<Chip> {
        validated("replace_chip", chip)?;

        let Some(stored) = self.selected.take(&chip.id) else {
            return Err(reject(
                "replace_chip",
                DataSourceError::NotFound {
                    partition: Partition::Selected,
                    id: chip.id,
                },
            ));
        };
        if stored.is_filterable() {
            self.original.insert(stored.clone());
            self.filtered.insert(stored.clone());
        }
        self.log_ok("replace_chip", &stored);

        self.notify_changed();
        self.observers.notify_unselected(&stored);
        Ok(stored)
    }

    fn replace_chip_at(&mut self, position: usize) -> DataSourceResult<Chip> {
        let chip = self
            .selected_chip(position)
            .map_err(|err| reject("replace_chip", err))?;
        self.replace_chip(&chip)
    }

    fn clear_filtered_chips(&mut self) {
        self.original.clear();
        self.filtered.clear();
        debug!("event=clear_filtered_chips module=store status=ok");

        self.notify_changed();
    }

    fn clear_selected_chips(&mut self) {
        // Snapshot before clearing so every unselected callback names a chip
        // that was a member at call time.
        let snapshot = self.selected_chips();
        self.selected.clear();
        debug!(
            "event=clear_selected_chips module=store status=ok cleared={} selection_observers={}",
            snapshot.len(),
            self.observers.selection_observer_count()
        );

        self.notify_changed();
        for chip in &snapshot {
            self.observers.notify_unselected(chip);
        }
    }

    fn add_change_observer(&mut self, observer: Rc<dyn ChangeObserver>) {
        self.observers.add_change_observer(observer);
    }

    fn remove_change_observer(&mut self, observer: &Rc<dyn ChangeObserver>) -> bool {
        self.observers.remove_change_observer(observer)
    }

    fn add_selection_observer(&mut self, observer: Rc<dyn SelectionObserver>) {
        self.observers.add_selection_observer(observer);
    }

    fn remove_selection_observer(&mut self, observer: &Rc<dyn SelectionObserver>) -> bool {
        self.observers.remove_selection_observer(observer)
    }
}
