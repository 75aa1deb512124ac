//! Observer contracts and per-store registry.

use crate::model::chip::Chip;
use crate::store::data_source::ChipQuery;
use std::rc::Rc;

/// Notified once per logical mutation, before any selection callback.
pub trait ChangeObserver {
    fn on_chip_data_source_changed(&self, source: &dyn ChipQuery);
}

/// Notified per chip entering or leaving `selected`.
pub trait SelectionObserver {
    fn on_chip_selected(&self, chip: &Chip);
    fn on_chip_unselected(&self, chip: &Chip);
}

/// Two independent subscriber lists owned by one data source.
///
/// No deduplication: an observer registered twice is called twice.
#[derive(Default)]
pub struct ObserverRegistry {
    change: Vec<Rc<dyn ChangeObserver>>,
    selection: Vec<Rc<dyn SelectionObserver>>,
}

impl ObserverRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_change_observer(&mut self, observer: Rc<dyn ChangeObserver>) {
        self.change.push(observer);
    }

    /// Removes one registration of `observer`. Returns `false` as a no-op
    /// when it was never registered.
    pub fn remove_change_observer(&mut self, observer: &Rc<dyn ChangeObserver>) -> bool {
        remove_first(&mut self.change, observer)
    }

    pub fn add_selection_observer(&mut self, observer: Rc<dyn SelectionObserver>) {
        self.selection.push(observer);
    }

    pub fn remove_selection_observer(&mut self, observer: &Rc<dyn SelectionObserver>) -> bool {
        remove_first(&mut self.selection, observer)
    }

    pub fn change_observer_count(&self) -> usize {
        self.change.len()
    }

    pub fn selection_observer_count(&self) -> usize {
        self.selection.len()
    }

    pub fn notify_changed(&self, source: &dyn ChipQuery) {
        for observer in &self.change {
            observer.on_chip_data_source_changed(source);
        }
    }

    pub fn notify_selected(&self, chip: &Chip) {
        for observer in &self.selection {
            observer.on_chip_selected(chip);
        }
    }

    pub fn notify_unselected(&self, chip: &Chip) {
        for observer in &self.selection {
            observer.on_chip_unselected(chip);
        }
    }
}

// Compares data pointers only; vtable pointers of the same object may differ
// across codegen units.
fn remove_first<T: ?Sized>(observers: &mut Vec<Rc<T>>, target: &Rc<T>) -> bool {
    let target_ptr = Rc::as_ptr(target) as *const ();
    match observers
        .iter()
        .position(|observer| Rc::as_ptr(observer) as *const () == target_ptr)
    {
        Some(index) => {
            observers.remove(index);
            true
        }
        None => false,
    }
}
