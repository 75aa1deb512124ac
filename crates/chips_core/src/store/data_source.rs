//! Chip data source contracts.
//!
//! # Responsibility
//! - Define the read-only query surface handed to observers and views.
//! - Define the mutation surface consumers go through.
//!
//! # Invariants
//! - `filtered ∩ selected = ∅` after every call returns.
//! - Every member of `filtered` is a member of `original`.
//! - A failed call leaves all partitions untouched and notifies nobody.

use crate::model::chip::{Chip, ChipId, ChipValidationError};
use crate::store::observer::{ChangeObserver, SelectionObserver};
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::rc::Rc;

pub type DataSourceResult<T> = Result<T, DataSourceError>;

/// One of the three collections owned by a data source.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Partition {
    Original,
    Filtered,
    Selected,
}

impl Partition {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Original => "original",
            Self::Filtered => "filtered",
            Self::Selected => "selected",
        }
    }
}

impl Display for Partition {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Errors raised by data source operations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DataSourceError {
    /// Precondition violation: the chip is absent (nil id / blank title).
    InvalidChip(ChipValidationError),
    /// The chip is not a member of the partition the operation requires.
    NotFound { partition: Partition, id: ChipId },
    /// Positional access past the end of the produced sequence.
    IndexOutOfRange {
        partition: Partition,
        index: usize,
        len: usize,
    },
    /// The chip has no candidate-pool home and cannot be taken from it.
    NotFilterable(ChipId),
}

impl Display for DataSourceError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidChip(err) => write!(f, "invalid chip: {err}"),
            Self::NotFound { partition, id } => {
                write!(f, "chip not found in {partition} chips: {id}")
            }
            Self::IndexOutOfRange {
                partition,
                index,
                len,
            } => write!(
                f,
                "index {index} out of range for {partition} chips (len {len})"
            ),
            Self::NotFilterable(id) => write!(f, "cannot take a non-filterable chip: {id}"),
        }
    }
}

impl Error for DataSourceError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::InvalidChip(err) => Some(err),
            _ => None,
        }
    }
}

impl From<ChipValidationError> for DataSourceError {
    fn from(value: ChipValidationError) -> Self {
        Self::InvalidChip(value)
    }
}

/// Read-only view over the three partitions.
///
/// Change observers receive this view, so they can re-read state from
/// inside the callback without touching the mutation surface.
pub trait ChipQuery {
    /// Selected chips sorted by title ascending.
    fn selected_chips(&self) -> Vec<Chip>;
    /// Candidate chips in implementation-defined order.
    fn filtered_chips(&self) -> Vec<Chip>;
    /// Candidate universe; always a superset of `filtered`.
    fn original_chips(&self) -> Vec<Chip>;
    fn filtered_chip(&self, position: usize) -> DataSourceResult<Chip>;
    fn selected_chip(&self, position: usize) -> DataSourceResult<Chip>;
    fn filtered_len(&self) -> usize;
    fn selected_len(&self) -> usize;
    fn original_len(&self) -> usize;
    fn exists_in_filtered(&self, chip: &Chip) -> bool;
    fn exists_in_selected(&self, chip: &Chip) -> bool;
    /// Whether the chip is in any partition.
    fn exists_in_data_source(&self, chip: &Chip) -> bool;
}

/// Mutation surface of a chip data source.
///
/// Every mutation fires change observers first, then selection observers
/// for each affected chip, before returning. Observer callbacks must not
/// call back into the data source; doing so is unsupported.
pub trait ChipDataSource: ChipQuery {
    /// Marks every chip filterable and adds it to `original` + `filtered`.
    fn set_filterable_chips(&mut self, chips: Vec<Chip>) -> DataSourceResult<()>;
    /// Marks the chip filterable and adds it to `original` + `filtered`.
    fn add_filtered_chip(&mut self, chip: Chip) -> DataSourceResult<()>;
    /// Adds the chip straight to `selected`, filterable or not.
    fn add_selected_chip(&mut self, chip: Chip) -> DataSourceResult<()>;
    /// Drops the chip from `selected` without restoring it to the pool.
    ///
    /// Returns whether the chip was selected; notifies either way.
    fn remove_selected_chip(&mut self, chip: &Chip) -> DataSourceResult<bool>;
    /// Replaces `selected` (and `original`) with a preloaded selection.
    fn set_selected_chips(&mut self, chips: Vec<Chip>) -> DataSourceResult<()>;
    /// Moves a filtered chip into `selected`.
    fn take_chip(&mut self, chip: &Chip) -> DataSourceResult<Chip>;
    fn take_chip_at(&mut self, position: usize) -> DataSourceResult<Chip>;
    /// Moves a selected chip back to the pool, or drops it when it is not
    /// filterable.
    fn replace_chip(&mut self, chip: &Chip) -> DataSourceResult<Chip>;
    fn replace_chip_at(&mut self, position: usize) -> DataSourceResult<Chip>;
    fn clear_filtered_chips(&mut self);
    fn clear_selected_chips(&mut self);

    fn add_change_observer(&mut self, observer: Rc<dyn ChangeObserver>);
    fn remove_change_observer(&mut self, observer: &Rc<dyn ChangeObserver>) -> bool;
    fn add_selection_observer(&mut self, observer: Rc<dyn SelectionObserver>);
    fn remove_selection_observer(&mut self, observer: &Rc<dyn SelectionObserver>) -> bool;
}
