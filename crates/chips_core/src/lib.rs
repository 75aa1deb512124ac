//! Core state engine for selectable chips.
//! Partitions chips into candidate and selected pools and notifies observers
//! of every change.

pub mod logging;
pub mod model;
pub mod options;
pub mod service;
pub mod store;

pub use logging::{default_log_level, init_logging, logging_status, LoggingError};
pub use model::chip::{Chip, ChipId, ChipValidationError};
pub use options::{ChipOptions, OptionsError};
pub use service::chips_input::{ChipDetails, ChipsInput};
pub use service::selected_view::SelectedChipsView;
pub use store::data_source::{
    ChipDataSource, ChipQuery, DataSourceError, DataSourceResult, Partition,
};
pub use store::observer::{ChangeObserver, ObserverRegistry, SelectionObserver};
pub use store::set_data_source::SetChipDataSource;

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
