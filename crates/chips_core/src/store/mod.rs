//! Partition store: chip data source contracts, implementation and observers.
//!
//! # Responsibility
//! - Be the single point of mutation for the three chip partitions.
//! - Propagate every mutation to registered observers in a fixed order.
//!
//! # Invariants
//! - Consumers read through `ChipQuery`; only `ChipDataSource` mutates.
//! - Change notification precedes selection notifications for one call.
//! - The store is single-threaded (`Rc` observers) and never re-entered
//!   from an observer callback.

pub mod data_source;
pub mod observer;
pub mod set_data_source;
