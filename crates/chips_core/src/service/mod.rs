//! Consumers of the partition store.
//!
//! # Responsibility
//! - Map user gestures onto store mutations (`ChipsInput`).
//! - Keep a render-ready mirror of the selection (`SelectedChipsView`).
//!
//! # Invariants
//! - Services mutate only through `ChipDataSource`.

pub mod chips_input;
pub mod selected_view;
