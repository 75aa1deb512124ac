//! Domain model for selectable chips.
//!
//! # Responsibility
//! - Define the value entity shared between the store and its consumers.
//!
//! # Invariants
//! - Every chip is identified by a stable `ChipId`.
//! - Equality is value-based on `ChipId`, never on references.

pub mod chip;
