//! Chip domain model.
//!
//! # Responsibility
//! - Define the value tracked by the partition store (contact, tag, ...).
//! - Provide the identity contract that set membership relies on.
//!
//! # Invariants
//! - `id` is the only input to equality and hashing.
//! - `filterable` is excluded from identity so the store can toggle it on a
//!   chip that already sits in a set.
//! - Only the store flips `filterable`; callers read it through
//!   `is_filterable()` and deserialized chips always start non-filterable.

use serde::{Deserialize, Serialize};
use std::borrow::Borrow;
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::hash::{Hash, Hasher};
use uuid::Uuid;

/// Stable identifier of a chip.
pub type ChipId = Uuid;

/// Precondition failures for a chip handed to the store.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChipValidationError {
    /// `id` is the nil UUID, i.e. the chip has no identity.
    NilId,
    /// `title` is empty after trim.
    BlankTitle,
}

impl Display for ChipValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NilId => write!(f, "chip id must not be nil"),
            Self::BlankTitle => write!(f, "chip title must not be blank"),
        }
    }
}

impl Error for ChipValidationError {}

/// Selectable item rendered as a removable token once selected.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Chip {
    /// Identity used for set membership.
    pub id: ChipId,
    /// Display title; sort key of selected output.
    pub title: String,
    /// Secondary line shown in expanded details.
    pub subtitle: Option<String>,
    /// Avatar location resolved by the host image loader.
    pub avatar_uri: Option<String>,
    #[serde(skip_deserializing)]
    filterable: bool,
}

impl Chip {
    /// Creates a non-filterable chip with a generated id.
    ///
    /// Non-filterable is the state of a user-typed custom entry; the store
    /// marks candidates filterable when they enter the pool.
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            title: title.into(),
            subtitle: None,
            avatar_uri: None,
            filterable: false,
        }
    }

    /// Creates a chip with a caller-provided id.
    ///
    /// Used when identity comes from an external source (contacts, tags).
    ///
    /// # Errors
    /// - Returns `NilId` when `id` is nil.
    pub fn with_id(id: ChipId, title: impl Into<String>) -> Result<Self, ChipValidationError> {
        if id.is_nil() {
            return Err(ChipValidationError::NilId);
        }
        let mut chip = Self::new(title);
        chip.id = id;
        Ok(chip)
    }

    pub fn with_subtitle(mut self, subtitle: impl Into<String>) -> Self {
        self.subtitle = Some(subtitle.into());
        self
    }

    pub fn with_avatar_uri(mut self, avatar_uri: impl Into<String>) -> Self {
        self.avatar_uri = Some(avatar_uri.into());
        self
    }

    /// Whether this chip belongs to (and can return to) the candidate pool.
    pub fn is_filterable(&self) -> bool {
        self.filterable
    }

    pub(crate) fn set_filterable(&mut self, filterable: bool) {
        self.filterable = filterable;
    }

    /// Checks the precondition every store mutation enforces.
    pub fn validate(&self) -> Result<(), ChipValidationError> {
        if self.id.is_nil() {
            return Err(ChipValidationError::NilId);
        }
        if self.title.trim().is_empty() {
            return Err(ChipValidationError::BlankTitle);
        }
        Ok(())
    }
}

impl PartialEq for Chip {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for Chip {}

impl Hash for Chip {
    // Must hash exactly like `ChipId` for the `Borrow` impl below.
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}

impl Borrow<ChipId> for Chip {
    fn borrow(&self) -> &ChipId {
        &self.id
    }
}
