//! Genre tag selection
//!
//! A capped, duplicate-free, insertion-ordered set of genre ids. The server
//! receives it as a plain JSON array of integers.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Maximum number of genres a member may pick
pub const MAX_SELECTED_GENRES: usize = 3;

/// Numeric genre identifier, as carried by a tag's `data-genre-id`
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[serde(transparent)]
pub struct GenreId(pub u32);

impl FromStr for GenreId {
    type Err = std::num::ParseIntError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.trim().parse::<u32>().map(GenreId)
    }
}

impl fmt::Display for GenreId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// What a tag click did
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub enum ToggleOutcome {
    Selected,
    Deselected,
    /// The set was full; nothing changed
    LimitReached,
    /// Edit mode was off; nothing changed
    Ignored,
}

impl ToggleOutcome {
    pub fn as_str(&self) -> &'static str {
        match self {
            ToggleOutcome::Selected => "selected",
            ToggleOutcome::Deselected => "deselected",
            ToggleOutcome::LimitReached => "limitReached",
            ToggleOutcome::Ignored => "ignored",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GenreSelection {
    ids: Vec<GenreId>,
    capacity: usize,
}

impl GenreSelection {
    pub fn new() -> Self {
        Self::with_capacity(MAX_SELECTED_GENRES)
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            ids: Vec::with_capacity(capacity),
            capacity,
        }
    }

    /// Build the selection from the tags marked active in the markup.
    ///
    /// Duplicates are dropped. Ids beyond the capacity are returned as the
    /// second element so the caller can clear their visual state.
    pub fn from_initial<I>(initial: I, capacity: usize) -> (Self, Vec<GenreId>)
    where
        I: IntoIterator<Item = GenreId>,
    {
        let mut selection = Self::with_capacity(capacity);
        let mut overflow = Vec::new();

        for id in initial {
            if selection.contains(id) {
                continue;
            }
            if selection.is_full() {
                overflow.push(id);
            } else {
                selection.ids.push(id);
            }
        }

        (selection, overflow)
    }

    pub fn contains(&self, id: GenreId) -> bool {
        self.ids.contains(&id)
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    pub fn is_full(&self) -> bool {
        self.ids.len() >= self.capacity
    }

    /// Selected ids in the order they were picked
    pub fn ids(&self) -> &[GenreId] {
        &self.ids
    }

    /// Deselect if present, otherwise select unless the set is full.
    pub fn toggle(&mut self, id: GenreId) -> ToggleOutcome {
        if let Some(pos) = self.ids.iter().position(|&selected| selected == id) {
            self.ids.remove(pos);
            return ToggleOutcome::Deselected;
        }

        if self.is_full() {
            return ToggleOutcome::LimitReached;
        }

        self.ids.push(id);
        ToggleOutcome::Selected
    }

    /// Genre save request body, e.g. `[2,5]` or `[]`
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(&self.ids)
    }
}

impl Default for GenreSelection {
    fn default() -> Self {
        Self::new()
    }
}
