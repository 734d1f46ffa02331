//! UI Model
//!
//! This sub-model contains the user's view preferences: sort key, sort
//! direction and display mode.

use crate::{DisplayAs, SortBy, SortDirection};

/// UI preferences
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct UiModel {
    /// Current sort key
    pub sort_by: SortBy,

    /// Current sort direction
    pub sort_direction: SortDirection,

    /// How the current folder is rendered
    pub display_as: DisplayAs,
}

impl UiModel {
    /// Create initial UI model; sorting starts ascending
    pub fn new(sort_by: SortBy, display_as: DisplayAs) -> Self {
        Self {
            sort_by,
            sort_direction: SortDirection::Asc,
            display_as,
        }
    }

    /// Select a sort key
    ///
    /// Picking a different key restarts at ascending; picking the current
    /// key flips the direction.
    pub fn toggle_sort(&mut self, by: SortBy) {
        if self.sort_by != by {
            self.sort_by = by;
            self.sort_direction = SortDirection::Asc;
        } else {
            self.sort_direction = self.sort_direction.toggled();
        }
    }

    pub fn set_display(&mut self, display_as: DisplayAs) {
        self.display_as = display_as;
    }

    pub fn is_display(&self, display_as: DisplayAs) -> bool {
        self.display_as == display_as
    }
}

impl Default for UiModel {
    fn default() -> Self {
        Self::new(SortBy::default(), DisplayAs::default())
    }
}
