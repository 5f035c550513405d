/// ViewSlot - a discrete (horizontal, vertical) viewing position.
///
/// Slots are 1-indexed: horizontal 1..=8 steps around the target in 45°
/// increments, vertical 1..=5 steps from top view down to bottom view.

use std::ops::RangeInclusive;
use crate::error::{Error, Result};

/// Valid horizontal slot range
pub const HORIZONTAL_SLOTS: RangeInclusive<i32> = 1..=8;

/// Valid vertical slot range
pub const VERTICAL_SLOTS: RangeInclusive<i32> = 1..=5;

/// A validated (horizontal, vertical) slot pair.
///
/// Construction through `new` guarantees both indices are in range,
/// so an existing ViewSlot always resolves in the angle table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ViewSlot {
    horizontal: i32,
    vertical: i32,
}

impl ViewSlot {
    /// Slot used by cameras that have never been edited.
    pub const DEFAULT: ViewSlot = ViewSlot { horizontal: 2, vertical: 2 };

    /// Create a slot, rejecting out-of-range indices.
    ///
    /// # Errors
    ///
    /// Returns `Error::InvalidSlot` if horizontal ∉ [1, 8] or vertical ∉ [1, 5].
    pub fn new(horizontal: i32, vertical: i32) -> Result<Self> {
        if !HORIZONTAL_SLOTS.contains(&horizontal) || !VERTICAL_SLOTS.contains(&vertical) {
            return Err(Error::InvalidSlot { horizontal, vertical });
        }
        Ok(Self { horizontal, vertical })
    }

    /// Create a slot, clamping each index into its valid range.
    ///
    /// Matches the behaviour of a host slider that saturates at its bounds.
    pub fn clamped(horizontal: i32, vertical: i32) -> Self {
        Self {
            horizontal: horizontal.clamp(*HORIZONTAL_SLOTS.start(), *HORIZONTAL_SLOTS.end()),
            vertical: vertical.clamp(*VERTICAL_SLOTS.start(), *VERTICAL_SLOTS.end()),
        }
    }

    /// Horizontal slot (1..=8)
    pub fn horizontal(&self) -> i32 {
        self.horizontal
    }

    /// Vertical slot (1..=5)
    pub fn vertical(&self) -> i32 {
        self.vertical
    }

    /// Same vertical slot, different horizontal slot.
    pub fn with_horizontal(self, horizontal: i32) -> Result<Self> {
        Self::new(horizontal, self.vertical)
    }

    /// Same horizontal slot, different vertical slot.
    pub fn with_vertical(self, vertical: i32) -> Result<Self> {
        Self::new(self.horizontal, vertical)
    }

    /// Every valid slot, horizontal-major.
    pub fn all() -> impl Iterator<Item = ViewSlot> {
        HORIZONTAL_SLOTS.flat_map(|horizontal| {
            VERTICAL_SLOTS.map(move |vertical| ViewSlot { horizontal, vertical })
        })
    }
}

impl Default for ViewSlot {
    fn default() -> Self {
        Self::DEFAULT
    }
}

#[cfg(test)]
#[path = "view_slot_tests.rs"]
mod tests;
