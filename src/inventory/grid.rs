use bevy::prelude::*;

use super::slot::{ItemRef, Slot};

/// Direction of a highlight move on the grid.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Direction {
    Left,
    Up,
    Right,
    Down,
}

/// Position of a slot on the grid, row-major.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct SlotPos {
    pub row: usize,
    pub col: usize,
}

impl SlotPos {
    pub const ORIGIN: SlotPos = SlotPos { row: 0, col: 0 };

    pub fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }
}

/// The inventory grid: a fixed, exactly rectangular field of slots.
///
/// Built once at setup and never resized. Positions outside the grid are a
/// programming error and panic; callers must only use positions produced
/// by this grid.
#[derive(Resource, Debug)]
pub struct SlotGrid {
    width: usize,
    height: usize,
    slots: Vec<Slot>,
}

impl SlotGrid {
    pub fn new(height: usize, width: usize) -> Self {
        assert!(
            height >= 1 && width >= 1,
            "grid dimensions must be at least 1x1, got {height}x{width}"
        );
        let mut slots = Vec::with_capacity(height * width);
        slots.resize_with(height * width, Slot::default);
        Self {
            width,
            height,
            slots,
        }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    /// Total number of slots.
    pub fn count(&self) -> usize {
        self.height * self.width
    }

    fn index(&self, pos: SlotPos) -> usize {
        assert!(
            pos.row < self.height && pos.col < self.width,
            "slot position out of range: {pos:?} on a {}x{} grid",
            self.height,
            self.width
        );
        pos.row * self.width + pos.col
    }

    pub fn slot(&self, pos: SlotPos) -> &Slot {
        &self.slots[self.index(pos)]
    }

    pub(crate) fn slot_mut(&mut self, pos: SlotPos) -> &mut Slot {
        let idx = self.index(pos);
        &mut self.slots[idx]
    }

    /// Toroidal step: moving off one edge re-enters at the opposite edge.
    /// Never diagonal, never clamped.
    pub fn next_pos(&self, pos: SlotPos, direction: Direction) -> SlotPos {
        self.index(pos);
        match direction {
            Direction::Left => SlotPos {
                col: (pos.col + self.width - 1) % self.width,
                ..pos
            },
            Direction::Right => SlotPos {
                col: (pos.col + 1) % self.width,
                ..pos
            },
            Direction::Up => SlotPos {
                row: (pos.row + self.height - 1) % self.height,
                ..pos
            },
            Direction::Down => SlotPos {
                row: (pos.row + 1) % self.height,
                ..pos
            },
        }
    }

    /// Empties every slot, then unselects it. Clearing first guarantees the
    /// item goes away even while a blink is running; unselect releases it.
    pub(crate) fn clear_all(&mut self) {
        for slot in &mut self.slots {
            slot.populate(None);
            slot.unselect();
        }
    }

    /// Swaps the held items of two slots through a temporary holder, so a
    /// self-swap leaves the content unchanged.
    pub(crate) fn swap_items(&mut self, a: SlotPos, b: SlotPos) {
        let held_a: Option<ItemRef> = self.slot(a).item().cloned();
        let held_b = self.slot(b).item().cloned();
        self.slot_mut(a).populate(held_b);
        self.slot_mut(b).populate(held_a);
    }

    pub fn iter(&self) -> impl Iterator<Item = (SlotPos, &Slot)> {
        self.slots.iter().enumerate().map(|(i, slot)| {
            (
                SlotPos {
                    row: i / self.width,
                    col: i % self.width,
                },
                slot,
            )
        })
    }

    pub(crate) fn iter_mut(&mut self) -> impl Iterator<Item = &mut Slot> {
        self.slots.iter_mut()
    }
}
