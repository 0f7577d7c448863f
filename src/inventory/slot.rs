use bevy::prelude::*;

/// Period of the selection blink, in seconds.
pub const BLINK_PERIOD_SECS: f32 = 0.3;

/// An item sitting in a slot: a renderable icon plus its display name.
#[derive(Clone, Debug, PartialEq)]
pub struct ItemRef {
    pub icon: Handle<Image>,
    pub name: String,
}

/// Repeating blink driven by the frame loop while a slot is selected.
#[derive(Debug)]
struct Blink {
    timer: Timer,
    visible: bool,
}

/// A single cell of the inventory grid.
///
/// Holds at most one item and tracks its highlight/selection visual state.
/// Mutators are crate-private: the inventory controller is the sole owner
/// of the selection discipline, so nothing outside the crate can start an
/// orphaned blink.
#[derive(Debug, Default)]
pub struct Slot {
    item: Option<ItemRef>,
    highlighted: bool,
    selected: bool,
    blink: Option<Blink>,
}

impl Slot {
    pub fn item(&self) -> Option<&ItemRef> {
        self.item.as_ref()
    }

    /// Whether the slot currently holds an item (derived, never stored).
    pub fn is_held(&self) -> bool {
        self.item.is_some()
    }

    pub fn is_highlighted(&self) -> bool {
        self.highlighted
    }

    pub fn is_selected(&self) -> bool {
        self.selected
    }

    /// Visibility of the highlight indicator, including the blink phase.
    pub fn indicator_visible(&self) -> bool {
        match &self.blink {
            Some(blink) => blink.visible,
            None => self.highlighted,
        }
    }

    pub(crate) fn highlight(&mut self) {
        self.highlighted = true;
    }

    pub(crate) fn unhighlight(&mut self) {
        self.highlighted = false;
    }

    /// Sets the held item; `None` clears the slot.
    pub(crate) fn populate(&mut self, item: Option<ItemRef>) {
        self.item = item;
    }

    /// Marks the slot selected and starts the blink if it is not already
    /// running. The first toggle happens immediately, matching a blink
    /// that fires at the top of its period.
    pub(crate) fn select(&mut self) {
        self.selected = true;
        if self.blink.is_none() {
            self.blink = Some(Blink {
                timer: Timer::from_seconds(BLINK_PERIOD_SECS, TimerMode::Repeating),
                visible: !self.highlighted,
            });
        }
    }

    /// Cancels any running blink and restores the indicator to the plain
    /// highlight state.
    pub(crate) fn unselect(&mut self) {
        self.blink = None;
        self.selected = false;
    }

    /// Advances the blink timer; toggles the indicator once per elapsed
    /// period. No-op when the slot is not selected.
    pub(crate) fn tick_blink(&mut self, delta: std::time::Duration) {
        if let Some(blink) = &mut self.blink {
            blink.timer.tick(delta);
            for _ in 0..blink.timer.times_finished_this_tick() {
                blink.visible = !blink.visible;
            }
        }
    }
}
