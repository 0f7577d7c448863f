use bevy::prelude::*;

use crate::inventory::SlotPos;

/// Marker for the UI node representing one grid slot.
#[derive(Component, Debug)]
pub struct UiSlot {
    pub pos: SlotPos,
}

/// Marker for the icon image inside a slot node.
#[derive(Component)]
pub struct SlotIcon;

/// Marker for the "currently selected item" text label.
#[derive(Component)]
pub struct SelectionLabel;

/// Which action button an affordance node belongs to.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ActionButton {
    Primary,
    Secondary,
}

/// Marker for an affordance text label (the action it would perform).
#[derive(Component)]
pub struct ActionLabel(pub ActionButton);

/// Marker for an affordance button icon.
#[derive(Component)]
pub struct ActionIcon(pub ActionButton);

/// Markers for the resolution bar labels.
#[derive(Component)]
pub struct CurrentResolutionLabel;

#[derive(Component)]
pub struct PrevResolutionLabel;

#[derive(Component)]
pub struct NextResolutionLabel;
