//! Sync systems copying committed inventory state into UI nodes.
//! Write-only observers: nothing here feeds back into the core.

use bevy::prelude::*;

use super::components::*;
use super::theme::UiTheme;
use crate::inventory::{InventoryCursor, SlotGrid};
use crate::resolution::{ResolutionCursor, ResolutionList};

/// What the two action buttons currently do. Derived from the committed
/// cursor and grid state every frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Affordance {
    pub label: &'static str,
    pub visible: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Affordances {
    pub primary: Affordance,
    pub secondary: Affordance,
}

pub fn affordances(grid: &SlotGrid, cursor: &InventoryCursor) -> Affordances {
    if cursor.selected.is_some() {
        Affordances {
            primary: Affordance {
                label: "Place",
                visible: true,
            },
            secondary: Affordance {
                label: "Remove",
                visible: true,
            },
        }
    } else {
        Affordances {
            primary: Affordance {
                label: "Select",
                visible: grid.slot(cursor.highlighted).is_held(),
            },
            secondary: Affordance {
                label: "Shuffle",
                visible: true,
            },
        }
    }
}

/// Border color and icon of every slot node follow the backing slot.
pub fn sync_slot_visuals(
    grid: Res<SlotGrid>,
    theme: Res<UiTheme>,
    mut slot_query: Query<(&UiSlot, &mut BorderColor, &Children)>,
    mut icon_query: Query<(&mut ImageNode, &mut Visibility), With<SlotIcon>>,
) {
    let colors = &theme.colors;

    for (ui_slot, mut border, children) in &mut slot_query {
        let slot = grid.slot(ui_slot.pos);

        let color = if !slot.indicator_visible() {
            colors.border.clone()
        } else if slot.is_selected() {
            colors.selected.clone()
        } else {
            colors.border_highlight.clone()
        };
        *border = BorderColor::all(Color::from(color));

        for child in children.iter() {
            if let Ok((mut image, mut visibility)) = icon_query.get_mut(child) {
                match slot.item() {
                    Some(item) => {
                        image.image = item.icon.clone();
                        *visibility = Visibility::Inherited;
                    }
                    None => {
                        *visibility = Visibility::Hidden;
                    }
                }
            }
        }
    }
}

/// The selection label shows the name of the selected item, empty when
/// nothing is selected.
pub fn sync_selection_label(
    grid: Res<SlotGrid>,
    cursor: Res<InventoryCursor>,
    mut labels: Query<&mut Text, With<SelectionLabel>>,
) {
    let name = cursor
        .selected
        .and_then(|pos| grid.slot(pos).item())
        .map(|item| item.name.clone())
        .unwrap_or_default();

    for mut text in &mut labels {
        *text = Text::new(name.clone());
    }
}

pub fn sync_affordances(
    grid: Res<SlotGrid>,
    cursor: Res<InventoryCursor>,
    mut labels: Query<(&ActionLabel, &mut Text, &mut Visibility)>,
    mut icons: Query<(&ActionIcon, &mut Visibility), Without<ActionLabel>>,
) {
    let state = affordances(&grid, &cursor);
    let for_button = |button: ActionButton| match button {
        ActionButton::Primary => state.primary,
        ActionButton::Secondary => state.secondary,
    };

    for (label, mut text, mut visibility) in &mut labels {
        let affordance = for_button(label.0);
        *text = Text::new(affordance.label);
        *visibility = visible_when(affordance.visible);
    }
    for (icon, mut visibility) in &mut icons {
        *visibility = visible_when(for_button(icon.0).visible);
    }
}

pub fn sync_resolution_labels(
    list: Res<ResolutionList>,
    cursor: Res<ResolutionCursor>,
    mut current: Query<
        &mut Text,
        (
            With<CurrentResolutionLabel>,
            Without<PrevResolutionLabel>,
            Without<NextResolutionLabel>,
        ),
    >,
    mut prev: Query<
        (&mut Text, &mut Visibility),
        (With<PrevResolutionLabel>, Without<NextResolutionLabel>),
    >,
    mut next: Query<(&mut Text, &mut Visibility), With<NextResolutionLabel>>,
) {
    if let Ok(mut text) = current.single_mut() {
        let label = cursor
            .current(&list)
            .map(|res| format!("Resolution: {res}"))
            .unwrap_or_default();
        *text = Text::new(label);
    }

    if let Ok((mut text, mut visibility)) = prev.single_mut() {
        let affordance = cursor.prev_affordance(&list);
        *text = Text::new(affordance.map(|res| res.to_string()).unwrap_or_default());
        *visibility = visible_when(affordance.is_some());
    }

    if let Ok((mut text, mut visibility)) = next.single_mut() {
        let affordance = cursor.next_affordance(&list);
        *text = Text::new(affordance.map(|res| res.to_string()).unwrap_or_default());
        *visibility = visible_when(affordance.is_some());
    }
}

fn visible_when(shown: bool) -> Visibility {
    if shown {
        Visibility::Inherited
    } else {
        Visibility::Hidden
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::inventory::SlotPos;
    use crate::test_helpers::fixtures;

    #[test]
    fn affordances_with_no_selection_track_highlighted_slot() {
        let mut grid = SlotGrid::new(2, 2);
        let cursor = InventoryCursor::default();

        let empty = affordances(&grid, &cursor);
        assert_eq!(empty.primary.label, "Select");
        assert!(!empty.primary.visible);
        assert_eq!(empty.secondary.label, "Shuffle");
        assert!(empty.secondary.visible);

        grid.slot_mut(SlotPos::ORIGIN)
            .populate(Some(fixtures::item("axe")));
        let held = affordances(&grid, &cursor);
        assert!(held.primary.visible);
    }

    #[test]
    fn affordances_with_selection_offer_place_and_remove() {
        let mut grid = SlotGrid::new(2, 2);
        grid.slot_mut(SlotPos::ORIGIN)
            .populate(Some(fixtures::item("axe")));
        let cursor = InventoryCursor {
            highlighted: SlotPos::new(0, 1),
            selected: Some(SlotPos::ORIGIN),
        };

        let state = affordances(&grid, &cursor);
        assert_eq!(state.primary.label, "Place");
        assert!(state.primary.visible);
        assert_eq!(state.secondary.label, "Remove");
        assert!(state.secondary.visible);
    }
}
