use bevy::prelude::*;

use super::grid::{Direction, SlotGrid, SlotPos};
use super::populate::{request_population, PendingPopulation};
use crate::audio::Sfx;
use crate::registry::InventoryConfig;

/// Stick deflection below this is treated as neutral.
const AXIS_DEADZONE: f32 = 0.2;

/// A discrete inventory input, regardless of the device it came from.
#[derive(Message, Debug, Clone, Copy, PartialEq, Eq)]
pub enum InventoryAction {
    Move(Direction),
    Confirm,
    Secondary,
}

/// Navigation cursors: exactly one highlighted slot, at most one selected.
///
/// `selected` never names an empty slot; the Confirm transition only
/// selects a slot that holds an item.
#[derive(Resource, Debug)]
pub struct InventoryCursor {
    pub highlighted: SlotPos,
    pub selected: Option<SlotPos>,
}

impl Default for InventoryCursor {
    fn default() -> Self {
        Self {
            highlighted: SlotPos::ORIGIN,
            selected: None,
        }
    }
}

/// Per-axis edge detector for analog stick navigation.
///
/// A non-neutral axis fires one move, then latches until it returns to
/// neutral. While either axis is latched the other axis is suppressed, so
/// diagonal deflection never produces two moves in one pulse.
#[derive(Resource, Default, Debug)]
pub struct AxisLatch {
    horizontal: bool,
    vertical: bool,
}

impl AxisLatch {
    pub fn sample_horizontal(&mut self, value: f32) -> Option<Direction> {
        if value.abs() <= AXIS_DEADZONE {
            self.horizontal = false;
            return None;
        }
        if self.horizontal || self.vertical {
            return None;
        }
        self.horizontal = true;
        Some(if value > 0.0 {
            Direction::Right
        } else {
            Direction::Left
        })
    }

    pub fn sample_vertical(&mut self, value: f32) -> Option<Direction> {
        if value.abs() <= AXIS_DEADZONE {
            self.vertical = false;
            return None;
        }
        if self.horizontal || self.vertical {
            return None;
        }
        self.vertical = true;
        Some(if value > 0.0 {
            Direction::Up
        } else {
            Direction::Down
        })
    }

    pub fn reset(&mut self) {
        self.horizontal = false;
        self.vertical = false;
    }
}

pub fn keyboard_input(
    keys: Res<ButtonInput<KeyCode>>,
    mut actions: MessageWriter<InventoryAction>,
) {
    for (key, dir) in [
        (KeyCode::ArrowLeft, Direction::Left),
        (KeyCode::ArrowUp, Direction::Up),
        (KeyCode::ArrowRight, Direction::Right),
        (KeyCode::ArrowDown, Direction::Down),
    ] {
        if keys.just_pressed(key) {
            actions.write(InventoryAction::Move(dir));
        }
    }
    if keys.just_pressed(KeyCode::Enter) {
        actions.write(InventoryAction::Confirm);
    }
    if keys.just_pressed(KeyCode::KeyR) {
        actions.write(InventoryAction::Secondary);
    }
}

pub fn gamepad_input(
    gamepads: Query<&Gamepad>,
    mut latch: ResMut<AxisLatch>,
    mut actions: MessageWriter<InventoryAction>,
) {
    let Some(gamepad) = gamepads.iter().next() else {
        latch.reset();
        return;
    };

    for (button, dir) in [
        (GamepadButton::DPadLeft, Direction::Left),
        (GamepadButton::DPadUp, Direction::Up),
        (GamepadButton::DPadRight, Direction::Right),
        (GamepadButton::DPadDown, Direction::Down),
    ] {
        if gamepad.just_pressed(button) {
            actions.write(InventoryAction::Move(dir));
        }
    }
    if gamepad.just_pressed(GamepadButton::South) {
        actions.write(InventoryAction::Confirm);
    }
    if gamepad.just_pressed(GamepadButton::North) {
        actions.write(InventoryAction::Secondary);
    }

    // Horizontal is sampled first; with a fresh diagonal deflection the
    // horizontal axis wins and latches the pulse.
    let x = gamepad.get(GamepadAxis::LeftStickX).unwrap_or(0.0);
    let y = gamepad.get(GamepadAxis::LeftStickY).unwrap_or(0.0);
    if let Some(dir) = latch.sample_horizontal(x) {
        actions.write(InventoryAction::Move(dir));
    }
    if let Some(dir) = latch.sample_vertical(y) {
        actions.write(InventoryAction::Move(dir));
    }
}

/// Applies queued actions to the grid and cursors. One transition per
/// action; the UI derives its labels from the committed state afterwards.
pub fn apply_actions(
    mut actions: MessageReader<InventoryAction>,
    mut grid: ResMut<SlotGrid>,
    mut cursor: ResMut<InventoryCursor>,
    mut pending: ResMut<PendingPopulation>,
    config: Res<InventoryConfig>,
    mut sfx: MessageWriter<Sfx>,
) {
    for action in actions.read() {
        match action {
            InventoryAction::Move(dir) => {
                move_highlight(&mut grid, &mut cursor, *dir);
                sfx.write(Sfx::Move);
            }
            InventoryAction::Confirm => {
                if let Some(sound) = confirm(&mut grid, &mut cursor) {
                    sfx.write(sound);
                }
            }
            InventoryAction::Secondary => {
                if cursor.selected.is_some() {
                    remove_selected(&mut grid, &mut cursor);
                    sfx.write(Sfx::Remove);
                } else if !pending.in_flight() {
                    match request_population(config.random_items, grid.count()) {
                        Ok(request) => {
                            pending.start(request);
                            sfx.write(Sfx::Shuffle);
                        }
                        Err(err) => error!("randomize rejected: {err}"),
                    }
                }
            }
        }
    }
}

/// Moves the highlight one step with wraparound.
pub(crate) fn move_highlight(grid: &mut SlotGrid, cursor: &mut InventoryCursor, dir: Direction) {
    grid.slot_mut(cursor.highlighted).unhighlight();
    cursor.highlighted = grid.next_pos(cursor.highlighted, dir);
    grid.slot_mut(cursor.highlighted).highlight();
}

/// Confirm transition: select the highlighted item, or place the selected
/// one into the highlighted slot (swapping contents). Returns the sound of
/// the transition taken, `None` if the action was a no-op.
pub(crate) fn confirm(grid: &mut SlotGrid, cursor: &mut InventoryCursor) -> Option<Sfx> {
    match cursor.selected {
        None if grid.slot(cursor.highlighted).is_held() => {
            cursor.selected = Some(cursor.highlighted);
            grid.slot_mut(cursor.highlighted).select();
            Some(Sfx::Select)
        }
        Some(selected) => {
            grid.swap_items(selected, cursor.highlighted);
            grid.slot_mut(selected).unselect();
            cursor.selected = None;
            Some(Sfx::Swap)
        }
        None => None,
    }
}

/// Removes the selected item from the grid.
pub(crate) fn remove_selected(grid: &mut SlotGrid, cursor: &mut InventoryCursor) {
    if let Some(selected) = cursor.selected.take() {
        grid.slot_mut(selected).unselect();
        grid.slot_mut(selected).populate(None);
    }
}

/// Advances the blink of every selected slot on the frame cadence.
pub fn tick_blinks(time: Res<Time>, mut grid: ResMut<SlotGrid>) {
    let delta = time.delta();
    for slot in grid.iter_mut() {
        slot.tick_blink(delta);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_helpers::fixtures;

    #[test]
    fn move_highlight_shifts_exactly_one_slot() {
        let mut grid = SlotGrid::new(2, 2);
        let mut cursor = InventoryCursor::default();
        grid.slot_mut(cursor.highlighted).highlight();

        move_highlight(&mut grid, &mut cursor, Direction::Right);

        assert_eq!(cursor.highlighted, SlotPos::new(0, 1));
        assert!(grid.slot(SlotPos::new(0, 1)).is_highlighted());
        assert!(!grid.slot(SlotPos::ORIGIN).is_highlighted());
    }

    #[test]
    fn confirm_on_empty_slot_selects_nothing() {
        let mut grid = SlotGrid::new(2, 2);
        let mut cursor = InventoryCursor::default();

        assert_eq!(confirm(&mut grid, &mut cursor), None);
        assert_eq!(cursor.selected, None);
        assert!(!grid.slot(SlotPos::ORIGIN).is_selected());
    }

    #[test]
    fn confirm_selects_held_slot() {
        let mut grid = SlotGrid::new(2, 2);
        let mut cursor = InventoryCursor::default();
        grid.slot_mut(SlotPos::ORIGIN)
            .populate(Some(fixtures::item("axe")));

        assert_eq!(confirm(&mut grid, &mut cursor), Some(Sfx::Select));
        assert_eq!(cursor.selected, Some(SlotPos::ORIGIN));
        assert!(grid.slot(SlotPos::ORIGIN).is_selected());
    }

    #[test]
    fn confirm_places_selected_item_into_highlighted_slot() {
        let mut grid = SlotGrid::new(2, 2);
        let mut cursor = InventoryCursor::default();
        grid.slot_mut(SlotPos::ORIGIN)
            .populate(Some(fixtures::item("axe")));

        confirm(&mut grid, &mut cursor);
        move_highlight(&mut grid, &mut cursor, Direction::Right);

        assert_eq!(confirm(&mut grid, &mut cursor), Some(Sfx::Swap));
        assert_eq!(cursor.selected, None);
        assert!(!grid.slot(SlotPos::ORIGIN).is_held());
        assert!(!grid.slot(SlotPos::ORIGIN).is_selected());
        assert_eq!(grid.slot(SlotPos::new(0, 1)).item().unwrap().name, "axe");
    }

    #[test]
    fn self_place_keeps_content_and_clears_selection() {
        let mut grid = SlotGrid::new(2, 2);
        let mut cursor = InventoryCursor::default();
        grid.slot_mut(SlotPos::ORIGIN)
            .populate(Some(fixtures::item("axe")));

        confirm(&mut grid, &mut cursor);
        assert_eq!(confirm(&mut grid, &mut cursor), Some(Sfx::Swap));

        assert_eq!(cursor.selected, None);
        assert_eq!(grid.slot(SlotPos::ORIGIN).item().unwrap().name, "axe");
        assert!(!grid.slot(SlotPos::ORIGIN).is_selected());
    }

    #[test]
    fn place_swaps_two_held_slots() {
        let mut grid = SlotGrid::new(1, 2);
        let mut cursor = InventoryCursor::default();
        grid.slot_mut(SlotPos::new(0, 0))
            .populate(Some(fixtures::item("axe")));
        grid.slot_mut(SlotPos::new(0, 1))
            .populate(Some(fixtures::item("gem")));

        confirm(&mut grid, &mut cursor);
        move_highlight(&mut grid, &mut cursor, Direction::Right);
        confirm(&mut grid, &mut cursor);

        assert_eq!(grid.slot(SlotPos::new(0, 0)).item().unwrap().name, "gem");
        assert_eq!(grid.slot(SlotPos::new(0, 1)).item().unwrap().name, "axe");
    }

    #[test]
    fn remove_clears_selected_slot() {
        let mut grid = SlotGrid::new(2, 2);
        let mut cursor = InventoryCursor::default();
        grid.slot_mut(SlotPos::ORIGIN)
            .populate(Some(fixtures::item("axe")));
        confirm(&mut grid, &mut cursor);

        remove_selected(&mut grid, &mut cursor);

        assert_eq!(cursor.selected, None);
        assert!(!grid.slot(SlotPos::ORIGIN).is_held());
        assert!(!grid.slot(SlotPos::ORIGIN).is_selected());
    }

    #[test]
    fn axis_latch_fires_once_until_neutral() {
        let mut latch = AxisLatch::default();

        assert_eq!(latch.sample_horizontal(1.0), Some(Direction::Right));
        assert_eq!(latch.sample_horizontal(1.0), None);
        assert_eq!(latch.sample_horizontal(0.0), None);
        assert_eq!(latch.sample_horizontal(-1.0), Some(Direction::Left));
    }

    #[test]
    fn latched_axis_suppresses_the_other_axis() {
        let mut latch = AxisLatch::default();

        assert_eq!(latch.sample_horizontal(1.0), Some(Direction::Right));
        assert_eq!(latch.sample_vertical(1.0), None);

        // Horizontal back to neutral, vertical still held: vertical fires.
        assert_eq!(latch.sample_horizontal(0.0), None);
        assert_eq!(latch.sample_vertical(0.0), None);
        assert_eq!(latch.sample_vertical(-1.0), Some(Direction::Down));
    }

    #[test]
    fn deadzone_deflection_is_neutral() {
        let mut latch = AxisLatch::default();
        assert_eq!(latch.sample_horizontal(0.1), None);
        assert_eq!(latch.sample_vertical(-0.15), None);
    }

    #[test]
    fn queued_actions_drive_the_cursor_through_the_app() {
        let mut app = fixtures::test_app();
        app.add_systems(Update, apply_actions);

        app.world_mut()
            .write_message(InventoryAction::Move(Direction::Right));
        app.update();
        app.world_mut()
            .write_message(InventoryAction::Move(Direction::Down));
        app.update();

        let cursor = app.world().resource::<InventoryCursor>();
        assert_eq!(cursor.highlighted, SlotPos::new(1, 1));
    }

    #[test]
    fn randomize_marks_population_in_flight() {
        let mut app = fixtures::test_app();
        app.add_systems(Update, apply_actions);

        app.world_mut().write_message(InventoryAction::Secondary);
        app.update();

        assert!(app.world().resource::<PendingPopulation>().in_flight());
    }

    #[test]
    fn oversized_randomize_is_rejected_without_touching_state() {
        let mut app = fixtures::test_app();
        app.insert_resource(crate::registry::InventoryConfig {
            rows: 2,
            columns: 2,
            random_items: 9,
        });
        app.add_systems(Update, apply_actions);

        app.world_mut().write_message(InventoryAction::Secondary);
        app.update();

        assert!(!app.world().resource::<PendingPopulation>().in_flight());
        let grid = app.world().resource::<SlotGrid>();
        assert!(grid.iter().all(|(_, slot)| !slot.is_held()));
    }
}
