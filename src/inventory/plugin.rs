use bevy::prelude::*;

use super::controller::{
    apply_actions, gamepad_input, keyboard_input, tick_blinks, AxisLatch, InventoryAction,
    InventoryCursor,
};
use super::grid::SlotGrid;
use super::populate::{poll_population, request_population, PendingPopulation};
use crate::registry::{AppState, InventoryConfig};
use crate::sets::GameSet;

pub struct InventoryPlugin;

impl Plugin for InventoryPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<AxisLatch>()
            .init_resource::<PendingPopulation>()
            .add_message::<InventoryAction>()
            .add_systems(OnEnter(AppState::InGame), setup_inventory)
            .add_systems(
                Update,
                (
                    (keyboard_input, gamepad_input).in_set(GameSet::Input),
                    (apply_actions, poll_population, tick_blinks)
                        .chain()
                        .in_set(GameSet::Inventory),
                )
                    .run_if(in_state(AppState::InGame)),
            );
    }
}

/// Builds the grid from config, highlights the origin slot and queues the
/// initial population.
fn setup_inventory(
    mut commands: Commands,
    config: Res<InventoryConfig>,
    mut pending: ResMut<PendingPopulation>,
) {
    let mut grid = SlotGrid::new(config.rows, config.columns);
    let cursor = InventoryCursor::default();
    grid.slot_mut(cursor.highlighted).highlight();

    match request_population(config.random_items, grid.count()) {
        Ok(request) => pending.start(request),
        Err(err) => error!("initial population skipped: {err}"),
    }

    commands.insert_resource(grid);
    commands.insert_resource(cursor);
}
