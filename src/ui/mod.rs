pub mod components;
pub mod panel;
pub mod sync;
pub mod theme;

use bevy::prelude::*;

pub use components::*;
pub use theme::UiTheme;

use crate::registry::AppState;
use crate::sets::GameSet;

pub struct UiPlugin;

impl Plugin for UiPlugin {
    fn build(&self, app: &mut App) {
        app.insert_resource(UiTheme::load())
            .add_systems(OnEnter(AppState::InGame), panel::spawn_panel)
            .add_systems(
                Update,
                (
                    sync::sync_slot_visuals,
                    sync::sync_selection_label,
                    sync::sync_affordances,
                    sync::sync_resolution_labels,
                )
                    .in_set(GameSet::Ui)
                    .run_if(in_state(AppState::InGame)),
            );
    }
}
