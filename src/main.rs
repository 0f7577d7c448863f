mod audio;
mod inventory;
mod registry;
mod resolution;
mod sets;
mod ui;

#[cfg(test)]
mod test_helpers;

use bevy::prelude::*;

use sets::GameSet;

fn main() {
    App::new()
        .add_plugins(
            DefaultPlugins
                .set(ImagePlugin::default_nearest())
                .set(WindowPlugin {
                    primary_window: Some(Window {
                        title: "Satchel".into(),
                        resolution: (1280, 720).into(),
                        ..default()
                    }),
                    ..default()
                }),
        )
        .configure_sets(
            Update,
            (GameSet::Input, GameSet::Inventory, GameSet::Ui).chain(),
        )
        .add_plugins(registry::RegistryPlugin)
        .add_plugins(inventory::InventoryPlugin)
        .add_plugins(resolution::ResolutionPlugin)
        .add_plugins(audio::AudioPlugin)
        .add_plugins(ui::UiPlugin)
        .add_systems(Startup, setup)
        .run();
}

fn setup(mut commands: Commands) {
    commands.spawn(Camera2d);
}
