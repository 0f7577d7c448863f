pub mod cycler;

use bevy::prelude::*;
use bevy::window::PrimaryWindow;

pub use cycler::{Resolution, ResolutionCursor, ResolutionList};

use crate::registry::AppState;
use crate::sets::GameSet;

pub struct ResolutionPlugin;

impl Plugin for ResolutionPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<ResolutionCursor>()
            .add_systems(OnEnter(AppState::InGame), apply_initial_resolution)
            .add_systems(
                Update,
                cycle_input
                    .in_set(GameSet::Input)
                    .run_if(in_state(AppState::InGame)),
            );
    }
}

/// Applies the first listed resolution on entering the game. A list with a
/// single entry leaves the window as configured.
fn apply_initial_resolution(
    list: Res<ResolutionList>,
    cursor: Res<ResolutionCursor>,
    mut windows: Query<&mut Window, With<PrimaryWindow>>,
) {
    if list.len() > 1
        && let Some(res) = cursor.current(&list)
    {
        apply_resolution(&mut windows, res);
    }
}

/// Steps the cursor on next/previous input and applies the new resolution
/// to the primary window. Fire-and-forget: no acknowledgment is consumed.
fn cycle_input(
    keys: Res<ButtonInput<KeyCode>>,
    gamepads: Query<&Gamepad>,
    list: Res<ResolutionList>,
    mut cursor: ResMut<ResolutionCursor>,
    mut windows: Query<&mut Window, With<PrimaryWindow>>,
) {
    let gamepad = gamepads.iter().next();
    let next = keys.just_pressed(KeyCode::KeyU)
        || gamepad.is_some_and(|g| g.just_pressed(GamepadButton::RightTrigger));
    let prev = keys.just_pressed(KeyCode::KeyD)
        || gamepad.is_some_and(|g| g.just_pressed(GamepadButton::LeftTrigger));

    let applied = if next {
        cursor.next(&list)
    } else if prev {
        cursor.prev(&list)
    } else {
        None
    };

    if let Some(res) = applied {
        info!("Resolution changed: {res}");
        apply_resolution(&mut windows, res);
    }
}

fn apply_resolution(windows: &mut Query<&mut Window, With<PrimaryWindow>>, res: Resolution) {
    if let Ok(mut window) = windows.single_mut() {
        window.resolution.set(res.width as f32, res.height as f32);
    }
}
