use bevy::audio::{AudioPlayer, AudioSource, PlaybackSettings};
use bevy::prelude::*;

/// Fire-and-forget sound effect triggers. Nothing reads these back; core
/// state never depends on playback.
#[derive(Message, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Sfx {
    Move,
    Select,
    Remove,
    Shuffle,
    Swap,
}

/// Loaded audio clips, one per effect.
#[derive(Resource)]
pub struct SfxHandles {
    move_clip: Handle<AudioSource>,
    select: Handle<AudioSource>,
    remove: Handle<AudioSource>,
    shuffle: Handle<AudioSource>,
    swap: Handle<AudioSource>,
}

impl SfxHandles {
    fn clip(&self, sfx: Sfx) -> Handle<AudioSource> {
        match sfx {
            Sfx::Move => self.move_clip.clone(),
            Sfx::Select => self.select.clone(),
            Sfx::Remove => self.remove.clone(),
            Sfx::Shuffle => self.shuffle.clone(),
            Sfx::Swap => self.swap.clone(),
        }
    }
}

pub struct AudioPlugin;

impl Plugin for AudioPlugin {
    fn build(&self, app: &mut App) {
        app.add_message::<Sfx>()
            .add_systems(Startup, load_sfx)
            .add_systems(Update, play_sfx);
    }
}

fn load_sfx(mut commands: Commands, asset_server: Res<AssetServer>) {
    commands.insert_resource(SfxHandles {
        move_clip: asset_server.load("audio/move.ogg"),
        select: asset_server.load("audio/select.ogg"),
        remove: asset_server.load("audio/remove.ogg"),
        shuffle: asset_server.load("audio/shuffle.ogg"),
        swap: asset_server.load("audio/swap.ogg"),
    });
}

/// Spawns a one-shot audio player per trigger; the entity despawns itself
/// when the clip ends.
fn play_sfx(mut triggers: MessageReader<Sfx>, handles: Res<SfxHandles>, mut commands: Commands) {
    for sfx in triggers.read() {
        commands.spawn((AudioPlayer::new(handles.clip(*sfx)), PlaybackSettings::DESPAWN));
    }
}
