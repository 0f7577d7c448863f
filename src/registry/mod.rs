pub mod assets;
pub mod loader;

use bevy::prelude::*;

use assets::{DisplayConfigAsset, IconPoolAsset, InventoryConfigAsset};
use loader::{batch_progress, poll_handle, LoadProgress, RonLoader};

use crate::resolution::ResolutionList;

/// Application state: Loading waits for configs, InGame runs the UI.
#[derive(States, Default, Debug, Clone, Eq, PartialEq, Hash)]
pub enum AppState {
    #[default]
    Loading,
    InGame,
}

/// Grid shape and randomize request size, from inventory.config.ron.
#[derive(Resource, Debug)]
pub struct InventoryConfig {
    pub rows: usize,
    pub columns: usize,
    pub random_items: usize,
}

/// One loaded pool entry: display identifier plus its renderable handle.
#[derive(Debug, Clone)]
pub struct IconAsset {
    pub id: String,
    pub image: Handle<Image>,
}

impl IconAsset {
    /// Display name for the item: the `%` placeholder in identifiers is
    /// rendered as a space.
    pub fn display_name(&self) -> String {
        self.id.replace('%', " ")
    }
}

/// The candidate icon pool the randomizer draws from.
#[derive(Resource, Debug, Default)]
pub struct IconPool {
    pub icons: Vec<IconAsset>,
}

/// Handles for config assets being loaded.
#[derive(Resource)]
struct LoadingAssets {
    inventory: Handle<InventoryConfigAsset>,
    display: Handle<DisplayConfigAsset>,
    pool: Handle<IconPoolAsset>,
}

pub struct RegistryPlugin;

impl Plugin for RegistryPlugin {
    fn build(&self, app: &mut App) {
        app.init_state::<AppState>()
            .init_asset::<InventoryConfigAsset>()
            .init_asset::<DisplayConfigAsset>()
            .init_asset::<IconPoolAsset>()
            .register_asset_loader(RonLoader::<InventoryConfigAsset>::new("inventory.ron"))
            .register_asset_loader(RonLoader::<DisplayConfigAsset>::new("display.ron"))
            .register_asset_loader(RonLoader::<IconPoolAsset>::new("pool.ron"))
            .add_systems(Startup, start_loading)
            .add_systems(Update, check_loading.run_if(in_state(AppState::Loading)));
    }
}

fn start_loading(mut commands: Commands, asset_server: Res<AssetServer>) {
    let inventory = asset_server.load::<InventoryConfigAsset>("data/config.inventory.ron");
    let display = asset_server.load::<DisplayConfigAsset>("data/config.display.ron");
    let pool = asset_server.load::<IconPoolAsset>("data/items.pool.ron");
    commands.insert_resource(LoadingAssets {
        inventory,
        display,
        pool,
    });
}

fn check_loading(
    mut commands: Commands,
    loading: Option<Res<LoadingAssets>>,
    asset_server: Res<AssetServer>,
    inventory_assets: Res<Assets<InventoryConfigAsset>>,
    display_assets: Res<Assets<DisplayConfigAsset>>,
    pool_assets: Res<Assets<IconPoolAsset>>,
    mut next_state: ResMut<NextState<AppState>>,
) {
    let Some(loading) = loading else {
        return; // loading already aborted
    };

    let progress = batch_progress([
        (
            "inventory config",
            poll_handle(&asset_server, &inventory_assets, &loading.inventory),
        ),
        (
            "display config",
            poll_handle(&asset_server, &display_assets, &loading.display),
        ),
        (
            "icon pool manifest",
            poll_handle(&asset_server, &pool_assets, &loading.pool),
        ),
    ]);
    match progress {
        LoadProgress::Pending => return,
        LoadProgress::Failed { name, error } => {
            error!("Failed to load {name}: {error}");
            commands.remove_resource::<LoadingAssets>();
            return;
        }
        LoadProgress::Ready => {}
    }

    let (Some(inventory), Some(display), Some(pool)) = (
        inventory_assets.get(&loading.inventory),
        display_assets.get(&loading.display),
        pool_assets.get(&loading.pool),
    ) else {
        return; // handles settled but not yet queryable
    };

    commands.insert_resource(InventoryConfig {
        rows: inventory.rows,
        columns: inventory.columns,
        random_items: inventory.random_items,
    });
    commands.insert_resource(ResolutionList(display.resolutions.clone()));

    // Kick the pool image loads now; population polls the handles later.
    let icons = pool
        .icons
        .iter()
        .map(|def| IconAsset {
            id: def.id.clone(),
            image: asset_server.load(def.path.clone()),
        })
        .collect();
    commands.insert_resource(IconPool { icons });

    commands.remove_resource::<LoadingAssets>();
    next_state.set(AppState::InGame);
    info!("Configs loaded, entering InGame state");
}
