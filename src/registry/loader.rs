use std::marker::PhantomData;

use bevy::asset::io::Reader;
use bevy::asset::{AssetLoader, LoadContext, LoadState};
use bevy::prelude::*;
use bevy::reflect::TypePath;
use serde::Deserialize;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum RonLoaderError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("RON parse error: {0}")]
    Ron(#[from] ron::error::SpannedError),
}

/// Generic RON asset loader, one instance per config asset type. Each
/// config type claims exactly one compound extension ("inventory.ron",
/// "display.ron", ...), so the asset server can tell them apart.
#[derive(TypePath)]
pub struct RonLoader<T: TypePath> {
    extension: [&'static str; 1],
    _phantom: PhantomData<T>,
}

impl<T: TypePath> RonLoader<T> {
    pub fn new(extension: &'static str) -> Self {
        Self {
            extension: [extension],
            _phantom: PhantomData,
        }
    }
}

impl<T> AssetLoader for RonLoader<T>
where
    T: Asset + TypePath + for<'de> Deserialize<'de> + Send + Sync + 'static,
{
    type Asset = T;
    type Settings = ();
    type Error = RonLoaderError;

    async fn load(
        &self,
        reader: &mut dyn Reader,
        _settings: &Self::Settings,
        _load_context: &mut LoadContext<'_>,
    ) -> Result<Self::Asset, Self::Error> {
        let mut bytes = Vec::new();
        reader.read_to_end(&mut bytes).await?;
        let asset = ron::de::from_bytes::<T>(&bytes)?;
        Ok(asset)
    }

    fn extensions(&self) -> &[&str] {
        &self.extension
    }
}

/// Poll result for a single tracked asset.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum AssetPoll {
    Loading,
    Loaded,
    Failed(String),
}

/// Projects one handle's server state into an [`AssetPoll`].
pub(crate) fn poll_handle<A: Asset>(
    asset_server: &AssetServer,
    assets: &Assets<A>,
    handle: &Handle<A>,
) -> AssetPoll {
    if let LoadState::Failed(err) = asset_server.load_state(handle) {
        AssetPoll::Failed(err.to_string())
    } else if assets.contains(handle) {
        AssetPoll::Loaded
    } else {
        AssetPoll::Loading
    }
}

/// Progress of a batch of tracked loads.
#[derive(Debug, PartialEq, Eq)]
pub(crate) enum LoadProgress {
    Pending,
    Ready,
    Failed { name: String, error: String },
}

/// Folds per-asset polls into one decision: the first failure aborts the
/// batch; otherwise it is ready only once every asset has arrived.
pub(crate) fn batch_progress<'a>(
    polls: impl IntoIterator<Item = (&'a str, AssetPoll)>,
) -> LoadProgress {
    let mut ready = true;
    for (name, poll) in polls {
        match poll {
            AssetPoll::Failed(error) => {
                return LoadProgress::Failed {
                    name: name.to_string(),
                    error,
                };
            }
            AssetPoll::Loading => ready = false,
            AssetPoll::Loaded => {}
        }
    }
    if ready {
        LoadProgress::Ready
    } else {
        LoadProgress::Pending
    }
}
