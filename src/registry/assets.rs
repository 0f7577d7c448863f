use bevy::prelude::*;
use bevy::reflect::TypePath;
use serde::Deserialize;

use crate::resolution::Resolution;

/// Asset loaded from inventory.config.ron
#[derive(Asset, TypePath, Debug, Deserialize)]
pub struct InventoryConfigAsset {
    pub rows: usize,
    pub columns: usize,
    pub random_items: usize,
}

/// Asset loaded from display.config.ron
#[derive(Asset, TypePath, Debug, Deserialize)]
pub struct DisplayConfigAsset {
    pub resolutions: Vec<Resolution>,
}

/// One entry of the icon pool manifest.
#[derive(Debug, Clone, Deserialize)]
pub struct IconDef {
    pub id: String,
    pub path: String,
}

/// Asset loaded from items.pool.ron — the manifest of candidate item icons.
#[derive(Asset, TypePath, Debug, Deserialize)]
pub struct IconPoolAsset {
    pub icons: Vec<IconDef>,
}
