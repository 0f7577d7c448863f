use bevy::prelude::*;

/// Top-level system ordering sets for the frame loop.
///
/// Configured as a chain: Input → Inventory → Ui. Input systems translate
/// raw devices into actions, inventory systems commit state, UI systems
/// read the committed state.
#[derive(SystemSet, Debug, Clone, PartialEq, Eq, Hash)]
pub enum GameSet {
    Input,
    Inventory,
    Ui,
}
