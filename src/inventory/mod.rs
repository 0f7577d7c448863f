pub mod controller;
pub mod grid;
pub mod plugin;
pub mod populate;
pub mod slot;

pub use controller::*;
pub use grid::*;
pub use plugin::InventoryPlugin;
pub use populate::*;
pub use slot::*;
