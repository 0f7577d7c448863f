pub mod fixtures {
    use bevy::prelude::*;

    use crate::inventory::{
        AxisLatch, InventoryAction, InventoryCursor, ItemRef, PendingPopulation, SlotGrid,
    };
    use crate::registry::{IconAsset, InventoryConfig};

    pub fn item(name: &str) -> ItemRef {
        ItemRef {
            icon: Handle::default(),
            name: name.into(),
        }
    }

    pub fn icon_pool(ids: &[&str]) -> Vec<IconAsset> {
        ids.iter()
            .map(|id| IconAsset {
                id: (*id).into(),
                image: Handle::default(),
            })
            .collect()
    }

    /// Minimal app with a 2x2 grid and the controller resources in place,
    /// for message-driven system tests.
    pub fn test_app() -> App {
        let mut app = App::new();
        app.add_plugins(MinimalPlugins);
        app.add_message::<InventoryAction>();
        app.add_message::<crate::audio::Sfx>();
        app.insert_resource(InventoryConfig {
            rows: 2,
            columns: 2,
            random_items: 3,
        });
        app.init_resource::<AxisLatch>();
        app.init_resource::<PendingPopulation>();
        app.insert_resource(SlotGrid::new(2, 2));
        app.insert_resource(InventoryCursor::default());
        app
    }
}
