use std::collections::HashSet;

use bevy::prelude::*;
use rand::Rng;
use thiserror::Error;

use super::controller::InventoryCursor;
use super::grid::{SlotGrid, SlotPos};
use super::slot::ItemRef;
use crate::registry::loader::{batch_progress, poll_handle, LoadProgress};
use crate::registry::{IconAsset, IconPool};

#[derive(Debug, Error, PartialEq, Eq)]
pub enum InventoryError {
    #[error("requested {requested} random items but the grid only has {capacity} slots")]
    CapacityExceeded { requested: usize, capacity: usize },
}

/// A randomize request waiting for the icon pool to finish loading.
#[derive(Debug, PartialEq, Eq)]
pub struct PopulateRequest {
    pub count: usize,
}

/// Gate for the population task: at most one request may be in flight per
/// controller. Cleared on completion or abort, never by a new request.
#[derive(Resource, Default, Debug)]
pub struct PendingPopulation(Option<PopulateRequest>);

impl PendingPopulation {
    pub fn in_flight(&self) -> bool {
        self.0.is_some()
    }

    pub(crate) fn start(&mut self, request: PopulateRequest) {
        self.0 = Some(request);
    }

    fn clear(&mut self) -> Option<PopulateRequest> {
        self.0.take()
    }
}

/// Validates a randomize request against grid capacity. The rejection
/// sampler below never terminates for an oversized request, so this fails
/// hard before any state is touched.
pub(crate) fn request_population(
    count: usize,
    capacity: usize,
) -> Result<PopulateRequest, InventoryError> {
    if count > capacity {
        return Err(InventoryError::CapacityExceeded {
            requested: count,
            capacity,
        });
    }
    Ok(PopulateRequest { count })
}

/// Picks `count` distinct positions by uniform rejection sampling.
/// Terminates almost surely given `count <= height * width`.
pub(crate) fn choose_distinct_positions(
    rng: &mut impl Rng,
    height: usize,
    width: usize,
    count: usize,
) -> HashSet<SlotPos> {
    let mut chosen = HashSet::new();
    while chosen.len() < count {
        chosen.insert(SlotPos::new(
            rng.gen_range(0..height),
            rng.gen_range(0..width),
        ));
    }
    chosen
}

/// Completes a population: clears the whole grid and the selection, then
/// fills the chosen slots with uniformly random pool icons (duplicates
/// across slots allowed).
pub(crate) fn complete_population(
    grid: &mut SlotGrid,
    cursor: &mut InventoryCursor,
    pool: &[IconAsset],
    count: usize,
    rng: &mut impl Rng,
) {
    let chosen = choose_distinct_positions(rng, grid.height(), grid.width(), count);

    grid.clear_all();
    cursor.selected = None;

    if pool.is_empty() {
        warn!("icon pool is empty, populated {count} slots with nothing");
        return;
    }

    for pos in chosen {
        let icon = &pool[rng.gen_range(0..pool.len())];
        grid.slot_mut(pos).populate(Some(ItemRef {
            icon: icon.image.clone(),
            name: icon.display_name(),
        }));
    }
}

/// Applies a load-batch outcome to the in-flight gate: a failure aborts
/// the request and releases the gate, readiness takes the request out for
/// completion, anything still pending leaves the gate untouched.
pub(crate) fn resolve_poll(
    pending: &mut PendingPopulation,
    progress: LoadProgress,
) -> Option<PopulateRequest> {
    match progress {
        LoadProgress::Pending => None,
        LoadProgress::Failed { name, error } => {
            error!("icon pool load failed for '{name}': {error}");
            pending.clear();
            None
        }
        LoadProgress::Ready => pending.clear(),
    }
}

/// Resumes a pending population once every pool image is available.
///
/// Runs every frame while a request is in flight; returns early until the
/// loads settle one way or the other.
pub fn poll_population(
    mut pending: ResMut<PendingPopulation>,
    mut grid: ResMut<SlotGrid>,
    mut cursor: ResMut<InventoryCursor>,
    pool: Res<IconPool>,
    images: Res<Assets<Image>>,
    asset_server: Res<AssetServer>,
) {
    if !pending.in_flight() {
        return;
    }

    let progress = batch_progress(
        pool.icons
            .iter()
            .map(|icon| (icon.id.as_str(), poll_handle(&asset_server, &images, &icon.image))),
    );
    let Some(request) = resolve_poll(&mut pending, progress) else {
        return;
    };
    complete_population(
        &mut grid,
        &mut cursor,
        &pool.icons,
        request.count,
        &mut rand::thread_rng(),
    );
}

#[cfg(test)]
mod tests {
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    use super::*;
    use crate::test_helpers::fixtures;

    #[test]
    fn oversized_request_is_rejected() {
        let err = request_population(5, 4).unwrap_err();
        assert_eq!(
            err,
            InventoryError::CapacityExceeded {
                requested: 5,
                capacity: 4
            }
        );
    }

    #[test]
    fn full_capacity_request_is_accepted() {
        assert_eq!(request_population(4, 4).unwrap(), PopulateRequest { count: 4 });
    }

    #[test]
    fn chooses_exactly_the_requested_number_of_distinct_positions() {
        let mut rng = StdRng::seed_from_u64(7);
        let chosen = choose_distinct_positions(&mut rng, 2, 2, 3);

        assert_eq!(chosen.len(), 3);
        for pos in &chosen {
            assert!(pos.row < 2 && pos.col < 2);
        }
    }

    #[test]
    fn sampling_full_grid_covers_every_position() {
        let mut rng = StdRng::seed_from_u64(7);
        let chosen = choose_distinct_positions(&mut rng, 3, 4, 12);
        assert_eq!(chosen.len(), 12);
    }

    #[test]
    fn population_fills_exactly_k_slots_and_clears_the_rest() {
        let mut grid = SlotGrid::new(2, 2);
        let mut cursor = InventoryCursor::default();
        let pool = fixtures::icon_pool(&["axe", "gem"]);
        let mut rng = StdRng::seed_from_u64(42);

        // Pre-existing state must not survive the repopulation.
        grid.slot_mut(SlotPos::ORIGIN)
            .populate(Some(fixtures::item("stale")));
        grid.slot_mut(SlotPos::ORIGIN).select();
        cursor.selected = Some(SlotPos::ORIGIN);

        complete_population(&mut grid, &mut cursor, &pool, 3, &mut rng);

        let held = grid.iter().filter(|(_, slot)| slot.is_held()).count();
        assert_eq!(held, 3);
        assert_eq!(cursor.selected, None);
        for (_, slot) in grid.iter() {
            assert!(!slot.is_selected());
            if let Some(item) = slot.item() {
                assert!(item.name == "axe" || item.name == "gem", "{}", item.name);
            }
        }
    }

    #[test]
    fn failed_pool_load_aborts_the_request_and_releases_the_gate() {
        let mut pending = PendingPopulation::default();
        pending.start(PopulateRequest { count: 2 });

        let taken = resolve_poll(
            &mut pending,
            LoadProgress::Failed {
                name: "axe".into(),
                error: "file not found".into(),
            },
        );

        assert_eq!(taken, None);
        assert!(!pending.in_flight());
    }

    #[test]
    fn unsettled_loads_keep_the_request_in_flight() {
        let mut pending = PendingPopulation::default();
        pending.start(PopulateRequest { count: 2 });

        assert_eq!(resolve_poll(&mut pending, LoadProgress::Pending), None);
        assert!(pending.in_flight());
    }

    #[test]
    fn settled_loads_hand_the_request_over_for_completion() {
        let mut pending = PendingPopulation::default();
        pending.start(PopulateRequest { count: 2 });

        let taken = resolve_poll(&mut pending, LoadProgress::Ready);

        assert_eq!(taken, Some(PopulateRequest { count: 2 }));
        assert!(!pending.in_flight());
    }

    #[test]
    fn population_with_zero_count_empties_the_grid() {
        let mut grid = SlotGrid::new(2, 2);
        let mut cursor = InventoryCursor::default();
        let pool = fixtures::icon_pool(&["axe"]);
        let mut rng = StdRng::seed_from_u64(1);

        grid.slot_mut(SlotPos::new(1, 1))
            .populate(Some(fixtures::item("stale")));
        complete_population(&mut grid, &mut cursor, &pool, 0, &mut rng);

        assert!(grid.iter().all(|(_, slot)| !slot.is_held()));
    }
}
