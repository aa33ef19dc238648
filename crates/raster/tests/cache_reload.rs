use boreas_raster::{
    CancelToken, GeoPoint, NoOperation, SyntheticStore, WeatherCache, TERRAIN_PARAMETER,
};
use boreas_time::TimeOfDay;

fn time(hour: u8, minute: u8) -> TimeOfDay {
    TimeOfDay::new(hour, minute, 0).unwrap()
}

fn store() -> SyntheticStore {
    SyntheticStore::new()
        .with_parameter(1, "thermal updraft velocity", &[21_600, 32_400, 43_200])
        .with_parameter(3, "boundary layer depth", &[43_200])
}

#[test]
fn terrain_mode_never_contacts_the_store() {
    let store = store();
    let mut cache = WeatherCache::new(&store);
    assert!(cache.is_terrain());

    for &(h, m) in &[(0u8, 0u8), (6, 30), (12, 0), (23, 59)] {
        cache.reload(time(h, m), &NoOperation);
        assert!(cache.map().is_none(), "terrain reload at {h}:{m} produced a layer");
    }
    assert_eq!(store.load_count(), 0);
}

#[test]
fn is_terrain_iff_parameter_zero() {
    let store = store();
    let mut cache = WeatherCache::new(&store);
    assert!(cache.is_terrain());
    assert_eq!(cache.parameter(), TERRAIN_PARAMETER);

    cache.set_parameter(3);
    assert!(!cache.is_terrain());
    assert_eq!(cache.parameter(), 3);

    cache.set_parameter(0);
    assert!(cache.is_terrain());
}

#[test]
fn selecting_a_parameter_loads_its_noon_slice() {
    let store = store();
    let mut cache = WeatherCache::new(&store);

    cache.set_parameter(3);
    cache.reload(time(12, 0), &NoOperation);

    assert!(cache.map().is_some());
    assert_eq!(cache.parameter(), 3);
    assert_eq!(cache.map_name(), "boundary layer depth");
    assert_eq!(store.load_count(), 1);
}

#[test]
fn redundant_reloads_hit_the_cache() {
    let store = store();
    let mut cache = WeatherCache::new(&store);
    cache.set_parameter(1);

    // Both requests resolve to the 09:00 slice; only the first fetches.
    cache.reload(time(9, 15), &NoOperation);
    cache.reload(time(10, 30), &NoOperation);
    cache.reload(time(11, 59), &NoOperation);
    assert_eq!(store.load_count(), 1);

    // Crossing into the 12:00 slice is a genuine change.
    cache.reload(time(12, 0), &NoOperation);
    assert_eq!(store.load_count(), 2);
}

#[test]
fn parameter_change_takes_effect_on_next_reload() {
    let store = store();
    let mut cache = WeatherCache::new(&store);
    cache.set_parameter(1);
    cache.reload(time(12, 0), &NoOperation);
    assert_eq!(store.load_count(), 1);

    // Pure state change: nothing happens until the reload.
    cache.set_parameter(3);
    assert_eq!(store.load_count(), 1);
    assert!(cache.map().is_some());

    cache.reload(time(12, 0), &NoOperation);
    assert_eq!(store.load_count(), 2);
    assert_eq!(cache.map_name(), "boundary layer depth");
}

#[test]
fn switching_to_terrain_drops_the_layer() {
    let store = store();
    let mut cache = WeatherCache::new(&store);
    cache.set_parameter(1);
    cache.reload(time(12, 0), &NoOperation);
    assert!(cache.map().is_some());

    cache.set_parameter(TERRAIN_PARAMETER);
    cache.reload(time(12, 0), &NoOperation);
    assert!(cache.map().is_none());
    assert_eq!(store.load_count(), 1, "terrain switch must not fetch");
}

#[test]
fn close_forces_a_refetch_with_unchanged_selection() {
    let store = store();
    let mut cache = WeatherCache::new(&store);
    cache.set_parameter(1);
    cache.reload(time(12, 0), &NoOperation);
    assert_eq!(store.load_count(), 1);

    cache.close();
    assert!(cache.map().is_none());
    assert!(cache.is_dirty());

    cache.reload(time(12, 0), &NoOperation);
    assert_eq!(store.load_count(), 2);
    assert!(cache.map().is_some());
}

#[test]
fn view_drift_outside_coverage_forces_a_refetch() {
    let store = SyntheticStore::new()
        .with_parameter(1, "thermal updraft velocity", &[43_200])
        .with_coverage_radius(1, 60_000.0);
    let mut cache = WeatherCache::new(&store);
    let home = GeoPoint::new(47.0, 8.0);

    cache.set_parameter(1);
    cache.set_view_center(home, 10_000.0);
    cache.reload(time(12, 0), &NoOperation);
    assert_eq!(store.load_count(), 1);
    assert!(!cache.is_dirty());

    // A small pan stays inside coverage: still a cache hit.
    cache.set_view_center(GeoPoint::new(47.05, 8.05), 10_000.0);
    assert!(!cache.is_dirty());
    cache.reload(time(12, 0), &NoOperation);
    assert_eq!(store.load_count(), 1);

    // ~220 km away: the layer reports itself stale, same parameter and
    // time slice re-fetch anyway.
    cache.set_view_center(GeoPoint::new(49.0, 8.0), 10_000.0);
    assert!(cache.is_dirty());
    cache.reload(time(12, 0), &NoOperation);
    assert_eq!(store.load_count(), 2);
    assert!(cache.map().is_some());
}

#[test]
fn failed_load_leaves_no_layer_and_retries_next_tick() {
    let store = SyntheticStore::new()
        .with_parameter(1, "thermal updraft velocity", &[43_200])
        .with_failure(1, "decode error");
    let mut cache = WeatherCache::new(&store);
    cache.set_parameter(1);

    cache.reload(time(12, 0), &NoOperation);
    assert!(cache.map().is_none());
    assert_eq!(store.load_count(), 1);

    // No internal retry; the next periodic tick tries again exactly once.
    cache.reload(time(12, 0), &NoOperation);
    assert_eq!(store.load_count(), 2);
    assert!(cache.map().is_none());
}

#[test]
fn cancellation_aborts_without_resurrecting_the_old_layer() {
    let store = store();
    let mut cache = WeatherCache::new(&store);
    cache.set_parameter(1);
    cache.reload(time(9, 0), &NoOperation);
    assert!(cache.map().is_some());

    let token = CancelToken::new();
    token.cancel();
    cache.set_parameter(3);
    cache.reload(time(12, 0), &token);

    // The fetch was attempted, aborted, and the previous layer is gone.
    assert_eq!(store.load_count(), 2);
    assert!(cache.map().is_none());

    // A later tick without cancellation recovers.
    cache.reload(time(12, 0), &NoOperation);
    assert!(cache.map().is_some());
    assert_eq!(cache.map_name(), "boundary layer depth");
}

#[test]
fn request_before_first_slice_yields_no_layer() {
    let store = store();
    let mut cache = WeatherCache::new(&store);
    cache.set_parameter(3); // only publishes 12:00

    cache.reload(time(8, 0), &NoOperation);
    assert!(cache.map().is_none());
    assert_eq!(store.load_count(), 0, "no admissible slice, no fetch");

    cache.reload(time(12, 0), &NoOperation);
    assert!(cache.map().is_some());
}

#[test]
fn unknown_parameter_reports_unavailable() {
    let store = store();
    let mut cache = WeatherCache::new(&store);
    cache.set_parameter(9);
    assert_eq!(cache.map_name(), "unavailable");

    cache.reload(time(12, 0), &NoOperation);
    assert!(cache.map().is_none());
}

#[test]
fn pinned_time_survives_clock_advance() {
    let store = store();
    let mut cache = WeatherCache::new(&store);
    cache.set_parameter(1);
    cache.set_time(time(9, 30));

    // The display clock marches on; the pinned 09:00 slice stays put.
    cache.reload(time(9, 30), &NoOperation);
    cache.reload(time(12, 10), &NoOperation);
    cache.reload(time(13, 0), &NoOperation);
    assert_eq!(store.load_count(), 1);
    assert_eq!(cache.time(), time(9, 30));
}
