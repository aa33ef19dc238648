use std::fs;

use anyhow::{bail, Context, Result};
use tracing::info;

use boreas_raster::{GeoPoint, NoOperation, SyntheticStore, WeatherCache};
use boreas_time::TimeOfDay;

use crate::cli::SimulateArgs;
use crate::config::{BoreasConfig, StoreConfig};

/// Drive a weather cache through the configured reload schedule and report
/// how often the store was actually contacted.
pub fn run(args: SimulateArgs) -> Result<()> {
    let raw = fs::read_to_string(&args.config)
        .with_context(|| format!("failed to read config: {}", args.config.display()))?;
    let config: BoreasConfig = toml::from_str(&raw)
        .with_context(|| format!("failed to parse config: {}", args.config.display()))?;

    let store = build_store(&config.store)?;
    let mut cache = WeatherCache::new(&store);

    let mut radius_m = 50_000.0;
    if let Some(view) = &config.view {
        radius_m = view.radius_km * 1_000.0;
        cache.set_view_center(GeoPoint::new(view.latitude, view.longitude), radius_m);
    }

    for (tick, step) in config.schedule.iter().enumerate() {
        let at: TimeOfDay = step
            .at
            .parse()
            .with_context(|| format!("schedule step {tick}: bad 'at' time"))?;

        if let Some(parameter) = step.parameter {
            cache.set_parameter(parameter);
        }
        if let Some(pin) = &step.pin_time {
            let pinned: TimeOfDay = pin
                .parse()
                .with_context(|| format!("schedule step {tick}: bad pin_time"))?;
            cache.set_time(pinned);
        }
        match (step.latitude, step.longitude) {
            (Some(latitude), Some(longitude)) => {
                cache.set_view_center(GeoPoint::new(latitude, longitude), radius_m);
            }
            (None, None) => {}
            _ => bail!("schedule step {tick}: latitude and longitude must be set together"),
        }

        let loads_before = store.load_count();
        let was_dirty = cache.is_dirty();
        cache.reload(at, &NoOperation);

        info!(
            tick,
            at = %at,
            parameter = cache.parameter(),
            name = %cache.map_name(),
            dirty = was_dirty,
            fetched = store.load_count() - loads_before,
            resident = cache.map().is_some(),
            "reload tick"
        );
    }

    println!(
        "{} reload ticks, {} store fetches",
        config.schedule.len(),
        store.load_count()
    );
    Ok(())
}

/// Builds the in-memory store from the configured catalog.
fn build_store(config: &StoreConfig) -> Result<SyntheticStore> {
    let mut store = SyntheticStore::new();
    for parameter in &config.parameters {
        if parameter.id == 0 {
            bail!("parameter id 0 is reserved for terrain");
        }

        let mut slices = Vec::with_capacity(parameter.times.len());
        for time in &parameter.times {
            let t: TimeOfDay = time
                .parse()
                .with_context(|| format!("parameter {}: bad slice time '{time}'", parameter.id))?;
            slices.push(t.second_of_day());
        }

        store = store
            .with_parameter(parameter.id, &parameter.name, &slices)
            .with_coverage_radius(parameter.id, parameter.coverage_km * 1_000.0);
        if let Some(reason) = &parameter.fail {
            store = store.with_failure(parameter.id, reason);
        }
    }
    Ok(store)
}
