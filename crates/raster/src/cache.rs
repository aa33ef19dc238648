//! Single-slot cache for the active weather raster layer.

use tracing::{debug, info, warn};

use boreas_time::TimeOfDay;

use crate::geo::GeoPoint;
use crate::layer::RasterLayer;
use crate::operation::Operation;
use crate::store::RasterStore;

/// The parameter id that selects plain terrain shading, with no weather
/// overlay and no store access.
pub const TERRAIN_PARAMETER: u32 = 0;

/// Owns at most one decoded raster layer, selected by weather parameter and
/// time slice, on behalf of one map view.
///
/// `parameter` and `weather_time` record the *desired* selection;
/// `last_parameter` and `last_weather_time` record what is actually loaded.
/// They diverge between a selection change and the next [`reload`], whose
/// job is to reconcile them. A `weather_time` of 0 means automatic: follow
/// the local time handed to each reload.
///
/// The cache is not internally synchronized. It is built for one logical
/// owner (the recalculation loop) that serializes all calls; a layer
/// reference from [`map`] is only good until the next `reload` or
/// [`close`].
///
/// [`reload`]: WeatherCache::reload
/// [`map`]: WeatherCache::map
/// [`close`]: WeatherCache::close
pub struct WeatherCache<'s> {
    store: &'s dyn RasterStore,

    center: Option<GeoPoint>,
    radius_m: f64,

    parameter: u32,
    last_parameter: u32,

    /// Requested time slice, seconds since local midnight; 0 = automatic.
    weather_time: u32,
    last_weather_time: u32,

    layer: Option<Box<dyn RasterLayer>>,
}

impl<'s> WeatherCache<'s> {
    /// Creates an empty cache bound to one store. Starts in terrain mode.
    pub fn new(store: &'s dyn RasterStore) -> Self {
        Self {
            store,
            center: None,
            radius_m: 0.0,
            parameter: TERRAIN_PARAMETER,
            last_parameter: TERRAIN_PARAMETER,
            weather_time: 0,
            last_weather_time: 0,
            layer: None,
        }
    }

    /// Records the viewer's current center and radius of interest in
    /// metres. Does not trigger a load; staleness shows up through
    /// [`is_dirty`](Self::is_dirty) and the next reload.
    pub fn set_view_center(&mut self, location: GeoPoint, radius_m: f64) {
        self.center = Some(location);
        self.radius_m = radius_m;
    }

    /// Whether the cache needs attention: no layer is resident, or the
    /// resident layer reports it no longer covers the current view.
    pub fn is_dirty(&self) -> bool {
        match (&self.layer, self.center) {
            (Some(layer), Some(center)) => layer.is_dirty(center, self.radius_m),
            (Some(_), None) => false,
            (None, _) => true,
        }
    }

    /// Switches the desired layer selection. Takes effect on the next
    /// reload; 0 selects terrain.
    pub fn set_parameter(&mut self, parameter: u32) {
        self.parameter = parameter;
    }

    /// The desired (not necessarily loaded) parameter.
    pub fn parameter(&self) -> u32 {
        self.parameter
    }

    /// Whether terrain is selected instead of a weather overlay.
    pub fn is_terrain(&self) -> bool {
        self.parameter == TERRAIN_PARAMETER
    }

    /// The requested time slice. Midnight stands for automatic.
    pub fn time(&self) -> TimeOfDay {
        TimeOfDay::from_second_of_day(self.weather_time)
    }

    /// Pins the requested time slice; reconciled lazily by the next
    /// reload. Setting midnight returns to automatic.
    pub fn set_time(&mut self, time: TimeOfDay) {
        self.weather_time = time.second_of_day();
    }

    /// The currently resident decoded layer, if any.
    pub fn map(&self) -> Option<&dyn RasterLayer> {
        self.layer.as_deref()
    }

    /// Human-readable name of the active selection: `"terrain"`, the
    /// store's name for the parameter, or `"unavailable"` when the store
    /// does not know it.
    pub fn map_name(&self) -> String {
        if self.is_terrain() {
            "terrain".to_string()
        } else {
            self.store
                .layer_name(self.parameter)
                .unwrap_or_else(|| "unavailable".to_string())
        }
    }

    /// Releases the resident layer and forgets what was loaded, so the
    /// next reload is forced to re-fetch.
    pub fn close(&mut self) {
        self.layer = None;
        self.last_parameter = TERRAIN_PARAMETER;
        self.last_weather_time = 0;
    }

    /// Reconciles the resident layer with the desired selection.
    ///
    /// `time_local` is the viewer's local time of day, used when no time
    /// slice is pinned. Terrain mode drops any resident layer and never
    /// contacts the store. Otherwise the request resolves to the latest
    /// slice the store publishes at or before the requested time; if the
    /// resolved `(parameter, slice)` is already loaded and the view is not
    /// dirty this is a no-op with no store access.
    ///
    /// Fetch failures and cancellation are non-fatal: they are logged, the
    /// cache is left with no resident layer (the previous layer is not
    /// resurrected), and the owning loop is expected to retry on its next
    /// tick.
    pub fn reload(&mut self, time_local: TimeOfDay, operation: &dyn Operation) {
        if self.is_terrain() {
            if self.layer.is_some() {
                debug!("terrain selected, dropping weather layer");
            }
            self.close();
            return;
        }

        let requested = if self.weather_time == 0 {
            time_local.second_of_day()
        } else {
            self.weather_time
        };

        let Some(slice) = self.resolve_slice(requested) else {
            warn!(
                parameter = self.parameter,
                requested, "no time slice published at or before request"
            );
            self.layer = None;
            return;
        };

        let loaded = self.layer.is_some()
            && self.parameter == self.last_parameter
            && slice == self.last_weather_time;
        if loaded && !self.is_dirty() {
            debug!(
                parameter = self.parameter,
                slice, "cache hit, keeping resident layer"
            );
            return;
        }

        // The old layer is released before the fetch; a failed fetch must
        // not leave it resurrected.
        self.layer = None;

        match self
            .store
            .load_layer(self.parameter, slice, self.center, self.radius_m, operation)
        {
            Ok(layer) => {
                info!(
                    parameter = self.parameter,
                    slice,
                    name = %self.map_name(),
                    "weather layer loaded"
                );
                self.layer = Some(layer);
                self.last_parameter = self.parameter;
                self.last_weather_time = slice;
            }
            Err(e) => {
                warn!(
                    parameter = self.parameter,
                    slice,
                    error = %e,
                    "weather layer load failed, falling back to terrain"
                );
            }
        }
    }

    /// Latest published slice at or before the requested second of day.
    /// Never a slice in the future relative to the request.
    fn resolve_slice(&self, requested: u32) -> Option<u32> {
        self.store
            .time_slices(self.parameter)
            .into_iter()
            .filter(|&slice| slice <= requested)
            .max()
    }
}
