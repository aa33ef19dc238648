//! In-memory store and layers for tests and simulations.
//!
//! No decoding happens here: layers are stamped with the view they were
//! loaded for and judge coverage by great-circle distance. The store counts
//! loads, honours cancellation, and can be told to fail a parameter, which
//! is everything the cache's behaviour depends on.

use std::cell::Cell;
use std::collections::BTreeMap;

use crate::error::StoreError;
use crate::geo::GeoPoint;
use crate::layer::RasterLayer;
use crate::operation::Operation;
use crate::store::RasterStore;

/// Default coverage radius of a synthetic layer, metres.
const DEFAULT_COVERAGE_M: f64 = 150_000.0;

struct ParameterSpec {
    name: String,
    slices: Vec<u32>,
    coverage_radius_m: f64,
    fail_reason: Option<String>,
}

/// A synthetic layer covering a fixed disc around the center it was loaded
/// for. Loaded without a view, it covers everywhere.
#[derive(Debug)]
pub struct SyntheticLayer {
    loaded_center: Option<GeoPoint>,
    coverage_radius_m: f64,
}

impl RasterLayer for SyntheticLayer {
    fn is_dirty(&self, center: GeoPoint, radius_m: f64) -> bool {
        match self.loaded_center {
            Some(loaded) => loaded.distance_to(center) + radius_m > self.coverage_radius_m,
            None => false,
        }
    }
}

/// An in-memory [`RasterStore`] with a configurable parameter catalog.
///
/// # Example
///
/// ```
/// use boreas_raster::SyntheticStore;
///
/// let store = SyntheticStore::new()
///     .with_parameter(1, "thermal updraft velocity", &[21_600, 43_200])
///     .with_parameter(2, "boundary layer depth", &[43_200]);
/// assert_eq!(store.load_count(), 0);
/// ```
#[derive(Default)]
pub struct SyntheticStore {
    parameters: BTreeMap<u32, ParameterSpec>,
    loads: Cell<usize>,
}

impl SyntheticStore {
    /// Creates an empty store with no parameters.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a parameter with the given published slices (seconds since
    /// local midnight) and the default coverage radius.
    pub fn with_parameter(mut self, id: u32, name: &str, slices: &[u32]) -> Self {
        self.parameters.insert(
            id,
            ParameterSpec {
                name: name.to_string(),
                slices: slices.to_vec(),
                coverage_radius_m: DEFAULT_COVERAGE_M,
                fail_reason: None,
            },
        );
        self
    }

    /// Overrides the coverage radius of layers loaded for a parameter.
    ///
    /// # Panics
    ///
    /// Panics if the parameter was not added first.
    pub fn with_coverage_radius(mut self, id: u32, radius_m: f64) -> Self {
        self.parameters
            .get_mut(&id)
            .expect("parameter must be added before configuring it")
            .coverage_radius_m = radius_m;
        self
    }

    /// Makes every load of a parameter fail with the given reason.
    ///
    /// # Panics
    ///
    /// Panics if the parameter was not added first.
    pub fn with_failure(mut self, id: u32, reason: &str) -> Self {
        self.parameters
            .get_mut(&id)
            .expect("parameter must be added before configuring it")
            .fail_reason = Some(reason.to_string());
        self
    }

    /// How many times `load_layer` has been invoked, successful or not.
    pub fn load_count(&self) -> usize {
        self.loads.get()
    }
}

impl RasterStore for SyntheticStore {
    fn layer_name(&self, parameter: u32) -> Option<String> {
        self.parameters.get(&parameter).map(|p| p.name.clone())
    }

    fn time_slices(&self, parameter: u32) -> Vec<u32> {
        self.parameters
            .get(&parameter)
            .map(|p| p.slices.clone())
            .unwrap_or_default()
    }

    fn load_layer(
        &self,
        parameter: u32,
        slice: u32,
        center: Option<GeoPoint>,
        _radius_m: f64,
        operation: &dyn Operation,
    ) -> Result<Box<dyn RasterLayer>, StoreError> {
        self.loads.set(self.loads.get() + 1);

        if operation.is_cancelled() {
            return Err(StoreError::Cancelled);
        }

        let spec = self
            .parameters
            .get(&parameter)
            .ok_or(StoreError::UnknownParameter { parameter })?;

        if let Some(reason) = &spec.fail_reason {
            return Err(StoreError::Load {
                reason: reason.clone(),
            });
        }
        if !spec.slices.contains(&slice) {
            return Err(StoreError::NoSlice {
                parameter,
                requested: slice,
            });
        }

        operation.progress(1.0);
        Ok(Box::new(SyntheticLayer {
            loaded_center: center,
            coverage_radius_m: spec.coverage_radius_m,
        }))
    }
}
