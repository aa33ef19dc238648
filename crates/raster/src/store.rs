//! The layer-source boundary consumed by the cache.

use crate::error::StoreError;
use crate::geo::GeoPoint;
use crate::layer::RasterLayer;
use crate::operation::Operation;

/// A catalog of time-stamped raster layers plus the logic to decode them.
///
/// The store is the sole authority on which `(parameter, time_slice)`
/// combinations exist. Parameter 0 is terrain-only by convention and is
/// never passed to a store: the cache resolves it to "no weather layer"
/// without any store access.
pub trait RasterStore {
    /// Human-readable name of a weather parameter, or `None` if the store
    /// has no such parameter.
    fn layer_name(&self, parameter: u32) -> Option<String>;

    /// The time slices published for a parameter, as seconds since local
    /// midnight. Weather-model output exists only at these points.
    fn time_slices(&self, parameter: u32) -> Vec<u32>;

    /// Decodes and returns the layer for one `(parameter, slice)`, scoped
    /// to the given view if one is set.
    ///
    /// Long fetches must poll `operation` at safe points and return
    /// [`StoreError::Cancelled`] promptly when it is signalled.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError`] on unknown parameters, missing slices,
    /// cancellation, or decode failure.
    fn load_layer(
        &self,
        parameter: u32,
        slice: u32,
        center: Option<GeoPoint>,
        radius_m: f64,
        operation: &dyn Operation,
    ) -> Result<Box<dyn RasterLayer>, StoreError>;
}
