//! The decoded-layer boundary consumed by the cache.

use crate::geo::GeoPoint;

/// A decoded raster layer: one grid of terrain or weather-model values for
/// one parameter and one time slice.
///
/// Decoding and geospatial lookup live behind this trait in the store's
/// implementation; the cache only needs the layer's own judgment of whether
/// it still covers the view, plus ownership. A layer is released by
/// dropping its box, on every exit path.
pub trait RasterLayer: std::fmt::Debug {
    /// Whether this layer no longer adequately covers a view centred at
    /// `center` with the given radius of interest in metres.
    fn is_dirty(&self, center: GeoPoint, radius_m: f64) -> bool;
}
