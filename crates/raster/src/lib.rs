//! # boreas-raster
//!
//! Single-slot, time-and-parameter-indexed cache for decoded weather raster
//! layers, selected by a moving map view.
//!
//! A store publishes weather-model fields only at discrete time slices; the
//! display needs exactly one layer — the one relevant right now — without
//! redundant decode work and without blocking on unnecessary I/O. The
//! [`WeatherCache`] mediates that: it resolves a requested local time to a
//! published slice, keeps the one decoded layer while it still matches, and
//! re-fetches only when the selection or the view makes it stale.
//!
//! # Quick start
//!
//! ```
//! use boreas_raster::{NoOperation, SyntheticStore, WeatherCache};
//! use boreas_time::TimeOfDay;
//!
//! let store = SyntheticStore::new()
//!     .with_parameter(1, "thermal updraft velocity", &[21_600, 43_200]);
//! let mut cache = WeatherCache::new(&store);
//!
//! cache.set_parameter(1);
//! cache.reload(TimeOfDay::new(13, 30, 0).unwrap(), &NoOperation);
//! assert!(cache.map().is_some());
//!
//! // Same selection, same resolved slice: no second store access.
//! cache.reload(TimeOfDay::new(13, 45, 0).unwrap(), &NoOperation);
//! assert_eq!(store.load_count(), 1);
//! ```
//!
//! # Architecture
//!
//! ```text
//! WeatherCache::reload()
//!   ├─ terrain mode?            drop layer, never touch the store
//!   ├─ resolve_slice()          latest published slice at or before request
//!   ├─ cache hit?               loaded selection matches and view not dirty
//!   └─ store.load_layer()       drop old layer first; install on success
//! ```
//!
//! The cache owns at most one layer and is meant for a single logical
//! owner; see [`WeatherCache`] for the synchronization contract.

mod cache;
mod error;
mod geo;
mod layer;
mod operation;
mod store;
mod synthetic;

pub use cache::{WeatherCache, TERRAIN_PARAMETER};
pub use error::StoreError;
pub use geo::GeoPoint;
pub use layer::RasterLayer;
pub use operation::{CancelToken, NoOperation, Operation};
pub use store::RasterStore;
pub use synthetic::{SyntheticLayer, SyntheticStore};
