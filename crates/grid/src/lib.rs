//! Neighborhood resolution over the 4D atmospheric state grid.
//!
//! The state is a (layer, variable, latitude, longitude) grid flattened
//! row-major into a single index space. For every point this crate resolves
//! the set of spatial neighbors within a localization radius, then restricts
//! it to the *predecessors*: neighbors that come earlier in the flattened
//! ordering and are therefore usable as regression predictors without
//! breaking the triangular structure of the downstream factorization.
//!
//! # Quick start
//!
//! ```
//! use boreas_grid::{GridShape, NeighborhoodConfig, all_predecessors};
//!
//! let shape = GridShape::new(1, 2, 4, 4).unwrap();
//! let config = NeighborhoodConfig::new(1).with_x_wrap(false).with_y_wrap(false);
//!
//! let map = all_predecessors(&shape, &config).unwrap();
//! assert_eq!(map.len(), 32);
//! assert!(map.get(0).unwrap().is_empty());
//! ```
//!
//! # Architecture
//!
//! ```text
//! point_predecessors()
//!   ├─ validate config + point
//!   ├─ compute_bounds()        (neighborhood.rs — clamp or wrap per axis)
//!   ├─ axis_indices()          (neighborhood.rs — modulo reduction, dedup)
//!   ├─ enumerate_positions()   (neighborhood.rs — lat × lon patch)
//!   └─ flatten + causal filter (predecessors.rs — keep indices < target)
//! ```

pub mod config;
pub mod error;
pub mod predecessors;
pub mod shape;

pub(crate) mod neighborhood;

pub use config::NeighborhoodConfig;
pub use error::GridError;
pub use predecessors::{PredecessorMap, all_predecessors, point_predecessors};
pub use shape::{GridPoint, GridShape};
