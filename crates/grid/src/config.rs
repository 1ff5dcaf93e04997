//! Configuration for neighborhood resolution.

use crate::error::GridError;

/// Configuration for a neighborhood query.
///
/// The localization radius is measured in grid cells along the latitude and
/// longitude axes (Chebyshev distance). The wrap flags control boundary
/// handling per axis: with wrapping enabled the axis is treated as cyclic
/// (a global grid), with it disabled the neighborhood is clamped at the edge.
///
/// # Example
///
/// ```
/// use boreas_grid::NeighborhoodConfig;
///
/// let config = NeighborhoodConfig::new(2).with_x_wrap(false);
///
/// assert_eq!(config.radius(), 2);
/// assert!(!config.x_wrap());
/// assert!(config.y_wrap());
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NeighborhoodConfig {
    /// Localization radius in grid cells.
    radius: usize,
    /// Whether the longitude axis wraps around.
    x_wrap: bool,
    /// Whether the latitude axis wraps around.
    y_wrap: bool,
}

impl NeighborhoodConfig {
    /// Creates a new configuration with the given radius.
    ///
    /// Both axes wrap by default, matching a global cyclic grid.
    pub fn new(radius: usize) -> Self {
        Self {
            radius,
            x_wrap: true,
            y_wrap: true,
        }
    }

    /// Sets whether the longitude axis wraps around.
    pub fn with_x_wrap(mut self, x_wrap: bool) -> Self {
        self.x_wrap = x_wrap;
        self
    }

    /// Sets whether the latitude axis wraps around.
    pub fn with_y_wrap(mut self, y_wrap: bool) -> Self {
        self.y_wrap = y_wrap;
        self
    }

    /// Returns the localization radius.
    pub fn radius(&self) -> usize {
        self.radius
    }

    /// Returns whether the longitude axis wraps around.
    pub fn x_wrap(&self) -> bool {
        self.x_wrap
    }

    /// Returns whether the latitude axis wraps around.
    pub fn y_wrap(&self) -> bool {
        self.y_wrap
    }

    /// Validates this configuration.
    ///
    /// Returns an error if the radius is zero.
    pub fn validate(&self) -> Result<(), GridError> {
        if self.radius < 1 {
            return Err(GridError::InvalidRadius {
                radius: self.radius,
            });
        }
        Ok(())
    }
}

impl Default for NeighborhoodConfig {
    fn default() -> Self {
        Self::new(1)
    }
}
