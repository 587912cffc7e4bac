// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Boundary constants and the sizing rules derived from them.

use crate::TileGridError;

/// Default lower bound for the grid column count.
pub const DEFAULT_MIN_GRID_COLUMNS: u32 = 4;
/// Default upper bound for the grid column count.
pub const DEFAULT_MAX_GRID_COLUMNS: u32 = 8;
/// Default number of base cells stacked across the viewport height.
pub const DEFAULT_ROWS_PER_VIEWPORT: u32 = 4;
/// Default floor for the base cell size.
pub const DEFAULT_MIN_CELL_SIZE: f64 = 80.0;
/// Default floor for the dynamic gap.
pub const DEFAULT_MIN_GAP: f64 = 8.0;
/// Default gap assumed while estimating the grid column count.
pub const DEFAULT_REFERENCE_GAP: f64 = 16.0;

/// Constants that drive grid geometry.
///
/// All values are in the same linear unit as the viewport (typically logical
/// pixels). The defaults give 4 to 8 grid columns, a viewport that is 4 base
/// cells tall, and usable floors for very small viewports.
///
/// ```rust
/// use understory_tile_grid::GridConfig;
///
/// let config = GridConfig::default().with_min_gap(4.0);
/// assert!(config.validate().is_ok());
///
/// // 1280x720: cells are 180 tall, and 6 of them fit across.
/// let cell = config.cell_size(720.0);
/// assert_eq!(cell, 180.0);
/// assert_eq!(config.grid_column_count(1280.0, cell), 6);
/// ```
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct GridConfig {
    /// Smallest grid column count, inclusive.
    pub min_grid_columns: u32,
    /// Largest grid column count, inclusive.
    pub max_grid_columns: u32,
    /// How many base cells fill the viewport height.
    pub rows_per_viewport: u32,
    /// Floor for the base cell size.
    pub min_cell_size: f64,
    /// Floor for the dynamic gap.
    pub min_gap: f64,
    /// Gap used only to estimate the grid column count.
    pub reference_gap: f64,
}

impl Default for GridConfig {
    fn default() -> Self {
        Self {
            min_grid_columns: DEFAULT_MIN_GRID_COLUMNS,
            max_grid_columns: DEFAULT_MAX_GRID_COLUMNS,
            rows_per_viewport: DEFAULT_ROWS_PER_VIEWPORT,
            min_cell_size: DEFAULT_MIN_CELL_SIZE,
            min_gap: DEFAULT_MIN_GAP,
            reference_gap: DEFAULT_REFERENCE_GAP,
        }
    }
}

impl GridConfig {
    /// Creates a config with the default constants.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the inclusive range of grid column counts.
    #[must_use]
    pub fn with_grid_columns(mut self, min: u32, max: u32) -> Self {
        self.min_grid_columns = min;
        self.max_grid_columns = max;
        self
    }

    /// Sets how many base cells fill the viewport height.
    #[must_use]
    pub fn with_rows_per_viewport(mut self, rows: u32) -> Self {
        self.rows_per_viewport = rows;
        self
    }

    /// Sets the floor for the base cell size.
    #[must_use]
    pub fn with_min_cell_size(mut self, size: f64) -> Self {
        self.min_cell_size = size;
        self
    }

    /// Sets the floor for the dynamic gap.
    #[must_use]
    pub fn with_min_gap(mut self, gap: f64) -> Self {
        self.min_gap = gap;
        self
    }

    /// Sets the gap used to estimate the grid column count.
    #[must_use]
    pub fn with_reference_gap(mut self, gap: f64) -> Self {
        self.reference_gap = gap;
        self
    }

    /// Checks that every constant is usable.
    ///
    /// The sizing methods below assume a valid config; hosts that build a
    /// config from external input should call this first.
    pub fn validate(&self) -> Result<(), TileGridError> {
        if self.min_grid_columns == 0 {
            return Err(TileGridError::InvalidConfig(
                "min_grid_columns must be at least 1",
            ));
        }
        if self.min_grid_columns > self.max_grid_columns {
            return Err(TileGridError::InvalidConfig(
                "min_grid_columns must not exceed max_grid_columns",
            ));
        }
        if self.rows_per_viewport == 0 {
            return Err(TileGridError::InvalidConfig(
                "rows_per_viewport must be at least 1",
            ));
        }
        if !self.min_cell_size.is_finite() || self.min_cell_size <= 0.0 {
            return Err(TileGridError::InvalidConfig(
                "min_cell_size must be finite and positive",
            ));
        }
        if !self.min_gap.is_finite() || self.min_gap < 0.0 {
            return Err(TileGridError::InvalidConfig(
                "min_gap must be finite and non-negative",
            ));
        }
        if !self.reference_gap.is_finite() || self.reference_gap < 0.0 {
            return Err(TileGridError::InvalidConfig(
                "reference_gap must be finite and non-negative",
            ));
        }
        Ok(())
    }

    /// Returns the base cell edge length for a viewport height.
    ///
    /// This is `viewport_height / rows_per_viewport`, floored at
    /// [`min_cell_size`](Self::min_cell_size).
    #[must_use]
    pub fn cell_size(&self, viewport_height: f64) -> f64 {
        debug_assert!(
            viewport_height.is_finite() && viewport_height >= 0.0,
            "viewport height must be finite and non-negative, got {viewport_height}"
        );
        (viewport_height / f64::from(self.rows_per_viewport)).max(self.min_cell_size)
    }

    /// Returns how many grid columns fit across `viewport_width`.
    ///
    /// The estimate assumes [`reference_gap`](Self::reference_gap) between
    /// cells and is clamped to `[min_grid_columns, max_grid_columns]`.
    #[must_use]
    pub fn grid_column_count(&self, viewport_width: f64, cell_size: f64) -> u32 {
        debug_assert!(
            viewport_width.is_finite() && viewport_width >= 0.0,
            "viewport width must be finite and non-negative, got {viewport_width}"
        );
        let theoretical =
            libm::floor((viewport_width + self.reference_gap) / (cell_size + self.reference_gap));
        let clamped = theoretical.clamp(
            f64::from(self.min_grid_columns),
            f64::from(self.max_grid_columns),
        );
        #[expect(
            clippy::cast_possible_truncation,
            reason = "Value is integral and clamped into the u32 column range"
        )]
        {
            clamped as u32
        }
    }

    /// Returns the gap that makes `grid_column_count` cells exactly fill
    /// `viewport_width`, with one gap at each edge and one between cells.
    ///
    /// The result is floored at [`min_gap`](Self::min_gap), in which case
    /// the grid overflows the viewport.
    #[must_use]
    pub fn dynamic_gap(&self, viewport_width: f64, grid_column_count: u32, cell_size: f64) -> f64 {
        let columns = f64::from(grid_column_count);
        let total_gap_space = viewport_width - columns * cell_size;
        (total_gap_space / (columns + 1.0)).max(self.min_gap)
    }
}

#[cfg(test)]
mod tests {
    use super::GridConfig;
    use crate::TileGridError;

    #[test]
    fn cell_size_tracks_height_above_floor() {
        let config = GridConfig::default();
        assert_eq!(config.cell_size(800.0), 200.0);
        // 100 / 4 = 25 is below the floor.
        assert_eq!(config.cell_size(100.0), config.min_cell_size);
        assert_eq!(config.cell_size(0.0), config.min_cell_size);
    }

    #[test]
    fn grid_column_count_is_clamped_both_ways() {
        let config = GridConfig::default();
        assert_eq!(config.grid_column_count(10.0, 200.0), 4);
        assert_eq!(config.grid_column_count(100_000.0, 80.0), 8);
        // (1000 + 16) / (150 + 16) = 6.12
        assert_eq!(config.grid_column_count(1000.0, 150.0), 6);
    }

    #[test]
    fn dynamic_gap_fills_width_exactly() {
        let config = GridConfig::default();
        let gap = config.dynamic_gap(1000.0, 6, 150.0);
        // 1000 - 900 = 100 spread over 7 slots.
        assert!((gap - 100.0 / 7.0).abs() < 1e-9);
        let filled = 6.0 * 150.0 + 7.0 * gap;
        assert!((filled - 1000.0).abs() < 1e-9);
    }

    #[test]
    fn dynamic_gap_respects_floor() {
        let config = GridConfig::default();
        // Cells alone overflow the width; the raw gap would be negative.
        assert_eq!(config.dynamic_gap(300.0, 4, 100.0), config.min_gap);
    }

    #[test]
    fn validate_rejects_bad_constants() {
        assert_eq!(GridConfig::default().validate(), Ok(()));
        assert!(matches!(
            GridConfig::default().with_grid_columns(0, 8).validate(),
            Err(TileGridError::InvalidConfig(_))
        ));
        assert!(matches!(
            GridConfig::default().with_grid_columns(9, 8).validate(),
            Err(TileGridError::InvalidConfig(_))
        ));
        assert!(matches!(
            GridConfig::default().with_rows_per_viewport(0).validate(),
            Err(TileGridError::InvalidConfig(_))
        ));
        assert!(matches!(
            GridConfig::default().with_min_cell_size(0.0).validate(),
            Err(TileGridError::InvalidConfig(_))
        ));
        assert!(matches!(
            GridConfig::default().with_min_gap(f64::NAN).validate(),
            Err(TileGridError::InvalidConfig(_))
        ));
        assert!(matches!(
            GridConfig::default().with_reference_gap(-1.0).validate(),
            Err(TileGridError::InvalidConfig(_))
        ));
    }
}
