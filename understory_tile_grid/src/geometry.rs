// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use kurbo::Size;

use crate::{GridConfig, GridTile, TileGridError, TileLayout, TileSpan, Viewport, pack_columns};

/// Pixel extent of a span of `span_units` grid units.
///
/// This is `cell_size * n + gap * (n - 1)`: the cells plus the gaps between
/// them, with no gap at either end. It is used for widths and heights alike.
///
/// ```rust
/// use understory_tile_grid::span_extent;
///
/// assert_eq!(span_extent(100.0, 1, 10.0), 100.0);
/// assert_eq!(span_extent(100.0, 5, 10.0), 540.0);
/// ```
#[must_use]
pub fn span_extent(cell_size: f64, span_units: u32, gap: f64) -> f64 {
    debug_assert!(span_units >= 1, "spans are at least one grid unit");
    let units = f64::from(span_units);
    cell_size * units + gap * (units - 1.0)
}

/// Geometry derived from one viewport, shared by every tile in a layout pass.
///
/// This is the explicit context threaded into packing and placement; nothing
/// in this crate reads geometry from ambient state.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GridGeometry {
    cell_size: f64,
    gap: f64,
    grid_column_count: u32,
    max_column_height: f64,
}

impl GridGeometry {
    /// Derives geometry for `viewport`.
    ///
    /// `config` is assumed to be valid; see [`GridGeometry::try_compute`].
    #[must_use]
    pub fn compute(viewport: Viewport, config: &GridConfig) -> Self {
        let cell_size = config.cell_size(viewport.height());
        let grid_column_count = config.grid_column_count(viewport.width(), cell_size);
        let gap = config.dynamic_gap(viewport.width(), grid_column_count, cell_size);
        tracing::debug!(
            width = viewport.width(),
            height = viewport.height(),
            cell_size,
            gap,
            grid_column_count,
            "derived grid geometry"
        );
        Self {
            cell_size,
            gap,
            grid_column_count,
            max_column_height: viewport.height(),
        }
    }

    /// Validates `config`, then derives geometry for `viewport`.
    pub fn try_compute(viewport: Viewport, config: &GridConfig) -> Result<Self, TileGridError> {
        config.validate()?;
        Ok(Self::compute(viewport, config))
    }

    /// Builds geometry from already known values.
    ///
    /// No clamping is applied.
    #[must_use]
    pub fn from_parts(
        cell_size: f64,
        gap: f64,
        grid_column_count: u32,
        max_column_height: f64,
    ) -> Self {
        Self {
            cell_size,
            gap,
            grid_column_count,
            max_column_height,
        }
    }

    /// Edge length of one grid unit.
    #[must_use]
    pub fn cell_size(&self) -> f64 {
        self.cell_size
    }

    /// Spacing between cells, between tiles, and at the viewport edges.
    #[must_use]
    pub fn gap(&self) -> f64 {
        self.gap
    }

    /// Number of grid columns that fit across the viewport.
    ///
    /// This is a display density, unrelated to how many packed columns a
    /// layout produces.
    #[must_use]
    pub fn grid_column_count(&self) -> u32 {
        self.grid_column_count
    }

    /// Height budget of one packed column.
    #[must_use]
    pub fn max_column_height(&self) -> f64 {
        self.max_column_height
    }

    /// Pixel width of `columns` grid units.
    #[must_use]
    pub fn span_width(&self, columns: u32) -> f64 {
        span_extent(self.cell_size, columns, self.gap)
    }

    /// Pixel height of `rows` grid units.
    #[must_use]
    pub fn span_height(&self, rows: u32) -> f64 {
        span_extent(self.cell_size, rows, self.gap)
    }

    /// Pixel size of a tile with the given span.
    #[must_use]
    pub fn tile_size(&self, span: TileSpan) -> Size {
        Size::new(self.span_width(span.columns()), self.span_height(span.rows()))
    }

    /// Packs `tiles` into columns using this geometry.
    pub fn pack<T, I>(&self, tiles: I) -> TileLayout<T>
    where
        T: GridTile,
        I: IntoIterator<Item = T>,
    {
        let columns = pack_columns(tiles, self.cell_size, self.gap, self.max_column_height);
        TileLayout::new(*self, columns)
    }
}

#[cfg(test)]
mod tests {
    use kurbo::Size;

    use super::{GridGeometry, span_extent};
    use crate::{GridConfig, TileGridError, TileSpan, Viewport};

    #[test]
    fn span_extent_counts_inner_gaps_only() {
        assert_eq!(span_extent(100.0, 1, 10.0), 100.0);
        assert_eq!(span_extent(100.0, 2, 10.0), 210.0);
        assert_eq!(span_extent(50.0, 3, 0.0), 150.0);
    }

    #[test]
    fn compute_derives_consistent_values() {
        let config = GridConfig::default();
        let geometry = GridGeometry::compute(Viewport::new(1000.0, 600.0), &config);

        assert_eq!(geometry.cell_size(), 150.0);
        assert_eq!(geometry.grid_column_count(), 6);
        assert_eq!(geometry.max_column_height(), 600.0);
        let filled = 6.0 * geometry.cell_size() + 7.0 * geometry.gap();
        assert!((filled - 1000.0).abs() < 1e-9);
    }

    #[test]
    fn tile_size_uses_span_formula_on_both_axes() {
        let geometry = GridGeometry::from_parts(100.0, 10.0, 4, 220.0);
        assert_eq!(geometry.tile_size(TileSpan::new(2, 5)), Size::new(210.0, 540.0));
        assert_eq!(geometry.span_width(3), geometry.span_height(3));
    }

    #[test]
    fn try_compute_rejects_invalid_config() {
        let config = GridConfig::default().with_grid_columns(6, 2);
        assert!(matches!(
            GridGeometry::try_compute(Viewport::new(800.0, 600.0), &config),
            Err(TileGridError::InvalidConfig(_))
        ));
    }
}
