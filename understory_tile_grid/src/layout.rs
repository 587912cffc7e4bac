// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use alloc::vec::Vec;

use kurbo::{Point, Rect};

use crate::{GridGeometry, GridTile, PackedColumn};

/// The result of one layout pass: packed columns read left to right.
///
/// Hosts render each column as a vertical stack and place the columns side by
/// side in a horizontally scrolling row. [`TileLayout::placements`] computes
/// those positions for hosts that want them precomputed.
#[derive(Clone, Debug, PartialEq)]
pub struct TileLayout<T> {
    geometry: GridGeometry,
    columns: Vec<PackedColumn<T>>,
}

/// Where one tile lands in the scrollable content.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TilePlacement {
    /// Index of the packed column holding the tile.
    pub column: usize,
    /// Position of the tile within its column, top to bottom.
    pub index: usize,
    /// Tile bounds in content coordinates.
    ///
    /// The width is the tile's own span width; the column itself may be wider.
    pub rect: Rect,
}

impl<T> TileLayout<T> {
    pub(crate) fn new(geometry: GridGeometry, columns: Vec<PackedColumn<T>>) -> Self {
        Self { geometry, columns }
    }

    /// Geometry used for this pass.
    #[must_use]
    pub fn geometry(&self) -> &GridGeometry {
        &self.geometry
    }

    /// Packed columns, left to right.
    #[must_use]
    pub fn columns(&self) -> &[PackedColumn<T>] {
        &self.columns
    }

    /// Number of packed columns.
    #[must_use]
    pub fn len(&self) -> usize {
        self.columns.len()
    }

    /// Returns `true` if no tiles were laid out.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }

    /// All tiles in global order: columns left to right, each top to bottom.
    pub fn tiles(&self) -> impl Iterator<Item = &T> + '_ {
        self.columns.iter().flat_map(|column| column.tiles().iter())
    }

    /// Consumes the layout, returning every tile in global order.
    #[must_use]
    pub fn into_tiles(self) -> Vec<T> {
        self.columns
            .into_iter()
            .flat_map(PackedColumn::into_tiles)
            .collect()
    }

    /// Rendered width of the packed column at `index`, or `None` if there is
    /// no such column.
    #[must_use]
    pub fn column_width(&self, index: usize) -> Option<f64> {
        self.columns
            .get(index)
            .map(|column| column.width(self.geometry.cell_size(), self.geometry.gap()))
    }

    /// Total horizontal extent of the content.
    ///
    /// Columns are separated by one gap and inset by one gap at either end.
    /// This is the extent a horizontal scroll container should expose.
    #[must_use]
    pub fn content_width(&self) -> f64 {
        if self.columns.is_empty() {
            return 0.0;
        }
        let gap = self.geometry.gap();
        self.columns
            .iter()
            .map(|column| column.width(self.geometry.cell_size(), gap) + gap)
            .sum::<f64>()
            + gap
    }
}

impl<T: GridTile> TileLayout<T> {
    /// Computes a placement for every tile, in global order.
    ///
    /// ```rust
    /// use understory_tile_grid::{GridGeometry, TileSpan};
    ///
    /// let geometry = GridGeometry::from_parts(100.0, 10.0, 4, 220.0);
    /// let layout = geometry.pack([TileSpan::UNIT; 3]);
    ///
    /// let origins: Vec<(f64, f64)> = layout
    ///     .placements()
    ///     .map(|p| (p.rect.x0, p.rect.y0))
    ///     .collect();
    /// assert_eq!(origins, [(10.0, 0.0), (10.0, 110.0), (120.0, 0.0)]);
    /// ```
    pub fn placements(&self) -> impl Iterator<Item = TilePlacement> + '_ {
        let geometry = self.geometry;
        let gap = geometry.gap();
        let mut column_x = gap;
        self.columns
            .iter()
            .enumerate()
            .flat_map(move |(column_index, column)| {
                let x = column_x;
                column_x += column.width(geometry.cell_size(), gap) + gap;
                let mut y = 0.0;
                column
                    .tiles()
                    .iter()
                    .enumerate()
                    .map(move |(index, tile)| {
                        let size = geometry.tile_size(tile.span());
                        let rect = Rect::from_origin_size(Point::new(x, y), size);
                        y += size.height + gap;
                        TilePlacement {
                            column: column_index,
                            index,
                            rect,
                        }
                    })
            })
    }
}
