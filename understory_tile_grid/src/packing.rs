// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Vertical-priority column packing.
//!
//! Tiles are stacked top to bottom in the current column until the next tile
//! would push the column past its height budget; that tile then opens a new
//! column. Input order is preserved within and across columns, and no tile is
//! ever dropped, split, or rejected.
//!
//! A tile that is taller than the budget on its own still gets placed: it
//! lands alone in a fresh column that overflows the budget.

use alloc::vec::Vec;

use crate::{GridTile, span_extent};

/// A sealed column of stacked tiles.
///
/// Columns are only produced by [`ColumnPacker`] and are never empty.
#[derive(Clone, Debug, PartialEq)]
pub struct PackedColumn<T> {
    tiles: Vec<T>,
    accumulated_height: f64,
    max_span_columns: u32,
}

impl<T> PackedColumn<T> {
    /// Tiles in top-to-bottom order.
    #[must_use]
    pub fn tiles(&self) -> &[T] {
        &self.tiles
    }

    /// Number of tiles in the column.
    #[must_use]
    pub fn len(&self) -> usize {
        self.tiles.len()
    }

    /// Always `false` for columns produced by packing.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.tiles.is_empty()
    }

    /// Sum of the tile heights plus one gap between consecutive tiles.
    #[must_use]
    pub fn accumulated_height(&self) -> f64 {
        self.accumulated_height
    }

    /// Widest column span among the tiles in this column.
    #[must_use]
    pub fn max_span_columns(&self) -> u32 {
        self.max_span_columns
    }

    /// Rendered width of the whole column.
    ///
    /// Every tile in the column is laid out inside this width, including tiles
    /// that were placed before a wider tile joined.
    #[must_use]
    pub fn width(&self, cell_size: f64, gap: f64) -> f64 {
        span_extent(cell_size, self.max_span_columns, gap)
    }

    /// Consumes the column, returning its tiles.
    #[must_use]
    pub fn into_tiles(self) -> Vec<T> {
        self.tiles
    }
}

/// The open column accumulator behind [`pack_columns`].
///
/// Feed tiles in order with [`push`](Self::push) and collect the columns it
/// seals; call [`finish`](Self::finish) to seal the last one.
///
/// ```rust
/// use understory_tile_grid::{ColumnPacker, TileSpan};
///
/// let mut packer = ColumnPacker::new(100.0, 10.0, 220.0);
/// assert!(packer.push(TileSpan::UNIT).is_none());
/// assert!(packer.push(TileSpan::UNIT).is_none());
///
/// // The third tile does not fit, so the first column is sealed.
/// let first = packer.push(TileSpan::UNIT).unwrap();
/// assert_eq!(first.len(), 2);
///
/// let last = packer.finish().unwrap();
/// assert_eq!(last.len(), 1);
/// ```
#[derive(Debug)]
pub struct ColumnPacker<T> {
    cell_size: f64,
    gap: f64,
    max_column_height: f64,
    sealed: usize,
    current: PackedColumn<T>,
}

impl<T: GridTile> ColumnPacker<T> {
    /// Creates a packer with an empty open column.
    #[must_use]
    pub fn new(cell_size: f64, gap: f64, max_column_height: f64) -> Self {
        Self {
            cell_size,
            gap,
            max_column_height,
            sealed: 0,
            current: Self::empty_column(),
        }
    }

    /// Number of columns sealed so far.
    #[must_use]
    pub fn sealed_count(&self) -> usize {
        self.sealed
    }

    /// Places `tile`, returning the previous column if the tile started a new one.
    pub fn push(&mut self, tile: T) -> Option<PackedColumn<T>> {
        let span = tile.span();
        let tile_height = span_extent(self.cell_size, span.rows(), self.gap);

        let sealed = if !self.current.tiles.is_empty()
            && self.current.accumulated_height + tile_height + self.gap > self.max_column_height
        {
            Some(self.seal())
        } else {
            None
        };

        // No gap above the first tile of a column.
        let increment = if self.current.tiles.is_empty() {
            if tile_height > self.max_column_height {
                tracing::debug!(
                    tile_height,
                    max_column_height = self.max_column_height,
                    "oversized tile placed alone in its own column"
                );
            }
            tile_height
        } else {
            tile_height + self.gap
        };
        self.append(tile, increment, span.columns());
        sealed
    }

    /// Seals the open column, if it holds any tiles.
    pub fn finish(mut self) -> Option<PackedColumn<T>> {
        if self.current.tiles.is_empty() {
            None
        } else {
            Some(self.seal())
        }
    }

    fn append(&mut self, tile: T, increment: f64, span_columns: u32) {
        self.current.tiles.push(tile);
        self.current.accumulated_height += increment;
        self.current.max_span_columns = self.current.max_span_columns.max(span_columns);
    }

    fn seal(&mut self) -> PackedColumn<T> {
        let column = core::mem::replace(&mut self.current, Self::empty_column());
        tracing::trace!(
            index = self.sealed,
            tiles = column.tiles.len(),
            height = column.accumulated_height,
            span_columns = column.max_span_columns,
            "sealed packed column"
        );
        self.sealed += 1;
        column
    }

    fn empty_column() -> PackedColumn<T> {
        PackedColumn {
            tiles: Vec::new(),
            accumulated_height: 0.0,
            max_span_columns: 0,
        }
    }
}

/// Packs `tiles` into columns no taller than `max_column_height`.
///
/// Concatenating the returned columns' tiles reproduces the input sequence.
/// An empty input yields no columns.
///
/// ```rust
/// use understory_tile_grid::{TileSpan, pack_columns};
///
/// let tiles = [TileSpan::UNIT; 3];
/// let columns = pack_columns(tiles, 100.0, 10.0, 220.0);
///
/// assert_eq!(columns.len(), 2);
/// assert_eq!(columns[0].accumulated_height(), 210.0);
/// assert_eq!(columns[1].accumulated_height(), 100.0);
/// ```
pub fn pack_columns<T, I>(
    tiles: I,
    cell_size: f64,
    gap: f64,
    max_column_height: f64,
) -> Vec<PackedColumn<T>>
where
    T: GridTile,
    I: IntoIterator<Item = T>,
{
    let mut packer = ColumnPacker::new(cell_size, gap, max_column_height);
    let mut columns = Vec::new();
    let mut tile_count = 0_usize;
    for tile in tiles {
        tile_count += 1;
        if let Some(sealed) = packer.push(tile) {
            columns.push(sealed);
        }
    }
    columns.extend(packer.finish());
    tracing::debug!(
        tiles = tile_count,
        columns = columns.len(),
        "packed tiles into columns"
    );
    columns
}
