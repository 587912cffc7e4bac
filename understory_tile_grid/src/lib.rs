// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=understory_tile_grid --heading-base-level=0

//! Understory Tile Grid: adaptive grid geometry and column packing for tiles.
//!
//! This crate lays out a list of rectangular tiles, each sized in whole grid
//! units, into a fixed-height viewport that scrolls horizontally. It has two
//! parts:
//!
//! - **Grid geometry.** From the viewport size, [`GridConfig`] derives a square
//!   base cell (sized from the viewport *height*), the number of grid columns
//!   that fit across (clamped to a range, 4 to 8 by default), and a dynamic gap
//!   that makes those columns exactly fill the width. [`GridGeometry`] bundles
//!   the results and [`span_extent`] converts grid spans into pixel extents.
//! - **Column packing.** [`pack_columns`] stacks tiles top to bottom into
//!   *packed columns* no taller than the viewport, starting a new column when
//!   the next tile would not fit. Order is preserved and no tile is dropped; a
//!   tile taller than the viewport gets a column to itself.
//!
//! The *grid column count* (display density) and the number of *packed
//! columns* a layout produces are unrelated quantities and are named apart
//! throughout the API.
//!
//! The crate does **not** render anything. Hosts are responsible for:
//!
//! - Measuring the viewport and calling [`TileGrid::set_viewport`] (or
//!   [`GridGeometry::compute`]) when it changes.
//! - Supplying tiles: anything implementing [`GridTile`], for example a
//!   [`Tile`] carrying a widget id as payload.
//! - Painting each [`PackedColumn`] as a vertical stack and scrolling the row
//!   of columns, optionally using [`TileLayout::placements`] and
//!   [`TileLayout::content_width`].
//!
//! ## Minimal example
//!
//! ```rust
//! use understory_tile_grid::{GridConfig, GridGeometry, Tile, TileSpan, Viewport};
//!
//! let geometry = GridGeometry::compute(Viewport::new(1280.0, 720.0), &GridConfig::default());
//! assert_eq!(geometry.cell_size(), 180.0);
//!
//! let tiles = [
//!     Tile::new(TileSpan::new(2, 2), "clock"),
//!     Tile::new(TileSpan::new(1, 1), "weather"),
//!     Tile::new(TileSpan::new(2, 1), "news"),
//! ];
//! let layout = geometry.pack(tiles);
//!
//! for (index, column) in layout.columns().iter().enumerate() {
//!     let width = layout.column_width(index).unwrap_or_default();
//!     for tile in column.tiles() {
//!         // Paint `tile.payload` inside a column `width` wide.
//!         let _ = (width, geometry.tile_size(tile.span));
//!     }
//! }
//! ```
//!
//! Every layout pass is a pure function of the viewport, config, and tile
//! list; nothing is carried between passes.
//!
//! Diagnostics are emitted through `tracing` at `debug` and `trace` level.
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod config;
mod error;
mod geometry;
mod grid;
mod layout;
mod packing;
mod tile;
mod viewport;

pub use config::{
    DEFAULT_MAX_GRID_COLUMNS, DEFAULT_MIN_CELL_SIZE, DEFAULT_MIN_GAP, DEFAULT_MIN_GRID_COLUMNS,
    DEFAULT_REFERENCE_GAP, DEFAULT_ROWS_PER_VIEWPORT, GridConfig,
};
pub use error::TileGridError;
pub use geometry::{GridGeometry, span_extent};
pub use grid::TileGrid;
pub use layout::{TileLayout, TilePlacement};
pub use packing::{ColumnPacker, PackedColumn, pack_columns};
pub use tile::{GridTile, Tile, TileSpan};
pub use viewport::Viewport;
