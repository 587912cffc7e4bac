// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Tile descriptors.
//!
//! The layout core only ever looks at a tile's [`TileSpan`]. Everything else
//! about a tile (its identity, the widget that paints it) is opaque and
//! travels through packing untouched.

use crate::TileGridError;

/// Size of a tile in grid units.
///
/// Both extents are at least 1.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "RawTileSpan"))]
pub struct TileSpan {
    columns: u32,
    rows: u32,
}

impl TileSpan {
    /// A single grid cell.
    pub const UNIT: Self = Self {
        columns: 1,
        rows: 1,
    };

    /// Creates a span of `columns` x `rows` grid units.
    ///
    /// # Panics
    ///
    /// Panics if either extent is zero.
    #[must_use]
    pub fn new(columns: u32, rows: u32) -> Self {
        match Self::try_new(columns, rows) {
            Ok(span) => span,
            Err(err) => panic!("{err}"),
        }
    }

    /// Creates a span, rejecting zero extents.
    pub fn try_new(columns: u32, rows: u32) -> Result<Self, TileGridError> {
        if columns == 0 || rows == 0 {
            return Err(TileGridError::InvalidSpan { columns, rows });
        }
        Ok(Self { columns, rows })
    }

    /// Horizontal extent in grid units.
    #[must_use]
    pub fn columns(&self) -> u32 {
        self.columns
    }

    /// Vertical extent in grid units.
    #[must_use]
    pub fn rows(&self) -> u32 {
        self.rows
    }
}

/// Unchecked wire form of [`TileSpan`]; deserialization goes through
/// [`TileSpan::try_new`].
#[cfg(feature = "serde")]
#[derive(serde::Deserialize)]
struct RawTileSpan {
    columns: u32,
    rows: u32,
}

#[cfg(feature = "serde")]
impl TryFrom<RawTileSpan> for TileSpan {
    type Error = TileGridError;

    fn try_from(raw: RawTileSpan) -> Result<Self, Self::Error> {
        Self::try_new(raw.columns, raw.rows)
    }
}

/// Anything the packing engine can place.
pub trait GridTile {
    /// The tile's size in grid units.
    fn span(&self) -> TileSpan;
}

impl GridTile for TileSpan {
    fn span(&self) -> TileSpan {
        *self
    }
}

impl<T: GridTile + ?Sized> GridTile for &T {
    fn span(&self) -> TileSpan {
        (**self).span()
    }
}

/// A tile span paired with a host-defined payload.
///
/// The payload is typically an identifier or the widget description the host
/// uses to paint the tile.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Tile<P> {
    /// Size in grid units.
    pub span: TileSpan,
    /// Host data carried through layout unchanged.
    pub payload: P,
}

impl<P> Tile<P> {
    /// Creates a tile.
    #[must_use]
    pub fn new(span: TileSpan, payload: P) -> Self {
        Self { span, payload }
    }
}

impl<P> GridTile for Tile<P> {
    fn span(&self) -> TileSpan {
        self.span
    }
}

#[cfg(test)]
mod tests {
    use super::{GridTile, Tile, TileSpan};
    use crate::TileGridError;

    #[test]
    fn zero_extents_are_rejected() {
        assert_eq!(
            TileSpan::try_new(0, 2),
            Err(TileGridError::InvalidSpan {
                columns: 0,
                rows: 2
            })
        );
        assert!(TileSpan::try_new(3, 0).is_err());
        assert_eq!(TileSpan::try_new(1, 1), Ok(TileSpan::UNIT));
    }

    #[test]
    fn references_and_payload_tiles_report_span() {
        let tile = Tile::new(TileSpan::new(2, 3), "clock");
        assert_eq!(tile.span(), TileSpan::new(2, 3));
        assert_eq!((&tile).span().columns(), 2);
    }
}
