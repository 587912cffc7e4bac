// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use crate::{GridConfig, GridGeometry, GridTile, TileGridError, TileLayout, Viewport};

/// A small controller that keeps grid geometry in sync with its viewport.
///
/// `TileGrid` owns a [`GridConfig`] and the current [`Viewport`], caches the
/// derived [`GridGeometry`], and bumps a revision counter whenever an update
/// actually changes the geometry inputs. Hosts can key memoized layouts on
/// [`TileGrid::revision`] plus their own tile-list identity.
///
/// ```rust
/// use understory_tile_grid::{GridConfig, TileGrid, TileSpan, Viewport};
///
/// let mut grid = TileGrid::new(GridConfig::default(), Viewport::new(1280.0, 720.0)).unwrap();
/// let layout = grid.layout([TileSpan::new(2, 2), TileSpan::UNIT, TileSpan::UNIT]);
/// assert_eq!(layout.tiles().count(), 3);
///
/// // Re-measuring to the same size is a no-op.
/// assert!(!grid.set_viewport(Viewport::new(1280.0, 720.0)));
/// assert!(grid.set_viewport(Viewport::new(1920.0, 1080.0)));
/// assert_eq!(grid.revision(), 1);
/// ```
#[derive(Clone, Debug)]
pub struct TileGrid {
    config: GridConfig,
    viewport: Viewport,
    geometry: GridGeometry,
    revision: u64,
}

impl TileGrid {
    /// Creates a controller, validating `config`.
    pub fn new(config: GridConfig, viewport: Viewport) -> Result<Self, TileGridError> {
        let geometry = GridGeometry::try_compute(viewport, &config)?;
        Ok(Self {
            config,
            viewport,
            geometry,
            revision: 0,
        })
    }

    /// Current configuration.
    #[must_use]
    pub fn config(&self) -> &GridConfig {
        &self.config
    }

    /// Current viewport.
    #[must_use]
    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    /// Geometry derived from the current viewport and config.
    #[must_use]
    pub fn geometry(&self) -> &GridGeometry {
        &self.geometry
    }

    /// Counter bumped on every effective viewport or config change.
    #[must_use]
    pub fn revision(&self) -> u64 {
        self.revision
    }

    /// Updates the viewport.
    ///
    /// Returns `true` if the viewport changed and geometry was recomputed.
    pub fn set_viewport(&mut self, viewport: Viewport) -> bool {
        if self.viewport == viewport {
            return false;
        }
        self.viewport = viewport;
        self.refresh();
        true
    }

    /// Replaces the configuration.
    ///
    /// Returns `Ok(true)` if the config changed and geometry was recomputed.
    /// An invalid config is rejected and leaves the controller untouched.
    pub fn set_config(&mut self, config: GridConfig) -> Result<bool, TileGridError> {
        config.validate()?;
        if self.config == config {
            return Ok(false);
        }
        self.config = config;
        self.refresh();
        Ok(true)
    }

    /// Runs a full layout pass over `tiles` with the cached geometry.
    pub fn layout<T, I>(&self, tiles: I) -> TileLayout<T>
    where
        T: GridTile,
        I: IntoIterator<Item = T>,
    {
        self.geometry.pack(tiles)
    }

    fn refresh(&mut self) {
        self.geometry = GridGeometry::compute(self.viewport, &self.config);
        self.revision = self.revision.wrapping_add(1);
    }
}
