// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use kurbo::Size;

use crate::TileGridError;

/// The area available to one layout pass.
///
/// Dimensions are finite and non-negative. Hosts re-supply a viewport
/// whenever the container is measured again; a viewport is never mutated.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "RawViewport"))]
pub struct Viewport {
    width: f64,
    height: f64,
}

impl Viewport {
    /// Creates a viewport.
    ///
    /// # Panics
    ///
    /// Panics if either dimension is negative, NaN, or infinite. Use
    /// [`Viewport::try_new`] for measurements that may be invalid.
    #[must_use]
    pub fn new(width: f64, height: f64) -> Self {
        match Self::try_new(width, height) {
            Ok(viewport) => viewport,
            Err(err) => panic!("{err}"),
        }
    }

    /// Creates a viewport, rejecting negative or non-finite dimensions.
    pub fn try_new(width: f64, height: f64) -> Result<Self, TileGridError> {
        let valid = |v: f64| v.is_finite() && v >= 0.0;
        if valid(width) && valid(height) {
            Ok(Self { width, height })
        } else {
            Err(TileGridError::InvalidViewport { width, height })
        }
    }

    /// Creates a viewport from a Kurbo size.
    pub fn try_from_size(size: Size) -> Result<Self, TileGridError> {
        Self::try_new(size.width, size.height)
    }

    /// Viewport width.
    #[must_use]
    pub fn width(&self) -> f64 {
        self.width
    }

    /// Viewport height.
    #[must_use]
    pub fn height(&self) -> f64 {
        self.height
    }

    /// Returns the viewport as a Kurbo size.
    #[must_use]
    pub fn size(&self) -> Size {
        Size::new(self.width, self.height)
    }
}

/// Unchecked wire form of [`Viewport`]; deserialization goes through
/// [`Viewport::try_new`].
#[cfg(feature = "serde")]
#[derive(serde::Deserialize)]
struct RawViewport {
    width: f64,
    height: f64,
}

#[cfg(feature = "serde")]
impl TryFrom<RawViewport> for Viewport {
    type Error = TileGridError;

    fn try_from(raw: RawViewport) -> Result<Self, Self::Error> {
        Self::try_new(raw.width, raw.height)
    }
}
