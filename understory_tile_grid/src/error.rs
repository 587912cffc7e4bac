// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

/// Errors reported by the fallible constructors of this crate.
///
/// Geometry and packing never fail once their inputs are valid; these errors
/// only describe inputs that violate the caller contract.
#[derive(Clone, Copy, Debug, PartialEq, thiserror::Error)]
pub enum TileGridError {
    /// A viewport dimension was negative, NaN, or infinite.
    #[error("invalid viewport {width}x{height}: dimensions must be finite and non-negative")]
    InvalidViewport {
        /// Offending width.
        width: f64,
        /// Offending height.
        height: f64,
    },
    /// A tile span had a zero extent on some axis.
    #[error("invalid tile span {columns}x{rows}: spans must be at least 1x1")]
    InvalidSpan {
        /// Offending column span.
        columns: u32,
        /// Offending row span.
        rows: u32,
    },
    /// A [`GridConfig`](crate::GridConfig) value was out of range.
    #[error("invalid grid config: {0}")]
    InvalidConfig(&'static str),
}
