//! Parameters controlling the tile scan.
//!
//! The defaults form the compatibility contract of the filter: changing any
//! of them changes which tiles are whitened. They mirror the constants used
//! by the unpaper-derived gray filter this crate reimplements.

use crate::image::WHITE;

/// Default scan tile edge length in pixels.
pub const SCAN_SIZE: usize = 50;
/// Default scan stride in pixels. Smaller than the tile size, so tiles
/// overlap.
pub const SCAN_STEP: usize = 20;
/// Default fraction of [`WHITE`] a tile's residual darkness must stay below
/// for the tile to be whitened.
pub const THRESHOLD: f64 = 0.5;
/// Default fraction of [`WHITE`] separating "real dark content" from gray
/// noise.
pub const BLACK_THRESHOLD: f64 = 0.33;

/// Tile-scan parameters.
#[derive(Clone, Debug)]
pub struct GrayFilterParams {
    /// Scan tile edge length in pixels (tiles are square).
    pub scan_size: usize,
    /// Horizontal and vertical scan stride in pixels.
    pub scan_step: usize,
    /// Whitening threshold as a fraction of [`WHITE`].
    pub threshold: f64,
    /// Dark-pixel threshold as a fraction of [`WHITE`].
    pub black_threshold: f64,
}

impl Default for GrayFilterParams {
    fn default() -> Self {
        Self {
            scan_size: SCAN_SIZE,
            scan_step: SCAN_STEP,
            threshold: THRESHOLD,
            black_threshold: BLACK_THRESHOLD,
        }
    }
}

impl GrayFilterParams {
    /// Lightness ceiling below which a pixel counts as real dark content:
    /// `WHITE * (1 - black_threshold)`.
    #[inline]
    pub fn black_max(&self) -> f64 {
        WHITE as f64 * (1.0 - self.black_threshold)
    }

    /// Absolute whitening threshold: `WHITE * threshold`. A tile without
    /// dark pixels is whitened when `WHITE - average_lightness` stays below
    /// this value.
    #[inline]
    pub fn threshold_abs(&self) -> f64 {
        WHITE as f64 * self.threshold
    }
}
