//! Tile scanner removing light-gray noise from scanned pages.
//!
//! The image is walked in fixed-size overlapping tiles. A tile containing at
//! least one sufficiently dark pixel is assumed to hold real ink and is left
//! untouched. A tile with no dark pixel is whitened when its average
//! lightness is close enough to pure white; a dark-free tile that is *not*
//! white enough is also left untouched — mid-gray content is preserved, not
//! cleared.
//!
//! The pass reads from and writes to the output buffer, so a tile evaluated
//! later in the scan sees the clears already applied to overlapping earlier
//! tiles, matching the reference behaviour.

pub mod params;
pub mod scan;

pub use params::GrayFilterParams;
pub use scan::{ScanTiles, TileRect};

use crate::image::{RgbaView, RgbaViewMut, WHITE};
use crate::types::FilterReport;
use log::debug;
use std::time::Instant;

/// Copy `input` into `output`, then whiten every gray-noise tile.
///
/// Both views must have identical dimensions; the caller validates this
/// before constructing the views (see [`crate::api::grayfilter`]).
pub fn apply(input: &RgbaView<'_>, output: &mut RgbaViewMut<'_>, params: &GrayFilterParams) {
    scan_pass(input, output, params);
}

/// High-level filter interface: parameters plus a timed, reported pass.
#[derive(Clone, Debug, Default)]
pub struct GrayFilter {
    params: GrayFilterParams,
}

impl GrayFilter {
    pub fn new(params: GrayFilterParams) -> Self {
        Self { params }
    }

    pub fn params(&self) -> &GrayFilterParams {
        &self.params
    }

    /// Run the filter and report tile statistics and latency.
    pub fn process(&self, input: &RgbaView<'_>, output: &mut RgbaViewMut<'_>) -> FilterReport {
        let start = Instant::now();
        let (tiles_visited, tiles_cleared) = scan_pass(input, output, &self.params);
        let latency_ms = start.elapsed().as_secs_f64() * 1e3;
        debug!(
            "GrayFilter::process {}x{} cleared {}/{} tiles in {:.3} ms",
            input.w, input.h, tiles_cleared, tiles_visited, latency_ms
        );
        FilterReport {
            width: input.w,
            height: input.h,
            tiles_visited,
            tiles_cleared,
            latency_ms,
        }
    }
}

fn scan_pass(
    input: &RgbaView<'_>,
    output: &mut RgbaViewMut<'_>,
    params: &GrayFilterParams,
) -> (usize, usize) {
    output.copy_from(input);

    let black_max = params.black_max();
    let threshold_abs = params.threshold_abs();
    let mut visited = 0usize;
    let mut cleared = 0usize;

    for tile in ScanTiles::new(input.w, input.h, params) {
        visited += 1;
        let dark = output
            .as_view()
            .count_pixels_rect(tile.left, tile.top, tile.right, tile.bottom, black_max);
        if dark != 0 {
            continue;
        }
        let avg = output
            .as_view()
            .lightness_rect(tile.left, tile.top, tile.right, tile.bottom);
        if ((WHITE - avg) as f64) < threshold_abs {
            output.clear_rect(tile.left, tile.top, tile.right, tile.bottom);
            cleared += 1;
            debug!(
                "cleared tile ({}, {})-({}, {}) avg={}",
                tile.left, tile.top, tile.right, tile.bottom, avg
            );
        }
    }
    (visited, cleared)
}
