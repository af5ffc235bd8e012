//! Byte-slice invocation surface.
//!
//! Callers holding raw RGBA bytes (e.g. a host runtime marshalling buffers
//! across a language boundary) enter here. The adapter validates the buffer
//! lengths against the stated dimensions before any view is constructed; the
//! core scan itself performs no checks (its hot loop is branch-free on
//! preconditions, see [`crate::filter`]).

use crate::filter::{self, GrayFilterParams};
use crate::image::{RgbaView, RgbaViewMut, BYTES_PER_PIXEL};

/// Run the gray filter over raw RGBA buffers with default parameters.
///
/// `input` and `output` must both hold exactly `width * height * 4` bytes.
/// On success `output` holds a copy of `input` with gray-noise tiles
/// whitened.
pub fn grayfilter(
    width: usize,
    height: usize,
    input: &[u8],
    output: &mut [u8],
) -> Result<(), String> {
    grayfilter_with_params(width, height, input, output, &GrayFilterParams::default())
}

/// Run the gray filter over raw RGBA buffers with explicit parameters.
pub fn grayfilter_with_params(
    width: usize,
    height: usize,
    input: &[u8],
    output: &mut [u8],
    params: &GrayFilterParams,
) -> Result<(), String> {
    if width == 0 || height == 0 {
        return Err(format!("Image dimensions must be non-zero, got {width}x{height}"));
    }
    let expected = width
        .checked_mul(height)
        .and_then(|n| n.checked_mul(BYTES_PER_PIXEL))
        .ok_or_else(|| format!("Image dimensions {width}x{height} overflow"))?;
    if input.len() != expected {
        return Err(format!(
            "Input buffer holds {} bytes, expected {expected} for {width}x{height} RGBA",
            input.len()
        ));
    }
    if output.len() != input.len() {
        return Err(format!(
            "Output buffer holds {} bytes, expected {expected}",
            output.len()
        ));
    }

    let in_view = RgbaView {
        w: width,
        h: height,
        data: input,
    };
    let mut out_view = RgbaViewMut {
        w: width,
        h: height,
        data: output,
    };
    // Pre-initialize the output to white before the scan touches it.
    out_view.fill_white();
    filter::apply(&in_view, &mut out_view, params);
    Ok(())
}
