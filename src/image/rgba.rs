//! Tightly packed 8-bit RGBA pixel buffers.
//!
//! - [`RgbaView`] / [`RgbaViewMut`]: borrowed views over caller-owned bytes.
//! - [`RgbaBuffer`]: owned buffer with view conversions.
//!
//! Layout is row-major, channel order R,G,B,A, no padding between rows
//! (stride = `width * 4` bytes). All pixel access goes through indexed
//! accessors; rectangle primitives clamp to the buffer bounds so scan
//! windows may extend past the image edges.

/// Bytes per pixel (R, G, B, A).
pub const BYTES_PER_PIXEL: usize = 4;

/// Maximum lightness value (pure white) for [`RgbaView::lightness`].
pub const WHITE: u32 = 255;

/// Borrowed read-only RGBA view.
#[derive(Clone, Debug)]
pub struct RgbaView<'a> {
    pub w: usize,
    pub h: usize,
    pub data: &'a [u8],
}

impl<'a> RgbaView<'a> {
    /// Convert (x, y) to the byte offset of the pixel's R channel.
    #[inline]
    pub fn idx(&self, x: usize, y: usize) -> usize {
        (y * self.w + x) * BYTES_PER_PIXEL
    }

    /// Get the pixel at (x, y) as `[r, g, b, a]`.
    #[inline]
    pub fn pixel(&self, x: usize, y: usize) -> [u8; 4] {
        let i = self.idx(x, y);
        [
            self.data[i],
            self.data[i + 1],
            self.data[i + 2],
            self.data[i + 3],
        ]
    }

    /// Lightness of the pixel at (x, y): integer BT.601 luma of the RGB
    /// channels, 0 = black, [`WHITE`] = maximum. Alpha is ignored.
    #[inline]
    pub fn lightness(&self, x: usize, y: usize) -> u8 {
        let i = self.idx(x, y);
        let r = self.data[i] as u32;
        let g = self.data[i + 1] as u32;
        let b = self.data[i + 2] as u32;
        ((299 * r + 587 * g + 114 * b) / 1000) as u8
    }

    /// Number of pixels in the inclusive rectangle whose lightness is at or
    /// below `ceiling`. Iteration is clamped to the buffer bounds, so the
    /// rectangle may extend past the image edges.
    pub fn count_pixels_rect(
        &self,
        x1: usize,
        y1: usize,
        x2: usize,
        y2: usize,
        ceiling: f64,
    ) -> usize {
        if self.w == 0 || self.h == 0 {
            return 0;
        }
        let xe = x2.min(self.w - 1);
        let ye = y2.min(self.h - 1);
        if x1 > xe || y1 > ye {
            return 0;
        }
        let mut count = 0usize;
        for y in y1..=ye {
            for x in x1..=xe {
                if self.lightness(x, y) as f64 <= ceiling {
                    count += 1;
                }
            }
        }
        count
    }

    /// Average lightness of the rectangle, `x1 <= x2` and `y1 <= y2`.
    ///
    /// Reproduces the reference arithmetic exactly: the summation loops are
    /// half-open (`x1..x2`, `y1..y2`, clamped to the buffer) while the
    /// denominator counts the inclusive rectangle,
    /// `(x2 - x1 + 1) * (y2 - y1 + 1)`. The mean is therefore computed over
    /// one row and one column more than is summed, and over the unclamped
    /// window size for rectangles extending past the edges. Callers rely on
    /// this exact behaviour; do not correct it here.
    pub fn lightness_rect(&self, x1: usize, y1: usize, x2: usize, y2: usize) -> u32 {
        let denom = ((x2 - x1 + 1) * (y2 - y1 + 1)) as u64;
        let mut total = 0u64;
        for y in y1..y2.min(self.h) {
            for x in x1..x2.min(self.w) {
                total += self.lightness(x, y) as u64;
            }
        }
        (total / denom) as u32
    }
}

/// Borrowed mutable RGBA view with the same layout as [`RgbaView`].
#[derive(Debug)]
pub struct RgbaViewMut<'a> {
    pub w: usize,
    pub h: usize,
    pub data: &'a mut [u8],
}

impl<'a> RgbaViewMut<'a> {
    /// Reborrow as a read-only view.
    #[inline]
    pub fn as_view(&self) -> RgbaView<'_> {
        RgbaView {
            w: self.w,
            h: self.h,
            data: self.data,
        }
    }

    /// Overwrite the whole buffer with solid white (all channels saturated).
    pub fn fill_white(&mut self) {
        self.data.fill(0xFF);
    }

    /// Verbatim pixel copy from an equally sized view.
    pub fn copy_from(&mut self, src: &RgbaView<'_>) {
        debug_assert_eq!(self.w, src.w);
        debug_assert_eq!(self.h, src.h);
        self.data.copy_from_slice(src.data);
    }

    /// Set every pixel of the inclusive rectangle to solid white, clamped to
    /// the buffer bounds.
    pub fn clear_rect(&mut self, x1: usize, y1: usize, x2: usize, y2: usize) {
        if self.w == 0 || self.h == 0 {
            return;
        }
        let xe = x2.min(self.w - 1);
        let ye = y2.min(self.h - 1);
        if x1 > xe || y1 > ye {
            return;
        }
        for y in y1..=ye {
            let start = (y * self.w + x1) * BYTES_PER_PIXEL;
            let end = (y * self.w + xe) * BYTES_PER_PIXEL + BYTES_PER_PIXEL;
            self.data[start..end].fill(0xFF);
        }
    }
}

/// Owned RGBA buffer with borrowed view conversion.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RgbaBuffer {
    width: usize,
    height: usize,
    data: Vec<u8>,
}

impl RgbaBuffer {
    /// Construct a white-filled buffer of size `width × height`.
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            data: vec![0xFF; width * height * BYTES_PER_PIXEL],
        }
    }

    /// Construct from raw RGBA bytes; `data.len()` must equal
    /// `width * height * 4`.
    pub fn from_raw(width: usize, height: usize, data: Vec<u8>) -> Self {
        assert_eq!(
            data.len(),
            width * height * BYTES_PER_PIXEL,
            "buffer length must equal width * height * 4"
        );
        Self {
            width,
            height,
            data,
        }
    }

    /// Image width in pixels
    pub fn width(&self) -> usize {
        self.width
    }

    /// Image height in pixels
    pub fn height(&self) -> usize {
        self.height
    }

    /// Raw RGBA bytes in row-major order.
    pub fn as_bytes(&self) -> &[u8] {
        &self.data
    }

    /// Consume the buffer, returning the raw bytes.
    pub fn into_raw(self) -> Vec<u8> {
        self.data
    }

    /// Set the pixel at (x, y) to `[r, g, b, a]`.
    #[inline]
    pub fn set_pixel(&mut self, x: usize, y: usize, px: [u8; 4]) {
        let i = (y * self.width + x) * BYTES_PER_PIXEL;
        self.data[i..i + BYTES_PER_PIXEL].copy_from_slice(&px);
    }

    /// Borrow as a read-only view.
    pub fn as_view(&self) -> RgbaView<'_> {
        RgbaView {
            w: self.width,
            h: self.height,
            data: &self.data,
        }
    }

    /// Borrow as a mutable view.
    pub fn as_view_mut(&mut self) -> RgbaViewMut<'_> {
        RgbaViewMut {
            w: self.width,
            h: self.height,
            data: &mut self.data,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{RgbaBuffer, WHITE};

    fn gray(width: usize, height: usize, value: u8) -> RgbaBuffer {
        let mut buf = RgbaBuffer::new(width, height);
        for y in 0..height {
            for x in 0..width {
                buf.set_pixel(x, y, [value, value, value, 255]);
            }
        }
        buf
    }

    #[test]
    fn lightness_is_luma_of_rgb() {
        let mut buf = RgbaBuffer::new(2, 1);
        buf.set_pixel(0, 0, [255, 0, 0, 255]);
        buf.set_pixel(1, 0, [10, 200, 30, 0]);
        let view = buf.as_view();
        assert_eq!(view.lightness(0, 0), 76); // 299 * 255 / 1000
        assert_eq!(view.lightness(1, 0), 123); // (2990 + 117400 + 3420) / 1000
    }

    #[test]
    fn gray_pixels_have_lightness_equal_to_value() {
        let buf = gray(3, 3, 137);
        assert_eq!(buf.as_view().lightness(1, 1), 137);
        assert_eq!(buf.as_view().lightness(2, 2), 137);
    }

    #[test]
    fn count_pixels_rect_clamps_to_bounds() {
        let buf = gray(10, 10, 50);
        let view = buf.as_view();
        // Rect extends well past the edges; only the 10x10 image counts.
        assert_eq!(view.count_pixels_rect(0, 0, 49, 49, 50.0), 100);
        assert_eq!(view.count_pixels_rect(0, 0, 49, 49, 49.0), 0);
        // Fully outside.
        assert_eq!(view.count_pixels_rect(10, 0, 20, 9, 255.0), 0);
    }

    #[test]
    fn lightness_rect_uses_inclusive_denominator_over_half_open_sum() {
        let buf = gray(10, 10, 100);
        let view = buf.as_view();
        // Sum covers 4x4 pixels, denominator counts 5x5.
        assert_eq!(view.lightness_rect(0, 0, 4, 4), 100 * 16 / 25);
        // Clamped: sum covers the 10x10 image, denominator counts 50x50.
        assert_eq!(view.lightness_rect(0, 0, 49, 49), 100 * 100 / 2500);
    }

    #[test]
    fn clear_rect_is_inclusive_and_clamped() {
        let mut buf = gray(10, 10, 0);
        buf.as_view_mut().clear_rect(5, 5, 49, 49);
        let view = buf.as_view();
        assert_eq!(view.pixel(4, 4), [0, 0, 0, 255]);
        assert_eq!(view.pixel(5, 5), [255, 255, 255, 255]);
        assert_eq!(view.pixel(9, 9), [255, 255, 255, 255]);
        // Fully outside rect is a no-op.
        let mut buf = gray(10, 10, 0);
        buf.as_view_mut().clear_rect(10, 10, 20, 20);
        assert_eq!(buf.as_view().pixel(9, 9), [0, 0, 0, 255]);
    }

    #[test]
    fn fill_white_saturates_all_channels() {
        let mut buf = gray(4, 4, 0);
        buf.as_view_mut().fill_white();
        assert!(buf.as_bytes().iter().all(|&b| b == 0xFF));
        assert_eq!(buf.as_view().lightness(0, 0) as u32, WHITE);
    }
}
