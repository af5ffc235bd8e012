use gray_filter::image::RgbaBuffer;

/// Generates a page filled with a single gray value (opaque alpha).
pub fn uniform_gray(width: usize, height: usize, value: u8) -> RgbaBuffer {
    assert!(width > 0 && height > 0, "image dimensions must be positive");

    let mut img = RgbaBuffer::new(width, height);
    for y in 0..height {
        for x in 0..width {
            img.set_pixel(x, y, [value, value, value, 255]);
        }
    }
    img
}

/// Generates a gray page with a dark rectangular "ink" block at
/// `(block_x, block_y)` of size `block_w × block_h`.
pub fn gray_with_dark_block(
    width: usize,
    height: usize,
    background: u8,
    ink: u8,
    block_x: usize,
    block_y: usize,
    block_w: usize,
    block_h: usize,
) -> RgbaBuffer {
    assert!(width > 0 && height > 0, "image dimensions must be positive");
    assert!(
        block_x + block_w <= width && block_y + block_h <= height,
        "ink block must lie inside the image"
    );

    let mut img = uniform_gray(width, height, background);
    for y in block_y..block_y + block_h {
        for x in block_x..block_x + block_w {
            img.set_pixel(x, y, [ink, ink, ink, 255]);
        }
    }
    img
}

/// Generates a horizontal gray gradient from black at the left edge to
/// white at the right edge.
pub fn horizontal_gradient(width: usize, height: usize) -> RgbaBuffer {
    assert!(width > 1 && height > 0, "gradient needs at least two columns");

    let mut img = RgbaBuffer::new(width, height);
    for y in 0..height {
        for x in 0..width {
            let v = (x * 255 / (width - 1)) as u8;
            img.set_pixel(x, y, [v, v, v, 255]);
        }
    }
    img
}
