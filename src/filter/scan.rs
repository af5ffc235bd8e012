//! Sequential scan cursor over the virtual tile grid.
//!
//! Tiles are fixed-size squares advanced across the image in steps smaller
//! than the tile size, so consecutive tiles overlap. The traversal matches
//! the reference filter exactly: the cursor advances horizontally while its
//! left edge is still inside the image (so each row ends with one tile
//! starting at or past the right edge), then wraps to the next row, and
//! stops after the row whose bottom edge has reached the image's bottom.
//! Tiles may extend past the image edges; the pixel-buffer rectangle
//! primitives clamp.

use super::params::GrayFilterParams;

/// Scan tile rectangle with inclusive pixel coordinates.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TileRect {
    pub left: usize,
    pub top: usize,
    pub right: usize,
    pub bottom: usize,
}

/// Iterator over the tile positions visited by the scan.
#[derive(Clone, Debug)]
pub struct ScanTiles {
    width: usize,
    height: usize,
    size: usize,
    step: usize,
    cursor: Option<TileRect>,
}

impl ScanTiles {
    /// Tile traversal for an image of the given dimensions.
    pub fn new(width: usize, height: usize, params: &GrayFilterParams) -> Self {
        assert!(
            params.scan_size > 0 && params.scan_step > 0,
            "scan size and step must be positive"
        );
        Self {
            width,
            height,
            size: params.scan_size,
            step: params.scan_step,
            cursor: Some(TileRect {
                left: 0,
                top: 0,
                right: params.scan_size - 1,
                bottom: params.scan_size - 1,
            }),
        }
    }
}

impl Iterator for ScanTiles {
    type Item = TileRect;

    fn next(&mut self) -> Option<TileRect> {
        let tile = self.cursor?;
        let mut next = tile;
        if tile.left < self.width {
            next.left += self.step;
            next.right += self.step;
            self.cursor = Some(next);
        } else if tile.bottom >= self.height {
            // Last row done.
            self.cursor = None;
        } else {
            next.left = 0;
            next.right = self.size - 1;
            next.top += self.step;
            next.bottom += self.step;
            self.cursor = Some(next);
        }
        Some(tile)
    }
}

#[cfg(test)]
mod tests {
    use super::{GrayFilterParams, ScanTiles, TileRect};

    #[test]
    fn traversal_over_100x100() {
        let params = GrayFilterParams::default();
        let tiles: Vec<TileRect> = ScanTiles::new(100, 100, &params).collect();
        assert_eq!(tiles.len(), 24);

        let mut lefts: Vec<usize> = tiles.iter().map(|t| t.left).collect();
        lefts.sort_unstable();
        lefts.dedup();
        // Each row ends with one cursor position starting at the right edge.
        assert_eq!(lefts, vec![0, 20, 40, 60, 80, 100]);

        let mut tops: Vec<usize> = tiles.iter().map(|t| t.top).collect();
        tops.sort_unstable();
        tops.dedup();
        assert_eq!(tops, vec![0, 20, 40, 60]);

        assert_eq!(
            tiles[0],
            TileRect {
                left: 0,
                top: 0,
                right: 49,
                bottom: 49
            }
        );
        let last = tiles.last().unwrap();
        assert_eq!((last.left, last.top), (100, 60));
    }

    #[test]
    fn tiles_are_fixed_size() {
        let params = GrayFilterParams::default();
        for tile in ScanTiles::new(73, 59, &params) {
            assert_eq!(tile.right - tile.left + 1, params.scan_size);
            assert_eq!(tile.bottom - tile.top + 1, params.scan_size);
        }
    }

    #[test]
    fn every_pixel_lies_in_a_tile() {
        let params = GrayFilterParams::default();
        let (w, h) = (73usize, 59usize);
        let mut covered = vec![false; w * h];
        for tile in ScanTiles::new(w, h, &params) {
            for y in tile.top..=tile.bottom.min(h - 1) {
                for x in tile.left..=tile.right.min(w - 1) {
                    covered[y * w + x] = true;
                }
            }
        }
        assert!(covered.iter().all(|&c| c));
    }

    #[test]
    fn small_image_still_terminates() {
        let params = GrayFilterParams::default();
        let tiles: Vec<TileRect> = ScanTiles::new(8, 8, &params).collect();
        // One step past the right edge, single row.
        assert_eq!(tiles.len(), 2);
        assert_eq!(tiles[1].left, 20);
    }
}
