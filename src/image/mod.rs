pub mod io;
pub mod rgba;

pub use self::rgba::{RgbaBuffer, RgbaView, RgbaViewMut, BYTES_PER_PIXEL, WHITE};
