#![doc = include_str!("../README.md")]

pub mod api;
pub mod filter;
pub mod image;
pub mod types;

// --- High-level re-exports -------------------------------------------------

// Main entry points: filter + report.
pub use crate::api::{grayfilter, grayfilter_with_params};
pub use crate::filter::{GrayFilter, GrayFilterParams};
pub use crate::types::FilterReport;

/// Small prelude for quick experiments.
///
/// ```
/// use gray_filter::prelude::*;
///
/// let (w, h) = (120usize, 90usize);
/// let input = RgbaBuffer::new(w, h);
/// let mut output = RgbaBuffer::new(w, h);
///
/// let filter = GrayFilter::default();
/// let report = filter.process(&input.as_view(), &mut output.as_view_mut());
/// println!("cleared={} latency_ms={:.3}", report.tiles_cleared, report.latency_ms);
/// ```
pub mod prelude {
    pub use crate::image::{RgbaBuffer, RgbaView, RgbaViewMut};
    pub use crate::{FilterReport, GrayFilter, GrayFilterParams};
}
