use serde::Serialize;

/// Summary of one filter pass.
#[derive(Clone, Debug, Default, Serialize)]
pub struct FilterReport {
    pub width: usize,
    pub height: usize,
    /// Tile positions visited by the scan cursor.
    pub tiles_visited: usize,
    /// Tiles whitened as gray noise.
    pub tiles_cleared: usize,
    pub latency_ms: f64,
}
