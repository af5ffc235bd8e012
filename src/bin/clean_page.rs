use gray_filter::image::io::{load_rgba_image, save_rgba_image, write_json_file};
use gray_filter::image::RgbaBuffer;
use gray_filter::types::FilterReport;
use gray_filter::{GrayFilter, GrayFilterParams};
use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Debug, Deserialize)]
pub struct CleanPageConfig {
    #[serde(rename = "input")]
    pub input: PathBuf,
    #[serde(rename = "output")]
    pub output: PathBuf,
    #[serde(default)]
    pub summary_json: Option<PathBuf>,
    #[serde(default)]
    pub filter: FilterConfig,
}

#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct FilterConfig {
    pub scan_size: usize,
    pub scan_step: usize,
    pub threshold: f64,
    pub black_threshold: f64,
}

impl Default for FilterConfig {
    fn default() -> Self {
        let params = GrayFilterParams::default();
        Self {
            scan_size: params.scan_size,
            scan_step: params.scan_step,
            threshold: params.threshold,
            black_threshold: params.black_threshold,
        }
    }
}

impl FilterConfig {
    pub fn to_params(&self) -> GrayFilterParams {
        GrayFilterParams {
            scan_size: self.scan_size,
            scan_step: self.scan_step,
            threshold: self.threshold,
            black_threshold: self.black_threshold,
        }
    }
}

pub fn load_config(path: &Path) -> Result<CleanPageConfig, String> {
    let data = fs::read_to_string(path)
        .map_err(|e| format!("Failed to read config {}: {e}", path.display()))?;
    serde_json::from_str(&data)
        .map_err(|e| format!("Failed to parse config {}: {e}", path.display()))
}

fn main() {
    if let Err(err) = run() {
        eprintln!("Error: {err}");
        std::process::exit(1);
    }
}

fn run() -> Result<(), String> {
    let config_path = env::args().nth(1).ok_or_else(usage)?;
    let config = load_config(Path::new(&config_path))?;

    let input = load_rgba_image(&config.input)?;
    let mut output = RgbaBuffer::new(input.width(), input.height());

    let filter = GrayFilter::new(config.filter.to_params());
    let report = filter.process(&input.as_view(), &mut output.as_view_mut());

    save_rgba_image(&output, &config.output)?;
    if let Some(summary_path) = &config.summary_json {
        let summary = CleanPageSummary {
            input: config.input.clone(),
            output: config.output.clone(),
            report: report.clone(),
        };
        write_json_file(summary_path, &summary)?;
        println!("Saved summary to {}", summary_path.display());
    }

    println!(
        "Cleaned {} -> {} ({}x{}, cleared {}/{} tiles in {:.3} ms)",
        config.input.display(),
        config.output.display(),
        report.width,
        report.height,
        report.tiles_cleared,
        report.tiles_visited,
        report.latency_ms
    );

    Ok(())
}

fn usage() -> String {
    "Usage: clean_page <config.json>".to_string()
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct CleanPageSummary {
    input: PathBuf,
    output: PathBuf,
    report: FilterReport,
}
