use improc::convolve::{convolve, convolve_with};
use improc::image::io::{load_gray_f32, save_gray_f32, write_json_file};
use improc::kernel::Kernel;
use serde::{Deserialize, Serialize};
use std::env;
use std::path::{Path, PathBuf};

#[derive(Debug, Deserialize)]
pub struct FilterToolConfig {
    pub input: PathBuf,
    /// Kernel as a row matrix; every row must have the same odd length and
    /// the row count must be odd as well.
    pub kernel: Vec<Vec<f32>>,
    /// Divide each weighted sum by the kernel's weight sum before storing.
    #[serde(default)]
    pub normalize: bool,
    pub output: FilterOutputConfig,
}

#[derive(Debug, Deserialize)]
pub struct FilterOutputConfig {
    #[serde(rename = "filtered_image")]
    pub filtered_image: PathBuf,
    #[serde(rename = "stats_json")]
    pub stats_json: PathBuf,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct FilterStats {
    width: usize,
    height: usize,
    kernel_width: usize,
    kernel_height: usize,
    normalized: bool,
    /// Extremes and mean of the raw engine output, before any clamping.
    min: f32,
    max: f32,
    mean: f64,
}

pub fn load_config(path: &Path) -> Result<FilterToolConfig, String> {
    let data = std::fs::read_to_string(path)
        .map_err(|e| format!("Failed to read config {}: {e}", path.display()))?;
    serde_json::from_str(&data)
        .map_err(|e| format!("Failed to parse config {}: {e}", path.display()))
}

fn main() {
    env_logger::init();
    if let Err(err) = run() {
        eprintln!("Error: {err}");
        std::process::exit(1);
    }
}

fn run() -> Result<(), String> {
    let config_path = env::args().nth(1).ok_or_else(usage)?;
    let config = load_config(Path::new(&config_path))?;

    let image = load_gray_f32(&config.input)?;
    let kernel = Kernel::from_rows(&config.kernel).map_err(|e| format!("Bad kernel: {e}"))?;

    let filtered = if config.normalize {
        let total = kernel.weight_sum();
        if total == 0.0 {
            return Err("Cannot normalize: kernel weights sum to zero".to_string());
        }
        convolve_with(&image, &kernel, move |_, sum| (sum / total) as f32)
    } else {
        convolve(&image, &kernel)
    };

    let stats = summarize(&filtered, &kernel, config.normalize);
    save_gray_f32(&filtered, &config.output.filtered_image)?;
    write_json_file(&config.output.stats_json, &stats)?;

    println!(
        "Filtered {}x{} image, output range [{:.4}, {:.4}]",
        stats.width, stats.height, stats.min, stats.max
    );
    println!("Image written to {}", config.output.filtered_image.display());
    println!("Stats written to {}", config.output.stats_json.display());
    Ok(())
}

fn summarize(image: &improc::image::ImageF32, kernel: &Kernel, normalized: bool) -> FilterStats {
    let mut min = f32::INFINITY;
    let mut max = f32::NEG_INFINITY;
    let mut total = 0.0f64;
    for &px in &image.data {
        min = min.min(px);
        max = max.max(px);
        total += f64::from(px);
    }
    let count = image.data.len().max(1);
    FilterStats {
        width: image.w,
        height: image.h,
        kernel_width: kernel.width(),
        kernel_height: kernel.height(),
        normalized,
        min,
        max,
        mean: total / count as f64,
    }
}

fn usage() -> String {
    "Usage: filter_demo <config.json>".to_string()
}
