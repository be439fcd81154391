use improc::channels::split_image_file;
use improc::image::io::save_multi_f32;
use serde::Deserialize;
use std::env;
use std::path::{Path, PathBuf};

#[derive(Debug, Deserialize)]
pub struct ChannelToolConfig {
    pub input: PathBuf,
    /// Number of leading channels to extract; 0 selects all available.
    #[serde(default)]
    pub channel_count: usize,
    pub output_dir: PathBuf,
}

pub fn load_config(path: &Path) -> Result<ChannelToolConfig, String> {
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

    let planes = split_image_file(&config.input, config.channel_count)
        .map_err(|e| format!("Channel split failed: {e}"))?;

    for (index, plane) in planes.iter().enumerate() {
        let path = config.output_dir.join(format!("channel_{index}.png"));
        save_multi_f32(plane, &path)?;
        println!("Channel {index} written to {}", path.display());
    }
    println!("Extracted {} channel(s)", planes.len());
    Ok(())
}

fn usage() -> String {
    "Usage: channel_split_demo <config.json>".to_string()
}
