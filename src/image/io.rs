//! I/O helpers for image buffers and JSON reports.
//!
//! - `load_gray_f32`: read a PNG/JPEG/etc. into a single-channel `[0, 1]` buffer.
//! - `load_multi_f32`: read a PNG/JPEG/etc. into an interleaved RGB `[0, 1]` buffer.
//! - `save_gray_f32` / `save_multi_f32`: write buffers to PNG, clamping to the
//!   displayable range at this boundary (the processing core never clamps).
//! - `write_json_file`: pretty-print a serializable value to disk.
use super::{ImageF32, ImageView, MultiImageF32};
use image::{GrayImage, Luma, Rgb, RgbImage};
use serde::Serialize;
use std::fs;
use std::path::Path;

/// Load an image from disk as 8-bit grayscale scaled to `[0, 1]`.
pub fn load_gray_f32(path: &Path) -> Result<ImageF32, String> {
    let img = image::open(path)
        .map_err(|e| format!("Failed to open {}: {e}", path.display()))?
        .into_luma8();
    let w = img.width() as usize;
    let h = img.height() as usize;
    let data = img.into_raw().iter().map(|&v| f32::from(v) / 255.0).collect();
    Ok(ImageF32::from_vec(w, h, data))
}

/// Load an image from disk as interleaved RGB scaled to `[0, 1]`.
pub fn load_multi_f32(path: &Path) -> Result<MultiImageF32, String> {
    let img = image::open(path)
        .map_err(|e| format!("Failed to open {}: {e}", path.display()))?
        .into_rgb8();
    let w = img.width() as usize;
    let h = img.height() as usize;
    let data = img.into_raw().iter().map(|&v| f32::from(v) / 255.0).collect();
    Ok(MultiImageF32::from_vec(w, h, 3, data))
}

/// Save a float image to a grayscale PNG, mapping `[0, 1]` to `[0, 255]`
/// and clamping anything outside that range.
pub fn save_gray_f32(image: &ImageF32, path: &Path) -> Result<(), String> {
    ensure_parent_dir(path)?;
    let mut out = GrayImage::new(image.w as u32, image.h as u32);
    for (y, row) in image.rows().enumerate() {
        for (x, &px) in row.iter().enumerate() {
            out.put_pixel(x as u32, y as u32, Luma([sample_to_u8(px)]));
        }
    }
    out.save(path)
        .map_err(|e| format!("Failed to save {}: {e}", path.display()))
}

/// Save a 3-channel float image to an RGB PNG, clamping each sample.
pub fn save_multi_f32(image: &MultiImageF32, path: &Path) -> Result<(), String> {
    if image.channels != 3 {
        return Err(format!(
            "RGB output requires 3 channels, image has {}",
            image.channels
        ));
    }
    ensure_parent_dir(path)?;
    let mut out = RgbImage::new(image.w as u32, image.h as u32);
    for y in 0..image.h {
        for x in 0..image.w {
            let px = image.pixel(x, y);
            out.put_pixel(
                x as u32,
                y as u32,
                Rgb([sample_to_u8(px[0]), sample_to_u8(px[1]), sample_to_u8(px[2])]),
            );
        }
    }
    out.save(path)
        .map_err(|e| format!("Failed to save {}: {e}", path.display()))
}

/// Serialize a value as pretty JSON to `path`, creating parent directories.
pub fn write_json_file<T: Serialize>(path: &Path, value: &T) -> Result<(), String> {
    ensure_parent_dir(path)?;
    let json = serde_json::to_string_pretty(value)
        .map_err(|e| format!("Failed to serialize JSON for {}: {e}", path.display()))?;
    fs::write(path, json).map_err(|e| format!("Failed to write JSON {}: {e}", path.display()))
}

#[inline]
fn sample_to_u8(v: f32) -> u8 {
    (v * 255.0).clamp(0.0, 255.0) as u8
}

fn ensure_parent_dir(path: &Path) -> Result<(), String> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)
                .map_err(|e| format!("Failed to create {}: {e}", parent.display()))?;
        }
    }
    Ok(())
}
