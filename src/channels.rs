//! Per-channel decomposition of multi-channel images.
//!
//! Splitting produces one full-shaped image per requested channel with all
//! other channels zeroed, so each plane can be fed through the grayscale
//! pipeline or recombined by summation.
use crate::image::{io, MultiImageF32};
use log::debug;
use std::path::Path;

/// Reasons why channel splitting fails.
#[derive(Clone, Debug, PartialEq)]
pub enum ChannelError {
    /// More channels requested than the image carries.
    CountOutOfRange { requested: usize, available: usize },
    /// The source file could not be read or decoded.
    Load(String),
}

impl std::fmt::Display for ChannelError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ChannelError::CountOutOfRange {
                requested,
                available,
            } => write!(
                f,
                "cannot extract {requested} channels from a {available}-channel image"
            ),
            ChannelError::Load(msg) => write!(f, "{msg}"),
        }
    }
}

impl std::error::Error for ChannelError {}

/// Split `image` into per-channel images.
///
/// `channel_count == 0` selects all available channels. Each returned image
/// has the input's full shape with every channel but one zeroed, in channel
/// order (R, G, B for RGB input).
pub fn split_channels(
    image: &MultiImageF32,
    channel_count: usize,
) -> Result<Vec<MultiImageF32>, ChannelError> {
    let available = image.channels;
    if channel_count > available {
        return Err(ChannelError::CountOutOfRange {
            requested: channel_count,
            available,
        });
    }
    let count = if channel_count == 0 {
        available
    } else {
        channel_count
    };
    debug!(
        "split_channels: {}x{} image, {count} of {available} channels",
        image.w, image.h
    );

    let mut planes = Vec::with_capacity(count);
    for c in 0..count {
        let mut plane = MultiImageF32::new(image.w, image.h, available);
        for (src_px, dst_px) in image.pixels().zip(plane.pixels_mut()) {
            dst_px[c] = src_px[c];
        }
        planes.push(plane);
    }
    Ok(planes)
}

/// Load an image file and split it into per-channel images.
pub fn split_image_file(
    path: &Path,
    channel_count: usize,
) -> Result<Vec<MultiImageF32>, ChannelError> {
    let image = io::load_multi_f32(path).map_err(ChannelError::Load)?;
    split_channels(&image, channel_count)
}
