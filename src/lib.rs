#![doc = include_str!("../README.md")]

pub mod channels;
pub mod convolve;
pub mod image;
pub mod kernel;
pub mod pixel;

// --- High-level re-exports -------------------------------------------------

// Main entry points: the convolution engine and its kernel type.
pub use crate::convolve::{convolve, convolve_with};
pub use crate::kernel::{Kernel, ShapeError};

// Collaborator utilities around the engine.
pub use crate::channels::{split_channels, split_image_file, ChannelError};
pub use crate::pixel::{map_pixels, map_pixels_f32, PixelError};

// --- Prelude ---------------------------------------------------------------

/// Small prelude for quick experiments.
///
/// ```
/// use improc::prelude::*;
///
/// let image = ImageF32::from_vec(4, 4, vec![0.5; 16]);
/// let kernel = Kernel::from_rows(&[
///     vec![0.0, 0.0, 0.0],
///     vec![0.0, 1.0, 0.0],
///     vec![0.0, 0.0, 0.0],
/// ])
/// .expect("odd dimensions");
///
/// let out = convolve(&image, &kernel);
/// assert_eq!((out.w, out.h), (image.w, image.h));
/// ```
pub mod prelude {
    pub use crate::image::{ImageF32, MultiImageF32};
    pub use crate::{convolve, convolve_with, split_channels, Kernel};
}
