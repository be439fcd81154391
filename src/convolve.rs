//! Zero-padded 2D convolution over single-channel f32 images.
//!
//! The engine copies the input into an ephemeral zero-filled border of half
//! the kernel extent, then slides the kernel over every output position.
//! Boundary cells therefore see zero neighbors, which shrinks their
//! effective contribution; that trade-off is fixed, not configurable.
//! Each cell's sum of products accumulates in f64 and is handed to the
//! combine function, whose f32 return value lands in the output unclamped.
use crate::image::{ImageF32, ImageView, ImageViewMut};
use crate::kernel::Kernel;
use log::debug;

/// Row count below which the parallel path is not worth the fan-out.
const MIN_PARALLEL_ROWS: usize = 64;

/// Convolve `image` with `kernel`, reducing each window by its weighted sum.
///
/// The result has the input's shape for any kernel; a kernel larger than
/// the image is legal, the padding absorbs it. Inputs are never mutated.
pub fn convolve(image: &ImageF32, kernel: &Kernel) -> ImageF32 {
    convolve_with(image, kernel, |_, sum| sum as f32)
}

/// Convolve `image` with `kernel`, storing `combine(kernel, sum)` per cell.
///
/// `combine` receives the kernel and the already-reduced f64 sum of
/// products for the current window, and is invoked exactly once per output
/// cell in no guaranteed order. The pass-through `|_, sum| sum as f32`
/// makes this equivalent to [`convolve`].
pub fn convolve_with<F>(image: &ImageF32, kernel: &Kernel, combine: F) -> ImageF32
where
    F: Fn(&Kernel, f64) -> f32 + Sync,
{
    let (pad_x, pad_y) = kernel.half_extent();
    debug!(
        "convolve: image {}x{}, kernel {}x{}, pad {}x{}",
        image.w,
        image.h,
        kernel.width(),
        kernel.height(),
        pad_x,
        pad_y
    );

    let mut out = ImageF32::new(image.w, image.h);
    if image.w == 0 || image.h == 0 {
        return out;
    }

    let padded = pad_zero(image, pad_x, pad_y);

    if out.h >= MIN_PARALLEL_ROWS {
        #[cfg(feature = "parallel")]
        {
            convolve_rows_parallel(&mut out, &padded, kernel, &combine);
            return out;
        }
    }

    convolve_rows_sequential(&mut out, &padded, kernel, &combine);
    out
}

/// Copy `image` into a fresh buffer with a zero border of `pad_x` columns
/// and `pad_y` rows on each side.
fn pad_zero(image: &ImageF32, pad_x: usize, pad_y: usize) -> ImageF32 {
    let mut padded = ImageF32::new(image.w + 2 * pad_x, image.h + 2 * pad_y);
    for (dst_row, src_row) in padded.rows_mut().skip(pad_y).zip(image.rows()) {
        dst_row[pad_x..pad_x + image.w].copy_from_slice(src_row);
    }
    padded
}

fn convolve_rows_sequential<F>(out: &mut ImageF32, padded: &ImageF32, kernel: &Kernel, combine: &F)
where
    F: Fn(&Kernel, f64) -> f32,
{
    for (y, out_row) in out.rows_mut().enumerate() {
        fill_output_row(out_row, y, padded, kernel, combine);
    }
}

#[cfg(feature = "parallel")]
fn convolve_rows_parallel<F>(out: &mut ImageF32, padded: &ImageF32, kernel: &Kernel, combine: &F)
where
    F: Fn(&Kernel, f64) -> f32 + Sync,
{
    use rayon::prelude::*;

    let w = out.w;
    out.data
        .par_chunks_mut(w)
        .enumerate()
        .for_each(|(y, out_row)| fill_output_row(out_row, y, padded, kernel, combine));
}

fn fill_output_row<F>(out_row: &mut [f32], y: usize, padded: &ImageF32, kernel: &Kernel, combine: &F)
where
    F: Fn(&Kernel, f64) -> f32,
{
    for (x, out_px) in out_row.iter_mut().enumerate() {
        *out_px = combine(kernel, window_sum(padded, kernel, x, y));
    }
}

/// Weighted sum of the kernel-sized window anchored at (x, y) in the
/// padded image. Anchoring at the window's top-left corner recenters the
/// kernel on the original pixel once the pad offset is accounted for.
#[inline]
fn window_sum(padded: &ImageF32, kernel: &Kernel, x: usize, y: usize) -> f64 {
    let mut sum = 0.0f64;
    for ky in 0..kernel.height() {
        let row = &padded.row(y + ky)[x..x + kernel.width()];
        for (kx, &sample) in row.iter().enumerate() {
            sum += f64::from(sample) * f64::from(kernel.get(kx, ky));
        }
    }
    sum
}
