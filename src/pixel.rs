//! Per-pixel mapping from a source buffer into a destination buffer.
//!
//! The callback is a required closure parameter, so the "absent callback"
//! failure mode is unrepresentable; the only checked precondition is that
//! source and destination shapes match.
use crate::image::{ImageF32, ImageView, ImageViewMut, MultiImageF32};

/// Source and destination shapes offered to a per-pixel map do not match.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PixelError {
    /// Source dimensions as (width, height, channels)
    pub src: (usize, usize, usize),
    /// Destination dimensions as (width, height, channels)
    pub dst: (usize, usize, usize),
}

impl std::fmt::Display for PixelError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let (sw, sh, sc) = self.src;
        let (dw, dh, dc) = self.dst;
        write!(
            f,
            "pixel map shape mismatch: source {sw}x{sh}x{sc}, destination {dw}x{dh}x{dc}"
        )
    }
}

impl std::error::Error for PixelError {}

/// Apply `f` to every pixel of `src`, writing into the matching pixel of
/// `dst` in row-major order.
///
/// `f` receives the source pixel's channel slice and the destination
/// pixel's mutable slice.
pub fn map_pixels<F>(
    src: &MultiImageF32,
    dst: &mut MultiImageF32,
    mut f: F,
) -> Result<(), PixelError>
where
    F: FnMut(&[f32], &mut [f32]),
{
    if src.shape() != dst.shape() {
        return Err(PixelError {
            src: src.shape(),
            dst: dst.shape(),
        });
    }
    for (src_px, dst_px) in src.pixels().zip(dst.pixels_mut()) {
        f(src_px, dst_px);
    }
    Ok(())
}

/// Single-channel twin of [`map_pixels`]: `dst[x, y] = f(src[x, y])`.
pub fn map_pixels_f32<F>(src: &ImageF32, dst: &mut ImageF32, mut f: F) -> Result<(), PixelError>
where
    F: FnMut(f32) -> f32,
{
    if (src.w, src.h) != (dst.w, dst.h) {
        return Err(PixelError {
            src: (src.w, src.h, 1),
            dst: (dst.w, dst.h, 1),
        });
    }
    for (src_row, dst_row) in src.rows().zip(dst.rows_mut()) {
        for (&s, d) in src_row.iter().zip(dst_row.iter_mut()) {
            *d = f(s);
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mismatched_shapes_rejected() {
        let src = MultiImageF32::new(2, 2, 3);
        let mut dst = MultiImageF32::new(2, 3, 3);
        let err = map_pixels(&src, &mut dst, |_, _| {}).unwrap_err();
        assert_eq!(err.src, (2, 2, 3));
        assert_eq!(err.dst, (2, 3, 3));
    }

    #[test]
    fn grayscale_map_applies_callback() {
        let src = ImageF32::from_vec(2, 1, vec![0.25, -1.0]);
        let mut dst = ImageF32::new(2, 1);
        map_pixels_f32(&src, &mut dst, |v| v * 2.0).unwrap();
        assert_eq!(dst.data, vec![0.5, -2.0]);
    }
}
