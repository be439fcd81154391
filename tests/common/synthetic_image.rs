use improc::image::{ImageF32, MultiImageF32};

/// Deterministic single-channel test pattern with varied, non-repeating
/// values (no two neighboring pixels equal).
pub fn gradient_f32(width: usize, height: usize) -> ImageF32 {
    assert!(width > 0 && height > 0, "image dimensions must be positive");

    let mut img = ImageF32::new(width, height);
    for y in 0..height {
        for x in 0..width {
            let v = ((x * 31 + y * 17) % 97) as f32 / 97.0;
            img.set(x, y, v);
        }
    }
    img
}

/// Single-channel image filled with a constant value.
pub fn constant_f32(width: usize, height: usize, value: f32) -> ImageF32 {
    ImageF32::from_vec(width, height, vec![value; width * height])
}

/// RGB test image whose channels carry distinct, position-dependent values.
pub fn rgb_f32(width: usize, height: usize) -> MultiImageF32 {
    assert!(width > 0 && height > 0, "image dimensions must be positive");

    let mut img = MultiImageF32::new(width, height, 3);
    for y in 0..height {
        for x in 0..width {
            let base = (y * width + x) as f32;
            img.set(x, y, 0, base + 0.1);
            img.set(x, y, 1, base + 0.2);
            img.set(x, y, 2, base + 0.3);
        }
    }
    img
}
