mod common;

use common::synthetic_image::{constant_f32, gradient_f32};
use improc::image::ImageF32;
use improc::kernel::{Kernel, ShapeError};
use improc::{convolve, convolve_with};

fn identity_3x3() -> Kernel {
    Kernel::from_rows(&[
        vec![0.0, 0.0, 0.0],
        vec![0.0, 1.0, 0.0],
        vec![0.0, 0.0, 0.0],
    ])
    .expect("identity kernel is well-formed")
}

#[test]
fn identity_kernel_reproduces_the_image_exactly() {
    let _ = env_logger::builder().is_test(true).try_init();
    let image = gradient_f32(17, 11);
    let out = convolve(&image, &identity_3x3());
    assert_eq!(out.data, image.data, "identity filtering must be exact");
}

#[test]
fn output_shape_always_matches_input_shape() {
    let image = gradient_f32(7, 5);
    for (kw, kh) in [(1, 1), (3, 3), (5, 1), (1, 7), (9, 9)] {
        let kernel = Kernel::new(kw, kh, vec![0.5; kw * kh]).unwrap();
        let out = convolve(&image, &kernel);
        assert_eq!(
            (out.w, out.h),
            (image.w, image.h),
            "shape changed for {kw}x{kh} kernel"
        );
    }
}

#[test]
fn zero_padding_shrinks_boundary_sums() {
    let image = constant_f32(3, 3, 1.0);
    let kernel = Kernel::new(3, 3, vec![1.0; 9]).unwrap();
    let out = convolve(&image, &kernel);

    // Corners overlap 4 real cells, edge midpoints 6, the center all 9.
    let expected = vec![4.0, 6.0, 4.0, 6.0, 9.0, 6.0, 4.0, 6.0, 4.0];
    assert_eq!(out.data, expected);
}

#[test]
fn pass_through_combine_matches_default_reduction() {
    let image = gradient_f32(9, 6);
    let kernel = Kernel::from_rows(&[
        vec![0.25, -1.0, 0.25],
        vec![0.5, 2.0, 0.5],
        vec![0.25, -1.0, 0.25],
    ])
    .unwrap();

    let default = convolve(&image, &kernel);
    let custom = convolve_with(&image, &kernel, |_, sum| sum as f32);
    assert_eq!(custom.data, default.data);
}

#[test]
fn constant_zero_combine_blanks_the_output() {
    let image = gradient_f32(6, 4);
    let kernel = Kernel::new(3, 3, vec![1.0; 9]).unwrap();
    let out = convolve_with(&image, &kernel, |_, _| 0.0);
    assert_eq!((out.w, out.h), (image.w, image.h));
    assert!(out.data.iter().all(|&v| v == 0.0));
}

#[test]
fn combine_sees_the_kernel_it_was_given() {
    let image = constant_f32(4, 4, 1.0);
    let kernel = Kernel::new(3, 3, vec![1.0; 9]).unwrap();
    // Normalizing by the weight sum turns the interior into exact ones.
    let out = convolve_with(&image, &kernel, |k, sum| (sum / k.weight_sum()) as f32);
    assert_eq!(out.get(1, 1), 1.0);
    assert_eq!(out.get(2, 2), 1.0);
    assert_eq!(out.get(0, 0), 4.0 / 9.0);
}

#[test]
fn single_cell_image_and_kernel() {
    let image = ImageF32::from_vec(1, 1, vec![5.0]);
    let kernel = Kernel::new(1, 1, vec![2.0]).unwrap();
    assert_eq!(convolve(&image, &kernel).data, vec![10.0]);
}

#[test]
fn even_kernel_dimensions_are_rejected() {
    let err = Kernel::from_rows(&[vec![1.0, 1.0], vec![1.0, 1.0]]).unwrap_err();
    assert_eq!(err, ShapeError::EvenDimensions { w: 2, h: 2 });
}

#[test]
fn kernel_larger_than_the_image_still_computes() {
    let image = constant_f32(3, 3, 1.0);
    let kernel = Kernel::new(5, 5, vec![1.0; 25]).unwrap();
    let out = convolve(&image, &kernel);
    // Every 5x5 window over the padded buffer covers the whole 3x3 image.
    assert!(out.data.iter().all(|&v| v == 9.0), "got {:?}", out.data);
}

#[test]
fn horizontal_kernel_orientation_is_not_flipped() {
    let image = ImageF32::from_vec(3, 1, vec![1.0, 2.0, 3.0]);
    let kernel = Kernel::from_rows(&[vec![1.0, 0.0, 0.0]]).unwrap();
    // Weight on the leftmost tap picks the left neighbor (zero at the border).
    let out = convolve(&image, &kernel);
    assert_eq!(out.data, vec![0.0, 1.0, 2.0]);
}

#[test]
fn vertical_kernel_orientation_is_not_flipped() {
    let image = ImageF32::from_vec(1, 3, vec![1.0, 2.0, 3.0]);
    let kernel = Kernel::from_rows(&[vec![1.0], vec![0.0], vec![0.0]]).unwrap();
    let out = convolve(&image, &kernel);
    assert_eq!(out.data, vec![0.0, 1.0, 2.0]);
}

#[test]
fn negative_and_fractional_weights_pass_through_unclamped() {
    let image = ImageF32::from_vec(1, 1, vec![4.0]);
    let kernel = Kernel::new(1, 1, vec![-0.5]).unwrap();
    let out = convolve(&image, &kernel);
    assert_eq!(out.data, vec![-2.0]);
}

#[test]
fn inputs_are_not_mutated() {
    let image = gradient_f32(5, 5);
    let snapshot = image.clone();
    let kernel = Kernel::new(3, 3, vec![2.0; 9]).unwrap();
    let out = convolve(&image, &kernel);
    assert_eq!(image, snapshot);
    assert_ne!(out.data, image.data);
}
