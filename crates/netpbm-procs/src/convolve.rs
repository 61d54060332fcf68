/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */


//! Weighted sum of a pixel neighbourhood
//!
//! A single kernel application at one focus point; callers drive it
//! over the image and normalize the result if they need to.
use netpbm_image::errors::ImageOperationsErrors;

/// Apply `kernel` to the neighbourhood of `(focus_x, focus_y)`
///
/// The kernel center is aligned with the focus and the result is the
/// sum of `buffer[row][col] * kernel[ki][kj]` over the whole kernel
/// footprint, with no normalization.
///
/// # Arguments
/// - buffer: Row-major pixels, at least `buffer_w * buffer_h` of them
/// - buffer_w, buffer_h: Dimensions of buffer
/// - focus_x, focus_y: Pixel the kernel center lands on
/// - kernel: Row-major weights, exactly `kernel_w * kernel_h` of them
/// - kernel_w, kernel_h: Kernel dimensions, both must be odd
///
/// # Errors
/// - [`ImageOperationsErrors::BadKernelSize`] if a kernel dimension is even
/// - [`ImageOperationsErrors::KernelLengthMismatch`] if the weights do not
///   match the kernel dimensions
/// - [`ImageOperationsErrors::OutOfBounds`] if the kernel footprint leaves the
///   buffer on any side
///
/// # Example
/// ```
/// use netpbm_procs::convolve::apply_kernel;
///
/// #[rustfmt::skip]
/// let buffer = [
///     1, 2, 3,
///     4, 5, 6,
///     7, 8, 9
/// ];
/// // picks the pixel to the right of the focus
/// let kernel = [0, 0, 0, 0, 0, 1, 0, 0, 0];
///
/// assert_eq!(apply_kernel(&buffer, 3, 3, 1, 1, &kernel, 3, 3).unwrap(), 6);
/// ```
#[allow(clippy::too_many_arguments)]
pub fn apply_kernel(
    buffer: &[u32], buffer_w: usize, buffer_h: usize, focus_x: usize, focus_y: usize,
    kernel: &[i32], kernel_w: usize, kernel_h: usize
) -> Result<i64, ImageOperationsErrors> {
    if kernel_w % 2 == 0 || kernel_h % 2 == 0 {
        return Err(ImageOperationsErrors::BadKernelSize(kernel_w, kernel_h));
    }
    if kernel.len() != kernel_w * kernel_h {
        return Err(ImageOperationsErrors::KernelLengthMismatch(
            kernel_w * kernel_h,
            kernel.len()
        ));
    }
    let half_w = kernel_w / 2;
    let half_h = kernel_h / 2;

    let out_of_bounds = focus_x < half_w
        || focus_y < half_h
        || focus_x + half_w >= buffer_w
        || focus_y + half_h >= buffer_h
        || buffer.len() < buffer_w * buffer_h;

    if out_of_bounds {
        return Err(ImageOperationsErrors::OutOfBounds {
            x:      focus_x,
            y:      focus_y,
            width:  buffer_w,
            height: buffer_h
        });
    }

    let start_x = focus_x - half_w;
    let start_y = focus_y - half_h;

    let mut sum = 0_i64;

    for (ki, weights) in kernel.chunks_exact(kernel_w).enumerate() {
        let row_start = (start_y + ki) * buffer_w + start_x;
        let row = &buffer[row_start..row_start + kernel_w];

        for (pixel, weight) in row.iter().zip(weights) {
            sum += i64::from(*pixel) * i64::from(*weight);
        }
    }
    Ok(sum)
}
