/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */


//! Methods used for duplicating pixels around the border
//!
//! This contains functions that make borders either with a constant
//! (zero) value or by replicating the edge pixels across the border

/// Padding method to use
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub enum PadMethod {
    /// Create a border filled with `T::default()`, zero for integers
    Constant,
    /// Create a border that duplicates the current pixel
    /// at the original image border to the new border
    ///
    /// ```text
    ///  a,b,c
    ///  d,e,f
    /// ```
    /// Becomes
    /// ```text
    /// a a,b,c c
    /// a a,b,c c
    /// d d,e,f f
    /// d d,e,f f
    /// ```
    #[default]
    Replicate
}

/// Pad pixels creating a buffer around actual pixels
///
/// This is mainly useful for convolutions and anything that
/// has conditions for edge pixels
///
///```text
///    padded width ──────────────────────────────►
/// │ ┌─────────────────────────────────────┐
/// │ │          PADDING                    │
/// │ │   (pad_x,pad_y)                     │
/// │ │     ┌────────────────────┐          │
/// │ │     │                    │          │
/// │ │     │   IMAGE            │          │
/// │ │     │                    │          │
/// │ │     └────────────────────┘          │
/// ▼ │                                     │
///   └─────────────────────────────────────┘
/// ```
///
/// # Arguments
///  - pixels: Un-padded raw pixels, `width * height` of them
///  - width: Width of raw pixels
///  - height : Height of raw pixels
///  - pad_x: Number of columns added on each of the left and right sides
///  - pad_y: Number of rows added on each of the top and bottom sides
///  - method: Method to use for pad pixels.
///
/// # Returns:
///  - A vec of `(width + 2*pad_x) * (height + 2*pad_y)` pixels, row-major
///
/// An empty image has no edge to replicate and is padded with
/// `T::default()` regardless of `method`.
pub fn pad<T: Copy + Default>(
    pixels: &[T], width: usize, height: usize, pad_x: usize, pad_y: usize, method: PadMethod
) -> Vec<T> {
    if width == 0 || height == 0 {
        return constant(pixels, width, height, pad_x, pad_y);
    }
    match method {
        PadMethod::Constant => constant(pixels, width, height, pad_x, pad_y),
        PadMethod::Replicate => replicate(pixels, width, height, pad_x, pad_y)
    }
}

fn constant<T: Copy + Default>(
    pixels: &[T], width: usize, height: usize, pad_x: usize, pad_y: usize
) -> Vec<T> {
    let padded_w = width + pad_x * 2;
    let padded_h = height + pad_y * 2;

    let mut out_pixels = vec![T::default(); padded_h * padded_w];

    if width == 0 {
        return out_pixels;
    }
    for (out, in_pix) in out_pixels
        .chunks_exact_mut(padded_w)
        .skip(pad_y)
        .take(height)
        .zip(pixels.chunks_exact(width))
    {
        out[pad_x..pad_x + width].copy_from_slice(in_pix);
    }
    out_pixels
}

fn replicate<T: Copy + Default>(
    pixels: &[T], width: usize, height: usize, pad_x: usize, pad_y: usize
) -> Vec<T> {
    let padded_w = width + pad_x * 2;
    let padded_h = height + pad_y * 2;

    let mut out_pixels = vec![T::default(); padded_h * padded_w];

    for (y, out) in out_pixels.chunks_exact_mut(padded_w).enumerate() {
        // rows above and below the image repeat the first and last rows
        let src_y = y.saturating_sub(pad_y).min(height - 1);
        let in_row = &pixels[src_y * width..(src_y + 1) * width];

        let (left, rest) = out.split_at_mut(pad_x);
        let (middle, right) = rest.split_at_mut(width);

        left.fill(in_row[0]);
        middle.copy_from_slice(in_row);
        right.fill(in_row[width - 1]);
    }
    out_pixels
}
