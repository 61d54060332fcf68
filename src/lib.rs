/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */


//! Read NetPBM images, convert them to greyscale and detect their edges
//!
//! This crate is the entry point of the workspace: it exposes the
//! handful of calls a front-end needs to run
//! `read -> greyscale -> sobel -> write` and re-exports the crates
//! doing the work.
//!
//! | Crate          | Contents                                      |
//! |----------------|-----------------------------------------------|
//! | `netpbm_core`  | Image kinds, options, byte reader and writer  |
//! | `netpbm_codec` | Decoder and encoder for P1 to P6              |
//! | `netpbm_image` | [`Image`], errors and the operations trait    |
//! | `netpbm_procs` | Greyscale, convolution and Sobel              |
//!
//! # Example
//! ```no_run
//! use netpbm_sobel::{read_image, release, sobel, to_greyscale, write_image};
//!
//! let mut image = read_image("photo.ppm")?;
//!
//! to_greyscale(&mut image)?;
//! sobel(&mut image, 4)?;
//!
//! write_image("edges.pgm", &image)?;
//! release(image);
//! # Ok::<(), netpbm_sobel::ImageErrors>(())
//! ```
#![warn(
    clippy::correctness,
    clippy::perf,
    clippy::pedantic,
    clippy::inline_always,
    clippy::missing_errors_doc,
    clippy::panic
)]
#![allow(clippy::needless_return, clippy::doc_markdown)]

use std::path::Path;

use log::info;
pub use netpbm_core;
pub use netpbm_image;
pub use netpbm_image::errors::{ImageErrors, ImageOperationsErrors};
pub use netpbm_image::image::{Image, ImageHeader};
pub use netpbm_image::netpbm_codec;
use netpbm_image::traits::OperationsTrait;
pub use netpbm_procs;
pub use netpbm_procs::pad::PadMethod;
use netpbm_procs::grayscale::Grayscale;
pub use netpbm_procs::sobel::{SobelOptions, MAX_THREADS};
use netpbm_procs::sobel::Sobel;

/// Read and decode the image at `path`
///
/// # Errors
/// - [`ImageErrors::IoError`] if the file cannot be read
/// - [`ImageErrors::DecodeErrors`] if it is not a valid P1-P6 image
pub fn read_image<P: AsRef<Path>>(path: P) -> Result<Image, ImageErrors> {
    let image = Image::open(path)?;
    let (width, height) = image.dimensions();

    info!("Image kind: {}", image.kind());
    info!("Dimensions: {width}x{height}, maxval {}", image.maxval());

    Ok(image)
}

/// Convert a pixmap to a greymap in place, other kinds are left as is
///
/// # Errors
/// [`ImageOperationsErrors::UnsupportedKind`] for kinds the
/// conversion does not know
pub fn to_greyscale(image: &mut Image) -> Result<(), ImageErrors> {
    Grayscale::new().execute(image)
}

/// Replace every pixel of a greyscale image with its Sobel gradient
/// magnitude, computed on `n_threads` threads
///
/// The one pixel border around the image repeats the edge pixels, so a
/// flat image has no gradient anywhere, edges included. For a zero border
/// use [`sobel_with_options`] with
/// `SobelOptions::default().set_pad_method(PadMethod::Constant)`.
/// Magnitudes are not clamped to the image maxval.
///
/// # Errors
/// - [`ImageOperationsErrors::NotGreyscale`] for pixmaps
/// - [`ImageOperationsErrors::InvalidThreadCount`] if `n_threads` is zero
///   or above [`MAX_THREADS`]
/// - [`ImageErrors::ThreadError`] if a worker cannot be started or panics
pub fn sobel(image: &mut Image, n_threads: usize) -> Result<(), ImageErrors> {
    sobel_with_options(image, SobelOptions::default().set_threads(n_threads))
}

/// [`sobel`] with every knob exposed
///
/// # Errors
/// Same as [`sobel`]
pub fn sobel_with_options(image: &mut Image, options: SobelOptions) -> Result<(), ImageErrors> {
    Sobel::new(options).execute(image)
}

/// Encode `image` in its own kind and write it to `path`
///
/// # Errors
/// - [`ImageErrors::IoError`] if the file cannot be written
/// - [`ImageErrors::EncodeErrors`] if the image cannot be encoded
pub fn write_image<P: AsRef<Path>>(path: P, image: &Image) -> Result<(), ImageErrors> {
    image.save(path)
}

/// Free the pixel buffer of an image that is no longer needed
pub fn release(image: Image) {
    image.release();
}
