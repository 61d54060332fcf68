/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */


//! Image processing routines for `netpbm-image`
//!
//! This implements greyscale conversion and Sobel edge detection,
//! both as in-place operations implementing the `OperationsTrait`
//! defined by netpbm-image, plus the convolution and padding
//! primitives they are built on.
//!
//! # Example
//! - Detect edges in a color image
//! ```
//! use netpbm_core::kind::NetPbmKind;
//! use netpbm_image::image::Image;
//! use netpbm_image::traits::OperationsTrait;
//! use netpbm_procs::grayscale::Grayscale;
//! use netpbm_procs::sobel::{Sobel, SobelOptions};
//!
//! let mut image = Image::fill(0x0030_2010, NetPbmKind::BinaryPixmap, 10, 10, 255).unwrap();
//!
//! Grayscale::new().execute(&mut image).unwrap();
//! Sobel::new(SobelOptions::default().set_threads(4)).execute(&mut image).unwrap();
//!
//! assert_eq!(image.kind(), NetPbmKind::BinaryGreymap);
//! // flat image, no edges
//! assert!(image.pixels().iter().all(|x| *x == 0));
//! ```
#![warn(
    clippy::correctness,
    clippy::perf,
    clippy::pedantic,
    clippy::inline_always,
    clippy::missing_errors_doc,
    clippy::panic
)]
#![allow(
    clippy::needless_return,
    clippy::similar_names,
    clippy::doc_markdown,
    clippy::module_name_repetitions,
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss,
    clippy::cast_precision_loss
)]

pub mod convolve;
pub mod grayscale;
pub mod pad;
pub mod sobel;
