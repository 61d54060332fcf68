/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! An in-memory NetPBM image
//!
//! This crate ties the decoder and encoder from `netpbm-codec`
//! to an owned [`Image`](image::Image), and defines the
//! [`OperationsTrait`](traits::OperationsTrait) implemented by the
//! in-place transforms in `netpbm-procs`.
//!
//! # Example
//! ```
//! use netpbm_image::image::Image;
//! use netpbm_core::options::DecoderOptions;
//!
//! let image = Image::read(b"P2\n2 1\n255\n7 9\n", DecoderOptions::default()).unwrap();
//! assert_eq!(image.dimensions(), (2, 1));
//! assert_eq!(image.pixels(), &[7, 9]);
//!
//! let bytes = image.write_to_vec().unwrap();
//! assert_eq!(bytes, b"P2\n2\n1\n255\n7 9 ");
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
    clippy::module_name_repetitions,
    clippy::doc_markdown
)]

pub use netpbm_codec;
pub use netpbm_core;

pub mod codecs;
pub mod errors;
pub mod image;
mod serde;
pub mod traits;
