/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! A NetPBM decoder and encoder
//!
//! This crate reads and writes the six classic NetPBM kinds
//!
//! | Magic | Kind           | Payload                                  |
//! |-------|----------------|------------------------------------------|
//! | `P1`  | ASCII bitmap   | one `0`/`1` digit per pixel              |
//! | `P2`  | ASCII greymap  | one decimal token per pixel              |
//! | `P3`  | ASCII pixmap   | three decimal tokens per pixel (R, G, B) |
//! | `P4`  | binary bitmap  | 8 pixels per byte, MSB first, row padded |
//! | `P5`  | binary greymap | one byte per pixel                       |
//! | `P6`  | binary pixmap  | three bytes per pixel (R, G, B)          |
//!
//! `P7` (PAM) is recognized and rejected.
//!
//! Decoded pixels are stored one `u32` per pixel, pixmap channels are
//! packed into that slot as described in [`netpbm_core::pixel`].
//!
//! # Example
//! ```
//! use netpbm_codec::NetPbmDecoder;
//! use netpbm_core::kind::NetPbmKind;
//!
//! let mut decoder = NetPbmDecoder::new(b"P2\n2 2\n255\n0 128 255 64\n");
//! let pixels = decoder.decode().unwrap();
//!
//! assert_eq!(decoder.kind(), Some(NetPbmKind::AsciiGreymap));
//! assert_eq!(decoder.dimensions(), Some((2, 2)));
//! assert_eq!(pixels, [0, 128, 255, 64]);
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

pub use decoder::*;
pub use encoder::*;
pub use errors::*;
pub use netpbm_core;

mod decoder;
mod encoder;
mod errors;
