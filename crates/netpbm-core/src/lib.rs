/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! Core routines shared by the netpbm crates
//!
//! This crate provides a set of core routines shared
//! by the decoder, encoder and image processing crates.
//!
//! It currently contains
//!
//! - A bounded bytestream reader and a growable bytestream writer
//! - The closed set of NetPBM image kinds and their properties
//! - Helpers for the packed RGB layout used by pixmap images
//! - Decoder options
//!
//! # Features
//!  - `serde`: Enables serializing of some of the data structures
//!     present in the crate
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

pub mod bytestream;
pub mod kind;
pub mod options;
pub mod pixel;
pub mod serde;
