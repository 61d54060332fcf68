/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! A simple implementation of a bytestream reader
//! and writer.
//!
//! The reader works over an in-memory buffer, tracking the position
//! and allowing one to push back bytes that were read too eagerly,
//! the writer appends to any [`std::io::Write`] sink while counting
//! the bytes written.
pub use reader::{ByteIoError, ZByteReader};
pub use writer::ZByteWriter;

mod reader;
mod writer;
