/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! Errors possible during image processing
use std::fmt::{Debug, Display, Formatter};

use netpbm_codec::{NetPbmDecodeErrors, NetPbmEncodeErrors};
use netpbm_core::kind::NetPbmKind;

/// All possible image errors that can occur.
///
/// This is the grand-father of image errors and contains
/// all decoding, processing and encoding errors possible
pub enum ImageErrors {
    /// A file could not be opened, read or written
    IoError(std::io::Error),
    /// The bytes are not a valid image
    DecodeErrors(NetPbmDecodeErrors),
    /// The image could not be serialized
    EncodeErrors(NetPbmEncodeErrors),
    /// An operation's preconditions were not met
    OperationsError(ImageOperationsErrors),
    /// Pixel count does not match the dimensions
    ///
    /// # Arguments
    /// - expected: width * height
    /// - found: length of the pixel buffer
    DimensionsMisMatch(usize, usize),
    /// Images of this kind cannot be represented
    UnsupportedKind(NetPbmKind),
    /// A worker thread could not be spawned or panicked
    ThreadError(String),
    GenericStr(&'static str)
}

/// Errors that may occur during image operations
pub enum ImageOperationsErrors {
    /// The operation needs a single channel image, convert it first
    NotGreyscale(NetPbmKind),
    /// Kernel dimensions must both be odd
    BadKernelSize(usize, usize),
    /// The kernel footprint centered at the focus leaves the buffer
    OutOfBounds {
        x:      usize,
        y:      usize,
        width:  usize,
        height: usize
    },
    /// Thread count is zero or larger than allowed
    ///
    /// # Arguments
    /// - requested count
    /// - maximum count
    InvalidThreadCount(usize, usize),
    /// Kernel weights do not match kernel dimensions
    ///
    /// # Arguments
    /// - expected: kernel width * kernel height
    /// - found: weights given
    KernelLengthMismatch(usize, usize),
    /// The operation does not support this image kind
    UnsupportedKind(&'static str, NetPbmKind)
}

impl Debug for ImageErrors {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::IoError(err) => {
                writeln!(f, "I/O error: {err}")
            }
            Self::DecodeErrors(err) => {
                writeln!(f, "Decoding failed: {err:?}")
            }
            Self::EncodeErrors(err) => {
                writeln!(f, "Encoding failed: {err:?}")
            }
            Self::OperationsError(err) => {
                writeln!(f, "{err:?}")
            }
            Self::DimensionsMisMatch(expected, found) => {
                writeln!(
                    f,
                    "Dimensions mismatch, expected {expected} pixels but found {found}"
                )
            }
            Self::UnsupportedKind(kind) => {
                writeln!(f, "Image kind {kind:?} ({kind}) is not supported")
            }
            Self::ThreadError(reason) => {
                writeln!(f, "Worker thread failed: {reason}")
            }
            Self::GenericStr(reason) => {
                writeln!(f, "{reason}")
            }
        }
    }
}

impl Debug for ImageOperationsErrors {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NotGreyscale(kind) => {
                writeln!(
                    f,
                    "Image kind {kind:?} is not greyscale, convert it to greyscale first"
                )
            }
            Self::BadKernelSize(width, height) => {
                writeln!(
                    f,
                    "Kernel dimensions must be odd, found {width}x{height}"
                )
            }
            Self::OutOfBounds {
                x,
                y,
                width,
                height
            } => {
                writeln!(
                    f,
                    "Kernel centered at ({x},{y}) does not fit in a {width}x{height} buffer"
                )
            }
            Self::InvalidThreadCount(found, max) => {
                writeln!(
                    f,
                    "Invalid thread count {found}, expected a value between 1 and {max}"
                )
            }
            Self::KernelLengthMismatch(expected, found) => {
                writeln!(f, "Expected {expected} kernel weights but found {found}")
            }
            Self::UnsupportedKind(operation, kind) => {
                writeln!(
                    f,
                    "Operation {operation} does not support image kind {kind:?} ({kind})"
                )
            }
        }
    }
}

impl Display for ImageErrors {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{self:?}")
    }
}

impl Display for ImageOperationsErrors {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{self:?}")
    }
}

impl std::error::Error for ImageErrors {}

impl std::error::Error for ImageOperationsErrors {}

impl From<std::io::Error> for ImageErrors {
    fn from(value: std::io::Error) -> Self {
        Self::IoError(value)
    }
}

impl From<NetPbmDecodeErrors> for ImageErrors {
    fn from(value: NetPbmDecodeErrors) -> Self {
        Self::DecodeErrors(value)
    }
}

impl From<NetPbmEncodeErrors> for ImageErrors {
    fn from(value: NetPbmEncodeErrors) -> Self {
        Self::EncodeErrors(value)
    }
}

impl From<ImageOperationsErrors> for ImageErrors {
    fn from(value: ImageOperationsErrors) -> Self {
        Self::OperationsError(value)
    }
}
