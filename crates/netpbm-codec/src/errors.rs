/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! Errors possible during decoding and encoding
use core::fmt::{Debug, Display, Formatter};

use netpbm_core::bytestream::ByteIoError;
use netpbm_core::kind::NetPbmKind;

/// Possible errors that may occur during decoding
pub enum NetPbmDecodeErrors {
    /// The image does not start with `P` followed by a digit in `1..=7`
    ///
    /// Carries the two bytes found
    BadMagic(u8, u8),
    /// The kind is recognized but cannot be decoded
    Unsupported(NetPbmKind),
    /// The stream ended before the header or payload was complete
    UnexpectedEof {
        /// bytes the decoder needed
        needed:    usize,
        /// bytes that were left
        remaining: usize
    },
    /// A byte that is neither a digit nor allowed at this point
    MalformedNumber {
        position: usize,
        byte:     u8
    },
    /// A decimal token does not fit in 32 bits
    NumberOverflow { position: usize },
    /// A pixel sample is larger than the declared maxval
    ValueOutOfRange { value: u32, maxval: u32 },
    /// The declared maxval cannot be represented for this kind
    InvalidMaxval(NetPbmKind, u32),
    /// Too large dimensions
    ///
    /// # Arguments
    /// - limit: configured maximum
    /// - found: value in the header
    LargeDimensions(usize, usize),
    /// Bytes other than whitespace left over after the payload,
    /// only raised when trailing data is rejected
    TrailingData(usize)
}

impl Debug for NetPbmDecodeErrors {
    fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::BadMagic(first, second) => {
                writeln!(
                    f,
                    "Bad magic bytes {:?}, expected `P` followed by a digit between 1 and 7",
                    [*first as char, *second as char]
                )
            }
            Self::Unsupported(kind) => {
                writeln!(f, "Unsupported image kind {kind:?} ({kind})")
            }
            Self::UnexpectedEof { needed, remaining } => {
                writeln!(
                    f,
                    "Unexpected end of stream, needed {needed} bytes but only {remaining} remain"
                )
            }
            Self::MalformedNumber { position, byte } => {
                writeln!(
                    f,
                    "Malformed number, unexpected byte {:?} at position {position}",
                    *byte as char
                )
            }
            Self::NumberOverflow { position } => {
                writeln!(f, "Number starting at position {position} overflows 32 bits")
            }
            Self::ValueOutOfRange { value, maxval } => {
                writeln!(f, "Pixel value {value} exceeds maxval {maxval}")
            }
            Self::InvalidMaxval(kind, maxval) => {
                writeln!(f, "Invalid maxval {maxval} for image kind {kind}")
            }
            Self::LargeDimensions(expected, found) => {
                writeln!(
                    f,
                    "Too large dimensions, expected a value less than {expected} but found {found}"
                )
            }
            Self::TrailingData(size) => {
                writeln!(f, "Found {size} unexpected bytes after the image payload")
            }
        }
    }
}

impl Display for NetPbmDecodeErrors {
    fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
        write!(f, "{self:?}")
    }
}

impl std::error::Error for NetPbmDecodeErrors {}

impl From<ByteIoError> for NetPbmDecodeErrors {
    fn from(value: ByteIoError) -> Self {
        match value {
            ByteIoError::NotEnoughBytes(needed, remaining) => {
                Self::UnexpectedEof { needed, remaining }
            }
            // in-memory reads fail only on exhausted input
            _ => Self::UnexpectedEof {
                needed:    1,
                remaining: 0
            }
        }
    }
}

/// Errors occurring during encoding
pub enum NetPbmEncodeErrors {
    /// The kind cannot be encoded
    Unsupported(NetPbmKind),
    /// Number of pixels does not match width * height
    ///
    /// # Arguments
    /// - expected length
    /// - found length
    LengthMismatch(usize, usize),
    /// A dimension does not fit in the decimal header field
    TooLargeDimensions(usize),
    IoErrors(ByteIoError)
}

impl Debug for NetPbmEncodeErrors {
    fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::Unsupported(kind) => {
                writeln!(f, "Cannot encode image kind {kind:?} ({kind})")
            }
            Self::LengthMismatch(expected, found) => {
                writeln!(f, "Expected {expected} pixels but found {found}")
            }
            Self::TooLargeDimensions(found) => {
                writeln!(
                    f,
                    "Too large image dimension {found}, can only encode values up to {}",
                    u32::MAX
                )
            }
            Self::IoErrors(err) => {
                writeln!(f, "I/O error {err:?}")
            }
        }
    }
}

impl Display for NetPbmEncodeErrors {
    fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
        write!(f, "{self:?}")
    }
}

impl std::error::Error for NetPbmEncodeErrors {}

impl From<ByteIoError> for NetPbmEncodeErrors {
    fn from(value: ByteIoError) -> Self {
        Self::IoErrors(value)
    }
}
