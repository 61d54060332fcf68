/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! Global decoder and encoder options

use crate::kind::NetPbmKind;

/// Decoder options
///
/// Options are passed by value and set through builder style
/// methods, e.g.
///
/// ```
/// use netpbm_core::options::DecoderOptions;
///
/// let options = DecoderOptions::default()
///     .set_max_width(1 << 12)
///     .set_strict_mode(false);
///
/// assert_eq!(options.get_max_width(), 4096);
/// assert!(!options.get_strict_mode());
/// assert!(!options.get_reject_trailing_data());
/// ```
#[derive(Debug, Copy, Clone)]
pub struct DecoderOptions {
    /// Maximum width for which decoders will
    /// not try to decode images larger than
    /// the specified width.
    ///
    /// - Default value: 16384
    max_width:            usize,
    /// Maximum height for which decoders will not
    /// try to decode images larger than the
    /// specified height
    ///
    /// - Default value: 16384
    max_height:           usize,
    /// Reject inputs that the reference reader tolerates
    ///
    /// In strict mode the decoder rejects
    /// - a maxval of zero
    /// - a maxval above 255 for kinds whose samples live in 8 bits
    /// - binary samples above the declared maxval
    ///
    /// - Default value: true
    strict:               bool,
    /// Reject anything but whitespace and comments after the payload
    ///
    /// - Default value: false
    reject_trailing_data: bool
}

impl Default for DecoderOptions {
    fn default() -> Self {
        DecoderOptions {
            max_width:            1 << 14,
            max_height:           1 << 14,
            strict:               true,
            reject_trailing_data: false
        }
    }
}

impl DecoderOptions {
    /// Get maximum width configured for which the decoder
    /// should not try to decode images greater than this width
    #[must_use]
    pub const fn get_max_width(&self) -> usize {
        self.max_width
    }

    /// Get maximum height configured for which the decoder should
    /// not try to decode images greater than this height
    #[must_use]
    pub const fn get_max_height(&self) -> usize {
        self.max_height
    }

    /// Return true whether the decoder should be in strict mode
    #[must_use]
    pub const fn get_strict_mode(&self) -> bool {
        self.strict
    }

    /// Return true if bytes after the payload are an error
    #[must_use]
    pub const fn get_reject_trailing_data(&self) -> bool {
        self.reject_trailing_data
    }

    /// Set maximum width for which the decoder should not try
    /// decoding images greater than that width
    #[must_use]
    pub fn set_max_width(mut self, width: usize) -> Self {
        self.max_width = width;
        self
    }

    /// Set maximum height for which the decoder should not try
    /// decoding images greater than that height
    #[must_use]
    pub fn set_max_height(mut self, height: usize) -> Self {
        self.max_height = height;
        self
    }

    /// Set whether the decoder should be in standards conforming/
    /// strict mode
    #[must_use]
    pub fn set_strict_mode(mut self, yes: bool) -> Self {
        self.strict = yes;
        self
    }

    /// Set whether bytes after the payload, other than whitespace
    /// and comments, fail the decode
    ///
    /// When unset they are ignored with a warning
    #[must_use]
    pub fn set_reject_trailing_data(mut self, yes: bool) -> Self {
        self.reject_trailing_data = yes;
        self
    }
}

/// Encoder options
///
/// Describes the image handed to an encoder
#[derive(Debug, Copy, Clone)]
pub struct EncoderOptions {
    width:  usize,
    height: usize,
    kind:   NetPbmKind,
    maxval: u32
}

impl EncoderOptions {
    /// Create options for an image of the given shape
    ///
    /// Bitmaps ignore `maxval`, their header does not carry one
    #[must_use]
    pub const fn new(width: usize, height: usize, kind: NetPbmKind, maxval: u32) -> EncoderOptions {
        EncoderOptions {
            width,
            height,
            kind,
            maxval
        }
    }

    #[must_use]
    pub const fn get_width(&self) -> usize {
        self.width
    }

    #[must_use]
    pub const fn get_height(&self) -> usize {
        self.height
    }

    #[must_use]
    pub const fn get_kind(&self) -> NetPbmKind {
        self.kind
    }

    #[must_use]
    pub const fn get_maxval(&self) -> u32 {
        self.maxval
    }

    /// Set the kind the image is written as
    #[must_use]
    pub fn set_kind(mut self, kind: NetPbmKind) -> Self {
        self.kind = kind;
        self
    }

    #[must_use]
    pub fn set_maxval(mut self, maxval: u32) -> Self {
        self.maxval = maxval;
        self
    }
}
