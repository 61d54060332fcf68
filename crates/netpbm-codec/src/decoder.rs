/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

use log::{info, warn};
use netpbm_core::bytestream::ZByteReader;
use netpbm_core::kind::NetPbmKind;
use netpbm_core::options::DecoderOptions;
use netpbm_core::pixel::pack_rgb;

use crate::errors::NetPbmDecodeErrors;

/// Largest maxval allowed in strict mode for kinds whose
/// samples are stored in 8 bits
const MAX_8_BIT_MAXVAL: u32 = 255;

/// Value stored for a set bit of a binary bitmap
const BITMAP_SET: u32 = 255;

/// An instance of a NetPBM decoder
///
/// The decoder can decode `P1` to `P6`, `P7` is reported as unsupported
pub struct NetPbmDecoder<'a> {
    width:           usize,
    height:          usize,
    maxval:          u32,
    kind:            NetPbmKind,
    decoded_headers: bool,
    reader:          ZByteReader<'a>,
    options:         DecoderOptions
}

impl<'a> NetPbmDecoder<'a> {
    /// Create a new decoder with default options
    ///
    /// # Arguments
    /// - data: NetPBM encoded bytes
    ///
    /// # Example
    /// ```
    /// use netpbm_codec::NetPbmDecoder;
    /// let mut decoder = NetPbmDecoder::new(b"NOT VALID PPM");
    ///
    /// assert!(decoder.decode().is_err());
    /// ```
    #[must_use]
    pub fn new(data: &'a [u8]) -> NetPbmDecoder<'a> {
        NetPbmDecoder::new_with_options(DecoderOptions::default(), data)
    }

    /// Create a new decoder with the specified options
    ///
    /// # Arguments
    /// - options: Modified options for the decoder
    /// - data: NetPBM encoded bytes
    #[must_use]
    pub fn new_with_options(options: DecoderOptions, data: &'a [u8]) -> NetPbmDecoder<'a> {
        NetPbmDecoder {
            width: 0,
            height: 0,
            maxval: 0,
            kind: NetPbmKind::AsciiBitmap,
            decoded_headers: false,
            reader: ZByteReader::new(data),
            options
        }
    }

    /// Read the magic bytes, dimensions and maxval and store them
    /// in internal state
    ///
    /// After this returns, the reader points at the first payload byte.
    ///
    /// # Errors
    /// Bad magic bytes, an unsupported kind, malformed numbers, limits
    /// exceeded or a truncated header
    pub fn decode_headers(&mut self) -> Result<(), NetPbmDecodeErrors> {
        if self.decoded_headers {
            return Ok(());
        }
        let [p, digit] = self.reader.read_fixed_bytes_or_error::<2>()?;

        if p != b'P' {
            return Err(NetPbmDecodeErrors::BadMagic(p, digit));
        }
        let kind =
            NetPbmKind::from_magic_digit(digit).ok_or(NetPbmDecodeErrors::BadMagic(p, digit))?;

        if !kind.is_supported() {
            return Err(NetPbmDecodeErrors::Unsupported(kind));
        }
        info!("Kind: {kind:?} ({kind})");

        skip_spaces(&mut self.reader);
        let width = self.get_integer()? as usize;

        if width > self.options.get_max_width() {
            return Err(NetPbmDecodeErrors::LargeDimensions(
                self.options.get_max_width(),
                width
            ));
        }
        skip_spaces(&mut self.reader);
        let height = self.get_integer()? as usize;

        if height > self.options.get_max_height() {
            return Err(NetPbmDecodeErrors::LargeDimensions(
                self.options.get_max_height(),
                height
            ));
        }

        let maxval = if kind.has_maxval() {
            skip_spaces(&mut self.reader);
            let maxval = self.get_integer()?;
            self.check_maxval(kind, maxval)?;
            maxval
        } else {
            1
        };
        info!("Width: {width}, height: {height}, maxval: {maxval}");

        if kind.is_binary() {
            self.skip_payload_separator()?;
        } else {
            skip_spaces(&mut self.reader);
        }

        self.kind = kind;
        self.width = width;
        self.height = height;
        self.maxval = maxval;
        self.decoded_headers = true;

        Ok(())
    }

    /// Return the image kind or none if headers
    /// are not decoded
    #[must_use]
    pub const fn kind(&self) -> Option<NetPbmKind> {
        if self.decoded_headers {
            Some(self.kind)
        } else {
            None
        }
    }

    /// Return image dimensions as `(width, height)` or none if
    /// headers are not decoded
    #[must_use]
    pub const fn dimensions(&self) -> Option<(usize, usize)> {
        if self.decoded_headers {
            Some((self.width, self.height))
        } else {
            None
        }
    }

    /// Return the image maxval or none if headers are not decoded
    ///
    /// Bitmaps report their implicit maxval of 1
    #[must_use]
    pub const fn maxval(&self) -> Option<u32> {
        if self.decoded_headers {
            Some(self.maxval)
        } else {
            None
        }
    }

    /// Decode a NetPBM image and return its pixels, one `u32` per pixel
    /// in row-major order
    ///
    /// Pixmap channels are packed as described in [`netpbm_core::pixel`],
    /// set bits of a binary bitmap are returned as `255`.
    ///
    /// Nothing is returned on error, a partially decoded buffer
    /// is dropped.
    ///
    /// # Errors
    /// See [`NetPbmDecodeErrors`]
    pub fn decode(&mut self) -> Result<Vec<u32>, NetPbmDecodeErrors> {
        self.decode_headers()?;

        let size = self
            .width
            .checked_mul(self.height)
            .ok_or(NetPbmDecodeErrors::LargeDimensions(usize::MAX, self.width))?;

        // refuse to allocate for a payload the input cannot hold
        let needed = self.min_payload_bytes(size)?;
        let remaining = self.reader.remaining();

        if remaining < needed {
            return Err(NetPbmDecodeErrors::UnexpectedEof { needed, remaining });
        }
        let mut pixels = vec![0_u32; size];

        match self.kind {
            NetPbmKind::AsciiBitmap => self.decode_ascii_bitmap(&mut pixels)?,
            NetPbmKind::AsciiGreymap => self.decode_ascii_greymap(&mut pixels)?,
            NetPbmKind::AsciiPixmap => self.decode_ascii_pixmap(&mut pixels)?,
            NetPbmKind::BinaryBitmap => self.decode_binary_bitmap(&mut pixels)?,
            NetPbmKind::BinaryGreymap => self.decode_binary_greymap(&mut pixels)?,
            NetPbmKind::BinaryPixmap => self.decode_binary_pixmap(&mut pixels)?,
            NetPbmKind::Pam => return Err(NetPbmDecodeErrors::Unsupported(NetPbmKind::Pam))
        }
        self.check_trailing_bytes()?;

        Ok(pixels)
    }

    /// Smallest number of payload bytes that can hold `size` pixels
    ///
    /// Exact for binary kinds, a lower bound of one byte per
    /// sample for plain text kinds.
    fn min_payload_bytes(&self, size: usize) -> Result<usize, NetPbmDecodeErrors> {
        let overflow = NetPbmDecodeErrors::LargeDimensions(usize::MAX, size);

        match self.kind {
            NetPbmKind::BinaryBitmap => self
                .width
                .div_ceil(8)
                .checked_mul(self.height)
                .ok_or(overflow),
            NetPbmKind::AsciiPixmap | NetPbmKind::BinaryPixmap => {
                size.checked_mul(3).ok_or(overflow)
            }
            _ => Ok(size)
        }
    }

    fn check_maxval(&self, kind: NetPbmKind, maxval: u32) -> Result<(), NetPbmDecodeErrors> {
        let eight_bit_samples = kind.is_binary() || kind.is_pixmap();

        if maxval == 0 || (eight_bit_samples && maxval > MAX_8_BIT_MAXVAL) {
            if self.options.get_strict_mode() {
                return Err(NetPbmDecodeErrors::InvalidMaxval(kind, maxval));
            }
            warn!("Tolerating maxval {maxval} for {kind}, samples are kept in 8 bits");
        }
        Ok(())
    }

    /// Read an unsigned decimal number, leaving the first
    /// non-digit byte in the stream
    fn get_integer(&mut self) -> Result<u32, NetPbmDecodeErrors> {
        let start = self.reader.get_position();
        let mut value = 0_u32;

        while !self.reader.eof() {
            let byte = self.reader.get_u8();

            if byte.is_ascii_digit() {
                value = value
                    .checked_mul(10)
                    .and_then(|v| v.checked_add(u32::from(byte - b'0')))
                    .ok_or(NetPbmDecodeErrors::NumberOverflow { position: start })?;
            } else {
                // rewind to the previous byte
                self.reader.rewind(1);
                break;
            }
        }

        if self.reader.get_position() == start {
            return Err(match self.reader.peek_u8() {
                Some(byte) => NetPbmDecodeErrors::MalformedNumber {
                    position: start,
                    byte
                },
                None => NetPbmDecodeErrors::UnexpectedEof {
                    needed:    1,
                    remaining: 0
                }
            });
        }
        Ok(value)
    }

    /// Consume the single whitespace byte between the header and a
    /// binary payload.
    ///
    /// A comment may sit there instead, its closing newline then
    /// acts as the separator. A `\r\n` pair counts as one separator.
    fn skip_payload_separator(&mut self) -> Result<(), NetPbmDecodeErrors> {
        let position = self.reader.get_position();
        let byte = self.reader.get_u8_err()?;

        if byte == b'\r' && self.reader.peek_u8() == Some(b'\n') {
            self.reader.skip(1);
            return Ok(());
        }

        if byte == b'#' {
            let mut byte = byte;

            while byte != b'\n' {
                byte = self.reader.get_u8_err()?;
            }
            return Ok(());
        }
        if !byte.is_ascii_whitespace() {
            return Err(NetPbmDecodeErrors::MalformedNumber { position, byte });
        }
        Ok(())
    }

    /// Read one plain text sample and check it against maxval
    fn get_sample(&mut self) -> Result<u32, NetPbmDecodeErrors> {
        skip_spaces(&mut self.reader);

        let value = self.get_integer()?;

        if value > self.maxval {
            return Err(NetPbmDecodeErrors::ValueOutOfRange {
                value,
                maxval: self.maxval
            });
        }
        Ok(value)
    }

    fn check_binary_sample(&self, value: u8) -> Result<(), NetPbmDecodeErrors> {
        let value = u32::from(value);

        if self.options.get_strict_mode() && value > self.maxval {
            return Err(NetPbmDecodeErrors::ValueOutOfRange {
                value,
                maxval: self.maxval
            });
        }
        Ok(())
    }

    /// Each pixel is a single `0` or `1` digit, separators are optional
    fn decode_ascii_bitmap(&mut self, pixels: &mut [u32]) -> Result<(), NetPbmDecodeErrors> {
        for pixel in pixels.iter_mut() {
            skip_spaces(&mut self.reader);

            let position = self.reader.get_position();

            *pixel = match self.reader.get_u8_err()? {
                b'0' => 0,
                b'1' => 1,
                digit @ b'2'..=b'9' => {
                    return Err(NetPbmDecodeErrors::ValueOutOfRange {
                        value:  u32::from(digit - b'0'),
                        maxval: 1
                    })
                }
                byte => return Err(NetPbmDecodeErrors::MalformedNumber { position, byte })
            };
        }
        Ok(())
    }

    fn decode_ascii_greymap(&mut self, pixels: &mut [u32]) -> Result<(), NetPbmDecodeErrors> {
        for pixel in pixels.iter_mut() {
            *pixel = self.get_sample()?;
        }
        Ok(())
    }

    fn decode_ascii_pixmap(&mut self, pixels: &mut [u32]) -> Result<(), NetPbmDecodeErrors> {
        for pixel in pixels.iter_mut() {
            let r = self.get_sample()?;
            let g = self.get_sample()?;
            let b = self.get_sample()?;

            *pixel = pack_rgb((r & 0xff) as u8, (g & 0xff) as u8, (b & 0xff) as u8);
        }
        Ok(())
    }

    /// Bits are packed MSB first, every row starts on a fresh byte
    fn decode_binary_bitmap(&mut self, pixels: &mut [u32]) -> Result<(), NetPbmDecodeErrors> {
        if pixels.is_empty() {
            return Ok(());
        }
        let row_bytes = self.width.div_ceil(8);
        let data = self.reader.get_as_ref(row_bytes * self.height)?;

        for (row, bits) in pixels
            .chunks_exact_mut(self.width)
            .zip(data.chunks_exact(row_bytes))
        {
            for (x, pixel) in row.iter_mut().enumerate() {
                let bit = (bits[x / 8] >> (7 - (x % 8))) & 1;

                *pixel = if bit == 1 { BITMAP_SET } else { 0 };
            }
        }
        Ok(())
    }

    fn decode_binary_greymap(&mut self, pixels: &mut [u32]) -> Result<(), NetPbmDecodeErrors> {
        let data = self.reader.get_as_ref(pixels.len())?;

        for (pixel, byte) in pixels.iter_mut().zip(data) {
            self.check_binary_sample(*byte)?;
            *pixel = u32::from(*byte);
        }
        Ok(())
    }

    fn decode_binary_pixmap(&mut self, pixels: &mut [u32]) -> Result<(), NetPbmDecodeErrors> {
        let size = pixels
            .len()
            .checked_mul(3)
            .ok_or(NetPbmDecodeErrors::LargeDimensions(usize::MAX, pixels.len()))?;
        let data = self.reader.get_as_ref(size)?;

        for (pixel, rgb) in pixels.iter_mut().zip(data.chunks_exact(3)) {
            for sample in rgb {
                self.check_binary_sample(*sample)?;
            }
            *pixel = pack_rgb(rgb[0], rgb[1], rgb[2]);
        }
        Ok(())
    }

    /// Whitespace and comments after the payload are always fine,
    /// anything else only fails if the options ask for it
    fn check_trailing_bytes(&mut self) -> Result<(), NetPbmDecodeErrors> {
        skip_spaces(&mut self.reader);

        let remaining = self.reader.remaining();

        if remaining != 0 {
            if self.options.get_reject_trailing_data() {
                return Err(NetPbmDecodeErrors::TrailingData(remaining));
            }
            warn!("Ignoring {remaining} bytes after the image payload");
        }
        Ok(())
    }
}

/// Skip all whitespace characters and comments
/// until one hits a character that isn't a space or
/// we reach eof
fn skip_spaces(byte_stream: &mut ZByteReader) {
    while !byte_stream.eof() {
        let mut byte = byte_stream.get_u8();

        if byte == b'#' {
            // comment
            // skip the whole comment
            while byte != b'\n' && !byte_stream.eof() {
                byte = byte_stream.get_u8();
            }
        } else if !byte.is_ascii_whitespace() {
            // go back one step, we hit something that is not a space
            byte_stream.rewind(1);
            break;
        }
    }
}
