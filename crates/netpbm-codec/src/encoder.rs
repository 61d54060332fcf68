/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

use std::io::Write;

use log::trace;
use netpbm_core::bytestream::ZByteWriter;
use netpbm_core::kind::NetPbmKind;
use netpbm_core::options::EncoderOptions;
use netpbm_core::pixel::unpack_rgb;

use crate::errors::NetPbmEncodeErrors;

/// A NetPBM encoder
///
/// Writes pixels laid out the way [`NetPbmDecoder`](crate::NetPbmDecoder)
/// returns them, in the kind named by the options.
///
/// # Example
/// ```
/// use netpbm_codec::NetPbmEncoder;
/// use netpbm_core::kind::NetPbmKind;
/// use netpbm_core::options::EncoderOptions;
///
/// let options = EncoderOptions::new(2, 1, NetPbmKind::AsciiGreymap, 255);
/// let bytes = NetPbmEncoder::new(&[0, 128], options).encode_to_vec().unwrap();
///
/// assert_eq!(bytes, b"P2\n2\n1\n255\n0 128 ");
/// ```
pub struct NetPbmEncoder<'a> {
    data:    &'a [u32],
    options: EncoderOptions
}

impl<'a> NetPbmEncoder<'a> {
    /// Create a new encoder which will encode the specified
    /// pixels whose shape is contained in the options.
    #[must_use]
    pub fn new(data: &'a [u32], options: EncoderOptions) -> NetPbmEncoder<'a> {
        NetPbmEncoder { data, options }
    }

    fn encode_headers<W: Write>(
        &self, stream: &mut ZByteWriter<W>
    ) -> Result<(), NetPbmEncodeErrors> {
        let kind = self.options.get_kind();
        let width = header_dimension(self.options.get_width())?;
        let height = header_dimension(self.options.get_height())?;

        stream.write_all(&kind.magic())?;
        stream.write_u8(b'\n')?;
        stream.write_decimal(width)?;
        stream.write_u8(b'\n')?;
        stream.write_decimal(height)?;
        stream.write_u8(b'\n')?;

        if kind.has_maxval() {
            stream.write_decimal(self.options.get_maxval())?;
            stream.write_u8(b'\n')?;
        }
        Ok(())
    }

    /// Encode into `sink`, returning the number of bytes written
    ///
    /// The sink is flushed before returning.
    ///
    /// # Errors
    /// An unsupported kind, a pixel count that does not match the
    /// dimensions, or a failing sink
    pub fn encode<W: Write>(&self, sink: W) -> Result<usize, NetPbmEncodeErrors> {
        let kind = self.options.get_kind();

        if !kind.is_supported() {
            return Err(NetPbmEncodeErrors::Unsupported(kind));
        }
        let expected = self
            .options
            .get_width()
            .checked_mul(self.options.get_height())
            .ok_or(NetPbmEncodeErrors::TooLargeDimensions(self.options.get_width()))?;

        if expected != self.data.len() {
            return Err(NetPbmEncodeErrors::LengthMismatch(expected, self.data.len()));
        }
        let mut stream = ZByteWriter::new(sink);

        self.encode_headers(&mut stream)?;

        match kind {
            NetPbmKind::AsciiBitmap | NetPbmKind::AsciiGreymap => {
                self.encode_ascii_single_channel(&mut stream)?;
            }
            NetPbmKind::AsciiPixmap => self.encode_ascii_pixmap(&mut stream)?,
            NetPbmKind::BinaryBitmap => self.encode_binary_bitmap(&mut stream)?,
            NetPbmKind::BinaryGreymap => self.encode_binary_greymap(&mut stream)?,
            NetPbmKind::BinaryPixmap => self.encode_binary_pixmap(&mut stream)?,
            NetPbmKind::Pam => return Err(NetPbmEncodeErrors::Unsupported(NetPbmKind::Pam))
        }
        stream.flush()?;

        trace!("Wrote {} bytes for {kind}", stream.bytes_written());

        Ok(stream.bytes_written())
    }

    /// Encode into a newly allocated vector
    ///
    /// # Errors
    /// See [`encode`](Self::encode)
    pub fn encode_to_vec(&self) -> Result<Vec<u8>, NetPbmEncodeErrors> {
        let mut out = Vec::with_capacity(calc_out_size(self.options));

        self.encode(&mut out)?;

        Ok(out)
    }

    /// Every value followed by a single space, no special terminator
    fn encode_ascii_single_channel<W: Write>(
        &self, stream: &mut ZByteWriter<W>
    ) -> Result<(), NetPbmEncodeErrors> {
        for pixel in self.data {
            stream.write_decimal(*pixel)?;
            stream.write_u8(b' ')?;
        }
        Ok(())
    }

    /// `r g b\n` per pixel
    fn encode_ascii_pixmap<W: Write>(
        &self, stream: &mut ZByteWriter<W>
    ) -> Result<(), NetPbmEncodeErrors> {
        for pixel in self.data {
            let [r, g, b] = unpack_rgb(*pixel);

            stream.write_decimal(u32::from(r))?;
            stream.write_u8(b' ')?;
            stream.write_decimal(u32::from(g))?;
            stream.write_u8(b' ')?;
            stream.write_decimal(u32::from(b))?;
            stream.write_u8(b'\n')?;
        }
        Ok(())
    }

    /// 8 pixels per byte MSB first, each row starts a new byte and
    /// unused low bits are zero
    fn encode_binary_bitmap<W: Write>(
        &self, stream: &mut ZByteWriter<W>
    ) -> Result<(), NetPbmEncodeErrors> {
        let width = self.options.get_width();

        if width == 0 {
            return Ok(());
        }
        for row in self.data.chunks_exact(width) {
            for pixels in row.chunks(8) {
                let byte = pixels
                    .iter()
                    .enumerate()
                    .filter(|(_, pixel)| **pixel != 0)
                    .fold(0_u8, |byte, (bit, _)| byte | (1 << (7 - bit)));

                stream.write_u8(byte)?;
            }
        }
        Ok(())
    }

    fn encode_binary_greymap<W: Write>(
        &self, stream: &mut ZByteWriter<W>
    ) -> Result<(), NetPbmEncodeErrors> {
        let bytes: Vec<u8> = self.data.iter().map(|pixel| (pixel & 0xff) as u8).collect();

        stream.write_all(&bytes)?;
        Ok(())
    }

    fn encode_binary_pixmap<W: Write>(
        &self, stream: &mut ZByteWriter<W>
    ) -> Result<(), NetPbmEncodeErrors> {
        let bytes: Vec<u8> = self
            .data
            .iter()
            .flat_map(|pixel| unpack_rgb(*pixel))
            .collect();

        stream.write_all(&bytes)?;
        Ok(())
    }
}

fn header_dimension(value: usize) -> Result<u32, NetPbmEncodeErrors> {
    u32::try_from(value).map_err(|_| NetPbmEncodeErrors::TooLargeDimensions(value))
}

/// Longest possible header: `P?`, three numbers of at most
/// ten digits and four newlines
const NETPBM_HEADER_SIZE: usize = 40;

/// Size hint for the encoded image, exact for binary kinds
fn calc_out_size(options: EncoderOptions) -> usize {
    let width = options.get_width();
    let height = options.get_height();

    let payload = match options.get_kind() {
        NetPbmKind::BinaryBitmap => width.div_ceil(8).saturating_mul(height),
        NetPbmKind::BinaryGreymap => width.saturating_mul(height),
        NetPbmKind::BinaryPixmap => width.saturating_mul(height).saturating_mul(3),
        // a guess, plain text samples are variable length
        NetPbmKind::AsciiBitmap | NetPbmKind::AsciiGreymap => {
            width.saturating_mul(height).saturating_mul(2)
        }
        NetPbmKind::AsciiPixmap => width.saturating_mul(height).saturating_mul(12),
        NetPbmKind::Pam => 0
    };
    payload.saturating_add(NETPBM_HEADER_SIZE)
}
