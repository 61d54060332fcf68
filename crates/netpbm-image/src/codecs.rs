/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! Reading and writing images
//!
//! Glue between [`Image`] and the decoder and encoder in
//! `netpbm-codec`, for in-memory buffers and for files.
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use log::info;
use netpbm_codec::{NetPbmDecoder, NetPbmEncoder};
use netpbm_core::options::{DecoderOptions, EncoderOptions};

use crate::errors::ImageErrors;
use crate::image::Image;

impl Image {
    /// Decode an image from NetPBM encoded bytes
    ///
    /// # Errors
    /// Any decoding error, no image is returned on failure
    pub fn read(data: &[u8], options: DecoderOptions) -> Result<Image, ImageErrors> {
        let mut decoder = NetPbmDecoder::new_with_options(options, data);
        let pixels = decoder.decode()?;

        let (Some(kind), Some((width, height)), Some(maxval)) =
            (decoder.kind(), decoder.dimensions(), decoder.maxval())
        else {
            return Err(ImageErrors::GenericStr("Headers missing after decoding"));
        };

        Image::new(kind, width, height, maxval, pixels)
    }

    /// Open and decode the file at `path` with default options
    ///
    /// # Errors
    /// - [`ImageErrors::IoError`] if the file cannot be read
    /// - Any decoding error
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Image, ImageErrors> {
        Image::open_with_options(path, DecoderOptions::default())
    }

    /// Open and decode the file at `path`
    ///
    /// # Errors
    /// - [`ImageErrors::IoError`] if the file cannot be read
    /// - Any decoding error
    pub fn open_with_options<P: AsRef<Path>>(
        path: P, options: DecoderOptions
    ) -> Result<Image, ImageErrors> {
        let path = path.as_ref();
        let data = std::fs::read(path)?;

        info!("Read {} bytes from {}", data.len(), path.display());

        Image::read(&data, options)
    }

    fn encoder_options(&self) -> EncoderOptions {
        EncoderOptions::new(self.width(), self.height(), self.kind(), self.maxval())
    }

    /// Encode the image into `sink` in its own kind, returning the
    /// number of bytes written
    ///
    /// # Errors
    /// Any encoding error
    pub fn encode<W: Write>(&self, sink: W) -> Result<usize, ImageErrors> {
        let encoder = NetPbmEncoder::new(self.pixels(), self.encoder_options());

        Ok(encoder.encode(sink)?)
    }

    /// Encode the image into a newly allocated vector
    ///
    /// # Errors
    /// Any encoding error
    pub fn write_to_vec(&self) -> Result<Vec<u8>, ImageErrors> {
        let encoder = NetPbmEncoder::new(self.pixels(), self.encoder_options());

        Ok(encoder.encode_to_vec()?)
    }

    /// Encode the image and write it to `path`, replacing any existing file
    ///
    /// # Errors
    /// - [`ImageErrors::IoError`] if the file cannot be created
    /// - Any encoding error
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<(), ImageErrors> {
        let path = path.as_ref();
        let file = File::create(path)?;

        let written = self.encode(BufWriter::new(file))?;

        info!("Wrote {written} bytes to {}", path.display());

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use netpbm_core::kind::NetPbmKind;
    use netpbm_core::options::DecoderOptions;

    use crate::errors::ImageErrors;
    use crate::image::Image;

    #[test]
    fn read_ascii_greymap() {
        let image = Image::read(b"P2\n2 2\n255\n0 128 255 64\n", DecoderOptions::default()).unwrap();

        assert_eq!(image.kind(), NetPbmKind::AsciiGreymap);
        assert_eq!(image.dimensions(), (2, 2));
        assert_eq!(image.maxval(), 255);
        assert_eq!(image.pixels(), &[0, 128, 255, 64]);
    }

    #[test]
    fn decode_errors_are_format_errors() {
        let err = Image::read(b"P9", DecoderOptions::default()).unwrap_err();
        assert!(matches!(err, ImageErrors::DecodeErrors(_)));
    }

    #[test]
    fn missing_file_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = Image::open(dir.path().join("missing.pgm")).unwrap_err();

        assert!(matches!(err, ImageErrors::IoError(_)));
    }

    #[test]
    fn save_then_open() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.ppm");

        let image = Image::new(
            NetPbmKind::BinaryPixmap,
            2,
            1,
            255,
            vec![0x0003_0201, 0x00ff_00ff]
        )
        .unwrap();
        image.save(&path).unwrap();

        assert_eq!(
            std::fs::read(&path).unwrap(),
            b"P6\n2\n1\n255\n\x01\x02\x03\xff\x00\xff"
        );
        assert_eq!(Image::open(&path).unwrap(), image);
    }
}
