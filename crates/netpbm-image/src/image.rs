/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! This module represents a single image
//!
//! An image is a row-major buffer of `width * height`
//! `u32` pixels together with the NetPBM kind it was read as
//! and its declared maxval.
//!
//! For bitmaps and greymaps every pixel is a single intensity,
//! for pixmaps the three channels are packed into the slot
//! as described in [`netpbm_core::pixel`].
use log::trace;
use netpbm_core::kind::NetPbmKind;

use crate::errors::ImageErrors;

/// Represents a single image
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Image {
    kind:   NetPbmKind,
    maxval: u32,
    width:  usize,
    height: usize,
    pixels: Vec<u32>
}

/// Format metadata of an image, without its pixels
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct ImageHeader {
    pub kind:   NetPbmKind,
    pub width:  usize,
    pub height: usize,
    pub maxval: u32
}

impl Image {
    /// Create a new image from its pixels
    ///
    /// # Errors
    /// - [`ImageErrors::DimensionsMisMatch`] if `pixels.len() != width * height`
    /// - [`ImageErrors::UnsupportedKind`] for [`NetPbmKind::Pam`]
    pub fn new(
        kind: NetPbmKind, width: usize, height: usize, maxval: u32, pixels: Vec<u32>
    ) -> Result<Image, ImageErrors> {
        if !kind.is_supported() {
            return Err(ImageErrors::UnsupportedKind(kind));
        }
        let expected = width
            .checked_mul(height)
            .ok_or(ImageErrors::DimensionsMisMatch(usize::MAX, pixels.len()))?;

        if expected != pixels.len() {
            return Err(ImageErrors::DimensionsMisMatch(expected, pixels.len()));
        }
        Ok(Image {
            kind,
            maxval,
            width,
            height,
            pixels
        })
    }

    /// Create an image where every pixel has the same value
    ///
    /// # Errors
    /// Same as [`Image::new`]
    pub fn fill(
        value: u32, kind: NetPbmKind, width: usize, height: usize, maxval: u32
    ) -> Result<Image, ImageErrors> {
        let size = width
            .checked_mul(height)
            .ok_or(ImageErrors::DimensionsMisMatch(usize::MAX, 0))?;

        Image::new(kind, width, height, maxval, vec![value; size])
    }

    /// Get image dimensions as a tuple of (width,height)
    #[must_use]
    pub const fn dimensions(&self) -> (usize, usize) {
        (self.width, self.height)
    }

    #[must_use]
    pub const fn width(&self) -> usize {
        self.width
    }

    #[must_use]
    pub const fn height(&self) -> usize {
        self.height
    }

    /// The kind this image will be written as
    #[must_use]
    pub const fn kind(&self) -> NetPbmKind {
        self.kind
    }

    /// Declared maximum intensity, 1 for bitmaps
    #[must_use]
    pub const fn maxval(&self) -> u32 {
        self.maxval
    }

    /// Return true if every pixel carries a single intensity
    #[must_use]
    pub const fn is_greyscale(&self) -> bool {
        self.kind.is_single_channel()
    }

    /// Format metadata of this image
    #[must_use]
    pub const fn header(&self) -> ImageHeader {
        ImageHeader {
            kind:   self.kind,
            width:  self.width,
            height: self.height,
            maxval: self.maxval
        }
    }

    /// Pixels in row-major order
    #[must_use]
    pub fn pixels(&self) -> &[u32] {
        &self.pixels
    }

    /// Mutable access to the pixels
    ///
    /// The length is fixed by the dimensions, only values can change
    pub fn pixels_mut(&mut self) -> &mut [u32] {
        &mut self.pixels
    }

    /// Change the kind this image is stored as
    ///
    /// The caller is responsible for the pixels matching the new
    /// kind's layout, e.g. collapsing pixmap channels before setting a
    /// greymap kind.
    ///
    /// # Errors
    /// [`ImageErrors::UnsupportedKind`] for [`NetPbmKind::Pam`]
    pub fn set_kind(&mut self, kind: NetPbmKind) -> Result<(), ImageErrors> {
        if !kind.is_supported() {
            return Err(ImageErrors::UnsupportedKind(kind));
        }
        self.kind = kind;
        Ok(())
    }

    /// Release the pixel buffer
    ///
    /// The image is consumed and cannot be used afterwards.
    pub fn release(self) {
        trace!(
            "Releasing {}x{} {} image",
            self.width,
            self.height,
            self.kind
        );
        drop(self.pixels);
    }
}

#[cfg(test)]
mod tests {
    use netpbm_core::kind::NetPbmKind;

    use crate::errors::ImageErrors;
    use crate::image::Image;

    #[test]
    fn pixel_count_must_match_dimensions() {
        let err = Image::new(NetPbmKind::BinaryGreymap, 3, 2, 255, vec![0; 5]).unwrap_err();
        assert!(matches!(err, ImageErrors::DimensionsMisMatch(6, 5)));

        let image = Image::new(NetPbmKind::BinaryGreymap, 3, 2, 255, vec![0; 6]).unwrap();
        assert_eq!(image.dimensions(), (3, 2));
        assert_eq!(image.pixels().len(), 6);
    }

    #[test]
    fn pam_images_cannot_be_created() {
        assert!(matches!(
            Image::fill(0, NetPbmKind::Pam, 1, 1, 255),
            Err(ImageErrors::UnsupportedKind(NetPbmKind::Pam))
        ));

        let mut image = Image::fill(0, NetPbmKind::AsciiPixmap, 1, 1, 255).unwrap();
        assert!(image.set_kind(NetPbmKind::Pam).is_err());
        assert_eq!(image.kind(), NetPbmKind::AsciiPixmap);
    }

    #[test]
    fn header_reflects_image() {
        let image = Image::fill(3, NetPbmKind::AsciiGreymap, 4, 5, 15).unwrap();
        let header = image.header();

        assert_eq!(header.kind, NetPbmKind::AsciiGreymap);
        assert_eq!((header.width, header.height), (4, 5));
        assert_eq!(header.maxval, 15);
        assert!(image.is_greyscale());
        image.release();
    }
}
