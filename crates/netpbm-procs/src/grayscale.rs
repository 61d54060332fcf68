/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */


//! Convert color images to greyscale
use log::trace;
use netpbm_core::kind::NetPbmKind;
use netpbm_core::pixel::unpack_rgb;
use netpbm_image::errors::ImageErrors;
use netpbm_image::image::Image;
use netpbm_image::traits::OperationsTrait;

/// Convert a pixmap image to a greymap image
///
/// Each pixel becomes `round(0.21 R + 0.72 G + 0.07 B)`, clamped to
/// the image maxval, and the kind is demoted to the greymap of
/// the same encoding, i.e. P3 becomes P2 and P6 becomes P5.
///
/// Bitmaps and greymaps are already single channel and are left untouched.
#[derive(Default, Copy, Clone)]
pub struct Grayscale;

impl Grayscale {
    #[must_use]
    pub fn new() -> Grayscale {
        Self
    }
}

impl OperationsTrait for Grayscale {
    fn name(&self) -> &'static str {
        "Grayscale"
    }

    fn execute_impl(&self, image: &mut Image) -> Result<(), ImageErrors> {
        if image.is_greyscale() {
            trace!("Image is already greyscale, nothing to do");
            return Ok(());
        }
        let maxval = image.maxval();

        for pixel in image.pixels_mut() {
            *pixel = luma(*pixel, maxval);
        }
        image.set_kind(image.kind().to_greymap())?;

        Ok(())
    }

    fn supported_kinds(&self) -> &'static [NetPbmKind] {
        &NetPbmKind::SUPPORTED
    }
}

/// Luminosity of a packed RGB pixel
fn luma(pixel: u32, maxval: u32) -> u32 {
    let [r, g, b] = unpack_rgb(pixel);

    let value = 0.21 * f32::from(r) + 0.72 * f32::from(g) + 0.07 * f32::from(b);

    (value.round() as u32).min(maxval)
}

#[cfg(test)]
mod tests {
    use netpbm_core::kind::NetPbmKind;
    use netpbm_core::pixel::pack_rgb;
    use netpbm_image::image::Image;
    use netpbm_image::traits::OperationsTrait;

    use crate::grayscale::{luma, Grayscale};

    #[test]
    fn luma_rounds_to_nearest() {
        // 0.21*10 + 0.72*20 + 0.07*30 = 18.6
        assert_eq!(luma(pack_rgb(10, 20, 30), 255), 19);
        assert_eq!(luma(pack_rgb(255, 255, 255), 255), 255);
        assert_eq!(luma(pack_rgb(0, 0, 0), 255), 0);
        assert_eq!(luma(pack_rgb(0, 255, 0), 255), 184);
    }

    #[test]
    fn luma_is_clamped_to_maxval() {
        assert_eq!(luma(pack_rgb(200, 200, 200), 100), 100);
    }

    #[test]
    fn pixmaps_become_greymaps() {
        for (from, to) in [
            (NetPbmKind::AsciiPixmap, NetPbmKind::AsciiGreymap),
            (NetPbmKind::BinaryPixmap, NetPbmKind::BinaryGreymap)
        ] {
            let mut image = Image::new(
                from,
                2,
                1,
                255,
                vec![pack_rgb(10, 20, 30), pack_rgb(255, 0, 0)]
            )
            .unwrap();

            Grayscale::new().execute(&mut image).unwrap();

            assert_eq!(image.kind(), to);
            assert_eq!(image.pixels(), &[19, 54]);
        }
    }

    #[test]
    fn single_channel_images_are_untouched() {
        for kind in [
            NetPbmKind::AsciiBitmap,
            NetPbmKind::BinaryBitmap,
            NetPbmKind::AsciiGreymap,
            NetPbmKind::BinaryGreymap
        ] {
            let pixels = vec![0, 255, 255, 0x0001_0203];
            let mut image = Image::new(kind, 2, 2, 255, pixels.clone()).unwrap();

            Grayscale::new().execute(&mut image).unwrap();

            assert_eq!(image.kind(), kind);
            assert_eq!(image.pixels(), &pixels);
        }
    }

    #[test]
    fn conversion_is_idempotent() {
        let mut image = Image::new(
            NetPbmKind::BinaryPixmap,
            3,
            1,
            200,
            vec![pack_rgb(1, 2, 3), pack_rgb(250, 250, 250), pack_rgb(9, 99, 199)]
        )
        .unwrap();

        Grayscale::new().execute(&mut image).unwrap();
        let once = image.clone();
        Grayscale::new().execute(&mut image).unwrap();

        assert_eq!(image, once);
        assert!(image.pixels().iter().all(|x| *x <= 200));
    }
}
