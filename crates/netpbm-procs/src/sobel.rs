/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */


//! Sobel derivative filter
use log::trace;
use netpbm_core::kind::NetPbmKind;
use netpbm_image::errors::{ImageErrors, ImageOperationsErrors};
use netpbm_image::image::Image;
use netpbm_image::traits::OperationsTrait;

use crate::convolve::apply_kernel;
use crate::pad::{pad, PadMethod};

/// Largest number of worker threads a single run may use
pub const MAX_THREADS: usize = 1024;

/// Horizontal gradient
#[rustfmt::skip]
const GX: [i32; 9] = [
    -1, 0, 1,
    -2, 0, 2,
    -1, 0, 1
];

/// Vertical gradient
#[rustfmt::skip]
const GY: [i32; 9] = [
    -1, -2, -1,
     0,  0,  0,
     1,  2,  1
];

/// Options for the sobel filter
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct SobelOptions {
    threads:         usize,
    clamp_to_maxval: bool,
    pad_method:      PadMethod
}

impl Default for SobelOptions {
    fn default() -> Self {
        SobelOptions {
            threads:         1,
            clamp_to_maxval: false,
            pad_method:      PadMethod::Replicate
        }
    }
}

impl SobelOptions {
    /// Number of worker threads the gradient is computed on
    #[must_use]
    pub const fn get_threads(&self) -> usize {
        self.threads
    }

    /// Whether gradient magnitudes are clamped to the image maxval
    #[must_use]
    pub const fn get_clamp_to_maxval(&self) -> bool {
        self.clamp_to_maxval
    }

    /// How the image border is extended before convolving
    #[must_use]
    pub const fn get_pad_method(&self) -> PadMethod {
        self.pad_method
    }

    /// Set the number of worker threads
    ///
    /// Must be between 1 and [`MAX_THREADS`], this is checked when
    /// the filter runs.
    #[must_use]
    pub const fn set_threads(mut self, threads: usize) -> Self {
        self.threads = threads;
        self
    }

    /// Clamp gradient magnitudes to the image maxval
    ///
    /// Magnitudes can reach about `5.66 * maxval`, without
    /// clamping they are written out as is.
    #[must_use]
    pub const fn set_clamp_to_maxval(mut self, yes: bool) -> Self {
        self.clamp_to_maxval = yes;
        self
    }

    /// Set how the image border is extended
    #[must_use]
    pub const fn set_pad_method(mut self, method: PadMethod) -> Self {
        self.pad_method = method;
        self
    }
}

/// Perform a sobel image derivative.
///
/// This operation calculates the gradient of the image,
/// which represents how quickly pixel values change from
/// one point to another in both the horizontal and vertical directions.
/// Every pixel is replaced by the gradient magnitude
/// `round(sqrt(gx*gx + gy*gy))`.
///
/// The matrix for sobel is
///
/// Gx matrix
/// ```text
///   -1, 0, 1,
///   -2, 0, 2,
///   -1, 0, 1
/// ```
/// Gy matrix
/// ```text
/// -1,-2,-1,
///  0, 0, 0,
///  1, 2, 1
/// ```
///
/// The window is a 3x3 window, the image is padded by one pixel on each
/// side so border pixels have a full window.
///
/// Only greyscale images are accepted, use
/// [`Grayscale`](crate::grayscale::Grayscale) on pixmaps first.
#[derive(Default, Copy, Clone)]
pub struct Sobel {
    options: SobelOptions
}

impl Sobel {
    #[must_use]
    pub fn new(options: SobelOptions) -> Sobel {
        Sobel { options }
    }
}

impl OperationsTrait for Sobel {
    fn name(&self) -> &'static str {
        "Sobel"
    }

    fn execute_impl(&self, image: &mut Image) -> Result<(), ImageErrors> {
        if !image.is_greyscale() {
            return Err(ImageOperationsErrors::NotGreyscale(image.kind()).into());
        }
        let (width, height) = image.dimensions();
        let maxval = image.maxval();

        let mut out_pixels = vec![0; image.pixels().len()];

        sobel_u32(
            image.pixels(),
            &mut out_pixels,
            width,
            height,
            maxval,
            &self.options
        )?;

        image.pixels_mut().copy_from_slice(&out_pixels);

        Ok(())
    }

    fn supported_kinds(&self) -> &'static [NetPbmKind] {
        &NetPbmKind::SUPPORTED
    }
}

/// Gradient magnitude, saturating at `u32::MAX`
fn magnitude(gx: i64, gy: i64, clamp: Option<u32>) -> u32 {
    let (gx, gy) = (gx as f64, gy as f64);

    let value = (gx * gx + gy * gy).sqrt().round() as u32;

    match clamp {
        Some(maxval) => value.min(maxval),
        None => value
    }
}

/// Compute the magnitudes of output indices `start, start + step, ...`
fn sobel_strided(
    padded: &[u32], width: usize, height: usize, start: usize, step: usize, clamp: Option<u32>
) -> Result<Vec<u32>, ImageOperationsErrors> {
    let padded_w = width + 2;
    let padded_h = height + 2;

    (start..width * height)
        .step_by(step)
        .map(|index| {
            let (x, y) = (index % width, index / width);

            let gx = apply_kernel(padded, padded_w, padded_h, x + 1, y + 1, &GX, 3, 3)?;
            let gy = apply_kernel(padded, padded_w, padded_h, x + 1, y + 1, &GY, 3, 3)?;

            Ok(magnitude(gx, gy, clamp))
        })
        .collect()
}

/// Carry out the sobel filter for a single channel
///
/// Output index `i` is computed by worker `i % threads`, workers share
/// the padded input read-only and each returns its own values, which
/// are then scattered into `out_channel`. The result does not depend
/// on the thread count.
///
/// # Arguments
/// - in_channel: Input channel which contains image intensities
/// - out_channel: Output channel which we will fill with gradient magnitudes
/// - width: Width of input channel
/// - height: Height of input channel
/// - maxval: Clamp limit, used if the options ask for it
/// - options: Thread count, clamping and padding
///
/// # Errors
/// - [`ImageOperationsErrors::InvalidThreadCount`] if the thread count is 0
///   or above [`MAX_THREADS`]
/// - [`ImageErrors::DimensionsMisMatch`] if a channel does not hold
///   `width * height` values
/// - [`ImageErrors::ThreadError`] if a worker could not be spawned or panicked
pub fn sobel_u32(
    in_channel: &[u32], out_channel: &mut [u32], width: usize, height: usize, maxval: u32,
    options: &SobelOptions
) -> Result<(), ImageErrors> {
    let threads = options.get_threads();

    if threads == 0 || threads > MAX_THREADS {
        return Err(ImageOperationsErrors::InvalidThreadCount(threads, MAX_THREADS).into());
    }
    let total = width * height;

    for channel_len in [in_channel.len(), out_channel.len()] {
        if channel_len != total {
            return Err(ImageErrors::DimensionsMisMatch(total, channel_len));
        }
    }
    if total == 0 {
        trace!("Empty image, nothing to do");
        return Ok(());
    }
    let clamp = options.get_clamp_to_maxval().then_some(maxval);

    let padded = pad(in_channel, width, height, 1, 1, options.get_pad_method());

    if threads == 1 {
        let values = sobel_strided(&padded, width, height, 0, 1, clamp)?;
        out_channel.copy_from_slice(&values);
        return Ok(());
    }
    // workers past the pixel count would have nothing to do
    let workers = threads.min(total);

    trace!("Running sobel on {workers} threads");

    let results = std::thread::scope(|s| {
        let padded = &padded;

        let handles = (0..workers)
            .map(|t| {
                std::thread::Builder::new()
                    .name(format!("sobel-{t}"))
                    .spawn_scoped(s, move || {
                        sobel_strided(padded, width, height, t, threads, clamp)
                    })
                    .map_err(|e| ImageErrors::ThreadError(format!("Cannot spawn worker {t}: {e}")))
            })
            .collect::<Vec<_>>();

        // join everything before looking at errors
        handles
            .into_iter()
            .enumerate()
            .map(|(t, handle)| match handle?.join() {
                Ok(values) => values.map_err(ImageErrors::from),
                Err(_) => Err(ImageErrors::ThreadError(format!("Worker {t} panicked")))
            })
            .collect::<Vec<_>>()
    });

    for (t, values) in results.into_iter().enumerate() {
        for (k, value) in values?.into_iter().enumerate() {
            out_channel[t + k * threads] = value;
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use netpbm_core::kind::NetPbmKind;
    use netpbm_image::errors::{ImageErrors, ImageOperationsErrors};
    use netpbm_image::image::Image;
    use netpbm_image::traits::OperationsTrait;

    use crate::pad::PadMethod;
    use crate::sobel::{magnitude, sobel_u32, Sobel, SobelOptions, MAX_THREADS};

    /// Six columns, left half 0 and right half 100
    fn vertical_step(height: usize) -> Image {
        let row = [0, 0, 0, 100, 100, 100];
        let pixels = row.iter().copied().cycle().take(6 * height).collect();

        Image::new(NetPbmKind::BinaryGreymap, 6, height, 255, pixels).unwrap()
    }

    #[test]
    fn magnitude_rounds() {
        assert_eq!(magnitude(3, 4, None), 5);
        assert_eq!(magnitude(1, 1, None), 1);
        assert_eq!(magnitude(-2, 2, None), 3);
        assert_eq!(magnitude(0, 0, None), 0);
        assert_eq!(magnitude(400, 0, Some(255)), 255);
    }

    #[test]
    fn flat_field_has_no_gradient() {
        let mut image = Image::fill(100, NetPbmKind::AsciiGreymap, 3, 3, 255).unwrap();

        Sobel::new(SobelOptions::default()).execute(&mut image).unwrap();

        assert_eq!(image.pixels(), &[0; 9]);
        assert_eq!(image.kind(), NetPbmKind::AsciiGreymap);
    }

    #[test]
    fn vertical_step_responds_at_the_step() {
        let mut image = vertical_step(5);

        Sobel::default().execute(&mut image).unwrap();

        for row in image.pixels().chunks_exact(6) {
            assert_eq!(row, &[0, 0, 400, 400, 0, 0]);
        }
    }

    #[test]
    fn clamped_step() {
        let mut image = vertical_step(2);
        let options = SobelOptions::default().set_clamp_to_maxval(true);

        Sobel::new(options).execute(&mut image).unwrap();

        for row in image.pixels().chunks_exact(6) {
            assert_eq!(row, &[0, 0, 255, 255, 0, 0]);
        }
    }

    #[test]
    fn zero_border_sees_the_image_edge() {
        let mut image = vertical_step(5);
        let options = SobelOptions::default().set_pad_method(PadMethod::Constant);

        Sobel::new(options).execute(&mut image).unwrap();

        // interior rows, the right edge meets the zero border
        for row in image.pixels().chunks_exact(6).skip(1).take(3) {
            assert_eq!(row, &[0, 0, 400, 400, 0, 400]);
        }
        // top row, the zero row above adds a vertical gradient
        // (gx,gy): (0,0) (0,0) (300,100) (300,300) (0,400) (-300,300)
        assert_eq!(&image.pixels()[..6], &[0, 0, 316, 424, 400, 424]);
    }

    #[test]
    fn pixmaps_are_rejected() {
        let mut image = Image::fill(0x0010_2030, NetPbmKind::BinaryPixmap, 2, 2, 255).unwrap();
        let err = Sobel::default().execute(&mut image).unwrap_err();

        assert!(matches!(
            err,
            ImageErrors::OperationsError(ImageOperationsErrors::NotGreyscale(
                NetPbmKind::BinaryPixmap
            ))
        ));
        assert_eq!(image.pixels(), &[0x0010_2030; 4]);
    }

    #[test]
    fn thread_count_is_validated() {
        let mut image = Image::fill(1, NetPbmKind::BinaryGreymap, 2, 2, 255).unwrap();

        for threads in [0, MAX_THREADS + 1] {
            let options = SobelOptions::default().set_threads(threads);
            let err = Sobel::new(options).execute(&mut image).unwrap_err();

            assert!(matches!(
                err,
                ImageErrors::OperationsError(ImageOperationsErrors::InvalidThreadCount(t, MAX_THREADS))
                if t == threads
            ));
        }
        assert_eq!(image.pixels(), &[1; 4]);
    }

    #[test]
    fn more_threads_than_pixels() {
        let mut single = vertical_step(1);
        let mut many = single.clone();

        Sobel::default().execute(&mut single).unwrap();
        Sobel::new(SobelOptions::default().set_threads(MAX_THREADS))
            .execute(&mut many)
            .unwrap();

        assert_eq!(single, many);
    }

    #[test]
    fn empty_images_are_a_no_op() {
        for (width, height) in [(0, 0), (0, 4), (4, 0)] {
            let mut image = Image::new(NetPbmKind::BinaryGreymap, width, height, 255, vec![]).unwrap();

            Sobel::new(SobelOptions::default().set_threads(4))
                .execute(&mut image)
                .unwrap();
            assert!(image.pixels().is_empty());
        }
    }

    #[test]
    fn channel_lengths_are_checked() {
        let mut out = [0; 3];
        let err = sobel_u32(&[0; 4], &mut out, 2, 2, 255, &SobelOptions::default()).unwrap_err();

        assert!(matches!(err, ImageErrors::DimensionsMisMatch(4, 3)));
    }
}
