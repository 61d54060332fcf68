/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! Traits implemented by image operations
use log::trace;
use netpbm_core::kind::NetPbmKind;

use crate::errors::{ImageErrors, ImageOperationsErrors};
use crate::image::Image;

/// An in-place transform on an image
///
/// Implementors provide [`execute_impl`](OperationsTrait::execute_impl)
/// and callers go through [`execute`](OperationsTrait::execute), which
/// checks the image kind before handing the image over.
pub trait OperationsTrait {
    /// Get the name of this operation
    fn name(&self) -> &'static str;

    /// Execute the operation on the image
    ///
    /// The image kind has already been checked against
    /// [`supported_kinds`](OperationsTrait::supported_kinds).
    ///
    /// # Errors
    /// Operation specific, the image must be left unchanged on error
    fn execute_impl(&self, image: &mut Image) -> Result<(), ImageErrors>;

    /// Image kinds this operation accepts
    fn supported_kinds(&self) -> &'static [NetPbmKind];

    /// Run the operation on `image`
    ///
    /// # Errors
    /// - [`ImageOperationsErrors::UnsupportedKind`] if the image kind is not
    ///   in [`supported_kinds`](OperationsTrait::supported_kinds)
    /// - Any error from the operation itself
    fn execute(&self, image: &mut Image) -> Result<(), ImageErrors> {
        let kind = image.kind();

        if !self.supported_kinds().contains(&kind) {
            return Err(ImageOperationsErrors::UnsupportedKind(self.name(), kind).into());
        }
        let (width, height) = image.dimensions();

        trace!("Running {} on {width}x{height} {kind} image", self.name());

        let start = std::time::Instant::now();

        self.execute_impl(image)?;

        trace!(
            "Finished {} in {} ms",
            self.name(),
            start.elapsed().as_millis()
        );
        Ok(())
    }
}
