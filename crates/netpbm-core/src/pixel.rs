/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! Packed RGB pixel layout
//!
//! Pixmap images store every pixel in a single `u32` slot,
//! with the channels laid out as
//!
//! ```text
//!  31      24 23      16 15       8 7        0
//! ┌──────────┬──────────┬──────────┬──────────┐
//! │  unused  │   blue   │  green   │   red    │
//! └──────────┴──────────┴──────────┴──────────┘
//! ```
//!
//! Single channel images store the intensity directly in the slot.

/// Red channel of a packed pixel
#[inline(always)]
#[must_use]
pub const fn red(pixel: u32) -> u8 {
    (pixel & 0xff) as u8
}

/// Green channel of a packed pixel
#[inline(always)]
#[must_use]
pub const fn green(pixel: u32) -> u8 {
    ((pixel >> 8) & 0xff) as u8
}

/// Blue channel of a packed pixel
#[inline(always)]
#[must_use]
pub const fn blue(pixel: u32) -> u8 {
    ((pixel >> 16) & 0xff) as u8
}

/// Pack three channels into one pixel slot
#[inline(always)]
#[must_use]
pub const fn pack_rgb(r: u8, g: u8, b: u8) -> u32 {
    (r as u32) | ((g as u32) << 8) | ((b as u32) << 16)
}

/// Split a packed pixel into `[r, g, b]`
#[inline(always)]
#[must_use]
pub const fn unpack_rgb(pixel: u32) -> [u8; 3] {
    [red(pixel), green(pixel), blue(pixel)]
}

#[cfg(test)]
mod tests {
    use crate::pixel::{blue, green, pack_rgb, red, unpack_rgb};

    #[test]
    fn channels_live_in_their_own_byte() {
        let pixel = pack_rgb(10, 20, 30);

        assert_eq!(pixel, 10 | (20 << 8) | (30 << 16));
        assert_eq!(red(pixel), 10);
        assert_eq!(green(pixel), 20);
        assert_eq!(blue(pixel), 30);
        assert_eq!(unpack_rgb(pixel), [10, 20, 30]);
    }

    #[test]
    fn unused_high_byte_is_ignored() {
        let pixel = pack_rgb(1, 2, 3) | 0xff00_0000;
        assert_eq!(unpack_rgb(pixel), [1, 2, 3]);
    }
}
