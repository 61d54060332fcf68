/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! NetPBM image kinds and their wire properties.

use core::fmt::{Display, Formatter};

/// All image kinds the NetPBM family defines.
///
/// The discriminant of each variant is the digit following `P`
/// in the magic bytes of a file of that kind.
///
/// `Pam` is recognized so it can be reported, but no routine
/// in this family of crates can decode, encode or process it.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum NetPbmKind {
    /// `P1`, plain text bitmap
    AsciiBitmap,
    /// `P2`, plain text greymap
    AsciiGreymap,
    /// `P3`, plain text pixmap
    AsciiPixmap,
    /// `P4`, bit packed bitmap
    BinaryBitmap,
    /// `P5`, one byte per pixel greymap
    BinaryGreymap,
    /// `P6`, three bytes per pixel pixmap
    BinaryPixmap,
    /// `P7`, portable arbitrary map, unsupported
    Pam
}

impl NetPbmKind {
    /// Every kind that can be decoded and encoded
    pub const SUPPORTED: [NetPbmKind; 6] = [
        NetPbmKind::AsciiBitmap,
        NetPbmKind::AsciiGreymap,
        NetPbmKind::AsciiPixmap,
        NetPbmKind::BinaryBitmap,
        NetPbmKind::BinaryGreymap,
        NetPbmKind::BinaryPixmap
    ];

    /// Map the second magic byte (`b'1'..=b'7'`) to a kind
    ///
    /// Returns `None` for anything outside that range
    #[must_use]
    pub const fn from_magic_digit(digit: u8) -> Option<NetPbmKind> {
        match digit {
            b'1' => Some(NetPbmKind::AsciiBitmap),
            b'2' => Some(NetPbmKind::AsciiGreymap),
            b'3' => Some(NetPbmKind::AsciiPixmap),
            b'4' => Some(NetPbmKind::BinaryBitmap),
            b'5' => Some(NetPbmKind::BinaryGreymap),
            b'6' => Some(NetPbmKind::BinaryPixmap),
            b'7' => Some(NetPbmKind::Pam),
            _ => None
        }
    }

    /// The ASCII digit written after `P` for this kind
    #[must_use]
    pub const fn magic_digit(self) -> u8 {
        match self {
            NetPbmKind::AsciiBitmap => b'1',
            NetPbmKind::AsciiGreymap => b'2',
            NetPbmKind::AsciiPixmap => b'3',
            NetPbmKind::BinaryBitmap => b'4',
            NetPbmKind::BinaryGreymap => b'5',
            NetPbmKind::BinaryPixmap => b'6',
            NetPbmKind::Pam => b'7'
        }
    }

    /// The two magic bytes that start a file of this kind
    #[must_use]
    pub const fn magic(self) -> [u8; 2] {
        [b'P', self.magic_digit()]
    }

    #[must_use]
    pub const fn is_ascii(self) -> bool {
        matches!(
            self,
            NetPbmKind::AsciiBitmap | NetPbmKind::AsciiGreymap | NetPbmKind::AsciiPixmap
        )
    }

    #[must_use]
    pub const fn is_binary(self) -> bool {
        matches!(
            self,
            NetPbmKind::BinaryBitmap | NetPbmKind::BinaryGreymap | NetPbmKind::BinaryPixmap
        )
    }

    #[must_use]
    pub const fn is_bitmap(self) -> bool {
        matches!(self, NetPbmKind::AsciiBitmap | NetPbmKind::BinaryBitmap)
    }

    #[must_use]
    pub const fn is_greymap(self) -> bool {
        matches!(self, NetPbmKind::AsciiGreymap | NetPbmKind::BinaryGreymap)
    }

    #[must_use]
    pub const fn is_pixmap(self) -> bool {
        matches!(self, NetPbmKind::AsciiPixmap | NetPbmKind::BinaryPixmap)
    }

    /// Return true if a pixel of this kind carries a single intensity
    #[must_use]
    pub const fn is_single_channel(self) -> bool {
        self.is_bitmap() || self.is_greymap()
    }

    /// Return true if the header of this kind carries a maxval field
    ///
    /// Bitmaps have an implicit maxval of 1
    #[must_use]
    pub const fn has_maxval(self) -> bool {
        !self.is_bitmap()
    }

    /// Return true if this kind can be decoded, encoded and processed
    #[must_use]
    pub const fn is_supported(self) -> bool {
        !matches!(self, NetPbmKind::Pam)
    }

    /// Number of samples stored on the wire per pixel
    #[must_use]
    pub const fn num_components(self) -> usize {
        match self {
            NetPbmKind::AsciiPixmap | NetPbmKind::BinaryPixmap => 3,
            NetPbmKind::Pam => 0,
            _ => 1
        }
    }

    /// The single channel kind a pixmap collapses to after greyscale
    /// conversion, keeping its ASCII/binary encoding.
    ///
    /// Every other kind maps to itself.
    #[must_use]
    pub const fn to_greymap(self) -> NetPbmKind {
        match self {
            NetPbmKind::AsciiPixmap => NetPbmKind::AsciiGreymap,
            NetPbmKind::BinaryPixmap => NetPbmKind::BinaryGreymap,
            kind => kind
        }
    }
}

impl Display for NetPbmKind {
    fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
        write!(f, "P{}", self.magic_digit() as char)
    }
}

#[cfg(test)]
mod tests {
    use crate::kind::NetPbmKind;

    #[test]
    fn magic_digits_round_trip() {
        for digit in b'1'..=b'7' {
            let kind = NetPbmKind::from_magic_digit(digit).unwrap();
            assert_eq!(kind.magic_digit(), digit);
        }
        assert!(NetPbmKind::from_magic_digit(b'0').is_none());
        assert!(NetPbmKind::from_magic_digit(b'8').is_none());
        assert!(NetPbmKind::from_magic_digit(b'P').is_none());
    }

    #[test]
    fn greymap_demotion_keeps_encoding() {
        assert_eq!(
            NetPbmKind::AsciiPixmap.to_greymap(),
            NetPbmKind::AsciiGreymap
        );
        assert_eq!(
            NetPbmKind::BinaryPixmap.to_greymap(),
            NetPbmKind::BinaryGreymap
        );
        assert_eq!(
            NetPbmKind::BinaryBitmap.to_greymap(),
            NetPbmKind::BinaryBitmap
        );
    }

    #[test]
    fn kind_classification() {
        for kind in NetPbmKind::SUPPORTED {
            assert_ne!(kind.is_ascii(), kind.is_binary());
            assert!(kind.is_supported());
        }
        assert!(!NetPbmKind::Pam.is_supported());
        assert!(!NetPbmKind::BinaryBitmap.has_maxval());
        assert!(NetPbmKind::AsciiGreymap.has_maxval());
        assert_eq!(NetPbmKind::BinaryPixmap.to_string(), "P6");
    }
}
