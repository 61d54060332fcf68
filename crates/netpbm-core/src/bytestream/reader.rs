/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

use core::fmt::{Debug, Display, Formatter};

/// Errors raised by the bytestream reader and writer
pub enum ByteIoError {
    /// Underlying sink or source failed
    StdIoError(std::io::Error),
    /// Not enough bytes to satisfy a read
    ///
    /// # Arguments
    /// - requested: bytes the caller asked for
    /// - remaining: bytes left in the stream
    NotEnoughBytes(usize, usize),
    Generic(&'static str)
}

impl Debug for ByteIoError {
    fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
        match self {
            ByteIoError::StdIoError(err) => {
                writeln!(f, "Underlying I/O error {err}")
            }
            ByteIoError::NotEnoughBytes(expected, found) => {
                writeln!(f, "Not enough bytes, expected {expected} but found {found}")
            }
            ByteIoError::Generic(err) => {
                writeln!(f, "Generic I/O error: {err}")
            }
        }
    }
}

impl Display for ByteIoError {
    fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
        write!(f, "{self:?}")
    }
}

impl std::error::Error for ByteIoError {}

impl From<std::io::Error> for ByteIoError {
    fn from(value: std::io::Error) -> Self {
        ByteIoError::StdIoError(value)
    }
}

impl From<&'static str> for ByteIoError {
    fn from(value: &'static str) -> Self {
        ByteIoError::Generic(value)
    }
}

/// An encapsulation of a byte stream reader
///
/// This provides an interface similar to [std::io::Cursor] but
/// with the exception of returning a zero instead of an error on
/// reads past the end, plus error returning variants for callers that
/// need to tell the two apart.
pub struct ZByteReader<'a> {
    /// Data stream
    stream:   &'a [u8],
    position: usize
}

impl<'a> ZByteReader<'a> {
    /// Create a new instance of the byte stream
    #[must_use]
    pub const fn new(buf: &'a [u8]) -> ZByteReader<'a> {
        ZByteReader {
            stream:   buf,
            position: 0
        }
    }

    /// Current read position
    #[inline]
    #[must_use]
    pub const fn get_position(&self) -> usize {
        self.position
    }

    /// Return true if we reached the end of the stream
    #[inline]
    #[must_use]
    pub const fn eof(&self) -> bool {
        self.position >= self.stream.len()
    }

    /// Number of bytes left in the stream
    #[inline]
    #[must_use]
    pub const fn remaining(&self) -> usize {
        self.stream.len().saturating_sub(self.position)
    }

    /// Return true if the stream has at least `num` bytes left
    #[inline]
    #[must_use]
    pub const fn has(&self, num: usize) -> bool {
        self.remaining() >= num
    }

    /// Skip `num` bytes ahead of the stream, stopping at the end
    #[inline]
    pub fn skip(&mut self, num: usize) {
        self.position = self.position.saturating_add(num).min(self.stream.len());
    }

    /// Undo a read of `num` bytes, stopping at the start
    #[inline]
    pub fn rewind(&mut self, num: usize) {
        self.position = self.position.saturating_sub(num);
    }

    /// Look at the next byte without consuming it
    #[inline]
    #[must_use]
    pub fn peek_u8(&self) -> Option<u8> {
        self.stream.get(self.position).copied()
    }

    /// Read a single byte, returning zero when the stream is exhausted
    #[inline(always)]
    pub fn get_u8(&mut self) -> u8 {
        match self.stream.get(self.position) {
            Some(byte) => {
                self.position += 1;
                *byte
            }
            None => 0
        }
    }

    /// Read a single byte or error out if the stream is exhausted
    ///
    /// # Errors
    /// [`ByteIoError::NotEnoughBytes`] at the end of the stream
    #[inline(always)]
    pub fn get_u8_err(&mut self) -> Result<u8, ByteIoError> {
        match self.stream.get(self.position) {
            Some(byte) => {
                self.position += 1;
                Ok(*byte)
            }
            None => Err(ByteIoError::NotEnoughBytes(1, 0))
        }
    }

    /// Read `N` bytes or error out without moving if there aren't enough
    ///
    /// # Errors
    /// [`ByteIoError::NotEnoughBytes`] if fewer than `N` bytes are left
    pub fn read_fixed_bytes_or_error<const N: usize>(&mut self) -> Result<[u8; N], ByteIoError> {
        let bytes = self.get_as_ref(N)?;
        let mut byte_store = [0; N];
        byte_store.copy_from_slice(bytes);
        Ok(byte_store)
    }

    /// Return a reference to the next `num` bytes and move past them
    ///
    /// # Errors
    /// [`ByteIoError::NotEnoughBytes`] if fewer than `num` bytes are left,
    /// in which case the position is not changed
    pub fn get_as_ref(&mut self, num: usize) -> Result<&'a [u8], ByteIoError> {
        let remaining = self.remaining();

        if num > remaining {
            return Err(ByteIoError::NotEnoughBytes(num, remaining));
        }
        let start = self.position;
        self.position += num;

        Ok(&self.stream[start..start + num])
    }
}
