/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

use std::io::Write;

use crate::bytestream::ByteIoError;

/// Number of decimal digits needed for `u32::MAX`
const MAX_DECIMAL_DIGITS: usize = 10;

/// Encapsulates a simple byte writer with
/// support for decimal numbers as used by
/// the plain text NetPBM kinds
pub struct ZByteWriter<W: Write> {
    sink:          W,
    bytes_written: usize
}

impl<W: Write> ZByteWriter<W> {
    /// Create a new writer appending to `sink`
    pub fn new(sink: W) -> ZByteWriter<W> {
        ZByteWriter {
            sink,
            bytes_written: 0
        }
    }

    /// Total number of bytes written so far
    #[must_use]
    pub const fn bytes_written(&self) -> usize {
        self.bytes_written
    }

    /// Destroy this writer returning the underlying sink
    pub fn consume(self) -> W {
        self.sink
    }

    /// Write a single byte
    ///
    /// # Errors
    /// If the underlying sink fails
    #[inline(always)]
    pub fn write_u8(&mut self, byte: u8) -> Result<(), ByteIoError> {
        self.write_all(&[byte])
    }

    /// Write all bytes in `buf`
    ///
    /// # Errors
    /// If the underlying sink fails
    pub fn write_all(&mut self, buf: &[u8]) -> Result<(), ByteIoError> {
        self.sink.write_all(buf)?;
        self.bytes_written += buf.len();
        Ok(())
    }

    /// Write `value` as ASCII decimal digits, without leading zeros
    ///
    /// Zero is written as the single digit `0`
    ///
    /// # Errors
    /// If the underlying sink fails
    pub fn write_decimal(&mut self, mut value: u32) -> Result<(), ByteIoError> {
        let mut digits = [0_u8; MAX_DECIMAL_DIGITS];
        let mut start = MAX_DECIMAL_DIGITS;

        loop {
            start -= 1;
            digits[start] = b'0' + (value % 10) as u8;
            value /= 10;

            if value == 0 {
                break;
            }
        }
        self.write_all(&digits[start..])
    }

    /// Flush the underlying sink
    ///
    /// # Errors
    /// If the underlying sink fails
    pub fn flush(&mut self) -> Result<(), ByteIoError> {
        self.sink.flush()?;
        Ok(())
    }
}
