/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

use std::io::{self, Write};

use crate::bytestream::ByteOrder;

/// Encapsulates a byte sink with support for endian aware writes
///
/// Every write goes straight to the inner writer, the struct only
/// remembers the configured order and how many bytes went out.
pub struct ByteWriter<W: Write> {
    inner:    W,
    order:    ByteOrder,
    position: usize
}

impl<W: Write> ByteWriter<W> {
    /// Create a new writer emitting multi byte words in `order`
    pub fn new(inner: W, order: ByteOrder) -> ByteWriter<W> {
        ByteWriter {
            inner,
            order,
            position: 0
        }
    }

    /// Return the number of bytes the writer has written
    ///
    /// ```
    /// use lcdpack_core::bytestream::{ByteOrder, ByteWriter};
    /// let mut out = Vec::new();
    /// let mut stream = ByteWriter::new(&mut out, ByteOrder::LittleEndian);
    /// stream.write_u16(0xABCD).unwrap();
    /// assert_eq!(stream.position(), 2);
    /// ```
    pub const fn position(&self) -> usize {
        self.position
    }

    pub const fn byte_order(&self) -> ByteOrder {
        self.order
    }

    /// Write a single byte
    pub fn write_u8(&mut self, byte: u8) -> io::Result<()> {
        self.write_all_counted(&[byte])
    }

    /// Write raw bytes, byte order does not apply
    pub fn write_bytes(&mut self, bytes: &[u8]) -> io::Result<()> {
        self.write_all_counted(bytes)
    }

    pub fn flush(&mut self) -> io::Result<()> {
        self.inner.flush()
    }

    /// Consume the writer, returning the inner sink
    pub fn into_inner(self) -> W {
        self.inner
    }

    fn write_all_counted(&mut self, bytes: &[u8]) -> io::Result<()> {
        self.inner.write_all(bytes)?;
        self.position += bytes.len();
        Ok(())
    }
}

macro_rules! write_single_type {
    ($name:tt,$name_be:tt,$name_le:tt,$int_type:tt) => {
        impl<W: Write> ByteWriter<W> {
            #[doc=concat!("Write ",stringify!($int_type)," in the configured byte order")]
            #[inline]
            pub fn $name(&mut self, value: $int_type) -> io::Result<()> {
                match self.order {
                    ByteOrder::BigEndian => self.$name_be(value),
                    ByteOrder::LittleEndian => self.$name_le(value)
                }
            }

            #[doc=concat!("Write ",stringify!($int_type)," as a big endian integer")]
            #[inline]
            pub fn $name_be(&mut self, value: $int_type) -> io::Result<()> {
                self.write_all_counted(&value.to_be_bytes())
            }

            #[doc=concat!("Write ",stringify!($int_type)," as a little endian integer")]
            #[inline]
            pub fn $name_le(&mut self, value: $int_type) -> io::Result<()> {
                self.write_all_counted(&value.to_le_bytes())
            }
        }
    };
}

write_single_type!(write_u16, write_u16_be, write_u16_le, u16);
write_single_type!(write_u32, write_u32_be, write_u32_le, u32);
