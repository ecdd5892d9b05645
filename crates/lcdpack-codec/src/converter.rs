/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

use std::io::Write;

use lcdpack_core::bitmap::{Bitmap, Pixel};
use lcdpack_core::bytestream::{ByteOrder, ByteWriter};
use lcdpack_core::log::trace;

use crate::device::DeviceKey;
use crate::errors::CodecErrors;
use crate::layout::PixelLayout;

/// Encodes bitmaps into the wire format of one controller and depth
///
/// Instances come from [`ConverterRegistry::resolve`](crate::ConverterRegistry::resolve),
/// so holding one means the device and depth were already validated.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub struct DeviceConverter {
    key:        DeviceKey,
    layout:     PixelLayout,
    byte_order: ByteOrder
}

impl DeviceConverter {
    pub(crate) const fn new(
        key: DeviceKey, layout: PixelLayout, byte_order: ByteOrder
    ) -> DeviceConverter {
        DeviceConverter {
            key,
            layout,
            byte_order
        }
    }

    pub const fn key(&self) -> DeviceKey {
        self.key
    }

    pub const fn layout(&self) -> PixelLayout {
        self.layout
    }

    pub const fn byte_order(&self) -> ByteOrder {
        self.byte_order
    }

    pub const fn bytes_per_pixel(&self) -> usize {
        self.layout.bytes_per_pixel()
    }

    /// Size of the encoded stream for `bitmap`
    pub const fn encoded_size(&self, bitmap: &Bitmap) -> usize {
        bitmap.width() * bitmap.height() * self.bytes_per_pixel()
    }

    /// Encode a single pixel into `writer`
    pub fn encode_pixel<W: Write>(
        &self, pixel: Pixel, writer: &mut ByteWriter<W>
    ) -> Result<(), CodecErrors> {
        self.layout.write_pixel(pixel, writer)?;
        Ok(())
    }

    /// Encode `bitmap` row-major, top to bottom and left to right,
    /// into `sink`.
    ///
    /// Returns the number of bytes written.
    pub fn encode_into<W: Write>(&self, bitmap: &Bitmap, sink: W) -> Result<usize, CodecErrors> {
        let mut writer = ByteWriter::new(sink, self.byte_order);

        trace!(
            "Encoding {}x{} bitmap for {} as {:?}",
            bitmap.width(),
            bitmap.height(),
            self.key,
            self.layout
        );

        for row in bitmap.rows() {
            for pixel in row {
                self.layout.write_pixel(*pixel, &mut writer)?;
            }
        }
        writer.flush()?;

        Ok(writer.position())
    }

    /// Encode `bitmap` into a new buffer
    pub fn encode(&self, bitmap: &Bitmap) -> Vec<u8> {
        let mut out = Vec::with_capacity(self.encoded_size(bitmap));
        // writes into a Vec are infallible
        let written = self.encode_into(bitmap, &mut out);

        debug_assert_eq!(written.ok(), Some(self.encoded_size(bitmap)));
        out
    }
}
