/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! Encoder options
//!
//! All options that influence how a bitmap turns into device bytes
//! are put into one struct so the same `EncoderOptions` can be shared
//! by bitmap conversion and by the glyph builder.

use crate::bytestream::ByteOrder;

/// Axis flip applied to a bitmap before it is encoded
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq, Hash)]
pub enum FlipMode {
    /// Leave the bitmap as is
    #[default]
    None,
    /// Flip about the X axis, the top row becomes the bottom row
    X,
    /// Flip about the Y axis, the left column becomes the right column
    Y,
    /// Flip about both axes
    XY
}

impl FlipMode {
    /// Whether rows are emitted bottom to top
    pub const fn flips_rows(self) -> bool {
        matches!(self, Self::X | Self::XY)
    }

    /// Whether pixels in a row are emitted right to left
    pub const fn flips_columns(self) -> bool {
        matches!(self, Self::Y | Self::XY)
    }
}

/// Encoder options
///
/// To remove the annoyance of getters and setters
/// all exposed options are declared public.
#[derive(Debug, Copy, Clone)]
pub struct EncoderOptions {
    /// Order of bytes within multi byte words
    ///
    /// - Default value: `ByteOrder::LittleEndian`
    /// - Respected by: packed 565 and 262K layouts
    pub byte_order: ByteOrder,
    /// Flip applied once before any pixel is encoded
    ///
    /// - Default value: `FlipMode::None`
    pub flip:       FlipMode,
    /// Maximum width of an input bitmap
    ///
    /// - Default value: 16384
    pub max_width:  usize,
    /// Maximum height of an input bitmap
    ///
    /// - Default value: 16384
    pub max_height: usize
}

impl Default for EncoderOptions {
    fn default() -> Self {
        Self {
            byte_order: ByteOrder::LittleEndian,
            flip:       FlipMode::None,
            max_width:  1 << 14,
            max_height: 1 << 14
        }
    }
}

impl EncoderOptions {
    pub const fn byte_order(&self) -> ByteOrder {
        self.byte_order
    }

    pub fn set_byte_order(mut self, byte_order: ByteOrder) -> Self {
        self.byte_order = byte_order;
        self
    }

    pub const fn flip(&self) -> FlipMode {
        self.flip
    }

    pub fn set_flip(mut self, flip: FlipMode) -> Self {
        self.flip = flip;
        self
    }

    pub const fn max_width(&self) -> usize {
        self.max_width
    }

    pub const fn max_height(&self) -> usize {
        self.max_height
    }

    pub fn set_max_width(mut self, width: usize) -> Self {
        self.max_width = width;
        self
    }

    pub fn set_max_height(mut self, height: usize) -> Self {
        self.max_height = height;
        self
    }
}
