/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! Wire layouts of a single pixel
//!
//! Bit positions here are what controller firmware decodes, they must not
//! drift. Word based layouts honour the writer's byte order, byte based
//! layouts ignore it.
use std::io::{self, Write};

use lcdpack_core::bitmap::Pixel;
use lcdpack_core::bytestream::ByteWriter;
use lcdpack_core::quantize::ColorDepth;

/// Byte arrangement of the truncated 666 layout
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum Arrangement666 {
    /// `R G B`
    Rgb,
    /// `R G B 00`
    Rgb0,
    /// `R 00 B G`
    R0bg
}

impl Arrangement666 {
    const fn len(self) -> usize {
        match self {
            Self::Rgb => 3,
            Self::Rgb0 | Self::R0bg => 4
        }
    }
}

/// A fixed per pixel bit layout
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum PixelLayout {
    /// One 16 bit word, `R5 G6 B5` from the most significant bit down.
    Rgb565,
    /// Two 16 bit words holding an 18 bit `R6 G6 B6` value.
    ///
    /// ```text
    /// word0: 00000000000000RR
    /// word1: RRRRGGGGGGBBBBBB
    /// ```
    Packed262Split,
    /// Two 16 bit words, red alone in the first.
    ///
    /// ```text
    /// word0: 00000000RRRRRR00
    /// word1: GGGGGG00BBBBBB00
    /// ```
    Packed262RedWord,
    /// Two 16 bit words, the top 16 of 18 bits first.
    ///
    /// ```text
    /// word0: RRRRRRGGGGGGBBBB
    /// word1: 00000000000000BB
    /// ```
    Packed262HighWord,
    /// Two 12 bit words carrying all 24 channel bits.
    ///
    /// ```text
    /// word0: 0000RRRRRRRRGGGG
    /// word1: 0000GGGGBBBBBBBB
    /// ```
    Packed12BitPair,
    /// Two 16 bit words, blue alone in the first.
    ///
    /// ```text
    /// word0: 00000000BBBBBBBB
    /// word1: GGGGGGGGRRRRRRRR
    /// ```
    Halfword888,
    /// Every channel truncated to its top 6 bits but kept in a byte of
    /// its own.
    Truncated666 { arrangement: Arrangement666 },
    /// Three raw channel bytes, red first
    Unpacked888
}

impl PixelLayout {
    /// Number of bytes one pixel occupies on the wire
    pub const fn bytes_per_pixel(self) -> usize {
        match self {
            Self::Rgb565 => 2,
            Self::Unpacked888 => 3,
            Self::Truncated666 { arrangement } => arrangement.len(),
            Self::Packed262Split
            | Self::Packed262RedWord
            | Self::Packed262HighWord
            | Self::Packed12BitPair
            | Self::Halfword888 => 4
        }
    }

    /// Colour depth the channels are reduced to
    pub const fn color_depth(self) -> ColorDepth {
        match self {
            Self::Rgb565 => ColorDepth::Rgb565,
            Self::Packed262Split
            | Self::Packed262RedWord
            | Self::Packed262HighWord
            | Self::Truncated666 { .. } => ColorDepth::Rgb666,
            Self::Packed12BitPair | Self::Halfword888 | Self::Unpacked888 => {
                ColorDepth::Rgb888
            }
        }
    }

    /// Whether the writer's byte order changes the output
    pub const fn is_word_based(self) -> bool {
        !matches!(self, Self::Truncated666 { .. } | Self::Unpacked888)
    }

    /// Encode one pixel into `writer`
    pub fn write_pixel<W: Write>(self, pixel: Pixel, writer: &mut ByteWriter<W>) -> io::Result<()> {
        match self {
            Self::Rgb565 => writer.write_u16(pack_565(pixel)),
            Self::Packed262Split => {
                let value = pack_666(pixel);

                writer.write_u16((value >> 16) as u16)?;
                writer.write_u16(value as u16)
            }
            Self::Packed262RedWord => {
                let p = ColorDepth::Rgb666.mask(pixel);

                writer.write_u16(u16::from(p.r))?;
                writer.write_u16((u16::from(p.g) << 8) | u16::from(p.b))
            }
            Self::Packed262HighWord => {
                let p = ColorDepth::Rgb666.mask(pixel);

                writer.write_u16(
                    (u16::from(p.r) << 8) | (u16::from(p.g) << 2) | (u16::from(p.b) >> 4)
                )?;
                writer.write_u16(u16::from(p.b & 0x0C) >> 2)
            }
            Self::Packed12BitPair => {
                writer.write_u16((u16::from(pixel.r) << 4) | (u16::from(pixel.g) >> 4))?;
                writer.write_u16((u16::from(pixel.g & 0x0F) << 8) | u16::from(pixel.b))
            }
            Self::Halfword888 => {
                writer.write_u16(u16::from(pixel.b))?;
                writer.write_u16((u16::from(pixel.g) << 8) | u16::from(pixel.r))
            }
            Self::Truncated666 { arrangement } => {
                let p = ColorDepth::Rgb666.mask(pixel);

                match arrangement {
                    Arrangement666::Rgb => writer.write_bytes(&[p.r, p.g, p.b]),
                    Arrangement666::Rgb0 => writer.write_bytes(&[p.r, p.g, p.b, 0]),
                    Arrangement666::R0bg => writer.write_bytes(&[p.r, 0, p.b, p.g])
                }
            }
            Self::Unpacked888 => writer.write_bytes(&[pixel.r, pixel.g, pixel.b])
        }
    }
}

/// `(r << 11) | (g << 5) | b` over the 565 quantized channels
#[inline]
pub(crate) const fn pack_565(pixel: Pixel) -> u16 {
    let q = ColorDepth::Rgb565.quantize(pixel);

    ((q.r as u16) << 11) | ((q.g as u16) << 5) | (q.b as u16)
}

/// `(r << 12) | (g << 6) | b` over the 666 quantized channels
#[inline]
pub(crate) const fn pack_666(pixel: Pixel) -> u32 {
    let q = ColorDepth::Rgb666.quantize(pixel);

    ((q.r as u32) << 12) | ((q.g as u32) << 6) | (q.b as u32)
}
