/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! Channel bit depth, quantization and the matching decode shift
//!
//! Controllers never round. Firmware decodes a packed channel by
//! shifting it back up, so every reduction here is a plain truncation
//! of the low order bits.
use crate::bitmap::Pixel;
use crate::errors::BitmapErrors;

/// Number of significant bits kept for one 8-bit channel.
///
/// Always in `1..=8`, which keeps every shift in this module in range.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub struct ChannelBits(u8);

impl ChannelBits {
    pub const FIVE: ChannelBits = ChannelBits(5);
    pub const SIX: ChannelBits = ChannelBits(6);
    pub const EIGHT: ChannelBits = ChannelBits(8);

    /// Create a channel width, failing for widths outside `1..=8`
    ///
    /// # Example
    /// ```
    /// use lcdpack_core::quantize::ChannelBits;
    /// assert!(ChannelBits::new(6).is_ok());
    /// assert!(ChannelBits::new(0).is_err());
    /// assert!(ChannelBits::new(9).is_err());
    /// ```
    pub const fn new(bits: u8) -> Result<ChannelBits, BitmapErrors> {
        if bits == 0 || bits > 8 {
            return Err(BitmapErrors::InvalidChannelBits(bits));
        }
        Ok(ChannelBits(bits))
    }

    pub const fn get(self) -> u8 {
        self.0
    }

    /// Number of low order bits dropped from an 8-bit channel
    pub const fn discarded(self) -> u8 {
        8 - self.0
    }
}

/// Keep the top `bits` of `value`, right aligned.
///
/// ```
/// use lcdpack_core::quantize::{truncate, ChannelBits};
/// assert_eq!(truncate(0xFF, ChannelBits::FIVE), 0x1F);
/// assert_eq!(truncate(0xFF, ChannelBits::SIX), 0x3F);
/// assert_eq!(truncate(0x07, ChannelBits::FIVE), 0);
/// ```
#[inline(always)]
pub const fn truncate(value: u8, bits: ChannelBits) -> u8 {
    value >> bits.discarded()
}

/// Decode shift, left justify a truncated channel back into 8 bits.
///
/// The dropped low bits come back as zero.
#[inline(always)]
pub const fn expand(value: u8, bits: ChannelBits) -> u8 {
    value << bits.discarded()
}

/// Keep the top `bits` of `value` in place, clearing the rest.
///
/// This is the form used by layouts that store each channel in its own byte
///
/// ```
/// use lcdpack_core::quantize::{mask, ChannelBits};
/// assert_eq!(mask(0xFF, ChannelBits::SIX), 0xFC);
/// assert_eq!(mask(0x03, ChannelBits::SIX), 0x00);
/// ```
#[inline(always)]
pub const fn mask(value: u8, bits: ChannelBits) -> u8 {
    value & (0xFF_u8 << bits.discarded())
}

/// Per channel bit widths of the colour depths controllers accept
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum ColorDepth {
    /// 5 bits red, 6 bits green, 5 bits blue (64K colours)
    Rgb565,
    /// 5 bits for every channel (32K colours)
    Rgb555,
    /// 6 bits for every channel (262K colours)
    Rgb666,
    /// Full 8 bits for every channel (16M colours)
    Rgb888
}

impl ColorDepth {
    /// Widths for the red, green and blue channel in that order
    pub const fn channel_bits(self) -> [ChannelBits; 3] {
        match self {
            Self::Rgb565 => [ChannelBits::FIVE, ChannelBits::SIX, ChannelBits::FIVE],
            Self::Rgb555 => [ChannelBits::FIVE, ChannelBits::FIVE, ChannelBits::FIVE],
            Self::Rgb666 => [ChannelBits::SIX, ChannelBits::SIX, ChannelBits::SIX],
            Self::Rgb888 => [ChannelBits::EIGHT, ChannelBits::EIGHT, ChannelBits::EIGHT]
        }
    }

    /// Total number of significant bits in one pixel
    pub const fn bits_per_pixel(self) -> u32 {
        let [r, g, b] = self.channel_bits();
        r.get() as u32 + g.get() as u32 + b.get() as u32
    }

    /// Reduce every channel of `pixel` to this depth.
    ///
    /// The returned channels are right aligned, ready to be
    /// shifted into a packed word.
    pub const fn quantize(self, pixel: Pixel) -> Pixel {
        let [r, g, b] = self.channel_bits();

        Pixel::new(
            truncate(pixel.r, r),
            truncate(pixel.g, g),
            truncate(pixel.b, b)
        )
    }

    /// Inverse of [`quantize`](Self::quantize) up to the lost bits
    pub const fn expand(self, pixel: Pixel) -> Pixel {
        let [r, g, b] = self.channel_bits();

        Pixel::new(expand(pixel.r, r), expand(pixel.g, g), expand(pixel.b, b))
    }

    /// Quantize while keeping every channel in its 8-bit position
    pub const fn mask(self, pixel: Pixel) -> Pixel {
        let [r, g, b] = self.channel_bits();

        Pixel::new(mask(pixel.r, r), mask(pixel.g, g), mask(pixel.b, b))
    }
}

#[cfg(test)]
mod tests {
    use nanorand::{Rng, WyRand};

    use crate::bitmap::Pixel;
    use crate::quantize::{expand, mask, truncate, ChannelBits, ColorDepth};

    const DEPTHS: [ColorDepth; 4] = [
        ColorDepth::Rgb565,
        ColorDepth::Rgb555,
        ColorDepth::Rgb666,
        ColorDepth::Rgb888
    ];

    #[test]
    fn truncation_never_rounds() {
        // 0xFB would round up to 0x3F at 6 bits, truncation keeps 0x3E
        assert_eq!(truncate(0xFB, ChannelBits::SIX), 0x3E);
        assert_eq!(truncate(0x07, ChannelBits::FIVE), 0x00);
        assert_eq!(truncate(0x08, ChannelBits::FIVE), 0x01);
        assert_eq!(truncate(0xAB, ChannelBits::EIGHT), 0xAB);
    }

    #[test]
    fn decode_shift_recovers_high_bits_for_every_channel_value() {
        for bits in 1..=8 {
            let bits = ChannelBits::new(bits).unwrap();

            for value in 0..=255_u8 {
                let packed = truncate(value, bits);
                let decoded = expand(packed, bits);

                assert_eq!(decoded, mask(value, bits));
                assert_eq!(truncate(decoded, bits), packed);
            }
        }
    }

    #[test]
    fn quantizing_twice_is_idempotent() {
        let mut rng = WyRand::new_seed(0x1CD);

        for _ in 0..4096 {
            let pixel = Pixel::new(rng.generate(), rng.generate(), rng.generate());

            for depth in DEPTHS {
                let once = depth.mask(pixel);
                assert_eq!(depth.mask(once), once);

                let round_trip = depth.quantize(depth.expand(depth.quantize(pixel)));
                assert_eq!(round_trip, depth.quantize(pixel));
            }
        }
    }

    #[test]
    fn truncated_666_values() {
        assert_eq!(mask(0xFF, ChannelBits::SIX), 0xFC);
        assert_eq!(mask(0x03, ChannelBits::SIX), 0x00);
    }

    #[test]
    fn bits_per_pixel() {
        assert_eq!(ColorDepth::Rgb565.bits_per_pixel(), 16);
        assert_eq!(ColorDepth::Rgb555.bits_per_pixel(), 15);
        assert_eq!(ColorDepth::Rgb666.bits_per_pixel(), 18);
        assert_eq!(ColorDepth::Rgb888.bits_per_pixel(), 24);
    }
}
