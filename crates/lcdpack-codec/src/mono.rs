/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! One bit per pixel packing for uncompressed fonts
use lcdpack_core::bitmap::{Bitmap, Pixel};

/// Packs a bitmap into a stream of on/off bits.
///
/// Pixels are visited row-major and every pixel takes one bit. Bits fill
/// each byte from the least significant bit up, eight pixels per byte.
/// The stream does not restart at row boundaries, only the final byte is
/// zero padded on its high end.
#[derive(Copy, Clone, Debug)]
pub struct MonochromePacker {
    background: Pixel
}

impl Default for MonochromePacker {
    fn default() -> Self {
        MonochromePacker::new(Pixel::BLACK)
    }
}

impl MonochromePacker {
    /// Create a packer where any pixel that is not `background` is on
    pub const fn new(background: Pixel) -> MonochromePacker {
        MonochromePacker { background }
    }

    pub const fn packed_size(width: usize, height: usize) -> usize {
        (width * height).div_ceil(8)
    }

    /// Pack `bitmap`, LSB first
    ///
    /// ```
    /// use lcdpack_codec::MonochromePacker;
    /// use lcdpack_core::bitmap::{Bitmap, Pixel};
    ///
    /// let on = Pixel::WHITE;
    /// let off = Pixel::BLACK;
    /// let bitmap = Bitmap::new(3, 1, vec![on, off, on]).unwrap();
    ///
    /// assert_eq!(MonochromePacker::default().pack(&bitmap), [0b0000_0101]);
    /// ```
    pub fn pack(&self, bitmap: &Bitmap) -> Vec<u8> {
        let mut out = vec![0_u8; Self::packed_size(bitmap.width(), bitmap.height())];

        for (position, pixel) in bitmap.pixels().iter().enumerate() {
            if *pixel != self.background {
                out[position / 8] |= 1 << (position % 8);
            }
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use lcdpack_core::bitmap::{Bitmap, Pixel};

    use crate::mono::MonochromePacker;

    /// Parse rows of `#` (on) and `.` (off)
    fn glyph(rows: &[&str]) -> Bitmap {
        let width = rows[0].len();
        let pixels = rows
            .iter()
            .flat_map(|row| row.chars())
            .map(|c| if c == '#' { Pixel::WHITE } else { Pixel::BLACK })
            .collect();

        Bitmap::new(width, rows.len(), pixels).unwrap()
    }

    #[test]
    fn eight_wide_rows_map_to_one_byte_each() {
        // capital A of an 8x8 bitmap font
        let a = glyph(&[
            "...#....", "..#.#...", ".#...#..", ".#...#..", ".#####..", ".#...#..",
            ".#...#..", "........",
        ]);

        assert_eq!(
            MonochromePacker::default().pack(&a),
            [8, 20, 34, 34, 62, 34, 34, 0]
        );
    }

    #[test]
    fn bits_run_across_row_boundaries() {
        let bitmap = glyph(&["###", "...", "..#"]);

        // 9 pixels, bit 8 lands in the second byte
        assert_eq!(
            MonochromePacker::default().pack(&bitmap),
            [0b0000_0111, 0b0000_0001]
        );
    }

    #[test]
    fn final_byte_is_zero_padded() {
        let bitmap = Bitmap::filled(5, 2, Pixel::WHITE);

        assert_eq!(MonochromePacker::default().pack(&bitmap), [0xFF, 0b0000_0011]);
    }

    #[test]
    fn background_colour_is_configurable() {
        let blue = Pixel::new(0, 0, 255);
        let bitmap = Bitmap::new(2, 1, vec![blue, Pixel::BLACK]).unwrap();

        assert_eq!(MonochromePacker::new(blue).pack(&bitmap), [0b10]);
    }

    #[test]
    fn empty_bitmap_packs_to_nothing() {
        assert!(MonochromePacker::default()
            .pack(&Bitmap::filled(0, 0, Pixel::BLACK))
            .is_empty());
    }
}
