/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! RGB pixels and the immutable bitmap every converter reads from
use crate::errors::BitmapErrors;

/// A single 8 bit per channel pixel
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq, Hash)]
pub struct Pixel {
    pub r: u8,
    pub g: u8,
    pub b: u8
}

impl Pixel {
    pub const BLACK: Pixel = Pixel::new(0, 0, 0);
    pub const WHITE: Pixel = Pixel::new(255, 255, 255);

    pub const fn new(r: u8, g: u8, b: u8) -> Pixel {
        Pixel { r, g, b }
    }
}

impl From<[u8; 3]> for Pixel {
    fn from(value: [u8; 3]) -> Self {
        Pixel::new(value[0], value[1], value[2])
    }
}

/// A rectangular grid of pixels stored row-major with the origin
/// at the top left corner.
///
/// Bitmaps are never modified after construction, operations
/// such as flipping produce a new bitmap.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Bitmap {
    width:  usize,
    height: usize,
    pixels: Vec<Pixel>
}

impl Bitmap {
    /// Create a bitmap from row-major pixels
    ///
    /// # Errors
    /// If `pixels.len()` is not `width * height`
    ///
    /// # Example
    /// ```
    /// use lcdpack_core::bitmap::{Bitmap, Pixel};
    /// let bitmap = Bitmap::new(2, 1, vec![Pixel::BLACK, Pixel::WHITE]).unwrap();
    /// assert_eq!(bitmap.dimensions(), (2, 1));
    ///
    /// assert!(Bitmap::new(2, 2, vec![Pixel::BLACK]).is_err());
    /// ```
    pub fn new(width: usize, height: usize, pixels: Vec<Pixel>) -> Result<Bitmap, BitmapErrors> {
        let expected = width.saturating_mul(height);

        if pixels.len() != expected {
            return Err(BitmapErrors::DimensionMismatch {
                expected,
                found: pixels.len()
            });
        }
        Ok(Bitmap {
            width,
            height,
            pixels
        })
    }

    /// Create a bitmap where every pixel has the same colour
    pub fn filled(width: usize, height: usize, pixel: Pixel) -> Bitmap {
        Bitmap {
            width,
            height,
            pixels: vec![pixel; width * height]
        }
    }

    /// Create a bitmap by calling `func(x, y)` for every pixel
    pub fn from_fn<F>(width: usize, height: usize, mut func: F) -> Bitmap
    where
        F: FnMut(usize, usize) -> Pixel
    {
        let mut pixels = Vec::with_capacity(width * height);

        for y in 0..height {
            for x in 0..width {
                pixels.push(func(x, y));
            }
        }
        Bitmap {
            width,
            height,
            pixels
        }
    }

    pub const fn width(&self) -> usize {
        self.width
    }

    pub const fn height(&self) -> usize {
        self.height
    }

    /// Return `(width, height)`
    pub const fn dimensions(&self) -> (usize, usize) {
        (self.width, self.height)
    }

    pub fn pixels(&self) -> &[Pixel] {
        &self.pixels
    }

    pub fn is_empty(&self) -> bool {
        self.pixels.is_empty()
    }

    /// Pixel at column `x`, row `y` or `None` when out of bounds
    pub fn get(&self, x: usize, y: usize) -> Option<Pixel> {
        if x >= self.width || y >= self.height {
            return None;
        }
        self.pixels.get(y * self.width + x).copied()
    }

    /// Iterate over rows from top to bottom
    pub fn rows(&self) -> impl Iterator<Item = &[Pixel]> {
        // a zero width bitmap has no pixels, so any chunk size works
        self.pixels.chunks_exact(self.width.max(1))
    }

    /// Check dimensions against the given limits
    pub fn check_limits(&self, max_width: usize, max_height: usize) -> Result<(), BitmapErrors> {
        if self.width > max_width || self.height > max_height {
            return Err(BitmapErrors::TooLarge {
                width: self.width,
                height: self.height,
                max_width,
                max_height
            });
        }
        Ok(())
    }

    pub fn into_pixels(self) -> Vec<Pixel> {
        self.pixels
    }
}

#[cfg(test)]
mod tests {
    use crate::bitmap::{Bitmap, Pixel};
    use crate::errors::BitmapErrors;

    #[test]
    fn dimension_mismatch_is_rejected() {
        let err = Bitmap::new(3, 3, vec![Pixel::WHITE; 8]).unwrap_err();

        assert_eq!(
            err,
            BitmapErrors::DimensionMismatch {
                expected: 9,
                found:    8
            }
        );
    }

    #[test]
    fn from_fn_is_row_major() {
        let bitmap = Bitmap::from_fn(3, 2, |x, y| Pixel::new(x as u8, y as u8, 0));

        assert_eq!(bitmap.pixels()[1], Pixel::new(1, 0, 0));
        assert_eq!(bitmap.pixels()[3], Pixel::new(0, 1, 0));
        assert_eq!(bitmap.get(2, 1), Some(Pixel::new(2, 1, 0)));
        assert_eq!(bitmap.get(3, 0), None);
        assert_eq!(bitmap.rows().count(), 2);
    }

    #[test]
    fn zero_sized_bitmaps_have_no_rows() {
        let bitmap = Bitmap::filled(0, 4, Pixel::BLACK);

        assert!(bitmap.is_empty());
        assert_eq!(bitmap.rows().count(), 0);
    }

    #[test]
    fn limits() {
        let bitmap = Bitmap::filled(10, 20, Pixel::BLACK);

        assert!(bitmap.check_limits(10, 20).is_ok());
        assert!(bitmap.check_limits(9, 20).is_err());
    }
}
