/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! Reading input images into a [`Bitmap`]
use std::fs;
use std::path::Path;

use lcdpack_core::bitmap::{Bitmap, Pixel};
use lcdpack_core::log::trace;
use lcdpack_core::options::EncoderOptions;
use zune_core::colorspace::ColorSpace;
use zune_core::options::DecoderOptions;
use zune_png::PngDecoder;

use crate::errors::LcdErrors;

/// Decode a PNG held in memory.
///
/// Sixteen bit images are reduced to eight bits per sample and alpha is
/// discarded.
pub fn decode_png(data: &[u8], options: &EncoderOptions) -> Result<Bitmap, LcdErrors> {
    let decoder_options = DecoderOptions::default()
        .png_set_strip_to_8bit(true)
        .set_max_width(options.max_width())
        .set_max_height(options.max_height());

    let mut decoder = PngDecoder::new_with_options(data, decoder_options);

    let samples = decoder
        .decode_raw()
        .map_err(|err| LcdErrors::ImageDecodeErrors(format!("{err:?}")))?;

    let (width, height) = decoder
        .get_dimensions()
        .ok_or(LcdErrors::ImageDecodeErrors("missing image header".to_string()))?;
    let colorspace = decoder
        .get_colorspace()
        .ok_or(LcdErrors::ImageDecodeErrors("missing image header".to_string()))?;

    trace!("Decoded {}x{} PNG with colorspace {:?}", width, height, colorspace);

    let bitmap = bitmap_from_samples(width, height, colorspace, &samples)?;
    bitmap.check_limits(options.max_width(), options.max_height())?;

    Ok(bitmap)
}

/// Read and decode the PNG at `path`
pub fn read_png<P: AsRef<Path>>(path: P, options: &EncoderOptions) -> Result<Bitmap, LcdErrors> {
    let data = fs::read(path.as_ref())?;

    decode_png(&data, options)
}

/// Build a bitmap from interleaved 8 bit samples.
///
/// Luma is replicated to all three channels, alpha channels are dropped.
pub fn bitmap_from_samples(
    width: usize, height: usize, colorspace: ColorSpace, samples: &[u8]
) -> Result<Bitmap, LcdErrors> {
    let to_pixel: fn(&[u8]) -> Pixel = match colorspace {
        ColorSpace::RGB | ColorSpace::RGBA => |s: &[u8]| Pixel::new(s[0], s[1], s[2]),
        ColorSpace::BGR | ColorSpace::BGRA => |s: &[u8]| Pixel::new(s[2], s[1], s[0]),
        ColorSpace::Luma | ColorSpace::LumaA => |s: &[u8]| Pixel::new(s[0], s[0], s[0]),
        other => return Err(LcdErrors::UnsupportedColorspace(format!("{other:?}")))
    };
    let components = colorspace.num_components();

    let pixels = samples.chunks_exact(components).map(to_pixel).collect();

    Ok(Bitmap::new(width, height, pixels)?)
}

#[cfg(test)]
mod tests {
    use lcdpack_core::bitmap::Pixel;
    use lcdpack_core::errors::BitmapErrors;
    use lcdpack_core::options::EncoderOptions;
    use zune_core::colorspace::ColorSpace;

    use crate::decode::{bitmap_from_samples, decode_png};
    use crate::errors::LcdErrors;

    #[test]
    fn rgba_drops_alpha() {
        let samples = [1, 2, 3, 255, 4, 5, 6, 0];
        let bitmap = bitmap_from_samples(2, 1, ColorSpace::RGBA, &samples).unwrap();

        assert_eq!(bitmap.pixels(), [Pixel::new(1, 2, 3), Pixel::new(4, 5, 6)]);
    }

    #[test]
    fn bgr_is_reordered() {
        let bitmap = bitmap_from_samples(1, 1, ColorSpace::BGR, &[10, 20, 30]).unwrap();
        assert_eq!(bitmap.get(0, 0), Some(Pixel::new(30, 20, 10)));

        let bitmap = bitmap_from_samples(1, 1, ColorSpace::BGRA, &[10, 20, 30, 40]).unwrap();
        assert_eq!(bitmap.get(0, 0), Some(Pixel::new(30, 20, 10)));
    }

    #[test]
    fn luma_is_replicated() {
        let bitmap = bitmap_from_samples(2, 2, ColorSpace::LumaA, &[7, 0, 8, 0, 9, 0, 10, 0])
            .unwrap();

        assert_eq!(bitmap.get(1, 1), Some(Pixel::new(10, 10, 10)));
        assert_eq!(bitmap.get(0, 1), Some(Pixel::new(9, 9, 9)));
    }

    #[test]
    fn short_sample_buffers_are_rejected() {
        let result = bitmap_from_samples(2, 2, ColorSpace::RGB, &[0; 9]);

        assert!(matches!(
            result,
            Err(LcdErrors::BitmapErrors(BitmapErrors::DimensionMismatch {
                expected: 4,
                found:    3
            }))
        ));
    }

    #[test]
    fn unsupported_colorspaces_are_reported() {
        let result = bitmap_from_samples(1, 1, ColorSpace::CMYK, &[0; 4]);
        assert!(matches!(result, Err(LcdErrors::UnsupportedColorspace(_))));
    }

    #[test]
    fn garbage_is_not_a_png() {
        let result = decode_png(b"definitely not a png", &EncoderOptions::default());
        assert!(matches!(result, Err(LcdErrors::ImageDecodeErrors(_))));
    }
}
