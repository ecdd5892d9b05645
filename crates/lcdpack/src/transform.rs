/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! Axis flips applied to a bitmap before encoding
//!
//! The source bitmap is never touched, every flip works on a copy.
use lcdpack_core::bitmap::Bitmap;
use lcdpack_core::log::debug;
use lcdpack_core::options::FlipMode;

/// Return `bitmap` flipped according to `mode`
///
/// `FlipMode::None` returns an identical copy.
pub fn apply_flip(bitmap: &Bitmap, mode: FlipMode) -> Bitmap {
    let (width, height) = bitmap.dimensions();

    if width == 0 || height == 0 {
        return bitmap.clone();
    }
    let mut pixels = bitmap.pixels().to_vec();

    debug!("Flipping {}x{} bitmap with {:?}", width, height, mode);

    match mode {
        FlipMode::None => {}
        FlipMode::X => reverse_rows(&mut pixels, width),
        FlipMode::Y => reverse_columns(&mut pixels, width),
        FlipMode::XY => reverse_all(&mut pixels)
    }
    // same pixel count, same dimensions
    Bitmap::from_fn(width, height, |x, y| pixels[y * width + x])
}

/// Flip about the X axis
///
/// ```text
///old image     new image
/// ┌─────────┐   ┌──────────┐
/// │a b c d e│   │f g h i j │
/// │f g h i j│   │a b c d e │
/// └─────────┘   └──────────┘
/// ```
pub fn reverse_rows<T: Copy + Default>(pixels: &mut [T], width: usize) {
    // Split in half, then swap rows read from the start
    // with rows read from the end. An odd middle row stays.
    let len = pixels.len();

    let (top, bottom) = pixels.split_at_mut(len / 2);

    let mut stride = vec![T::default(); width];

    for (t, b) in top
        .chunks_exact_mut(width)
        .zip(bottom.rchunks_exact_mut(width))
    {
        stride.copy_from_slice(t);
        t.copy_from_slice(b);
        b.copy_from_slice(&stride);
    }
}

/// Flip about the Y axis
///
///```text
///old image     new image
///┌─────────┐   ┌──────────┐
///│a b c d e│   │e d c b a │
///│f g h i j│   │j i h g f │
///└─────────┘   └──────────┘
///```
pub fn reverse_columns<T: Copy>(pixels: &mut [T], width: usize) {
    for row in pixels.chunks_exact_mut(width) {
        row.reverse();
    }
}

/// Flip about both axes
///
/// ```text
///old image     new image
/// ┌─────────┐   ┌──────────┐
/// │a b c d e│   │j i h g f │
/// │f g h i j│   │e d c b a │
/// └─────────┘   └──────────┘
/// ```
pub fn reverse_all<T: Copy>(pixels: &mut [T]) {
    pixels.reverse();
}
