/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! Bitmap and font conversion for embedded TFT controllers
//!
//! This crate ties the device layouts from [`lcdpack_codec`] to
//! input images and fonts.
//!
//! - [`decode`] turns PNG files into a [`Bitmap`](lcdpack_core::bitmap::Bitmap)
//! - [`transform`] flips bitmaps before they are encoded
//! - [`compress`] runs an external compressor and frames its output
//! - [`glyph`] builds a character table from rasterized glyphs
//! - [`font_source`] writes that table as a C++ header
//!
//! # Example
//! Encode a bitmap for an ILI9325 in 64K colour mode
//! ```
//! use lcdpack::codec::{ColourDepth, ConverterRegistry};
//! use lcdpack::core::bitmap::{Bitmap, Pixel};
//! use lcdpack::core::bytestream::ByteOrder;
//! use lcdpack::core::options::FlipMode;
//! use lcdpack::transform::apply_flip;
//!
//! let converter =
//!     ConverterRegistry::resolve("ILI9325", ColourDepth::Colours64K, ByteOrder::BigEndian)
//!         .unwrap();
//!
//! let bitmap = Bitmap::new(2, 1, vec![Pixel::new(255, 0, 0), Pixel::BLACK]).unwrap();
//! let flipped = apply_flip(&bitmap, FlipMode::Y);
//!
//! assert_eq!(converter.encode(&flipped), [0x00, 0x00, 0xF8, 0x00]);
//! ```
pub use lcdpack_codec as codec;
pub use lcdpack_core as core;

pub mod compress;
pub mod decode;
pub mod errors;
pub mod font_source;
pub mod glyph;
pub mod raster_dir;
mod serde;
pub mod transform;
