/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! Device native pixel encoders for TFT controllers
//!
//! Every supported controller and colour depth pair maps to exactly one
//! [`PixelLayout`], a fixed bit layout the controller firmware decodes
//! with shifts. The set is closed, there is no way to register new layouts
//! at runtime.
//!
//! # Example
//! ```
//! use lcdpack_codec::{ColourDepth, ConverterRegistry};
//! use lcdpack_core::bitmap::{Bitmap, Pixel};
//! use lcdpack_core::bytestream::ByteOrder;
//!
//! let converter =
//!     ConverterRegistry::resolve("ILI9325", ColourDepth::Colours64K, ByteOrder::LittleEndian)
//!         .unwrap();
//! let red = Bitmap::filled(1, 1, Pixel::new(255, 0, 0));
//!
//! assert_eq!(converter.encode(&red), [0x00, 0xF8]);
//! ```
pub use converter::DeviceConverter;
pub use device::{ColourDepth, DeviceFamily, DeviceKey};
pub use errors::CodecErrors;
pub use layout::{Arrangement666, PixelLayout};
pub use mono::MonochromePacker;
pub use registry::ConverterRegistry;

mod converter;
mod device;
mod errors;
mod layout;
mod mono;
mod registry;
mod serde;
