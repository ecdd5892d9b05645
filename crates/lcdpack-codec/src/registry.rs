/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! Lookup from a (device, depth) pair to its converter
use lcdpack_core::bytestream::ByteOrder;
use lcdpack_core::log::debug;

use crate::converter::DeviceConverter;
use crate::device::ColourDepth::{Colours16M, Colours262K, Colours64K};
use crate::device::DeviceFamily::*;
use crate::device::{ColourDepth, DeviceFamily, DeviceKey};
use crate::errors::CodecErrors;
use crate::layout::{Arrangement666, PixelLayout};

const RGB565: PixelLayout = PixelLayout::Rgb565;
const RGB666: PixelLayout = PixelLayout::Truncated666 {
    arrangement: Arrangement666::Rgb
};
const RGB666_PADDED: PixelLayout = PixelLayout::Truncated666 {
    arrangement: Arrangement666::Rgb0
};
const R0BG666: PixelLayout = PixelLayout::Truncated666 {
    arrangement: Arrangement666::R0bg
};
const RGB888: PixelLayout = PixelLayout::Unpacked888;

/// Every supported combination. A pair missing here is unsupported,
/// there is no fallback layout.
#[rustfmt::skip]
static DEVICE_TABLE: &[(DeviceFamily, ColourDepth, PixelLayout)] = &[
    (Hx8347a,   Colours64K,  RGB565),
    (Hx8352a,   Colours64K,  RGB565),
    (Hx8352a,   Colours262K, PixelLayout::Packed262HighWord),
    (Ili9325,   Colours64K,  RGB565),
    (Ili9325,   Colours262K, PixelLayout::Packed262Split),
    (Ili9325a,  Colours64K,  RGB565),
    (Ili9325a,  Colours262K, RGB666_PADDED),
    (Ili9327,   Colours64K,  RGB565),
    (Ili9327,   Colours262K, PixelLayout::Packed262RedWord),
    (Ili9481,   Colours64K,  RGB565),
    (Ili9481,   Colours262K, PixelLayout::Packed262RedWord),
    (Mc2pa8201, Colours64K,  RGB565),
    (Mc2pa8201, Colours262K, RGB666_PADDED),
    (Mc2pa8201, Colours16M,  RGB888),
    (Lds285,    Colours64K,  RGB565),
    (Lds285,    Colours262K, RGB666),
    (Lds285,    Colours16M,  RGB888),
    (Ssd1963,   Colours262K, PixelLayout::Packed12BitPair),
    (Ssd1963,   Colours16M,  RGB888),
    (St7783,    Colours64K,  RGB565),
    (St7783,    Colours262K, PixelLayout::Packed262Split),
    (R61523,    Colours64K,  RGB565),
    (R61523,    Colours262K, R0BG666),
    (R61523,    Colours16M,  PixelLayout::Halfword888),
];

/// Resolves device names and depths into converters
pub struct ConverterRegistry;

impl ConverterRegistry {
    /// Resolve a converter from a device name and depth.
    ///
    /// Device names are matched ignoring case.
    ///
    /// # Errors
    /// - [`CodecErrors::UnknownDevice`] if no family has that name
    /// - [`CodecErrors::UnsupportedDepth`] if the family has no layout for `depth`
    pub fn resolve(
        device: &str, depth: ColourDepth, byte_order: ByteOrder
    ) -> Result<DeviceConverter, CodecErrors> {
        let family = device.parse::<DeviceFamily>()?;

        Self::resolve_key(DeviceKey::new(family, depth), byte_order)
    }

    /// Resolve a converter from raw command line strings
    pub fn resolve_str(
        device: &str, depth: &str, byte_order: ByteOrder
    ) -> Result<DeviceConverter, CodecErrors> {
        // an unknown device is reported before a malformed depth
        let family = device.parse::<DeviceFamily>()?;
        let depth = depth.parse::<ColourDepth>()?;

        Self::resolve_key(DeviceKey::new(family, depth), byte_order)
    }

    /// Resolve a converter for an already parsed key
    pub fn resolve_key(
        key: DeviceKey, byte_order: ByteOrder
    ) -> Result<DeviceConverter, CodecErrors> {
        let layout = Self::layout_for(key).ok_or(CodecErrors::UnsupportedDepth {
            device: key.family,
            depth:  key.depth
        })?;

        debug!("Resolved {} to {:?}, {:?}", key, layout, byte_order);

        Ok(DeviceConverter::new(key, layout, byte_order))
    }

    /// Layout for `key` if the pair is supported
    pub fn layout_for(key: DeviceKey) -> Option<PixelLayout> {
        DEVICE_TABLE
            .iter()
            .find(|(family, depth, _)| *family == key.family && *depth == key.depth)
            .map(|(_, _, layout)| *layout)
    }

    /// Depths supported by `family`, in ascending identifier order
    pub fn depths_for(family: DeviceFamily) -> Vec<ColourDepth> {
        let mut depths: Vec<ColourDepth> = DEVICE_TABLE
            .iter()
            .filter(|(f, _, _)| *f == family)
            .map(|(_, depth, _)| *depth)
            .collect();

        depths.sort_by_key(|depth| depth.id());
        depths.dedup();
        depths
    }

    /// Every supported pair with its layout
    pub fn supported() -> Vec<(DeviceKey, PixelLayout)> {
        DEVICE_TABLE
            .iter()
            .map(|(family, depth, layout)| (DeviceKey::new(*family, *depth), *layout))
            .collect()
    }
}
