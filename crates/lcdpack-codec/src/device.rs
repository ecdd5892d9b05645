/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! Controller families and colour depth identifiers
use std::fmt::{Display, Formatter};
use std::str::FromStr;

use crate::errors::CodecErrors;

/// Display controller families with a known pixel layout
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash, Ord, PartialOrd)]
pub enum DeviceFamily {
    Hx8347a,
    Hx8352a,
    Ili9325,
    /// ILI9325 on the Adafruit Arduino shield, 8 bit bus
    Ili9325a,
    Ili9327,
    Ili9481,
    /// Nokia N82 panel
    Mc2pa8201,
    Lds285,
    Ssd1963,
    St7783,
    R61523
}

impl DeviceFamily {
    pub const ALL: [DeviceFamily; 11] = [
        Self::Hx8347a,
        Self::Hx8352a,
        Self::Ili9325,
        Self::Ili9325a,
        Self::Ili9327,
        Self::Ili9481,
        Self::Mc2pa8201,
        Self::Lds285,
        Self::Ssd1963,
        Self::St7783,
        Self::R61523
    ];

    /// Lower case name used on the command line
    pub const fn name(self) -> &'static str {
        match self {
            Self::Hx8347a => "hx8347a",
            Self::Hx8352a => "hx8352a",
            Self::Ili9325 => "ili9325",
            Self::Ili9325a => "ili9325a",
            Self::Ili9327 => "ili9327",
            Self::Ili9481 => "ili9481",
            Self::Mc2pa8201 => "mc2pa8201",
            Self::Lds285 => "lds285",
            Self::Ssd1963 => "ssd1963",
            Self::St7783 => "st7783",
            Self::R61523 => "r61523"
        }
    }

    /// Look up a family by name, ignoring case
    ///
    /// ```
    /// use lcdpack_codec::DeviceFamily;
    /// assert_eq!(DeviceFamily::from_name("SSD1963"), Some(DeviceFamily::Ssd1963));
    /// assert_eq!(DeviceFamily::from_name("ssd1964"), None);
    /// ```
    pub fn from_name(name: &str) -> Option<DeviceFamily> {
        let name = name.trim();

        Self::ALL
            .into_iter()
            .find(|family| family.name().eq_ignore_ascii_case(name))
    }
}

impl Display for DeviceFamily {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for DeviceFamily {
    type Err = CodecErrors;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_name(s).ok_or_else(|| CodecErrors::UnknownDevice(s.to_string()))
    }
}

/// Colour depth identifiers as used on the command line
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash, Ord, PartialOrd)]
pub enum ColourDepth {
    /// 16M colours, `16`
    Colours16M,
    /// 64K colours, `64`
    Colours64K,
    /// 262K colours, `262`
    Colours262K
}

impl ColourDepth {
    pub const ALL: [ColourDepth; 3] = [Self::Colours16M, Self::Colours64K, Self::Colours262K];

    /// Numeric identifier, e.g `64` for 64K colours
    pub const fn id(self) -> u16 {
        match self {
            Self::Colours16M => 16,
            Self::Colours64K => 64,
            Self::Colours262K => 262
        }
    }

    pub const fn from_id(id: u16) -> Option<ColourDepth> {
        match id {
            16 => Some(Self::Colours16M),
            64 => Some(Self::Colours64K),
            262 => Some(Self::Colours262K),
            _ => None
        }
    }
}

impl Display for ColourDepth {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.id())
    }
}

impl FromStr for ColourDepth {
    type Err = CodecErrors;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.trim()
            .parse::<u16>()
            .ok()
            .and_then(ColourDepth::from_id)
            .ok_or_else(|| CodecErrors::InvalidDepth(s.to_string()))
    }
}

/// Identifies exactly one converter
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash, Ord, PartialOrd)]
pub struct DeviceKey {
    pub family: DeviceFamily,
    pub depth:  ColourDepth
}

impl DeviceKey {
    pub const fn new(family: DeviceFamily, depth: ColourDepth) -> DeviceKey {
        DeviceKey { family, depth }
    }
}

impl Display for DeviceKey {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {}", self.family, self.depth)
    }
}
