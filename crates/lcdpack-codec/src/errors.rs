/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

use std::fmt::{Debug, Display, Formatter};
use std::io;

use crate::device::{ColourDepth, DeviceFamily};

/// Errors occurring while resolving or running a converter
pub enum CodecErrors {
    /// The device name is not one of the supported controller families
    UnknownDevice(String),
    /// The controller family is known but has no layout for the depth
    UnsupportedDepth {
        device: DeviceFamily,
        depth:  ColourDepth
    },
    /// The colour depth identifier could not be parsed
    InvalidDepth(String),
    /// The output sink failed
    IoErrors(io::Error)
}

impl CodecErrors {
    /// Whether this error comes from a bad device/depth selection
    /// rather than from writing output
    pub const fn is_configuration_error(&self) -> bool {
        !matches!(self, Self::IoErrors(_))
    }
}

impl From<io::Error> for CodecErrors {
    fn from(err: io::Error) -> Self {
        CodecErrors::IoErrors(err)
    }
}

impl Debug for CodecErrors {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnknownDevice(name) => {
                writeln!(f, "{name} is an unrecognised device")
            }
            Self::UnsupportedDepth { device, depth } => {
                writeln!(f, "Unsupported depth {depth} for device {device}")
            }
            Self::InvalidDepth(value) => {
                writeln!(f, "Invalid colour depth {value:?}, expected one of 16, 64 or 262")
            }
            Self::IoErrors(err) => {
                writeln!(f, "{err}")
            }
        }
    }
}

impl Display for CodecErrors {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{self:?}")
    }
}

impl std::error::Error for CodecErrors {}
