/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! Errors possible during conversion, compression and font building
use std::fmt::{Debug, Display, Formatter};
use std::io;
use std::path::PathBuf;

use lcdpack_codec::CodecErrors;
use lcdpack_core::errors::BitmapErrors;

/// All possible errors that can occur while producing device data
pub enum LcdErrors {
    /// Device or depth selection was rejected
    CodecErrors(CodecErrors),
    /// A bitmap could not be built from the decoded samples
    BitmapErrors(BitmapErrors),
    IoErrors(io::Error),
    /// The input image could not be decoded
    ImageDecodeErrors(String),
    /// The decoded image uses samples we cannot map to RGB
    UnsupportedColorspace(String),
    /// The compressor failed or produced no output
    CompressionFailed(String),
    /// A compressed glyph does not fit a 16 bit length prefix
    GlyphTooLarge(usize),
    /// Character cannot be stored as a 16 bit code
    InvalidCharacter(char),
    /// No pre-rasterized image exists for a glyph
    MissingGlyph(PathBuf),
    Generic(String)
}

impl LcdErrors {
    /// Whether the error was caused by a bad device, depth or argument
    /// and was raised before any encoding started
    pub const fn is_configuration_error(&self) -> bool {
        match self {
            Self::CodecErrors(err) => err.is_configuration_error(),
            _ => false
        }
    }
}

impl Debug for LcdErrors {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::CodecErrors(err) => writeln!(f, "{err:?}"),
            Self::BitmapErrors(err) => writeln!(f, "{err:?}"),
            Self::IoErrors(err) => writeln!(f, "{err}"),
            Self::ImageDecodeErrors(reason) => writeln!(f, "Could not decode image: {reason}"),
            Self::UnsupportedColorspace(colorspace) => {
                writeln!(f, "Unsupported image colorspace {colorspace}")
            }
            Self::CompressionFailed(reason) => writeln!(f, "Compression failed: {reason}"),
            Self::GlyphTooLarge(size) => {
                writeln!(
                    f,
                    "Compressed glyph of {size} bytes does not fit a 16 bit length prefix (max {})",
                    u16::MAX
                )
            }
            Self::InvalidCharacter(c) => {
                writeln!(
                    f,
                    "Character {c:?} (U+{:04X}) is outside the 16 bit range",
                    *c as u32
                )
            }
            Self::MissingGlyph(path) => writeln!(f, "No glyph image at {path:?}"),
            Self::Generic(reason) => writeln!(f, "{reason}")
        }
    }
}

impl Display for LcdErrors {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{self:?}")
    }
}

impl std::error::Error for LcdErrors {}

impl From<CodecErrors> for LcdErrors {
    fn from(err: CodecErrors) -> Self {
        match err {
            CodecErrors::IoErrors(err) => LcdErrors::IoErrors(err),
            err => LcdErrors::CodecErrors(err)
        }
    }
}

impl From<BitmapErrors> for LcdErrors {
    fn from(err: BitmapErrors) -> Self {
        LcdErrors::BitmapErrors(err)
    }
}

impl From<io::Error> for LcdErrors {
    fn from(err: io::Error) -> Self {
        LcdErrors::IoErrors(err)
    }
}

impl From<String> for LcdErrors {
    fn from(reason: String) -> Self {
        LcdErrors::Generic(reason)
    }
}

impl From<&'static str> for LcdErrors {
    fn from(reason: &'static str) -> Self {
        LcdErrors::Generic(reason.to_string())
    }
}
