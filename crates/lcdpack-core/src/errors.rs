/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! Errors raised while building bitmaps and quantizers
use std::fmt::{Debug, Display, Formatter};

/// Errors occurring when constructing core data structures
#[derive(Clone, Eq, PartialEq)]
pub enum BitmapErrors {
    /// The pixel buffer does not hold `width * height` pixels
    DimensionMismatch { expected: usize, found: usize },
    /// Width or height exceeds the configured limit
    TooLarge {
        width:      usize,
        height:     usize,
        max_width:  usize,
        max_height: usize
    },
    /// A channel bit width outside of `1..=8` was requested
    InvalidChannelBits(u8)
}

impl Debug for BitmapErrors {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::DimensionMismatch { expected, found } => {
                writeln!(
                    f,
                    "Pixel count mismatch, expected {expected} pixels but found {found}"
                )
            }
            Self::TooLarge {
                width,
                height,
                max_width,
                max_height
            } => {
                writeln!(
                    f,
                    "Too large dimensions {width}x{height}, limits are {max_width}x{max_height}"
                )
            }
            Self::InvalidChannelBits(bits) => {
                writeln!(f, "Channel width of {bits} bits is outside of 1..=8")
            }
        }
    }
}

impl Display for BitmapErrors {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{self:?}")
    }
}

impl std::error::Error for BitmapErrors {}
