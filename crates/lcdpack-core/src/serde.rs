/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

#![cfg(feature = "serde")]

use serde::ser::*;

use crate::bytestream::ByteOrder;
use crate::options::FlipMode;
use crate::quantize::ColorDepth;

impl Serialize for ByteOrder {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer
    {
        serializer.serialize_str(match self {
            ByteOrder::LittleEndian => "little-endian",
            ByteOrder::BigEndian => "big-endian"
        })
    }
}

impl Serialize for FlipMode {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer
    {
        serializer.serialize_str(match self {
            FlipMode::None => "none",
            FlipMode::X => "x",
            FlipMode::Y => "y",
            FlipMode::XY => "xy"
        })
    }
}

impl Serialize for ColorDepth {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer
    {
        // the debug name is stable and readable
        serializer.serialize_str(&format!("{self:?}"))
    }
}
