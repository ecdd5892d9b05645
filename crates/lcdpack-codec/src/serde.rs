/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

#![cfg(feature = "serde")]

use serde::ser::*;

use crate::device::{ColourDepth, DeviceFamily, DeviceKey};
use crate::layout::PixelLayout;

impl Serialize for DeviceFamily {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer
    {
        serializer.serialize_str(self.name())
    }
}

impl Serialize for ColourDepth {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer
    {
        serializer.serialize_u16(self.id())
    }
}

impl Serialize for DeviceKey {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer
    {
        let mut state = serializer.serialize_struct("DeviceKey", 2)?;

        state.serialize_field("device", &self.family)?;
        state.serialize_field("depth", &self.depth)?;

        state.end()
    }
}

impl Serialize for PixelLayout {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer
    {
        let mut state = serializer.serialize_struct("PixelLayout", 2)?;

        state.serialize_field("layout", &format!("{self:?}"))?;
        state.serialize_field("bytes_per_pixel", &self.bytes_per_pixel())?;

        state.end()
    }
}
