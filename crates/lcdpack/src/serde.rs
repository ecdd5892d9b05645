/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

#![cfg(feature = "serde-support")]

use serde::ser::*;

use crate::compress::CompressionStats;
use crate::glyph::GlyphRecord;

impl Serialize for CompressionStats {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer
    {
        let mut state = serializer.serialize_struct("CompressionStats", 3)?;

        state.serialize_field("original", &self.original)?;
        state.serialize_field("compressed", &self.compressed)?;
        state.serialize_field("percent_saved", &self.percent_saved())?;

        state.end()
    }
}

impl Serialize for GlyphRecord {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer
    {
        let mut state = serializer.serialize_struct("GlyphRecord", 4)?;

        state.serialize_field("code", &self.code())?;
        state.serialize_field("advance_width", &self.advance_width())?;
        state.serialize_field("height", &self.height())?;
        state.serialize_field("size", &self.bytes().map(<[u8]>::len))?;

        state.end()
    }
}
