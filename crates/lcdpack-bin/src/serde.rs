/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

use std::path::Path;

use lcdpack::codec::{DeviceKey, PixelLayout};
use lcdpack::compress::CompressionStats;
use lcdpack::core::options::EncoderOptions;
use lcdpack::font_source::FontTarget;
use lcdpack::glyph::CharacterTable;
use serde::ser::SerializeStruct;
use serde::{Serialize, Serializer};

/// Outcome of a `convert` run
pub struct ConversionReport<'a> {
    pub input:       &'a Path,
    pub output:      &'a Path,
    pub key:         DeviceKey,
    pub options:     EncoderOptions,
    pub width:       usize,
    pub height:      usize,
    pub bytes:       usize,
    pub compression: Option<CompressionStats>
}

impl<'a> Serialize for ConversionReport<'a> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer
    {
        let mut state = serializer.serialize_struct("ConversionReport", 9)?;

        state.serialize_field("input", &self.input.to_string_lossy())?;
        state.serialize_field("output", &self.output.to_string_lossy())?;
        state.serialize_field("target", &self.key)?;
        state.serialize_field("byte_order", &self.options.byte_order())?;
        state.serialize_field("flip", &self.options.flip())?;
        state.serialize_field("width", &self.width)?;
        state.serialize_field("height", &self.height)?;
        state.serialize_field("bytes", &self.bytes)?;
        state.serialize_field("compression", &self.compression)?;

        state.end()
    }
}

/// Outcome of a `font` run
pub struct FontReport<'a> {
    pub output:     &'a Path,
    pub name:       &'a str,
    pub compressed: bool,
    pub target:     FontTarget,
    pub table:      &'a CharacterTable
}

impl<'a> Serialize for FontReport<'a> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer
    {
        let glyphs: Vec<_> = self.table.iter().collect();
        let mut state = serializer.serialize_struct("FontReport", 6)?;

        state.serialize_field("output", &self.output.to_string_lossy())?;
        state.serialize_field("name", self.name)?;
        state.serialize_field("compressed", &self.compressed)?;
        state.serialize_field("target", self.target.name())?;
        state.serialize_field("height", &self.table.height())?;
        state.serialize_field("glyphs", &glyphs)?;

        state.end()
    }
}

/// One row of the `devices` listing
pub struct SupportedDevice {
    pub key:    DeviceKey,
    pub layout: PixelLayout
}

impl Serialize for SupportedDevice {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer
    {
        let mut state = serializer.serialize_struct("SupportedDevice", 3)?;

        state.serialize_field("device", &self.key.family)?;
        state.serialize_field("depth", &self.key.depth)?;
        state.serialize_field("layout", &self.layout)?;

        state.end()
    }
}
