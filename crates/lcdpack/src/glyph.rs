/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! Per character glyph encoding and the character table
//!
//! A [`GlyphAssetBuilder`] walks a [`CharacterSet`] in codepoint order,
//! asks a [`GlyphRasterizer`] for each glyph and encodes it either as a
//! monochrome bitstream or as a device encoded, compressed and length
//! prefixed block.
use std::collections::{BTreeMap, BTreeSet};

use lcdpack_codec::{DeviceConverter, MonochromePacker};
use lcdpack_core::bitmap::Bitmap;
use lcdpack_core::log::{debug, trace};

use crate::compress::{CompressionFramer, Compressor, FramingMode};
use crate::errors::LcdErrors;

/// The space character, which never carries pixel data
pub const SPACE: char = ' ';

/// Glyph whose advance width is used for [`SPACE`]
pub const REFERENCE_NARROW_GLYPH: char = '-';

/// Source of glyph metrics and pixels
pub trait GlyphRasterizer {
    /// Horizontal advance of `character` in pixels
    fn advance_width(&mut self, character: char) -> Result<u32, LcdErrors>;

    /// Rendered pixels of `character`
    fn rasterize(&mut self, character: char) -> Result<Bitmap, LcdErrors>;
}

impl<R: GlyphRasterizer + ?Sized> GlyphRasterizer for &mut R {
    fn advance_width(&mut self, character: char) -> Result<u32, LcdErrors> {
        (**self).advance_width(character)
    }

    fn rasterize(&mut self, character: char) -> Result<Bitmap, LcdErrors> {
        (**self).rasterize(character)
    }
}

/// A sorted, de-duplicated set of characters that fit a 16 bit code
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct CharacterSet {
    characters: BTreeSet<char>
}

impl CharacterSet {
    /// Collect the characters of `text`.
    ///
    /// # Errors
    /// [`LcdErrors::InvalidCharacter`] for characters above U+FFFF
    pub fn new(text: &str) -> Result<CharacterSet, LcdErrors> {
        let mut characters = BTreeSet::new();

        for c in text.chars() {
            if u16::try_from(u32::from(c)).is_err() {
                return Err(LcdErrors::InvalidCharacter(c));
            }
            characters.insert(c);
        }
        Ok(CharacterSet { characters })
    }

    pub fn len(&self) -> usize {
        self.characters.len()
    }

    pub fn is_empty(&self) -> bool {
        self.characters.is_empty()
    }

    pub fn contains(&self, character: char) -> bool {
        self.characters.contains(&character)
    }

    /// Characters in ascending codepoint order
    pub fn iter(&self) -> impl Iterator<Item = char> + '_ {
        self.characters.iter().copied()
    }

    pub fn first(&self) -> Option<char> {
        self.characters.first().copied()
    }
}

/// One encoded character
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct GlyphRecord {
    code:          u16,
    advance_width: u32,
    height:        usize,
    bytes:         Option<Vec<u8>>
}

impl GlyphRecord {
    pub fn new(code: u16, advance_width: u32, height: usize, bytes: Option<Vec<u8>>) -> Self {
        GlyphRecord {
            code,
            advance_width,
            height,
            bytes
        }
    }

    pub const fn code(&self) -> u16 {
        self.code
    }

    pub fn character(&self) -> Option<char> {
        char::from_u32(u32::from(self.code))
    }

    pub const fn advance_width(&self) -> u32 {
        self.advance_width
    }

    /// Height of the rasterized glyph, zero for [`SPACE`]
    pub const fn height(&self) -> usize {
        self.height
    }

    /// Encoded glyph data, `None` when the glyph has no visible pixels
    pub fn bytes(&self) -> Option<&[u8]> {
        self.bytes.as_deref()
    }
}

/// Glyph records keyed and ordered by codepoint
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct CharacterTable {
    records: BTreeMap<u16, GlyphRecord>
}

impl CharacterTable {
    pub fn new() -> CharacterTable {
        CharacterTable::default()
    }

    /// Add `record` unless its codepoint is already present.
    ///
    /// Returns whether the record was added.
    pub fn insert(&mut self, record: GlyphRecord) -> bool {
        if self.records.contains_key(&record.code) {
            return false;
        }
        self.records.insert(record.code, record);
        true
    }

    pub fn get(&self, code: u16) -> Option<&GlyphRecord> {
        self.records.get(&code)
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Records in ascending codepoint order
    pub fn iter(&self) -> impl Iterator<Item = &GlyphRecord> {
        self.records.values()
    }

    pub fn first_code(&self) -> Option<u16> {
        self.records.keys().next().copied()
    }

    /// Tallest glyph in the table
    pub fn height(&self) -> usize {
        self.iter().map(GlyphRecord::height).max().unwrap_or(0)
    }
}

/// How glyph pixels become bytes
pub enum GlyphEncoding {
    /// One bit per pixel, LSB first
    Monochrome(MonochromePacker),
    /// Device encoding followed by compression with a length prefix
    Compressed {
        converter: DeviceConverter,
        framer:    CompressionFramer<Box<dyn Compressor>>
    }
}

impl GlyphEncoding {
    fn encode(&self, bitmap: &Bitmap) -> Result<Vec<u8>, LcdErrors> {
        match self {
            Self::Monochrome(packer) => Ok(packer.pack(bitmap)),
            Self::Compressed { converter, framer } => framer.frame(&converter.encode(bitmap))
        }
    }
}

/// Builds a [`CharacterTable`] from rasterized glyphs
pub struct GlyphAssetBuilder<R: GlyphRasterizer> {
    rasterizer: R,
    encoding:   GlyphEncoding
}

impl<R: GlyphRasterizer> GlyphAssetBuilder<R> {
    pub fn new(rasterizer: R, encoding: GlyphEncoding) -> GlyphAssetBuilder<R> {
        GlyphAssetBuilder {
            rasterizer,
            encoding
        }
    }

    /// Builder for the plain font format
    pub fn monochrome(rasterizer: R, packer: MonochromePacker) -> GlyphAssetBuilder<R> {
        Self::new(rasterizer, GlyphEncoding::Monochrome(packer))
    }

    /// Builder for fonts whose glyphs are device encoded and compressed
    pub fn compressed<C>(
        rasterizer: R, converter: DeviceConverter, compressor: C
    ) -> GlyphAssetBuilder<R>
    where
        C: Compressor + 'static
    {
        let framer = CompressionFramer::new(
            Box::new(compressor) as Box<dyn Compressor>,
            FramingMode::Glyph
        );
        Self::new(rasterizer, GlyphEncoding::Compressed { converter, framer })
    }

    pub const fn encoding(&self) -> &GlyphEncoding {
        &self.encoding
    }

    pub fn into_rasterizer(self) -> R {
        self.rasterizer
    }

    /// Encode every character of `characters`.
    ///
    /// The first failure aborts the build, no partial table is returned.
    pub fn build(&mut self, characters: &CharacterSet) -> Result<CharacterTable, LcdErrors> {
        let mut table = CharacterTable::new();

        for character in characters.iter() {
            let record = self.build_glyph(character)?;

            trace!(
                "Glyph {:?}: width {}, height {}, {} bytes",
                character,
                record.advance_width,
                record.height,
                record.bytes.as_ref().map_or(0, Vec::len)
            );
            table.insert(record);
        }
        debug!("Built character table with {} glyphs", table.len());

        Ok(table)
    }

    fn build_glyph(&mut self, character: char) -> Result<GlyphRecord, LcdErrors> {
        let code = u16::try_from(u32::from(character))
            .map_err(|_| LcdErrors::InvalidCharacter(character))?;

        if character == SPACE {
            let width = self.rasterizer.advance_width(REFERENCE_NARROW_GLYPH)?;
            return Ok(GlyphRecord::new(code, width, 0, None));
        }

        let width = self.rasterizer.advance_width(character)?;
        let bitmap = self.rasterizer.rasterize(character)?;

        let bytes = if bitmap.is_empty() {
            None
        } else {
            Some(self.encoding.encode(&bitmap)?)
        };

        Ok(GlyphRecord::new(code, width, bitmap.height(), bytes))
    }
}
