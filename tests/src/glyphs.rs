/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

use lcdpack::errors::LcdErrors;
use lcdpack::font_source::{write_font_source, FontDescriptor, FontTarget};
use lcdpack::glyph::{CharacterSet, GlyphAssetBuilder, GlyphRasterizer};
use lcdpack_codec::MonochromePacker;
use lcdpack_core::bitmap::{Bitmap, Pixel};

use crate::{load_fixture, GlyphEntry};

fn glyph_bitmap(rows: &[String]) -> Bitmap {
    let width = rows.first().map_or(0, String::len);
    let pixels = rows
        .iter()
        .flat_map(|row| row.chars())
        .map(|c| if c == '#' { Pixel::WHITE } else { Pixel::BLACK })
        .collect();

    Bitmap::new(width, rows.len(), pixels).unwrap()
}

/// Rasterizer backed by the glyph fixtures, '-' is a blank glyph
struct FixtureFont {
    glyphs: Vec<GlyphEntry>
}

impl GlyphRasterizer for FixtureFont {
    fn advance_width(&mut self, character: char) -> Result<u32, LcdErrors> {
        Ok(self.rasterize(character)?.width() as u32)
    }

    fn rasterize(&mut self, character: char) -> Result<Bitmap, LcdErrors> {
        if character == '-' {
            return Ok(Bitmap::filled(6, 8, Pixel::BLACK));
        }
        self.glyphs
            .iter()
            .find(|glyph| glyph.character == character)
            .map(|glyph| glyph_bitmap(&glyph.rows))
            .ok_or(LcdErrors::Generic(format!("no fixture for {character:?}")))
    }
}

#[test]
fn test_monochrome_glyphs() {
    let entries: Vec<GlyphEntry> = load_fixture("glyphs.json");
    let packer = MonochromePacker::default();

    for entry in &entries {
        let packed = packer.pack(&glyph_bitmap(&entry.rows));

        assert_eq!(packed, entry.expected, "glyph {:?}", entry.character);
    }
}

#[test]
fn font_header_from_fixture_glyphs() {
    let entries: Vec<GlyphEntry> = load_fixture("glyphs.json");
    let text: String = entries.iter().map(|entry| entry.character).chain([' ']).collect();

    let characters = CharacterSet::new(&text).unwrap();
    let mut builder =
        GlyphAssetBuilder::monochrome(FixtureFont { glyphs: entries }, MonochromePacker::default());
    let table = builder.build(&characters).unwrap();

    let render = |descriptor: &FontDescriptor| {
        let mut source = Vec::new();
        write_font_source(&mut source, descriptor, &table).unwrap();
        String::from_utf8(source).unwrap()
    };

    // lines as they appear in the stm32plus Apple.h
    let source = render(&FontDescriptor::new("Apple", 8));

    for line in [
        "namespace stm32plus { namespace display {\n",
        "  // byte definitions for FDEF_APPLE\n",
        "  const uint8_t FDEF_APPLE48_BYTES[]={ 28,34,50,42,38,34,28,0,};\n",
        "  const uint8_t FDEF_APPLE65_BYTES[]={ 8,20,34,34,62,34,34,0,};\n",
        "  const uint8_t FDEF_APPLE121_BYTES[]={ 0,0,34,34,34,60,32,28,};\n",
        "  // character definitions for FDEF_APPLE\n",
        "  const struct FontChar FDEF_APPLE_CHAR[]={\n",
        "    { 48,8,FDEF_APPLE48_BYTES },\n",
        "    { 121,8,FDEF_APPLE121_BYTES },\n",
        "  class Font_APPLE8 : public Font {\n",
        "      Font_APPLE8()\n"
    ] {
        assert!(source.contains(line), "missing {line:?}");
    }
    assert!(source.contains("    { 32,6,nullptr },\n    { 48,8,FDEF_APPLE48_BYTES },"));
    assert!(source.contains(": Font(32,6,8,0,FDEF_APPLE_CHAR)"));

    // lines as they appear in the Arduino Apple.h
    let source = render(&FontDescriptor::new("Apple", 8).set_target(FontTarget::Arduino));

    for line in [
        "namespace lcd {\n",
        "static const uint8_t __attribute__((progmem)) FDEF_APPLE65_BYTES[] PROGMEM={ 8,20,34,34,62,34,34,0,};\n",
        "static const uint8_t __attribute__((progmem)) FDEF_APPLE121_BYTES[] PROGMEM={ 0,0,34,34,34,60,32,28,};\n",
        "  static const struct FontChar __attribute__((progmem)) FDEF_APPLE_CHAR[] PROGMEM={\n",
        "    { 48,8,FDEF_APPLE48_BYTES },\n"
    ] {
        assert!(source.contains(line), "missing {line:?}");
    }
}
