/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! Glyphs pre-rasterized to individual PNG files
use std::collections::HashMap;
use std::path::{Path, PathBuf};

use lcdpack_core::bitmap::Bitmap;
use lcdpack_core::log::trace;
use lcdpack_core::options::EncoderOptions;

use crate::decode::read_png;
use crate::errors::LcdErrors;
use crate::glyph::GlyphRasterizer;

/// Reads glyphs from `<root>/<decimal codepoint>.png`.
///
/// For example the glyph for `A` is read from `65.png`.
/// Images are decoded once and cached.
pub struct GlyphDirectory {
    root:        PathBuf,
    extra_width: u32,
    options:     EncoderOptions,
    cache:       HashMap<char, Bitmap>
}

impl GlyphDirectory {
    pub fn new<P: Into<PathBuf>>(root: P) -> GlyphDirectory {
        GlyphDirectory {
            root:        root.into(),
            extra_width: 0,
            options:     EncoderOptions::default(),
            cache:       HashMap::new()
        }
    }

    /// Pixels added to every advance width
    pub fn set_extra_width(mut self, extra_width: u32) -> Self {
        self.extra_width = extra_width;
        self
    }

    /// Options used when decoding glyph images
    pub fn set_options(mut self, options: EncoderOptions) -> Self {
        self.options = options;
        self
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Path of the image holding `character`
    pub fn glyph_path(&self, character: char) -> PathBuf {
        self.root.join(format!("{}.png", u32::from(character)))
    }

    fn load(&mut self, character: char) -> Result<&Bitmap, LcdErrors> {
        if !self.cache.contains_key(&character) {
            let path = self.glyph_path(character);

            if !path.is_file() {
                return Err(LcdErrors::MissingGlyph(path));
            }
            trace!("Loading glyph {:?} from {:?}", character, path);

            let bitmap = read_png(&path, &self.options)?;
            self.cache.insert(character, bitmap);
        }
        self.cache
            .get(&character)
            .ok_or(LcdErrors::Generic(format!("glyph {character:?} not cached")))
    }
}

impl GlyphRasterizer for GlyphDirectory {
    fn advance_width(&mut self, character: char) -> Result<u32, LcdErrors> {
        let extra = self.extra_width;
        let width = self.load(character)?.width();

        let width = u32::try_from(width)
            .map_err(|_| LcdErrors::Generic(format!("glyph {character:?} is too wide")))?;

        Ok(width.saturating_add(extra))
    }

    fn rasterize(&mut self, character: char) -> Result<Bitmap, LcdErrors> {
        self.load(character).cloned()
    }
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;

    use crate::errors::LcdErrors;
    use crate::glyph::GlyphRasterizer;
    use crate::raster_dir::GlyphDirectory;

    #[test]
    fn glyph_files_are_named_by_decimal_codepoint() {
        let directory = GlyphDirectory::new("glyphs");

        assert_eq!(directory.glyph_path('A'), PathBuf::from("glyphs").join("65.png"));
        assert_eq!(directory.glyph_path('€'), PathBuf::from("glyphs").join("8364.png"));
    }

    #[test]
    fn missing_glyphs_are_reported_with_their_path() {
        let mut directory = GlyphDirectory::new(std::env::temp_dir().join("lcdpack-no-glyphs"));

        match directory.rasterize('Q') {
            Err(LcdErrors::MissingGlyph(path)) => assert!(path.ends_with("81.png")),
            _ => panic!("expected a missing glyph")
        }
        assert!(directory.advance_width('Q').is_err());
    }
}
