/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

#![allow(unused_imports, unused)]

use std::fs::read;
use std::path::{Path, PathBuf};

use lcdpack_core::bitmap::{Bitmap, Pixel};
use lcdpack_core::bytestream::ByteOrder;
use lcdpack_core::options::FlipMode;
use serde::de::DeserializeOwned;
use serde::Deserialize;

mod devices;
mod glyphs;

#[derive(Copy, Clone, Debug, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum JsonByteOrder {
    Little,
    Big
}

impl JsonByteOrder {
    pub fn to_byte_order(self) -> ByteOrder {
        match self {
            Self::Little => ByteOrder::LittleEndian,
            Self::Big => ByteOrder::BigEndian
        }
    }
}

#[derive(Copy, Clone, Debug, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum JsonFlip {
    None,
    X,
    Y,
    XY
}

impl JsonFlip {
    pub fn to_flip_mode(self) -> FlipMode {
        match self {
            Self::None => FlipMode::None,
            Self::X => FlipMode::X,
            Self::Y => FlipMode::Y,
            Self::XY => FlipMode::XY
        }
    }
}

/// Expected encoding of [`sample_bitmap`] for one device setting
#[derive(Clone, Deserialize, Debug)]
pub struct DeviceEntry {
    pub device:     String,
    pub depth:      u16,
    pub byte_order: JsonByteOrder,
    pub flip:       JsonFlip,
    pub expected:   String
}

/// A monochrome glyph and its packed bytes
#[derive(Clone, Deserialize, Debug)]
pub struct GlyphEntry {
    pub character: char,
    pub rows:      Vec<String>,
    pub expected:  Vec<u8>
}

pub fn fixture_path(name: &str) -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).join("tests").join(name)
}

pub fn load_fixture<T: DeserializeOwned>(name: &str) -> Vec<T> {
    let json_file = read(fixture_path(name)).unwrap();

    serde_json::from_slice(&json_file).unwrap()
}

/// 3x2 bitmap mixing saturated and odd channel values
pub fn sample_bitmap() -> Bitmap {
    Bitmap::new(
        3,
        2,
        vec![
            Pixel::new(255, 0, 0),
            Pixel::new(0x84, 0x42, 0x21),
            Pixel::new(0x12, 0xED, 0x7F),
            Pixel::new(0, 255, 0),
            Pixel::new(0x03, 0x81, 0xFF),
            Pixel::new(255, 255, 255),
        ]
    )
    .unwrap()
}

fn to_hex(bytes: &[u8]) -> String {
    bytes.iter().map(|b| format!("{b:02x}")).collect()
}
