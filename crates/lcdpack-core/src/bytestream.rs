/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! Endian aware byte writer used by the packed pixel layouts
pub use writer::ByteWriter;

mod writer;

/// Order in which the bytes of a multi-byte word are emitted
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq, Hash)]
pub enum ByteOrder {
    /// Least significant byte first, the order a little endian MCU
    /// sees when it reads the stream back as native words
    #[default]
    LittleEndian,
    /// Most significant byte first
    BigEndian
}
