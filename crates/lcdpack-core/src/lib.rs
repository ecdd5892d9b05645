/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! Core routines shared by all lcdpack crates
//!
//! This crate provides the small vocabulary the device converters,
//! the glyph builder and the command line tool agree on.
//!
//! It currently contains
//!
//! - An RGB pixel and an immutable row-major bitmap
//! - Per-channel quantization (truncation) to controller bit depths
//! - An endian aware byte writer used by every packed layout
//! - Encoder options (byte order, flip mode, input limits)
//!
//! # Features
//!  - `log`: Route diagnostics through the [`log`](https://docs.rs/log) facade.
//!     Without it the macros in [`log`] expand to nothing.
//!
//!  - `serde`: Enables serializing of some of the data structures
//!     present in the crate
//!
#![macro_use]

pub mod bitmap;
pub mod bytestream;
pub mod errors;
#[cfg(not(feature = "log"))]
pub mod log;
pub mod options;
pub mod quantize;
pub mod serde;

#[cfg(feature = "log")]
pub use log;
