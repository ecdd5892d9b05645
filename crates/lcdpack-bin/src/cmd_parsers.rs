/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

use clap::ArgMatches;
use lcdpack::compress::ExternalCompressor;
use lcdpack::core::bytestream::ByteOrder;
use lcdpack::core::options::{EncoderOptions, FlipMode};

use crate::cmd_args::arg_parsers::FlipArg;

pub mod global_options;

/// Byte order chosen by `-b`
pub fn get_byte_order(options: &ArgMatches) -> ByteOrder {
    if options.get_flag("big-endian") {
        ByteOrder::BigEndian
    } else {
        ByteOrder::LittleEndian
    }
}

/// Encoder options for a subcommand's matches
pub fn get_encoder_options(options: &ArgMatches) -> EncoderOptions {
    let flip = options
        .try_get_one::<FlipArg>("flip")
        .ok()
        .flatten()
        .map_or(FlipMode::None, |flip| flip.to_flip_mode());

    EncoderOptions::default()
        .set_byte_order(get_byte_order(options))
        .set_flip(flip)
}

/// The external compressor configured by `--compressor` and `--level`
pub fn get_compressor(options: &ArgMatches) -> ExternalCompressor {
    let program = options
        .get_one::<String>("compressor")
        .map_or("lzg", String::as_str);
    let level = options.get_one::<u8>("level").copied().unwrap_or(9);

    ExternalCompressor::new(program).set_level(level)
}
