/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

use clap::{value_parser, Arg, ArgAction, Command};

use crate::cmd_args::arg_parsers::{parse_background, FlipArg, TargetArg};

pub mod arg_parsers;
pub mod help_strings;

#[rustfmt::skip]
pub fn create_cmd_args() -> Command {
    Command::new("lcdpack")
        .about("Convert images and fonts into packed pixel data for TFT controllers")
        .subcommand_required(true)
        .arg_required_else_help(true)
        .subcommand(convert_command())
        .subcommand(font_command())
        .subcommand(Command::new("devices")
            .about("List supported devices and colour depths")
            .arg(Arg::new("json")
                .long("json")
                .action(ArgAction::SetTrue)
                .help("Print the list as JSON")))
        .arg(Arg::new("debug")
            .long("debug")
            .global(true)
            .action(ArgAction::SetTrue)
            .help_heading("LOGGING")
            .help("Display debug information and higher"))
        .arg(Arg::new("trace")
            .long("trace")
            .global(true)
            .action(ArgAction::SetTrue)
            .help_heading("LOGGING")
            .help("Display very verbose information"))
        .arg(Arg::new("warn")
            .long("warn")
            .global(true)
            .action(ArgAction::SetTrue)
            .help_heading("LOGGING")
            .help("Display warnings and errors"))
        .arg(Arg::new("info")
            .long("info")
            .global(true)
            .action(ArgAction::SetTrue)
            .help_heading("LOGGING")
            .help("Display information about the conversion"))
}

#[rustfmt::skip]
fn convert_command() -> Command {
    Command::new("convert")
        .about("Convert a PNG image into device native pixel data")
        .after_help(help_strings::DEVICES_HELP)
        .arg(Arg::new("in")
            .help("Input PNG image")
            .value_parser(value_parser!(std::path::PathBuf))
            .required(true))
        .arg(Arg::new("out")
            .help("Output file for the packed pixel data")
            .value_parser(value_parser!(std::path::PathBuf))
            .required(true))
        .arg(Arg::new("device")
            .help("Target display controller, e.g ili9325")
            .required(true))
        .arg(Arg::new("depth")
            .help("Target colour depth: 16 (16M), 64 (64K) or 262 (262K)")
            .required(true))
        .arg(Arg::new("big-endian")
            .short('b')
            .long("big-endian")
            .action(ArgAction::SetTrue)
            .help("Write multi byte words most significant byte first"))
        .arg(Arg::new("flip")
            .short('f')
            .long("flip")
            .help("Flip the image before encoding")
            .long_help(help_strings::FLIP_HELP)
            .value_parser(value_parser!(FlipArg)))
        .arg(Arg::new("compress-output")
            .short('c')
            .long("compress")
            .action(ArgAction::SetTrue)
            .help_heading("COMPRESSION")
            .help("Compress the output in place with an external LZG compressor"))
        .args(compressor_args())
        .arg(Arg::new("json")
            .long("json")
            .action(ArgAction::SetTrue)
            .help("Print a JSON report instead of plain text"))
}

#[rustfmt::skip]
fn font_command() -> Command {
    Command::new("font")
        .about("Build a font header from a directory of glyph images")
        .long_about(help_strings::FONT_HELP)
        .arg(Arg::new("glyphs")
            .help("Directory holding <codepoint>.png glyph images")
            .value_parser(value_parser!(std::path::PathBuf))
            .required(true))
        .arg(Arg::new("out")
            .help("Output header file")
            .value_parser(value_parser!(std::path::PathBuf))
            .required(true))
        .arg(Arg::new("name")
            .long("name")
            .help("Font name used in generated symbols")
            .required(true))
        .arg(Arg::new("chars")
            .long("chars")
            .help("Characters to include, duplicates are ignored")
            .required(true))
        .arg(Arg::new("size")
            .long("size")
            .help("Point size recorded in the class name")
            .value_parser(value_parser!(u32))
            .default_value("8"))
        .arg(Arg::new("spacing")
            .long("spacing")
            .help("Pixels between characters")
            .value_parser(value_parser!(u32))
            .default_value("0"))
        .arg(Arg::new("extra-width")
            .long("extra-width")
            .help("Pixels added to every advance width")
            .value_parser(value_parser!(u32))
            .default_value("0"))
        .arg(Arg::new("background")
            .long("background")
            .help("Background colour as RRGGBB, other pixels are set")
            .value_parser(parse_background)
            .default_value("000000"))
        .arg(Arg::new("target")
            .long("target")
            .help("Firmware library the header is written for")
            .value_parser(value_parser!(TargetArg))
            .default_value("stm32plus"))
        .arg(Arg::new("compress")
            .long("compress")
            .num_args(2)
            .value_names(["DEVICE", "DEPTH"])
            .help("Encode glyphs for a device and compress them"))
        .arg(Arg::new("big-endian")
            .short('b')
            .long("big-endian")
            .action(ArgAction::SetTrue)
            .requires("compress")
            .help("Write multi byte words most significant byte first"))
        .args(compressor_args())
        .arg(Arg::new("json")
            .long("json")
            .action(ArgAction::SetTrue)
            .help("Print a JSON report instead of plain text"))
}

#[rustfmt::skip]
fn compressor_args() -> [Arg; 2] {
    [
        Arg::new("compressor")
            .long("compressor")
            .help_heading("COMPRESSION")
            .help("Compressor program, run as <program> -<level> <in> <out>")
            .default_value("lzg"),
        Arg::new("level")
            .long("level")
            .help_heading("COMPRESSION")
            .help("Compression level")
            .value_parser(value_parser!(u8).range(1..=9))
            .default_value("9")
    ]
}
