/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

use std::fs::{self, File};
use std::io::BufWriter;
use std::path::{Path, PathBuf};

use clap::{ArgMatches, Command};
use lcdpack::codec::{ConverterRegistry, DeviceConverter, MonochromePacker};
use lcdpack::compress::compress_file_in_place;
use lcdpack::core::bitmap::{Bitmap, Pixel};
use lcdpack::decode::read_png;
use lcdpack::errors::LcdErrors;
use lcdpack::font_source::{write_font_source, FontDescriptor, FontTarget};
use lcdpack::glyph::{CharacterSet, CharacterTable, GlyphAssetBuilder};
use lcdpack::raster_dir::GlyphDirectory;
use lcdpack::transform::apply_flip;
use log::{debug, info, warn};

use crate::cmd_args::arg_parsers::TargetArg;
use crate::cmd_parsers::global_options::CmdOptions;
use crate::cmd_parsers::{get_byte_order, get_compressor, get_encoder_options};
use crate::serde::{ConversionReport, FontReport, SupportedDevice};

pub(crate) fn run_command(args: &ArgMatches, cmd_opts: &CmdOptions) -> Result<(), LcdErrors> {
    match args.subcommand() {
        Some(("convert", sub_args)) => convert_image(sub_args, cmd_opts),
        Some(("font", sub_args)) => build_font(sub_args, cmd_opts),
        Some(("devices", _)) => list_devices(cmd_opts),
        _ => Err(LcdErrors::Generic("No subcommand given".to_string()))
    }
}

fn required<'a>(args: &'a ArgMatches, id: &str) -> Result<&'a String, LcdErrors> {
    args.get_one::<String>(id)
        .ok_or_else(|| LcdErrors::Generic(format!("Missing argument {id}")))
}

fn required_path<'a>(args: &'a ArgMatches, id: &str) -> Result<&'a PathBuf, LcdErrors> {
    args.get_one::<PathBuf>(id)
        .ok_or_else(|| LcdErrors::Generic(format!("Missing argument {id}")))
}

fn convert_image(args: &ArgMatches, cmd_opts: &CmdOptions) -> Result<(), LcdErrors> {
    let input = required_path(args, "in")?;
    let output = required_path(args, "out")?;
    let options = get_encoder_options(args);

    // reject the device before any file is touched
    let converter = ConverterRegistry::resolve_str(
        required(args, "device")?,
        required(args, "depth")?,
        options.byte_order()
    )?;
    verify_file_paths(input, output)?;

    info!("Reading {:?}", input);
    let bitmap = read_png(input, &options)?;
    let (width, height) = bitmap.dimensions();

    debug!("Applying flip {:?}", options.flip());
    let bitmap = apply_flip(&bitmap, options.flip());

    let bytes = write_encoded(output, &converter, &bitmap)?;
    info!("Wrote {} bytes to {:?}", bytes, output);

    let compression = if args.get_flag("compress-output") {
        let compressor = get_compressor(args);

        match compress_file_in_place(output, &compressor) {
            Ok(stats) => Some(stats),
            Err(err) => {
                remove_output(output);
                return Err(err);
            }
        }
    } else {
        None
    };

    let report = ConversionReport {
        input,
        output,
        key: converter.key(),
        options,
        width,
        height,
        bytes,
        compression
    };

    if cmd_opts.json {
        print_json(&report)?;
    } else {
        println!("Converted {width}x{height} image for {}", report.key);
        if let Some(stats) = compression {
            println!(
                "Compressed {} bytes to {} bytes, {:.1}% reduction",
                stats.original,
                stats.compressed,
                stats.percent_saved()
            );
        }
    }
    Ok(())
}

fn write_encoded(
    output: &Path, converter: &DeviceConverter, bitmap: &Bitmap
) -> Result<usize, LcdErrors> {
    let file = File::create(output)?;

    match converter.encode_into(bitmap, BufWriter::new(file)) {
        Ok(bytes) => Ok(bytes),
        Err(err) => {
            remove_output(output);
            Err(err.into())
        }
    }
}

/// Remove an output file that cannot be trusted
fn remove_output(output: &Path) {
    if let Err(err) = fs::remove_file(output) {
        warn!("Could not remove incomplete output {:?}: {}", output, err);
    }
}

fn build_font(args: &ArgMatches, cmd_opts: &CmdOptions) -> Result<(), LcdErrors> {
    let glyphs = required_path(args, "glyphs")?;
    let output = required_path(args, "out")?;
    let name = required(args, "name")?;
    let size = args.get_one::<u32>("size").copied().unwrap_or(8);
    let spacing = args.get_one::<u32>("spacing").copied().unwrap_or(0);
    let extra_width = args.get_one::<u32>("extra-width").copied().unwrap_or(0);
    let background = args
        .get_one::<Pixel>("background")
        .copied()
        .unwrap_or(Pixel::BLACK);

    let converter = match args.get_many::<String>("compress") {
        Some(mut target) => {
            let device = target.next().ok_or("Missing device for --compress")?;
            let depth = target.next().ok_or("Missing depth for --compress")?;

            Some(ConverterRegistry::resolve_str(
                device,
                depth,
                get_byte_order(args)
            )?)
        }
        None => None
    };
    let characters = CharacterSet::new(required(args, "chars")?)?;

    if !glyphs.is_dir() {
        return Err(LcdErrors::Generic(format!(
            "Glyph directory {glyphs:?} does not exist"
        )));
    }
    let rasterizer = GlyphDirectory::new(glyphs.as_path()).set_extra_width(extra_width);

    info!("Building {} glyphs from {:?}", characters.len(), glyphs);

    let compressed = converter.is_some();
    let table: CharacterTable = match converter {
        Some(converter) => {
            GlyphAssetBuilder::compressed(rasterizer, converter, get_compressor(args))
                .build(&characters)?
        }
        None => GlyphAssetBuilder::monochrome(rasterizer, MonochromePacker::new(background))
            .build(&characters)?
    };

    let target = args
        .get_one::<TargetArg>("target")
        .map_or(FontTarget::default(), |target| target.0);
    let descriptor = FontDescriptor::new(name, size)
        .set_spacing(spacing)
        .set_compressed(compressed)
        .set_target(target);

    // rendered in memory so a failed build leaves no file behind
    let mut source = Vec::new();
    write_font_source(&mut source, &descriptor, &table)?;
    fs::write(output, source)?;

    if cmd_opts.json {
        print_json(&FontReport {
            output,
            name: descriptor.name(),
            compressed,
            target,
            table: &table
        })?;
    } else {
        println!(
            "Wrote {} glyphs of font {} to {:?}",
            table.len(),
            descriptor.name(),
            output
        );
    }
    Ok(())
}

fn list_devices(cmd_opts: &CmdOptions) -> Result<(), LcdErrors> {
    if cmd_opts.json {
        let devices: Vec<SupportedDevice> = ConverterRegistry::supported()
            .into_iter()
            .map(|(key, layout)| SupportedDevice { key, layout })
            .collect();

        return print_json(&devices);
    }
    print_device_list();
    Ok(())
}

fn print_device_list() {
    println!("Supported devices and colours:");

    for (key, layout) in ConverterRegistry::supported() {
        println!("  {:<16}{:?}", key.to_string(), layout);
    }
}

fn print_json<T: serde::Serialize>(value: &T) -> Result<(), LcdErrors> {
    let json = serde_json::to_string_pretty(value)
        .map_err(|err| LcdErrors::Generic(format!("Could not serialize report: {err}")))?;

    println!("{json}");
    Ok(())
}

/// Print usage of the subcommand that failed and the supported devices
pub(crate) fn print_usage(cmd: &mut Command, args: &ArgMatches) {
    let usage = match args.subcommand_name() {
        Some(name) => cmd
            .find_subcommand_mut(name)
            .map(|sub_cmd| sub_cmd.render_usage()),
        None => Some(cmd.render_usage())
    };
    if let Some(usage) = usage {
        println!("{usage}");
    }
    println!();
    print_device_list();
}

fn verify_file_paths(input: &Path, output: &Path) -> Result<(), LcdErrors> {
    if input == output {
        return Err(LcdErrors::Generic(format!(
            "Cannot use {input:?} as both input and output"
        )));
    }
    if !input.exists() {
        return Err(LcdErrors::Generic(format!(
            "Path {input:?}, does not exist"
        )));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use std::fs;
    use std::path::Path;

    use lcdpack::compress::TempFile;
    use lcdpack::errors::LcdErrors;

    use crate::cmd_args::create_cmd_args;
    use crate::cmd_parsers::global_options::CmdOptions;
    use crate::workflow::convert_image;

    fn crc32(bytes: &[u8]) -> u32 {
        let mut crc = !0_u32;

        for byte in bytes {
            crc ^= u32::from(*byte);
            for _ in 0..8 {
                crc = if crc & 1 == 1 {
                    (crc >> 1) ^ 0xEDB8_8320
                } else {
                    crc >> 1
                };
            }
        }
        !crc
    }

    fn adler32(bytes: &[u8]) -> u32 {
        let (mut a, mut b) = (1_u32, 0_u32);

        for byte in bytes {
            a = (a + u32::from(*byte)) % 65521;
            b = (b + a) % 65521;
        }
        (b << 16) | a
    }

    fn push_chunk(png: &mut Vec<u8>, kind: &[u8; 4], data: &[u8]) {
        png.extend_from_slice(&(data.len() as u32).to_be_bytes());

        let start = png.len();
        png.extend_from_slice(kind);
        png.extend_from_slice(data);

        let crc = crc32(&png[start..]);
        png.extend_from_slice(&crc.to_be_bytes());
    }

    /// A 1x1 red RGB image, deflated as one stored block
    fn red_png() -> Vec<u8> {
        // filter type none, then the pixel
        let scanline = [0, 255, 0, 0];
        let len = scanline.len() as u16;

        let mut zlib = vec![0x78, 0x01, 0x01];
        zlib.extend_from_slice(&len.to_le_bytes());
        zlib.extend_from_slice(&(!len).to_le_bytes());
        zlib.extend_from_slice(&scanline);
        zlib.extend_from_slice(&adler32(&scanline).to_be_bytes());

        let mut png = b"\x89PNG\r\n\x1a\n".to_vec();
        push_chunk(&mut png, b"IHDR", &[0, 0, 0, 1, 0, 0, 0, 1, 8, 2, 0, 0, 0]);
        push_chunk(&mut png, b"IDAT", &zlib);
        push_chunk(&mut png, b"IEND", &[]);
        png
    }

    fn run_convert(input: &Path, output: &Path, extra: &[&str]) -> Result<(), LcdErrors> {
        let input = input.to_string_lossy().to_string();
        let output = output.to_string_lossy().to_string();

        let mut args = vec!["lcdpack", "convert", input.as_str(), output.as_str()];
        args.extend_from_slice(extra);

        let matches = create_cmd_args().try_get_matches_from(args).unwrap();
        let (name, convert) = matches.subcommand().unwrap();
        assert_eq!(name, "convert");

        convert_image(convert, &CmdOptions::default())
    }

    #[test]
    fn converts_a_png_into_device_bytes() {
        let input = TempFile::create("png", &red_png()).unwrap();
        let output = TempFile::reserve("bin");

        run_convert(input.path(), output.path(), &["ili9325", "64", "-b"]).unwrap();

        assert_eq!(fs::read(output.path()).unwrap(), [0xF8, 0x00]);
    }

    #[test]
    fn unknown_device_leaves_no_output() {
        let input = TempFile::create("png", &red_png()).unwrap();
        let output = TempFile::reserve("bin");

        let err = run_convert(input.path(), output.path(), &["ili9999", "64"]).unwrap_err();

        assert!(err.is_configuration_error());
        assert!(!output.path().exists());
    }

    #[test]
    fn unsupported_depth_leaves_no_output() {
        let input = TempFile::create("png", &red_png()).unwrap();
        let output = TempFile::reserve("bin");

        // ssd1963 only drives 262K and 16M colours
        let err = run_convert(input.path(), output.path(), &["ssd1963", "64"]).unwrap_err();

        assert!(err.is_configuration_error());
        assert!(!output.path().exists());
    }

    #[test]
    fn failed_compression_removes_the_output() {
        let input = TempFile::create("png", &red_png()).unwrap();
        let output = TempFile::reserve("bin");

        let err = run_convert(
            input.path(),
            output.path(),
            &["ili9325", "64", "-c", "--compressor", "lcdpack-missing-compressor"]
        )
        .unwrap_err();

        assert!(matches!(err, LcdErrors::CompressionFailed(_)), "{err:?}");
        assert!(!output.path().exists());
    }
}
