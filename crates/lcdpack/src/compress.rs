/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! Compression of encoded streams and the glyph length prefix
//!
//! The compressor itself is a black box behind [`Compressor`]. The only
//! production implementation, [`ExternalCompressor`], hands data to an
//! external `lzg` style tool through temporary files.
use std::env::temp_dir;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use std::process::{Command, Stdio};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::{SystemTime, UNIX_EPOCH};

use lcdpack_core::bytestream::{ByteOrder, ByteWriter};
use lcdpack_core::log::{debug, trace, warn};

use crate::errors::LcdErrors;

/// Turns a buffer into its compressed form
pub trait Compressor {
    /// Compress `data`.
    ///
    /// Implementations may return an empty buffer, callers treat that
    /// as a failed compression.
    fn compress(&self, data: &[u8]) -> Result<Vec<u8>, LcdErrors>;
}

impl<C: Compressor + ?Sized> Compressor for &C {
    fn compress(&self, data: &[u8]) -> Result<Vec<u8>, LcdErrors> {
        (**self).compress(data)
    }
}

impl<C: Compressor + ?Sized> Compressor for Box<C> {
    fn compress(&self, data: &[u8]) -> Result<Vec<u8>, LcdErrors> {
        (**self).compress(data)
    }
}

static TEMP_COUNTER: AtomicUsize = AtomicUsize::new(0);

/// A path in the temporary directory that is removed when dropped.
///
/// The file is deleted on every exit path, including early returns
/// through `?` and panics that unwind.
pub struct TempFile {
    path: PathBuf
}

impl TempFile {
    /// Reserve a unique path without creating the file
    pub fn reserve(extension: &str) -> TempFile {
        let nanos = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.subsec_nanos())
            .unwrap_or_default();
        let count = TEMP_COUNTER.fetch_add(1, Ordering::Relaxed);

        let mut path = temp_dir();
        path.push(format!(
            "lcdpack-{}-{nanos}-{count}.{extension}",
            std::process::id()
        ));

        TempFile { path }
    }

    /// Create a temporary file holding `contents`
    pub fn create(extension: &str, contents: &[u8]) -> Result<TempFile, LcdErrors> {
        let file = TempFile::reserve(extension);
        // on failure `file` is dropped and the partial file removed
        fs::write(&file.path, contents)?;

        trace!("Wrote {} bytes to {:?}", contents.len(), file.path);

        Ok(file)
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl Drop for TempFile {
    fn drop(&mut self) {
        match fs::remove_file(&self.path) {
            Ok(()) => trace!("Removed {:?}", self.path),
            Err(err) if err.kind() == ErrorKind::NotFound => {}
            Err(err) => warn!("Could not remove temporary file {:?}: {}", self.path, err)
        }
    }
}

/// Runs an external compressor as `<program> -<level> <input> <output>`
#[derive(Clone, Debug)]
pub struct ExternalCompressor {
    program: PathBuf,
    level:   u8
}

impl Default for ExternalCompressor {
    fn default() -> Self {
        ExternalCompressor::new("lzg")
    }
}

impl ExternalCompressor {
    pub fn new<P: Into<PathBuf>>(program: P) -> ExternalCompressor {
        ExternalCompressor {
            program: program.into(),
            level:   9
        }
    }

    /// Set the compression level, clamped to `1..=9`
    pub fn set_level(mut self, level: u8) -> Self {
        self.level = level.clamp(1, 9);
        self
    }

    pub fn program(&self) -> &Path {
        &self.program
    }

    pub const fn level(&self) -> u8 {
        self.level
    }
}

impl Compressor for ExternalCompressor {
    fn compress(&self, data: &[u8]) -> Result<Vec<u8>, LcdErrors> {
        let input = TempFile::create("bin", data)?;
        let output = TempFile::reserve("lzg");

        debug!(
            "Running {:?} -{} on {} bytes",
            self.program,
            self.level,
            data.len()
        );

        let result = Command::new(&self.program)
            .arg(format!("-{}", self.level))
            .arg(input.path())
            .arg(output.path())
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::piped())
            .output()
            .map_err(|err| {
                LcdErrors::CompressionFailed(format!(
                    "could not run {:?} ({err}), verify that the compressor is installed",
                    self.program
                ))
            })?;

        if !result.status.success() {
            return Err(LcdErrors::CompressionFailed(format!(
                "{:?} exited with {}: {}",
                self.program,
                result.status,
                String::from_utf8_lossy(&result.stderr).trim()
            )));
        }

        let compressed = match fs::read(output.path()) {
            Ok(bytes) => bytes,
            Err(err) if err.kind() == ErrorKind::NotFound => Vec::new(),
            Err(err) => return Err(err.into())
        };
        if compressed.is_empty() {
            return Err(LcdErrors::CompressionFailed(format!(
                "{:?} produced no output",
                self.program
            )));
        }
        Ok(compressed)
    }
}

/// How compressed output is framed
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum FramingMode {
    /// Prefix with the payload length as a little endian `u16`
    Glyph,
    /// Leave the compressor output as is
    Standalone
}

/// Runs a compressor and applies the framing convention
pub struct CompressionFramer<C: Compressor> {
    compressor: C,
    mode:       FramingMode
}

impl<C: Compressor> CompressionFramer<C> {
    pub fn new(compressor: C, mode: FramingMode) -> CompressionFramer<C> {
        CompressionFramer { compressor, mode }
    }

    pub const fn mode(&self) -> FramingMode {
        self.mode
    }

    /// Compress `data` and frame the result.
    ///
    /// # Errors
    /// - [`LcdErrors::CompressionFailed`] when the compressor fails or returns nothing
    /// - [`LcdErrors::GlyphTooLarge`] in glyph mode when the payload exceeds 65535 bytes
    pub fn frame(&self, data: &[u8]) -> Result<Vec<u8>, LcdErrors> {
        let compressed = self.compressor.compress(data)?;

        if compressed.is_empty() {
            return Err(LcdErrors::CompressionFailed(
                "compressor produced no output".to_string()
            ));
        }
        match self.mode {
            FramingMode::Glyph => frame_glyph_payload(&compressed),
            FramingMode::Standalone => Ok(compressed)
        }
    }
}

/// Prepend the 2 byte little endian length of `payload`
///
/// ```
/// use lcdpack::compress::frame_glyph_payload;
/// assert_eq!(frame_glyph_payload(&[7, 8, 9]).unwrap(), [3, 0, 7, 8, 9]);
/// ```
pub fn frame_glyph_payload(payload: &[u8]) -> Result<Vec<u8>, LcdErrors> {
    let length =
        u16::try_from(payload.len()).map_err(|_| LcdErrors::GlyphTooLarge(payload.len()))?;

    let mut writer = ByteWriter::new(
        Vec::with_capacity(payload.len() + 2),
        ByteOrder::LittleEndian
    );
    writer.write_u16(length)?;
    writer.write_bytes(payload)?;

    Ok(writer.into_inner())
}

/// Sizes before and after compression
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub struct CompressionStats {
    pub original:   usize,
    pub compressed: usize
}

impl CompressionStats {
    /// Size reduction in percent, negative when the output grew
    pub fn percent_saved(&self) -> f64 {
        if self.original == 0 {
            return 0.0;
        }
        100.0 * (1.0 - self.compressed as f64 / self.original as f64)
    }
}

/// Replace the contents of `path` with its compressed form.
///
/// The file is only rewritten once compression succeeded.
pub fn compress_file_in_place<C: Compressor>(
    path: &Path, compressor: C
) -> Result<CompressionStats, LcdErrors> {
    let original = fs::read(path)?;
    let compressed = CompressionFramer::new(compressor, FramingMode::Standalone).frame(&original)?;

    fs::write(path, &compressed)?;

    let stats = CompressionStats {
        original:   original.len(),
        compressed: compressed.len()
    };
    debug!("Compressed {:?} {:?}", path, stats);

    Ok(stats)
}

#[cfg(test)]
mod tests {
    use std::cell::Cell;
    use std::fs;

    use crate::compress::{
        compress_file_in_place, frame_glyph_payload, CompressionFramer, CompressionStats,
        Compressor, ExternalCompressor, FramingMode, TempFile
    };
    use crate::errors::LcdErrors;

    /// Run length encodes pairs of (count, byte)
    struct RunLength;

    impl Compressor for RunLength {
        fn compress(&self, data: &[u8]) -> Result<Vec<u8>, LcdErrors> {
            let mut out = Vec::new();

            for chunk in data.chunk_by(|a, b| a == b) {
                for run in chunk.chunks(255) {
                    out.push(run.len() as u8);
                    out.push(run[0]);
                }
            }
            Ok(out)
        }
    }

    struct Empty;

    impl Compressor for Empty {
        fn compress(&self, _: &[u8]) -> Result<Vec<u8>, LcdErrors> {
            Ok(Vec::new())
        }
    }

    /// Returns `size` bytes regardless of input
    struct Fixed {
        size:  usize,
        calls: Cell<usize>
    }

    impl Compressor for Fixed {
        fn compress(&self, _: &[u8]) -> Result<Vec<u8>, LcdErrors> {
            self.calls.set(self.calls.get() + 1);
            Ok(vec![0xAA; self.size])
        }
    }

    #[test]
    fn glyph_prefix_is_little_endian_length() {
        for size in [0_usize, 1, 2, 255, 256, 4097, 65535] {
            let framed = frame_glyph_payload(&vec![1; size]).unwrap();

            assert_eq!(u16::from_le_bytes([framed[0], framed[1]]) as usize, size);
            assert_eq!(framed.len() - 2, size);
        }
    }

    #[test]
    fn oversized_glyph_fails_instead_of_truncating() {
        let err = frame_glyph_payload(&vec![0; 65536]).unwrap_err();
        assert!(matches!(err, LcdErrors::GlyphTooLarge(65536)));

        let framer = CompressionFramer::new(
            Fixed {
                size:  70000,
                calls: Cell::new(0)
            },
            FramingMode::Glyph
        );
        assert!(matches!(
            framer.frame(b"abc"),
            Err(LcdErrors::GlyphTooLarge(70000))
        ));
    }

    #[test]
    fn glyph_mode_frames_and_standalone_does_not() {
        let data = [5, 5, 5, 5, 9];

        let glyph = CompressionFramer::new(RunLength, FramingMode::Glyph)
            .frame(&data)
            .unwrap();
        let standalone = CompressionFramer::new(RunLength, FramingMode::Standalone)
            .frame(&data)
            .unwrap();

        assert_eq!(standalone, [4, 5, 1, 9]);
        assert_eq!(glyph, [4, 0, 4, 5, 1, 9]);
    }

    #[test]
    fn empty_compressor_output_is_an_error() {
        for mode in [FramingMode::Glyph, FramingMode::Standalone] {
            let result = CompressionFramer::new(Empty, mode).frame(b"data");
            assert!(matches!(result, Err(LcdErrors::CompressionFailed(_))));
        }
    }

    #[test]
    fn temp_files_are_removed_on_drop() {
        let path = {
            let file = TempFile::create("bin", b"contents").unwrap();
            assert!(file.path().exists());
            file.path().to_path_buf()
        };
        assert!(!path.exists());
    }

    #[test]
    fn reserved_paths_are_unique() {
        let a = TempFile::reserve("bin");
        let b = TempFile::reserve("bin");

        assert_ne!(a.path(), b.path());
    }

    #[test]
    fn in_place_compression_rewrites_the_file() {
        let file = TempFile::create("bin", &[0; 100]).unwrap();

        let stats = compress_file_in_place(file.path(), RunLength).unwrap();

        assert_eq!(
            stats,
            CompressionStats {
                original:   100,
                compressed: 2
            }
        );
        assert_eq!(fs::read(file.path()).unwrap(), [100, 0]);
        assert!((stats.percent_saved() - 98.0).abs() < 1e-9);
    }

    #[test]
    fn failed_in_place_compression_leaves_file_untouched() {
        let file = TempFile::create("bin", &[1, 2, 3]).unwrap();

        assert!(compress_file_in_place(file.path(), Empty).is_err());
        assert_eq!(fs::read(file.path()).unwrap(), [1, 2, 3]);
    }

    #[test]
    fn missing_external_program_is_a_compression_failure() {
        let compressor = ExternalCompressor::new("lcdpack-no-such-compressor").set_level(12);
        assert_eq!(compressor.level(), 9);

        let result = compressor.compress(b"pixels");
        assert!(matches!(result, Err(LcdErrors::CompressionFailed(_))));
    }

    #[test]
    fn zero_sized_input_reports_no_savings() {
        let stats = CompressionStats {
            original:   0,
            compressed: 0
        };
        assert_eq!(stats.percent_saved(), 0.0);
    }
}
