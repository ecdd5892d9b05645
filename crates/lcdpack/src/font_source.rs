/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! C++ source output for a built [`CharacterTable`]
//!
//! The generated header declares one byte array per glyph with pixel data,
//! a `FontChar` table of `{ code, width, bytes }` records and a small
//! class so firmware can instantiate the font without knowing its
//! parameters.
//!
//! Two firmware libraries are targeted. They share symbol names and the
//! helper class, and differ in namespace and in how the tables are placed
//! in flash.
use std::io::Write;

use crate::errors::LcdErrors;
use crate::glyph::CharacterTable;

/// Firmware library the generated header is compiled into
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq)]
pub enum FontTarget {
    /// `stm32plus::display`, tables in plain `const` storage
    #[default]
    Stm32plus,
    /// The AVR `lcd` library, tables placed in program memory
    Arduino
}

impl FontTarget {
    pub const fn name(self) -> &'static str {
        match self {
            Self::Stm32plus => "stm32plus",
            Self::Arduino => "arduino"
        }
    }

    const fn namespace_open(self) -> &'static str {
        match self {
            Self::Stm32plus => "namespace stm32plus { namespace display {",
            Self::Arduino => "namespace lcd {"
        }
    }

    const fn namespace_close(self) -> &'static str {
        match self {
            Self::Stm32plus => "} }",
            Self::Arduino => "}"
        }
    }

    fn bytes_declaration(self, symbol: &str) -> String {
        match self {
            Self::Stm32plus => format!("  const uint8_t {symbol}[]="),
            Self::Arduino => {
                format!("static const uint8_t __attribute__((progmem)) {symbol}[] PROGMEM=")
            }
        }
    }

    fn table_declaration(self, symbol: &str) -> String {
        match self {
            Self::Stm32plus => format!("  const struct FontChar {symbol}[]="),
            Self::Arduino => format!(
                "  static const struct FontChar __attribute__((progmem)) {symbol}[] PROGMEM="
            )
        }
    }

    const fn table_close(self) -> &'static str {
        match self {
            Self::Stm32plus => "  };",
            Self::Arduino => "};"
        }
    }
}

/// Naming and metrics of the generated font
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct FontDescriptor {
    name:           String,
    pub size:       u32,
    pub spacing:    u32,
    /// Glyphs hold compressed, length prefixed data
    pub compressed: bool,
    pub target:     FontTarget
}

impl FontDescriptor {
    pub fn new(name: &str, size: u32) -> FontDescriptor {
        FontDescriptor {
            name: sanitize_identifier(name),
            size,
            spacing: 0,
            compressed: false,
            target: FontTarget::default()
        }
    }

    pub fn set_spacing(mut self, spacing: u32) -> Self {
        self.spacing = spacing;
        self
    }

    pub fn set_compressed(mut self, compressed: bool) -> Self {
        self.compressed = compressed;
        self
    }

    pub fn set_target(mut self, target: FontTarget) -> Self {
        self.target = target;
        self
    }

    /// Upper case identifier used in every generated symbol
    pub fn name(&self) -> &str {
        &self.name
    }

    fn base_class(&self) -> &'static str {
        if self.compressed {
            "LzgFont"
        } else {
            "Font"
        }
    }

    /// `FDEF_APPLE48_BYTES`, the code follows the name directly
    fn bytes_symbol(&self, code: u16) -> String {
        format!("FDEF_{}{}_BYTES", self.name, code)
    }

    fn table_symbol(&self) -> String {
        format!("FDEF_{}_CHAR", self.name)
    }

    /// `Font_APPLE8`
    fn class_name(&self) -> String {
        format!("Font_{}{}", self.name, self.size)
    }
}

/// Upper case `name` and replace anything that cannot appear in a C
/// identifier with an underscore
pub fn sanitize_identifier(name: &str) -> String {
    let mut identifier: String = name
        .trim()
        .chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() {
                c.to_ascii_uppercase()
            } else {
                '_'
            }
        })
        .collect();

    if identifier.is_empty() || identifier.starts_with(|c: char| c.is_ascii_digit()) {
        identifier.insert(0, '_');
    }
    identifier
}

/// Write the font header for `table` into `writer`
pub fn write_font_source<W: Write>(
    writer: &mut W, descriptor: &FontDescriptor, table: &CharacterTable
) -> Result<(), LcdErrors> {
    let name = descriptor.name();
    let target = descriptor.target;

    writeln!(writer, "#pragma once")?;
    writeln!(writer)?;
    writeln!(writer, "#include \"Font.h\"")?;
    writeln!(writer)?;
    writeln!(writer, "{}", target.namespace_open())?;
    writeln!(writer)?;
    writeln!(writer, "  // byte definitions for FDEF_{name}")?;
    writeln!(writer)?;

    for record in table.iter() {
        if let Some(bytes) = record.bytes() {
            let symbol = descriptor.bytes_symbol(record.code());

            write!(writer, "{}{{ ", target.bytes_declaration(&symbol))?;
            for byte in bytes {
                write!(writer, "{byte},")?;
            }
            writeln!(writer, "}};")?;
        }
    }

    writeln!(writer)?;
    writeln!(writer, "  // character definitions for FDEF_{name}")?;
    writeln!(writer)?;
    writeln!(
        writer,
        "{}{{",
        target.table_declaration(&descriptor.table_symbol())
    )?;

    for record in table.iter() {
        let bytes = match record.bytes() {
            Some(_) => descriptor.bytes_symbol(record.code()),
            None => "nullptr".to_string()
        };
        writeln!(
            writer,
            "    {{ {},{},{} }},",
            record.code(),
            record.advance_width(),
            bytes
        )?;
    }
    writeln!(writer, "{}", target.table_close())?;
    writeln!(writer)?;

    let class = descriptor.class_name();
    let base = descriptor.base_class();

    writeln!(
        writer,
        "  // helper so the user can just do 'new fontname' without having to know the parameters"
    )?;
    writeln!(writer)?;
    writeln!(writer, "  class {class} : public {base} {{")?;
    writeln!(writer, "    public:")?;
    writeln!(writer, "      {class}()")?;
    writeln!(
        writer,
        "        : {base}({},{},{},{},{}) {{",
        table.first_code().unwrap_or(0),
        table.len(),
        table.height(),
        descriptor.spacing,
        descriptor.table_symbol()
    )?;
    writeln!(writer, "      }}")?;
    writeln!(writer, "  }};")?;
    writeln!(writer, "{}", target.namespace_close())?;

    Ok(())
}
