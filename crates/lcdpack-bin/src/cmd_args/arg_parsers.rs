/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

use clap::builder::PossibleValue;
use clap::ValueEnum;
use lcdpack::core::bitmap::Pixel;
use lcdpack::core::options::FlipMode;
use lcdpack::font_source::FontTarget;

#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum FlipArg {
    X,
    Y,
    XY
}

impl FlipArg {
    pub const fn to_flip_mode(self) -> FlipMode {
        match self {
            FlipArg::X => FlipMode::X,
            FlipArg::Y => FlipMode::Y,
            FlipArg::XY => FlipMode::XY
        }
    }
}

impl ValueEnum for FlipArg {
    fn value_variants<'a>() -> &'a [Self] {
        &[Self::X, Self::Y, Self::XY]
    }

    fn to_possible_value(&self) -> Option<PossibleValue> {
        Some(match self {
            Self::X => PossibleValue::new("x").help("Flip about the X axis, top becomes bottom"),
            Self::Y => PossibleValue::new("y").help("Flip about the Y axis, left becomes right"),
            Self::XY => PossibleValue::new("xy")
                .alias("yx")
                .help("Flip about both axes")
        })
    }
}

#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub struct TargetArg(pub FontTarget);

impl ValueEnum for TargetArg {
    fn value_variants<'a>() -> &'a [Self] {
        &[Self(FontTarget::Stm32plus), Self(FontTarget::Arduino)]
    }

    fn to_possible_value(&self) -> Option<PossibleValue> {
        let value = PossibleValue::new(self.0.name());

        Some(match self.0 {
            FontTarget::Stm32plus => value.help("stm32plus display library"),
            FontTarget::Arduino => value.help("Arduino lcd library, tables in PROGMEM")
        })
    }
}

/// Parse a `RRGGBB` colour, with an optional leading `#`
pub fn parse_background(value: &str) -> Result<Pixel, String> {
    let hex = value.trim().trim_start_matches('#');

    if hex.len() != 6 || !hex.chars().all(|c| c.is_ascii_hexdigit()) {
        return Err(format!("Invalid colour {value:?}, expected RRGGBB"));
    }
    let channel = |start: usize| {
        u8::from_str_radix(&hex[start..start + 2], 16)
            .map_err(|err| format!("Invalid colour {value:?}: {err}"))
    };

    Ok(Pixel::new(channel(0)?, channel(2)?, channel(4)?))
}

#[cfg(test)]
mod tests {
    use lcdpack::core::bitmap::Pixel;

    use crate::cmd_args::arg_parsers::parse_background;

    #[test]
    fn backgrounds_parse_as_hex() {
        assert_eq!(parse_background("ffffff"), Ok(Pixel::WHITE));
        assert_eq!(parse_background("#FF8000"), Ok(Pixel::new(255, 128, 0)));
        assert!(parse_background("fff").is_err());
        assert!(parse_background("gg0000").is_err());
    }
}
