/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

pub static FLIP_HELP: &str = "Flip the image before encoding

x  : flip about the X axis, the top row is written last
y  : flip about the Y axis, every row is written right to left
xy : both, equivalent to a 180 degree rotation

The short forms -fx, -fy and -fxy are accepted";

pub static FONT_HELP: &str = "Build a font header from a directory of glyph images

Each glyph is read from <glyphs>/<decimal codepoint>.png, e.g 65.png for 'A'.
The space character needs no image, it takes the width of '-'.

Without --compress glyphs are stored one bit per pixel. With --compress
every glyph is encoded for the device, compressed and prefixed with its
16 bit little endian length.

--target arduino writes the tables into program memory for the AVR lcd
library, the default targets stm32plus.";

pub static DEVICES_HELP: &str = "Run `lcdpack devices` for the supported device and depth pairs";
