/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

use std::collections::HashSet;

use lcdpack::transform::apply_flip;
use lcdpack_codec::{ColourDepth, ConverterRegistry, DeviceKey};

use crate::{load_fixture, sample_bitmap, to_hex, DeviceEntry};

#[test]
#[allow(clippy::uninlined_format_args)]
fn test_device_layouts() {
    let entries: Vec<DeviceEntry> = load_fixture("devices.json");
    let bitmap = sample_bitmap();

    let mut error = false;
    let mut failed = Vec::new();

    for entry in &entries {
        let depth = ColourDepth::from_id(entry.depth).unwrap();
        let converter =
            ConverterRegistry::resolve(&entry.device, depth, entry.byte_order.to_byte_order())
                .unwrap();

        let flipped = apply_flip(&bitmap, entry.flip.to_flip_mode());
        let found = to_hex(&converter.encode(&flipped));

        if found != entry.expected {
            error = true;
            failed.push(entry.to_owned());

            let err = format!(
                "Mismatch for {} {}\nExpected {} but found {}\nConfig:{:#?}",
                entry.device, entry.depth, entry.expected, found, entry
            );
            eprintln!("{}\n", err)
        }
    }
    if error {
        panic!("Errors found during encoding\n {:#?}", failed);
    }
}

#[test]
fn fixtures_cover_every_supported_pair() {
    let entries: Vec<DeviceEntry> = load_fixture("devices.json");

    let covered: HashSet<DeviceKey> = entries
        .iter()
        .map(|entry| {
            let depth = ColourDepth::from_id(entry.depth).unwrap();
            let family = entry.device.parse().unwrap();
            DeviceKey::new(family, depth)
        })
        .collect();

    for (key, _) in ConverterRegistry::supported() {
        assert!(covered.contains(&key), "{key} has no fixture");
    }
}

#[test]
fn streaming_and_buffered_encodings_agree() {
    let bitmap = sample_bitmap();

    for (key, _) in ConverterRegistry::supported() {
        let converter =
            ConverterRegistry::resolve_key(key, lcdpack_core::bytestream::ByteOrder::BigEndian)
                .unwrap();

        let mut streamed = Vec::new();
        let written = converter.encode_into(&bitmap, &mut streamed).unwrap();

        assert_eq!(written, converter.encoded_size(&bitmap));
        assert_eq!(streamed, converter.encode(&bitmap));
    }
}
