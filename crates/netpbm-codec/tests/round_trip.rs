/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! Decode then encode tests over every supported kind
use nanorand::{Rng, WyRand};
use netpbm_codec::{NetPbmDecoder, NetPbmEncoder};
use netpbm_core::kind::NetPbmKind;
use netpbm_core::options::EncoderOptions;

fn decode(data: &[u8]) -> (Vec<u32>, NetPbmKind, usize, usize, u32) {
    let mut decoder = NetPbmDecoder::new(data);
    let pixels = decoder.decode().unwrap();
    let (width, height) = decoder.dimensions().unwrap();

    (
        pixels,
        decoder.kind().unwrap(),
        width,
        height,
        decoder.maxval().unwrap()
    )
}

fn re_encode(data: &[u8]) -> Vec<u8> {
    let (pixels, kind, width, height, maxval) = decode(data);
    let options = EncoderOptions::new(width, height, kind, maxval);

    NetPbmEncoder::new(&pixels, options).encode_to_vec().unwrap()
}

fn binary_image(magic: &[u8], width: usize, height: usize, payload_len: usize) -> Vec<u8> {
    let mut payload = vec![0_u8; payload_len];
    WyRand::new_seed(width as u64 * 31 + height as u64).fill(&mut payload);

    let mut data = Vec::new();
    data.extend_from_slice(magic);
    data.extend_from_slice(format!("\n{width}\n{height}\n").as_bytes());
    if magic != b"P4" {
        data.extend_from_slice(b"255\n");
    }
    data.extend_from_slice(&payload);
    data
}

#[test]
fn ascii_kinds_are_pixel_equal() {
    let inputs: [&[u8]; 3] = [
        b"P1\n# checker\n3 2\n010\n1 0 1\n",
        b"P2 2 2\n# comment\n255\n0   128\n255\t64\n",
        b"P3\n2 1\n100\n10 20 30 100 0 99\n"
    ];
    for input in inputs {
        let first = decode(input);
        let second = decode(&re_encode(input));

        assert_eq!(first, second);
    }
}

#[test]
fn binary_kinds_are_byte_identical() {
    let mut rng = WyRand::new_seed(42);

    for _ in 0..20 {
        let width = rng.generate_range(1_usize..=37);
        let height = rng.generate_range(1_usize..=9);

        let inputs = [
            binary_image(b"P4", width, height, width.div_ceil(8) * height),
            binary_image(b"P5", width, height, width * height),
            binary_image(b"P6", width, height, width * height * 3)
        ];
        for input in inputs {
            let encoded = re_encode(&input);
            // random P4 padding bits are not kept, compare what they decode to
            if input.starts_with(b"P4") {
                assert_eq!(encoded.len(), input.len());
                assert_eq!(decode(&encoded), decode(&input));
            } else {
                assert_eq!(encoded, input);
            }
        }
    }
}

#[test]
fn binary_bitmap_width_ten_keeps_two_bytes_per_row() {
    // padding bits are zero, so the round trip is exact
    let data = b"P4\n10\n3\n\xa5\xc0\xff\x40\x00\x80";
    let encoded = re_encode(data);

    assert_eq!(&encoded[..], &data[..]);

    let (pixels, _, width, height, _) = decode(data);
    assert_eq!(pixels.len(), width * height);
    assert_eq!(encoded.len() - b"P4\n10\n3\n".len(), 2 * height);
}
