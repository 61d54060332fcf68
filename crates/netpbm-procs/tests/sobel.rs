/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

use nanorand::{Rng, WyRand};
use netpbm_core::kind::NetPbmKind;
use netpbm_image::image::Image;
use netpbm_image::traits::OperationsTrait;
use netpbm_procs::pad::PadMethod;
use netpbm_procs::sobel::{Sobel, SobelOptions};
use xxhash_rust::xxh3::xxh3_128;

fn random_greymap(width: usize, height: usize, seed: u64) -> Image {
    let mut bytes = vec![0_u8; width * height];
    WyRand::new_seed(seed).fill(&mut bytes);

    let pixels = bytes.iter().map(|x| u32::from(*x)).collect();

    Image::new(NetPbmKind::BinaryGreymap, width, height, 255, pixels).unwrap()
}

fn hash_pixels(image: &Image) -> u128 {
    let bytes = image
        .pixels()
        .iter()
        .flat_map(|x| x.to_le_bytes())
        .collect::<Vec<u8>>();

    xxh3_128(&bytes)
}

fn sobel_hash(image: &Image, options: SobelOptions) -> u128 {
    let mut image = image.clone();
    Sobel::new(options).execute(&mut image).unwrap();

    hash_pixels(&image)
}

#[test]
fn output_does_not_depend_on_thread_count() {
    // odd sizes so the stride never lines up with rows
    for (width, height) in [(97, 61), (1, 33), (40, 1), (7, 5)] {
        let image = random_greymap(width, height, (width * height) as u64);

        for pad_method in [PadMethod::Replicate, PadMethod::Constant] {
            let options = SobelOptions::default().set_pad_method(pad_method);
            let expected = sobel_hash(&image, options);

            for threads in [2, 4, 8] {
                assert_eq!(
                    sobel_hash(&image, options.set_threads(threads)),
                    expected,
                    "{width}x{height} differs on {threads} threads"
                );
            }
        }
    }
}

#[test]
fn repeated_runs_are_deterministic() {
    let image = random_greymap(128, 128, 42);
    let options = SobelOptions::default().set_threads(8);

    let first = sobel_hash(&image, options);

    for _ in 0..4 {
        assert_eq!(sobel_hash(&image, options), first);
    }
}

#[test]
fn clamped_output_stays_in_range() {
    let mut image = random_greymap(64, 48, 7);
    let options = SobelOptions::default()
        .set_threads(3)
        .set_clamp_to_maxval(true);

    Sobel::new(options).execute(&mut image).unwrap();

    assert!(image.pixels().iter().all(|x| *x <= 255));
}

#[test]
fn unclamped_output_can_exceed_maxval() {
    // two pixel wide vertical stripes, gx = 4 * 255 at every stripe edge
    let pixels = (0..16 * 16)
        .map(|i| if (i % 16) / 2 % 2 == 0 { 0 } else { 255 })
        .collect();
    let mut image = Image::new(NetPbmKind::AsciiGreymap, 16, 16, 255, pixels).unwrap();

    Sobel::new(SobelOptions::default().set_threads(2))
        .execute(&mut image)
        .unwrap();

    assert!(image.pixels().iter().any(|x| *x > 255));
    assert_eq!(image.kind(), NetPbmKind::AsciiGreymap);
}
