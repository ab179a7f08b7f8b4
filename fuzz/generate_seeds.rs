#!/usr/bin/env -S cargo +nightly -Zscript
//! Generate seed corpus files for fuzzing.
//! Run: cargo +nightly -Zscript fuzz/generate_seeds.rs

fn header(width: i32, height: i32, depths: [i32; 4]) -> Vec<u8> {
    let mut out = Vec::new();
    for field in [0, width, height, depths[0], depths[1], depths[2], depths[3]] {
        out.extend_from_slice(&field.to_le_bytes());
    }
    out
}

fn main() {
    use std::fs;
    let dir = "fuzz/corpus/fuzz_decode";
    fs::create_dir_all(dir).unwrap();

    // One valid 2x2 file per layout
    for (name, depths, bpp) in [
        ("argb8888", [8, 8, 8, 8], 4),
        ("rgb888", [8, 8, 8, 0], 3),
        ("rgb565", [5, 6, 5, 0], 2),
        ("rgba4444", [4, 4, 4, 4], 2),
    ] {
        let mut data = header(2, 2, depths);
        data.extend((0..4 * bpp).map(|i| (i * 37) as u8));
        fs::write(format!("{dir}/{name}_2x2.rsb"), data).unwrap();
    }

    // Truncated/malformed seeds for edge coverage
    fs::write(format!("{dir}/short_header.rsb"), &header(1, 1, [8, 8, 8, 8])[..20]).unwrap();
    fs::write(format!("{dir}/no_pixels.rsb"), header(4, 4, [5, 6, 5, 0])).unwrap();
    fs::write(format!("{dir}/bad_depths.rsb"), header(1, 1, [6, 6, 6, 6])).unwrap();
    fs::write(format!("{dir}/negative_size.rsb"), header(-1, 3, [8, 8, 8, 0])).unwrap();
    fs::write(format!("{dir}/huge.rsb"), header(i32::MAX, i32::MAX, [4, 4, 4, 4])).unwrap();

    println!("Seeds written to {dir}/");
}
