//! Stream and file front-ends.

#![cfg(feature = "std")]

use std::io::{Cursor, Read};

use enough::Unstoppable;
use zenrsb::*;

fn rsb(width: i32, height: i32, depths: [i32; 4], pixels: &[u8]) -> Vec<u8> {
    let mut out = Vec::new();
    for field in [1, width, height, depths[0], depths[1], depths[2], depths[3]] {
        out.extend_from_slice(&field.to_le_bytes());
    }
    out.extend_from_slice(pixels);
    out
}

#[test]
fn header_from_reader_consumes_exactly_28_bytes() {
    let data = rsb(3, 2, [5, 6, 5, 0], &[0xAB; 12]);
    let mut cursor = Cursor::new(&data);
    let header = RsbHeader::read_from(&mut cursor).unwrap();
    assert_eq!(cursor.position(), HEADER_LEN as u64);
    assert_eq!(header, read_header(&data).unwrap());
}

#[test]
fn reader_matches_slice_decode() {
    let pixels: Vec<u8> = (0..4 * 3 * 4).map(|i| i as u8).collect();
    let data = rsb(4, 3, [8, 8, 8, 8], &pixels);
    let from_slice = decode(&data, Unstoppable).unwrap();
    let from_reader = decode_reader(Cursor::new(&data), Unstoppable).unwrap();
    assert_eq!(from_slice.pixels(), from_reader.pixels());
    assert_eq!(from_slice.header, from_reader.header);
    assert_eq!(from_slice.layout, from_reader.layout);
}

#[test]
fn reader_leaves_trailing_bytes_unread() {
    let mut data = rsb(1, 1, [8, 8, 8, 0], &[9, 8, 7]);
    data.extend_from_slice(b"tail");
    let mut cursor = Cursor::new(&data);
    let decoded = decode_reader(&mut cursor, Unstoppable).unwrap();
    assert_eq!(decoded.pixels(), &[9, 8, 7, 255]);
    let mut rest = Vec::new();
    cursor.read_to_end(&mut rest).unwrap();
    assert_eq!(rest, b"tail");
}

#[test]
fn truncated_stream_is_reported() {
    let data = rsb(2, 2, [4, 4, 4, 4], &[0; 7]);
    match decode_reader(Cursor::new(&data), Unstoppable) {
        Err(RsbError::TruncatedInput { needed, available }) => {
            assert_eq!((needed, available), (8, 7));
        }
        other => panic!("expected TruncatedInput, got {other:?}"),
    }
    assert!(matches!(
        decode_reader(Cursor::new(&data[..10]), Unstoppable),
        Err(RsbError::TruncatedInput { needed: 28, available: 10 })
    ));
}

#[test]
fn reader_limits_fire_before_reading_pixels() {
    let data = rsb(64, 64, [8, 8, 8, 8], &[]);
    let limits = Limits {
        max_pixels: Some(1024),
        ..Default::default()
    };
    assert!(matches!(
        decode_reader_with_limits(Cursor::new(&data), Some(&limits), Unstoppable),
        Err(RsbError::LimitExceeded(_))
    ));
}

#[test]
fn missing_file_is_resource_unavailable() {
    let path = std::env::temp_dir().join("zenrsb-definitely-missing.rsb");
    match decode_file(&path, Unstoppable) {
        Err(RsbError::ResourceUnavailable(e)) => {
            assert_eq!(e.kind(), std::io::ErrorKind::NotFound)
        }
        other => panic!("expected ResourceUnavailable, got {other:?}"),
    }
}

#[test]
fn file_decode() {
    let path = std::env::temp_dir().join(format!("zenrsb-file-decode-{}.rsb", std::process::id()));
    std::fs::write(&path, rsb(2, 1, [5, 6, 5, 0], &[0x00, 0xF8, 0x1F, 0x00])).unwrap();
    let decoded = decode_file(&path, Unstoppable);
    let _ = std::fs::remove_file(&path);
    let decoded = decoded.unwrap();
    assert_eq!(decoded.pixels(), &[0xF8, 0, 0, 255, 0, 0, 0xF8, 255]);
}

#[test]
fn reader_memory_limit_counts_buffered_input() {
    // 2x2 ARGB8888: 16 packed bytes in, 16 RGBA bytes out
    let data = rsb(2, 2, [8, 8, 8, 8], &[7; 16]);
    let tight = Limits {
        max_memory_bytes: Some(16),
        ..Default::default()
    };
    assert!(DecodeRequest::new(&data).with_limits(&tight).decode(Unstoppable).is_ok());
    match decode_reader_with_limits(Cursor::new(&data), Some(&tight), Unstoppable) {
        Err(RsbError::LimitExceeded(msg)) => assert_eq!(msg, "decode memory 32 exceeds limit 16"),
        other => panic!("expected LimitExceeded, got {other:?}"),
    }

    let enough_room = Limits {
        max_memory_bytes: Some(32),
        ..Default::default()
    };
    assert!(decode_reader_with_limits(Cursor::new(&data), Some(&enough_room), Unstoppable).is_ok());
}
