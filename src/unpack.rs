//! Per-layout expansion of packed RSB pixels to RGBA8.
//!
//! Sub-byte channels are left-justified into 8 bits with the low bits zeroed.
//! There is no bit replication, so 0xF in a 4-bit channel becomes 0xF0, not 0xFF.

use enough::Stop;

use crate::error::RsbError;
use crate::layout::RsbLayout;

/// Unpack `input` (whole rows of `layout` pixels) into `out` (whole rows of RGBA8).
///
/// Both slices must hold exactly `width * height` pixels; callers size them.
pub(crate) fn unpack_rows(
    input: &[u8],
    out: &mut [u8],
    width: usize,
    layout: RsbLayout,
    stop: &dyn Stop,
) -> Result<(), RsbError> {
    let in_row = width * layout.bytes_per_pixel();
    let out_row = width * 4;
    debug_assert_eq!(input.len() / in_row, out.len() / out_row);

    for (row_idx, (src, dst)) in input
        .chunks_exact(in_row)
        .zip(out.chunks_exact_mut(out_row))
        .enumerate()
    {
        if row_idx % 16 == 0 {
            stop.check()?;
        }
        unpack_row(layout, src, dst);
    }
    Ok(())
}

fn unpack_row(layout: RsbLayout, src: &[u8], dst: &mut [u8]) {
    match layout {
        RsbLayout::Rgba8888 => {
            for (s, d) in src.chunks_exact(4).zip(dst.chunks_exact_mut(4)) {
                d.copy_from_slice(&argb8888(s[0], s[1], s[2], s[3]));
            }
        }
        RsbLayout::Rgb888 => {
            for (s, d) in src.chunks_exact(3).zip(dst.chunks_exact_mut(4)) {
                d.copy_from_slice(&[s[0], s[1], s[2], 0xFF]);
            }
        }
        RsbLayout::Rgb565 => {
            for (s, d) in src.chunks_exact(2).zip(dst.chunks_exact_mut(4)) {
                d.copy_from_slice(&rgb565(s[0], s[1]));
            }
        }
        RsbLayout::Rgba4444 => {
            for (s, d) in src.chunks_exact(2).zip(dst.chunks_exact_mut(4)) {
                d.copy_from_slice(&rgba4444(s[0], s[1]));
            }
        }
    }
}

/// Source order is A, R, G, B.
#[inline]
fn argb8888(a: u8, r: u8, g: u8, b: u8) -> [u8; 4] {
    [r, g, b, a]
}

/// `lo`, `hi` are the two bytes of a little-endian `u16` laid out RRRRRGGG GGGBBBBB.
#[inline]
fn rgb565(lo: u8, hi: u8) -> [u8; 4] {
    let r = hi & 0xF8;
    let g = ((hi & 0x07) << 5) | ((lo & 0xE0) >> 3);
    let b = (lo & 0x1F) << 3;
    [r, g, b, 0xFF]
}

/// `lo`, `hi` are the two bytes of a little-endian `u16` laid out AAAARRRR GGGGBBBB.
#[inline]
fn rgba4444(lo: u8, hi: u8) -> [u8; 4] {
    let r = (hi & 0x0F) << 4;
    let g = lo & 0xF0;
    let b = (lo & 0x0F) << 4;
    let a = hi & 0xF0;
    [r, g, b, a]
}
