//! # zenrsb
//!
//! Decoder for the Red Storm Bitmap (RSB) raster format.
//!
//! An RSB file is a 28-byte little-endian header followed by tightly packed
//! pixels in one of four channel layouts. Decoding always produces
//! row-major 8-bit RGBA, ready to hand to any standard encoder.
//!
//! ## Supported Layouts
//!
//! | depths (R/G/B/A) | stored as            | bytes/pixel |
//! |------------------|----------------------|-------------|
//! | 8/8/8/8          | A, R, G, B           | 4           |
//! | 8/8/8/0          | R, G, B              | 3           |
//! | 5/6/5/0          | little-endian `u16`  | 2           |
//! | 4/4/4/4          | little-endian `u16`  | 2           |
//!
//! Sub-byte channels are left-justified (4-bit `0xF` becomes `0xF0`), and
//! layouts without alpha decode as fully opaque. Any other depth combination is
//! rejected with [`RsbError::UnsupportedPixelFormat`].
//!
//! ## Non-Goals
//!
//! - Encoding RSB
//! - Color management
//!
//! ## Usage
//!
//! ```no_run
//! use zenrsb::{ImageInfo, Unstoppable};
//!
//! let data: &[u8] = &[]; // your RSB bytes
//!
//! // Probe without decoding
//! let info = ImageInfo::from_bytes(data)?;
//! println!("{}x{} {:?}", info.width, info.height, info.layout);
//!
//! let decoded = zenrsb::decode(data, Unstoppable)?;
//! assert_eq!(decoded.pixels().len(), info.width as usize * info.height as usize * 4);
//! # Ok::<(), zenrsb::RsbError>(())
//! ```
//!
//! ## Features
//!
//! - `std` (default): decode from [`std::io::Read`] and from files.
//! - `log`: emit decoder diagnostics through the `log` facade.
//! - `rgb` / `imgref`: typed pixel and 2D buffer views of the output.
//! - `cli`: builds the `rsb2png` converter.

#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

extern crate alloc;

mod decode;
mod error;
mod header;
mod info;
#[cfg(feature = "std")]
mod io;
mod layout;
mod limits;
mod logging;
mod unpack;

// Re-exports
pub use decode::{DecodeOutput, DecodeRequest};
pub use enough::{Stop, Unstoppable};
pub use error::RsbError;
pub use header::{HEADER_LEN, RsbHeader};
pub use info::ImageInfo;
pub use layout::RsbLayout;
pub use limits::Limits;

/// Parse the 28-byte RSB header at the start of `data`.
pub fn read_header(data: &[u8]) -> Result<RsbHeader, RsbError> {
    RsbHeader::parse(data)
}

/// Decode an RSB image held in memory to RGBA8.
pub fn decode(data: &[u8], stop: impl Stop) -> Result<DecodeOutput, RsbError> {
    DecodeRequest::new(data).decode(stop)
}

/// Decode an RSB image from a reader to RGBA8.
///
/// Reads exactly the header and the pixel bytes it describes.
#[cfg(feature = "std")]
pub fn decode_reader<R: std::io::Read>(reader: R, stop: impl Stop) -> Result<DecodeOutput, RsbError> {
    decode_reader_with_limits(reader, None, stop)
}

/// Like [`decode_reader`], checking `limits` before any pixel buffer is allocated.
#[cfg(feature = "std")]
pub fn decode_reader_with_limits<R: std::io::Read>(
    mut reader: R,
    limits: Option<&Limits>,
    stop: impl Stop,
) -> Result<DecodeOutput, RsbError> {
    decode::decode_from_reader(&mut reader, limits, &stop)
}

/// Open and decode an RSB file.
///
/// A missing or unreadable file gives [`RsbError::ResourceUnavailable`].
#[cfg(feature = "std")]
pub fn decode_file(
    path: impl AsRef<std::path::Path>,
    stop: impl Stop,
) -> Result<DecodeOutput, RsbError> {
    let file = std::fs::File::open(path.as_ref())?;
    decode_reader(std::io::BufReader::new(file), stop)
}
