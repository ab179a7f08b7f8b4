use crate::error::RsbError;

/// Resource limits for decode operations.
///
/// All fields default to `None` (no limit). Every cap is checked against the
/// header before any pixel buffer exists.
#[derive(Clone, Debug, Default)]
pub struct Limits {
    pub max_width: Option<u64>,
    pub max_height: Option<u64>,
    /// Maximum pixel count (width * height).
    pub max_pixels: Option<u64>,
    /// Maximum bytes held at once by a decode.
    ///
    /// Slice decodes hold only the RGBA8 output. Reader decodes also buffer
    /// the packed pixel data, so they count both.
    pub max_memory_bytes: Option<u64>,
}

impl Limits {
    /// Check a `width` x `height` image whose decode peaks at `peak_bytes`.
    pub(crate) fn check(&self, width: u32, height: u32, peak_bytes: usize) -> Result<(), RsbError> {
        let caps = [
            ("width", u64::from(width), self.max_width),
            ("height", u64::from(height), self.max_height),
            ("pixel count", u64::from(width) * u64::from(height), self.max_pixels),
            ("decode memory", peak_bytes as u64, self.max_memory_bytes),
        ];
        for (what, value, max) in caps {
            match max {
                Some(max) if value > max => {
                    return Err(RsbError::LimitExceeded(alloc::format!(
                        "{what} {value} exceeds limit {max}"
                    )));
                }
                _ => {}
            }
        }
        Ok(())
    }
}
