use alloc::vec;
use alloc::vec::Vec;

use enough::Stop;

use crate::error::RsbError;
use crate::header::{HEADER_LEN, RsbHeader};
use crate::layout::RsbLayout;
use crate::limits::Limits;
use crate::logging::{debug, trace};
use crate::unpack::unpack_rows;

/// Decoded image: `width * height` RGBA8 pixels, row-major, 4 bytes each.
#[derive(Clone, Debug)]
pub struct DecodeOutput {
    pixels: Vec<u8>,
    pub width: u32,
    pub height: u32,
    /// Source layout the pixels were unpacked from.
    pub layout: RsbLayout,
    /// Header as read from the file.
    pub header: RsbHeader,
}

impl DecodeOutput {
    /// Access the RGBA8 pixel data.
    pub fn pixels(&self) -> &[u8] {
        &self.pixels
    }

    /// Take ownership of the RGBA8 pixel data.
    pub fn into_pixels(self) -> Vec<u8> {
        self.pixels
    }

    /// Reinterpret pixel data as a typed RGBA8 slice.
    #[cfg(feature = "rgb")]
    pub fn as_pixels(&self) -> &[rgb::RGBA8] {
        use rgb::AsPixels as _;
        self.pixels.as_pixels()
    }

    /// Zero-copy view as an [`imgref::ImgRef`] of RGBA8 pixels.
    #[cfg(feature = "imgref")]
    pub fn as_imgref(&self) -> imgref::ImgRef<'_, rgb::RGBA8> {
        imgref::ImgRef::new(self.as_pixels(), self.width as usize, self.height as usize)
    }

    /// Convert to an owned [`imgref::ImgVec`] of RGBA8 pixels.
    #[cfg(feature = "imgref")]
    pub fn to_imgvec(&self) -> imgref::ImgVec<rgb::RGBA8> {
        imgref::ImgVec::new(
            self.as_pixels().to_vec(),
            self.width as usize,
            self.height as usize,
        )
    }
}

/// Decode request for RSB data held in memory.
///
/// ```no_run
/// use zenrsb::{DecodeRequest, Limits, Unstoppable};
///
/// let data: &[u8] = &[]; // RSB file bytes
/// let limits = Limits { max_pixels: Some(16 * 1024 * 1024), ..Default::default() };
/// let decoded = DecodeRequest::new(data)
///     .with_limits(&limits)
///     .decode(Unstoppable)?;
/// assert_eq!(decoded.pixels().len(), decoded.width as usize * decoded.height as usize * 4);
/// # Ok::<(), zenrsb::RsbError>(())
/// ```
#[derive(Clone, Copy, Debug)]
pub struct DecodeRequest<'a> {
    data: &'a [u8],
    limits: Option<&'a Limits>,
}

impl<'a> DecodeRequest<'a> {
    pub fn new(data: &'a [u8]) -> Self {
        Self { data, limits: None }
    }

    pub fn with_limits(mut self, limits: &'a Limits) -> Self {
        self.limits = Some(limits);
        self
    }

    /// Parse the header, then unpack the pixels that follow it.
    pub fn decode(self, stop: impl Stop) -> Result<DecodeOutput, RsbError> {
        let header = RsbHeader::parse(self.data)?;
        let plan = DecodePlan::new(header, self.limits, Source::Borrowed)?;
        stop.check()?;
        let body = &self.data[HEADER_LEN..];
        let input = body
            .get(..plan.input_bytes)
            .ok_or(RsbError::TruncatedInput {
                needed: plan.input_bytes,
                available: body.len(),
            })?;
        plan.unpack(input, &stop)
    }
}

/// Where the packed pixel bytes live during a decode.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum Source {
    /// Borrowed from the caller's slice; only the output is allocated.
    Borrowed,
    /// Copied out of a reader into a buffer that lives alongside the output.
    Buffered,
}

/// Geometry and buffer sizes derived from a header, validated up front.
#[derive(Clone, Copy, Debug)]
pub(crate) struct DecodePlan {
    pub header: RsbHeader,
    pub layout: RsbLayout,
    pub width: u32,
    pub height: u32,
    /// Packed source bytes following the header.
    pub input_bytes: usize,
    /// RGBA8 output bytes.
    pub output_bytes: usize,
}

impl DecodePlan {
    pub fn new(
        header: RsbHeader,
        limits: Option<&Limits>,
        source: Source,
    ) -> Result<Self, RsbError> {
        let layout = header.layout()?;
        let (width, height) = header.dimensions()?;

        let pixel_count = (width as usize)
            .checked_mul(height as usize)
            .ok_or(RsbError::DimensionsTooLarge { width, height })?;
        let input_bytes = pixel_count
            .checked_mul(layout.bytes_per_pixel())
            .ok_or(RsbError::DimensionsTooLarge { width, height })?;
        let output_bytes = pixel_count
            .checked_mul(4)
            .ok_or(RsbError::DimensionsTooLarge { width, height })?;

        let peak_bytes = match source {
            Source::Borrowed => output_bytes,
            Source::Buffered => input_bytes
                .checked_add(output_bytes)
                .ok_or(RsbError::DimensionsTooLarge { width, height })?,
        };
        if let Some(limits) = limits {
            limits.check(width, height, peak_bytes)?;
        }

        debug!(
            "rsb: {}x{} {:?} (file type {}), {} input bytes",
            width, height, layout, header.file_type, input_bytes
        );

        Ok(Self {
            header,
            layout,
            width,
            height,
            input_bytes,
            output_bytes,
        })
    }

    /// Unpack exactly `input_bytes` of packed pixels into a fresh RGBA8 buffer.
    pub fn unpack(&self, input: &[u8], stop: &dyn Stop) -> Result<DecodeOutput, RsbError> {
        debug_assert_eq!(input.len(), self.input_bytes);
        let mut pixels = vec![0u8; self.output_bytes];
        unpack_rows(input, &mut pixels, self.width as usize, self.layout, stop)?;
        trace!("rsb: unpacked {} pixels", self.output_bytes / 4);
        Ok(DecodeOutput {
            pixels,
            width: self.width,
            height: self.height,
            layout: self.layout,
            header: self.header,
        })
    }
}

/// Decode RSB data from any reader.
///
/// Consumes exactly the header plus `width * height * bytes_per_pixel` bytes;
/// anything after that is left in the reader.
#[cfg(feature = "std")]
pub(crate) fn decode_from_reader<R: std::io::Read + ?Sized>(
    reader: &mut R,
    limits: Option<&Limits>,
    stop: &dyn Stop,
) -> Result<DecodeOutput, RsbError> {
    use std::io::Read;

    let header = RsbHeader::read_from(reader)?;
    let plan = DecodePlan::new(header, limits, Source::Buffered)?;
    stop.check()?;
    // Buffer grows with the bytes actually present, never to the size the header claims.
    let mut input = Vec::new();
    Read::take(&mut *reader, plan.input_bytes as u64).read_to_end(&mut input)?;
    if input.len() < plan.input_bytes {
        return Err(RsbError::TruncatedInput {
            needed: plan.input_bytes,
            available: input.len(),
        });
    }
    plan.unpack(&input, stop)
}
