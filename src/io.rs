use std::io::{ErrorKind, Read};

use crate::error::RsbError;

/// Fill `buf` completely from `reader`.
///
/// Like `read_exact`, but a short stream reports how many bytes were actually
/// available instead of a bare `UnexpectedEof`.
pub(crate) fn read_fully<R: Read + ?Sized>(reader: &mut R, buf: &mut [u8]) -> Result<(), RsbError> {
    let mut filled = 0;
    while filled < buf.len() {
        match reader.read(&mut buf[filled..]) {
            Ok(0) => {
                return Err(RsbError::TruncatedInput {
                    needed: buf.len(),
                    available: filled,
                });
            }
            Ok(n) => filled += n,
            Err(e) if e.kind() == ErrorKind::Interrupted => {}
            Err(e) => return Err(RsbError::ResourceUnavailable(e)),
        }
    }
    Ok(())
}
