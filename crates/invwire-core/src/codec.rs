//! Descriptor codec — one 36-byte record against a byte stream.
//!
//! Both directions take the negotiated protocol version. The record layout is
//! identical for every version, so the value is not inspected today; it is
//! part of the signature so that a future divergence lands here and nowhere
//! else.

use std::io::{self, Read, Write};

use zerocopy::{AsBytes, FromBytes};

use crate::descriptor::Descriptor;
use crate::error::InvError;
use crate::wire::{DescriptorRecord, ProtocolVersion, DESCRIPTOR_SIZE};

/// Read exactly one descriptor from `r`.
///
/// End of stream before 36 bytes is `TruncatedInput`. Any other read error is
/// returned as-is inside `InvError::Read`. A short read leaves the stream
/// wherever it stopped; there is no partial-record recovery.
pub fn decode<R: Read + ?Sized>(r: &mut R, _pver: ProtocolVersion) -> Result<Descriptor, InvError> {
    let mut buf = [0u8; DESCRIPTOR_SIZE];
    let read = fill(r, &mut buf).map_err(InvError::Read)?;
    if read < DESCRIPTOR_SIZE {
        return Err(InvError::truncated(read));
    }

    let record =
        DescriptorRecord::read_from(&buf[..]).ok_or_else(|| InvError::truncated(read))?;
    let descriptor = Descriptor::from(record);
    tracing::trace!(kind = %descriptor.kind(), hash = %descriptor.hash(), "decoded inventory descriptor");
    Ok(descriptor)
}

/// Write one descriptor to `w`: kind then hash, exactly 36 bytes.
pub fn encode<W: Write + ?Sized>(
    w: &mut W,
    _pver: ProtocolVersion,
    descriptor: &Descriptor,
) -> Result<(), InvError> {
    let record = DescriptorRecord::from(descriptor);
    w.write_all(record.as_bytes())
        .map_err(InvError::WriteFailure)?;
    tracing::trace!(kind = %descriptor.kind(), hash = %descriptor.hash(), "encoded inventory descriptor");
    Ok(())
}

/// Like `read_exact`, but reports how far it got when the stream ends early.
fn fill<R: Read + ?Sized>(r: &mut R, buf: &mut [u8]) -> io::Result<usize> {
    let mut filled = 0;
    while filled < buf.len() {
        match r.read(&mut buf[filled..]) {
            Ok(0) => break,
            Ok(n) => filled += n,
            Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
            Err(e) => return Err(e),
        }
    }
    Ok(filled)
}
