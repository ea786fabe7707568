use log::trace;
use std::io::{self, ErrorKind, Write};

/// largest request handed to a single underlying write (the platform's signed write limit)
pub const MAX_WRITE: usize = isize::MAX as usize;

/// writes the whole of `buf` to `sink`, hiding short writes from the caller
///
/// interrupted writes are retried without consuming progress; any other error
/// is returned immediately. a write that accepts zero bytes is treated as
/// unrecoverable since retrying it would never make progress.
///
/// # Arguments
/// * `sink` - the handle being written to
/// * `buf` - bytes to transfer, of any length
pub fn write_all<W: Write + ?Sized>(sink: &mut W, buf: &[u8]) -> io::Result<()> {
    let mut written = 0usize;

    while written < buf.len() {
        let towrite = (buf.len() - written).min(MAX_WRITE);

        match sink.write(&buf[written..written + towrite]) {
            Ok(0) => {
                return Err(io::Error::new(
                    ErrorKind::WriteZero,
                    format!("write accepted 0 of {} bytes", towrite),
                ))
            }
            // a sink reporting more than it was given is not allowed to skip data
            Ok(n) => written += n.min(towrite),
            Err(e) if e.kind() == ErrorKind::Interrupted => {
                trace!("write interrupted at {}/{} bytes, retrying", written, buf.len());
            }
            Err(e) => return Err(e),
        }
    }

    Ok(())
}
