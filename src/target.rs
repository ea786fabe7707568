use std::fs::File;
use std::io::{self, Seek, Write};

/// an open, writable, seekable handle whose contents can be overwritten in place
///
/// the handle's lifecycle belongs to the caller; wiping only reads its length,
/// repositions it and writes to it.
pub trait WipeTarget: Write + Seek {
    /// current length of the underlying file in bytes
    fn byte_len(&mut self) -> io::Result<u64>;

    /// forces previously written data to durable storage
    fn sync(&mut self) -> io::Result<()>;
}

impl WipeTarget for File {
    fn byte_len(&mut self) -> io::Result<u64> {
        Ok(self.metadata()?.len())
    }

    fn sync(&mut self) -> io::Result<()> {
        full_sync(self)
    }
}

impl<T: WipeTarget + ?Sized> WipeTarget for &mut T {
    fn byte_len(&mut self) -> io::Result<u64> {
        (**self).byte_len()
    }

    fn sync(&mut self) -> io::Result<()> {
        (**self).sync()
    }
}

// fsync on apple platforms stops at the drive's volatile cache
#[cfg(any(target_os = "macos", target_os = "ios"))]
fn full_sync(file: &File) -> io::Result<()> {
    use std::os::unix::io::AsRawFd;

    let result = unsafe { libc::fcntl(file.as_raw_fd(), libc::F_FULLFSYNC) };
    if result == -1 {
        log::warn!(
            "F_FULLFSYNC rejected ({}), falling back to fsync",
            io::Error::last_os_error()
        );
        return file.sync_all();
    }
    Ok(())
}

#[cfg(not(any(target_os = "macos", target_os = "ios")))]
fn full_sync(file: &File) -> io::Result<()> {
    file.sync_all()
}
