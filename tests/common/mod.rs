#![allow(dead_code)]

use gutshred::target::WipeTarget;
use rand::RngCore;
use std::fs::File;
use std::io::{self, Read, Seek, SeekFrom, Write};
use std::path::Path;

/// create a test file filled with random content of the given size
pub fn create_test_file(path: &Path, size: usize) -> io::Result<Vec<u8>> {
    let mut contents = vec![0u8; size];
    rand::thread_rng().fill_bytes(&mut contents);

    let mut file = File::create(path)?;
    file.write_all(&contents)?;
    file.sync_all()?;
    Ok(contents)
}

/// checks that `data` is `pattern` repeated from offset 0
pub fn is_tiled(data: &[u8], pattern: &[u8]) -> bool {
    data.iter()
        .enumerate()
        .all(|(i, &b)| b == pattern[i % pattern.len()])
}

/// helper function to verify pattern overwrite of a file on disk
pub fn verify_pattern_overwrite(path: &Path, pattern: &[u8]) -> io::Result<bool> {
    let mut data = Vec::new();
    File::open(path)?.read_to_end(&mut data)?;
    Ok(is_tiled(&data, pattern))
}

/// in-memory wipe target that records every pass and can inject failures
///
/// a pass is counted each time the target is rewound to offset 0; the
/// content at each sync is kept so the sequence can be checked afterwards.
pub struct MemTarget {
    pub data: Vec<u8>,
    pos: usize,
    /// number of rewinds seen so far (one per pass)
    pub rewinds: usize,
    /// snapshot of the content at every sync
    pub snapshots: Vec<Vec<u8>>,
    /// writes fail once this many rewinds have happened
    pub fail_writes_on_pass: Option<usize>,
    /// accept at most this many bytes per write call
    pub max_write: usize,
    /// every nth write call reports an interrupt
    pub interrupt_every: usize,
    write_calls: usize,
}

impl MemTarget {
    pub fn new(data: Vec<u8>) -> Self {
        Self {
            data,
            pos: 0,
            rewinds: 0,
            snapshots: Vec::new(),
            fail_writes_on_pass: None,
            max_write: usize::MAX,
            interrupt_every: 0,
            write_calls: 0,
        }
    }
}

impl Write for MemTarget {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.write_calls += 1;
        if self.fail_writes_on_pass == Some(self.rewinds) {
            return Err(io::Error::new(io::ErrorKind::Other, "injected write failure"));
        }
        if self.interrupt_every != 0 && self.write_calls % self.interrupt_every == 0 {
            return Err(io::Error::new(io::ErrorKind::Interrupted, "injected interrupt"));
        }

        let n = buf.len().min(self.max_write);
        let end = self.pos + n;
        if end > self.data.len() {
            self.data.resize(end, 0);
        }
        self.data[self.pos..end].copy_from_slice(&buf[..n]);
        self.pos = end;
        Ok(n)
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

impl Seek for MemTarget {
    fn seek(&mut self, pos: SeekFrom) -> io::Result<u64> {
        match pos {
            SeekFrom::Start(offset) => self.pos = offset as usize,
            SeekFrom::End(delta) => self.pos = (self.data.len() as i64 + delta) as usize,
            SeekFrom::Current(delta) => self.pos = (self.pos as i64 + delta) as usize,
        }
        if self.pos == 0 {
            self.rewinds += 1;
        }
        Ok(self.pos as u64)
    }
}

impl WipeTarget for MemTarget {
    fn byte_len(&mut self) -> io::Result<u64> {
        Ok(self.data.len() as u64)
    }

    fn sync(&mut self) -> io::Result<()> {
        self.snapshots.push(self.data.clone());
        Ok(())
    }
}
