pub mod pass; // single-pass overwrite of a whole file
pub mod patterns; // the 35-pass Gutmann sequence and pattern tiling
pub mod random; // source of unpredictable bytes for random passes
pub mod target; // handles that can be overwritten in place
pub mod writer; // write loop that hides short and interrupted writes

use log::{debug, info};
use patterns::{Pass, GUTMANN_PASSES, PASS_COUNT};
use rand::rngs::ThreadRng;
use random::RandomSource;
use std::fs::{self, File, OpenOptions};
use std::io;
use std::path::Path;
use target::WipeTarget;
use thiserror::Error;

/// default scratch buffer size for each write
pub const DEFAULT_CHUNK_SIZE: usize = 4096;

/// smallest accepted scratch buffer size
pub const MIN_CHUNK_SIZE: usize = 512;

/// largest accepted scratch buffer size
pub const MAX_CHUNK_SIZE: usize = 16 * 1024 * 1024;

/// represents various errors that can occur while wiping
#[derive(Error, Debug)]
pub enum WipeError {
    /// wraps standard I/O errors with automatic conversion
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    /// the handle could not be repositioned to the start of the file
    #[error("Seek to start failed: {0}")]
    Seek(#[source] io::Error),

    /// the handle was repositioned but did not land at offset 0
    #[error("Seek to start landed at offset {0}")]
    Misplaced(u64),

    /// an unrecoverable error from the underlying write
    #[error("Write failed at offset {offset}: {source}")]
    Write {
        offset: u64,
        #[source]
        source: io::Error,
    },

    /// written data could not be forced to durable storage
    #[error("Durability flush failed: {0}")]
    Sync(#[source] io::Error),

    /// a pattern pass was asked to tile zero bytes
    #[error("Pattern pass requires a non-empty pattern")]
    EmptyPattern,

    /// a pass of the sequence failed; later passes were not attempted
    #[error("Pass {pass}/{total} failed: {source}")]
    Pass {
        pass: usize,
        total: usize,
        #[source]
        source: Box<WipeError>,
    },

    /// indicates when an operation isn't supported for the given path
    #[error("Unsupported operation: {0}")]
    UnsupportedOperation(String),
}

/// type alias for Result with our custom WipeError
pub type Result<T> = std::result::Result<T, WipeError>;

/// overwrites file contents with the fixed 35-pass Gutmann sequence
pub struct Shredder<R = ThreadRng> {
    /// source of bytes for the random passes
    rng: R,

    /// size of the buffer used for each write (default: 4KB)
    chunk_size: usize,
}

impl Shredder {
    /// creates a Shredder drawing random passes from the thread-local CSPRNG
    pub fn new() -> Self {
        Self {
            rng: rand::thread_rng(),
            chunk_size: DEFAULT_CHUNK_SIZE,
        }
    }
}

impl Default for Shredder {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: RandomSource> Shredder<R> {
    /// replaces the random source, keeping the chunk size
    pub fn with_rng<S: RandomSource>(self, rng: S) -> Shredder<S> {
        Shredder {
            rng,
            chunk_size: self.chunk_size,
        }
    }

    /// sets the buffer size for each write
    ///
    /// # Arguments
    /// * `size` - The new buffer size in bytes (minimum 512B, maximum 16MB)
    ///
    /// # Returns
    /// the shredder instance for method chaining
    pub fn with_chunk_size(mut self, size: usize) -> Self {
        self.chunk_size = size.clamp(MIN_CHUNK_SIZE, MAX_CHUNK_SIZE);
        self
    }

    /// gets the current buffer size
    pub fn chunk_size(&self) -> usize {
        self.chunk_size
    }

    /// runs all 35 passes against an open handle
    ///
    /// the length is sampled once up front; an empty target succeeds without
    /// any pass. the first failing pass aborts the sequence, leaving the file
    /// with some prefix of the passes applied. the handle stays open and its
    /// length is unchanged.
    ///
    /// # Arguments
    /// * `target` - open, writable handle to a regular file
    pub fn wipe<T: WipeTarget + ?Sized>(&mut self, target: &mut T) -> Result<()> {
        let len = target.byte_len()?;
        if len == 0 {
            debug!("Target is empty, nothing to overwrite");
            return Ok(());
        }

        info!("Starting {}-pass wipe of {} bytes", PASS_COUNT, len);
        debug!("Chunk size: {} bytes", self.chunk_size);

        for (i, step) in GUTMANN_PASSES.iter().enumerate() {
            debug!("Starting pass {}/{}: {}", i + 1, PASS_COUNT, step.describe());

            let outcome = match step {
                Pass::Random => pass::run_random_pass(target, &mut self.rng, len, self.chunk_size),
                Pass::Pattern(bytes) => pass::run_pattern_pass(target, bytes, len, self.chunk_size),
            };

            outcome.map_err(|source| WipeError::Pass {
                pass: i + 1,
                total: PASS_COUNT,
                source: Box::new(source),
            })?;
        }

        info!("All {} passes completed", PASS_COUNT);
        Ok(())
    }

    /// wipes an already open file, leaving it open for the caller
    pub fn wipe_file(&mut self, file: &mut File) -> Result<()> {
        self.wipe(file)
    }

    /// opens `path` without truncating it, wipes it and closes it again
    ///
    /// only regular files are accepted.
    pub fn wipe_path<P: AsRef<Path>>(&mut self, path: P) -> Result<()> {
        let path = path.as_ref();

        if !fs::metadata(path)?.file_type().is_file() {
            return Err(WipeError::UnsupportedOperation(format!(
                "{} is not a regular file",
                path.display()
            )));
        }

        let mut file = OpenOptions::new().write(true).open(path)?;
        info!("Wiping {}", path.display());
        self.wipe_file(&mut file)
    }

    /// wipes `path` and removes it once every pass has succeeded
    pub fn shred_path<P: AsRef<Path>>(&mut self, path: P) -> Result<()> {
        let path = path.as_ref();
        self.wipe_path(path)?;

        fs::remove_file(path)?;
        info!("{} wiped and removed", path.display());
        Ok(())
    }
}
