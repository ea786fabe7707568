use crate::patterns::tile;
use crate::random::RandomSource;
use crate::target::WipeTarget;
use crate::writer;
use crate::{Result, WipeError};
use std::io::SeekFrom;

/// overwrites the first `len` bytes of `target` with `pattern` repeated end to end
///
/// the chunk is tiled once and written unmodified until `len` is covered,
/// then the target is synced to durable storage.
///
/// # Arguments
/// * `target` - open, writable handle
/// * `pattern` - non-empty byte pattern
/// * `len` - number of bytes to overwrite, starting at offset 0
/// * `chunk_size` - scratch buffer capacity
pub fn run_pattern_pass<T: WipeTarget + ?Sized>(
    target: &mut T,
    pattern: &[u8],
    len: u64,
    chunk_size: usize,
) -> Result<()> {
    if pattern.is_empty() {
        return Err(WipeError::EmptyPattern);
    }

    let mut chunk = vec![0u8; chunk_size.max(pattern.len())];
    let filled = tile(pattern, &mut chunk);
    let chunk = &chunk[..filled];

    rewind(target)?;
    let mut remaining = len;
    while remaining > 0 {
        let towrite = remaining.min(chunk.len() as u64) as usize;
        write_chunk(target, &chunk[..towrite], len - remaining)?;
        remaining -= towrite as u64;
    }

    target.sync().map_err(WipeError::Sync)
}

/// overwrites the first `len` bytes of `target` with fresh random bytes
///
/// every chunk is regenerated before it is written, so no stretch of
/// randomness appears twice in the file.
pub fn run_random_pass<T, R>(target: &mut T, rng: &mut R, len: u64, chunk_size: usize) -> Result<()>
where
    T: WipeTarget + ?Sized,
    R: RandomSource + ?Sized,
{
    let mut chunk = vec![0u8; chunk_size.max(1)];

    rewind(target)?;
    let mut remaining = len;
    while remaining > 0 {
        let towrite = remaining.min(chunk.len() as u64) as usize;
        rng.fill_random(&mut chunk[..towrite]);
        write_chunk(target, &chunk[..towrite], len - remaining)?;
        remaining -= towrite as u64;
    }

    target.sync().map_err(WipeError::Sync)
}

fn rewind<T: WipeTarget + ?Sized>(target: &mut T) -> Result<()> {
    match target.seek(SeekFrom::Start(0)).map_err(WipeError::Seek)? {
        0 => Ok(()),
        landed => Err(WipeError::Misplaced(landed)),
    }
}

fn write_chunk<T: WipeTarget + ?Sized>(target: &mut T, chunk: &[u8], offset: u64) -> Result<()> {
    writer::write_all(target, chunk).map_err(|source| WipeError::Write { offset, source })
}
