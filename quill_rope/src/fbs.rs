//! Random-access wrapper around the single file a buffer edits.
//!
//! All positions are absolute byte offsets; there is no text encoding assumed
//! anywhere in this module. `FileBackingStore` owns the file handle exclusively
//! and tracks nothing beyond what `std::fs::File` already tracks (its position,
//! derivable length). It never gets ahead of the file: writes extend it,
//! `truncate_here` is the only operation that shrinks it.

use std::fs::{File, OpenOptions};
use std::io::{Read, Seek, SeekFrom, Write};
use std::path::Path;

use crate::error::RopeError;

/// The file backing store (FBS): positioned reads/writes over one open file.
#[derive(Debug)]
pub struct FileBackingStore {
    file: File,
}

impl FileBackingStore {
    /// Opens `path` read+write, creating an empty file if it does not exist.
    /// Position starts at 0.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self, RopeError> {
        let file = OpenOptions::new()
            .read(true)
            .write(true)
            .create(true)
            .truncate(false)
            .open(path)
            .map_err(RopeError::IoOpen)?;
        Ok(Self { file })
    }

    /// Current file length, independent of the current position.
    pub fn len(&self) -> Result<u64, RopeError> {
        self.file.metadata().map(|m| m.len()).map_err(RopeError::IoRead)
    }

    /// Seeks absolute to `pos`, then copies up to `count` bytes into `sink`,
    /// stopping at EOF. Does not extend the file. Leaves the position at
    /// `pos + bytes_read`.
    pub fn read_at(&mut self, pos: u64, count: u64, sink: &mut Vec<u8>) -> Result<u64, RopeError> {
        self.file.seek(SeekFrom::Start(pos)).map_err(RopeError::IoRead)?;
        self.view(count, sink)
    }

    /// As `read_at` but starting at the current position; advances the
    /// position by the number of bytes actually read.
    pub fn view(&mut self, count: u64, sink: &mut Vec<u8>) -> Result<u64, RopeError> {
        let mut remaining = count;
        let mut total = 0u64;
        let mut chunk = [0u8; 8192];
        while remaining > 0 {
            let want = remaining.min(chunk.len() as u64) as usize;
            let read = self.file.read(&mut chunk[..want]).map_err(RopeError::IoRead)?;
            if read == 0 {
                break;
            }
            sink.extend_from_slice(&chunk[..read]);
            total += read as u64;
            remaining -= read as u64;
        }
        Ok(total)
    }

    /// Current absolute position.
    pub fn tell(&mut self) -> Result<u64, RopeError> {
        self.file.stream_position().map_err(RopeError::IoRead)
    }

    /// Seeks to the beginning of the file.
    pub fn to_start(&mut self) -> Result<(), RopeError> {
        self.file.seek(SeekFrom::Start(0)).map_err(RopeError::IoRead)?;
        Ok(())
    }

    /// Seeks to the end of the file.
    pub fn to_end(&mut self) -> Result<(), RopeError> {
        self.file.seek(SeekFrom::End(0)).map_err(RopeError::IoRead)?;
        Ok(())
    }

    /// Seeks relative to the current position by `delta` (may be negative).
    pub fn go(&mut self, delta: i64) -> Result<(), RopeError> {
        self.file.seek(SeekFrom::Current(delta)).map_err(RopeError::IoRead)?;
        Ok(())
    }

    /// Writes `bytes` at the current position, overwriting existing content
    /// and extending the file past EOF as needed. Advances the position by
    /// the number of bytes written.
    pub fn write(&mut self, bytes: &[u8]) -> Result<(), RopeError> {
        self.file.write_all(bytes).map_err(RopeError::IoWrite)
    }

    /// Forces pending buffered data to the OS.
    pub fn flush(&mut self) -> Result<(), RopeError> {
        self.file.flush().map_err(RopeError::IoWrite)
    }

    /// Truncates the file length to the current position. Bytes before the
    /// current position are unchanged; the position itself does not move.
    pub fn truncate_here(&mut self) -> Result<(), RopeError> {
        let pos = self.tell()?;
        self.file.set_len(pos).map_err(RopeError::IoWrite)
    }
}
