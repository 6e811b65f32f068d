//! The direct buffer (DBUF): a rope-free backend that maps every operation
//! straight onto the file backing store. No cursor or size is cached —
//! both are read through to the FBS's own position and length. It only
//! ever grows or overwrites a file; it never shrinks one.

use std::path::Path;

use crate::error::RopeResult;
use crate::fbs::FileBackingStore;

/// A buffer backend with no rope: every call is one FBS call.
pub struct DirectBuffer {
    fbs: FileBackingStore,
}

impl DirectBuffer {
    /// Opens `path`, creating it if missing.
    pub fn open<P: AsRef<Path>>(path: P) -> RopeResult<Self> {
        Ok(Self {
            fbs: FileBackingStore::open(path)?,
        })
    }

    pub fn tell(&mut self) -> RopeResult<u64> {
        self.fbs.tell()
    }

    pub fn size(&self) -> RopeResult<u64> {
        self.fbs.len()
    }

    pub fn to_start(&mut self) -> RopeResult<()> {
        self.fbs.to_start()
    }

    pub fn to_end(&mut self) -> RopeResult<()> {
        self.fbs.to_end()
    }

    pub fn go(&mut self, delta: i64) -> RopeResult<()> {
        self.fbs.go(delta)
    }

    /// Reads up to `count` bytes at the current position; advances it.
    pub fn view(&mut self, count: u64) -> RopeResult<Vec<u8>> {
        let mut sink = Vec::new();
        self.fbs.view(count, &mut sink)?;
        Ok(sink)
    }

    /// Overwrites at the current position, extending the file past EOF.
    pub fn replace(&mut self, data: &[u8]) -> RopeResult<()> {
        self.fbs.write(data)
    }

    /// Flushes pending writes. Never truncates: the direct backend has no
    /// notion of logical size distinct from file length.
    pub fn flush(&mut self) -> RopeResult<()> {
        self.fbs.flush()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn replace_extends_and_round_trips() {
        let tmp = tempfile::NamedTempFile::new().unwrap();
        std::fs::write(tmp.path(), b"ab").unwrap();
        let mut buf = DirectBuffer::open(tmp.path()).unwrap();
        buf.to_end().unwrap();
        buf.replace(b"cdef").unwrap();
        buf.flush().unwrap();
        assert_eq!(std::fs::read(tmp.path()).unwrap(), b"abcdef");
    }

    #[test]
    fn view_advances_position() {
        let tmp = tempfile::NamedTempFile::new().unwrap();
        std::fs::write(tmp.path(), b"Hello").unwrap();
        let mut buf = DirectBuffer::open(tmp.path()).unwrap();
        assert_eq!(buf.view(3).unwrap(), b"Hel");
        assert_eq!(buf.tell().unwrap(), 3);
    }
}
