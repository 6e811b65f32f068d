//! The buffer (BUF): a cursor and a rope over one open file.
//!
//! `Buffer` is the crate's public surface for insertable editing — it owns
//! the file backing store and the root rope node, and exposes the same
//! position-based command set a console front end drives directly: `view`,
//! `replace`, `insert`, `erase`, `flush`, and cursor motion.

use std::path::Path;

use crate::error::RopeResult;
use crate::fbs::FileBackingStore;
use crate::node::RopeNode;

/// An editable view over a single file, backed by a piece-rope.
pub struct Buffer {
    fbs: FileBackingStore,
    root: RopeNode,
    position: u64,
    size: u64,
    original_size: u64,
}

impl Buffer {
    /// Opens `path`, creating it if missing. The rope starts as a single
    /// original leaf spanning the whole file.
    pub fn open<P: AsRef<Path>>(path: P) -> RopeResult<Self> {
        let fbs = FileBackingStore::open(path)?;
        let size = fbs.len()?;
        Ok(Self {
            fbs,
            root: RopeNode::original(0, size),
            position: 0,
            size,
            original_size: size,
        })
    }

    /// Current cursor position.
    pub fn tell(&self) -> u64 {
        self.position
    }

    /// Total logical size of the buffer's content.
    pub fn size(&self) -> u64 {
        self.size
    }

    /// Moves the cursor to the start of the buffer.
    pub fn to_start(&mut self) {
        self.position = 0;
    }

    /// Moves the cursor to the end of the buffer.
    pub fn to_end(&mut self) {
        self.position = self.size;
    }

    /// Moves the cursor by `delta` bytes, clamped to `[0, size]`.
    pub fn go(&mut self, delta: i64) {
        let target = self.position as i64 + delta;
        self.position = target.clamp(0, self.size as i64) as u64;
    }

    /// Reads up to `count` bytes starting at the cursor; does not move it.
    pub fn view(&mut self, count: u64) -> RopeResult<Vec<u8>> {
        self.view_range(self.position, count)
    }

    /// Reads up to `count` bytes starting at an explicit position.
    pub fn view_range(&mut self, pos: u64, count: u64) -> RopeResult<Vec<u8>> {
        let mut sink = Vec::new();
        let pos = pos.min(self.size);
        let count = count.min(self.size - pos);
        self.root.view(pos, count, &mut sink, &mut self.fbs)?;
        Ok(sink)
    }

    /// Reads the whole buffer.
    pub fn view_all(&mut self) -> RopeResult<Vec<u8>> {
        self.view_range(0, self.size)
    }

    /// Overwrites `data.len()` bytes starting at the cursor, growing the
    /// buffer if the write runs past the current end.
    pub fn replace(&mut self, data: &[u8]) {
        if data.is_empty() {
            return;
        }
        self.root.replace(self.position, data);
        self.size = self.size.max(self.position + data.len() as u64);
        self.position += data.len() as u64;
    }

    /// Inserts `data` at the cursor, shifting later content right.
    pub fn insert(&mut self, data: &[u8]) {
        if data.is_empty() {
            return;
        }
        self.root.insert(self.position, data);
        self.size += data.len() as u64;
        self.position += data.len() as u64;
    }

    /// Deletes up to `count` bytes starting at the cursor.
    pub fn erase(&mut self, count: u64) {
        let count = count.min(self.size - self.position);
        if count == 0 {
            return;
        }
        self.root.erase(self.position, count);
        self.size -= count;
    }

    /// Writes every pending edit back to the file in place, reusing
    /// unmodified regions as scratch space rather than appending a fresh
    /// copy. Truncates the file if the buffer shrank.
    pub fn flush(&mut self) -> RopeResult<()> {
        self.fbs.to_start()?;
        self.root.flush(&mut self.fbs, 0)?;
        if self.size < self.original_size {
            self.fbs.truncate_here()?;
        }
        self.fbs.flush()?;
        self.original_size = self.size;
        self.root = RopeNode::original(0, self.size);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::NamedTempFile;

    fn seeded(content: &[u8]) -> (Buffer, NamedTempFile) {
        let tmp = NamedTempFile::new().expect("tmp");
        std::fs::write(tmp.path(), content).expect("seed");
        let buf = Buffer::open(tmp.path()).expect("open");
        (buf, tmp)
    }

    fn reopen(tmp: &NamedTempFile) -> Vec<u8> {
        std::fs::read(tmp.path()).expect("reread")
    }

    #[test]
    fn scenario_view_fresh_file() {
        let (mut buf, _tmp) = seeded(b"Hello World");
        assert_eq!(buf.view_all().unwrap(), b"Hello World");
        assert_eq!(buf.size(), 11);
    }

    #[test]
    fn scenario_replace_without_flush_leaves_file_untouched() {
        let (mut buf, tmp) = seeded(b"Hello World");
        buf.go(6);
        buf.replace(b"Rust!");
        assert_eq!(buf.view_all().unwrap(), b"Hello Rust!");
        assert_eq!(reopen(&tmp), b"Hello World");
    }

    #[test]
    fn scenario_replace_then_flush_same_size() {
        let (mut buf, tmp) = seeded(b"Hello World");
        buf.go(6);
        buf.replace(b"Rust!");
        buf.flush().unwrap();
        assert_eq!(reopen(&tmp), b"Hello Rust!");
        assert_eq!(buf.size(), 11);
    }

    #[test]
    fn replace_advances_cursor() {
        let (mut buf, _tmp) = seeded(b"Hello World");
        buf.replace(b"Weird");
        assert_eq!(buf.view_all().unwrap(), b"Weird World");
        assert_eq!(buf.tell(), 5);
        assert_eq!(buf.size(), 11);
    }

    #[test]
    fn insert_advances_cursor() {
        let (mut buf, _tmp) = seeded(b"Hello World");
        buf.insert(b"Oh, ");
        assert_eq!(buf.tell(), 4);
        buf.to_end();
        buf.insert(b"??");
        assert_eq!(buf.view_all().unwrap(), b"Oh, Hello World??");
        assert_eq!(buf.tell(), 17);
        assert_eq!(buf.size(), 17);
    }

    #[test]
    fn scenario_erase_then_flush_truncates() {
        let (mut buf, tmp) = seeded(b"Hello World");
        buf.go(5);
        buf.erase(6);
        buf.flush().unwrap();
        assert_eq!(reopen(&tmp), b"Hello");
        assert_eq!(buf.size(), 5);
    }

    #[test]
    fn scenario_insert_then_flush_grows_file() {
        let (mut buf, tmp) = seeded(b"Hello World");
        buf.to_start();
        buf.insert(b"Oh, ");
        buf.flush().unwrap();
        assert_eq!(reopen(&tmp), b"Oh, Hello World");
        assert_eq!(buf.size(), 15);
        // Flushing again with no further edits must be a no-op.
        buf.flush().unwrap();
        assert_eq!(reopen(&tmp), b"Oh, Hello World");
    }

    #[test]
    fn scenario_insert_in_middle_then_flush() {
        let (mut buf, tmp) = seeded(b"Hello World");
        buf.go(5);
        buf.insert(b", dear");
        buf.flush().unwrap();
        assert_eq!(reopen(&tmp), b"Hello, dear World");
    }

    #[test]
    fn scenario_erase_everything_insert_and_flush() {
        let (mut buf, tmp) = seeded(b"Hello World");
        buf.to_start();
        buf.erase(11);
        buf.insert(b"New content here");
        buf.flush().unwrap();
        assert_eq!(reopen(&tmp), b"New content here");
        assert_eq!(buf.size(), 17);
    }

    #[test]
    fn flush_on_brand_new_empty_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("new.txt");
        let mut buf = Buffer::open(&path).unwrap();
        buf.insert(b"hello");
        buf.flush().unwrap();
        assert_eq!(std::fs::read(&path).unwrap(), b"hello");
    }

    #[test]
    fn go_clamps_to_buffer_bounds() {
        let (mut buf, _tmp) = seeded(b"abc");
        buf.go(-100);
        assert_eq!(buf.tell(), 0);
        buf.go(100);
        assert_eq!(buf.tell(), 3);
    }

    #[test]
    fn multiple_edits_across_branch_boundaries_then_flush() {
        let (mut buf, tmp) = seeded(b"Hello World");
        buf.go(5);
        buf.erase(1); // "HelloWorld"
        buf.go(0);
        buf.to_start();
        buf.go(5);
        buf.insert(b" there"); // "Hello thereWorld"
        buf.flush().unwrap();
        assert_eq!(reopen(&tmp), b"Hello thereWorld");
        assert_eq!(buf.view_all().unwrap(), b"Hello thereWorld");
    }
}
