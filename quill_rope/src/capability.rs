//! Capability traits the command layer dispatches on, rather than picking
//! a backend at compile time: every backend is `Appendable`; only the rope
//! buffer additionally implements `Insertable`.

use crate::buffer::Buffer;
use crate::direct::DirectBuffer;
use crate::error::RopeResult;

pub trait Appendable {
    fn tell(&mut self) -> RopeResult<u64>;
    fn size(&mut self) -> RopeResult<u64>;
    fn to_start(&mut self) -> RopeResult<()>;
    fn to_end(&mut self) -> RopeResult<()>;
    fn go(&mut self, delta: i64) -> RopeResult<()>;
    fn view(&mut self, count: u64) -> RopeResult<Vec<u8>>;
    fn replace(&mut self, data: &[u8]) -> RopeResult<()>;
    fn flush(&mut self) -> RopeResult<()>;
}

pub trait Insertable: Appendable {
    fn insert(&mut self, data: &[u8]) -> RopeResult<()>;
    fn erase(&mut self, count: u64) -> RopeResult<()>;
}

impl Appendable for Buffer {
    fn tell(&mut self) -> RopeResult<u64> {
        Ok(Buffer::tell(self))
    }

    fn size(&mut self) -> RopeResult<u64> {
        Ok(Buffer::size(self))
    }

    fn to_start(&mut self) -> RopeResult<()> {
        Buffer::to_start(self);
        Ok(())
    }

    fn to_end(&mut self) -> RopeResult<()> {
        Buffer::to_end(self);
        Ok(())
    }

    fn go(&mut self, delta: i64) -> RopeResult<()> {
        Buffer::go(self, delta);
        Ok(())
    }

    fn view(&mut self, count: u64) -> RopeResult<Vec<u8>> {
        Buffer::view(self, count)
    }

    fn replace(&mut self, data: &[u8]) -> RopeResult<()> {
        Buffer::replace(self, data);
        Ok(())
    }

    fn flush(&mut self) -> RopeResult<()> {
        Buffer::flush(self)
    }
}

impl Insertable for Buffer {
    fn insert(&mut self, data: &[u8]) -> RopeResult<()> {
        Buffer::insert(self, data);
        Ok(())
    }

    fn erase(&mut self, count: u64) -> RopeResult<()> {
        Buffer::erase(self, count);
        Ok(())
    }
}

impl Appendable for DirectBuffer {
    fn tell(&mut self) -> RopeResult<u64> {
        DirectBuffer::tell(self)
    }

    fn size(&mut self) -> RopeResult<u64> {
        DirectBuffer::size(self)
    }

    fn to_start(&mut self) -> RopeResult<()> {
        DirectBuffer::to_start(self)
    }

    fn to_end(&mut self) -> RopeResult<()> {
        DirectBuffer::to_end(self)
    }

    fn go(&mut self, delta: i64) -> RopeResult<()> {
        DirectBuffer::go(self, delta)
    }

    fn view(&mut self, count: u64) -> RopeResult<Vec<u8>> {
        DirectBuffer::view(self, count)
    }

    fn replace(&mut self, data: &[u8]) -> RopeResult<()> {
        DirectBuffer::replace(self, data)
    }

    fn flush(&mut self) -> RopeResult<()> {
        DirectBuffer::flush(self)
    }
}
