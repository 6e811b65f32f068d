mod buffer;
mod capability;
mod direct;
mod error;
mod fbs;
mod node;

pub use buffer::Buffer;
pub use capability::{Appendable, Insertable};
pub use direct::DirectBuffer;
pub use error::{RopeError, RopeResult};
pub use fbs::FileBackingStore;
