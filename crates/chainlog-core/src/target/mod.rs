//! Write targets for the async queue
//!
//! A target accepts whole formatted buffers, one at a time, in order.
//! - `FileTarget`: an already-open file shared with the caller
//! - `MemoryTarget`: in-memory buffer for testing

mod traits;
mod file;
mod memory;

pub use traits::{LogTarget, SharedTarget};
pub use file::FileTarget;
pub use memory::MemoryTarget;
