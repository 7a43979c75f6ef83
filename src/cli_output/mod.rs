//! Line-based output for the one-shot commands.
//!
//! Every printer writes to a caller-supplied writer so commands can be
//! exercised against a buffer.

mod printers;

pub use printers::*;
