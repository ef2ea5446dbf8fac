//! Items used by macro expansions, not public API.

pub use alloc::string::{String, ToString};
