pub mod source;

pub use source::{DiskFile, FileSource, MemoryFile};
