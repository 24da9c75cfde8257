//! Storage layer for atomic file operations and key/value blobs.

mod atomic_file;
mod blob;

pub use atomic_file::{AtomicFile, AtomicFileError};
pub use blob::{BlobStorage, FileBlobStorage, MemoryBlobStorage};
