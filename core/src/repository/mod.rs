pub mod decode;
pub mod file;
pub mod http;
pub mod traits;

// Re-export
pub use decode::decode_dataset;
pub use file::{default_data_dir, FileDatasetRepository};
pub use http::{is_url, HttpDatasetRepository};
pub use traits::DatasetRepository;

use anyhow::Result;
use std::path::PathBuf;

/// Picks the repository for a dataset location: URLs are fetched, anything
/// else is read from disk, and `None` falls back to the default file.
pub fn open(location: Option<&str>, strict: bool) -> Result<Box<dyn DatasetRepository>> {
    match location {
        Some(loc) if is_url(loc) => Ok(Box::new(HttpDatasetRepository::new(loc, strict))),
        Some(loc) => Ok(Box::new(FileDatasetRepository::new(Some(PathBuf::from(loc)), strict)?)),
        None => Ok(Box::new(FileDatasetRepository::new(None, strict)?)),
    }
}
