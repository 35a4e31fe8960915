use std::fs;
use std::path::PathBuf;

use anyhow::{anyhow, Result};
use tracing::info;

use crate::error::DatasetError;
use crate::model::dataset::Dataset;
use crate::repository::decode::decode_dataset;
use crate::repository::traits::DatasetRepository;

pub const DEFAULT_DATASET_FILE_NAME: &str = "dataset_23.json";
pub const DATA_DIR_NAME: &str = ".pizzadash";

/// `~/.pizzadash`, where the default dataset and config live.
pub fn default_data_dir() -> Result<PathBuf> {
    let home_dir = dirs::home_dir().ok_or_else(|| anyhow!("Could not determine home directory"))?;
    Ok(home_dir.join(DATA_DIR_NAME))
}

#[derive(Clone)]
pub struct FileDatasetRepository {
    file_path: PathBuf,
    strict: bool,
}

impl FileDatasetRepository {
    pub fn new(file_path: Option<PathBuf>, strict: bool) -> Result<Self> {
        let file_path = match file_path {
            Some(path) => path,
            None => default_data_dir()?.join(DEFAULT_DATASET_FILE_NAME),
        };
        Ok(FileDatasetRepository { file_path, strict })
    }
}

impl DatasetRepository for FileDatasetRepository {
    fn load(&self) -> Result<Dataset, DatasetError> {
        let bytes = fs::read(&self.file_path).map_err(|source| DatasetError::Io {
            path: self.file_path.clone(),
            source,
        })?;
        let dataset = decode_dataset(&bytes, self.strict)?;
        info!(
            path = %self.file_path.display(),
            records = dataset.records.len(),
            "dataset loaded"
        );
        Ok(dataset)
    }

    fn describe(&self) -> String {
        self.file_path.display().to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_load_from_file() -> Result<()> {
        let mut file = NamedTempFile::new()?;
        write!(
            file,
            r#"[{{"date":"3/2/2023","pizza_type_id":"hawaiian_m","name":"The Hawaiian Pizza","size":"M","category":"Classic","quantity":"1","price":"13.25"}}]"#
        )?;

        let repo = FileDatasetRepository::new(Some(file.path().to_path_buf()), true)?;
        let dataset = repo.load()?;
        assert_eq!(dataset.records.len(), 1);
        assert_eq!(dataset.records[0].month, Some(3));
        Ok(())
    }

    #[test]
    fn test_missing_file_is_io_error() -> Result<()> {
        let dir = tempfile::tempdir()?;
        let repo = FileDatasetRepository::new(Some(dir.path().join("nope.json")), false)?;
        assert!(matches!(repo.load(), Err(DatasetError::Io { .. })));
        Ok(())
    }

    #[test]
    fn test_malformed_file_is_parse_error() -> Result<()> {
        let mut file = NamedTempFile::new()?;
        write!(file, "[{{\"date\":")?;
        let repo = FileDatasetRepository::new(Some(file.path().to_path_buf()), false)?;
        assert!(matches!(repo.load(), Err(DatasetError::Parse(_))));
        Ok(())
    }
}
