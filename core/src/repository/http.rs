use tracing::info;

use crate::error::DatasetError;
use crate::model::dataset::Dataset;
use crate::repository::decode::decode_dataset;
use crate::repository::traits::DatasetRepository;

/// Fetches the dataset document once over HTTP. No retries.
pub struct HttpDatasetRepository {
    url: String,
    strict: bool,
    client: reqwest::blocking::Client,
}

impl HttpDatasetRepository {
    pub fn new(url: impl Into<String>, strict: bool) -> Self {
        Self {
            url: url.into(),
            strict,
            client: reqwest::blocking::Client::new(),
        }
    }

    fn fetch(&self) -> Result<Vec<u8>, reqwest::Error> {
        let response = self.client.get(&self.url).send()?.error_for_status()?;
        Ok(response.bytes()?.to_vec())
    }
}

impl DatasetRepository for HttpDatasetRepository {
    fn load(&self) -> Result<Dataset, DatasetError> {
        let bytes = self.fetch().map_err(|source| DatasetError::Http {
            url: self.url.clone(),
            source,
        })?;
        let dataset = decode_dataset(&bytes, self.strict)?;
        info!(url = %self.url, records = dataset.records.len(), "dataset fetched");
        Ok(dataset)
    }

    fn describe(&self) -> String {
        self.url.clone()
    }
}

pub fn is_url(location: &str) -> bool {
    location.starts_with("http://") || location.starts_with("https://")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_url() {
        assert!(is_url("https://example.com/dataset_23.json"));
        assert!(is_url("http://localhost:8000/dataset_23.json"));
        assert!(!is_url("/srv/data/dataset_23.json"));
        assert!(!is_url("dataset_23.json"));
    }

    #[test]
    fn test_unreachable_host_is_http_error() {
        let repo = HttpDatasetRepository::new("http://127.0.0.1:9/dataset_23.json", false);
        assert!(matches!(repo.load(), Err(DatasetError::Http { .. })));
    }
}
