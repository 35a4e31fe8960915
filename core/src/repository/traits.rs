use crate::error::DatasetError;
use crate::model::dataset::Dataset;

pub trait DatasetRepository {
    fn load(&self) -> Result<Dataset, DatasetError>;
    fn describe(&self) -> String;
}
