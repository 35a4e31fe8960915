pub mod criteria;
pub mod dataset;
pub mod record;
pub mod series;
