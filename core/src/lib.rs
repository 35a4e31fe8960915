pub mod config;
pub mod error;
pub mod format;
pub mod input;
pub mod model;
pub mod repository;
pub mod service;
pub mod time;

pub use config::Config;
pub use error::DatasetError;
pub use input::{parse_criteria, parse_months, parse_products};
pub use model::criteria::FilterCriteria;
pub use model::dataset::{Dataset, LoadReport};
pub use model::record::{Category, SalesRecord};
pub use model::series::{CategoryAxis, ChartPoint, ChartSeries, MonthlyPoint, MonthlySeries};
pub use repository::{DatasetRepository, FileDatasetRepository, HttpDatasetRepository};
pub use service::dashboard_service::DashboardService;
pub use service::dto::DashboardView;
pub use service::summary::{SummaryDisplay, SummaryMetrics};
pub use time::{month_label, parse_month};
