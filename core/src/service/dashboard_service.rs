use std::time::Instant;

use anyhow::Result;
use tracing::debug;

use crate::model::criteria::FilterCriteria;
use crate::model::dataset::Dataset;
use crate::model::record::SalesRecord;
use crate::repository::DatasetRepository;
use crate::service::aggregate::{
    by_category, by_size, category_axis, monthly_order_count, monthly_revenue, top_names, TOP_N,
};
use crate::service::dto::DashboardView;
use crate::service::filter::filter_records;
use crate::service::summary::SummaryMetrics;

/// Holds the session dataset and recomputes every view from scratch on each call.
pub struct DashboardService {
    dataset: Dataset,
}

impl DashboardService {
    pub fn new(dataset: Dataset) -> Self {
        Self { dataset }
    }

    /// Loads once through the repository. A load failure comes back as the
    /// error and no service is built.
    pub fn load<R: DatasetRepository + ?Sized>(repo: &R) -> Result<Self> {
        let dataset = repo.load()?;
        Ok(Self::new(dataset))
    }

    pub fn dataset(&self) -> &Dataset {
        &self.dataset
    }

    pub fn refresh(&self, criteria: &FilterCriteria) -> DashboardView {
        let started = Instant::now();
        let view = build_view(&self.dataset.records, criteria);
        debug!(
            months = ?criteria.selected_months,
            products = criteria.selected_pizza_type_ids.len(),
            matched = view.summary.total_orders,
            elapsed_us = started.elapsed().as_micros() as u64,
            "dashboard refreshed"
        );
        view
    }
}

pub fn build_view(records: &[SalesRecord], criteria: &FilterCriteria) -> DashboardView {
    let filtered = filter_records(records, criteria);

    let revenue_by_month = monthly_revenue(&filtered);
    let summary = SummaryMetrics::compute(&filtered, &revenue_by_month);

    DashboardView {
        criteria: criteria.clone(),
        orders_by_month: monthly_order_count(&filtered),
        by_size: by_size(&filtered),
        by_category: by_category(&filtered),
        category_axis: category_axis(&filtered),
        top_names: top_names(&filtered, TOP_N),
        summary_display: summary.display(),
        summary,
        revenue_by_month,
    }
}
