use serde::Serialize;

use crate::model::criteria::FilterCriteria;
use crate::model::series::{CategoryAxis, ChartSeries, MonthlySeries};
use crate::service::summary::{SummaryDisplay, SummaryMetrics};

/// Everything the presentation layer needs for one filter selection.
#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct DashboardView {
    pub criteria: FilterCriteria,
    pub revenue_by_month: MonthlySeries<f64>,
    pub orders_by_month: MonthlySeries<u64>,
    pub by_size: ChartSeries,
    pub by_category: ChartSeries,
    pub category_axis: CategoryAxis,
    pub top_names: ChartSeries,
    pub summary: SummaryMetrics,
    pub summary_display: SummaryDisplay,
}
