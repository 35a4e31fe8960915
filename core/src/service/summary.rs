use serde::Serialize;
use std::collections::HashSet;

use crate::format::{format_count, format_money};
use crate::model::record::SalesRecord;
use crate::model::series::MonthlySeries;

#[derive(Serialize, Debug, Clone, Copy, Default, PartialEq)]
pub struct SummaryMetrics {
    pub total_orders: u64,
    pub distinct_product_count: u64,
    pub total_revenue: f64,
    pub average_revenue: f64,
    pub total_units_sold: u64,
}

#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct SummaryDisplay {
    pub total_orders: String,
    pub distinct_product_count: String,
    pub total_revenue: String,
    pub average_revenue: String,
    pub total_units_sold: String,
}

impl SummaryMetrics {
    /// Rolls up the filtered set. `revenue` must be the monthly revenue series
    /// of the same records; its bucket count is the divisor for the average.
    pub fn compute(records: &[SalesRecord], revenue: &MonthlySeries<f64>) -> Self {
        let total_revenue: f64 = revenue.points.iter().map(|p| p.value).sum();
        let buckets = revenue.len().max(1) as f64;

        let distinct_product_count = records
            .iter()
            .map(|r| r.pizza_type_id.as_str())
            .collect::<HashSet<_>>()
            .len() as u64;

        Self {
            total_orders: records.len() as u64,
            distinct_product_count,
            total_revenue,
            average_revenue: total_revenue / buckets,
            total_units_sold: records.iter().map(|r| r.quantity as u64).sum(),
        }
    }

    pub fn display(&self) -> SummaryDisplay {
        SummaryDisplay {
            total_orders: format_count(self.total_orders),
            distinct_product_count: self.distinct_product_count.to_string(),
            total_revenue: format_money(self.total_revenue),
            average_revenue: format_money(self.average_revenue),
            total_units_sold: format_count(self.total_units_sold),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::record::Category;
    use crate::service::aggregate::{monthly_order_count, monthly_revenue};

    fn scenario() -> Vec<SalesRecord> {
        vec![
            SalesRecord::new("1/5/2023", "classic_small", "Classic", "S", Category::Classic, 2, 9.50),
            SalesRecord::new("1/7/2023", "veggie_large", "Veggie Deluxe", "L", Category::Veggie, 1, 15.00),
            SalesRecord::new("2/1/2023", "classic_small", "Classic", "S", Category::Classic, 3, 9.50),
        ]
    }

    #[test]
    fn test_scenario_metrics() {
        let data = scenario();
        let metrics = SummaryMetrics::compute(&data, &monthly_revenue(&data));
        assert_eq!(metrics.total_orders, 3);
        assert_eq!(metrics.distinct_product_count, 2);
        assert_eq!(metrics.total_revenue, 62.5);
        assert_eq!(metrics.average_revenue, 31.25);
        assert_eq!(metrics.total_units_sold, 6);

        let display = metrics.display();
        assert_eq!(display.total_revenue, "$62.50");
        assert_eq!(display.average_revenue, "$31.25");
        assert_eq!(display.total_orders, "3");
    }

    #[test]
    fn test_series_sums_match_totals() {
        let data = scenario();
        let revenue = monthly_revenue(&data);
        let metrics = SummaryMetrics::compute(&data, &revenue);
        let revenue_sum: f64 = revenue.values().iter().sum();
        let order_sum: u64 = monthly_order_count(&data).values().iter().sum();
        assert!((revenue_sum - metrics.total_revenue).abs() < 1e-9);
        assert_eq!(order_sum, metrics.total_orders);
    }

    #[test]
    fn test_empty_set_is_all_zero() {
        let data: Vec<SalesRecord> = Vec::new();
        let metrics = SummaryMetrics::compute(&data, &monthly_revenue(&data));
        assert_eq!(metrics, SummaryMetrics::default());
        assert_eq!(metrics.average_revenue, 0.0);
        assert_eq!(metrics.display().average_revenue, "$0.00");
    }
}
