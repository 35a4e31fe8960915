use serde::Serialize;

use crate::model::record::Category;
use crate::time::month_label;

#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct MonthlyPoint<V> {
    pub month: u32,
    pub value: V,
}

/// Per-month values in the order months were first seen in the filtered set.
#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct MonthlySeries<V> {
    pub points: Vec<MonthlyPoint<V>>,
}

impl<V: Copy> MonthlySeries<V> {
    pub fn values(&self) -> Vec<V> {
        self.points.iter().map(|p| p.value).collect()
    }

    pub fn labels(&self) -> Vec<String> {
        self.points.iter().map(|p| month_label(p.month)).collect()
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }
}

impl<V> Default for MonthlySeries<V> {
    fn default() -> Self {
        Self { points: Vec::new() }
    }
}

#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
pub struct ChartPoint {
    pub label: String,
    pub value: u64,
}

impl ChartPoint {
    pub fn new(label: impl Into<String>, value: u64) -> Self {
        Self {
            label: label.into(),
            value,
        }
    }
}

pub type ChartSeries = Vec<ChartPoint>;

/// Category counts laid out on the fixed four-label axis.
#[derive(Serialize, Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CategoryAxis {
    pub counts: [u64; 4],
}

impl CategoryAxis {
    /// Each fixed category paired with its count, in axis order.
    pub fn pairs(&self) -> impl Iterator<Item = (Category, u64)> {
        Category::FIXED.into_iter().zip(self.counts)
    }
}
