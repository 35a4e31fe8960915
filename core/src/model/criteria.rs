use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// User selection driving one dashboard refresh. An empty set on either
/// dimension means "no restriction" for that dimension.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
pub struct FilterCriteria {
    pub selected_months: BTreeSet<u32>,
    pub selected_pizza_type_ids: BTreeSet<String>,
}

impl FilterCriteria {
    pub fn new<M, P, S>(months: M, products: P) -> Self
    where
        M: IntoIterator<Item = u32>,
        P: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            selected_months: months.into_iter().collect(),
            selected_pizza_type_ids: products.into_iter().map(Into::into).collect(),
        }
    }

    /// A record without a month never matches, whatever the selection.
    pub fn matches_month(&self, month: Option<u32>) -> bool {
        month.is_some_and(|m| self.selected_months.is_empty() || self.selected_months.contains(&m))
    }

    pub fn matches_product(&self, pizza_type_id: &str) -> bool {
        self.selected_pizza_type_ids.is_empty() || self.selected_pizza_type_ids.contains(pizza_type_id)
    }

    pub fn toggle_month(&mut self, month: u32) {
        if !self.selected_months.remove(&month) {
            self.selected_months.insert(month);
        }
    }

    pub fn toggle_product(&mut self, pizza_type_id: &str) {
        if !self.selected_pizza_type_ids.remove(pizza_type_id) {
            self.selected_pizza_type_ids.insert(pizza_type_id.to_string());
        }
    }
}
