use crate::model::criteria::FilterCriteria;
use crate::model::record::SalesRecord;

/// Keeps the records matching both the month and the product selection,
/// in their original order. Records without a usable month are dropped.
pub fn filter_records(records: &[SalesRecord], criteria: &FilterCriteria) -> Vec<SalesRecord> {
    records
        .iter()
        .filter(|r| matches(r, criteria))
        .cloned()
        .collect()
}

pub fn matches(record: &SalesRecord, criteria: &FilterCriteria) -> bool {
    criteria.matches_month(record.month) && criteria.matches_product(&record.pizza_type_id)
}
