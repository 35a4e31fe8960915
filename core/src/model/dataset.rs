use serde::Serialize;

use crate::model::record::SalesRecord;

#[derive(Serialize, Debug, Clone, Default, PartialEq)]
pub struct LoadReport {
    pub total_rows: usize,
    pub skipped_rows: usize,
    pub first_skipped: Option<usize>,
    pub undated_rows: usize,
}

/// The immutable record set for one session plus what the decode step had to say about it.
#[derive(Debug, Clone, Default)]
pub struct Dataset {
    pub records: Vec<SalesRecord>,
    pub report: LoadReport,
}

impl Dataset {
    pub fn from_records(records: Vec<SalesRecord>) -> Self {
        let report = LoadReport {
            total_rows: records.len(),
            undated_rows: records.iter().filter(|r| r.month.is_none()).count(),
            ..LoadReport::default()
        };
        Self { records, report }
    }

    /// Distinct product ids in first-seen order, paired with their display name.
    pub fn products(&self) -> Vec<(String, String)> {
        let mut seen = std::collections::HashSet::new();
        self.records
            .iter()
            .filter(|r| seen.insert(r.pizza_type_id.as_str()))
            .map(|r| (r.pizza_type_id.clone(), r.name.clone()))
            .collect()
    }
}
