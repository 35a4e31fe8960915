use serde_json::Value;
use tracing::{debug, warn};

use crate::error::DatasetError;
use crate::model::dataset::{Dataset, LoadReport};
use crate::model::record::{RawRecord, SalesRecord};

/// Decodes a dataset document into typed records.
///
/// The document itself must be a JSON array. Each element is validated on its
/// own: in lenient mode rows that fail the record shape are skipped and
/// counted, in strict mode the first one aborts the load.
pub fn decode_dataset(bytes: &[u8], strict: bool) -> Result<Dataset, DatasetError> {
    let rows: Vec<Value> = serde_json::from_slice(bytes)?;

    let mut records = Vec::with_capacity(rows.len());
    let mut report = LoadReport {
        total_rows: rows.len(),
        ..LoadReport::default()
    };

    for (index, row) in rows.into_iter().enumerate() {
        let decoded = serde_json::from_value::<RawRecord>(row)
            .map_err(|e| e.to_string())
            .and_then(|raw| SalesRecord::try_from(raw).map_err(|d| d.to_string()));

        match decoded {
            Ok(record) => {
                if record.month.is_none() {
                    warn!(index, date = %record.date, "record has no usable month");
                    report.undated_rows += 1;
                }
                records.push(record);
            }
            Err(reason) if strict => {
                return Err(DatasetError::InvalidRecord { index, reason });
            }
            Err(reason) => {
                warn!(index, %reason, "skipping invalid record");
                report.skipped_rows += 1;
                report.first_skipped.get_or_insert(index);
            }
        }
    }

    debug!(
        total = report.total_rows,
        kept = records.len(),
        skipped = report.skipped_rows,
        "dataset decoded"
    );

    Ok(Dataset { records, report })
}
