use std::collections::HashMap;
use std::hash::Hash;

use crate::model::record::SalesRecord;
use crate::model::series::{CategoryAxis, ChartPoint, ChartSeries, MonthlyPoint, MonthlySeries};

pub const TOP_N: usize = 10;

/// Groups records by key, keeping buckets in the order their key first
/// appears. Records for which `key` yields `None` are left out.
pub fn group_ordered<'a, K, F>(records: &'a [SalesRecord], key: F) -> Vec<(K, Vec<&'a SalesRecord>)>
where
    K: Eq + Hash + Clone,
    F: Fn(&'a SalesRecord) -> Option<K>,
{
    let mut slots: HashMap<K, usize> = HashMap::new();
    let mut buckets: Vec<(K, Vec<&SalesRecord>)> = Vec::new();

    for record in records {
        let Some(k) = key(record) else { continue };
        let slot = *slots.entry(k.clone()).or_insert_with(|| {
            buckets.push((k, Vec::new()));
            buckets.len() - 1
        });
        buckets[slot].1.push(record);
    }

    buckets
}

pub fn group_by_month(records: &[SalesRecord]) -> Vec<(u32, Vec<&SalesRecord>)> {
    group_ordered(records, |r| r.month)
}

pub fn monthly_revenue(records: &[SalesRecord]) -> MonthlySeries<f64> {
    MonthlySeries {
        points: group_by_month(records)
            .into_iter()
            .map(|(month, bucket)| MonthlyPoint {
                month,
                value: bucket.iter().map(|r| r.revenue()).sum(),
            })
            .collect(),
    }
}

pub fn monthly_order_count(records: &[SalesRecord]) -> MonthlySeries<u64> {
    MonthlySeries {
        points: group_by_month(records)
            .into_iter()
            .map(|(month, bucket)| MonthlyPoint {
                month,
                value: bucket.len() as u64,
            })
            .collect(),
    }
}

fn count_by<'a, F>(records: &'a [SalesRecord], label: F) -> ChartSeries
where
    F: Fn(&'a SalesRecord) -> &'a str,
{
    group_ordered(records, |r| Some(label(r)))
        .into_iter()
        .map(|(label, bucket)| ChartPoint::new(label, bucket.len() as u64))
        .collect()
}

pub fn by_size(records: &[SalesRecord]) -> ChartSeries {
    count_by(records, |r| r.size.as_str())
}

/// Counts per category in first-seen order, unknown categories included.
pub fn by_category(records: &[SalesRecord]) -> ChartSeries {
    count_by(records, |r| r.category.label())
}

/// Category counts on the fixed Classic/Supreme/Veggie/Chicken axis.
/// Absent categories read 0; categories outside the four are not placed.
pub fn category_axis(records: &[SalesRecord]) -> CategoryAxis {
    let mut axis = CategoryAxis::default();
    for slot in records.iter().filter_map(|r| r.category.axis_index()) {
        axis.counts[slot] += 1;
    }
    axis
}

pub fn top_names(records: &[SalesRecord], n: usize) -> ChartSeries {
    let mut ranking = count_by(records, |r| r.name.as_str());
    // sort_by is stable, so equal counts keep first-seen order
    ranking.sort_by(|a, b| b.value.cmp(&a.value));
    ranking.truncate(n);
    ranking
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::record::Category;

    fn rec(date: &str, id: &str, name: &str, size: &str, category: Category, qty: u32, price: f64) -> SalesRecord {
        SalesRecord::new(date, id, name, size, category, qty, price)
    }

    fn scenario() -> Vec<SalesRecord> {
        vec![
            rec("1/5/2023", "classic_small", "Classic", "S", Category::Classic, 2, 9.50),
            rec("1/7/2023", "veggie_large", "Veggie Deluxe", "L", Category::Veggie, 1, 15.00),
            rec("2/1/2023", "classic_small", "Classic", "S", Category::Classic, 3, 9.50),
        ]
    }

    #[test]
    fn test_scenario_series() {
        let data = scenario();

        let revenue = monthly_revenue(&data);
        assert_eq!(revenue.values(), vec![34.0, 28.5]);
        assert_eq!(revenue.labels(), vec!["Jan", "Feb"]);

        assert_eq!(monthly_order_count(&data).values(), vec![2, 1]);
        assert_eq!(by_size(&data), vec![ChartPoint::new("S", 2), ChartPoint::new("L", 1)]);
        assert_eq!(
            top_names(&data, TOP_N),
            vec![ChartPoint::new("Classic", 2), ChartPoint::new("Veggie Deluxe", 1)]
        );
    }

    #[test]
    fn test_months_keep_first_seen_order() {
        let data = vec![
            rec("3/1/2023", "a", "A", "S", Category::Classic, 1, 1.0),
            rec("1/1/2023", "a", "A", "S", Category::Classic, 1, 2.0),
            rec("3/2/2023", "a", "A", "S", Category::Classic, 1, 4.0),
        ];
        let revenue = monthly_revenue(&data);
        assert_eq!(revenue.labels(), vec!["Mar", "Jan"]);
        assert_eq!(revenue.values(), vec![5.0, 2.0]);
    }

    #[test]
    fn test_undated_records_are_not_grouped() {
        let data = vec![
            rec("1/1/2023", "a", "A", "S", Category::Classic, 1, 1.0),
            rec("garbage", "a", "A", "S", Category::Classic, 1, 1.0),
        ];
        assert_eq!(monthly_order_count(&data).values(), vec![1]);
        assert_eq!(by_size(&data), vec![ChartPoint::new("S", 2)]);
    }

    #[test]
    fn test_category_axis_zero_fills() {
        let data = vec![
            rec("1/1/2023", "v", "V", "M", Category::Veggie, 1, 1.0),
            rec("1/2/2023", "v", "V", "M", Category::Veggie, 1, 1.0),
            rec("1/3/2023", "d", "D", "M", Category::parse("Dessert"), 1, 1.0),
        ];
        assert_eq!(category_axis(&data).counts, [0, 0, 2, 0]);
        assert_eq!(
            by_category(&data),
            vec![ChartPoint::new("Veggie", 2), ChartPoint::new("Dessert", 1)]
        );
    }

    #[test]
    fn test_unknown_size_is_its_own_bucket() {
        let data = vec![
            rec("1/1/2023", "a", "A", "XXL", Category::Classic, 1, 1.0),
            rec("1/1/2023", "a", "A", "Party", Category::Classic, 1, 1.0),
            rec("1/1/2023", "a", "A", "XXL", Category::Classic, 1, 1.0),
        ];
        assert_eq!(by_size(&data), vec![ChartPoint::new("XXL", 2), ChartPoint::new("Party", 1)]);
    }

    #[test]
    fn test_top_names_bound_and_ties() {
        let mut data = Vec::new();
        for i in 0..15u32 {
            let name = format!("Pizza {}", i);
            // Pizza 0..4 appear twice, the rest once
            let copies = if i < 5 { 2 } else { 1 };
            for _ in 0..copies {
                data.push(rec("1/1/2023", "x", &name, "M", Category::Supreme, 1, 1.0));
            }
        }
        let ranking = top_names(&data, TOP_N);
        assert_eq!(ranking.len(), TOP_N);
        assert!(ranking.windows(2).all(|w| w[0].value >= w[1].value));
        assert_eq!(ranking[0].label, "Pizza 0");
        assert_eq!(ranking[5].label, "Pizza 5");
        assert_eq!(ranking[9].label, "Pizza 9");
    }

    #[test]
    fn test_empty_input_gives_empty_series() {
        let data: Vec<SalesRecord> = Vec::new();
        assert!(monthly_revenue(&data).is_empty());
        assert!(monthly_order_count(&data).is_empty());
        assert!(by_size(&data).is_empty());
        assert!(by_category(&data).is_empty());
        assert!(top_names(&data, TOP_N).is_empty());
        assert_eq!(category_axis(&data).counts, [0; 4]);
    }
}
