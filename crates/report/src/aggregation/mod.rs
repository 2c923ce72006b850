pub mod calendar;
pub mod catalog;
pub mod distribution;
pub mod goals;
pub mod ranking;
pub mod sales;

use std::collections::BTreeMap;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Reducer {
    Sum,
    Count,
    Mean,
}

#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Agg {
    pub sum: f64,
    pub count: u64,
}

impl Agg {
    pub fn add(&mut self, value: f64) {
        self.sum += value;
        self.count += 1;
    }

    pub fn reduce(&self, reducer: Reducer) -> f64 {
        match reducer {
            Reducer::Sum => self.sum,
            Reducer::Count => self.count as f64,
            Reducer::Mean => {
                if self.count == 0 {
                    0.0
                } else {
                    self.sum / self.count as f64
                }
            }
        }
    }
}

/// Sum and count of `value` per key. Rows whose key is `None` are left out.
pub fn accumulate<T, K, FK, FV>(rows: impl IntoIterator<Item = T>, key: FK, value: FV) -> Vec<(K, Agg)>
where
    K: Ord,
    FK: Fn(&T) -> Option<K>,
    FV: Fn(&T) -> f64,
{
    let mut groups: BTreeMap<K, Agg> = BTreeMap::new();
    for row in rows {
        if let Some(k) = key(&row) {
            groups.entry(k).or_default().add(value(&row));
        }
    }
    groups.into_iter().collect()
}

pub fn group_by<T, K, FK, FV>(
    rows: impl IntoIterator<Item = T>,
    key: FK,
    value: FV,
    reducer: Reducer,
) -> Vec<(K, f64)>
where
    K: Ord,
    FK: Fn(&T) -> Option<K>,
    FV: Fn(&T) -> f64,
{
    accumulate(rows, key, value)
        .into_iter()
        .map(|(k, agg)| (k, agg.reduce(reducer)))
        .collect()
}

/// Row counts per key.
pub fn count_by<T, K, FK>(rows: impl IntoIterator<Item = T>, key: FK) -> Vec<(K, u64)>
where
    K: Ord,
    FK: Fn(&T) -> Option<K>,
{
    accumulate(rows, key, |_| 0.0)
        .into_iter()
        .map(|(k, agg)| (k, agg.count))
        .collect()
}

/// First item with the largest value.
pub fn max_by_value<T>(items: impl IntoIterator<Item = T>, value: impl Fn(&T) -> f64) -> Option<T> {
    let mut best: Option<(f64, T)> = None;
    for item in items {
        let v = value(&item);
        match &best {
            Some((current, _)) if v <= *current => {}
            _ => best = Some((v, item)),
        }
    }
    best.map(|(_, item)| item)
}

/// First item with the largest value within each partition, ordered by partition.
pub fn max_per<T, G, FG, FV>(items: impl IntoIterator<Item = T>, partition: FG, value: FV) -> Vec<T>
where
    G: Ord,
    FG: Fn(&T) -> G,
    FV: Fn(&T) -> f64,
{
    let mut best: BTreeMap<G, (f64, T)> = BTreeMap::new();
    for item in items {
        let v = value(&item);
        let p = partition(&item);
        match best.get(&p) {
            Some((current, _)) if v <= *current => {}
            _ => {
                best.insert(p, (v, item));
            }
        }
    }
    best.into_values().map(|(_, item)| item).collect()
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use chrono::{NaiveDate, NaiveTime};
    use model::{flag::Flag, sales::SalesRecord};

    pub fn record(outlet: i64, date: &str, time: &str, product: i64, amount: f64) -> SalesRecord {
        SalesRecord {
            transaction_id: 1,
            transaction_date: NaiveDate::parse_from_str(date, "%Y-%m-%d").unwrap(),
            transaction_time: NaiveTime::parse_from_str(time, "%H:%M:%S").ok(),
            sales_outlet_id: outlet,
            product_id: product,
            quantity: 1.0,
            unit_price: amount,
            line_item_amount: Some(amount),
            line_item_id: Some(1),
            instore_yn: Flag::Yes,
            guest: Flag::No,
        }
    }

    #[test]
    fn test_group_by_sums_per_key_in_key_order() {
        let rows = vec![("b", 2.0), ("a", 1.0), ("b", 3.0)];
        let groups = group_by(rows, |(k, _)| Some(*k), |(_, v)| *v, Reducer::Sum);
        assert_eq!(groups, vec![("a", 1.0), ("b", 5.0)]);
    }

    #[test]
    fn test_group_by_reducers() {
        let rows = vec![("a", 2.0), ("a", 4.0), ("b", 1.0)];
        let mean = group_by(rows.clone(), |(k, _)| Some(*k), |(_, v)| *v, Reducer::Mean);
        assert_eq!(mean, vec![("a", 3.0), ("b", 1.0)]);
        let count = group_by(rows, |(k, _)| Some(*k), |(_, v)| *v, Reducer::Count);
        assert_eq!(count, vec![("a", 2.0), ("b", 1.0)]);
    }

    #[test]
    fn test_rows_without_key_are_dropped() {
        let rows = vec![(Some(1), 2.0), (None, 7.0), (Some(1), 1.0)];
        let groups = group_by(rows, |(k, _)| *k, |(_, v)| *v, Reducer::Sum);
        assert_eq!(groups, vec![(1, 3.0)]);
    }

    #[test]
    fn test_grouped_totals_conserve_the_total() {
        let records = vec![
            record(3, "2019-04-01", "07:06:11", 1, 2.5),
            record(3, "2019-04-01", "09:10:00", 2, 3.0),
            record(5, "2019-04-02", "10:00:00", 1, 4.75),
            record(8, "2019-04-09", "18:30:00", 3, 12.0),
            record(5, "2019-05-02", "11:00:00", 4, 0.8),
        ];
        let total: f64 = records.iter().map(|r| r.amount()).sum();

        let by_day = group_by(
            &records,
            |r| Some((r.transaction_date, r.sales_outlet_id)),
            |r| r.amount(),
            Reducer::Sum,
        );
        let by_outlet = group_by(&records, |r| Some(r.sales_outlet_id), |r| r.amount(), Reducer::Sum);
        let by_hour = group_by(&records, |r| r.hour(), |r| r.amount(), Reducer::Sum);

        for groups in [
            by_day.iter().map(|(_, v)| *v).sum::<f64>(),
            by_outlet.iter().map(|(_, v)| *v).sum::<f64>(),
            by_hour.iter().map(|(_, v)| *v).sum::<f64>(),
        ] {
            assert!((groups - total).abs() < 1e-9);
        }
        assert!(by_outlet.len() <= records.len());
    }

    #[test]
    fn test_max_keeps_first_on_tie() {
        let items = vec![("a", 1.0), ("b", 5.0), ("c", 5.0)];
        assert_eq!(max_by_value(items, |(_, v)| *v), Some(("b", 5.0)));
        assert_eq!(max_by_value(Vec::<(&str, f64)>::new(), |(_, v)| *v), None);
    }

    #[test]
    fn test_max_per_partition() {
        let items = vec![(1, "x", 2.0), (1, "y", 3.0), (2, "z", 1.0), (1, "w", 3.0)];
        let best = max_per(items, |(p, _, _)| *p, |(_, _, v)| *v);
        assert_eq!(best, vec![(1, "y", 3.0), (2, "z", 1.0)]);
    }
}
