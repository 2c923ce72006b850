use std::collections::HashMap;

use itertools::Itertools as _;
use model::{
    catalog::{Customer, Product},
    ordered::Ordered,
    report::line_items::{Denominator, LineItemStatistics},
    sales::SalesRecord,
};

const LINE_ITEM_SLOTS: i64 = 8;

fn percentage(part: u64, total: u64) -> f64 {
    if total == 0 {
        0.0
    } else {
        part as f64 / total as f64 * 100.0
    }
}

pub fn line_item_statistics(records: &[SalesRecord], denominator: Denominator) -> LineItemStatistics {
    let line_item_counts = (1..=LINE_ITEM_SLOTS)
        .map(|slot| {
            let count = records.iter().filter(|r| r.line_item_id == Some(slot)).count() as u64;
            (format!("line_item_id_{}", slot), count)
        })
        .collect();

    let (total, one, more) = match denominator {
        Denominator::LineItems => {
            let one = records.iter().filter(|r| r.line_item_id == Some(1)).count() as u64;
            let more = records
                .iter()
                .filter(|r| r.line_item_id.is_some_and(|id| id > 1))
                .count() as u64;
            (records.len() as u64, one, more)
        }
        Denominator::Receipts => {
            let sizes = records.iter().counts_by(SalesRecord::receipt);
            let one = sizes.values().filter(|lines| **lines == 1).count() as u64;
            (sizes.len() as u64, one, sizes.len() as u64 - one)
        }
    };

    LineItemStatistics {
        total_customers: total,
        num_customers_1_line_item_id: one,
        num_customers_more_line_item_id: more,
        percentage_1_line_item_id: percentage(one, total),
        percentage_more_than_1_line_item_id: percentage(more, total),
        line_item_counts,
    }
}

/// Most frequent generation first, names ascending on a tie.
pub fn generation_counts(customers: &[Customer]) -> Ordered<String, u64> {
    customers
        .iter()
        .filter_map(|c| c.generation.clone())
        .counts()
        .into_iter()
        .map(|(generation, count)| (generation, count as u64))
        .sorted_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)))
        .collect()
}

/// Share of each `tax_exempt_yn` value over the catalogue, largest first.
pub fn tax_status_distribution(products: &[Product]) -> Ordered<String, f64> {
    let counts: HashMap<String, usize> = products
        .iter()
        .filter_map(|p| p.tax_exempt_yn.clone())
        .counts();
    let total: usize = counts.values().sum();
    if total == 0 {
        return Ordered::default();
    }
    counts
        .into_iter()
        .sorted_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)))
        .map(|(status, count)| (status, count as f64 / total as f64))
        .collect()
}
