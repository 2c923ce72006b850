use std::collections::{HashMap, HashSet};

use itertools::Itertools as _;
use model::{
    catalog::{PastryInventory, Product},
    ordered::Ordered,
    report::catalog::SoldProduct,
    sales::SalesRecord,
};

use super::{group_by, Reducer};

const DRINK_GROUPS: [&str; 2] = ["beverages", "whole bean/teas"];

pub const MOST_SOLD_LIMIT: usize = 5;

/// First catalogue row per product id.
fn catalogue(products: &[Product]) -> HashMap<i64, &Product> {
    let mut by_id = HashMap::new();
    for product in products {
        by_id.entry(product.product_id).or_insert(product);
    }
    by_id
}

fn is_drink(product: &Product) -> bool {
    product.product_group.as_deref().is_some_and(|group| {
        let group = group.to_lowercase();
        DRINK_GROUPS.iter().any(|drink| group.contains(drink))
    })
}

/// Quantity sold per `"{unit} {measure}"` label over drink products, largest
/// first and labels ascending on a tie.
pub fn drink_size_distribution(products: &[Product], records: &[SalesRecord]) -> Ordered<String, f64> {
    let labels: HashMap<i64, String> = catalogue(products)
        .into_iter()
        .filter(|(_, product)| is_drink(product))
        .filter_map(|(id, product)| product.unit_of_measure().map(|label| (id, label)))
        .collect();

    group_by(
        records,
        |r| labels.get(&r.product_id).cloned(),
        |r| r.quantity,
        Reducer::Sum,
    )
    .into_iter()
    // group_by hands labels over ascending, so a stable sort keeps that on ties.
    .sorted_by(|a, b| b.1.total_cmp(&a.1))
    .collect()
}

/// Top inventory rows by `quantity_sold` among products that are both
/// catalogued and sold. Equal quantities keep their inventory order.
pub fn most_sold_products(
    inventory: &[PastryInventory],
    products: &[Product],
    records: &[SalesRecord],
    limit: usize,
) -> Vec<SoldProduct> {
    let catalogue = catalogue(products);
    let sold: HashSet<i64> = records.iter().map(|r| r.product_id).collect();

    inventory
        .iter()
        .filter(|row| sold.contains(&row.product_id))
        .filter_map(|row| {
            catalogue
                .get(&row.product_id)
                .map(|product| SoldProduct::new(row, Some(*product)))
        })
        .sorted_by(|a, b| b.quantity_sold.total_cmp(&a.quantity_sold))
        .take(limit)
        .collect()
}
