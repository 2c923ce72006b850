use serde::Serialize;

use crate::ordered::Ordered;

/// Population the line-item percentages are computed over.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Denominator {
    /// Every line-item row counts once; `line_item_id == 1` is a "single item" row.
    #[default]
    LineItems,
    /// Distinct receipts, classified by how many lines they hold.
    Receipts,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct LineItemStatistics {
    pub total_customers: u64,
    pub num_customers_1_line_item_id: u64,
    pub num_customers_more_line_item_id: u64,
    pub percentage_1_line_item_id: f64,
    pub percentage_more_than_1_line_item_id: f64,
    #[serde(flatten)]
    pub line_item_counts: Ordered<String, u64>,
}
