use serde::Serialize;

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct SalesDifference {
    pub sales_outlet_id: i64,
    pub total_goal: f64,
    pub actual_sales: f64,
    pub difference: f64,
}
