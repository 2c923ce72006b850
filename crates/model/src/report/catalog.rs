use serde::Serialize;

use crate::catalog::{PastryInventory, Product};

/// Inventory row enriched with the catalogue attributes of its product.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct SoldProduct {
    pub product_id: i64,
    pub quantity_sold: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sales_outlet_id: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub transaction_date: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start_of_day: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub waste: Option<f64>,
    #[serde(flatten)]
    pub product: Option<ProductInfo>,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct ProductInfo {
    pub product_group: Option<String>,
    pub product_category: Option<String>,
    pub product_type: Option<String>,
    pub product: Option<String>,
    pub tax_exempt_yn: Option<String>,
    pub unit: Option<String>,
    pub measure: Option<String>,
}

impl From<&Product> for ProductInfo {
    fn from(product: &Product) -> Self {
        ProductInfo {
            product_group: product.product_group.clone(),
            product_category: product.product_category.clone(),
            product_type: product.product_type.clone(),
            product: product.product.clone(),
            tax_exempt_yn: product.tax_exempt_yn.clone(),
            unit: product.unit.clone(),
            measure: product.measure.clone(),
        }
    }
}

impl SoldProduct {
    pub fn new(row: &PastryInventory, product: Option<&Product>) -> Self {
        SoldProduct {
            product_id: row.product_id,
            quantity_sold: row.quantity_sold,
            sales_outlet_id: row.sales_outlet_id,
            transaction_date: row.transaction_date.clone(),
            start_of_day: row.start_of_day,
            waste: row.waste,
            product: product.map(ProductInfo::from),
        }
    }
}
