use serde::Deserialize;

use crate::de;

#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct SalesOutlet {
    #[serde(deserialize_with = "de::int")]
    pub sales_outlet_id: i64,
    #[serde(default, deserialize_with = "de::opt_text")]
    pub store_city: Option<String>,
}

#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct Product {
    #[serde(deserialize_with = "de::int")]
    pub product_id: i64,
    #[serde(default, deserialize_with = "de::opt_text")]
    pub product_group: Option<String>,
    #[serde(default, deserialize_with = "de::opt_text")]
    pub product_category: Option<String>,
    #[serde(default, deserialize_with = "de::opt_text")]
    pub product_type: Option<String>,
    #[serde(default, deserialize_with = "de::opt_text")]
    pub product: Option<String>,
    #[serde(default, deserialize_with = "de::opt_text")]
    pub tax_exempt_yn: Option<String>,
    #[serde(default, deserialize_with = "de::opt_text")]
    pub unit: Option<String>,
    #[serde(default, deserialize_with = "de::opt_text")]
    pub measure: Option<String>,
}

impl Product {
    /// `"{unit} {measure}"`, e.g. `12 oz`.
    pub fn unit_of_measure(&self) -> Option<String> {
        match (&self.unit, &self.measure) {
            (Some(unit), Some(measure)) => Some(format!("{} {}", unit.trim(), measure.trim())),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct Customer {
    #[serde(default, deserialize_with = "de::opt_int")]
    pub customer_id: Option<i64>,
    #[serde(default, deserialize_with = "de::opt_text")]
    pub generation: Option<String>,
}

#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct PastryInventory {
    #[serde(deserialize_with = "de::int")]
    pub product_id: i64,
    #[serde(default, deserialize_with = "de::float")]
    pub quantity_sold: f64,
    #[serde(default, deserialize_with = "de::opt_int")]
    pub sales_outlet_id: Option<i64>,
    #[serde(default, deserialize_with = "de::opt_text")]
    pub transaction_date: Option<String>,
    #[serde(default, deserialize_with = "de::opt_float")]
    pub start_of_day: Option<f64>,
    #[serde(default, deserialize_with = "de::opt_float")]
    pub waste: Option<f64>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use bson::doc;

    #[test]
    fn test_unit_of_measure() {
        let product: Product = bson::from_document(doc! {
            "product_id": 1,
            "product_group": "Beverages",
            "unit": 12.0,
            "measure": "oz",
        })
        .unwrap();
        assert_eq!(product.unit_of_measure().as_deref(), Some("12 oz"));

        let product: Product = bson::from_document(doc! { "product_id": 2 }).unwrap();
        assert_eq!(product.unit_of_measure(), None);
    }
}
