use chrono::{NaiveDate, NaiveTime, Timelike as _};
use serde::Deserialize;

use crate::{de, flag::Flag};

/// One product line of a receipt.
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct SalesRecord {
    #[serde(deserialize_with = "de::int")]
    pub transaction_id: i64,
    #[serde(deserialize_with = "de::date")]
    pub transaction_date: NaiveDate,
    #[serde(default, deserialize_with = "de::opt_time")]
    pub transaction_time: Option<NaiveTime>,
    #[serde(deserialize_with = "de::int")]
    pub sales_outlet_id: i64,
    #[serde(deserialize_with = "de::int")]
    pub product_id: i64,
    #[serde(default, deserialize_with = "de::float")]
    pub quantity: f64,
    #[serde(default, deserialize_with = "de::float")]
    pub unit_price: f64,
    #[serde(default, deserialize_with = "de::opt_float")]
    pub line_item_amount: Option<f64>,
    #[serde(default, deserialize_with = "de::opt_int")]
    pub line_item_id: Option<i64>,
    #[serde(default, deserialize_with = "de::flag")]
    pub instore_yn: Flag,
    #[serde(rename = "Guest", alias = "guest", default, deserialize_with = "de::flag")]
    pub guest: Flag,
}

impl SalesRecord {
    /// Line amount, falling back to `quantity * unit_price` for extracts without it.
    pub fn amount(&self) -> f64 {
        self.line_item_amount
            .unwrap_or(self.quantity * self.unit_price)
    }

    pub fn hour(&self) -> Option<u32> {
        self.transaction_time.map(|time| time.hour())
    }

    /// Receipt identity. Transaction ids restart per outlet and day.
    pub fn receipt(&self) -> (i64, NaiveDate, i64) {
        (self.sales_outlet_id, self.transaction_date, self.transaction_id)
    }
}
