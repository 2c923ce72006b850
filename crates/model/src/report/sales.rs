use chrono::NaiveDate;
use serde::Serialize;
use serde_with::{serde_as, DisplayFromStr};
use strum::Display;

use crate::flag::Flag;

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct DailySales {
    pub transaction_date: NaiveDate,
    pub sales_outlet_id: i64,
    pub daily_sales: f64,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct WeeklySales {
    pub year: i32,
    pub week: u32,
    pub sales_outlet_id: i64,
    pub weekly_sales: f64,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct MonthlySales {
    pub year: i32,
    pub month: u32,
    pub sales_outlet_id: i64,
    pub monthly_sales: f64,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct PeakHour {
    pub sales_outlet_id: i64,
    pub hour: u32,
    pub line_item_amount: f64,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct CustomerTypeSales {
    #[serde(rename = "Guest")]
    pub guest: Flag,
    pub sales_outlet_id: i64,
    pub total_sales: f64,
    pub total_transactions: u64,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct MostSellingItem {
    pub sales_outlet_id: i64,
    pub product_id: i64,
    pub total_quantity: f64,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct DailyReceipts {
    pub sales_outlet_id: i64,
    pub transaction_date: NaiveDate,
    pub daily_receipts: u64,
}

#[serde_as]
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct BestStore {
    pub month: String,
    #[serde_as(as = "DisplayFromStr")]
    pub sales_outlet_id: i64,
    pub monthly_sales: f64,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct CitySales {
    pub store_city: String,
    pub line_item_amount: f64,
}

#[serde_as]
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct WeekdaySales {
    #[serde_as(as = "DisplayFromStr")]
    pub sales_outlet_id: i64,
    /// Monday is 0.
    pub day_of_week: u32,
    pub day_name: String,
    pub daily_sales: u64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Display)]
pub enum Channel {
    #[strum(serialize = "In-Store")]
    InStore,
    #[strum(serialize = "Online")]
    Online,
    #[strum(serialize = "Unknown")]
    Unknown,
}

impl From<Flag> for Channel {
    fn from(flag: Flag) -> Self {
        match flag {
            Flag::Yes => Channel::InStore,
            Flag::No => Channel::Online,
            Flag::Unknown => Channel::Unknown,
        }
    }
}
