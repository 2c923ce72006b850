use serde::Serialize;

use crate::ordered::Ordered;

use super::{
    catalog::SoldProduct,
    goals::SalesDifference,
    line_items::LineItemStatistics,
    sales::{
        BestStore, CitySales, CustomerTypeSales, DailyReceipts, DailySales, MonthlySales,
        MostSellingItem, PeakHour, WeekdaySales, WeeklySales,
    },
};

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct DailySalesReport {
    pub store_id: i64,
    pub daily_sales: Vec<DailySales>,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct WeeklySalesReport {
    pub store_id: i64,
    pub weekly_sales: Vec<WeeklySales>,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct MonthlySalesReport {
    pub store_id: i64,
    pub monthly_sales: Vec<MonthlySales>,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct PeakHourReport {
    pub peak_hour: PeakHour,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct CustomerTypeReport {
    pub store_id: i64,
    pub sales_by_customer_type: Vec<CustomerTypeSales>,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct MostSellingItemReport {
    pub store_id: i64,
    pub most_selling_item: Vec<MostSellingItem>,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct SalesComparisonReport {
    pub sales_differences: Vec<SalesDifference>,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct LineItemReport {
    pub line_item_statistics: LineItemStatistics,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct DistributionReport {
    #[serde(rename = "Distribution of In-Store vs. Online Transactions")]
    pub distribution: Ordered<String, u64>,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct GenerationReport {
    pub generation_counts: Ordered<String, u64>,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct DailyReceiptsReport {
    pub store_id: i64,
    pub daily_receipts: Vec<DailyReceipts>,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct BestStoreReport {
    pub best_performing_store_for_month: Vec<BestStore>,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct CityReport {
    pub most_sales_city: CitySales,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct TaxStatusReport {
    pub tax_status_distribution: Ordered<String, f64>,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct DrinkSizeReport {
    pub drink_size_distribution: Ordered<String, f64>,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct MostSoldReport {
    pub most_sold_products: Vec<SoldProduct>,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct AverageSalesReport {
    /// Keyed by `YYYY-MM-DD`.
    pub average_sales_per_transaction_by_day_of_month: Ordered<String, f64>,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct WeekdaySalesReport {
    pub daily_sales_per_week: Vec<WeekdaySales>,
}
