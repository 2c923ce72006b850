use model::{
    errors::ReportError,
    report::response::{
        CustomerTypeReport, DailyReceiptsReport, DailySalesReport, MonthlySalesReport,
        MostSellingItemReport, PeakHourReport, WeeklySalesReport,
    },
};

use crate::aggregation::{ranking, sales};

use super::Reports;

const STORE_NOT_FOUND: &str = "Store not found";

impl Reports {
    pub async fn daily_sales(&self, store_id: i64) -> Result<DailySalesReport, ReportError> {
        let records = self.sales(Some(store_id), STORE_NOT_FOUND).await?;
        Ok(DailySalesReport {
            store_id,
            daily_sales: sales::daily_sales(&records),
        })
    }

    pub async fn weekly_sales(&self, store_id: i64) -> Result<WeeklySalesReport, ReportError> {
        let records = self.sales(Some(store_id), STORE_NOT_FOUND).await?;
        Ok(WeeklySalesReport {
            store_id,
            weekly_sales: sales::weekly_sales(&records),
        })
    }

    pub async fn monthly_sales(&self, store_id: i64) -> Result<MonthlySalesReport, ReportError> {
        let records = self.sales(Some(store_id), STORE_NOT_FOUND).await?;
        Ok(MonthlySalesReport {
            store_id,
            monthly_sales: sales::monthly_sales(&records),
        })
    }

    pub async fn peak_hour(&self, store_id: i64) -> Result<PeakHourReport, ReportError> {
        let records = self
            .sales(Some(store_id), "Sales data not found for the store")
            .await?;
        let peak_hour = ranking::peak_hour(&records, store_id)
            .ok_or_else(|| ReportError::not_found("No peak hour data found for the store"))?;
        Ok(PeakHourReport { peak_hour })
    }

    pub async fn sales_by_customer_type(
        &self,
        store_id: i64,
    ) -> Result<CustomerTypeReport, ReportError> {
        let records = self.sales(Some(store_id), STORE_NOT_FOUND).await?;
        Ok(CustomerTypeReport {
            store_id,
            sales_by_customer_type: sales::customer_types(&records),
        })
    }

    pub async fn most_selling_item(
        &self,
        store_id: i64,
    ) -> Result<MostSellingItemReport, ReportError> {
        let records = self.sales(Some(store_id), STORE_NOT_FOUND).await?;
        Ok(MostSellingItemReport {
            store_id,
            most_selling_item: ranking::most_selling_items(&records),
        })
    }

    pub async fn daily_receipts(&self, store_id: i64) -> Result<DailyReceiptsReport, ReportError> {
        let records = self
            .sales(Some(store_id), "No sales data found for the store")
            .await?;
        Ok(DailyReceiptsReport {
            store_id,
            daily_receipts: sales::daily_receipts(&records),
        })
    }
}
