use model::{
    errors::ReportError,
    report::{
        line_items::Denominator,
        response::{
            AverageSalesReport, BestStoreReport, CityReport, DistributionReport, GenerationReport,
            LineItemReport, SalesComparisonReport, WeekdaySalesReport,
        },
    },
};

use crate::aggregation::{distribution, goals, ranking, sales};

use super::{non_empty, targets, Reports};

const NO_DATA: &str = "No data found";
const REQUIRED_DATA: &str = "Required data not found";
const SALES_NOT_FOUND: &str = "Sales data not found";

impl Reports {
    /// Actual sales per outlet against the targets sheet.
    pub async fn sales_comparison(&self) -> Result<SalesComparisonReport, ReportError> {
        const EMPTY_INPUT: &str = "Input data cannot be empty";
        let goals = non_empty(targets::load(&self.targets_path)?, EMPTY_INPUT)?;
        let records = self.sales(None, EMPTY_INPUT).await?;
        let sales_differences = non_empty(goals::sales_differences(&goals, &records), NO_DATA)?;
        Ok(SalesComparisonReport { sales_differences })
    }

    pub async fn line_item_statistics(
        &self,
        denominator: Denominator,
    ) -> Result<LineItemReport, ReportError> {
        let records = self.sales(None, NO_DATA).await?;
        Ok(LineItemReport {
            line_item_statistics: distribution::line_item_statistics(&records, denominator),
        })
    }

    pub async fn transaction_distribution(&self) -> Result<DistributionReport, ReportError> {
        let records = self.sales(None, NO_DATA).await?;
        Ok(DistributionReport {
            distribution: sales::transaction_distribution(&records),
        })
    }

    pub async fn generation_counts(&self) -> Result<GenerationReport, ReportError> {
        const NO_GENERATIONS: &str = "No generation data found";
        let customers = non_empty(self.source.customers().await?, NO_GENERATIONS)?;
        let generation_counts = distribution::generation_counts(&customers);
        if generation_counts.is_empty() {
            return Err(ReportError::not_found(NO_GENERATIONS));
        }
        Ok(GenerationReport { generation_counts })
    }

    pub async fn best_performing_store_for_month(&self) -> Result<BestStoreReport, ReportError> {
        let records = self.sales(None, "No sales data found").await?;
        Ok(BestStoreReport {
            best_performing_store_for_month: ranking::best_store_per_month(&records),
        })
    }

    pub async fn most_sales_city(&self) -> Result<CityReport, ReportError> {
        let records = self.sales(None, REQUIRED_DATA).await?;
        let outlets = non_empty(self.source.outlets().await?, REQUIRED_DATA)?;
        let most_sales_city = ranking::most_sales_city(&records, &outlets)
            .ok_or_else(|| ReportError::not_found(NO_DATA))?;
        Ok(CityReport { most_sales_city })
    }

    /// Mean line amount per date of calendar month `month`, any year.
    pub async fn average_sales_per_transaction(
        &self,
        month: u32,
    ) -> Result<AverageSalesReport, ReportError> {
        let records = self.sales(None, SALES_NOT_FOUND).await?;
        let average = sales::average_sales_by_day(&records, month);
        if average.is_empty() {
            return Err(ReportError::not_found(SALES_NOT_FOUND));
        }
        Ok(AverageSalesReport {
            average_sales_per_transaction_by_day_of_month: average,
        })
    }

    pub async fn daily_sales_per_week(&self, month: u32) -> Result<WeekdaySalesReport, ReportError> {
        let records = self.sales(None, SALES_NOT_FOUND).await?;
        let daily_sales_per_week =
            non_empty(sales::weekday_sales(&records, month), SALES_NOT_FOUND)?;
        Ok(WeekdaySalesReport {
            daily_sales_per_week,
        })
    }
}

#[cfg(test)]
mod tests {
    use std::{io::Write as _, sync::Arc};

    use bson::doc;
    use model::report::line_items::Denominator;
    use storage::{
        catalog::{CUSTOMER, SALES_OUTLET},
        memory::MemoryStore,
    };

    use crate::reports::{
        tests::{line, reports},
        Reports,
    };

    fn store() -> MemoryStore {
        MemoryStore::default()
            .with_sales([
                line(1, 3, "2019-04-01", "08:00:00", 1, 30.0),
                line(2, 3, "2019-04-02", "09:00:00", 2, 25.0),
                line(3, 5, "2019-04-02", "10:00:00", 1, 12.0),
                line(4, 8, "2019-05-06", "10:00:00", 1, 4.0),
            ])
            .with(
                SALES_OUTLET,
                [
                    doc! { "sales_outlet_id": 3, "store_city": "Astoria" },
                    doc! { "sales_outlet_id": 5, "store_city": "Hell's Kitchen" },
                ],
            )
            .with(
                CUSTOMER,
                [
                    doc! { "customer_id": 1, "generation": "Gen Z" },
                    doc! { "customer_id": 2, "generation": "Millennials" },
                    doc! { "customer_id": 3, "generation": "Gen Z" },
                ],
            )
    }

    #[tokio::test]
    async fn test_sales_comparison_reads_targets() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "sales_outlet_id,beans_goal,beverage_goal,food_goal,merchandise _goal").unwrap();
        writeln!(file, "3,10,20,5,5").unwrap();
        writeln!(file, "9,1,1,1,1").unwrap();
        let reports = Reports::new(Arc::new(store()), file.path());

        let report = reports.sales_comparison().await.unwrap();
        assert_eq!(report.sales_differences.len(), 1);
        assert_eq!(report.sales_differences[0].actual_sales, 55.0);
        assert_eq!(report.sales_differences[0].difference, 15.0);
    }

    #[tokio::test]
    async fn test_sales_comparison_without_targets_file() {
        let err = reports(store()).sales_comparison().await.unwrap_err();
        assert!(!err.is_not_found());
        assert!(err.to_string().contains("Failed to open sales targets"));
    }

    #[tokio::test]
    async fn test_line_items_and_distribution() {
        let reports = reports(store());
        let stats = reports
            .line_item_statistics(Denominator::LineItems)
            .await
            .unwrap();
        assert_eq!(stats.line_item_statistics.total_customers, 4);
        assert_eq!(stats.line_item_statistics.percentage_1_line_item_id, 100.0);

        let distribution = reports.transaction_distribution().await.unwrap();
        let json = serde_json::to_value(&distribution).unwrap();
        assert_eq!(json["Distribution of In-Store vs. Online Transactions"]["In-Store"], 4);
    }

    #[tokio::test]
    async fn test_sparse_row_does_not_fail_reports() {
        let mut sparse = line(5, 3, "2019-04-03", "11:00:00", 1, 9.0);
        sparse.insert("product_id", bson::Bson::Null);
        let reports = reports(
            MemoryStore::default().with_sales([
                line(1, 3, "2019-04-01", "08:00:00", 1, 30.0),
                sparse,
                line(2, 3, "2019-04-02", "09:00:00", 2, 25.0),
            ]),
        );
        let stats = reports
            .line_item_statistics(Denominator::LineItems)
            .await
            .unwrap();
        assert_eq!(stats.line_item_statistics.total_customers, 2);

        let distribution = reports.transaction_distribution().await.unwrap();
        let json = serde_json::to_value(&distribution).unwrap();
        assert_eq!(json["Distribution of In-Store vs. Online Transactions"]["In-Store"], 2);
    }

    #[tokio::test]
    async fn test_empty_sales_are_not_found() {
        let reports = reports(MemoryStore::default());
        assert_eq!(
            reports
                .line_item_statistics(Denominator::Receipts)
                .await
                .unwrap_err()
                .to_string(),
            "No data found"
        );
        assert!(reports.transaction_distribution().await.unwrap_err().is_not_found());
        assert!(reports
            .best_performing_store_for_month()
            .await
            .unwrap_err()
            .is_not_found());
        assert_eq!(
            reports.most_sales_city().await.unwrap_err().to_string(),
            "Required data not found"
        );
        assert_eq!(
            reports.generation_counts().await.unwrap_err().to_string(),
            "No generation data found"
        );
    }

    #[tokio::test]
    async fn test_generation_counts() {
        let report = reports(store()).generation_counts().await.unwrap();
        assert_eq!(
            serde_json::to_string(&report).unwrap(),
            r#"{"generation_counts":{"Gen Z":2,"Millennials":1}}"#
        );
    }

    #[tokio::test]
    async fn test_best_store_and_city() {
        let reports = reports(store());
        let best = reports.best_performing_store_for_month().await.unwrap();
        assert_eq!(best.best_performing_store_for_month.len(), 2);
        assert_eq!(best.best_performing_store_for_month[0].sales_outlet_id, 3);

        let city = reports.most_sales_city().await.unwrap();
        assert_eq!(city.most_sales_city.store_city, "Astoria");
        assert_eq!(city.most_sales_city.line_item_amount, 55.0);
    }

    #[tokio::test]
    async fn test_month_reports() {
        let reports = reports(store());
        let average = reports.average_sales_per_transaction(4).await.unwrap();
        let days = &average.average_sales_per_transaction_by_day_of_month;
        assert_eq!(days.get("2019-04-02"), Some(&18.5));

        let weekdays = reports.daily_sales_per_week(5).await.unwrap();
        assert_eq!(weekdays.daily_sales_per_week.len(), 1);
        assert_eq!(weekdays.daily_sales_per_week[0].day_name, "Monday");

        let err = reports.average_sales_per_transaction(7).await.unwrap_err();
        assert_eq!(err.to_string(), "Sales data not found");
        assert!(reports.daily_sales_per_week(13).await.unwrap_err().is_not_found());
    }
}
