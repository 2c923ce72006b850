use std::sync::Arc;

use axum::{extract::Path, routing::get, Extension, Json, Router};
use model::report::{
    line_items::Denominator,
    response::{
        AverageSalesReport, BestStoreReport, CityReport, DistributionReport, DrinkSizeReport,
        GenerationReport, LineItemReport, MostSoldReport, SalesComparisonReport,
        TaxStatusReport, WeekdaySalesReport,
    },
};
use report::Reports;

use crate::error::ApiError;

pub fn routes() -> Router {
    Router::new()
        .route("/sales_comparison", get(sales_comparison))
        .route("/line_item_statistics", get(line_item_statistics))
        .route("/transaction_distribution", get(transaction_distribution))
        .route("/generation_counts", get(generation_counts))
        .route("/best_performing_store_for_month", get(best_performing_store_for_month))
        .route("/most_sales_city", get(most_sales_city))
        .route("/tax_status_distribution", get(tax_status_distribution))
        .route("/drink_size_distribution", get(drink_size_distribution))
        .route("/most_sold_products", get(most_sold_products))
        .route("/average_sales_per_transaction/:month", get(average_sales_per_transaction))
        .route("/daily_sales_per_week/:month", get(daily_sales_per_week))
}

async fn sales_comparison(
    Extension(reports): Extension<Arc<Reports>>,
) -> Result<Json<SalesComparisonReport>, ApiError> {
    Ok(Json(reports.sales_comparison().await?))
}

async fn line_item_statistics(
    Extension(reports): Extension<Arc<Reports>>,
) -> Result<Json<LineItemReport>, ApiError> {
    Ok(Json(reports.line_item_statistics(Denominator::LineItems).await?))
}

async fn transaction_distribution(
    Extension(reports): Extension<Arc<Reports>>,
) -> Result<Json<DistributionReport>, ApiError> {
    Ok(Json(reports.transaction_distribution().await?))
}

async fn generation_counts(
    Extension(reports): Extension<Arc<Reports>>,
) -> Result<Json<GenerationReport>, ApiError> {
    Ok(Json(reports.generation_counts().await?))
}

async fn best_performing_store_for_month(
    Extension(reports): Extension<Arc<Reports>>,
) -> Result<Json<BestStoreReport>, ApiError> {
    Ok(Json(reports.best_performing_store_for_month().await?))
}

async fn most_sales_city(
    Extension(reports): Extension<Arc<Reports>>,
) -> Result<Json<CityReport>, ApiError> {
    Ok(Json(reports.most_sales_city().await?))
}

async fn tax_status_distribution(
    Extension(reports): Extension<Arc<Reports>>,
) -> Result<Json<TaxStatusReport>, ApiError> {
    Ok(Json(reports.tax_status_distribution().await?))
}

async fn drink_size_distribution(
    Extension(reports): Extension<Arc<Reports>>,
) -> Result<Json<DrinkSizeReport>, ApiError> {
    Ok(Json(reports.drink_size_distribution().await?))
}

async fn most_sold_products(
    Extension(reports): Extension<Arc<Reports>>,
) -> Result<Json<MostSoldReport>, ApiError> {
    Ok(Json(reports.most_sold_products().await?))
}

async fn average_sales_per_transaction(
    Extension(reports): Extension<Arc<Reports>>,
    Path(month): Path<u32>,
) -> Result<Json<AverageSalesReport>, ApiError> {
    Ok(Json(reports.average_sales_per_transaction(month).await?))
}

async fn daily_sales_per_week(
    Extension(reports): Extension<Arc<Reports>>,
    Path(month): Path<u32>,
) -> Result<Json<WeekdaySalesReport>, ApiError> {
    Ok(Json(reports.daily_sales_per_week(month).await?))
}
