use std::sync::Arc;

use axum::{extract::Path, routing::get, Extension, Json, Router};
use model::report::response::{
    CustomerTypeReport, DailyReceiptsReport, DailySalesReport, MonthlySalesReport,
    MostSellingItemReport, PeakHourReport, WeeklySalesReport,
};
use report::Reports;

use crate::error::ApiError;

pub fn routes() -> Router {
    Router::new()
        .route("/daily_sales/:store_id", get(daily_sales))
        .route("/weekly_sales/:store_id", get(weekly_sales))
        .route("/monthly_sales/:store_id", get(monthly_sales))
        .route("/peak_hours/:store_id", get(peak_hours))
        .route("/customer_type/:store_id", get(sales_by_customer_type))
        .route("/most_selling_item/:store_id", get(most_selling_item))
        .route("/daily_receipts/:store_id", get(daily_receipts))
}

async fn daily_sales(
    Extension(reports): Extension<Arc<Reports>>,
    Path(store_id): Path<i64>,
) -> Result<Json<DailySalesReport>, ApiError> {
    Ok(Json(reports.daily_sales(store_id).await?))
}

async fn weekly_sales(
    Extension(reports): Extension<Arc<Reports>>,
    Path(store_id): Path<i64>,
) -> Result<Json<WeeklySalesReport>, ApiError> {
    Ok(Json(reports.weekly_sales(store_id).await?))
}

async fn monthly_sales(
    Extension(reports): Extension<Arc<Reports>>,
    Path(store_id): Path<i64>,
) -> Result<Json<MonthlySalesReport>, ApiError> {
    Ok(Json(reports.monthly_sales(store_id).await?))
}

async fn peak_hours(
    Extension(reports): Extension<Arc<Reports>>,
    Path(store_id): Path<i64>,
) -> Result<Json<PeakHourReport>, ApiError> {
    Ok(Json(reports.peak_hour(store_id).await?))
}

async fn sales_by_customer_type(
    Extension(reports): Extension<Arc<Reports>>,
    Path(store_id): Path<i64>,
) -> Result<Json<CustomerTypeReport>, ApiError> {
    Ok(Json(reports.sales_by_customer_type(store_id).await?))
}

async fn most_selling_item(
    Extension(reports): Extension<Arc<Reports>>,
    Path(store_id): Path<i64>,
) -> Result<Json<MostSellingItemReport>, ApiError> {
    Ok(Json(reports.most_selling_item(store_id).await?))
}

async fn daily_receipts(
    Extension(reports): Extension<Arc<Reports>>,
    Path(store_id): Path<i64>,
) -> Result<Json<DailyReceiptsReport>, ApiError> {
    Ok(Json(reports.daily_receipts(store_id).await?))
}
