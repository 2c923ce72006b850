use chrono::{Duration, Months, NaiveDate};
use itertools::Itertools as _;
use model::{
    metrics::{SalesComparison, SalesMetrics},
    sales::SalesRecord,
};
use strum::{Display, EnumString};
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum EtlError {
    #[error("Comparison type must be one of: daily, weekly, monthly (got {0:?})")]
    InvalidGranularity(String),
    #[error("Invalid date: {0}")]
    InvalidDate(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumString, Display)]
#[strum(serialize_all = "lowercase")]
pub enum Granularity {
    Daily,
    Weekly,
    Monthly,
}

impl Granularity {
    pub fn parse(value: &str) -> Result<Self, EtlError> {
        value
            .trim()
            .to_lowercase()
            .parse()
            .map_err(|_| EtlError::InvalidGranularity(value.to_string()))
    }

    /// Exclusive end of the period opened at `start`.
    pub fn end(self, start: NaiveDate) -> Result<NaiveDate, EtlError> {
        let end = match self {
            Granularity::Daily => start.checked_add_signed(Duration::days(1)),
            Granularity::Weekly => start.checked_add_signed(Duration::days(7)),
            Granularity::Monthly => start.checked_add_months(Months::new(1)),
        };
        end.ok_or_else(|| EtlError::InvalidDate(format!("{} has no following {}", start, self)))
    }
}

/// `YYYY-MM-DD`.
pub fn parse_date(value: &str) -> Result<NaiveDate, EtlError> {
    NaiveDate::parse_from_str(value.trim(), "%Y-%m-%d")
        .map_err(|err| EtlError::InvalidDate(format!("{}: {}", value, err)))
}

fn receipts(records: &[SalesRecord]) -> usize {
    records.iter().map(|r| r.transaction_id).unique().count()
}

pub fn spending_per_receipt(records: &[SalesRecord]) -> f64 {
    let receipts = receipts(records);
    if receipts == 0 {
        return 0.0;
    }
    records.iter().map(SalesRecord::amount).sum::<f64>() / receipts as f64
}

pub fn items_per_receipt(records: &[SalesRecord]) -> f64 {
    let receipts = receipts(records);
    if receipts == 0 {
        return 0.0;
    }
    let items = records.iter().filter(|r| r.line_item_id.is_some()).count();
    items as f64 / receipts as f64
}

fn period_total(records: &[SalesRecord], start: NaiveDate, end: NaiveDate) -> f64 {
    records
        .iter()
        .filter(|r| r.transaction_date >= start && r.transaction_date < end)
        .map(SalesRecord::amount)
        .sum()
}

pub fn sales_comparison(
    records: &[SalesRecord],
    granularity: Granularity,
    first: NaiveDate,
    second: NaiveDate,
) -> Result<SalesComparison, EtlError> {
    let first_total = period_total(records, first, granularity.end(first)?);
    let second_total = period_total(records, second, granularity.end(second)?);
    Ok(SalesComparison::new(first_total, second_total))
}

/// Metrics of one run; `None` when there is nothing to measure.
pub fn transform(
    records: &[SalesRecord],
    granularity: &str,
    first: NaiveDate,
    second: NaiveDate,
) -> Result<Option<SalesMetrics>, EtlError> {
    let granularity = Granularity::parse(granularity)?;
    if records.is_empty() {
        return Ok(None);
    }
    Ok(Some(SalesMetrics {
        spending_per_receipt: spending_per_receipt(records),
        items_per_receipt: items_per_receipt(records),
        sales_comparison: sales_comparison(records, granularity, first, second)?,
    }))
}
