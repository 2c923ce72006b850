use chrono::Datelike as _;
use model::{
    ordered::Ordered,
    report::sales::{
        Channel, CustomerTypeSales, DailyReceipts, DailySales, MonthlySales, PeakHour,
        WeekdaySales, WeeklySales,
    },
    sales::SalesRecord,
};

use super::{
    accumulate,
    calendar::{day_name, in_month},
    count_by, group_by, Reducer,
};

pub fn daily_sales(records: &[SalesRecord]) -> Vec<DailySales> {
    group_by(
        records,
        |r| Some((r.transaction_date, r.sales_outlet_id)),
        |r| r.amount(),
        Reducer::Sum,
    )
    .into_iter()
    .map(|((transaction_date, sales_outlet_id), daily_sales)| DailySales {
        transaction_date,
        sales_outlet_id,
        daily_sales,
    })
    .collect()
}

/// Keyed by ISO year and ISO week.
pub fn weekly_sales(records: &[SalesRecord]) -> Vec<WeeklySales> {
    group_by(
        records,
        |r| {
            let week = r.transaction_date.iso_week();
            Some((week.year(), week.week(), r.sales_outlet_id))
        },
        |r| r.amount(),
        Reducer::Sum,
    )
    .into_iter()
    .map(|((year, week, sales_outlet_id), weekly_sales)| WeeklySales {
        year,
        week,
        sales_outlet_id,
        weekly_sales,
    })
    .collect()
}

pub fn monthly_sales(records: &[SalesRecord]) -> Vec<MonthlySales> {
    group_by(
        records,
        |r| {
            Some((
                r.transaction_date.year(),
                r.transaction_date.month(),
                r.sales_outlet_id,
            ))
        },
        |r| r.amount(),
        Reducer::Sum,
    )
    .into_iter()
    .map(|((year, month, sales_outlet_id), monthly_sales)| MonthlySales {
        year,
        month,
        sales_outlet_id,
        monthly_sales,
    })
    .collect()
}

/// Rows without a transaction time are left out.
pub fn hourly_sales(records: &[SalesRecord]) -> Vec<PeakHour> {
    group_by(
        records,
        |r| r.hour().map(|hour| (hour, r.sales_outlet_id)),
        |r| r.amount(),
        Reducer::Sum,
    )
    .into_iter()
    .map(|((hour, sales_outlet_id), line_item_amount)| PeakHour {
        sales_outlet_id,
        hour,
        line_item_amount,
    })
    .collect()
}

pub fn customer_types(records: &[SalesRecord]) -> Vec<CustomerTypeSales> {
    accumulate(records, |r| Some((r.guest, r.sales_outlet_id)), |r| r.amount())
        .into_iter()
        .map(|((guest, sales_outlet_id), agg)| CustomerTypeSales {
            guest,
            sales_outlet_id,
            total_sales: agg.sum,
            total_transactions: agg.count,
        })
        .collect()
}

/// Line-item rows per outlet and calendar date.
pub fn daily_receipts(records: &[SalesRecord]) -> Vec<DailyReceipts> {
    count_by(records, |r| Some((r.sales_outlet_id, r.transaction_date)))
        .into_iter()
        .map(|((sales_outlet_id, transaction_date), daily_receipts)| DailyReceipts {
            sales_outlet_id,
            transaction_date,
            daily_receipts,
        })
        .collect()
}

/// Mean line amount per date within calendar month `month`.
pub fn average_sales_by_day(records: &[SalesRecord], month: u32) -> Ordered<String, f64> {
    group_by(
        records.iter().filter(|r| in_month(r, month)),
        |r| Some(r.transaction_date),
        |r| r.amount(),
        Reducer::Mean,
    )
    .into_iter()
    .map(|(date, mean)| (date.format("%Y-%m-%d").to_string(), mean))
    .collect()
}

/// Rows per weekday and outlet within calendar month `month`, Monday first.
pub fn weekday_sales(records: &[SalesRecord], month: u32) -> Vec<WeekdaySales> {
    count_by(records.iter().filter(|r| in_month(r, month)), |r| {
        let day = r.transaction_date.weekday().num_days_from_monday();
        Some((day, r.sales_outlet_id, day_name(r.transaction_date)))
    })
    .into_iter()
    .map(|((day_of_week, sales_outlet_id, name), daily_sales)| WeekdaySales {
        sales_outlet_id,
        day_of_week,
        day_name: name,
        daily_sales,
    })
    .collect()
}

/// Row counts per channel. Only channels that occur are reported.
pub fn transaction_distribution(records: &[SalesRecord]) -> Ordered<String, u64> {
    count_by(records, |r| Some(Channel::from(r.instore_yn)))
        .into_iter()
        .map(|(channel, count)| (channel.to_string(), count))
        .collect()
}
