use std::collections::HashMap;

use model::{
    catalog::SalesOutlet,
    report::sales::{BestStore, CitySales, MostSellingItem, PeakHour},
    sales::SalesRecord,
};

use super::{calendar::month_label, group_by, max_by_value, max_per, sales::hourly_sales, Reducer};

/// Busiest hour of `outlet`; earliest hour on a tie.
pub fn peak_hour(records: &[SalesRecord], outlet: i64) -> Option<PeakHour> {
    let outlet_records: Vec<_> = records
        .iter()
        .filter(|r| r.sales_outlet_id == outlet)
        .cloned()
        .collect();
    max_by_value(hourly_sales(&outlet_records), |h| h.line_item_amount)
}

/// Product with the largest summed quantity per outlet; lowest product id on a tie.
pub fn most_selling_items(records: &[SalesRecord]) -> Vec<MostSellingItem> {
    let totals = group_by(
        records,
        |r| Some((r.sales_outlet_id, r.product_id)),
        |r| r.quantity,
        Reducer::Sum,
    )
    .into_iter()
    .map(|((sales_outlet_id, product_id), total_quantity)| MostSellingItem {
        sales_outlet_id,
        product_id,
        total_quantity,
    });
    max_per(totals, |item| item.sales_outlet_id, |item| item.total_quantity)
}

/// Outlet with the largest sales per `YYYY-MM` month; lowest outlet id on a tie.
pub fn best_store_per_month(records: &[SalesRecord]) -> Vec<BestStore> {
    let totals = group_by(
        records,
        |r| Some((month_label(r.transaction_date), r.sales_outlet_id)),
        |r| r.amount(),
        Reducer::Sum,
    )
    .into_iter()
    .map(|((month, sales_outlet_id), monthly_sales)| BestStore {
        month,
        sales_outlet_id,
        monthly_sales,
    });
    max_per(totals, |best| best.month.clone(), |best| best.monthly_sales)
}

/// City with the largest sales. Sales of outlets missing from `outlets`, and
/// outlets without a city, do not take part.
pub fn most_sales_city(records: &[SalesRecord], outlets: &[SalesOutlet]) -> Option<CitySales> {
    let mut cities: HashMap<i64, &str> = HashMap::new();
    for outlet in outlets {
        if let Some(city) = outlet.store_city.as_deref() {
            cities.entry(outlet.sales_outlet_id).or_insert(city);
        }
    }

    let totals = group_by(
        records,
        |r| cities.get(&r.sales_outlet_id).map(|city| city.to_string()),
        |r| r.amount(),
        Reducer::Sum,
    );
    max_by_value(totals, |(_, amount)| *amount).map(|(store_city, line_item_amount)| CitySales {
        store_city,
        line_item_amount,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::aggregation::tests::record;

    fn outlet(id: i64, city: Option<&str>) -> SalesOutlet {
        SalesOutlet {
            sales_outlet_id: id,
            store_city: city.map(str::to_string),
        }
    }

    #[test]
    fn test_peak_hour() {
        let records = vec![
            record(3, "2019-04-01", "09:05:00", 1, 60.0),
            record(3, "2019-04-01", "09:45:00", 1, 40.0),
            record(3, "2019-04-01", "14:10:00", 1, 250.0),
            record(3, "2019-04-01", "18:00:00", 1, 80.0),
            record(5, "2019-04-01", "11:00:00", 1, 900.0),
        ];
        let peak = peak_hour(&records, 3).unwrap();
        assert_eq!(peak.hour, 14);
        assert_eq!(peak.line_item_amount, 250.0);
        assert_eq!(peak.sales_outlet_id, 3);
    }

    #[test]
    fn test_peak_hour_missing_outlet() {
        let records = vec![record(3, "2019-04-01", "09:05:00", 1, 60.0)];
        assert_eq!(peak_hour(&records, 8), None);
        assert_eq!(peak_hour(&[], 3), None);
    }

    #[test]
    fn test_peak_hour_tie_takes_earliest() {
        let records = vec![
            record(3, "2019-04-01", "16:00:00", 1, 50.0),
            record(3, "2019-04-01", "08:00:00", 1, 50.0),
        ];
        assert_eq!(peak_hour(&records, 3).unwrap().hour, 8);
    }

    #[test]
    fn test_most_selling_item_per_outlet() {
        let mut records = vec![
            record(3, "2019-04-01", "08:00:00", 7, 1.0),
            record(3, "2019-04-01", "08:00:00", 2, 1.0),
            record(3, "2019-04-02", "08:00:00", 2, 1.0),
            record(5, "2019-04-01", "08:00:00", 9, 1.0),
            record(5, "2019-04-01", "08:00:00", 4, 1.0),
        ];
        records[0].quantity = 2.0;
        let items = most_selling_items(&records);
        assert_eq!(items.len(), 2);
        // 2 and 7 both reach 2 units; the lower id wins.
        assert_eq!((items[0].sales_outlet_id, items[0].product_id), (3, 2));
        assert_eq!(items[0].total_quantity, 2.0);
        assert_eq!((items[1].sales_outlet_id, items[1].product_id), (5, 4));
    }

    #[test]
    fn test_best_store_per_month() {
        let records = vec![
            record(3, "2019-04-01", "08:00:00", 1, 10.0),
            record(5, "2019-04-02", "08:00:00", 1, 25.0),
            record(3, "2019-04-03", "08:00:00", 1, 10.0),
            record(8, "2019-05-01", "08:00:00", 1, 1.0),
        ];
        let best = best_store_per_month(&records);
        assert_eq!(best.len(), 2);
        assert_eq!((best[0].month.as_str(), best[0].sales_outlet_id), ("2019-04", 5));
        assert_eq!(best[0].monthly_sales, 25.0);
        assert_eq!((best[1].month.as_str(), best[1].sales_outlet_id), ("2019-05", 8));
        let json = serde_json::to_value(&best[0]).unwrap();
        assert_eq!(json["sales_outlet_id"], "5");
    }

    #[test]
    fn test_most_sales_city_joins_outlets() {
        let records = vec![
            record(3, "2019-04-01", "08:00:00", 1, 10.0),
            record(5, "2019-04-01", "08:00:00", 1, 4.0),
            record(8, "2019-04-01", "08:00:00", 1, 8.0),
            record(9, "2019-04-01", "08:00:00", 1, 1000.0),
        ];
        let outlets = vec![
            outlet(3, Some("Astoria")),
            outlet(5, Some("Brooklyn")),
            outlet(8, Some("Brooklyn")),
            outlet(10, Some("Hell's Kitchen")),
        ];
        let city = most_sales_city(&records, &outlets).unwrap();
        assert_eq!(city.store_city, "Brooklyn");
        assert_eq!(city.line_item_amount, 12.0);
    }

    #[test]
    fn test_most_sales_city_without_join() {
        let records = vec![record(3, "2019-04-01", "08:00:00", 1, 10.0)];
        assert_eq!(most_sales_city(&records, &[outlet(5, Some("Astoria"))]), None);
        assert_eq!(most_sales_city(&records, &[outlet(3, None)]), None);
    }
}
