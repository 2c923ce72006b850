use bson::oid::ObjectId;
use serde::{Deserialize, Serialize};
use serde_with::{serde_as, DisplayFromStr};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SalesMetrics {
    pub spending_per_receipt: f64,
    pub items_per_receipt: f64,
    pub sales_comparison: SalesComparison,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SalesComparison {
    pub sales_range_1_total: f64,
    pub sales_range_2_total: f64,
    /// Second period minus first.
    pub sales_difference: f64,
}

impl SalesComparison {
    pub fn new(first: f64, second: f64) -> Self {
        SalesComparison {
            sales_range_1_total: first,
            sales_range_2_total: second,
            sales_difference: second - first,
        }
    }
}

/// File form of a stored metrics record, with the store id as hex text.
#[serde_as]
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct MetricsSnapshot {
    #[serde(rename = "_id", default, skip_serializing_if = "Option::is_none")]
    #[serde_as(as = "Option<DisplayFromStr>")]
    pub id: Option<ObjectId>,
    #[serde(flatten)]
    pub metrics: SalesMetrics,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_difference_is_second_minus_first() {
        let comparison = SalesComparison::new(100.0, 130.0);
        assert_eq!(comparison.sales_difference, 30.0);
    }

    #[test]
    fn test_snapshot_renders_id_as_text() {
        let id = ObjectId::new();
        let snapshot = MetricsSnapshot {
            id: Some(id),
            metrics: SalesMetrics {
                spending_per_receipt: 1.5,
                items_per_receipt: 2.0,
                sales_comparison: SalesComparison::new(1.0, 2.0),
            },
        };
        let json = serde_json::to_value(&snapshot).unwrap();
        assert_eq!(json["_id"], serde_json::Value::String(id.to_hex()));
        assert_eq!(json["sales_comparison"]["sales_difference"], 1.0);
    }
}
