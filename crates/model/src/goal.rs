use serde::Deserialize;

use crate::de;

/// Per-outlet sales targets, one row of the targets sheet.
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct SalesGoal {
    #[serde(deserialize_with = "de::int")]
    pub sales_outlet_id: i64,
    #[serde(default, deserialize_with = "de::float")]
    pub beans_goal: f64,
    #[serde(default, deserialize_with = "de::float")]
    pub beverage_goal: f64,
    #[serde(default, deserialize_with = "de::float")]
    pub food_goal: f64,
    #[serde(
        alias = "merchandise _goal",
        default,
        deserialize_with = "de::float"
    )]
    pub merchandise_goal: f64,
}

impl SalesGoal {
    pub fn total_goal(&self) -> f64 {
        self.beans_goal + self.beverage_goal + self.food_goal + self.merchandise_goal
    }
}
