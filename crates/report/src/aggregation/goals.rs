use std::collections::HashMap;

use model::{goal::SalesGoal, report::goals::SalesDifference, sales::SalesRecord};

use super::{group_by, Reducer};

/// Actual sales against the summed goal per outlet, in goal order. Outlets
/// present on only one side are dropped.
pub fn sales_differences(goals: &[SalesGoal], records: &[SalesRecord]) -> Vec<SalesDifference> {
    let actual: HashMap<i64, f64> =
        group_by(records, |r| Some(r.sales_outlet_id), |r| r.amount(), Reducer::Sum)
            .into_iter()
            .collect();

    goals
        .iter()
        .filter_map(|goal| {
            let actual_sales = *actual.get(&goal.sales_outlet_id)?;
            let total_goal = goal.total_goal();
            Some(SalesDifference {
                sales_outlet_id: goal.sales_outlet_id,
                total_goal,
                actual_sales,
                difference: actual_sales - total_goal,
            })
        })
        .collect()
}
