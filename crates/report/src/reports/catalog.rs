use model::{
    errors::ReportError,
    report::response::{DrinkSizeReport, MostSoldReport, TaxStatusReport},
};

use crate::aggregation::{
    catalog::{self, MOST_SOLD_LIMIT},
    distribution,
};

use super::{non_empty, Reports};

const REQUIRED_DATA: &str = "Required data not found";

impl Reports {
    pub async fn tax_status_distribution(&self) -> Result<TaxStatusReport, ReportError> {
        const NO_PRODUCTS: &str = "Product data not found";
        let products = non_empty(self.source.products().await?, NO_PRODUCTS)?;
        let tax_status_distribution = distribution::tax_status_distribution(&products);
        if tax_status_distribution.is_empty() {
            return Err(ReportError::not_found(NO_PRODUCTS));
        }
        Ok(TaxStatusReport {
            tax_status_distribution,
        })
    }

    pub async fn drink_size_distribution(&self) -> Result<DrinkSizeReport, ReportError> {
        let products = non_empty(self.source.products().await?, REQUIRED_DATA)?;
        let records = self.sales(None, REQUIRED_DATA).await?;
        let drink_size_distribution = catalog::drink_size_distribution(&products, &records);
        if drink_size_distribution.is_empty() {
            return Err(ReportError::not_found(REQUIRED_DATA));
        }
        Ok(DrinkSizeReport {
            drink_size_distribution,
        })
    }

    pub async fn most_sold_products(&self) -> Result<MostSoldReport, ReportError> {
        let inventory = non_empty(self.source.pastry_inventory().await?, REQUIRED_DATA)?;
        let products = non_empty(self.source.products().await?, REQUIRED_DATA)?;
        let records = self.sales(None, REQUIRED_DATA).await?;
        let most_sold_products = non_empty(
            catalog::most_sold_products(&inventory, &products, &records, MOST_SOLD_LIMIT),
            REQUIRED_DATA,
        )?;
        Ok(MostSoldReport { most_sold_products })
    }
}
