pub mod catalog;
pub mod de;
pub mod errors;
pub mod flag;
pub mod goal;
pub mod metrics;
pub mod ordered;
pub mod report;
pub mod sales;
