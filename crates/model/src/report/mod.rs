pub mod catalog;
pub mod goals;
pub mod line_items;
pub mod response;
pub mod sales;
