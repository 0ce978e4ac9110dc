pub mod d100_sales_overview;
pub mod filters;
