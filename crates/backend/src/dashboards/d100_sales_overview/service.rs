use std::collections::HashMap;

use chrono::NaiveDate;
use contracts::dashboards::d100_sales_overview::{
    CategorySales, CitySales, ProductSales, SalesOverviewData, SegmentSales, SubCategorySales,
};

use crate::shared::data::store::{OrderRecord, SalesStore};

/// Breakdown caps, matching the dashboard's chart layouts.
const TOP_CITIES: usize = 8;
const TOP_PRODUCTS: usize = 10;
const TOP_SUB_CATEGORIES: usize = 10;

/// Parsed dashboard query: exact state match, inclusive date range, and an
/// optional exact customer filter.
#[derive(Debug, Clone)]
pub struct DashboardQuery<'a> {
    pub state: &'a str,
    pub from: NaiveDate,
    pub to: NaiveDate,
    pub customer_id: Option<&'a str>,
}

/// Compute the full dashboard aggregate for one query.
///
/// A pure function over the store: an empty filtered subset yields all-zero
/// KPIs and empty breakdowns, never an error, so the boundary layer needs no
/// special case for "no data".
pub fn compute_overview(store: &SalesStore, query: &DashboardQuery) -> SalesOverviewData {
    let filtered = store.filter(query.state, query.from, query.to, query.customer_id);

    let total_sales: f64 = filtered.iter().map(|r| r.sales).sum();
    let quantity_sold: i64 = filtered.iter().map(|r| r.quantity).sum();
    let total_discount: f64 = filtered.iter().map(|r| r.discount).sum();
    let profit: f64 = filtered.iter().map(|r| r.profit).sum();

    // `discount` is a currency amount; the "percentage" relates the summed
    // amount to revenue. Zero revenue is defined as zero percent.
    let discount_percentage = if total_sales > 0.0 {
        (total_discount / total_sales) * 100.0
    } else {
        0.0
    };

    // Sales by City (top 8)
    let mut by_city = sales_by(&filtered, |r| &r.city);
    by_city.truncate(TOP_CITIES);
    let sales_by_city = by_city
        .into_iter()
        .map(|(city, sales)| CitySales { city, sales })
        .collect();

    // Sales by Products (top 10)
    let mut by_product = sales_by(&filtered, |r| &r.product_name);
    by_product.truncate(TOP_PRODUCTS);
    let sales_by_products = by_product
        .into_iter()
        .map(|(product_name, sales)| ProductSales {
            product_name,
            sales,
        })
        .collect();

    // Sales by Category (full set)
    let sales_by_category = sales_by(&filtered, |r| &r.category)
        .into_iter()
        .map(|(category, sales)| CategorySales { category, sales })
        .collect();

    // Sales by Sub-Category (top 10)
    let mut by_sub_category = sales_by(&filtered, |r| &r.sub_category);
    by_sub_category.truncate(TOP_SUB_CATEGORIES);
    let sales_by_sub_category = by_sub_category
        .into_iter()
        .map(|(sub_category, sales)| SubCategorySales {
            sub_category,
            sales,
        })
        .collect();

    // Sales by Segment (full set)
    let sales_by_segment = sales_by(&filtered, |r| &r.segment)
        .into_iter()
        .map(|(segment, sales)| SegmentSales { segment, sales })
        .collect();

    SalesOverviewData {
        total_sales,
        quantity_sold,
        discount_percentage,
        profit,
        sales_by_city,
        sales_by_products,
        sales_by_category,
        sales_by_sub_category,
        sales_by_segment,
    }
}

/// Sum sales per distinct key, sorted descending by the summed value.
///
/// Groups accumulate in first-seen order; the stable sort keeps that order
/// as the tie-break between equal sums.
fn sales_by<F>(records: &[&OrderRecord], key: F) -> Vec<(String, f64)>
where
    F: Fn(&OrderRecord) -> &str,
{
    let mut slots: HashMap<String, usize> = HashMap::new();
    let mut groups: Vec<(String, f64)> = Vec::new();

    for record in records {
        match slots.get(key(record)) {
            Some(&slot) => groups[slot].1 += record.sales,
            None => {
                slots.insert(key(record).to_string(), groups.len());
                groups.push((key(record).to_string(), record.sales));
            }
        }
    }

    groups.sort_by(|a, b| b.1.total_cmp(&a.1));
    groups
}
