use serde::{Deserialize, Serialize};

/// Full dashboard payload for one state + date range query.
///
/// Scalar KPIs are computed over the filtered order subset; the breakdown
/// lists are sorted descending by summed sales. City is capped at the top 8
/// entries, products and sub-categories at the top 10; category and segment
/// are returned in full.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SalesOverviewData {
    pub total_sales: f64,
    pub quantity_sold: i64,
    /// Summed discount as a share of total sales, in percent.
    /// Defined as 0 when total sales is 0.
    pub discount_percentage: f64,
    pub profit: f64,
    pub sales_by_city: Vec<CitySales>,
    pub sales_by_products: Vec<ProductSales>,
    pub sales_by_category: Vec<CategorySales>,
    pub sales_by_sub_category: Vec<SubCategorySales>,
    pub sales_by_segment: Vec<SegmentSales>,
}

/// Summed sales for one city.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CitySales {
    pub city: String,
    pub sales: f64,
}

/// Summed sales for one product.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductSales {
    pub product_name: String,
    pub sales: f64,
}

/// Summed sales for one category.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CategorySales {
    pub category: String,
    pub sales: f64,
}

/// Summed sales for one sub-category.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubCategorySales {
    pub sub_category: String,
    pub sales: f64,
}

/// Summed sales for one customer segment.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SegmentSales {
    pub segment: String,
    pub sales: f64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_serializes_with_camel_case_keys() {
        let data = SalesOverviewData {
            total_sales: 100.0,
            quantity_sold: 2,
            discount_percentage: 10.0,
            profit: 20.0,
            sales_by_city: vec![CitySales {
                city: "Los Angeles".to_string(),
                sales: 100.0,
            }],
            sales_by_products: vec![ProductSales {
                product_name: "Stapler".to_string(),
                sales: 100.0,
            }],
            sales_by_category: vec![],
            sales_by_sub_category: vec![SubCategorySales {
                sub_category: "Phones".to_string(),
                sales: 100.0,
            }],
            sales_by_segment: vec![],
        };

        let json = serde_json::to_value(&data).unwrap();
        assert_eq!(json["totalSales"], 100.0);
        assert_eq!(json["quantitySold"], 2);
        assert_eq!(json["discountPercentage"], 10.0);
        assert_eq!(json["salesByCity"][0]["city"], "Los Angeles");
        assert_eq!(json["salesByProducts"][0]["productName"], "Stapler");
        assert_eq!(json["salesBySubCategory"][0]["subCategory"], "Phones");
        assert!(json["salesByCategory"].as_array().unwrap().is_empty());
        assert!(json["salesBySegment"].as_array().unwrap().is_empty());
    }
}
