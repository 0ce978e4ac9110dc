use std::path::Path;

use serde::Deserialize;
use thiserror::Error;

use super::store::OrderRecord;
use crate::shared::dates::parse_dataset_date;

/// Errors raised while materializing the record store from a dataset file.
#[derive(Debug, Error)]
pub enum DatasetError {
    #[error("failed to read dataset file: {0}")]
    Io(#[from] std::io::Error),

    #[error("unsupported dataset format '{0}' (expected .json or .csv)")]
    UnsupportedFormat(String),

    #[error("failed to parse JSON dataset: {0}")]
    Json(#[from] serde_json::Error),

    #[error("failed to read CSV dataset: {0}")]
    Csv(#[from] csv::Error),
}

/// One row as it appears in the source dataset, before date normalization.
/// Field names follow the export's column headers.
#[derive(Debug, Deserialize)]
struct RawOrderRow {
    #[serde(rename = "State")]
    state: String,
    #[serde(rename = "Customer ID")]
    customer_id: String,
    #[serde(rename = "Order Date")]
    order_date: String,
    #[serde(rename = "City")]
    city: String,
    #[serde(rename = "Category")]
    category: String,
    #[serde(rename = "Sub-Category")]
    sub_category: String,
    #[serde(rename = "Segment")]
    segment: String,
    #[serde(rename = "Product Name")]
    product_name: String,
    #[serde(rename = "Sales")]
    sales: f64,
    #[serde(rename = "Quantity")]
    quantity: i64,
    #[serde(rename = "Discount")]
    discount: f64,
    #[serde(rename = "Profit")]
    profit: f64,
}

/// Load the order dataset from a `.json` or `.csv` file.
///
/// Rows with an unparseable order date are skipped with a warning so one bad
/// export line cannot take the whole service down; an unreadable file or an
/// unknown extension aborts the load.
pub fn load_dataset(path: &Path) -> Result<Vec<OrderRecord>, DatasetError> {
    let extension = path
        .extension()
        .and_then(|e| e.to_str())
        .map(|e| e.to_ascii_lowercase())
        .unwrap_or_default();

    if extension != "json" && extension != "csv" {
        return Err(DatasetError::UnsupportedFormat(extension));
    }

    let text = std::fs::read_to_string(path)?;
    let records = if extension == "json" {
        parse_json(&text)?
    } else {
        parse_csv(&text)?
    };

    tracing::info!(
        "Loaded {} order records from {}",
        records.len(),
        path.display()
    );

    Ok(records)
}

fn parse_json(text: &str) -> Result<Vec<OrderRecord>, DatasetError> {
    let rows: Vec<RawOrderRow> = serde_json::from_str(text)?;
    Ok(convert_rows(rows))
}

fn parse_csv(text: &str) -> Result<Vec<OrderRecord>, DatasetError> {
    // Strip UTF-8 BOM if present
    let text = text.trim_start_matches('\u{FEFF}');

    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .from_reader(text.as_bytes());

    // Fail fast when the header row itself cannot be read
    reader.headers()?;

    let mut rows = Vec::new();
    for result in reader.deserialize::<RawOrderRow>() {
        match result {
            Ok(row) => rows.push(row),
            Err(e) => {
                tracing::warn!("Skipping malformed CSV record: {}", e);
            }
        }
    }

    Ok(convert_rows(rows))
}

/// Normalize raw rows into store records.
///
/// Dates are parsed exactly once, here; every later comparison works on
/// `NaiveDate` values.
fn convert_rows(rows: Vec<RawOrderRow>) -> Vec<OrderRecord> {
    let mut records = Vec::with_capacity(rows.len());
    let mut skipped = 0usize;

    for row in rows {
        let order_date = match parse_dataset_date(&row.order_date) {
            Some(date) => date,
            None => {
                tracing::warn!(
                    "Skipping record with unparseable order date '{}'",
                    row.order_date
                );
                skipped += 1;
                continue;
            }
        };

        records.push(OrderRecord {
            state: row.state,
            customer_id: row.customer_id,
            order_date,
            city: row.city,
            category: row.category,
            sub_category: row.sub_category,
            segment: row.segment,
            product_name: row.product_name,
            sales: row.sales,
            quantity: row.quantity,
            discount: row.discount,
            profit: row.profit,
        });
    }

    if skipped > 0 {
        tracing::warn!("Skipped {} records with unparseable order dates", skipped);
    }

    records
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE_JSON: &str = r#"[
        {
            "State": "California",
            "Customer ID": "CG-12520",
            "Order Date": "2016-11-08",
            "City": "Los Angeles",
            "Category": "Furniture",
            "Sub-Category": "Bookcases",
            "Segment": "Consumer",
            "Product Name": "Bush Somerset Collection Bookcase",
            "Sales": 261.96,
            "Quantity": 2,
            "Discount": 0.0,
            "Profit": 41.91
        }
    ]"#;

    #[test]
    fn test_parse_json_dataset() {
        let records = parse_json(SAMPLE_JSON).unwrap();
        assert_eq!(records.len(), 1);

        let record = &records[0];
        assert_eq!(record.state, "California");
        assert_eq!(record.customer_id, "CG-12520");
        assert_eq!(record.order_date.to_string(), "2016-11-08");
        assert_eq!(record.sub_category, "Bookcases");
        assert_eq!(record.quantity, 2);
    }

    #[test]
    fn test_parse_csv_dataset_with_slashed_dates() {
        let csv_text = "\
State,Customer ID,Order Date,City,Category,Sub-Category,Segment,Product Name,Sales,Quantity,Discount,Profit
California,CG-12520,11/8/2016,Los Angeles,Furniture,Bookcases,Consumer,Bush Somerset Collection Bookcase,261.96,2,0.0,41.91
Texas,DV-13045,6/12/2017,Houston,Office Supplies,Binders,Corporate,Avery Binder,7.28,2,0.8,-1.82
";
        let records = parse_csv(csv_text).unwrap();
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].order_date.to_string(), "2016-11-08");
        assert_eq!(records[1].state, "Texas");
        assert_eq!(records[1].profit, -1.82);
    }

    #[test]
    fn test_rows_with_bad_dates_are_skipped() {
        let csv_text = "\
State,Customer ID,Order Date,City,Category,Sub-Category,Segment,Product Name,Sales,Quantity,Discount,Profit
California,CG-12520,2016-11-08,Los Angeles,Furniture,Bookcases,Consumer,Bookcase,261.96,2,0.0,41.91
Texas,DV-13045,not-a-date,Houston,Office Supplies,Binders,Corporate,Binder,7.28,2,0.8,-1.82
";
        let records = parse_csv(csv_text).unwrap();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].state, "California");
    }

    #[test]
    fn test_unknown_extension_is_rejected() {
        let err = load_dataset(Path::new("sales.xml")).unwrap_err();
        assert!(matches!(err, DatasetError::UnsupportedFormat(ext) if ext == "xml"));
    }
}
