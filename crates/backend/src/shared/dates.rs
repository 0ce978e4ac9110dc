use chrono::NaiveDate;

/// Wire format for calendar dates across the whole API.
pub const ISO_DATE_FORMAT: &str = "%Y-%m-%d";

/// Parse an ISO `YYYY-MM-DD` date, as supplied in query parameters.
///
/// The error is propagated to the caller so the boundary layer can reject
/// the request; malformed query dates are never silently ignored.
pub fn parse_iso_date(value: &str) -> Result<NaiveDate, chrono::ParseError> {
    NaiveDate::parse_from_str(value.trim(), ISO_DATE_FORMAT)
}

/// Parse a date as it appears in the source dataset.
///
/// Dataset exports carry either ISO dates or the `M/D/YYYY` form produced
/// by spreadsheet tools. Time-of-day never appears; records are stored at
/// day granularity from this point on.
pub fn parse_dataset_date(value: &str) -> Option<NaiveDate> {
    let value = value.trim();
    NaiveDate::parse_from_str(value, ISO_DATE_FORMAT)
        .or_else(|_| NaiveDate::parse_from_str(value, "%m/%d/%Y"))
        .ok()
}

/// Format a date back to the ISO wire form.
pub fn format_iso_date(date: NaiveDate) -> String {
    date.format(ISO_DATE_FORMAT).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_iso_date() {
        let date = parse_iso_date("2016-05-01").unwrap();
        assert_eq!(format_iso_date(date), "2016-05-01");
        assert_eq!(parse_iso_date(" 2016-05-01 ").unwrap(), date);
    }

    #[test]
    fn test_parse_iso_date_rejects_garbage() {
        assert!(parse_iso_date("05/01/2016").is_err());
        assert!(parse_iso_date("2016-13-01").is_err());
        assert!(parse_iso_date("").is_err());
    }

    #[test]
    fn test_parse_dataset_date_accepts_both_forms() {
        let iso = parse_dataset_date("2016-11-08").unwrap();
        let slashed = parse_dataset_date("11/8/2016").unwrap();
        assert_eq!(iso, slashed);
        assert!(parse_dataset_date("not a date").is_none());
    }
}
