use std::collections::BTreeSet;

use chrono::NaiveDate;
use contracts::shared::date_range::DateRange;

use crate::shared::dates::format_iso_date;

/// One historical sales transaction.
///
/// String attributes are exact-match dimensions used for filtering and
/// grouping; the numeric attributes are measures summed during aggregation.
/// `discount` is a currency amount, not a rate, despite its name.
#[derive(Debug, Clone)]
pub struct OrderRecord {
    pub state: String,
    pub customer_id: String,
    /// Calendar date only; any time component is normalized away at load time.
    pub order_date: NaiveDate,
    pub city: String,
    pub category: String,
    pub sub_category: String,
    pub segment: String,
    pub product_name: String,
    pub sales: f64,
    pub quantity: i64,
    pub discount: f64,
    pub profit: f64,
}

/// The full ordered set of order records, loaded once at startup and
/// read-only for the rest of the process lifetime.
///
/// Every query is a pure function over the store plus its parameters, so
/// concurrent requests share one instance behind an `Arc` with no locking.
#[derive(Debug, Default)]
pub struct SalesStore {
    records: Vec<OrderRecord>,
}

impl SalesStore {
    pub fn new(records: Vec<OrderRecord>) -> Self {
        Self { records }
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Distinct `state` values, deduplicated and sorted ascending.
    pub fn distinct_states(&self) -> Vec<String> {
        self.distinct_values(|r| &r.state)
    }

    /// Distinct `customer_id` values, deduplicated and sorted ascending.
    pub fn distinct_customer_ids(&self) -> Vec<String> {
        self.distinct_values(|r| &r.customer_id)
    }

    fn distinct_values<F>(&self, value: F) -> Vec<String>
    where
        F: Fn(&OrderRecord) -> &str,
    {
        let set: BTreeSet<String> = self.records.iter().map(|r| value(r).to_string()).collect();
        set.into_iter().collect()
    }

    /// Earliest and latest order date among records of one state.
    pub fn date_range_for_state(&self, state: &str) -> DateRange {
        self.date_range_where(|r| r.state == state)
    }

    /// Earliest and latest order date among records of one customer.
    pub fn date_range_for_customer(&self, customer_id: &str) -> DateRange {
        self.date_range_where(|r| r.customer_id == customer_id)
    }

    fn date_range_where<F>(&self, matches: F) -> DateRange
    where
        F: Fn(&OrderRecord) -> bool,
    {
        let mut bounds: Option<(NaiveDate, NaiveDate)> = None;

        for record in self.records.iter().filter(|r| matches(r)) {
            bounds = Some(match bounds {
                None => (record.order_date, record.order_date),
                Some((min, max)) => (min.min(record.order_date), max.max(record.order_date)),
            });
        }

        match bounds {
            Some((min, max)) => DateRange::new(format_iso_date(min), format_iso_date(max)),
            None => DateRange::empty(),
        }
    }

    /// Records matching the dashboard filter.
    ///
    /// A record is included iff its order date lies within `[from, to]`
    /// inclusive AND its state matches exactly AND, when a customer id is
    /// given, that matches exactly too — a strict conjunction.
    pub fn filter(
        &self,
        state: &str,
        from: NaiveDate,
        to: NaiveDate,
        customer_id: Option<&str>,
    ) -> Vec<&OrderRecord> {
        self.records
            .iter()
            .filter(|r| r.order_date >= from && r.order_date <= to)
            .filter(|r| r.state == state)
            .filter(|r| customer_id.map_or(true, |id| r.customer_id == id))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(value: &str) -> NaiveDate {
        NaiveDate::parse_from_str(value, "%Y-%m-%d").unwrap()
    }

    fn record(state: &str, customer_id: &str, order_date: &str) -> OrderRecord {
        OrderRecord {
            state: state.to_string(),
            customer_id: customer_id.to_string(),
            order_date: date(order_date),
            city: "Los Angeles".to_string(),
            category: "Technology".to_string(),
            sub_category: "Phones".to_string(),
            segment: "Consumer".to_string(),
            product_name: "Cordless Phone".to_string(),
            sales: 100.0,
            quantity: 2,
            discount: 10.0,
            profit: 20.0,
        }
    }

    fn sample_store() -> SalesStore {
        SalesStore::new(vec![
            record("Texas", "C2", "2016-03-10"),
            record("California", "C1", "2016-05-01"),
            record("California", "C2", "2016-07-15"),
            record("Texas", "C1", "2017-01-20"),
            record("California", "C1", "2016-02-03"),
        ])
    }

    #[test]
    fn test_distinct_states_deduped_and_sorted() {
        let store = sample_store();
        assert_eq!(store.distinct_states(), vec!["California", "Texas"]);
        // No hidden state mutation: a second call yields the same output.
        assert_eq!(store.distinct_states(), store.distinct_states());
    }

    #[test]
    fn test_distinct_customer_ids_deduped_and_sorted() {
        let store = sample_store();
        assert_eq!(store.distinct_customer_ids(), vec!["C1", "C2"]);
    }

    #[test]
    fn test_empty_store_yields_empty_lists() {
        let store = SalesStore::new(vec![]);
        assert!(store.distinct_states().is_empty());
        assert!(store.distinct_customer_ids().is_empty());
        assert!(store.is_empty());
    }

    #[test]
    fn test_date_range_for_state() {
        let store = sample_store();
        let range = store.date_range_for_state("California");
        assert_eq!(range.min_date, "2016-02-03");
        assert_eq!(range.max_date, "2016-07-15");
    }

    #[test]
    fn test_date_range_single_record_has_equal_bounds() {
        let store = SalesStore::new(vec![record("California", "C1", "2016-05-01")]);
        let range = store.date_range_for_state("California");
        assert_eq!(range.min_date, "2016-05-01");
        assert_eq!(range.max_date, "2016-05-01");
    }

    #[test]
    fn test_date_range_without_matches_is_empty_sentinel() {
        let store = sample_store();
        let range = store.date_range_for_state("Nevada");
        assert!(range.is_empty());
        assert_eq!(range, DateRange::empty());
    }

    #[test]
    fn test_date_range_for_customer() {
        let store = sample_store();
        let range = store.date_range_for_customer("C1");
        assert_eq!(range.min_date, "2016-02-03");
        assert_eq!(range.max_date, "2017-01-20");
    }

    #[test]
    fn test_filter_date_bounds_are_inclusive() {
        let store = sample_store();
        let matched = store.filter("California", date("2016-02-03"), date("2016-07-15"), None);
        assert_eq!(matched.len(), 3);

        // Narrowing to a single boundary day still matches that day.
        let matched = store.filter("California", date("2016-05-01"), date("2016-05-01"), None);
        assert_eq!(matched.len(), 1);
    }

    #[test]
    fn test_customer_filter_never_enlarges_result() {
        let store = sample_store();
        let all = store.filter("California", date("2016-01-01"), date("2017-12-31"), None);
        let one = store.filter("California", date("2016-01-01"), date("2017-12-31"), Some("C1"));
        assert!(one.len() <= all.len());
        assert_eq!(one.len(), 2);
        assert!(one.iter().all(|r| r.customer_id == "C1"));
    }
}
