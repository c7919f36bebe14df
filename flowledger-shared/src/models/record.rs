use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Processing state of a single cash-flow record.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum RecordStatus {
    Done,
    Pending,
}

/// One cash-flow record as the server reports it.
///
/// `customer_id`/`customer_name` are only present on the admin listing;
/// `operator` may be absent for imported rows.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct FlowRecord {
    pub date: NaiveDate,
    pub amount: f64,
    pub status: RecordStatus,
    #[serde(default)]
    pub operator: Option<String>,
    #[serde(default)]
    pub customer_id: Option<i64>,
    #[serde(default)]
    pub customer_name: Option<String>,
}

/// Envelope for the record listings. A server that has nothing to report may
/// omit `records` entirely.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct RecordsResponse {
    #[serde(default)]
    pub records: Vec<FlowRecord>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn record_parses_customer_listing_shape() {
        let body = r#"{"date": "2026-07-01", "amount": 1200.5, "status": "done", "operator": "wang"}"#;
        let record: FlowRecord = serde_json::from_str(body).unwrap();
        assert_eq!(record.status, RecordStatus::Done);
        assert_eq!(record.date.to_string(), "2026-07-01");
        assert!(record.customer_id.is_none());
    }

    #[test]
    fn record_parses_admin_listing_shape() {
        let body = r#"{"date": "2026-07-02", "amount": 300, "status": "pending",
                       "customer_id": 4, "customer_name": "张三"}"#;
        let record: FlowRecord = serde_json::from_str(body).unwrap();
        assert_eq!(record.status, RecordStatus::Pending);
        assert_eq!(record.customer_id, Some(4));
        assert!(record.operator.is_none());
    }

    #[test]
    fn missing_records_field_defaults_to_empty() {
        let response: RecordsResponse = serde_json::from_str("{}").unwrap();
        assert!(response.records.is_empty());
    }
}
