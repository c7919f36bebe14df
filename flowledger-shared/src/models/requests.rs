use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Monthly flow target submitted from the 添加目标 form; not retained
/// client-side after submission.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct NewTarget {
    pub customer_id: i64,
    /// `YYYY-MM`, as produced by a month input.
    pub year_month: String,
    pub amount: f64,
}

/// Manually entered cash-flow record submitted from the 录入流水 form.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct NewRecord {
    pub customer_id: i64,
    pub date: NaiveDate,
    pub amount: f64,
}

/// Generic acknowledgement body for writes (logout, target/record creation,
/// Excel import).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Ack {
    pub success: bool,
    #[serde(default)]
    pub message: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_target_serializes_wire_names() {
        let target = NewTarget {
            customer_id: 9,
            year_month: "2026-08".to_string(),
            amount: 20000.0,
        };
        let json = serde_json::to_value(&target).unwrap();
        assert_eq!(json["customer_id"], 9);
        assert_eq!(json["year_month"], "2026-08");
    }

    #[test]
    fn new_record_date_serializes_as_iso() {
        let record = NewRecord {
            customer_id: 2,
            date: NaiveDate::from_ymd_opt(2026, 8, 5).unwrap(),
            amount: 88.5,
        };
        let json = serde_json::to_value(&record).unwrap();
        assert_eq!(json["date"], "2026-08-05");
    }

    #[test]
    fn ack_message_is_optional() {
        let ack: Ack = serde_json::from_str(r#"{"success": true}"#).unwrap();
        assert!(ack.success);
        assert!(ack.message.is_none());
    }
}
