use serde::{Deserialize, Serialize};

/// Total flow attributed to one operator. `operator` is `None` for records
/// entered without one.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct OperatorTotal {
    #[serde(default)]
    pub operator: Option<String>,
    pub total: f64,
}

/// Total flow attributed to one customer.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CustomerTotal {
    pub customer_id: i64,
    #[serde(default)]
    pub customer_name: Option<String>,
    pub total: f64,
}

/// Body of `GET /admin/reconciliation`: the 对账 report, aggregated by
/// operator and by customer.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct ReconciliationReport {
    #[serde(default)]
    pub by_operator: Vec<OperatorTotal>,
    #[serde(default)]
    pub by_customer: Vec<CustomerTotal>,
}

impl ReconciliationReport {
    /// True when neither aggregation has anything to show.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.by_operator.is_empty() && self.by_customer.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn report_parses_both_sections() {
        let body = r#"{
            "by_operator": [{"operator": "wang", "total": 5000}, {"operator": null, "total": 120}],
            "by_customer": [{"customer_id": 3, "customer_name": "李四", "total": 5120}]
        }"#;
        let report: ReconciliationReport = serde_json::from_str(body).unwrap();
        assert_eq!(report.by_operator.len(), 2);
        assert!(report.by_operator[1].operator.is_none());
        assert_eq!(report.by_customer[0].customer_id, 3);
        assert!(!report.is_empty());
    }

    #[test]
    fn empty_report_is_empty() {
        let report: ReconciliationReport = serde_json::from_str("{}").unwrap();
        assert!(report.is_empty());
    }
}
