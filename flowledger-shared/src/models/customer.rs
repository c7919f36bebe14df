use serde::{Deserialize, Serialize};

/// One entry of the admin customer roster, used to populate the customer
/// selects on the data-entry forms.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CustomerSummary {
    pub id: i64,
    pub username: String,
}

/// Envelope for `GET /admin/customers`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
pub struct CustomerList {
    #[serde(default)]
    pub customers: Vec<CustomerSummary>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn customer_list_parses() {
        let body = r#"{"customers": [{"id": 1, "username": "zhang"}, {"id": 2, "username": "li"}]}"#;
        let list: CustomerList = serde_json::from_str(body).unwrap();
        assert_eq!(list.customers.len(), 2);
        assert_eq!(list.customers[0].id, 1);
    }

    #[test]
    fn missing_customers_field_defaults_to_empty() {
        let list: CustomerList = serde_json::from_str("{}").unwrap();
        assert!(list.customers.is_empty());
    }
}
