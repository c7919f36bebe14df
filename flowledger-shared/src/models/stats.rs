use serde::{Deserialize, Serialize};

/// Aggregate figures shown on the dashboard, from
/// `GET /customer/{user_id}/stats`.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Default)]
pub struct CustomerStats {
    pub completed_flow: f64,
    pub pending_flow: f64,
    pub total_flow: f64,
    pub daily_flow: f64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stats_parse_from_wire_shape() {
        let body = r#"{"completed_flow": 100, "pending_flow": 50,
                       "total_flow": 150, "daily_flow": 10}"#;
        let stats: CustomerStats = serde_json::from_str(body).unwrap();
        assert_eq!(stats.completed_flow, 100.0);
        assert_eq!(stats.pending_flow, 50.0);
        assert_eq!(stats.total_flow, 150.0);
        assert_eq!(stats.daily_flow, 10.0);
    }
}
