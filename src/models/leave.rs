use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::models::attendance::AttendanceUser;

/// A leave application. Dates stay in the `YYYY-MM-DD` form the portal
/// submits them in.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LeaveRequest {
    #[serde(rename = "_id")]
    pub id: String,
    pub start_date: String,
    pub end_date: String,
    pub reason: String,
    pub status: String,
    #[serde(default)]
    pub user: Option<AttendanceUser>,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
}

/// Payload for applying for leave.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NewLeave {
    pub start_date: String,
    pub end_date: String,
    pub reason: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_leave_round_trips_status() {
        let body = r#"{
            "_id": "l1",
            "startDate": "2024-05-01",
            "endDate": "2024-05-03",
            "reason": "Family event",
            "status": "pending"
        }"#;
        let leave: LeaveRequest = serde_json::from_str(body).unwrap();
        assert_eq!(leave.status, "pending");
        assert_eq!(leave.start_date, "2024-05-01");
    }

    #[test]
    fn test_new_leave_serializes_camel_case() {
        let leave = NewLeave {
            start_date: "2024-05-01".to_string(),
            end_date: "2024-05-03".to_string(),
            reason: "Family event".to_string(),
        };
        let json = serde_json::to_value(&leave).unwrap();
        assert_eq!(json["startDate"], "2024-05-01");
        assert_eq!(json["endDate"], "2024-05-03");
    }
}
