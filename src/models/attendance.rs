use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One attendance entry. Admin listings carry the owning user; the user's own
/// listing omits it.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AttendanceRecord {
    #[serde(rename = "_id")]
    pub id: String,
    pub status: String,
    #[serde(default)]
    pub date: Option<DateTime<Utc>>,
    #[serde(default)]
    pub user: Option<AttendanceUser>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AttendanceUser {
    #[serde(rename = "_id", default)]
    pub id: Option<String>,
    #[serde(default)]
    pub name: Option<String>,
}

/// Aggregated attendance counters for one user (or one row of the full
/// report).
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AttendanceReport {
    #[serde(default)]
    pub user_id: Option<String>,
    #[serde(default)]
    pub user_name: Option<String>,
    pub total_days: u32,
    pub present: u32,
    pub absent: u32,
    pub percentage: f64,
}
