use std::sync::Arc;

use log::debug;
use serde_json::json;

use crate::api_clients::portal_client::PortalClient;
use crate::error::AppResult;
use crate::models::{AttendanceRecord, AttendanceReport};

/// Attendance tracking: the user's own records plus the admin record and
/// report endpoints.
#[derive(Debug)]
pub struct AttendanceService {
    client: Arc<PortalClient>,
}

impl AttendanceService {
    pub fn new(client: Arc<PortalClient>) -> Self {
        Self { client }
    }

    /// The calling user's own attendance history.
    pub async fn my_records(&self) -> AppResult<Vec<AttendanceRecord>> {
        let envelope = self.client.get("/user/attendance", &[]).await?;
        envelope.field("records")
    }

    /// Record today's attendance for the calling user.
    pub async fn check_in(&self, status: &str) -> AppResult<AttendanceRecord> {
        debug!("Recording attendance: {}", status);
        let envelope = self
            .client
            .post("/user/attendance", Some(json!({"status": status})))
            .await?;
        envelope.field("record")
    }

    /// Every user's records (admin).
    pub async fn all_records(&self) -> AppResult<Vec<AttendanceRecord>> {
        let envelope = self.client.get("/admin/record/allusers", &[]).await?;
        envelope.field("records")
    }

    /// Overwrite a user's attendance status (admin).
    pub async fn update(&self, user_id: &str, status: &str) -> AppResult<Option<String>> {
        debug!("Updating attendance for {}: {}", user_id, status);
        let envelope = self
            .client
            .put(
                &format!("/admin/updateAttendance/{}", user_id),
                Some(json!({"status": status})),
            )
            .await?;
        Ok(envelope.message)
    }

    /// Remove one attendance entry (admin).
    pub async fn delete(&self, user_id: &str, attendance_id: &str) -> AppResult<Option<String>> {
        let envelope = self
            .client
            .delete(&format!(
                "/admin/deleteAttendance/{}/{}",
                user_id, attendance_id
            ))
            .await?;
        Ok(envelope.message)
    }

    /// Aggregated report for one user (admin).
    pub async fn user_report(&self, user_id: &str) -> AppResult<AttendanceReport> {
        let envelope = self
            .client
            .get(&format!("/admin/record/report/users/{}", user_id), &[])
            .await?;
        envelope.field("report")
    }

    /// Aggregated report across all users (admin).
    pub async fn full_report(&self) -> AppResult<Vec<AttendanceReport>> {
        let envelope = self.client.get("/admin/record/report/allusers", &[]).await?;
        envelope.field("report")
    }
}
