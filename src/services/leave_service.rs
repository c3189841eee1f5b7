use std::sync::Arc;

use log::debug;
use serde_json::json;

use crate::api_clients::portal_client::PortalClient;
use crate::error::AppResult;
use crate::models::{LeaveRequest, NewLeave};

/// Leave applications: the user's own, and the admin review queue.
#[derive(Debug)]
pub struct LeaveService {
    client: Arc<PortalClient>,
}

impl LeaveService {
    pub fn new(client: Arc<PortalClient>) -> Self {
        Self { client }
    }

    pub async fn my_leaves(&self) -> AppResult<Vec<LeaveRequest>> {
        let envelope = self.client.get("/user/leaves", &[]).await?;
        envelope.field("leaves")
    }

    pub async fn apply(&self, leave: &NewLeave) -> AppResult<LeaveRequest> {
        debug!("Applying for leave {} to {}", leave.start_date, leave.end_date);
        let envelope = self
            .client
            .post("/user/leave-user", Some(serde_json::to_value(leave)?))
            .await?;
        envelope.field("leave")
    }

    /// Every pending and processed application (admin).
    pub async fn all(&self) -> AppResult<Vec<LeaveRequest>> {
        let envelope = self.client.get("/admin/leaves/users", &[]).await?;
        envelope.field("leaves")
    }

    /// Approve or reject an application (admin).
    pub async fn update(&self, leave_id: &str, status: &str) -> AppResult<Option<String>> {
        debug!("Updating leave {}: {}", leave_id, status);
        let envelope = self
            .client
            .put(
                &format!("/admin/leaves/users/{}", leave_id),
                Some(json!({"status": status})),
            )
            .await?;
        Ok(envelope.message)
    }
}
