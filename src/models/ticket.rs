use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// The customer snapshot embedded in tickets and messages.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TicketParty {
    #[serde(rename = "_id", default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Ticket {
    #[serde(rename = "_id")]
    pub id: String,
    pub subject: String,
    #[serde(default)]
    pub description: Option<String>,
    pub status: String,
    #[serde(default)]
    pub priority: Option<String>,
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default)]
    pub customer: Option<TicketParty>,
    #[serde(default)]
    pub last_updated: Option<DateTime<Utc>>,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
}

/// One chat entry on a ticket.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TicketMessage {
    #[serde(rename = "_id", default)]
    pub id: Option<String>,
    pub content: String,
    #[serde(default)]
    pub is_internal: bool,
    #[serde(default)]
    pub sender: Option<TicketParty>,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
}

/// Payload for opening a ticket.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NewTicket {
    pub subject: String,
    pub description: String,
    pub priority: String,
    pub category: String,
}

impl NewTicket {
    /// A ticket with the defaults the portal's create form starts from.
    pub fn new(subject: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            subject: subject.into(),
            description: description.into(),
            priority: "medium".to_string(),
            category: "technical".to_string(),
        }
    }
}

/// Query parameters for the ticket listing.
#[derive(Debug, Clone, Default)]
pub struct TicketListQuery {
    pub status: Option<String>,
    pub page: Option<u32>,
    pub limit: Option<u32>,
}

impl TicketListQuery {
    pub fn with_status(status: impl Into<String>) -> Self {
        Self {
            status: Some(status.into()),
            ..Self::default()
        }
    }

    pub fn to_query(&self) -> Vec<(String, String)> {
        let mut pairs = Vec::new();
        if let Some(status) = &self.status {
            pairs.push(("status".to_string(), status.clone()));
        }
        if let Some(page) = self.page {
            pairs.push(("page".to_string(), page.to_string()));
        }
        if let Some(limit) = self.limit {
            pairs.push(("limit".to_string(), limit.to_string()));
        }
        pairs
    }
}
