use std::sync::Arc;

use log::debug;
use serde_json::json;

use crate::api_clients::portal_client::PortalClient;
use crate::api_clients::request::RequestDescriptor;
use crate::error::AppResult;
use crate::models::{NewTicket, Pagination, Ticket, TicketListQuery, TicketMessage};

/// One page of the ticket listing.
#[derive(Debug, Clone)]
pub struct TicketPage {
    pub tickets: Vec<Ticket>,
    pub pagination: Option<Pagination>,
}

/// Support tickets and their chat threads.
#[derive(Debug)]
pub struct TicketService {
    client: Arc<PortalClient>,
}

impl TicketService {
    pub fn new(client: Arc<PortalClient>) -> Self {
        Self { client }
    }

    pub async fn list(&self, query: &TicketListQuery) -> AppResult<TicketPage> {
        debug!("Listing tickets: {:?}", query);
        let descriptor = RequestDescriptor::get("/tickets").queries(query.to_query());
        let envelope = self.client.request(descriptor).await?;

        Ok(TicketPage {
            tickets: envelope.field("tickets")?,
            pagination: envelope.pagination()?,
        })
    }

    pub async fn get(&self, ticket_id: &str) -> AppResult<Ticket> {
        let envelope = self
            .client
            .get(&format!("/tickets/{}", ticket_id), &[])
            .await?;
        envelope.field("ticket")
    }

    pub async fn create(&self, ticket: &NewTicket) -> AppResult<Ticket> {
        debug!("Creating ticket: {}", ticket.subject);
        let envelope = self
            .client
            .post("/tickets", Some(serde_json::to_value(ticket)?))
            .await?;
        envelope.field("ticket")
    }

    /// Chat history, newest page first the way the backend returns it.
    pub async fn messages(
        &self,
        ticket_id: &str,
        page: u32,
        limit: u32,
    ) -> AppResult<Vec<TicketMessage>> {
        let envelope = self
            .client
            .get(
                &format!("/tickets/{}/messages", ticket_id),
                &[("page", &page.to_string()), ("limit", &limit.to_string())],
            )
            .await?;
        envelope.field("messages")
    }

    pub async fn send_message(
        &self,
        ticket_id: &str,
        content: &str,
        is_internal: bool,
    ) -> AppResult<TicketMessage> {
        let envelope = self
            .client
            .post(
                &format!("/tickets/{}/messages", ticket_id),
                Some(json!({"content": content, "isInternal": is_internal})),
            )
            .await?;
        envelope.field("message")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::auth::session_storage::MemoryStorage;
    use crate::auth::{Session, SessionManager, UserProfile};
    use crate::config::RuntimeConfig;
    use pretty_assertions::assert_eq;

    async fn service_for(server_url: &str) -> TicketService {
        let config = RuntimeConfig::with_server_url(server_url);
        let sessions = Arc::new(SessionManager::new(Arc::new(MemoryStorage::default())));
        sessions
            .set(Session::new(
                "tok",
                UserProfile {
                    id: "c1".to_string(),
                    name: "Customer".to_string(),
                    email: "c@example.com".to_string(),
                    role: "customer".to_string(),
                    permissions: vec![],
                    address: None,
                    phone: None,
                    status: None,
                },
            ))
            .await;
        let client = Arc::new(PortalClient::new(&config, sessions).unwrap());
        TicketService::new(client)
    }

    #[tokio::test]
    async fn test_list_open_tickets() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("GET", "/tickets?status=open")
            .with_status(200)
            .with_body(
                r#"{
                    "status": "success",
                    "data": {
                        "tickets": [{"_id": "t1", "subject": "Login loop", "status": "open"}],
                        "pagination": {"total": 1, "pages": 1}
                    }
                }"#,
            )
            .create_async()
            .await;

        let tickets = service_for(&server.url()).await;
        let page = tickets
            .list(&TicketListQuery::with_status("open"))
            .await
            .unwrap();

        assert_eq!(page.tickets.len(), 1);
        assert_eq!(page.tickets[0].subject, "Login loop");
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn test_send_message_round_trip() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("POST", "/tickets/t1/messages")
            .match_body(mockito::Matcher::Json(
                json!({"content": "On it", "isInternal": false}),
            ))
            .with_status(201)
            .with_body(
                r#"{
                    "status": "success",
                    "data": {
                        "message": {"_id": "m1", "content": "On it", "isInternal": false}
                    }
                }"#,
            )
            .create_async()
            .await;

        let tickets = service_for(&server.url()).await;
        let message = tickets.send_message("t1", "On it", false).await.unwrap();

        assert_eq!(message.content, "On it");
        assert!(!message.is_internal);
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn test_messages_pass_pagination() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("GET", "/tickets/t1/messages?page=1&limit=50")
            .with_status(200)
            .with_body(r#"{"status": "success", "data": {"messages": []}}"#)
            .create_async()
            .await;

        let tickets = service_for(&server.url()).await;
        let messages = tickets.messages("t1", 1, 50).await.unwrap();
        assert!(messages.is_empty());
        mock.assert_async().await;
    }
}
