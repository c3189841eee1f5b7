use std::sync::Arc;

use log::debug;

use crate::api_clients::portal_client::PortalClient;
use crate::api_clients::request::RequestDescriptor;
use crate::error::AppResult;
use crate::models::{Invoice, InvoiceListQuery, NewInvoice, Pagination};

/// One page of the invoice listing.
#[derive(Debug, Clone)]
pub struct InvoicePage {
    pub invoices: Vec<Invoice>,
    pub pagination: Option<Pagination>,
}

/// Invoice reads and creation.
#[derive(Debug)]
pub struct InvoiceService {
    client: Arc<PortalClient>,
}

impl InvoiceService {
    pub fn new(client: Arc<PortalClient>) -> Self {
        Self { client }
    }

    pub async fn list(&self, query: &InvoiceListQuery) -> AppResult<InvoicePage> {
        debug!("Listing invoices: {:?}", query);
        let descriptor = RequestDescriptor::get("/invoices").queries(query.to_query());
        let envelope = self.client.request(descriptor).await?;

        Ok(InvoicePage {
            invoices: envelope.field("invoices")?,
            pagination: envelope.pagination()?,
        })
    }

    pub async fn get(&self, invoice_id: &str) -> AppResult<Invoice> {
        let envelope = self
            .client
            .get(&format!("/invoices/{}", invoice_id), &[])
            .await?;
        envelope.field("invoice")
    }

    pub async fn create(&self, invoice: &NewInvoice) -> AppResult<Invoice> {
        debug!("Creating invoice for customer {}", invoice.customer_id);
        let envelope = self
            .client
            .post("/invoices", Some(serde_json::to_value(invoice)?))
            .await?;
        envelope.field("invoice")
    }
}
