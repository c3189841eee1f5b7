use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::constants::{DEFAULT_PAGE_LIMIT, DEFAULT_SORT};
use crate::models::ticket::TicketParty;

/// One line on an invoice. `total` is the line total the form computed:
/// quantity * unitPrice plus tax.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InvoiceItem {
    pub description: String,
    pub quantity: f64,
    pub unit_price: f64,
    #[serde(default)]
    pub tax: f64,
    pub total: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Invoice {
    #[serde(rename = "_id")]
    pub id: String,
    #[serde(default)]
    pub invoice_number: Option<String>,
    pub status: String,
    #[serde(default)]
    pub customer: Option<TicketParty>,
    #[serde(default)]
    pub items: Vec<InvoiceItem>,
    #[serde(default)]
    pub subtotal: Option<f64>,
    #[serde(default)]
    pub tax_total: Option<f64>,
    #[serde(default)]
    pub total: Option<f64>,
    #[serde(default)]
    pub payment_terms: Option<String>,
    #[serde(default)]
    pub notes: Option<String>,
    #[serde(default)]
    pub due_date: Option<String>,
    #[serde(default)]
    pub created_by: Option<TicketParty>,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub updated_at: Option<DateTime<Utc>>,
}

/// Payload for creating an invoice.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NewInvoice {
    pub customer_id: String,
    pub items: Vec<InvoiceItem>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub due_date: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

/// Query parameters for the invoice listing. Dates are passed through as the
/// caller's `YYYY-MM-DD` form values.
#[derive(Debug, Clone)]
pub struct InvoiceListQuery {
    pub start_date: Option<String>,
    pub end_date: Option<String>,
    pub sort: String,
    pub page: u32,
    pub limit: u32,
}

impl Default for InvoiceListQuery {
    fn default() -> Self {
        Self {
            start_date: None,
            end_date: None,
            sort: DEFAULT_SORT.to_string(),
            page: 1,
            limit: DEFAULT_PAGE_LIMIT,
        }
    }
}

impl InvoiceListQuery {
    pub fn to_query(&self) -> Vec<(String, String)> {
        let mut pairs = Vec::new();
        if let Some(start) = &self.start_date {
            pairs.push(("startDate".to_string(), start.clone()));
        }
        if let Some(end) = &self.end_date {
            pairs.push(("endDate".to_string(), end.clone()));
        }
        pairs.push(("sort".to_string(), self.sort.clone()));
        pairs.push(("page".to_string(), self.page.to_string()));
        pairs.push(("limit".to_string(), self.limit.to_string()));
        pairs
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invoice_deserializes_full_shape() {
        let body = r#"{
            "_id": "inv9",
            "invoiceNumber": "INV-2024-009",
            "status": "pending",
            "customer": {"name": "Dana", "email": "dana@example.com"},
            "items": [
                {"description": "Tuition", "quantity": 1, "unitPrice": 1200.0, "tax": 0.1, "total": 1320.0}
            ],
            "subtotal": 1200.0,
            "taxTotal": 120.0,
            "total": 1320.0,
            "dueDate": "2024-04-01",
            "createdAt": "2024-03-01T08:30:00Z"
        }"#;

        let invoice: Invoice = serde_json::from_str(body).unwrap();
        assert_eq!(invoice.invoice_number.as_deref(), Some("INV-2024-009"));
        assert_eq!(invoice.items.len(), 1);
        assert_eq!(invoice.total, Some(1320.0));
    }

    #[test]
    fn test_invoice_query_includes_date_range() {
        let query = InvoiceListQuery {
            start_date: Some("2024-01-01".to_string()),
            end_date: Some("2024-01-31".to_string()),
            ..InvoiceListQuery::default()
        };
        let pairs = query.to_query();
        assert_eq!(pairs[0], ("startDate".to_string(), "2024-01-01".to_string()));
        assert_eq!(pairs[1], ("endDate".to_string(), "2024-01-31".to_string()));
    }

    #[test]
    fn test_new_invoice_omits_empty_optionals() {
        let invoice = NewInvoice {
            customer_id: "cust1".to_string(),
            items: vec![],
            due_date: None,
            notes: None,
        };
        let json = serde_json::to_value(&invoice).unwrap();
        assert!(json.get("dueDate").is_none());
        assert!(json.get("notes").is_none());
        assert_eq!(json["customerId"], "cust1");
    }
}
