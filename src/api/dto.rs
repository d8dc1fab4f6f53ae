//! Data Transfer Objects
//!
//! Request and response bodies for the assistant API.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

// ============================================
// QUERY DTOs
// ============================================

/// Chat query request
#[derive(Debug, Serialize)]
pub struct QueryRequest<'a> {
    /// User question, already trimmed
    pub query: &'a str,
}

/// Chat query response
#[derive(Debug, Deserialize)]
pub struct QueryResponse {
    /// Bot reply, may contain newlines and `**bold**` markers
    pub answer: String,
}

// ============================================
// ORDER DTOs
// ============================================

/// New order record sent to `/api/add`
///
/// Built from a flat form. `quantity` and `unit_price` are numeric; an
/// unparseable value is sent as `null`. Any other form field is passed
/// through as a string.
#[derive(Debug, Clone, Default, Serialize, PartialEq)]
pub struct NewOrder {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub vendor_name: Option<String>,
    pub quantity: Option<f64>,
    pub unit_price: Option<f64>,
    #[serde(flatten)]
    pub fields: BTreeMap<String, String>,
}

/// Order creation response
#[derive(Debug, Default, Deserialize)]
pub struct AddOrderResponse {
    #[serde(default)]
    pub success: bool,
    #[serde(default)]
    pub order_id: Option<u64>,
    #[serde(default)]
    pub error: Option<String>,
}

// ============================================
// ERROR DTOs
// ============================================

/// Error body returned alongside 4xx/5xx statuses
#[derive(Debug, Deserialize)]
pub struct ApiErrorBody {
    pub error: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_query_request_shape() {
        let body = serde_json::to_value(QueryRequest { query: "orders for ABC" }).unwrap();
        assert_eq!(body, serde_json::json!({ "query": "orders for ABC" }));
    }

    #[test]
    fn test_new_order_flattens_fields() {
        let mut fields = BTreeMap::new();
        fields.insert("item_name".to_string(), "Cotton Yarn".to_string());
        let order = NewOrder {
            vendor_name: Some("ABC Textiles".into()),
            quantity: Some(2.0),
            unit_price: None,
            fields,
        };

        let body = serde_json::to_value(&order).unwrap();
        assert_eq!(body["vendor_name"], "ABC Textiles");
        assert_eq!(body["item_name"], "Cotton Yarn");
        assert_eq!(body["quantity"].as_f64(), Some(2.0));
        assert!(body["unit_price"].is_null());
    }

    #[test]
    fn test_add_order_response_success_absent() {
        let response: AddOrderResponse = serde_json::from_str("{}").unwrap();
        assert!(!response.success);
        assert!(response.order_id.is_none());
    }

    #[test]
    fn test_add_order_response_failure_with_error() {
        let response: AddOrderResponse =
            serde_json::from_str(r#"{"success": false, "error": "Failed to add to database"}"#)
                .unwrap();
        assert!(!response.success);
        assert_eq!(response.error.as_deref(), Some("Failed to add to database"));
    }
}
