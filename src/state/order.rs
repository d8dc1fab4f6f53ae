//! Order Form Handling
//!
//! Turns the flat order form into the record posted to `/api/add` and
//! decides what the user sees once the backend answers.

use std::collections::BTreeMap;

use crate::api::dto::{AddOrderResponse, NewOrder};
use crate::error::ClientError;

/// Alert shown when the order was stored
pub const ORDER_ADDED_ALERT: &str = "✅ Order added successfully!";

/// Alert shown when the order was not stored
pub const ORDER_FAILED_ALERT: &str = "❌ Failed to add order.";

/// Unit preselected in the form
pub const DEFAULT_UNIT: &str = "Kg";

/// Parse a number the way a browser's `parseFloat` does
///
/// Leading whitespace is skipped and the longest numeric prefix is used,
/// so `"2kg"` is `2`. Returns `None` when there is no numeric prefix or the
/// value is not finite; those serialize as JSON `null`.
pub fn parse_float(input: &str) -> Option<f64> {
    let s = input.trim_start();
    let bytes = s.as_bytes();
    let is_digit = |i: usize| bytes.get(i).is_some_and(u8::is_ascii_digit);

    let mut end = 0;
    if matches!(bytes.first(), Some(b'+' | b'-')) {
        end = 1;
    }

    let int_start = end;
    while is_digit(end) {
        end += 1;
    }
    let mut digits = end - int_start;

    if bytes.get(end) == Some(&b'.') {
        let mut frac_end = end + 1;
        while is_digit(frac_end) {
            frac_end += 1;
        }
        digits += frac_end - (end + 1);
        if digits > 0 {
            end = frac_end;
        }
    }

    if digits == 0 {
        return None;
    }

    if matches!(bytes.get(end), Some(b'e' | b'E')) {
        let mut exp_end = end + 1;
        if matches!(bytes.get(exp_end), Some(b'+' | b'-')) {
            exp_end += 1;
        }
        let exp_digits = exp_end;
        while is_digit(exp_end) {
            exp_end += 1;
        }
        if exp_end > exp_digits {
            end = exp_end;
        }
    }

    s[..end].parse::<f64>().ok().filter(|v| v.is_finite())
}

/// Today's date in the format the order form uses
pub fn today() -> String {
    chrono::Local::now().format("%Y-%m-%d").to_string()
}

/// Raw key/value entries read from the order form
#[derive(Clone, Debug, Default)]
pub struct OrderForm {
    entries: Vec<(String, String)>,
}

impl OrderForm {
    pub fn from_entries<I, K, V>(entries: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        Self {
            entries: entries
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }

    /// Build the record to submit
    ///
    /// Later entries with the same name win. `quantity` and `unit_price`
    /// are coerced to numbers; every other field stays a string.
    pub fn into_order(self) -> NewOrder {
        let mut fields: BTreeMap<String, String> = self.entries.into_iter().collect();

        let vendor_name = fields.remove("vendor_name");
        let quantity = fields.remove("quantity").as_deref().and_then(parse_float);
        let unit_price = fields.remove("unit_price").as_deref().and_then(parse_float);

        NewOrder {
            vendor_name,
            quantity,
            unit_price,
            fields,
        }
    }
}

/// What happened to a submitted order
#[derive(Clone, Debug, PartialEq)]
pub enum OrderOutcome {
    Added { order_id: Option<u64> },
    Rejected { reason: Option<String> },
}

impl OrderOutcome {
    pub fn from_result(result: Result<AddOrderResponse, ClientError>) -> Self {
        match result {
            Ok(response) if response.success => OrderOutcome::Added {
                order_id: response.order_id,
            },
            Ok(response) => OrderOutcome::Rejected {
                reason: response.error,
            },
            Err(e) => OrderOutcome::Rejected {
                reason: Some(e.to_string()),
            },
        }
    }

    /// Text for the browser alert
    pub fn alert_text(&self) -> String {
        match self {
            OrderOutcome::Added { .. } => ORDER_ADDED_ALERT.to_string(),
            OrderOutcome::Rejected { reason: Some(reason) } => {
                format!("{}\n{}", ORDER_FAILED_ALERT, reason)
            }
            OrderOutcome::Rejected { reason: None } => ORDER_FAILED_ALERT.to_string(),
        }
    }
}

/// Bot message confirming a stored order
pub fn confirmation_message(vendor_name: Option<&str>) -> String {
    let vendor = vendor_name
        .filter(|v| !v.trim().is_empty())
        .unwrap_or("unknown vendor");
    format!("✅ I've added a new order for **{}**.", vendor)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_float_plain() {
        assert_eq!(parse_float("2"), Some(2.0));
        assert_eq!(parse_float("3.5"), Some(3.5));
        assert_eq!(parse_float("-0.25"), Some(-0.25));
        assert_eq!(parse_float("+4"), Some(4.0));
        assert_eq!(parse_float(".5"), Some(0.5));
        assert_eq!(parse_float("5."), Some(5.0));
        assert_eq!(parse_float("1e3"), Some(1000.0));
    }

    #[test]
    fn test_parse_float_prefix() {
        assert_eq!(parse_float("  12kg"), Some(12.0));
        assert_eq!(parse_float("3.5.1"), Some(3.5));
        assert_eq!(parse_float("7e"), Some(7.0));
        assert_eq!(parse_float("7e+"), Some(7.0));
    }

    #[test]
    fn test_parse_float_invalid() {
        assert_eq!(parse_float(""), None);
        assert_eq!(parse_float("abc"), None);
        assert_eq!(parse_float("."), None);
        assert_eq!(parse_float("-"), None);
        assert_eq!(parse_float("1e999"), None);
    }

    #[test]
    fn test_form_coerces_numbers() {
        let order = OrderForm::from_entries([
            ("vendor_name", "ABC Textiles"),
            ("item_name", "Cotton Yarn"),
            ("quantity", "2"),
            ("unit", "Kg"),
            ("unit_price", "3.5"),
        ])
        .into_order();

        let body = serde_json::to_value(&order).unwrap();
        assert_eq!(body["quantity"].as_f64(), Some(2.0));
        assert_eq!(body["unit_price"].as_f64(), Some(3.5));
        assert!(body["quantity"].is_number());
        assert_eq!(body["vendor_name"], "ABC Textiles");
        assert_eq!(body["item_name"], "Cotton Yarn");
        assert_eq!(body["unit"], "Kg");
    }

    #[test]
    fn test_form_unparseable_numbers_are_null() {
        let order = OrderForm::from_entries([("vendor_name", "X"), ("quantity", "lots")])
            .into_order();

        let body = serde_json::to_value(&order).unwrap();
        assert!(body["quantity"].is_null());
        assert!(body["unit_price"].is_null());
    }

    #[test]
    fn test_form_last_duplicate_wins() {
        let order = OrderForm::from_entries([("unit", "Kg"), ("unit", "Metre")]).into_order();
        assert_eq!(order.fields.get("unit").map(String::as_str), Some("Metre"));
        assert!(order.vendor_name.is_none());
    }

    #[test]
    fn test_outcome_success() {
        let outcome = OrderOutcome::from_result(Ok(AddOrderResponse {
            success: true,
            order_id: Some(51),
            error: None,
        }));
        assert_eq!(outcome, OrderOutcome::Added { order_id: Some(51) });
        assert_eq!(outcome.alert_text(), ORDER_ADDED_ALERT);
    }

    #[test]
    fn test_outcome_absent_success_is_rejected() {
        let outcome = OrderOutcome::from_result(Ok(AddOrderResponse::default()));
        assert_eq!(outcome, OrderOutcome::Rejected { reason: None });
        assert_eq!(outcome.alert_text(), ORDER_FAILED_ALERT);
    }

    #[test]
    fn test_outcome_transport_failure_is_rejected() {
        let outcome =
            OrderOutcome::from_result(Err(ClientError::Network("connection refused".into())));
        assert_eq!(
            outcome.alert_text(),
            "❌ Failed to add order.\nNetwork error: connection refused"
        );
    }

    #[test]
    fn test_confirmation_mentions_vendor() {
        assert_eq!(
            confirmation_message(Some("Lakshmi Fabrics")),
            "✅ I've added a new order for **Lakshmi Fabrics**."
        );
        assert!(confirmation_message(None).contains("unknown vendor"));
    }

    #[test]
    fn test_today_format() {
        let date = today();
        assert_eq!(date.len(), 10);
        assert!(chrono::NaiveDate::parse_from_str(&date, "%Y-%m-%d").is_ok());
    }
}
