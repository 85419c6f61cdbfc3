use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use validator::Validate;

/// Input for an offline `mbpay://payorder` link, usually rendered as a QR code.
#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct PaymentLinkRequest {
    #[validate(length(min = 1, message = "order_no is required"))]
    pub order_no: String,
    #[validate(length(min = 1, message = "subject is required"))]
    pub subject: String,
    #[validate(range(min = 1, message = "amount must be greater than 0"))]
    pub amount: i64,
    /// Minutes until the link expires.
    #[validate(range(min = 1, message = "expire must be greater than 0"))]
    pub expire: i64,
    /// Generated when absent or empty.
    #[serde(default)]
    pub nonce: Option<String>,
    #[serde(default)]
    pub notify_url: Option<String>,
}

/// JSON document embedded, base64 encoded, in the payment link.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PaymentLinkPayload {
    pub app_id: String,
    /// Unix seconds.
    pub expire: i64,
    pub nonce: String,
    pub order_no: String,
    pub amount: i64,
    pub subject: String,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub notify_url: Option<String>,
    #[serde(default)]
    pub sign: String,
}

impl PaymentLinkPayload {
    /// Every field except `sign`, stringified for signing.
    pub fn signing_params(&self) -> BTreeMap<String, String> {
        let mut params = BTreeMap::from([
            ("app_id".to_string(), self.app_id.clone()),
            ("expire".to_string(), self.expire.to_string()),
            ("nonce".to_string(), self.nonce.clone()),
            ("order_no".to_string(), self.order_no.clone()),
            ("amount".to_string(), self.amount.to_string()),
            ("subject".to_string(), self.subject.clone()),
        ]);

        if let Some(notify_url) = &self.notify_url {
            params.insert("notify_url".to_string(), notify_url.clone());
        }

        params
    }
}
