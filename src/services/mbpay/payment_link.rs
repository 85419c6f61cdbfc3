use base64::{engine::general_purpose::STANDARD, Engine};
use validator::Validate;

use super::client::MbpayClient;
use crate::crypto_utils::signature::{generate_nonce, NONCE_LENGTH};
use crate::error::{MbpayError, MbpayResult};
use crate::models::{PaymentLinkPayload, PaymentLinkRequest};

pub const PAYMENT_LINK_PREFIX: &str = "mbpay://payorder?data=";

impl<T> MbpayClient<T> {
    /// Builds a signed `mbpay://payorder` link without contacting the API.
    pub fn generate_payment_link(&self, request: &PaymentLinkRequest) -> MbpayResult<String> {
        self.payment_link_at(request, chrono::Utc::now().timestamp())
    }

    /// Same as [`generate_payment_link`](Self::generate_payment_link) with an explicit
    /// current time in Unix seconds.
    pub fn payment_link_at(&self, request: &PaymentLinkRequest, now: i64) -> MbpayResult<String> {
        request.validate()?;

        let nonce = request
            .nonce
            .clone()
            .filter(|n| !n.is_empty())
            .unwrap_or_else(|| generate_nonce(NONCE_LENGTH));

        let mut payload = PaymentLinkPayload {
            app_id: self.signer().app_id().to_string(),
            expire: now.saturating_add(request.expire.saturating_mul(60)),
            nonce,
            order_no: request.order_no.clone(),
            amount: request.amount,
            subject: request.subject.clone(),
            notify_url: request.notify_url.clone().filter(|u| !u.is_empty()),
            sign: String::new(),
        };
        payload.sign = self.signer().sign(&payload.signing_params());

        let json = serde_json::to_string(&payload)?;
        let encoded = STANDARD.encode(json);

        Ok(format!("{}{}", PAYMENT_LINK_PREFIX, urlencoding::encode(&encoded)))
    }
}

/// Decodes a link produced by [`MbpayClient::generate_payment_link`].
pub fn parse_payment_link(link: &str) -> MbpayResult<PaymentLinkPayload> {
    let data = link
        .strip_prefix(PAYMENT_LINK_PREFIX)
        .ok_or_else(|| MbpayError::Validation("not an mbpay payment link".to_string()))?;

    let encoded = urlencoding::decode(data)
        .map_err(|e| MbpayError::Validation(format!("invalid link encoding: {}", e)))?;
    let json = STANDARD
        .decode(encoded.as_bytes())
        .map_err(|e| MbpayError::Validation(format!("invalid link data: {}", e)))?;

    Ok(serde_json::from_slice(&json)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::crypto_utils::RequestSigner;

    fn client() -> MbpayClient<()> {
        MbpayClient::with_transport((), RequestSigner::new("app_1", "secret"))
    }

    fn request() -> PaymentLinkRequest {
        PaymentLinkRequest {
            order_no: "QR-1".to_string(),
            subject: "Coffee".to_string(),
            amount: 350,
            expire: 15,
            nonce: Some("fixednonce123456".to_string()),
            notify_url: None,
        }
    }

    #[test]
    fn test_payment_link_round_trip() {
        let client = client();
        let link = client.payment_link_at(&request(), 1_700_000_000).unwrap();
        assert!(link.starts_with(PAYMENT_LINK_PREFIX));
        assert!(!link[PAYMENT_LINK_PREFIX.len()..].contains('+'));

        let payload = parse_payment_link(&link).unwrap();
        assert_eq!(payload.app_id, "app_1");
        assert_eq!(payload.expire, 1_700_000_000 + 15 * 60);
        assert_eq!(payload.nonce, "fixednonce123456");
        assert_eq!(payload.amount, 350);
        assert_eq!(payload.notify_url, None);
        assert_eq!(payload.sign, client.signer().sign(&payload.signing_params()));
    }

    #[test]
    fn test_payment_link_signs_notify_url() {
        let client = client();
        let mut req = request();
        req.notify_url = Some("https://shop.example/notify".to_string());

        let payload = parse_payment_link(&client.payment_link_at(&req, 0).unwrap()).unwrap();
        let params = payload.signing_params();
        assert_eq!(params["notify_url"], "https://shop.example/notify");
        assert_eq!(payload.sign, client.signer().sign(&params));
    }

    #[test]
    fn test_payment_link_generates_nonce() {
        let mut req = request();
        req.nonce = None;

        let payload = parse_payment_link(&client().generate_payment_link(&req).unwrap()).unwrap();
        assert_eq!(payload.nonce.len(), NONCE_LENGTH);
    }

    #[test]
    fn test_payment_link_validation() {
        let mut req = request();
        req.expire = 0;
        let err = client().payment_link_at(&req, 0).unwrap_err();
        assert!(err.to_string().contains("expire must be greater than 0"));
    }

    #[test]
    fn test_parse_rejects_foreign_link() {
        assert!(parse_payment_link("https://example.com").is_err());
    }
}
