use std::collections::BTreeMap;

use validator::Validate;

use super::client::MbpayClient;
use super::transport::Transport;
use crate::error::MbpayResult;
use crate::models::{Balance, PayRequest, PayResponse};

pub const BALANCE_PATH: &str = "/merchant/balance";
pub const PAY_PATH: &str = "/merchant/pay";

impl<T: Transport> MbpayClient<T> {
    pub async fn get_balance(&self) -> MbpayResult<Balance> {
        self.call(BALANCE_PATH, BTreeMap::new()).await
    }

    /// Pays `amount` MB from the merchant balance to a user address.
    pub async fn pay(&self, request: &PayRequest) -> MbpayResult<PayResponse> {
        request.validate()?;

        let response: PayResponse = self.call(PAY_PATH, request.to_params()).await?;
        tracing::info!(
            order_no = %request.order_no,
            platform_order_no = %response.platform_order_no,
            actual_amount = response.actual_amount,
            "MBPay payout accepted"
        );

        Ok(response)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::crypto_utils::RequestSigner;
    use crate::error::codes;
    use crate::services::mbpay::FakeTransport;
    use serde_json::json;

    fn client(response: serde_json::Value) -> MbpayClient<FakeTransport> {
        MbpayClient::with_transport(
            FakeTransport::new(response),
            RequestSigner::new("app_1", "secret"),
        )
    }

    #[tokio::test]
    async fn test_get_balance() {
        let client = client(json!({
            "code": 0,
            "data": { "balance": 12000.0, "frozen": 300 }
        }));

        let balance = client.get_balance().await.unwrap();
        assert_eq!(balance, Balance { balance: 12000, frozen: 300 });

        let (_, path, params) = &client.transport().calls()[0];
        assert_eq!(path, BALANCE_PATH);
        assert!(params.is_empty());
    }

    #[tokio::test]
    async fn test_pay() {
        let client = client(json!({
            "code": 0,
            "data": {
                "platform_order_no": "P-1",
                "actual_amount": 250,
                "fee": 2,
                "balance": 9748
            }
        }));

        let request = PayRequest {
            address: "TUser".to_string(),
            order_no: "PAY-1".to_string(),
            amount: 250,
            remark: Some("weekly payout".to_string()),
        };

        let resp = client.pay(&request).await.unwrap();
        assert_eq!(resp.platform_order_no, "P-1");
        assert_eq!(resp.balance, 9748);

        let (_, path, params) = &client.transport().calls()[0];
        assert_eq!(path, PAY_PATH);
        assert_eq!(params["remark"], "weekly payout");
    }

    #[tokio::test]
    async fn test_pay_insufficient_balance() {
        let client = client(json!({ "code": 12010, "message": "insufficient balance" }));

        let request = PayRequest {
            address: "TUser".to_string(),
            order_no: "PAY-2".to_string(),
            amount: 1_000_000,
            remark: None,
        };

        let err = client.pay(&request).await.unwrap_err();
        assert_eq!(err.code(), Some(codes::INSUFFICIENT_BALANCE));
    }

    #[tokio::test]
    async fn test_pay_rejects_missing_address() {
        let client = client(json!({ "code": 0 }));
        let request = PayRequest {
            address: String::new(),
            order_no: "PAY-3".to_string(),
            amount: 1,
            remark: None,
        };

        let err = client.pay(&request).await.unwrap_err();
        assert!(err.to_string().contains("address is required"));
        assert!(client.transport().calls().is_empty());
    }
}
