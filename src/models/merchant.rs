use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use validator::Validate;

use super::fields::{DataReader, FromData};
use crate::error::MbpayResult;

/// Merchant balance, in MB.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct Balance {
    pub balance: i64,
    pub frozen: i64,
}

impl FromData for Balance {
    fn from_data(reader: &DataReader<'_>) -> MbpayResult<Self> {
        Ok(Self {
            balance: reader.optional("balance"),
            frozen: reader.optional("frozen"),
        })
    }
}

/// Payout from the merchant balance to a user address.
#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct PayRequest {
    #[validate(length(min = 1, message = "address is required"))]
    pub address: String,
    #[validate(length(min = 1, message = "order_no is required"))]
    pub order_no: String,
    #[validate(range(min = 1, message = "amount must be greater than 0"))]
    pub amount: i64,
    #[serde(default)]
    pub remark: Option<String>,
}

impl PayRequest {
    pub fn to_params(&self) -> BTreeMap<String, String> {
        let mut params = BTreeMap::from([
            ("address".to_string(), self.address.clone()),
            ("order_no".to_string(), self.order_no.clone()),
            ("amount".to_string(), self.amount.to_string()),
        ]);

        if let Some(remark) = self.remark.as_deref().filter(|r| !r.is_empty()) {
            params.insert("remark".to_string(), remark.to_string());
        }

        params
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct PayResponse {
    pub platform_order_no: String,
    pub actual_amount: i64,
    pub fee: i64,
    /// Merchant balance left after the payout.
    pub balance: i64,
}

impl FromData for PayResponse {
    fn from_data(reader: &DataReader<'_>) -> MbpayResult<Self> {
        Ok(Self {
            platform_order_no: reader.required_non_empty("platform_order_no")?,
            actual_amount: reader.optional("actual_amount"),
            fee: reader.optional("fee"),
            balance: reader.optional("balance"),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::ApiResponse;
    use serde_json::json;

    #[test]
    fn test_pay_params_skip_empty_remark() {
        let mut request = PayRequest {
            address: "TAddr".to_string(),
            order_no: "PAY-1".to_string(),
            amount: 250,
            remark: Some(String::new()),
        };
        assert!(!request.to_params().contains_key("remark"));

        request.remark = Some("refund".to_string());
        assert_eq!(request.to_params()["remark"], "refund");
        assert_eq!(request.to_params()["amount"], "250");
    }

    #[test]
    fn test_pay_validation() {
        let request = PayRequest {
            address: String::new(),
            order_no: "PAY-1".to_string(),
            amount: 250,
            remark: None,
        };
        let errors = request.validate().unwrap_err();
        assert!(errors.field_errors().contains_key("address"));
    }

    #[test]
    fn test_balance_defaults_to_zero() {
        let resp: ApiResponse =
            serde_json::from_value(json!({ "code": 0, "data": { "balance": 88.0 } })).unwrap();
        let balance: Balance = resp.parse().unwrap();
        assert_eq!(balance, Balance { balance: 88, frozen: 0 });
    }

    #[test]
    fn test_pay_response_requires_platform_order_no() {
        let resp: ApiResponse =
            serde_json::from_value(json!({ "code": 0, "data": { "fee": 1 } })).unwrap();
        let err = resp.parse::<PayResponse>().unwrap_err();
        assert_eq!(err.to_string(), "invalid platform_order_no format in response");
    }
}
