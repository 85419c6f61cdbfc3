use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use validator::Validate;

use super::fields::{DataReader, FromData};
use crate::error::MbpayResult;

/// Parameters of `/merchant/generatepaylink`.
#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct PaymentOrderRequest {
    #[validate(range(min = 1, message = "merchant_id is required and must be greater than 0"))]
    pub merchant_id: i64,
    #[validate(length(min = 1, message = "order_no is required"))]
    pub order_no: String,
    /// Goods description shown on the checkout page.
    #[validate(length(min = 1, message = "subject is required"))]
    pub subject: String,
    #[validate(range(min = 1, message = "amount must be greater than 0"))]
    pub amount: i64,
    #[validate(length(min = 1, message = "notify_url is required"))]
    pub notify_url: String,
}

impl PaymentOrderRequest {
    pub fn to_params(&self) -> BTreeMap<String, String> {
        BTreeMap::from([
            ("merchant_id".to_string(), self.merchant_id.to_string()),
            ("order_no".to_string(), self.order_no.clone()),
            ("subject".to_string(), self.subject.clone()),
            ("amount".to_string(), self.amount.to_string()),
            ("notify_url".to_string(), self.notify_url.clone()),
        ])
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PaymentOrderResponse {
    /// Checkout page URL.
    pub payment_link: String,
}

impl FromData for PaymentOrderResponse {
    fn from_data(reader: &DataReader<'_>) -> MbpayResult<Self> {
        Ok(Self {
            payment_link: reader.required_non_empty("payment_link")?,
        })
    }
}

/// Lookup key shared by the order and pay-order queries.
#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct OrderQuery {
    #[validate(length(min = 1, message = "order_no is required"))]
    pub order_no: String,
    #[validate(range(min = 1, message = "merchant_id is required and must be greater than 0"))]
    pub merchant_id: i64,
}

impl OrderQuery {
    pub fn new(order_no: impl Into<String>, merchant_id: i64) -> Self {
        Self {
            order_no: order_no.into(),
            merchant_id,
        }
    }

    pub fn to_params(&self) -> BTreeMap<String, String> {
        BTreeMap::from([
            ("order_no".to_string(), self.order_no.clone()),
            ("merchant_id".to_string(), self.merchant_id.to_string()),
        ])
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct OrderInfo {
    pub order_no: String,
    pub platform_order_no: String,
    pub amount: i64,
    pub platform_fee: i64,
    pub status: i32,
    pub status_text: String,
    pub expires_at: String,
    pub created_at: String,
    pub paid_at: String,
}

impl FromData for OrderInfo {
    fn from_data(reader: &DataReader<'_>) -> MbpayResult<Self> {
        Ok(Self {
            order_no: reader.required("order_no")?,
            platform_order_no: reader.optional("platform_order_no"),
            amount: reader.required("amount")?,
            platform_fee: reader.optional("platform_fee"),
            status: reader.required("status")?,
            status_text: reader.optional("status_text"),
            expires_at: reader.optional("expires_at"),
            created_at: reader.optional("created_at"),
            paid_at: reader.optional("paid_at"),
        })
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct PayOrderInfo {
    pub order_no: String,
    pub platform_order_no: String,
    pub amount: i64,
    pub fee: i64,
    pub actual_amount: i64,
    pub status: i32,
    pub status_text: String,
    pub remark: String,
    pub create_at: String,
    pub update_at: String,
    /// Address the payer sent funds from.
    pub pay_address: String,
}

impl FromData for PayOrderInfo {
    fn from_data(reader: &DataReader<'_>) -> MbpayResult<Self> {
        Ok(Self {
            order_no: reader.required("order_no")?,
            platform_order_no: reader.optional("platform_order_no"),
            amount: reader.required("amount")?,
            fee: reader.optional("fee"),
            actual_amount: reader.optional("actual_amount"),
            status: reader.required("status")?,
            status_text: reader.optional("status_text"),
            remark: reader.optional("remark"),
            create_at: reader.optional("create_at"),
            update_at: reader.optional("update_at"),
            pay_address: reader.optional("pay_address"),
        })
    }
}
