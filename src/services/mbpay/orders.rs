use validator::Validate;

use super::client::MbpayClient;
use super::transport::Transport;
use crate::error::MbpayResult;
use crate::models::{OrderInfo, OrderQuery, PayOrderInfo, PaymentOrderRequest, PaymentOrderResponse};

pub const GENERATE_PAY_LINK_PATH: &str = "/merchant/generatepaylink";
pub const ORDER_INFO_PATH: &str = "/merchant/orderinfo";
pub const PAY_ORDER_INFO_PATH: &str = "/merchant/payorderinfo";

impl<T: Transport> MbpayClient<T> {
    /// Creates a payment order and returns the checkout page link.
    pub async fn create_payment_order(
        &self,
        request: &PaymentOrderRequest,
    ) -> MbpayResult<PaymentOrderResponse> {
        request.validate()?;
        self.call(GENERATE_PAY_LINK_PATH, request.to_params()).await
    }

    pub async fn get_order_info(&self, order_no: &str, merchant_id: i64) -> MbpayResult<OrderInfo> {
        let query = OrderQuery::new(order_no, merchant_id);
        query.validate()?;
        self.call(ORDER_INFO_PATH, query.to_params()).await
    }

    pub async fn get_pay_order_info(
        &self,
        order_no: &str,
        merchant_id: i64,
    ) -> MbpayResult<PayOrderInfo> {
        let query = OrderQuery::new(order_no, merchant_id);
        query.validate()?;
        self.call(PAY_ORDER_INFO_PATH, query.to_params()).await
    }
}
