pub mod mbpay;

pub use mbpay::{MbpayClient, SharedMbpayClient};
