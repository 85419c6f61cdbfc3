//! Client library for the MBPay merchant payment API.
//!
//! ```no_run
//! use mbpay::{MbpayClient, MbpayConfig, PaymentOrderRequest};
//!
//! # async fn example() -> mbpay::MbpayResult<()> {
//! let config = MbpayConfig::new("https://www.mbpay.world", "your_app_id", "your_app_secret");
//! let client = MbpayClient::new(&config)?;
//!
//! let order = client
//!     .create_payment_order(&PaymentOrderRequest {
//!         merchant_id: 10001,
//!         order_no: "ORDER-20261014-001".to_string(),
//!         subject: "VIP membership".to_string(),
//!         amount: 1000,
//!         notify_url: "https://shop.example/mbpay/notify".to_string(),
//!     })
//!     .await?;
//! println!("checkout: {}", order.payment_link);
//! # Ok(())
//! # }
//! ```

pub mod config;
pub mod crypto_utils;
pub mod error;
pub mod logging;
pub mod models;
pub mod services;

pub use crate::config::MbpayConfig;
pub use crate::error::{codes, MbpayError, MbpayResult};
pub use crate::models::*;
pub use crate::services::mbpay::{HttpTransport, MbpayClient, Transport};
