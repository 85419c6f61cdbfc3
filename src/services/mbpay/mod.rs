mod client;
mod merchant;
mod orders;
mod payment_link;
mod transport;

pub use client::MbpayClient;
pub use merchant::{BALANCE_PATH, PAY_PATH};
pub use orders::{GENERATE_PAY_LINK_PATH, ORDER_INFO_PATH, PAY_ORDER_INFO_PATH};
pub use payment_link::{parse_payment_link, PAYMENT_LINK_PREFIX};
pub use transport::{HttpTransport, Transport};

use std::sync::Arc;

pub type SharedMbpayClient = Arc<MbpayClient>;

#[cfg(test)]
pub(crate) use transport::fake::FakeTransport;
