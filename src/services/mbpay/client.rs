use std::collections::BTreeMap;

use reqwest::Method;

use super::transport::{HttpTransport, Transport};
use crate::config::MbpayConfig;
use crate::crypto_utils::RequestSigner;
use crate::error::{codes, MbpayResult};
use crate::models::{ApiResponse, FromData};

/// Entry point for every MBPay operation.
///
/// Networked calls go through `T`, which defaults to the signed
/// [`HttpTransport`]. The signer is kept alongside for the offline payment link.
pub struct MbpayClient<T = HttpTransport> {
    transport: T,
    signer: RequestSigner,
}

impl MbpayClient<HttpTransport> {
    pub fn new(config: &MbpayConfig) -> MbpayResult<Self> {
        Ok(Self {
            transport: HttpTransport::new(config)?,
            signer: RequestSigner::new(&config.app_id, &config.app_secret),
        })
    }
}

impl<T> MbpayClient<T> {
    pub fn with_transport(transport: T, signer: RequestSigner) -> Self {
        Self { transport, signer }
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    pub fn signer(&self) -> &RequestSigner {
        &self.signer
    }
}

impl<T: Transport> MbpayClient<T> {
    /// POSTs `params` to `path` and coerces a successful response into `R`.
    pub(super) async fn call<R: FromData>(
        &self,
        path: &str,
        params: BTreeMap<String, String>,
    ) -> MbpayResult<R> {
        let response: ApiResponse = self.transport.do_request(Method::POST, path, params).await?;

        if !response.is_success() {
            tracing::warn!(
                path,
                code = response.code,
                kind = codes::describe(response.code).unwrap_or("unknown"),
                "MBPay business error: {}",
                response.message
            );
        }

        response.parse()
    }
}

impl<T> std::fmt::Debug for MbpayClient<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MbpayClient")
            .field("signer", &self.signer)
            .finish_non_exhaustive()
    }
}
