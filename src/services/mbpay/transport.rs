use std::collections::BTreeMap;
use std::sync::Arc;

use async_trait::async_trait;
use reqwest::{Client, Method, StatusCode};

use crate::config::MbpayConfig;
use crate::crypto_utils::RequestSigner;
use crate::error::{MbpayError, MbpayResult};
use crate::models::ApiResponse;

/// Performs one signed call and decodes the response envelope.
///
/// Implementations report network, status and decoding failures as errors and
/// hand back the envelope untouched otherwise; interpreting `code` is left to
/// the caller.
#[async_trait]
pub trait Transport: Send + Sync {
    async fn do_request(
        &self,
        method: Method,
        path: &str,
        params: BTreeMap<String, String>,
    ) -> MbpayResult<ApiResponse>;
}

#[async_trait]
impl<T: Transport + ?Sized> Transport for Arc<T> {
    async fn do_request(
        &self,
        method: Method,
        path: &str,
        params: BTreeMap<String, String>,
    ) -> MbpayResult<ApiResponse> {
        (**self).do_request(method, path, params).await
    }
}

#[derive(Clone)]
pub struct HttpTransport {
    http_client: Client,
    base_url: String,
    signer: RequestSigner,
}

impl HttpTransport {
    pub fn new(config: &MbpayConfig) -> MbpayResult<Self> {
        let http_client = Client::builder().timeout(config.timeout()).build()?;

        Ok(Self {
            http_client,
            base_url: config.normalized_base_url().to_string(),
            signer: RequestSigner::new(&config.app_id, &config.app_secret),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    async fn handle_response(
        &self,
        path: &str,
        response: reqwest::Response,
    ) -> MbpayResult<ApiResponse> {
        let status = response.status();
        let body = response.text().await?;

        if status != StatusCode::OK {
            tracing::error!("MBPay HTTP error on {}: {} - {}", path, status, body);
            return Err(MbpayError::HttpStatus(status.as_u16()));
        }

        serde_json::from_str(&body).map_err(|e| {
            tracing::error!("Failed to parse MBPay response: {} - Body: {}", e, body);
            MbpayError::Serialization(e)
        })
    }
}

#[async_trait]
impl Transport for HttpTransport {
    async fn do_request(
        &self,
        method: Method,
        path: &str,
        params: BTreeMap<String, String>,
    ) -> MbpayResult<ApiResponse> {
        let url = format!("{}{}", self.base_url, path);
        let params = self
            .signer
            .sign_request(params, chrono::Utc::now().timestamp());

        tracing::debug!(method = %method, path, "Sending MBPay request");

        let request = if method == Method::GET {
            self.http_client.get(&url).query(&params)
        } else {
            self.http_client.request(method, &url).form(&params)
        };

        let response = request.send().await.map_err(|e| {
            tracing::error!("MBPay request to {} failed: {}", path, e);
            MbpayError::HttpClient(e)
        })?;

        self.handle_response(path, response).await
    }
}
