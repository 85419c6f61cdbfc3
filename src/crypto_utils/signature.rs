use std::collections::BTreeMap;

use rand::{distributions::Alphanumeric, Rng};
use sha2::{Digest, Sha256};

pub const SIGN_FIELD: &str = "sign";
pub const NONCE_LENGTH: usize = 16;

/// MBPay request signature.
///
/// The signed string is every parameter except `sign`, sorted by key in ASCII
/// order and joined as `k1=v1&k2=v2`, followed by `&key=<app_secret>`. The
/// signature is the lowercase hex SHA-256 of that string.
#[derive(Clone)]
pub struct RequestSigner {
    app_id: String,
    app_secret: String,
}

impl RequestSigner {
    pub fn new(app_id: impl Into<String>, app_secret: impl Into<String>) -> Self {
        Self {
            app_id: app_id.into(),
            app_secret: app_secret.into(),
        }
    }

    pub fn app_id(&self) -> &str {
        &self.app_id
    }

    pub fn sign(&self, params: &BTreeMap<String, String>) -> String {
        let mut payload = params
            .iter()
            .filter(|(key, _)| key.as_str() != SIGN_FIELD)
            .map(|(key, value)| format!("{}={}", key, value))
            .collect::<Vec<_>>()
            .join("&");
        payload.push_str("&key=");
        payload.push_str(&self.app_secret);

        hex::encode(Sha256::digest(payload.as_bytes()))
    }

    /// Adds `app_id`, `timestamp` and `sign` to the request parameters.
    pub fn sign_request(
        &self,
        mut params: BTreeMap<String, String>,
        timestamp: i64,
    ) -> BTreeMap<String, String> {
        params.insert("app_id".to_string(), self.app_id.clone());
        params.insert("timestamp".to_string(), timestamp.to_string());

        let sign = self.sign(&params);
        params.insert(SIGN_FIELD.to_string(), sign);
        params
    }

    pub fn verify(&self, params: &BTreeMap<String, String>) -> bool {
        match params.get(SIGN_FIELD) {
            Some(sign) => self.sign(params) == *sign,
            None => false,
        }
    }
}

impl std::fmt::Debug for RequestSigner {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RequestSigner")
            .field("app_id", &self.app_id)
            .finish_non_exhaustive()
    }
}

/// Random alphanumeric string used as a payment link nonce.
pub fn generate_nonce(length: usize) -> String {
    rand::thread_rng()
        .sample_iter(&Alphanumeric)
        .take(length)
        .map(char::from)
        .collect()
}
