use thiserror::Error;

/// Business error codes returned in the `code` field of every MBPay response.
pub mod codes {
    pub const SUCCESS: i64 = 0;
    pub const APP_ID_EMPTY: i64 = 12000;
    pub const SIGN_EMPTY: i64 = 12001;
    pub const TIMESTAMP_EMPTY: i64 = 12002;
    pub const MERCHANT_NOT_EXISTS: i64 = 12003;
    pub const SIGN_ERROR: i64 = 12005;
    pub const PARAM_ERROR: i64 = 12006;
    pub const MERCHANT_NOT_EXISTS_2: i64 = 12007;
    pub const MERCHANT_STATUS_ERROR: i64 = 12008;
    pub const MERCHANT_NOT_EXISTS_3: i64 = 12009;
    pub const INSUFFICIENT_BALANCE: i64 = 12010;
    /// Order number already used, or the receiving address was not found.
    pub const ORDER_EXISTS_OR_ADDR_NOT_FOUND: i64 = 12011;
    pub const SYSTEM_ERROR: i64 = 12012;
    pub const ORDER_NO_EMPTY: i64 = 12013;
    pub const ORDER_NOT_FOUND: i64 = 12014;

    /// Short description of a known code, for log lines.
    pub fn describe(code: i64) -> Option<&'static str> {
        let text = match code {
            SUCCESS => "success",
            APP_ID_EMPTY => "app_id is empty",
            SIGN_EMPTY => "sign is empty",
            TIMESTAMP_EMPTY => "timestamp is empty",
            MERCHANT_NOT_EXISTS | MERCHANT_NOT_EXISTS_2 | MERCHANT_NOT_EXISTS_3 => {
                "merchant does not exist"
            }
            SIGN_ERROR => "signature mismatch",
            PARAM_ERROR => "parameter error",
            MERCHANT_STATUS_ERROR => "merchant status error",
            INSUFFICIENT_BALANCE => "insufficient balance",
            ORDER_EXISTS_OR_ADDR_NOT_FOUND => "order exists or address not found",
            SYSTEM_ERROR => "system error",
            ORDER_NO_EMPTY => "order_no is empty",
            ORDER_NOT_FOUND => "order not found",
            _ => return None,
        };
        Some(text)
    }
}

#[derive(Error, Debug)]
pub enum MbpayError {
    // Caller input rejected before any request is sent
    #[error("Validation error: {0}")]
    Validation(String),

    // Non-zero response code
    #[error("MBPay API Error [{code}]: {message}")]
    Api { code: i64, message: String },

    // Response data missing a required field or carrying an unexpected type
    #[error("invalid {0} format in response")]
    InvalidFormat(String),

    // HTTP errors
    #[error("HTTP status {0}")]
    HttpStatus(u16),

    #[error("HTTP client error: {0}")]
    HttpClient(#[from] reqwest::Error),

    // Serialization errors
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    // Configuration errors
    #[error("Configuration error: {0}")]
    Config(#[from] config::ConfigError),
}

impl MbpayError {
    pub fn api(code: i64, message: impl Into<String>) -> Self {
        MbpayError::Api {
            code,
            message: message.into(),
        }
    }

    pub fn invalid_format(field: &str) -> Self {
        MbpayError::InvalidFormat(field.to_string())
    }

    /// Vendor code of a business error, `None` for every other kind.
    pub fn code(&self) -> Option<i64> {
        match self {
            MbpayError::Api { code, .. } => Some(*code),
            _ => None,
        }
    }

    /// True for failures raised before the request left the process.
    pub fn is_validation(&self) -> bool {
        matches!(self, MbpayError::Validation(_))
    }

    /// True for network, HTTP status and body decoding failures.
    pub fn is_transport(&self) -> bool {
        matches!(
            self,
            MbpayError::HttpStatus(_) | MbpayError::HttpClient(_) | MbpayError::Serialization(_)
        )
    }
}

impl From<validator::ValidationErrors> for MbpayError {
    fn from(errors: validator::ValidationErrors) -> Self {
        let mut messages: Vec<String> = errors
            .field_errors()
            .into_iter()
            .flat_map(|(field, errs)| {
                errs.iter().map(move |e| match &e.message {
                    Some(msg) => msg.to_string(),
                    None => format!("{} is invalid", field),
                })
            })
            .collect();
        messages.sort();
        MbpayError::Validation(messages.join("; "))
    }
}

pub type MbpayResult<T> = Result<T, MbpayError>;
