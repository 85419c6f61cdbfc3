use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value};

use super::fields::{DataReader, FieldValue, FromData};
use crate::error::{codes, MbpayError, MbpayResult};

/// Envelope shared by every MBPay endpoint.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ApiResponse {
    #[serde(default, deserialize_with = "lenient_code")]
    pub code: i64,
    #[serde(default, deserialize_with = "lenient_message")]
    pub message: String,
    #[serde(default, deserialize_with = "lenient_data")]
    pub data: Map<String, Value>,
}

// Error responses may carry `null`, `[]` or `""` in place of the usual shapes.
// The envelope must still decode so the vendor code reaches the caller.

fn lenient_code<'de, D>(deserializer: D) -> Result<i64, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(<i64 as FieldValue>::from_json(&value).unwrap_or_default())
}

fn lenient_message<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    match Value::deserialize(deserializer)? {
        Value::String(message) => Ok(message),
        _ => Ok(String::new()),
    }
}

fn lenient_data<'de, D>(deserializer: D) -> Result<Map<String, Value>, D::Error>
where
    D: Deserializer<'de>,
{
    match Value::deserialize(deserializer)? {
        Value::Object(map) => Ok(map),
        _ => Ok(Map::new()),
    }
}

impl ApiResponse {
    pub fn is_success(&self) -> bool {
        self.code == codes::SUCCESS
    }

    pub fn to_error(&self) -> Option<MbpayError> {
        if self.is_success() {
            None
        } else {
            Some(MbpayError::api(self.code, self.message.clone()))
        }
    }

    pub fn reader(&self) -> DataReader<'_> {
        DataReader::new(&self.data)
    }

    /// Checks the business code, then coerces `data` into `T`.
    pub fn parse<T: FromData>(&self) -> MbpayResult<T> {
        if let Some(err) = self.to_error() {
            return Err(err);
        }
        T::from_data(&self.reader())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_envelope_defaults() {
        let resp: ApiResponse = serde_json::from_value(json!({ "data": null })).unwrap();
        assert_eq!(resp.code, 0);
        assert_eq!(resp.message, "");
        assert!(resp.data.is_empty());
        assert!(resp.is_success());
        assert!(resp.to_error().is_none());
    }

    #[test]
    fn test_business_error_ignores_data() {
        let resp: ApiResponse = serde_json::from_value(json!({
            "code": 12014,
            "message": "order not found",
            "data": { "payment_link": "https://pay.example/abc" }
        }))
        .unwrap();

        let err = resp.to_error().unwrap();
        assert_eq!(err.code(), Some(codes::ORDER_NOT_FOUND));
        assert!(err.to_string().contains("order not found"));
    }

    #[test]
    fn test_error_envelope_with_odd_data_keeps_code() {
        for data in [json!([]), json!(""), json!(0), json!(null)] {
            let resp: ApiResponse = serde_json::from_value(json!({
                "code": 12014,
                "message": "order not found",
                "data": data
            }))
            .unwrap();

            assert!(resp.data.is_empty());
            let err = resp.parse::<crate::models::OrderInfo>().unwrap_err();
            assert_eq!(err.code(), Some(codes::ORDER_NOT_FOUND));
            assert_eq!(err.to_string(), "MBPay API Error [12014]: order not found");
        }
    }

    #[test]
    fn test_null_message_and_code() {
        let resp: ApiResponse = serde_json::from_value(json!({
            "code": 12014,
            "message": null,
            "data": []
        }))
        .unwrap();
        assert_eq!(resp.message, "");
        assert_eq!(resp.to_error().unwrap().code(), Some(codes::ORDER_NOT_FOUND));

        let resp: ApiResponse =
            serde_json::from_value(json!({ "code": null, "message": 5 })).unwrap();
        assert!(resp.is_success());
        assert_eq!(resp.message, "");
    }
}
