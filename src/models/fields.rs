//! Typed extraction of fields from the loosely typed `data` object.
//!
//! Each target type declares which JSON representations it accepts. The vendor
//! sends numbers as floats in some responses and as integers in others, so
//! integer fields take a float (truncated), a signed integer, or an unsigned
//! integer that fits, in that order.

use serde_json::{Map, Value};

use crate::error::{MbpayError, MbpayResult};

pub trait FieldValue: Sized + Default {
    fn from_json(value: &Value) -> Option<Self>;
}

impl FieldValue for String {
    fn from_json(value: &Value) -> Option<Self> {
        value.as_str().map(str::to_string)
    }
}

impl FieldValue for i64 {
    fn from_json(value: &Value) -> Option<Self> {
        let Value::Number(number) = value else {
            return None;
        };

        if number.is_f64() {
            number.as_f64().map(|f| f as i64)
        } else if let Some(i) = number.as_i64() {
            Some(i)
        } else {
            number.as_u64().and_then(|u| i64::try_from(u).ok())
        }
    }
}

impl FieldValue for i32 {
    fn from_json(value: &Value) -> Option<Self> {
        i64::from_json(value).and_then(|i| i32::try_from(i).ok())
    }
}

/// Builds a typed record out of a response's `data` object.
pub trait FromData: Sized {
    fn from_data(reader: &DataReader<'_>) -> MbpayResult<Self>;
}

#[derive(Debug, Clone, Copy)]
pub struct DataReader<'a> {
    data: &'a Map<String, Value>,
}

impl<'a> DataReader<'a> {
    pub fn new(data: &'a Map<String, Value>) -> Self {
        Self { data }
    }

    /// Missing or mistyped values fail with `invalid <key> format in response`.
    pub fn required<T: FieldValue>(&self, key: &str) -> MbpayResult<T> {
        self.data
            .get(key)
            .and_then(T::from_json)
            .ok_or_else(|| MbpayError::invalid_format(key))
    }

    /// Like [`required`](Self::required) but an empty string also fails.
    pub fn required_non_empty(&self, key: &str) -> MbpayResult<String> {
        let value: String = self.required(key)?;
        if value.is_empty() {
            return Err(MbpayError::invalid_format(key));
        }
        Ok(value)
    }

    /// Missing or mistyped values fall back to the type's default.
    pub fn optional<T: FieldValue>(&self, key: &str) -> T {
        self.data
            .get(key)
            .and_then(T::from_json)
            .unwrap_or_default()
    }
}
