//! # Response Formatting
//!
//! Success envelopes shared by the product endpoints.

use serde::Serialize;

/// Value of the `status` field on every success body
pub const STATUS_SUCCESS: &str = "success";

/// `{ status, dataCount, data: [...] }`
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ListResponse<T: Serialize> {
    pub status: &'static str,
    pub data_count: usize,
    pub data: Vec<T>,
}

impl<T: Serialize> ListResponse<T> {
    pub fn new(data: Vec<T>) -> Self {
        Self {
            status: STATUS_SUCCESS,
            data_count: data.len(),
            data,
        }
    }
}

/// `{ status, data }`
#[derive(Debug, Clone, Serialize)]
pub struct DataResponse<T: Serialize> {
    pub status: &'static str,
    pub data: T,
}

impl<T: Serialize> DataResponse<T> {
    pub fn new(data: T) -> Self {
        Self {
            status: STATUS_SUCCESS,
            data,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct MessageResponse {
    pub message: String,
}

impl MessageResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}
