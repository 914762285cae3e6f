//! # Request Parsing
//!
//! Turns raw query strings and JSON bodies into typed repository inputs.

use serde::Deserialize;
use serde_json::Value;

use crate::products::{ComparisonOperator, NewProduct, ProductFilter, ProductPatch};

use super::errors::{ApiError, ApiResult};

/// Raw query parameters accepted by the list endpoint.
///
/// Everything arrives as text so that malformed values produce our own
/// `BadRequest` instead of an extractor rejection.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListQuery {
    pub name: Option<String>,
    pub cost: Option<String>,
    pub cost_op: Option<String>,
    pub sales: Option<String>,
    pub sales_op: Option<String>,
    /// Accepted but not applied to results
    pub page: Option<String>,
    /// Accepted but not applied to results
    pub limit: Option<String>,
}

/// What the list endpoint should do, in dispatch priority order
#[derive(Debug, Clone, PartialEq)]
pub enum ListRequest {
    /// `name` present: case-insensitive substring search
    Search(String),
    /// `cost` and/or `sales` present
    Filter(ProductFilter),
    /// No selectors
    All,
}

impl ListRequest {
    pub fn parse(query: ListQuery) -> ApiResult<Self> {
        if let Some(name) = non_blank(query.name) {
            return Ok(ListRequest::Search(name));
        }

        let cost = non_blank(query.cost)
            .map(|v| parse_threshold("cost", &v))
            .transpose()?;
        let sales = non_blank(query.sales)
            .map(|v| parse_threshold("sales", &v))
            .transpose()?;

        if cost.is_none() && sales.is_none() {
            return Ok(ListRequest::All);
        }

        // An operator only matters next to its threshold
        let cost_op = match cost {
            Some(_) => parse_operator(query.cost_op)?,
            None => ComparisonOperator::default(),
        };
        let sales_op = match sales {
            Some(_) => parse_operator(query.sales_op)?,
            None => ComparisonOperator::default(),
        };

        Ok(ListRequest::Filter(ProductFilter {
            cost,
            cost_op,
            sales,
            sales_op,
        }))
    }
}

fn non_blank(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.is_empty())
}

fn parse_threshold(param: &str, value: &str) -> ApiResult<f64> {
    value
        .trim()
        .parse::<f64>()
        .ok()
        .filter(|n| n.is_finite())
        .ok_or_else(|| ApiError::bad_request(format!("Invalid {}: {}", param, value)))
}

fn parse_operator(value: Option<String>) -> ApiResult<ComparisonOperator> {
    match non_blank(value) {
        Some(op) => Ok(op.parse::<ComparisonOperator>()?),
        None => Ok(ComparisonOperator::default()),
    }
}

/// Body of a create request. Each field is checked for presence by hand so
/// that a missing field yields one uniform message.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateProductRequest {
    pub name: Option<Value>,
    pub unit_cost: Option<Value>,
    pub total_sales: Option<Value>,
    pub inventory: Option<Value>,
    pub description: Option<Value>,
    pub image_url: Option<Value>,
}

pub const ALL_FIELDS_REQUIRED: &str = "All fields are required";

impl CreateProductRequest {
    /// Validate presence and coerce numeric fields.
    pub fn into_new_product(self) -> ApiResult<NewProduct> {
        let name = match present(self.name)? {
            Value::String(name) if !name.is_empty() => name,
            Value::String(_) => return Err(ApiError::bad_request(ALL_FIELDS_REQUIRED)),
            _ => return Err(ApiError::bad_request("name must be a string")),
        };
        let unit_cost = present(self.unit_cost)?;
        let total_sales = present(self.total_sales)?;
        let inventory = present(self.inventory)?;
        let description = present(self.description)?;
        let image_url = present(self.image_url)?;

        Ok(NewProduct {
            name,
            unit_cost: coerce_number("unitCost", &unit_cost)?,
            total_sales: coerce_number("totalSales", &total_sales)?,
            inventory: coerce_number("inventory", &inventory)?,
            description: coerce_text(description),
            image_url: coerce_text(image_url),
        })
    }
}

/// Absent and `null` both count as missing
fn present(value: Option<Value>) -> ApiResult<Value> {
    match value {
        Some(Value::Null) | None => Err(ApiError::bad_request(ALL_FIELDS_REQUIRED)),
        Some(value) => Ok(value),
    }
}

/// Accept JSON numbers and numeric strings
fn coerce_number(field: &str, value: &Value) -> ApiResult<f64> {
    let number = match value {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse::<f64>().ok(),
        _ => None,
    };
    number
        .filter(|n| n.is_finite())
        .ok_or_else(|| ApiError::bad_request(format!("{} must be a number", field)))
}

fn coerce_text(value: Value) -> String {
    match value {
        Value::String(s) => s,
        other => other.to_string(),
    }
}

/// Parse an update body. A missing or blank body is an empty patch.
pub fn parse_patch(body: &[u8]) -> ApiResult<ProductPatch> {
    if body.iter().all(u8::is_ascii_whitespace) {
        return Ok(ProductPatch::default());
    }
    serde_json::from_slice(body).map_err(|e| {
        ApiError::bad_request(format!("Failed to parse the request body as JSON: {}", e))
    })
}
