//! # Cost / sales filtering
//!
//! Numeric threshold filters over `unitCost` and `totalSales`. Both filters are
//! optional and combine with AND; survivors keep their original order.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::model::Product;

/// Relational test applied between a product field and a threshold
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum ComparisonOperator {
    /// Greater than
    #[default]
    #[serde(rename = "gt")]
    Gt,

    /// Greater than or equal
    #[serde(rename = "gte")]
    Gte,

    /// Less than
    #[serde(rename = "lt")]
    Lt,

    /// Less than or equal
    #[serde(rename = "lte")]
    Lte,
}

impl ComparisonOperator {
    pub fn as_str(&self) -> &'static str {
        match self {
            ComparisonOperator::Gt => "gt",
            ComparisonOperator::Gte => "gte",
            ComparisonOperator::Lt => "lt",
            ComparisonOperator::Lte => "lte",
        }
    }

    /// Evaluate `value <op> threshold`
    pub fn compare(&self, value: f64, threshold: f64) -> bool {
        match self {
            ComparisonOperator::Gt => value > threshold,
            ComparisonOperator::Gte => value >= threshold,
            ComparisonOperator::Lt => value < threshold,
            ComparisonOperator::Lte => value <= threshold,
        }
    }
}

impl fmt::Display for ComparisonOperator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Operator string outside gt/gte/lt/lte
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Invalid comparison operator: {0}")]
pub struct InvalidOperator(pub String);

impl FromStr for ComparisonOperator {
    type Err = InvalidOperator;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "gt" => Ok(ComparisonOperator::Gt),
            "gte" => Ok(ComparisonOperator::Gte),
            "lt" => Ok(ComparisonOperator::Lt),
            "lte" => Ok(ComparisonOperator::Lte),
            other => Err(InvalidOperator(other.to_string())),
        }
    }
}

/// Threshold filter on cost and/or sales
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProductFilter {
    pub cost: Option<f64>,
    pub cost_op: ComparisonOperator,
    pub sales: Option<f64>,
    pub sales_op: ComparisonOperator,
}

impl ProductFilter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Keep products whose `unitCost <op> cost`
    pub fn cost(mut self, op: ComparisonOperator, cost: f64) -> Self {
        self.cost = Some(cost);
        self.cost_op = op;
        self
    }

    /// Keep products whose `totalSales <op> sales`
    pub fn sales(mut self, op: ComparisonOperator, sales: f64) -> Self {
        self.sales = Some(sales);
        self.sales_op = op;
        self
    }

    /// True when neither threshold is set
    pub fn is_empty(&self) -> bool {
        self.cost.is_none() && self.sales.is_none()
    }

    pub fn matches(&self, product: &Product) -> bool {
        let cost_ok = self
            .cost
            .map_or(true, |cost| self.cost_op.compare(product.unit_cost, cost));
        let sales_ok = self
            .sales
            .map_or(true, |sales| self.sales_op.compare(product.total_sales, sales));
        cost_ok && sales_ok
    }

    /// Stable filter: survivors keep their relative order
    pub fn apply(&self, products: Vec<Product>) -> Vec<Product> {
        products.into_iter().filter(|p| self.matches(p)).collect()
    }
}
