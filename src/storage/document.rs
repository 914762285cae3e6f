//! The persisted aggregate

use serde::{Deserialize, Serialize};

use crate::products::Product;

/// The whole persisted state: every product, in insertion order.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Document {
    #[serde(default)]
    pub products: Vec<Product>,
}

impl Document {
    /// An empty document (`{ "products": [] }`)
    pub fn empty() -> Self {
        Self::default()
    }
}
