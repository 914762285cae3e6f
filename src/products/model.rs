//! Product entity and its create/update payloads

use serde::{Deserialize, Serialize, Serializer};

/// A product record as stored and served.
///
/// Serialized with camelCase keys (`unitCost`, `totalSales`, `imageUrl`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    /// Generated on create, never changed afterwards
    pub id: String,
    pub name: String,
    #[serde(serialize_with = "serialize_number")]
    pub unit_cost: f64,
    #[serde(serialize_with = "serialize_number")]
    pub total_sales: f64,
    #[serde(serialize_with = "serialize_number")]
    pub inventory: f64,
    pub description: String,
    pub image_url: String,
}

/// Largest magnitude below which every integral `f64` is exact
const MAX_SAFE_INTEGER: f64 = 9_007_199_254_740_991.0;

/// Whole numbers are written without a fractional part (`1000`, not `1000.0`)
fn serialize_number<S: Serializer>(value: &f64, serializer: S) -> Result<S::Ok, S::Error> {
    if value.fract() == 0.0 && value.abs() <= MAX_SAFE_INTEGER {
        serializer.serialize_i64(*value as i64)
    } else {
        serializer.serialize_f64(*value)
    }
}

/// Fields supplied when creating a product. The id is assigned by the repository.
#[derive(Debug, Clone, PartialEq)]
pub struct NewProduct {
    pub name: String,
    pub unit_cost: f64,
    pub total_sales: f64,
    pub inventory: f64,
    pub description: String,
    pub image_url: String,
}

impl NewProduct {
    pub(crate) fn into_product(self, id: String) -> Product {
        Product {
            id,
            name: self.name,
            unit_cost: self.unit_cost,
            total_sales: self.total_sales,
            inventory: self.inventory,
            description: self.description,
            image_url: self.image_url,
        }
    }
}

/// Partial update. Supplied fields overwrite, absent fields are kept.
///
/// There is deliberately no `id` field: unknown keys, `id` included, are
/// ignored on deserialization.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductPatch {
    pub name: Option<String>,
    pub unit_cost: Option<f64>,
    pub total_sales: Option<f64>,
    pub inventory: Option<f64>,
    pub description: Option<String>,
    pub image_url: Option<String>,
}

impl ProductPatch {
    /// Shallow-merge this patch over `product`
    pub fn apply_to(self, product: &mut Product) {
        if let Some(name) = self.name {
            product.name = name;
        }
        if let Some(unit_cost) = self.unit_cost {
            product.unit_cost = unit_cost;
        }
        if let Some(total_sales) = self.total_sales {
            product.total_sales = total_sales;
        }
        if let Some(inventory) = self.inventory {
            product.inventory = inventory;
        }
        if let Some(description) = self.description {
            product.description = description;
        }
        if let Some(image_url) = self.image_url {
            product.image_url = image_url;
        }
    }

    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn laptop() -> Product {
        NewProduct {
            name: "Laptop".to_string(),
            unit_cost: 1000.0,
            total_sales: 12.0,
            inventory: 4.0,
            description: "A laptop".to_string(),
            image_url: "https://example.com/laptop.jpg".to_string(),
        }
        .into_product("abc".to_string())
    }

    #[test]
    fn test_product_serializes_camel_case() {
        let json = serde_json::to_value(laptop()).unwrap();
        assert_eq!(json["id"], "abc");
        assert_eq!(json["unitCost"].as_f64(), Some(1000.0));
        assert_eq!(json["totalSales"].as_f64(), Some(12.0));
        assert_eq!(json["imageUrl"], "https://example.com/laptop.jpg");
        assert!(json.get("unit_cost").is_none());
    }

    #[test]
    fn test_whole_numbers_serialize_without_fraction() {
        let mut product = laptop();
        product.total_sales = 2.5;
        let text = serde_json::to_string(&product).unwrap();

        assert!(text.contains("\"unitCost\":1000,"), "{}", text);
        assert!(text.contains("\"inventory\":4,"), "{}", text);
        assert!(text.contains("\"totalSales\":2.5,"), "{}", text);

        let back: Product = serde_json::from_str(&text).unwrap();
        assert_eq!(back, product);
    }

    #[test]
    fn test_patch_only_touches_supplied_fields() {
        let mut product = laptop();
        let patch: ProductPatch = serde_json::from_value(json!({ "name": "Notebook" })).unwrap();
        patch.apply_to(&mut product);

        assert_eq!(product.name, "Notebook");
        assert_eq!(product.unit_cost, 1000.0);
        assert_eq!(product.description, "A laptop");
        assert_eq!(product.id, "abc");
    }

    #[test]
    fn test_patch_ignores_id() {
        let mut product = laptop();
        let patch: ProductPatch =
            serde_json::from_value(json!({ "id": "hijack", "inventory": 9 })).unwrap();
        patch.apply_to(&mut product);

        assert_eq!(product.id, "abc");
        assert_eq!(product.inventory, 9.0);
    }

    #[test]
    fn test_patch_rejects_wrong_types() {
        let result: Result<ProductPatch, _> = serde_json::from_value(json!({ "unitCost": "cheap" }));
        assert!(result.is_err());
    }

    #[test]
    fn test_empty_patch() {
        let patch: ProductPatch = serde_json::from_value(json!({})).unwrap();
        assert!(patch.is_empty());
    }
}
