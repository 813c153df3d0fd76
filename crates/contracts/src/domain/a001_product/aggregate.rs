use serde::{Deserialize, Deserializer, Serialize};

/// Catalog product as served by the store API.
///
/// Products are read-only on the client; the backend owns their lifecycle.
/// The `id` is an opaque string, unique across the catalog.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Product {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub tagline: String,
    #[serde(default)]
    pub description: String,
    /// Unit price. The API may serialize this as a decimal string.
    #[serde(deserialize_with = "deserialize_price")]
    pub price: f64,
    #[serde(default)]
    pub unit: String,
    #[serde(default)]
    pub image: String,
    #[serde(default)]
    pub benefits: Vec<String>,
}

fn deserialize_price<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum PriceRepr {
        Number(f64),
        Text(String),
    }

    match PriceRepr::deserialize(deserializer)? {
        PriceRepr::Number(value) => Ok(value),
        PriceRepr::Text(text) => text.trim().parse::<f64>().map_err(serde::de::Error::custom),
    }
}

/// Product listing response. The endpoint answers with either a bare array
/// or an envelope carrying the list under `results`.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum CatalogResponse {
    List(Vec<Product>),
    Envelope { results: Vec<Product> },
}

impl CatalogResponse {
    pub fn into_products(self) -> Vec<Product> {
        match self {
            CatalogResponse::List(products) => products,
            CatalogResponse::Envelope { results } => results,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_json(price: &str) -> String {
        format!(
            r#"{{"id": "p1", "name": "Golden Kraut", "price": {}}}"#,
            price
        )
    }

    #[test]
    fn test_price_accepts_number() {
        let product: Product = serde_json::from_str(&sample_json("12.5")).unwrap();
        assert_eq!(product.price, 12.5);
    }

    #[test]
    fn test_price_accepts_decimal_string() {
        let product: Product = serde_json::from_str(&sample_json("\"12.50\"")).unwrap();
        assert_eq!(product.price, 12.5);
    }

    #[test]
    fn test_price_rejects_garbage_string() {
        let result: Result<Product, _> = serde_json::from_str(&sample_json("\"a lot\""));
        assert!(result.is_err());
    }

    #[test]
    fn test_optional_fields_default() {
        let product: Product = serde_json::from_str(&sample_json("3")).unwrap();
        assert_eq!(product.tagline, "");
        assert_eq!(product.unit, "");
        assert!(product.benefits.is_empty());
    }

    #[test]
    fn test_catalog_bare_list() {
        let json = format!("[{}, {}]", sample_json("1"), sample_json("2"));
        let response: CatalogResponse = serde_json::from_str(&json).unwrap();
        let products = response.into_products();
        assert_eq!(products.len(), 2);
        assert_eq!(products[0].price, 1.0);
    }

    #[test]
    fn test_catalog_results_envelope() {
        let json = format!(r#"{{"results": [{}]}}"#, sample_json("4"));
        let response: CatalogResponse = serde_json::from_str(&json).unwrap();
        let products = response.into_products();
        assert_eq!(products.len(), 1);
        assert_eq!(products[0].price, 4.0);
    }
}
