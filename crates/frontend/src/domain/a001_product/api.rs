use contracts::domain::a001_product::{CatalogResponse, Product};
use gloo_net::http::Request;

use crate::shared::api_utils::api_url;

/// Fetch the product listing. The endpoint answers with either a bare array
/// or a `{results: [...]}` envelope; both normalize to a plain list.
pub async fn fetch_products() -> Result<Vec<Product>, String> {
    let response = Request::get(&api_url("/api/store/products/"))
        .send()
        .await
        .map_err(|e| format!("Failed to send request: {}", e))?;

    if !response.ok() {
        return Err(format!("Product listing failed: {}", response.status()));
    }

    response
        .json::<CatalogResponse>()
        .await
        .map(CatalogResponse::into_products)
        .map_err(|e| format!("Failed to parse response: {}", e))
}

/// Catalog accessor used by pages: failures degrade to an empty catalog and
/// are logged for diagnostics instead of being surfaced to the visitor.
pub async fn fetch_catalog() -> Vec<Product> {
    match fetch_products().await {
        Ok(products) => products,
        Err(e) => {
            log::error!("Failed to fetch products: {}", e);
            Vec::new()
        }
    }
}
