//! Product catalog API client implementation

use async_trait::async_trait;
use reqwest::Client;
use urlencoding::encode;

use crate::domain::entities::{Product, ProductId};
use crate::domain::ports::ProductCatalog;
use crate::error::CatalogError;

/// HTTP implementation of the product catalog client
///
/// Talks to the catalog service's REST surface; a 404 is the catalog's clean
/// "no such product" signal, everything else non-2xx is an upstream failure.
pub struct HttpCatalogClient {
    http: Client,
    base_url: String,
}

impl HttpCatalogClient {
    pub fn new(base_url: String) -> Self {
        Self {
            http: Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    fn api_url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }
}

#[async_trait]
impl ProductCatalog for HttpCatalogClient {
    async fn get_product(&self, id: &ProductId) -> Result<Product, CatalogError> {
        let url = self.api_url(&format!("/products/{}", encode(id.as_str())));
        let response = self.http.get(&url).send().await?;

        let status = response.status();
        if status.is_success() {
            response
                .json()
                .await
                .map_err(|e| CatalogError::Deserialization(e.to_string()))
        } else if status.as_u16() == 404 {
            Err(CatalogError::ProductNotFound(id.to_string()))
        } else {
            let message = response.text().await.unwrap_or_default();
            Err(CatalogError::Api {
                status: status.as_u16(),
                message,
            })
        }
    }
}
