use std::env;

#[derive(Clone)]
pub struct Config {
    /// Base URL of the product catalog service
    pub catalog_addr: String,
}

impl Config {
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();

        Self {
            catalog_addr: env::var("PRODUCT_CATALOG_SERVICE_ADDR")
                .expect("PRODUCT_CATALOG_SERVICE_ADDR must be set"),
        }
    }
}
