//! Product domain entities
//!
//! Products are owned by the catalog service; this service treats them as
//! immutable values fetched fresh per request.

use serde::{Deserialize, Serialize};

/// Unique identifier for a product
///
/// Opaque token assigned by the catalog service; no internal structure
/// is assumed.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProductId(pub String);

impl ProductId {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<String> for ProductId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

impl From<&str> for ProductId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

impl std::fmt::Display for ProductId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A monetary amount split into whole units and fractional nanos
///
/// 1 unit = 1_000_000_000 nanos. Both fields default to 0 when absent from
/// the wire.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Money {
    #[serde(default)]
    pub currency_code: String,
    #[serde(default)]
    pub units: i64,
    #[serde(default)]
    pub nanos: i32,
}

impl Money {
    /// Total value in nanos, the basis for price comparison
    pub fn total_nanos(&self) -> i64 {
        self.units * 1_000_000_000 + i64::from(self.nanos)
    }
}

/// A catalog product
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Product {
    pub id: ProductId,
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub picture: String,
    #[serde(default)]
    pub price: Money,
    #[serde(default)]
    pub categories: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn total_nanos_combines_units_and_nanos() {
        let price = Money {
            currency_code: "USD".to_string(),
            units: 12,
            nanos: 340_000_000,
        };
        assert_eq!(price.total_nanos(), 12_340_000_000);
    }

    #[test]
    fn money_missing_fields_deserialize_as_zero() {
        let price: Money = serde_json::from_str("{}").unwrap();
        assert_eq!(price.units, 0);
        assert_eq!(price.nanos, 0);
        assert_eq!(price.total_nanos(), 0);
    }
}
