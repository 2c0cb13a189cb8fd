use crate::domain::common::AggregateId;
use crate::enums::category::Category;
use serde::{Deserialize, Serialize};

// ============================================================================
// ID Type
// ============================================================================

/// Product identifier, assigned in generation order starting at 1
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct ProductId(pub u32);

impl ProductId {
    pub fn new(value: u32) -> Self {
        Self(value)
    }

    pub fn value(&self) -> u32 {
        self.0
    }
}

impl AggregateId for ProductId {
    fn as_string(&self) -> String {
        self.0.to_string()
    }

    fn from_string(s: &str) -> Result<Self, String> {
        s.parse::<u32>()
            .map(ProductId::new)
            .map_err(|e| format!("Invalid product id: {}", e))
    }
}

// ============================================================================
// Aggregate
// ============================================================================

/// Catalog item. Immutable once generated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Product {
    pub id: ProductId,
    pub name: String,
    pub category: Category,
    /// Whole currency units
    pub price: u32,
    #[serde(rename = "image")]
    pub image_url: String,
}
