use serde::{Deserialize, Serialize};

/// Product categories offered by the store
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Shirts,
    Hoodies,
    Pants,
    Accessories,
    Outerwear,
}

impl Category {
    /// Code used in checkbox values and serialized data
    pub fn code(&self) -> &'static str {
        match self {
            Category::Shirts => "shirts",
            Category::Hoodies => "hoodies",
            Category::Pants => "pants",
            Category::Accessories => "accessories",
            Category::Outerwear => "outerwear",
        }
    }

    /// Human-readable label for filter controls
    pub fn display_name(&self) -> &'static str {
        match self {
            Category::Shirts => "Shirts",
            Category::Hoodies => "Hoodies",
            Category::Pants => "Pants",
            Category::Accessories => "Accessories",
            Category::Outerwear => "Outerwear",
        }
    }

    /// All categories in vocabulary order
    pub fn all() -> [Category; 5] {
        [
            Category::Shirts,
            Category::Hoodies,
            Category::Pants,
            Category::Accessories,
            Category::Outerwear,
        ]
    }

    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "shirts" => Some(Category::Shirts),
            "hoodies" => Some(Category::Hoodies),
            "pants" => Some(Category::Pants),
            "accessories" => Some(Category::Accessories),
            "outerwear" => Some(Category::Outerwear),
            _ => None,
        }
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.code())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_code_round_trip() {
        for category in Category::all() {
            assert_eq!(Category::from_code(category.code()), Some(category));
        }
        assert_eq!(Category::from_code("shoes"), None);
        assert_eq!(Category::from_code("Shirts"), None);
    }

    #[test]
    fn test_serde_uses_codes() {
        let json = serde_json::to_string(&Category::Outerwear).unwrap();
        assert_eq!(json, "\"outerwear\"");
        let parsed: Category = serde_json::from_str("\"hoodies\"").unwrap();
        assert_eq!(parsed, Category::Hoodies);
    }
}
