use contracts::domain::a001_product::filter::ProductFilter;
use contracts::enums::category::Category;
use contracts::shared::money::format_price;
use leptos::prelude::*;

pub fn create_state() -> RwSignal<ProductFilter> {
    RwSignal::new(ProductFilter::default())
}

/// Text of the `#price-display` label.
pub fn price_label(currency_symbol: &str, max_price: u32) -> String {
    format!("Max Price: {}", format_price(currency_symbol, max_price))
}

/// Parse the slider value. Range inputs report decimal strings.
pub fn parse_slider_value(raw: &str) -> Option<u32> {
    let raw = raw.trim();
    raw.parse::<u32>()
        .ok()
        .or_else(|| raw.parse::<f64>().ok().filter(|v| *v >= 0.0).map(|v| v as u32))
}

/// Category named by a `name="category"` checkbox value.
pub fn category_from_checkbox(value: &str) -> Option<Category> {
    Category::from_code(value.trim())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_price_label() {
        assert_eq!(price_label("₦", 200000), "Max Price: ₦200,000");
        assert_eq!(price_label("₦", 2000), "Max Price: ₦2,000");
    }

    #[test]
    fn test_category_from_checkbox() {
        for category in Category::all() {
            assert_eq!(category_from_checkbox(category.code()), Some(category));
        }
        assert_eq!(category_from_checkbox(" pants "), Some(Category::Pants));
        assert_eq!(category_from_checkbox("on"), None);
        assert_eq!(category_from_checkbox(""), None);
    }

    #[test]
    fn test_parse_slider_value() {
        assert_eq!(parse_slider_value("50000"), Some(50000));
        assert_eq!(parse_slider_value(" 1200 "), Some(1200));
        assert_eq!(parse_slider_value("1500.0"), Some(1500));
        assert_eq!(parse_slider_value(""), None);
        assert_eq!(parse_slider_value("-5"), None);
        assert_eq!(parse_slider_value("abc"), None);
    }
}
