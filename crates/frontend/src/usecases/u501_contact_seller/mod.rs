//! "Order on WhatsApp": opens a chat with the seller, prefilled with the
//! product name and price. Fire-and-forget; nothing comes back.

use crate::shared::config::StoreConfig;
use crate::shared::dom::{self, DomError};
use contracts::shared::money::format_price;

/// Plain-text order message.
pub fn order_message(store_name: &str, currency_symbol: &str, product_name: &str, price: u32) -> String {
    format!(
        "Hello {}, I’m interested in ordering {} ({}).",
        store_name,
        product_name,
        format_price(currency_symbol, price)
    )
}

/// `https://wa.me/<phone>?text=<encoded message>`
pub fn order_link(phone: &str, message: &str) -> String {
    format!("https://wa.me/{}?text={}", phone, urlencoding::encode(message))
}

/// Open the prefilled chat in a new browsing context.
pub fn contact_seller(config: &StoreConfig, product_name: &str, price: u32) -> Result<(), DomError> {
    let message = order_message(
        &config.store.name,
        &config.store.currency_symbol,
        product_name,
        price,
    );
    let url = order_link(&config.contact.whatsapp_phone, &message);

    log::info!("contact seller: {} ({})", product_name, price);
    dom::window()?.open_with_url_and_target(&url, "_blank")?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_order_message() {
        assert_eq!(
            order_message("TechstinctStore", "₦", "Midnight Bomber", 45000),
            "Hello TechstinctStore, I’m interested in ordering Midnight Bomber (₦45,000)."
        );
    }

    #[test]
    fn test_order_link_round_trip() {
        let config = StoreConfig::default();
        let message = order_message(
            &config.store.name,
            &config.store.currency_symbol,
            "Midnight Bomber",
            45000,
        );
        let link = order_link(&config.contact.whatsapp_phone, &message);

        let prefix = "https://wa.me/2349026673982?text=";
        assert!(link.starts_with(prefix));
        let encoded = &link[prefix.len()..];
        assert!(!encoded.contains(' '));
        assert!(!encoded.contains('₦'));

        let decoded = urlencoding::decode(encoded).unwrap();
        assert!(decoded.contains("Midnight Bomber"));
        assert!(decoded.contains("₦45,000"));
    }
}
