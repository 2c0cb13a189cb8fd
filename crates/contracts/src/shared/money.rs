//! Price formatting shared by product cards, the price filter label and
//! the contact-seller message.

/// Formats an integer with `,` thousands separators.
///
/// # Examples
///
/// ```
/// use contracts::shared::money::format_thousands;
/// assert_eq!(format_thousands(1234567), "1,234,567");
/// ```
pub fn format_thousands(value: u32) -> String {
    let digits = value.to_string();
    let mut result = String::with_capacity(digits.len() + digits.len() / 3);

    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            result.push(',');
        }
        result.push(c);
    }

    result
}

/// Formats a price with the currency symbol in front, e.g. `₦45,000`.
pub fn format_price(currency_symbol: &str, value: u32) -> String {
    format!("{}{}", currency_symbol, format_thousands(value))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_thousands() {
        assert_eq!(format_thousands(0), "0");
        assert_eq!(format_thousands(999), "999");
        assert_eq!(format_thousands(1000), "1,000");
        assert_eq!(format_thousands(45000), "45,000");
        assert_eq!(format_thousands(200000), "200,000");
        assert_eq!(format_thousands(1234567), "1,234,567");
    }

    #[test]
    fn test_format_price() {
        assert_eq!(format_price("₦", 45000), "₦45,000");
        assert_eq!(format_price("₦", 2000), "₦2,000");
    }
}
