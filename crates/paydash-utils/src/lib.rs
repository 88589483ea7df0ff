//! Utility functions and helpers

use rust_decimal::Decimal;

/// Format a number with thousands separators
pub fn format_number<T: ToString>(n: T) -> String {
    let s = n.to_string();
    let mut result = String::new();
    let mut count = 0;
    for c in s.chars().rev() {
        if count == 3 {
            result.push(',');
            count = 0;
        }
        result.push(c);
        count += 1;
    }
    result.chars().rev().collect()
}

/// Format a monetary amount as a dollar string, e.g. "$1,533.21"
pub fn format_amount(amount: Decimal) -> String {
    let sign = if amount.is_sign_negative() { "-" } else { "" };
    let rounded = amount.abs().round_dp(2);
    let s = format!("{:.2}", rounded);
    let (int_part, frac_part) = s.split_once('.').unwrap_or((s.as_str(), "00"));
    format!("{}${}.{}", sign, format_number(int_part), frac_part)
}

/// Sanitize HTML content for HTMX responses
pub fn sanitize_html(content: &str) -> String {
    // Basic HTML sanitization - remove potentially dangerous elements
    content
        .replace("<script", "&lt;script")
        .replace("</script>", "&lt;/script&gt;")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_number() {
        assert_eq!(format_number(5), "5");
        assert_eq!(format_number(1000), "1,000");
        assert_eq!(format_number(1234567), "1,234,567");
    }

    #[test]
    fn test_format_amount() {
        assert_eq!(format_amount(Decimal::new(153321, 2)), "$1,533.21");
        assert_eq!(format_amount(Decimal::new(500, 2)), "$5.00");
        assert_eq!(format_amount(Decimal::new(-1200, 2)), "-$12.00");
        assert_eq!(format_amount(Decimal::new(1234567, 2)), "$12,345.67");
    }

    #[test]
    fn test_sanitize_html() {
        assert_eq!(
            sanitize_html("<script>alert(1)</script>"),
            "&lt;script>alert(1)&lt;/script&gt;"
        );
        assert_eq!(sanitize_html("Acme Supplies"), "Acme Supplies");
    }
}
