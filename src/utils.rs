//! Utility functions for common operations.

/// Format an integer with comma thousands separators.
pub fn format_thousands(n: u64) -> String {
    let digits = n.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    out
}

/// Format a dollar amount, e.g. `50000` -> `"$50,000"`.
pub fn format_usd(amount: u64) -> String {
    format!("${}", format_thousands(amount))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_thousands_small() {
        assert_eq!(format_thousands(0), "0");
        assert_eq!(format_thousands(999), "999");
    }

    #[test]
    fn test_format_thousands_groups() {
        assert_eq!(format_thousands(1000), "1,000");
        assert_eq!(format_thousands(245000), "245,000");
        assert_eq!(format_thousands(1234567), "1,234,567");
    }

    #[test]
    fn test_format_usd() {
        assert_eq!(format_usd(50000), "$50,000");
        assert_eq!(format_usd(75000), "$75,000");
    }
}
