/// Insert thousands separators into a non-negative whole number
fn group_thousands(whole: u64) -> String {
    let digits = whole.to_string();
    let mut result = String::new();
    for (i, c) in digits.chars().rev().enumerate() {
        if i > 0 && i % 3 == 0 {
            result.push(',');
        }
        result.push(c);
    }
    result.chars().rev().collect()
}

/// Format a dollar amount rounded to whole dollars, e.g. `$9,000` or `-$8,550`
pub fn format_currency(value: f64) -> String {
    let dollars = group_thousands(value.abs().round() as u64);
    if value < 0.0 && value.round() != 0.0 {
        format!("-${dollars}")
    } else {
        format!("${dollars}")
    }
}

/// Format a quantity rounded to a whole number with separators, e.g. `3,412,142`
pub fn format_number(value: f64) -> String {
    let whole = group_thousands(value.abs().round() as u64);
    if value < 0.0 && value.round() != 0.0 {
        format!("-{whole}")
    } else {
        whole
    }
}

/// Format a percentage given in percent units, e.g. `12.5%`
pub fn format_percent(value: f64) -> String {
    format!("{value:.1}%")
}

/// Format an electricity price, e.g. `$0.145/kWh`
pub fn format_price(price: f64) -> String {
    format!("${price:.3}/kWh")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_currency() {
        assert_eq!(format_currency(0.0), "$0");
        assert_eq!(format_currency(217.5), "$218");
        assert_eq!(format_currency(9000.0), "$9,000");
        assert_eq!(format_currency(1_234_567.4), "$1,234,567");
        assert_eq!(format_currency(-8550.0), "-$8,550");
        assert_eq!(format_currency(-0.2), "$0");
    }

    #[test]
    fn test_format_number() {
        assert_eq!(format_number(3_412_142.0), "3,412,142");
        assert_eq!(format_number(999.6), "1,000");
        assert_eq!(format_number(-1500.0), "-1,500");
    }

    #[test]
    fn test_format_percent_and_price() {
        assert_eq!(format_percent(12.54), "12.5%");
        assert_eq!(format_price(0.145), "$0.145/kWh");
    }
}
