/// Number formatting for metric cards and cost tables

/// Format an integer with comma thousands separators
pub fn format_thousands(n: i64) -> String {
    let s = n.abs().to_string();
    let mut result = String::new();
    for (i, ch) in s.chars().rev().enumerate() {
        if i > 0 && i % 3 == 0 {
            result.push(',');
        }
        result.push(ch);
    }
    if n < 0 {
        result.push('-');
    }
    result.chars().rev().collect()
}

/// Dollar amount rounded to whole dollars, e.g. "$8,240"
pub fn format_usd(value: f64) -> String {
    let rounded = value.round() as i64;
    if rounded < 0 {
        format!("-${}", format_thousands(-rounded))
    } else {
        format!("${}", format_thousands(rounded))
    }
}

/// Signed percent with one decimal, e.g. "+9.1%" / "-15.8%"
pub fn format_percent(value: f64) -> String {
    if value >= 0.0 {
        format!("+{:.1}%", value)
    } else {
        format!("{:.1}%", value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_thousands() {
        assert_eq!(format_thousands(0), "0");
        assert_eq!(format_thousands(8240), "8,240");
        assert_eq!(format_thousands(1234567), "1,234,567");
        assert_eq!(format_thousands(-1234), "-1,234");
    }

    #[test]
    fn test_format_usd() {
        assert_eq!(format_usd(8240.0), "$8,240");
        assert_eq!(format_usd(8240.6), "$8,241");
        assert_eq!(format_usd(-120.0), "-$120");
    }

    #[test]
    fn test_format_percent() {
        assert_eq!(format_percent(9.1), "+9.1%");
        assert_eq!(format_percent(-15.8), "-15.8%");
        assert_eq!(format_percent(0.0), "+0.0%");
    }
}
