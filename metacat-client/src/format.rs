//! Number formatting for summary rows.

/// `1234567` → `1,234,567`.
pub fn format_number_with_comma(value: u64) -> String {
    let digits = value.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

/// Zero-pad to at least two digits: `7` → `07`, `12` → `12`.
pub fn form_two_digit_number(value: usize) -> String {
    format!("{:02}", value)
}

/// Sample share as shown in the summary; absent samples count as the full
/// table.
pub fn format_sample_percentage(sample: Option<f64>) -> String {
    format!("{}%", sample.unwrap_or(100.0))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_comma_grouping() {
        assert_eq!(format_number_with_comma(0), "0");
        assert_eq!(format_number_with_comma(999), "999");
        assert_eq!(format_number_with_comma(1_000), "1,000");
        assert_eq!(format_number_with_comma(1_234_567), "1,234,567");
    }

    #[test]
    fn test_two_digit() {
        assert_eq!(form_two_digit_number(0), "00");
        assert_eq!(form_two_digit_number(7), "07");
        assert_eq!(form_two_digit_number(12), "12");
        assert_eq!(form_two_digit_number(345), "345");
    }

    #[test]
    fn test_sample_percentage() {
        assert_eq!(format_sample_percentage(None), "100%");
        assert_eq!(format_sample_percentage(Some(50.0)), "50%");
        assert_eq!(format_sample_percentage(Some(12.5)), "12.5%");
    }
}
