pub mod profile;
pub mod result;

pub use profile::render_profile;
pub use result::render_summary;

/// Integer with `,` thousands separators, e.g. `1,234,567`.
pub(crate) fn group_thousands(value: u64) -> String {
    group_digits(&value.to_string())
}

/// Fixed-precision number with thousands separators, e.g. `12,345.6`.
pub(crate) fn format_number(value: f64, precision: usize) -> String {
    let text = format!("{:.*}", precision, value.max(0.0));

    match text.split_once('.') {
        Some((int, frac)) => format!("{}.{}", group_digits(int), frac),
        None => group_digits(&text),
    }
}

fn group_digits(digits: &str) -> String {
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);

    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(c);
    }

    grouped
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_group_thousands() {
        assert_eq!(group_thousands(0), "0");
        assert_eq!(group_thousands(999), "999");
        assert_eq!(group_thousands(1000), "1,000");
        assert_eq!(group_thousands(1234567), "1,234,567");
    }

    #[test]
    fn test_format_number() {
        assert_eq!(format_number(12345.64, 1), "12,345.6");
        assert_eq!(format_number(999.4, 0), "999");
        assert_eq!(format_number(1500.0, 2), "1,500.00");
    }
}
