//! Utility functions and helpers

use thiserror::Error;

/// Separator used when displaying amounts
pub const AMOUNT_SEPARATOR: char = '.';

/// Errors from parsing grouped integers
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum NumberError {
    #[error("Empty number")]
    Empty,

    #[error("Not an integer: {value}")]
    NotInteger { value: String },
}

/// Format an integer with a separator every three digits from the right
pub fn format_number<T: ToString>(n: T, separator: char) -> String {
    let s = n.to_string();
    let (sign, digits) = match s.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", s.as_str()),
    };

    let mut result = String::with_capacity(s.len() + s.len() / 3);
    let mut count = 0;
    for c in digits.chars().rev() {
        if count == 3 {
            result.push(separator);
            count = 0;
        }
        result.push(c);
        count += 1;
    }
    result.push_str(sign);
    result.chars().rev().collect()
}

/// Format an amount for display, e.g. `1234567` -> `1.234.567`
pub fn format_amount(amount: i64) -> String {
    format_number(amount, AMOUNT_SEPARATOR)
}

/// Parse an integer that may carry `,` or `.` thousands separators
pub fn parse_grouped_integer(input: &str) -> Result<i64, NumberError> {
    let cleaned: String = input
        .trim()
        .chars()
        .filter(|c| *c != ',' && *c != '.')
        .collect();

    if cleaned.is_empty() {
        return Err(NumberError::Empty);
    }

    cleaned.parse::<i64>().map_err(|_| NumberError::NotInteger {
        value: input.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_amount() {
        assert_eq!(format_amount(1234567), "1.234.567");
        assert_eq!(format_amount(100), "100");
        assert_eq!(format_amount(1000), "1.000");
        assert_eq!(format_amount(0), "0");
    }

    #[test]
    fn test_format_amount_negative() {
        assert_eq!(format_amount(-1234), "-1.234");
        assert_eq!(format_amount(-123), "-123");
    }

    #[test]
    fn test_format_number_custom_separator() {
        assert_eq!(format_number(9876543, ','), "9,876,543");
    }

    #[test]
    fn test_parse_grouped_integer() {
        assert_eq!(parse_grouped_integer("1,234,567"), Ok(1234567));
        assert_eq!(parse_grouped_integer("1.234.567"), Ok(1234567));
        assert_eq!(parse_grouped_integer(" 500000 "), Ok(500000));
        assert_eq!(parse_grouped_integer("-2,000"), Ok(-2000));
    }

    #[test]
    fn test_parse_grouped_integer_rejects_garbage() {
        assert_eq!(parse_grouped_integer(""), Err(NumberError::Empty));
        assert_eq!(parse_grouped_integer(",."), Err(NumberError::Empty));
        assert!(matches!(
            parse_grouped_integer("12a"),
            Err(NumberError::NotInteger { .. })
        ));
    }
}
