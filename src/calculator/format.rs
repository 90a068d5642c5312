//! Operand parsing and pt-BR display formatting.

use super::evaluation::CalcError;

/// Parse an accumulated operand.
///
/// The typed "," decimal separator is mapped to the canonical "." point
/// before parsing. A running operand produced by a previous calculation
/// already uses ".".
pub fn parse_operand(raw: &str) -> Result<f64, CalcError> {
    raw.replace(',', ".")
        .parse()
        .map_err(|_| CalcError::InvalidValue)
}

/// Format a result for the display: "," as decimal separator, "." as
/// thousands grouping, exactly two fraction digits.
pub fn format_display(value: f64) -> String {
    let fixed = format!("{:.2}", value.abs());
    let (int_part, frac_part) = fixed.split_once('.').unwrap_or((fixed.as_str(), "00"));

    let mut grouped = String::new();
    for (i, c) in int_part.chars().rev().enumerate() {
        if i > 0 && i % 3 == 0 {
            grouped.push('.');
        }
        grouped.push(c);
    }
    let int_grouped: String = grouped.chars().rev().collect();

    let sign = if value < 0.0 { "-" } else { "" };
    format!("{sign}{int_grouped},{frac_part}")
}

/// The raw string form a result takes when it becomes the running
/// operand again: shortest decimal form with a "." point, so "8" rather
/// than "8.00".
pub fn format_operand(value: f64) -> String {
    value.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_comma_decimal() {
        assert_eq!(parse_operand("1,5"), Ok(1.5));
        assert_eq!(parse_operand("0,25"), Ok(0.25));
        assert_eq!(parse_operand("42"), Ok(42.0));
    }

    #[test]
    fn test_parse_dot_decimal_from_previous_result() {
        assert_eq!(parse_operand("8.5"), Ok(8.5));
        assert_eq!(parse_operand("-3.25"), Ok(-3.25));
    }

    #[test]
    fn test_parse_invalid() {
        assert_eq!(parse_operand(""), Err(CalcError::InvalidValue));
        assert_eq!(parse_operand(","), Err(CalcError::InvalidValue));
        // A "," typed after a dot-decimal running operand.
        assert_eq!(parse_operand("8.5,"), Err(CalcError::InvalidValue));
    }

    #[test]
    fn test_format_display_two_fraction_digits() {
        assert_eq!(format_display(8.0), "8,00");
        assert_eq!(format_display(2.5), "2,50");
        assert_eq!(format_display(0.0), "0,00");
    }

    #[test]
    fn test_format_display_grouping() {
        assert_eq!(format_display(1234.5), "1.234,50");
        assert_eq!(format_display(1_000_000.0), "1.000.000,00");
        assert_eq!(format_display(999.99), "999,99");
    }

    #[test]
    fn test_format_display_negative() {
        assert_eq!(format_display(-3.0), "-3,00");
        assert_eq!(format_display(-1234.5), "-1.234,50");
    }

    #[test]
    fn test_format_operand_shortest_form() {
        assert_eq!(format_operand(8.0), "8");
        assert_eq!(format_operand(8.5), "8.5");
        assert_eq!(format_operand(-3.25), "-3.25");
    }
}
