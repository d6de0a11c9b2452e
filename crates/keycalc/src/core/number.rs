//! Display text <-> f64 conversion
//!
//! Results are formatted with the ECMAScript Number-to-String rules: shortest
//! round-trip digits, plain notation for decimal exponents in `(-6, 21]` and
//! exponent notation outside it.

use crate::core::{CalcError, CalcResult};

/// Largest decimal exponent printed without exponent notation
const MAX_PLAIN_EXPONENT: i32 = 21;
/// Smallest (exclusive) decimal exponent printed without exponent notation
const MIN_PLAIN_EXPONENT: i32 = -6;

/// Formats a computed result for the display
#[must_use]
pub fn format_number(value: f64) -> String {
    if value.is_nan() {
        return "NaN".to_string();
    }
    if value.is_infinite() {
        return if value > 0.0 { "Infinity" } else { "-Infinity" }.to_string();
    }
    // Also folds -0 into "0"
    if value == 0.0 {
        return "0".to_string();
    }

    // `{:e}` yields the shortest round-trip digits, e.g. "1.2345e3"
    let scientific = format!("{:e}", value.abs());
    let Some((mantissa, exponent)) = scientific.split_once('e') else {
        return value.to_string();
    };
    let Ok(exponent) = exponent.parse::<i32>() else {
        return value.to_string();
    };

    let digits: String = mantissa.chars().filter(char::is_ascii_digit).collect();
    let k = digits.len() as i32;
    // Position of the decimal point relative to the first digit
    let n = exponent + 1;

    let mut out = String::with_capacity(digits.len() + 8);
    if value < 0.0 {
        out.push('-');
    }

    if k <= n && n <= MAX_PLAIN_EXPONENT {
        out.push_str(&digits);
        out.push_str(&"0".repeat((n - k) as usize));
    } else if 0 < n && n <= MAX_PLAIN_EXPONENT {
        let (int_part, frac_part) = digits.split_at(n as usize);
        out.push_str(int_part);
        out.push('.');
        out.push_str(frac_part);
    } else if MIN_PLAIN_EXPONENT < n && n <= 0 {
        out.push_str("0.");
        out.push_str(&"0".repeat((-n) as usize));
        out.push_str(&digits);
    } else {
        let (lead, rest) = digits.split_at(1);
        out.push_str(lead);
        if !rest.is_empty() {
            out.push('.');
            out.push_str(rest);
        }
        let e = n - 1;
        out.push('e');
        out.push(if e >= 0 { '+' } else { '-' });
        out.push_str(&e.abs().to_string());
    }

    out
}

/// Reads the display back as a number
///
/// Accepts everything [`format_number`] produces, including `Infinity` and
/// `NaN`, as well as partially typed entries such as `"3."`.
pub fn parse_display(display: &str) -> CalcResult<f64> {
    display
        .parse::<f64>()
        .map_err(|_| CalcError::MalformedDisplay(display.to_string()))
}

/// Returns true if `text` is a number the user could have typed
///
/// Grammar: `0 | [1-9][0-9]* | (0|[1-9][0-9]*) '.' [0-9]*`
#[must_use]
pub fn is_entry_literal(text: &str) -> bool {
    let (int_part, frac_part) = match text.split_once('.') {
        Some((int_part, frac_part)) => (int_part, Some(frac_part)),
        None => (text, None),
    };

    let int_ok = match int_part.as_bytes() {
        [b'0'] => true,
        [b'1'..=b'9', rest @ ..] => rest.iter().all(u8::is_ascii_digit),
        _ => false,
    };
    let frac_ok = frac_part.map_or(true, |f| f.bytes().all(|b| b.is_ascii_digit()));

    int_ok && frac_ok
}

#[cfg(test)]
mod tests {
    use super::*;

    // ===== format_number =====

    #[test]
    fn test_format_integers() {
        assert_eq!(format_number(7.0), "7");
        assert_eq!(format_number(42.0), "42");
        assert_eq!(format_number(-6.0), "-6");
        assert_eq!(format_number(1e20), "100000000000000000000");
    }

    #[test]
    fn test_format_fractions() {
        assert_eq!(format_number(0.5), "0.5");
        assert_eq!(format_number(3.14), "3.14");
        assert_eq!(format_number(-2.25), "-2.25");
        assert_eq!(format_number(0.000001), "0.000001");
    }

    #[test]
    fn test_format_shortest_round_trip() {
        assert_eq!(format_number(0.1 + 0.2), "0.30000000000000004");
        assert_eq!(format_number(1.0 / 3.0), "0.3333333333333333");
    }

    #[test]
    fn test_format_exponent_notation() {
        assert_eq!(format_number(1e21), "1e+21");
        assert_eq!(format_number(1.5e22), "1.5e+22");
        assert_eq!(format_number(1e-7), "1e-7");
        assert_eq!(format_number(-2.5e-8), "-2.5e-8");
    }

    #[test]
    fn test_format_special_values() {
        assert_eq!(format_number(f64::INFINITY), "Infinity");
        assert_eq!(format_number(f64::NEG_INFINITY), "-Infinity");
        assert_eq!(format_number(f64::NAN), "NaN");
        assert_eq!(format_number(-0.0), "0");
    }

    // ===== parse_display =====

    #[test]
    fn test_parse_entry_literals() {
        assert_eq!(parse_display("0"), Ok(0.0));
        assert_eq!(parse_display("0."), Ok(0.0));
        assert_eq!(parse_display("12.50"), Ok(12.5));
    }

    #[test]
    fn test_parse_formatted_results() {
        assert_eq!(parse_display("Infinity"), Ok(f64::INFINITY));
        assert_eq!(parse_display("-Infinity"), Ok(f64::NEG_INFINITY));
        assert!(parse_display("NaN").unwrap().is_nan());
        assert_eq!(parse_display("1e+21"), Ok(1e21));
        assert_eq!(parse_display("-3"), Ok(-3.0));
    }

    #[test]
    fn test_parse_rejects_garbage() {
        assert_eq!(
            parse_display("1.2.3"),
            Err(CalcError::MalformedDisplay("1.2.3".into()))
        );
        assert!(parse_display("").is_err());
    }

    // ===== is_entry_literal =====

    #[test]
    fn test_entry_literal_accepts() {
        for text in ["0", "7", "105", "0.", "0.25", "12.", "12.0"] {
            assert!(is_entry_literal(text), "{text} should be accepted");
        }
    }

    #[test]
    fn test_entry_literal_rejects() {
        for text in ["", "00", "05", "1.2.3", ".5", "-1", "1e5", "Infinity", "NaN"] {
            assert!(!is_entry_literal(text), "{text} should be rejected");
        }
    }
}
