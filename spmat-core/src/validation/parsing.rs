//! Integer parsing for header counts and entry fields
//!
//! Fields use leading-integer extraction: optional whitespace, an optional
//! sign, then base-10 digits. Anything after the digits is ignored, so `"12a"`
//! reads as 12 while `"a12"` is rejected.

use crate::error::FormatIssue;
use crate::traits::MatrixElement;

/// Extract the leading signed integer of a field
///
/// Returns the slice holding the sign and digits, or `None` when the field
/// does not begin with at least one digit after the optional sign.
pub fn leading_integer(field: &str) -> Option<&str> {
    let field = field.trim_start();
    let bytes = field.as_bytes();

    let sign_len = match bytes.first() {
        Some(b'-') | Some(b'+') => 1,
        _ => 0,
    };
    let digit_len = bytes[sign_len..]
        .iter()
        .take_while(|b| b.is_ascii_digit())
        .count();

    if digit_len == 0 {
        return None;
    }

    Some(&field[..sign_len + digit_len])
}

/// Parse a leading integer as a wide signed number
fn parse_wide(field: &str) -> Result<Option<i128>, FormatIssue> {
    let digits = leading_integer(field).ok_or(FormatIssue::InvalidField)?;
    // Only overflow can fail here, the prefix is already sign + digits
    Ok(digits.parse::<i128>().ok())
}

/// Parse an entry row or column index
pub fn parse_index(field: &str) -> Result<usize, FormatIssue> {
    let wide = parse_wide(field)?.ok_or(FormatIssue::NegativeIndex)?;
    usize::try_from(wide).map_err(|_| FormatIssue::NegativeIndex)
}

/// Parse an entry value into the element type
pub fn parse_value<T: MatrixElement>(field: &str) -> Result<T, FormatIssue> {
    let digits = leading_integer(field).ok_or(FormatIssue::InvalidField)?;
    T::parse_integer(digits).ok_or(FormatIssue::ValueOutOfRange)
}

/// Parse the count that follows `rows=` or `cols=`
pub fn parse_count(field: &str) -> Result<usize, FormatIssue> {
    let wide = parse_wide(field)
        .map_err(|_| FormatIssue::InvalidDimension)?
        .ok_or(FormatIssue::InvalidDimension)?;
    usize::try_from(wide).map_err(|_| FormatIssue::InvalidDimension)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_leading_integer() {
        assert_eq!(leading_integer("42"), Some("42"));
        assert_eq!(leading_integer("  -7"), Some("-7"));
        assert_eq!(leading_integer("+3"), Some("+3"));
        assert_eq!(leading_integer("12abc"), Some("12"));
        assert_eq!(leading_integer("1.5"), Some("1"));

        // Invalid cases
        assert_eq!(leading_integer(""), None);
        assert_eq!(leading_integer("abc"), None);
        assert_eq!(leading_integer("-"), None);
        assert_eq!(leading_integer("+-1"), None);
        assert_eq!(leading_integer("a12"), None);
    }

    #[test]
    fn test_parse_index() {
        assert_eq!(parse_index("0"), Ok(0));
        assert_eq!(parse_index(" 17 "), Ok(17));
        assert_eq!(parse_index("3x"), Ok(3));
        assert_eq!(parse_index("-0"), Ok(0));

        assert_eq!(parse_index("-1"), Err(FormatIssue::NegativeIndex));
        assert_eq!(parse_index("x"), Err(FormatIssue::InvalidField));
        assert_eq!(
            parse_index("999999999999999999999999999999999999999999"),
            Err(FormatIssue::NegativeIndex)
        );
    }

    #[test]
    fn test_parse_value() {
        assert_eq!(parse_value::<i64>("-12"), Ok(-12));
        assert_eq!(parse_value::<i64>("+5"), Ok(5));
        assert_eq!(parse_value::<i32>("7 apples"), Ok(7));

        assert_eq!(parse_value::<i64>(""), Err(FormatIssue::InvalidField));
        assert_eq!(
            parse_value::<i32>("3000000000"),
            Err(FormatIssue::ValueOutOfRange)
        );
    }

    #[test]
    fn test_parse_count() {
        assert_eq!(parse_count("3"), Ok(3));
        assert_eq!(parse_count(" 10"), Ok(10));
        assert_eq!(parse_count("4rows"), Ok(4));

        assert_eq!(parse_count(""), Err(FormatIssue::InvalidDimension));
        assert_eq!(parse_count("abc"), Err(FormatIssue::InvalidDimension));
        assert_eq!(parse_count("-2"), Err(FormatIssue::InvalidDimension));
    }
}
