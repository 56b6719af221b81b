use crate::formatting::fixed::to_fixed;

/// Digits after the decimal point for numeric values
const NUMBER_DIGITS: usize = 2;

/// A value that is a string, a number or a boolean
#[derive(Debug, Clone, PartialEq)]
pub enum UnionData {
    Text(String),
    Number(f64),
    Bool(bool),
}

impl From<&str> for UnionData {
    fn from(value: &str) -> Self {
        UnionData::Text(value.to_string())
    }
}

impl From<String> for UnionData {
    fn from(value: String) -> Self {
        UnionData::Text(value)
    }
}

impl From<f64> for UnionData {
    fn from(value: f64) -> Self {
        UnionData::Number(value)
    }
}

impl From<i32> for UnionData {
    fn from(value: i32) -> Self {
        UnionData::Number(f64::from(value))
    }
}

impl From<bool> for UnionData {
    fn from(value: bool) -> Self {
        UnionData::Bool(value)
    }
}

/// Render a union value as text.
///
/// Strings are upper-cased, numbers get two decimal places and booleans
/// print as `true`/`false`.
pub fn handle_union_data(data: impl Into<UnionData>) -> String {
    match data.into() {
        UnionData::Text(s) => s.to_uppercase(),
        UnionData::Number(n) => to_fixed(n, NUMBER_DIGITS),
        UnionData::Bool(b) => b.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_text_is_upper_cased() {
        assert_eq!(handle_union_data("ab"), "AB");
        assert_eq!(handle_union_data(String::from("Hello, World")), "HELLO, WORLD");
        assert_eq!(handle_union_data(""), "");
    }

    #[test]
    fn test_numbers_get_two_decimals() {
        assert_eq!(handle_union_data(3), "3.00");
        assert_eq!(handle_union_data(3.1), "3.10");
        assert_eq!(handle_union_data(-7), "-7.00");
        assert_eq!(handle_union_data(0.125), "0.13");
        assert_eq!(handle_union_data(1.005), "1.00");
    }

    #[test]
    fn test_booleans() {
        assert_eq!(handle_union_data(true), "true");
        assert_eq!(handle_union_data(false), "false");
    }

    #[test]
    fn test_explicit_variants() {
        assert_eq!(handle_union_data(UnionData::Number(42.0)), "42.00");
        assert_eq!(handle_union_data(UnionData::Text("x".into())), "X");
    }
}
