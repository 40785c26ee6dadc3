use crate::utils::error::{InventoryError, Result};
use std::fmt::Display;
use std::str::FromStr;

/// Parses a user-entered field, surrounding whitespace ignored. Empty input
/// and parse failures carry the field name so the report line can name the
/// offending prompt.
pub fn parse_field<T>(field_name: &str, raw: &str) -> Result<T>
where
    T: FromStr,
    T::Err: Display,
{
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(InventoryError::InvalidInputError {
            field: field_name.to_string(),
            value: raw.to_string(),
            reason: "value cannot be empty".to_string(),
        });
    }

    trimmed
        .parse()
        .map_err(|e: T::Err| InventoryError::InvalidInputError {
            field: field_name.to_string(),
            value: raw.to_string(),
            reason: e.to_string(),
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal::Decimal;

    #[test]
    fn test_parse_integer_fields() {
        assert_eq!(parse_field::<u32>("Mobile ID", "201").unwrap(), 201);
        assert_eq!(parse_field::<u16>("Launched Year", " 2021 ").unwrap(), 2021);
        assert!(parse_field::<u32>("Mobile ID", "abc").is_err());
        assert!(parse_field::<u16>("Launched Year", "-5").is_err());
    }

    #[test]
    fn test_parse_price() {
        assert_eq!(
            parse_field::<Decimal>("Price", "799.99").unwrap(),
            "799.99".parse::<Decimal>().unwrap()
        );
        assert!(parse_field::<Decimal>("Price", "free").is_err());
    }

    #[test]
    fn test_empty_input_names_the_field() {
        let err = parse_field::<u32>("Mobile ID", "").unwrap_err();
        assert!(err.to_string().contains("Mobile ID"));
    }
}
