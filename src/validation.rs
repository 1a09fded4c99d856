use lazy_static::lazy_static;
use regex::Regex;

use crate::error::ValidationError;

pub const MIN_PHONE_DIGITS: usize = 3;

lazy_static! {
    static ref NAME_PATTERN: Regex = Regex::new(r"^[a-zA-Z\t\n\f\r ]+$").unwrap();
}

/// ASCII letters and ASCII whitespace only.
pub fn validate_name(name: &str) -> Result<(), ValidationError> {
    if NAME_PATTERN.is_match(name) {
        Ok(())
    } else {
        Err(ValidationError::InvalidName {
            value: name.to_string(),
        })
    }
}

pub fn validate_address(address: &str) -> Result<(), ValidationError> {
    if address.is_empty() {
        return Err(ValidationError::EmptyAddress);
    }
    Ok(())
}

/// Parses a phone number. Numeric check first, then length.
pub fn validate_phone(phone: &str) -> Result<u64, ValidationError> {
    // u64::from_str accepts a leading '+', which is not a digit.
    if phone.is_empty() || !phone.bytes().all(|b| b.is_ascii_digit()) {
        return Err(ValidationError::PhoneNotNumeric {
            value: phone.to_string(),
        });
    }

    let number = phone
        .parse::<u64>()
        .map_err(|_| ValidationError::PhoneNotNumeric {
            value: phone.to_string(),
        })?;

    if phone.len() < MIN_PHONE_DIGITS {
        return Err(ValidationError::PhoneTooShort {
            value: phone.to_string(),
            min: MIN_PHONE_DIGITS,
        });
    }

    Ok(number)
}

pub fn parse_menu_choice(input: &str) -> Result<i64, ValidationError> {
    input
        .parse::<i64>()
        .map_err(|_| ValidationError::MenuNotNumeric {
            value: input.to_string(),
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_name_letters_and_spaces() {
        assert!(validate_name("Ana").is_ok());
        assert!(validate_name("Ana Maria").is_ok());
        assert!(validate_name("Juan1").is_err());
        assert!(validate_name("").is_err());
        assert!(validate_name("O'Neil").is_err());
    }

    #[test]
    fn test_name_rejects_non_ascii_whitespace() {
        for name in ["Ana\u{00A0}Maria", "Ana\u{000B}Maria", "Ana\u{2003}Maria"] {
            assert!(
                matches!(validate_name(name), Err(ValidationError::InvalidName { .. })),
                "{name:?} should be rejected"
            );
        }
        assert!(validate_name("Ana\tMaria").is_ok());
    }

    #[test]
    fn test_address_must_not_be_empty() {
        assert_eq!(validate_address(""), Err(ValidationError::EmptyAddress));
        assert!(validate_address("Calle 5 #12").is_ok());
    }

    #[test]
    fn test_phone_minimum_digits() {
        assert!(matches!(
            validate_phone("12"),
            Err(ValidationError::PhoneTooShort { min: 3, .. })
        ));
        assert_eq!(validate_phone("123"), Ok(123));
        assert_eq!(validate_phone("4455"), Ok(4455));
    }

    #[test]
    fn test_phone_must_be_numeric() {
        for bad in ["abc", "12a", "", "+123", "-123", "1 23"] {
            assert!(
                matches!(validate_phone(bad), Err(ValidationError::PhoneNotNumeric { .. })),
                "{bad:?} should be rejected as non-numeric"
            );
        }
    }

    #[test]
    fn test_phone_overflow_is_not_numeric() {
        assert!(matches!(
            validate_phone("999999999999999999999999"),
            Err(ValidationError::PhoneNotNumeric { .. })
        ));
    }

    #[test]
    fn test_menu_choice_parsing() {
        assert_eq!(parse_menu_choice("1"), Ok(1));
        assert_eq!(parse_menu_choice("9"), Ok(9));
        assert_eq!(parse_menu_choice("-2"), Ok(-2));
        assert!(matches!(
            parse_menu_choice("uno"),
            Err(ValidationError::MenuNotNumeric { .. })
        ));
    }
}
