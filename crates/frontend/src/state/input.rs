//! Normalisation of the amount inputs (budget, target profit).

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Введите сумму")]
    Empty,
    #[error("Сумма должна быть больше нуля")]
    NotPositive,
}

/// Keep ASCII digits only: "700 000 ₸" -> "700000"
pub fn digits_only(raw: &str) -> String {
    raw.chars().filter(|c| c.is_ascii_digit()).collect()
}

/// Parse a user-typed amount. Anything that isn't a positive number is rejected
/// before a request is made.
pub fn normalize_amount(raw: &str) -> Result<f64, ValidationError> {
    let digits = digits_only(raw);
    if digits.is_empty() {
        return Err(ValidationError::Empty);
    }
    match digits.parse::<f64>() {
        Ok(v) if v > 0.0 && v.is_finite() => Ok(v),
        _ => Err(ValidationError::NotPositive),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_digits_only() {
        assert_eq!(digits_only("700 000"), "700000");
        assert_eq!(digits_only("1\u{a0}500\u{a0}000₸"), "1500000");
        assert_eq!(digits_only("abc"), "");
        // decimal separators are dropped too, as on the input itself
        assert_eq!(digits_only("12.5"), "125");
    }

    #[test]
    fn test_normalize_amount() {
        assert_eq!(normalize_amount("700 000"), Ok(700000.0));
        assert_eq!(normalize_amount("abc"), Err(ValidationError::Empty));
        assert_eq!(normalize_amount(""), Err(ValidationError::Empty));
        assert_eq!(normalize_amount("000"), Err(ValidationError::NotPositive));
    }
}
