use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::geometry::{Axis, Dims};

/// Raw item dimensions as typed into a form, possibly incomplete
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ItemInput {
    pub length: String,
    pub width: String,
    pub height: String,
}

/// Errors for item input that is filled in but cannot be used as a dimension.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum InputError {
    #[error("{axis} is not a number: {raw:?}")]
    NotANumber { axis: Axis, raw: String },

    #[error("{axis} must not be negative: {value}")]
    InvalidDimension { axis: Axis, value: f64 },
}

impl ItemInput {
    pub fn new(length: impl Into<String>, width: impl Into<String>, height: impl Into<String>) -> Self {
        ItemInput {
            length: length.into(),
            width: width.into(),
            height: height.into(),
        }
    }

    pub fn field(&self, axis: Axis) -> &str {
        match axis {
            Axis::Length => &self.length,
            Axis::Width => &self.width,
            Axis::Height => &self.height,
        }
    }
}

/// Parses a single dimension field.
///
/// An empty (or blank) field yields `Ok(None)`.
/// Anything that is not a finite number is rejected, as are negative values. Zero is accepted.
pub fn parse_dimension(axis: Axis, raw: &str) -> Result<Option<f64>, InputError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Ok(None);
    }
    let value = match trimmed.parse::<f64>() {
        Ok(v) if v.is_finite() => v,
        _ => {
            return Err(InputError::NotANumber {
                axis,
                raw: raw.to_string(),
            });
        }
    };
    if value < 0.0 {
        return Err(InputError::InvalidDimension { axis, value });
    }
    // -0.0 becomes 0.0
    Ok(Some(value + 0.0))
}

/// Parses all three fields of `input`.
///
/// Returns `Ok(None)` if any field is empty. Otherwise the first invalid field (length, width, height) is reported.
pub fn parse_item(input: &ItemInput) -> Result<Option<Dims>, InputError> {
    let mut values = [0.0; 3];
    let mut complete = true;
    for (i, axis) in Axis::ALL.into_iter().enumerate() {
        match parse_dimension(axis, input.field(axis))? {
            Some(v) => values[i] = v,
            None => complete = false,
        }
    }
    Ok(complete.then_some(Dims::from(values)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use float_cmp::approx_eq;
    use test_case::test_case;

    #[test_case("12.5", 12.5; "decimal")]
    #[test_case(" 40 ", 40.0; "surrounding whitespace")]
    #[test_case("0", 0.0; "zero")]
    #[test_case("1e2", 100.0; "exponent")]
    fn valid_dimension(raw: &str, expected: f64) {
        let parsed = parse_dimension(Axis::Length, raw).unwrap().unwrap();
        assert!(approx_eq!(f64, parsed, expected));
    }

    #[test_case(""; "empty")]
    #[test_case("   "; "blank")]
    fn missing_dimension(raw: &str) {
        assert_eq!(parse_dimension(Axis::Width, raw), Ok(None));
    }

    #[test_case("abc"; "letters")]
    #[test_case("12cm"; "with unit")]
    #[test_case("NaN"; "nan")]
    #[test_case("inf"; "infinite")]
    fn not_a_number(raw: &str) {
        assert_eq!(
            parse_dimension(Axis::Height, raw),
            Err(InputError::NotANumber {
                axis: Axis::Height,
                raw: raw.to_string()
            })
        );
    }

    #[test_case("-0"; "integer")]
    #[test_case("-0.0"; "decimal")]
    fn negative_zero_is_zero(raw: &str) {
        let parsed = parse_dimension(Axis::Width, raw).unwrap().unwrap();
        assert!(parsed.is_sign_positive());
        assert_eq!(Dims::new(parsed, 1.0, 1.0).to_string(), "0 x 1 x 1");
    }

    #[test]
    fn negative_is_invalid() {
        assert_eq!(
            parse_dimension(Axis::Length, "-3"),
            Err(InputError::InvalidDimension {
                axis: Axis::Length,
                value: -3.0
            })
        );
    }

    #[test]
    fn parse_complete_item() {
        let dims = parse_item(&ItemInput::new("100", "40", "60")).unwrap();
        assert_eq!(dims, Some(Dims::new(100.0, 40.0, 60.0)));
    }

    #[test]
    fn incomplete_item_is_none() {
        assert_eq!(parse_item(&ItemInput::new("100", "40", "")), Ok(None));
        assert_eq!(parse_item(&ItemInput::default()), Ok(None));
    }

    #[test]
    fn invalid_field_wins_over_missing_one() {
        let err = parse_item(&ItemInput::new("", "x", "")).unwrap_err();
        assert!(matches!(err, InputError::NotANumber { axis: Axis::Width, .. }));
        assert_eq!(err.to_string(), "width is not a number: \"x\"");
    }
}
