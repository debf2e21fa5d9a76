// src/common/validation.rs

use rust_decimal::Decimal;
use validator::ValidationError;

// Custom validators for money and quantity fields (validator has no range support for Decimal)

// Exclusive upper bound; matches the NUMERIC(14, 2) columns
const MAX_UNITS: i64 = 1_000_000_000_000;

fn check_upper_bound(val: &Decimal) -> Result<(), ValidationError> {
    if *val >= Decimal::new(MAX_UNITS, 0) {
        let mut err = ValidationError::new("range");
        err.add_param("exclusive_max".into(), &MAX_UNITS);
        err.message = Some("Value is too large.".into());
        return Err(err);
    }
    Ok(())
}

pub fn validate_not_negative(val: &Decimal) -> Result<(), ValidationError> {
    if val.is_sign_negative() && !val.is_zero() {
        let mut err = ValidationError::new("range");
        err.add_param("min".into(), &0.0);
        err.message = Some("Value cannot be negative.".into());
        return Err(err);
    }
    check_upper_bound(val)
}

pub fn validate_positive(val: &Decimal) -> Result<(), ValidationError> {
    if *val <= Decimal::ZERO {
        let mut err = ValidationError::new("range");
        err.add_param("exclusive_min".into(), &0.0);
        err.message = Some("Value must be greater than zero.".into());
        return Err(err);
    }
    check_upper_bound(val)
}
