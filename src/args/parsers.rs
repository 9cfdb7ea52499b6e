use crate::error::ValidationError;

use super::types::PositiveU64;

pub(super) fn parse_positive_u64(s: &str) -> Result<PositiveU64, ValidationError> {
    s.parse::<PositiveU64>()
}

/// Threshold bounds must be finite and strictly positive.
pub(super) fn parse_threshold(s: &str) -> Result<f64, ValidationError> {
    let value: f64 = s
        .trim()
        .parse()
        .map_err(|err| ValidationError::InvalidThreshold {
            value: s.to_owned(),
            source: err,
        })?;
    if !value.is_finite() || value <= 0.0 {
        return Err(ValidationError::ThresholdNotPositive {
            value: s.to_owned(),
        });
    }
    Ok(value)
}
