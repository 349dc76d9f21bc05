//! Shared range-validation helpers used by all section validators.

/// Push an error if `value` is outside `[min, max]`.
pub(crate) fn validate_range(errors: &mut Vec<String>, name: &str, value: u32, min: u32, max: u32) {
    if value < min || value > max {
        errors.push(format!("{name} = {value} is out of range [{min}, {max}]"));
    }
}

/// Push an error if `low` exceeds `high`.
pub(crate) fn validate_ordered(
    errors: &mut Vec<String>,
    low_name: &str,
    low: u32,
    high_name: &str,
    high: u32,
) {
    if low > high {
        errors.push(format!("{low_name} = {low} exceeds {high_name} = {high}"));
    }
}
