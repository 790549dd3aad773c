//! Parsing of user-entered values.

use crate::error::{BstError, Result};

/// Parses a comma-separated list of integers.
///
/// Entries that are not integers or fall outside `[min, max]` are dropped.
/// Fails only if nothing usable remains.
pub fn parse_values(text: &str, min: i32, max: i32) -> Result<Vec<i32>> {
    let values: Vec<i32> = text
        .split(',')
        .filter_map(|part| part.trim().parse::<i32>().ok())
        .filter(|v| (min..=max).contains(v))
        .collect();

    if values.is_empty() {
        return Err(BstError::NoValidValues);
    }
    Ok(values)
}

/// Parses a single search target.
pub fn parse_search_value(text: &str, min: i32, max: i32) -> Result<i32> {
    let trimmed = text.trim();
    let value = trimmed
        .parse::<i32>()
        .map_err(|_| BstError::InvalidValue(trimmed.to_string()))?;
    if !(min..=max).contains(&value) {
        return Err(BstError::ValueOutOfRange { value, min, max });
    }
    Ok(value)
}
