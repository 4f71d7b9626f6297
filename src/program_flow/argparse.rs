use clap::ArgMatches;

use crate::error::Error;
use crate::set::Subset;

pub const MAX_SET_SIZE_ARG: &str = "max-set-size";

/// The largest base set a `Subset` bitmask can describe.
pub const MAX_SET_SIZE: usize = Subset::CAPACITY;

pub fn extract_max_set_size(matches: &ArgMatches) -> Result<usize, Error> {
    parse_max_set_size(matches.value_of(MAX_SET_SIZE_ARG))
}

/// Validates the raw `--max-set-size` value.
///
/// Surrounding whitespace is ignored, and integral decimal spellings such as `2.0` or `1e1`
/// are accepted as the integers they denote.
pub fn parse_max_set_size(raw: Option<&str>) -> Result<usize, Error> {
    let raw = match raw {
        None => return Err(required_error()),
        Some(raw) => raw.trim()
    };
    if raw.is_empty() {
        return Err(non_negative_integer_error());
    }
    let size = match raw.parse::<usize>() {
        Ok(size) => size,
        Err(_) => parse_integral_float(raw)?
    };
    if size > MAX_SET_SIZE {
        return Err(Error::InvalidArgument(
            format!("Argument \"{}\" must be at most {}.", MAX_SET_SIZE_ARG, MAX_SET_SIZE)));
    }
    Ok(size)
}

fn parse_integral_float(raw: &str) -> Result<usize, Error> {
    let value = match raw.parse::<f64>() {
        Err(_) => return Err(non_negative_integer_error()),
        Ok(value) => value
    };
    if !value.is_finite() || value.fract() != 0. || value < 0. {
        return Err(non_negative_integer_error());
    }
    if value > MAX_SET_SIZE as f64 {
        // anything this large is rejected by the caller's range check
        return Ok(MAX_SET_SIZE + 1);
    }
    Ok(value as usize)
}

fn required_error() -> Error {
    Error::InvalidArgument(format!("Argument \"{}\" is required.", MAX_SET_SIZE_ARG))
}

fn non_negative_integer_error() -> Error {
    Error::InvalidArgument(format!("Argument \"{}\" must be a non-negative integer.", MAX_SET_SIZE_ARG))
}
