//! Request utilities for HTTP endpoints.

use std::num::IntErrorKind;

use hyper::{body::Bytes, Response};
use percent_encoding::percent_decode_str;

use crate::router::RouterError;

/// Type alias for matchit parameters with explicit lifetimes
pub type MatchitParams<'a, 'b> = matchit::Params<'a, 'b>;

/// Decoded query string arguments.
///
/// Lookups return the first occurrence of a key. A key written without `=`
/// is present with an empty value.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct QueryArgs {
    pairs: Vec<(String, String)>,
}

impl QueryArgs {
    /// Parse query parameters from URL query string.
    pub fn parse(query_str: Option<&str>) -> Self {
        let pairs = query_str
            .unwrap_or_default()
            .split('&')
            .filter(|pair| !pair.is_empty())
            .map(|pair| match pair.split_once('=') {
                Some((key, value)) => (decode_component(key), decode_component(value)),
                None => (decode_component(pair), String::new()),
            })
            .collect();
        Self { pairs }
    }

    /// Returns the first value supplied for `key`.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.pairs
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }
}

/// Decodes one `application/x-www-form-urlencoded` component.
fn decode_component(raw: &str) -> String {
    let spaced = raw.replace('+', " ");
    percent_decode_str(&spaced).decode_utf8_lossy().into_owned()
}

/// Reads and percent-decodes a path parameter.
pub fn path_param(
    params: &MatchitParams<'_, '_>,
    name: &'static str,
) -> Result<String, RouterError> {
    params
        .get(name)
        .map(|raw| percent_decode_str(raw).decode_utf8_lossy().into_owned())
        .ok_or_else(|| RouterError::InternalError(format!("Missing path parameter '{}'", name)))
}

/// Integer argument, possibly outside the range a record field can hold.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IntArg {
    /// Fits in an `i64`
    Value(i64),
    /// Larger than `i64::MAX`
    AboveRange,
    /// Smaller than `i64::MIN`
    BelowRange,
}

impl IntArg {
    /// Returns the value when it fits in an `i64`.
    pub fn value(self) -> Option<i64> {
        match self {
            IntArg::Value(value) => Some(value),
            IntArg::AboveRange | IntArg::BelowRange => None,
        }
    }

    /// True when `n` is greater than or equal to this integer.
    pub fn is_reached_by(self, n: i64) -> bool {
        match self {
            IntArg::Value(bound) => n >= bound,
            IntArg::AboveRange => false,
            IntArg::BelowRange => true,
        }
    }
}

/// Parses an integer argument.
///
/// Surrounding whitespace is ignored and single underscores may separate
/// digits (`1_000`). Integers of any size are accepted; those that do not
/// fit in an `i64` come back as [`IntArg::AboveRange`] or
/// [`IntArg::BelowRange`]. Anything that is not a base-10 integer fails with
/// [`RouterError::InvalidParameter`], which the router answers with a 500.
pub fn parse_int(name: &'static str, raw: &str) -> Result<IntArg, RouterError> {
    let invalid = || RouterError::InvalidParameter {
        name,
        value: raw.to_string(),
    };
    let digits = strip_digit_separators(raw.trim()).ok_or_else(invalid)?;
    match digits.parse::<i64>() {
        Ok(value) => Ok(IntArg::Value(value)),
        Err(e) => match e.kind() {
            IntErrorKind::PosOverflow => Ok(IntArg::AboveRange),
            IntErrorKind::NegOverflow => Ok(IntArg::BelowRange),
            _ => Err(invalid()),
        },
    }
}

/// Removes underscores that sit between two digits.
///
/// Returns `None` for leading, trailing or doubled underscores.
fn strip_digit_separators(raw: &str) -> Option<String> {
    if !raw.contains('_') {
        return Some(raw.to_string());
    }
    let unsigned = raw.trim_start_matches(['+', '-']);
    let all_digit_groups = unsigned
        .split('_')
        .all(|group| !group.is_empty() && group.bytes().all(|b| b.is_ascii_digit()));
    if all_digit_groups {
        Some(raw.replace('_', ""))
    } else {
        None
    }
}

/// Reads the `id` path parameter as an integer.
///
/// Returns `Ok(None)` for integers outside the `i64` range, which can never
/// name a stored record.
pub fn id_param(params: &MatchitParams<'_, '_>) -> Result<Option<i64>, RouterError> {
    let raw = path_param(params, "id")?;
    let id = parse_int("id", &raw)?.value();
    Ok(id)
}

/// Helper to build HTTP response with proper error handling
pub fn build_response(status: u16, json: Vec<u8>) -> Result<Response<Bytes>, RouterError> {
    Response::builder()
        .status(status)
        .header("Content-Type", "application/json")
        .body(Bytes::from(json))
        .map_err(|e| RouterError::InternalError(format!("Failed to build response: {}", e)))
}
