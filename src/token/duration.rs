use serde::Deserialize;

use crate::error::AppError;

pub const SECONDS_PER_DAY: i64 = 60 * 60 * 24;

/// Lifetime used when the request names neither `seconds` nor `days`.
pub const DEFAULT_DAYS: i64 = 7;

/// Raw query parameters of `GET /token/{user}`. Kept as strings so a bad
/// value can be reported against the parameter that carried it.
#[derive(Deserialize, Debug, Default)]
pub struct DurationParams {
    pub seconds: Option<String>,
    pub days: Option<String>,
}

impl DurationParams {
    /// Token lifetime in seconds. `seconds` wins over `days`; no bounds are
    /// applied, so a negative value yields an already-expired token.
    pub fn resolve(&self) -> Result<i64, AppError> {
        if let Some(raw) = &self.seconds {
            return parse_integer("seconds", raw);
        }

        let days = match &self.days {
            Some(raw) => parse_integer("days", raw)?,
            None => DEFAULT_DAYS,
        };

        days.checked_mul(SECONDS_PER_DAY)
            .ok_or(AppError::OutOfRange { param: "days" })
    }
}

fn parse_integer(param: &'static str, raw: &str) -> Result<i64, AppError> {
    raw.trim()
        .parse::<i64>()
        .map_err(|_| AppError::invalid_param(param, raw))
}
