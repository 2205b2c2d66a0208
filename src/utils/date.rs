use crate::errors::{AppError, AppResult};
use chrono::NaiveDate;

pub fn parse_date(s: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(s, "%Y-%m-%d").ok()
}

pub fn parse_optional_date(input: Option<&String>) -> AppResult<Option<NaiveDate>> {
    if let Some(s) = input {
        let d = parse_date(s).ok_or_else(|| AppError::InvalidDate(s.to_string()))?;
        Ok(Some(d))
    } else {
        Ok(None)
    }
}
