//! Tera filters available to report templates.

use std::collections::HashMap;
use std::fmt::Write;

use chrono::{DateTime, FixedOffset, NaiveDateTime};
use tera::{Error, Result, Value};

pub const DEFAULT_DATETIME_FORMAT: &str = "%d/%m/%Y @ %H:%M:%S";
/// Placeholder printed for missing values.
pub const NONE_PLACEHOLDER: &str = "-";

fn format_arg(args: &HashMap<String, Value>) -> Result<String> {
    match args.get("format") {
        Some(Value::String(format)) => Ok(format.clone()),
        Some(_) => Err(Error::msg("`format` must be a string")),
        None => Ok(DEFAULT_DATETIME_FORMAT.to_string()),
    }
}

/// Formats without panicking on invalid strftime specifiers.
fn format_datetime<D: std::fmt::Display>(formatted: D, format: &str) -> Result<Value> {
    let mut out = String::new();
    write!(out, "{formatted}")
        .map_err(|_| Error::msg(format!("invalid datetime format {format}")))?;
    Ok(Value::String(out))
}

/// Formats a serialized datetime; empty or unparsable input yields null.
pub fn dt_format(value: &Value, args: &HashMap<String, Value>) -> Result<Value> {
    let format = format_arg(args)?;
    let Some(raw) = value.as_str().filter(|s| !s.is_empty()) else {
        return Ok(Value::Null);
    };

    let parsed = NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.f")
        .or_else(|_| DateTime::parse_from_rfc3339(raw).map(|dt| dt.naive_local()));

    match parsed {
        Ok(dt) => format_datetime(dt.format(&format), &format),
        Err(_) => Ok(Value::Null),
    }
}

/// Builds a filter formatting unix timestamps in the given offset.
///
/// Zero and non-integer input yield null.
pub fn ts_format(
    offset: FixedOffset,
) -> impl Fn(&Value, &HashMap<String, Value>) -> Result<Value> + Send + Sync + 'static {
    move |value: &Value, args: &HashMap<String, Value>| -> Result<Value> {
        let format = format_arg(args)?;
        let Some(ts) = value.as_i64().filter(|ts| *ts != 0) else {
            return Ok(Value::Null);
        };
        match DateTime::from_timestamp(ts, 0) {
            Some(dt) => format_datetime(dt.with_timezone(&offset).format(&format), &format),
            None => Ok(Value::Null),
        }
    }
}

fn is_falsy(value: &Value) -> bool {
    match value {
        Value::Null => true,
        Value::Bool(b) => !b,
        Value::Number(n) => n.as_f64() == Some(0.0),
        Value::String(s) => s.is_empty(),
        Value::Array(a) => a.is_empty(),
        Value::Object(o) => o.is_empty(),
    }
}

/// Replaces missing or empty values with a placeholder.
pub fn handle_none(value: &Value, _args: &HashMap<String, Value>) -> Result<Value> {
    if is_falsy(value) {
        Ok(Value::String(NONE_PLACEHOLDER.to_string()))
    } else {
        Ok(value.clone())
    }
}

/// Left-justifies the value in a column of `width` characters, truncating overflow.
pub fn ljust(value: &Value, args: &HashMap<String, Value>) -> Result<Value> {
    let width = args
        .get("width")
        .and_then(Value::as_u64)
        .ok_or_else(|| Error::msg("`ljust` requires a non-negative integer `width`"))?
        as usize;

    let text = match value {
        Value::String(s) => s.clone(),
        Value::Null => String::new(),
        other => other.to_string(),
    };

    let mut out: String = text.chars().take(width).collect();
    let len = out.chars().count();
    out.extend(std::iter::repeat_n(' ', width - len));
    Ok(Value::String(out))
}
