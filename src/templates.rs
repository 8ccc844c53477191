use std::collections::HashMap;

use anyhow::{Context, Result};
use chrono::NaiveDateTime;
use tera::{Tera, Value};

const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Parses every `.html` file under `dir` once and registers the presentation filters.
pub fn load_templates(dir: &str) -> Result<Tera> {
    let pattern = format!("{}/**/*.html", dir.trim_end_matches('/'));
    let mut tera =
        Tera::new(&pattern).with_context(|| format!("Failed to parse templates in {}", dir))?;
    tera.register_filter("splitlines", splitlines_filter);
    tera.register_filter("date", date_filter);
    Ok(tera)
}

/// One entry per `\n`-separated segment, empty ones included.
pub fn split_lines(body: &str) -> Vec<&str> {
    body.split('\n').collect()
}

pub fn format_timestamp(timestamp: &NaiveDateTime) -> String {
    timestamp.format(TIMESTAMP_FORMAT).to_string()
}

fn splitlines_filter(value: &Value, _: &HashMap<String, Value>) -> tera::Result<Value> {
    let body = value
        .as_str()
        .ok_or_else(|| tera::Error::msg("splitlines expects a string"))?;
    Ok(Value::from(split_lines(body)))
}

// Timestamps reach the context through serde, so they arrive as ISO 8601 strings.
fn date_filter(value: &Value, _: &HashMap<String, Value>) -> tera::Result<Value> {
    let raw = value
        .as_str()
        .ok_or_else(|| tera::Error::msg("date expects a timestamp string"))?;
    let timestamp = raw
        .parse::<NaiveDateTime>()
        .map_err(|e| tera::Error::msg(format!("date could not parse {}: {}", raw, e)))?;
    Ok(Value::from(format_timestamp(&timestamp)))
}
