//! Parsers for restaurant data files.
//!
//! Two formats are accepted:
//! - `*.json`: an array of restaurant objects
//! - anything else: one record per line,
//!   `name::cuisine::location::rating::delivery_speed`
//!
//! In the delimited format the delivery field may be left empty or dropped
//! entirely. Blank lines and lines starting with `#` are skipped.

use crate::error::{DataLoadError, Result};
use crate::types::*;
use std::path::Path;

const FIELD_SEPARATOR: &str = "::";
const MAX_FIELDS: usize = 5;

/// Read and parse a data file, picking the format from its extension.
pub fn parse_file(path: &Path) -> Result<Vec<Restaurant>> {
    if !path.exists() {
        return Err(DataLoadError::FileNotFound {
            path: path.display().to_string(),
        });
    }
    let content = std::fs::read_to_string(path)?;

    let is_json = path
        .extension()
        .map(|ext| ext.eq_ignore_ascii_case("json"))
        .unwrap_or(false);

    if is_json {
        parse_json(&content)
    } else {
        let file_name = path
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_else(|| path.display().to_string());
        parse_delimited(&content, &file_name)
    }
}

/// Parse a JSON array of restaurants.
pub fn parse_json(content: &str) -> Result<Vec<Restaurant>> {
    let restaurants: Vec<Restaurant> = serde_json::from_str(content)?;
    Ok(restaurants)
}

/// Parse `::`-delimited restaurant lines.
///
/// `file` is only used to label errors.
pub fn parse_delimited(content: &str, file: &str) -> Result<Vec<Restaurant>> {
    let mut restaurants = Vec::new();

    for (idx, line) in content.lines().enumerate() {
        let line_no = idx + 1;
        let line_trimmed = line.trim();
        if line_trimmed.is_empty() || line_trimmed.starts_with('#') {
            continue;
        }

        let parts: Vec<&str> = line_trimmed.split(FIELD_SEPARATOR).map(str::trim).collect();
        if parts.len() > MAX_FIELDS {
            return Err(DataLoadError::FieldCountMismatch {
                expected: MAX_FIELDS,
                found: parts.len(),
                line: line_no,
            });
        }

        let missing = |what: &str| DataLoadError::ParseError {
            file: file.to_string(),
            line: line_no,
            reason: format!("Missing {}", what),
        };

        let name = parts.first().ok_or_else(|| missing("name"))?;
        let cuisine = parts.get(1).ok_or_else(|| missing("cuisine"))?;
        let location = parts.get(2).ok_or_else(|| missing("location"))?;
        let rating = parts.get(3).ok_or_else(|| missing("rating"))?;

        let restaurant = Restaurant {
            name: name.to_string(),
            cuisine: cuisine.to_string(),
            location: location.to_string(),
            rating: rating.parse().map_err(|e| DataLoadError::ParseError {
                file: file.to_string(),
                line: line_no,
                reason: format!("Invalid rating: {}", e),
            })?,
            delivery_speed: parse_delivery_speed(parts.get(4).copied()).map_err(|e| {
                DataLoadError::ParseError {
                    file: file.to_string(),
                    line: line_no,
                    reason: format!("Invalid delivery_speed: {}", e),
                }
            })?,
        };

        restaurants.push(restaurant);
    }

    Ok(restaurants)
}

/// An absent or blank delivery field means the restaurant has no published time.
fn parse_delivery_speed(
    field: Option<&str>,
) -> std::result::Result<Option<Minutes>, std::num::ParseIntError> {
    match field {
        None | Some("") => Ok(None),
        Some(value) => value.parse().map(Some),
    }
}
