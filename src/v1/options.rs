/*
 * Copyright (c) 2025 kazhuravlev and Contributors.
 * Licensed under either of
 *  - Apache License, Version 2.0 <http://www.apache.org/licenses/LICENSE-2.0> OR
 *  - MIT license <http://opensource.org/licenses/MIT>
 *  at your option.
 */
use crate::v1::errors::UnsplashError;
use crate::v1::MAX_LIST_ITEMS;

// Page and count values are unsigned so only the upper bound needs checking
pub(crate) fn check_max_items(value: Option<u32>) -> Result<(), UnsplashError> {
    match value {
        Some(v) if v > MAX_LIST_ITEMS => Err(UnsplashError::BadRequest(None)),
        _ => Ok(()),
    }
}

pub(crate) fn check_non_empty(value: &str) -> Result<(), UnsplashError> {
    if value.is_empty() {
        return Err(UnsplashError::BadRequest(None));
    }
    Ok(())
}

// Ids become a single path segment; `.` and `..` would be resolved away by the url join
pub(crate) fn check_id(id: &str) -> Result<(), UnsplashError> {
    check_non_empty(id)?;
    if matches!(id, "." | "..") {
        return Err(UnsplashError::BadRequest(None));
    }
    Ok(())
}

// Unset and zero both fall back to the API default
pub(crate) fn or_default(value: Option<u32>, default: u32) -> u32 {
    value.filter(|v| *v != 0).unwrap_or(default)
}

pub(crate) fn non_empty(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|v| !v.is_empty())
}

// Collection filters and free text queries are mutually exclusive
pub(crate) fn check_query_or_collections(
    query: &Option<String>,
    collections: &[String],
) -> Result<(), UnsplashError> {
    if non_empty(query).is_some() && !collections.is_empty() {
        return Err(UnsplashError::BadRequest(None));
    }
    Ok(())
}

pub(crate) fn photo_path(id: &str, suffix: &str) -> String {
    format!("photos/{}{suffix}", urlencoding::encode(id))
}
