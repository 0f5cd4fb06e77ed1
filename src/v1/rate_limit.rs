/*
 * Copyright (c) 2025 kazhuravlev and Contributors.
 * Licensed under either of
 *  - Apache License, Version 2.0 <http://www.apache.org/licenses/LICENSE-2.0> OR
 *  - MIT license <http://opensource.org/licenses/MIT>
 *  at your option.
 */
use crate::v1::errors::UnsplashError;
use reqwest::header::HeaderMap;
use std::str::FromStr;

const RATE_LIMIT_HEADER_TOTAL: &str = "X-Ratelimit-Limit";
const RATE_LIMIT_HEADER_REMAINING: &str = "X-Ratelimit-Remaining";

const PAGINATOR_HEADER_PER_PAGE: &str = "X-Per-Page";
const PAGINATOR_HEADER_TOTAL: &str = "X-Total";

/// Hourly request quota reported by the API with every response.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RateLimit {
    pub limit: u32,
    pub remaining: u32,
}

impl RateLimit {
    /// Reads the rate limit headers from a response.
    ///
    /// Both headers must be present and hold integers.
    pub fn from_headers(headers: &HeaderMap) -> Result<Self, UnsplashError> {
        let limit = header_value(headers, RATE_LIMIT_HEADER_TOTAL).ok_or(UnsplashError::InvalidLimits)?;
        let remaining =
            header_value(headers, RATE_LIMIT_HEADER_REMAINING).ok_or(UnsplashError::InvalidLimits)?;
        Ok(Self { limit, remaining })
    }

    pub fn is_exhausted(&self) -> bool {
        self.remaining == 0
    }
}

/// Pagination totals returned by list endpoints.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pagination {
    pub per_page: u32,
    pub total: u64,
}

impl Pagination {
    /// Returns `None` unless both pagination headers are present and valid.
    pub fn from_headers(headers: &HeaderMap) -> Option<Self> {
        Some(Self {
            per_page: header_value(headers, PAGINATOR_HEADER_PER_PAGE)?,
            total: header_value(headers, PAGINATOR_HEADER_TOTAL)?,
        })
    }

    /// Number of pages at the current page size
    pub fn total_pages(&self) -> u64 {
        if self.per_page == 0 {
            return 0;
        }
        self.total.div_ceil(u64::from(self.per_page))
    }
}

fn header_value<T: FromStr>(headers: &HeaderMap, name: &str) -> Option<T> {
    headers
        .get(name)
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.trim().parse().ok())
}
