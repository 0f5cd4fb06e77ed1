/*
 * Copyright (c) 2025 kazhuravlev and Contributors.
 * Licensed under either of
 *  - Apache License, Version 2.0 <http://www.apache.org/licenses/LICENSE-2.0> OR
 *  - MIT license <http://opensource.org/licenses/MIT>
 *  at your option.
 */

use crate::v1::RateLimit;
use thiserror::Error;

/// Error conditions that can be returned
///
/// Options that fail validation report [`UnsplashError::BadRequest`] before any
/// request is sent, the same signal the API uses for a `400` response.
///
/// Errors built from an API response carry the quota reported with it, when the
/// response had valid rate limit headers.
#[derive(Error, Debug)]
pub enum UnsplashError {
    #[error("Bad request")]
    BadRequest(Option<RateLimit>),

    #[error("Unauthorized")]
    Unauthorized(Option<RateLimit>),

    #[error("Unexpected API response status: {0}")]
    UnexpectedStatus(u16, Option<RateLimit>),

    #[error("Rate limit headers missing or invalid")]
    InvalidLimits,

    #[error("Request network error")]
    Request(#[from] reqwest::Error),

    #[error("API Response is malformed for {0}: {1:?}")]
    ApiResponseMalformed(&'static str, serde_json::Error),

    #[error("URL Parse error")]
    UrlParsing(#[from] url::ParseError),
}

impl UnsplashError {
    /// Quota reported with the failed response, if any
    pub fn rate_limit(&self) -> Option<RateLimit> {
        match self {
            Self::BadRequest(rl) | Self::Unauthorized(rl) | Self::UnexpectedStatus(_, rl) => *rl,
            _ => None,
        }
    }
}
