/*
 * Copyright (c) 2025 kazhuravlev and Contributors.
 * Licensed under either of
 *  - Apache License, Version 2.0 <http://www.apache.org/licenses/LICENSE-2.0> OR
 *  - MIT license <http://opensource.org/licenses/MIT>
 *  at your option.
 */
use crate::v1::errors::UnsplashError;
use crate::v1::{ApiClient, Creds};
use std::sync::Arc;

/// Entry point for all API operations.
///
/// Cloning is cheap and clones share the underlying HTTP client.
///
/// ```rust
/// use unsplash::v1::{Client, Creds};
///
/// let client = Client::new(Creds::from_access_key("my-access-key"));
/// ```
#[derive(Debug, Clone)]
pub struct Client {
    pub(crate) api_client: Arc<ApiClient>,
}

impl Client {
    pub fn new(creds: Creds) -> Self {
        Self {
            api_client: Arc::new(ApiClient::new(creds)),
        }
    }

    /// Uses the provided `reqwest::Client` for all requests (timeouts, proxies, etc.)
    pub fn with_http_client(creds: Creds, http_client: reqwest::Client) -> Self {
        Self {
            api_client: Arc::new(ApiClient::with_http_client(creds, http_client)),
        }
    }

    /// Redirects requests to a different API origin
    pub fn with_api_origin(self, origin: &str) -> Result<Self, UnsplashError> {
        let api_client = Arc::unwrap_or_clone(self.api_client).with_api_origin(origin)?;
        Ok(Self {
            api_client: Arc::new(api_client),
        })
    }

    /// Lower level access for endpoints this library doesn't wrap
    pub fn api_client(&self) -> &ApiClient {
        &self.api_client
    }
}
