/*
 * Copyright (c) 2025 kazhuravlev and Contributors.
 * Licensed under either of
 *  - Apache License, Version 2.0 <http://www.apache.org/licenses/LICENSE-2.0> OR
 *  - MIT license <http://opensource.org/licenses/MIT>
 *  at your option.
 */
use crate::v1::errors::UnsplashError;
use crate::v1::{Pagination, RateLimit};
use log::{debug, warn};
use num_enum::TryFromPrimitive;
use reqwest::header::{ACCEPT, AUTHORIZATION, HeaderMap};
use reqwest::{Method, Response, StatusCode};
use serde::de::DeserializeOwned;

// Root Unsplash API
pub const API_ORIGIN: &str = "https://api.unsplash.com";

/// Version requested through the `Accept-Version` header
pub const API_VERSION: &str = "v1";

/// Largest page size or count any list endpoint accepts
pub const MAX_LIST_ITEMS: u32 = 30;

const API_VERSION_HEADER: &str = "Accept-Version";

/// Query parameters for a request, already rendered to their wire form
pub type ApiParams = [(&'static str, String)];

/// Directly communicates with the API.
///
/// Every request carries the `Accept-Version` header and the configured
/// credentials. Everything else is left to the wrapped `reqwest::Client`.
#[derive(Clone)]
pub struct ApiClient {
    creds: Creds,
    https_client: reqwest::Client,
    api_origin: String,
}

impl ApiClient {
    /// Creates a new client using a default `reqwest::Client`
    pub fn new(creds: Creds) -> Self {
        Self::with_http_client(creds, reqwest::Client::new())
    }

    /// Creates a new client around a caller supplied `reqwest::Client`
    pub fn with_http_client(creds: Creds, https_client: reqwest::Client) -> Self {
        Self {
            creds,
            https_client,
            api_origin: format!("{API_ORIGIN}/"),
        }
    }

    /// Sends requests to `origin` instead of the public API
    pub fn with_api_origin(mut self, origin: &str) -> Result<Self, UnsplashError> {
        let mut origin = url::Url::parse(origin)?;
        if !origin.path().ends_with('/') {
            let path = format!("{}/", origin.path());
            origin.set_path(&path);
        }
        self.api_origin = origin.into();
        Ok(self)
    }

    /// Builds the full url for a path relative to the API origin
    pub fn url(&self, path: &str, params: &ApiParams) -> Result<url::Url, UnsplashError> {
        let mut req_url = url::Url::parse(&self.api_origin)?.join(path.trim_start_matches('/'))?;
        if !params.is_empty() {
            req_url
                .query_pairs_mut()
                .extend_pairs(params.iter().map(|(k, v)| (*k, v.as_str())));
        }
        Ok(req_url)
    }

    /// Performs a get request to the Unsplash API
    pub async fn get<T: DeserializeOwned>(
        &self,
        path: &str,
        params: Option<&ApiParams>,
    ) -> Result<ApiResponse<T>, UnsplashError> {
        self.send(Method::GET, path, params).await
    }

    /// Performs a post request to the Unsplash API
    pub async fn post<T: DeserializeOwned>(
        &self,
        path: &str,
        params: Option<&ApiParams>,
    ) -> Result<ApiResponse<T>, UnsplashError> {
        self.send(Method::POST, path, params).await
    }

    /// Performs a put request to the Unsplash API
    pub async fn put<T: DeserializeOwned>(
        &self,
        path: &str,
        params: Option<&ApiParams>,
    ) -> Result<ApiResponse<T>, UnsplashError> {
        self.send(Method::PUT, path, params).await
    }

    /// Performs a delete request to the Unsplash API
    pub async fn delete<T: DeserializeOwned>(
        &self,
        path: &str,
        params: Option<&ApiParams>,
    ) -> Result<ApiResponse<T>, UnsplashError> {
        self.send(Method::DELETE, path, params).await
    }

    async fn send<T: DeserializeOwned>(
        &self,
        method: Method,
        path: &str,
        params: Option<&ApiParams>,
    ) -> Result<ApiResponse<T>, UnsplashError> {
        let req_url = self.url(path, params.unwrap_or(&[]))?;
        debug!("{method} {req_url}");

        let mut req = self
            .https_client
            .request(method, req_url)
            .header(API_VERSION_HEADER, API_VERSION)
            .header(ACCEPT, "application/json");
        if let Some(auth) = self.creds.authorization() {
            req = req.header(AUTHORIZATION, auth);
        }

        let resp = check_response(req.send().await?).await?;

        let rate_limit = RateLimit::from_headers(resp.headers())?;
        let pagination = Pagination::from_headers(resp.headers());
        let body = resp.bytes().await?;

        Ok(ApiResponse {
            payload: decode_body(&body)?,
            rate_limit,
            pagination,
        })
    }
}

impl std::fmt::Debug for ApiClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ApiClient")
            .field("creds", &self.creds)
            .field("api_origin", &self.api_origin)
            .finish()
    }
}

/// A decoded response along with the quota and paging headers that came with it
#[derive(Debug, Clone)]
pub struct ApiResponse<T> {
    pub payload: T,
    pub rate_limit: RateLimit,
    pub pagination: Option<Pagination>,
}

/// Credentials sent in the `Authorization` header
#[derive(Default, Clone)]
pub enum Creds {
    /// No header is added. Useful when the injected HTTP client already authorizes requests.
    #[default]
    None,
    /// Public access using the application's access key
    AccessKey(String),
    /// User access using an OAuth2 access token
    BearerToken(String),
}

impl Creds {
    pub fn none() -> Self {
        Self::None
    }

    pub fn from_access_key(access_key: &str) -> Self {
        Self::AccessKey(access_key.into())
    }

    pub fn from_bearer_token(token: &str) -> Self {
        Self::BearerToken(token.into())
    }

    fn authorization(&self) -> Option<String> {
        match self {
            Self::None => None,
            Self::AccessKey(key) => Some(format!("Client-ID {key}")),
            Self::BearerToken(token) => Some(format!("Bearer {token}")),
        }
    }
}

impl std::fmt::Debug for Creds {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::None => f.write_str("Creds::None"),
            Self::AccessKey(_) => f.debug_tuple("Creds::AccessKey").field(&"xxx").finish(),
            Self::BearerToken(_) => f.debug_tuple("Creds::BearerToken").field(&"xxx").finish(),
        }
    }
}

/// Status codes per the Unsplash API site
#[derive(Debug, TryFromPrimitive)]
#[repr(u16)]
pub enum ApiErrorCodes {
    // Good Codes
    Ok = 200,
    CreatedSuccessfully = 201,

    // Failing Codes
    BadRequest = 400,
    Unauthorized = 401,
    Forbidden = 403,
    NotFound = 404,
    InternalServerError = 500,
    ServiceUnavailable = 503,
}

/// Maps a response status onto the error kinds callers see.
///
/// Failures carry whatever quota the response reported. The body is never consulted.
pub(crate) fn check_status(status: StatusCode, headers: &HeaderMap) -> Result<(), UnsplashError> {
    use ApiErrorCodes as E;
    let code = ApiErrorCodes::try_from(status.as_u16());
    if let Ok(E::Ok | E::CreatedSuccessfully) = code {
        return Ok(());
    }

    let rate_limit = RateLimit::from_headers(headers).ok();
    match code {
        Ok(E::BadRequest) => {
            warn!("API rejected the request as malformed ({rate_limit:?})");
            Err(UnsplashError::BadRequest(rate_limit))
        }
        Ok(E::Unauthorized) => {
            warn!("API rejected the request credentials ({rate_limit:?})");
            Err(UnsplashError::Unauthorized(rate_limit))
        }
        code => {
            warn!("Unexpected API response status {status} ({code:?}, {rate_limit:?})");
            Err(UnsplashError::UnexpectedStatus(status.as_u16(), rate_limit))
        }
    }
}

/// Passes successful responses through. Error bodies are logged and dropped.
pub(crate) async fn check_response(resp: Response) -> Result<Response, UnsplashError> {
    let status = resp.status();
    debug!("{status} {}", resp.url());

    if let Err(err) = check_status(status, resp.headers()) {
        match resp.text().await {
            Ok(body) => debug!("Api Err body {body}"),
            Err(read_err) => debug!("Api Err body unreadable {read_err:?}"),
        }
        return Err(err);
    }
    Ok(resp)
}

pub(crate) fn decode_body<T: DeserializeOwned>(body: &[u8]) -> Result<T, UnsplashError> {
    serde_json::from_slice::<T>(body).map_err(|err| {
        debug!("Api Malformed Err {err:?}");
        UnsplashError::ApiResponseMalformed(std::any::type_name::<T>(), err)
    })
}
