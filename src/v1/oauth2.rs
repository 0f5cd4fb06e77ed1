/*
 * Copyright (c) 2025 kazhuravlev and Contributors.
 * Licensed under either of
 *  - Apache License, Version 2.0 <http://www.apache.org/licenses/LICENSE-2.0> OR
 *  - MIT license <http://opensource.org/licenses/MIT>
 *  at your option.
 */

//! Helpers for obtaining a user access token through the OAuth2
//! authorization code flow.
//!
//! 1. Send the user to [`OAuth2Config::authorize_url`].
//! 2. The user approves the application and is given a code (or redirected with it).
//! 3. Trade the code for a token with [`OAuth2Config::exchange_code`].
//!
//! The resulting token is used with [`Creds::from_bearer_token`](crate::v1::Creds::from_bearer_token).

use crate::v1::api::{check_response, decode_body};
use crate::v1::errors::UnsplashError;
use crate::v1::options::check_non_empty;
use crate::v1::{Scope, scopes};
use log::debug;
use reqwest::header::{ACCEPT, CONTENT_TYPE};
use serde::{Deserialize, Serialize};
use strum::IntoEnumIterator;

pub const AUTHORIZE_URL: &str = "https://unsplash.com/oauth/authorize";
pub const TOKEN_URL: &str = "https://unsplash.com/oauth/token";

/// Redirect for applications without a callback; the code is shown to the user instead
pub const OOB_REDIRECT_URI: &str = "urn:ietf:wg:oauth:2.0:oob";

#[derive(Clone)]
pub struct OAuth2Config {
    pub client_id: String,
    pub client_secret: String,
    pub redirect_uri: String,
    pub scopes: Vec<Scope>,
    authorize_url: String,
    token_url: String,
}

impl OAuth2Config {
    /// Configuration requesting every scope with the out-of-band redirect
    pub fn new(client_id: &str, client_secret: &str) -> Self {
        Self {
            client_id: client_id.into(),
            client_secret: client_secret.into(),
            redirect_uri: OOB_REDIRECT_URI.into(),
            scopes: Scope::iter().collect(),
            authorize_url: AUTHORIZE_URL.into(),
            token_url: TOKEN_URL.into(),
        }
    }

    pub fn with_redirect_uri(mut self, redirect_uri: &str) -> Self {
        self.redirect_uri = redirect_uri.into();
        self
    }

    pub fn with_scopes(mut self, scopes: &[Scope]) -> Self {
        self.scopes = scopes.to_vec();
        self
    }

    /// Points the flow at different authorize and token endpoints
    pub fn with_endpoints(mut self, authorize_url: &str, token_url: &str) -> Self {
        self.authorize_url = authorize_url.into();
        self.token_url = token_url.into();
        self
    }

    /// Builds the consent page url the user has to visit
    pub fn authorize_url(&self, state: &str) -> Result<url::Url, UnsplashError> {
        let scope = scopes(&self.scopes);
        let params = [
            ("response_type", "code"),
            ("client_id", self.client_id.as_str()),
            ("redirect_uri", self.redirect_uri.as_str()),
            ("scope", scope.as_str()),
            ("state", state),
            ("access_type", "offline"),
        ];
        Ok(url::Url::parse_with_params(&self.authorize_url, &params)?)
    }

    /// Exchanges an authorization code for an access token
    pub async fn exchange_code(
        &self,
        http_client: &reqwest::Client,
        code: &str,
    ) -> Result<AccessToken, UnsplashError> {
        check_non_empty(code)?;
        let body = url::form_urlencoded::Serializer::new(String::new())
            .extend_pairs([
                ("grant_type", "authorization_code"),
                ("code", code),
                ("redirect_uri", self.redirect_uri.as_str()),
                ("client_id", self.client_id.as_str()),
                ("client_secret", self.client_secret.as_str()),
            ])
            .finish();

        debug!("POST {}", self.token_url);
        let resp = http_client
            .post(&self.token_url)
            .header(CONTENT_TYPE, "application/x-www-form-urlencoded")
            .header(ACCEPT, "application/json")
            .body(body)
            .send()
            .await?;
        let resp = check_response(resp).await?;

        let body = resp.bytes().await?;
        decode_body(&body)
    }
}

impl std::fmt::Debug for OAuth2Config {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("OAuth2Config")
            .field("client_id", &self.client_id)
            .field("client_secret", &"xxx")
            .field("redirect_uri", &self.redirect_uri)
            .field("scopes", &self.scopes)
            .finish()
    }
}

/// Token returned by the token endpoint
#[derive(Serialize, Deserialize, Clone)]
pub struct AccessToken {
    pub access_token: String,

    pub token_type: String,

    #[serde(default)]
    pub scope: Option<String>,

    #[serde(default)]
    pub refresh_token: Option<String>,

    // Unix timestamp
    #[serde(default)]
    pub created_at: Option<i64>,
}

impl std::fmt::Debug for AccessToken {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AccessToken")
            .field("access_token", &"xxx")
            .field("token_type", &self.token_type)
            .field("scope", &self.scope)
            .finish()
    }
}
