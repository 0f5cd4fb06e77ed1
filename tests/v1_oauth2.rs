/*
 * Copyright (c) 2025 kazhuravlev and Contributors.
 * Licensed under either of
 *  - Apache License, Version 2.0 <http://www.apache.org/licenses/LICENSE-2.0> OR
 *  - MIT license <http://opensource.org/licenses/MIT>
 *  at your option.
 */

#[cfg(test)]
mod test {
    use httpmock::prelude::*;
    use serde_json::json;
    use std::collections::HashMap;
    use unsplash::v1::oauth2::{OAuth2Config, OOB_REDIRECT_URI};
    use unsplash::v1::{Scope, UnsplashError};

    #[test]
    fn authorize_url_contains_all_parameters() {
        let conf = OAuth2Config::new("my_key", "my_secret");
        let url = conf.authorize_url("state").unwrap();

        assert_eq!(url.host_str(), Some("unsplash.com"));
        assert_eq!(url.path(), "/oauth/authorize");

        let params: HashMap<String, String> = url.query_pairs().into_owned().collect();
        assert_eq!(params["response_type"], "code");
        assert_eq!(params["client_id"], "my_key");
        assert_eq!(params["redirect_uri"], OOB_REDIRECT_URI);
        assert_eq!(params["state"], "state");
        assert_eq!(params["access_type"], "offline");
        assert!(params["scope"].starts_with("public read_user write_user"));
        assert!(params["scope"].ends_with("write_collections"));
        assert!(!params.contains_key("client_secret"));
    }

    #[test]
    fn authorize_url_with_selected_scopes() {
        let conf = OAuth2Config::new("my_key", "my_secret")
            .with_scopes(&[Scope::Public, Scope::WriteLikes])
            .with_redirect_uri("https://example.com/callback");
        let url = conf.authorize_url("xyz").unwrap();

        let params: HashMap<String, String> = url.query_pairs().into_owned().collect();
        assert_eq!(params["scope"], "public write_likes");
        assert_eq!(params["redirect_uri"], "https://example.com/callback");
    }

    #[test]
    fn secrets_are_not_printed() {
        let conf = OAuth2Config::new("my_key", "my_secret");
        assert!(!format!("{conf:?}").contains("my_secret"));
    }

    #[tokio::test]
    async fn exchange_code_for_token() {
        let server = MockServer::start_async().await;
        let mock = server
            .mock_async(|when, then| {
                when.method(POST)
                    .path("/oauth/token")
                    .header("content-type", "application/x-www-form-urlencoded")
                    .body_contains("grant_type=authorization_code")
                    .body_contains("code=abc123")
                    .body_contains("client_id=my_key")
                    .body_contains("client_secret=my_secret");
                then.status(200).json_body(json!({
                    "access_token": "091343ce13c8ae780065ecb3b13dc903475dd22cb78a05503c2e0c69c5e98044",
                    "token_type": "bearer",
                    "scope": "public read_photos write_photos",
                    "created_at": 1436544465
                }));
            })
            .await;

        let conf = OAuth2Config::new("my_key", "my_secret")
            .with_endpoints(&server.url("/oauth/authorize"), &server.url("/oauth/token"));
        let token = conf
            .exchange_code(&reqwest::Client::new(), "abc123")
            .await
            .unwrap();

        mock.assert_async().await;
        assert_eq!(
            token.access_token,
            "091343ce13c8ae780065ecb3b13dc903475dd22cb78a05503c2e0c69c5e98044"
        );
        assert_eq!(token.token_type, "bearer");
        assert_eq!(token.created_at, Some(1436544465));
        assert!(token.refresh_token.is_none());
        assert!(!format!("{token:?}").contains("091343ce"));
    }

    #[tokio::test]
    async fn exchange_code_errors() {
        let server = MockServer::start_async().await;
        server
            .mock_async(|when, then| {
                when.method(POST).path("/oauth/token").body_contains("code=expired");
                then.status(401).json_body(json!({ "error": "invalid_grant" }));
            })
            .await;

        let conf = OAuth2Config::new("my_key", "my_secret")
            .with_endpoints(&server.url("/oauth/authorize"), &server.url("/oauth/token"));
        let http_client = reqwest::Client::new();

        let err = conf.exchange_code(&http_client, "expired").await.unwrap_err();
        assert!(matches!(err, UnsplashError::Unauthorized(_)));

        let err = conf.exchange_code(&http_client, "").await.unwrap_err();
        assert!(matches!(err, UnsplashError::BadRequest(_)));
    }
}
