/*
 * Copyright (c) 2025 kazhuravlev and Contributors.
 * Licensed under either of
 *  - Apache License, Version 2.0 <http://www.apache.org/licenses/LICENSE-2.0> OR
 *  - MIT license <http://opensource.org/licenses/MIT>
 *  at your option.
 */

//! # Unsplash
//!
//! This Unsplash library was created for working with the Unsplash API (version v1).
//!
//! For further details on the Rest API refer to the [Unsplash API Docs](https://unsplash.com/documentation)
//!
//! ## Features
//!
//! - Photos
//!     - Random, editorial and curated listings
//!     - Single photo, statistics and download link
//!     - Update location/exif, like and unlike
//!     - Stream the editorial feed across pages
//! - Search for photos, collections and users
//! - Rate limit and pagination headers returned with every response
//! - OAuth2 helpers for obtaining a user access token
//! - Lower level interface for handling the raw communication
//!
//! *Public actions only need the application's access key. Actions on behalf of
//! a user need an access token, see [`v1::oauth2`]*
//!
//! ## Installation
//!
//! ```toml
//! [dependencies]
//! unsplash = "0.1.0"
//! ```
//!
//! ## Usage
//!
//! **You will need to register an application with Unsplash to get an access key**
//!
//! ```rust
//! use unsplash::v1::{Client, Creds, Orientation, SearchPhotosOptions, UnsplashError};
//!
//!async fn landscape_urls(access_key: &str, term: &str) -> Result<Vec<String>, UnsplashError> {
//!    let client = Client::new(Creds::from_access_key(access_key));
//!
//!    let resp = client
//!        .search_photos(&SearchPhotosOptions {
//!            query: Some(term.into()),
//!            orientation: Some(Orientation::Landscape),
//!            per_page: Some(30),
//!            ..Default::default()
//!        })
//!        .await?;
//!
//!    println!("{} requests left this hour", resp.rate_limit.remaining);
//!    Ok(resp.payload.results.into_iter().map(|p| p.urls.full).collect())
//!}
//! ```
//!
pub mod v1;
