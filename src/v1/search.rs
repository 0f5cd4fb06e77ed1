/*
 * Copyright (c) 2025 kazhuravlev and Contributors.
 * Licensed under either of
 *  - Apache License, Version 2.0 <http://www.apache.org/licenses/LICENSE-2.0> OR
 *  - MIT license <http://opensource.org/licenses/MIT>
 *  at your option.
 */
use crate::v1::errors::UnsplashError;
use crate::v1::options::{check_max_items, check_query_or_collections, non_empty, or_default};
use crate::v1::{ApiResponse, Client, Collection, Orientation, Photo, User};
use serde::{Deserialize, Serialize};

/// A single page of search results
#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct SearchResults<T> {
    pub total: u64,
    pub total_pages: u64,
    pub results: Vec<T>,
}

pub type SearchResult = SearchResults<Photo>;
pub type CollectionSearchResult = SearchResults<Collection>;
pub type UserSearchResult = SearchResults<User>;

/// Options for [`Client::search_photos`]
#[derive(Debug, Clone, Default)]
pub struct SearchPhotosOptions {
    /// Search terms
    pub query: Option<String>,
    /// Page number to retrieve. (Default: 1)
    pub page: Option<u32>,
    /// Number of items per page. (Default: 10; max: 30)
    pub per_page: Option<u32>,
    /// Collection ids to narrow search
    pub collections: Vec<String>,
    /// Filter by photo orientation
    pub orientation: Option<Orientation>,
}

impl SearchPhotosOptions {
    pub fn validate(&self) -> Result<(), UnsplashError> {
        check_max_items(self.per_page)?;
        check_query_or_collections(&self.query, &self.collections)
    }

    pub fn query(&self) -> Vec<(&'static str, String)> {
        let mut query = Vec::new();
        if !self.collections.is_empty() {
            query.push(("collections", self.collections.join(",")));
        }
        if let Some(q) = non_empty(&self.query) {
            query.push(("query", q.to_string()));
        }
        if let Some(orientation) = self.orientation {
            query.push(("orientation", <&str>::from(orientation).to_string()));
        }
        push_page(&mut query, self.page, self.per_page);
        query
    }
}

/// Options for [`Client::search_collections`]
#[derive(Debug, Clone, Default)]
pub struct SearchCollectionsOptions {
    pub query: Option<String>,
    pub page: Option<u32>,
    pub per_page: Option<u32>,
}

impl SearchCollectionsOptions {
    pub fn validate(&self) -> Result<(), UnsplashError> {
        check_max_items(self.per_page)
    }

    pub fn query(&self) -> Vec<(&'static str, String)> {
        text_query(&self.query, self.page, self.per_page)
    }
}

/// Options for [`Client::search_users`]
#[derive(Debug, Clone, Default)]
pub struct SearchUsersOptions {
    pub query: Option<String>,
    pub page: Option<u32>,
    pub per_page: Option<u32>,
}

impl SearchUsersOptions {
    pub fn validate(&self) -> Result<(), UnsplashError> {
        check_max_items(self.per_page)
    }

    pub fn query(&self) -> Vec<(&'static str, String)> {
        text_query(&self.query, self.page, self.per_page)
    }
}

fn text_query(q: &Option<String>, page: Option<u32>, per_page: Option<u32>) -> Vec<(&'static str, String)> {
    let mut query = Vec::new();
    if let Some(q) = non_empty(q) {
        query.push(("query", q.to_string()));
    }
    push_page(&mut query, page, per_page);
    query
}

fn push_page(query: &mut Vec<(&'static str, String)>, page: Option<u32>, per_page: Option<u32>) {
    query.push(("page", or_default(page, 1).to_string()));
    query.push(("per_page", or_default(per_page, 10).to_string()));
}

impl Client {
    pub async fn search_photos(
        &self,
        opts: &SearchPhotosOptions,
    ) -> Result<ApiResponse<SearchResult>, UnsplashError> {
        opts.validate()?;
        self.api_client.get("search/photos", Some(&opts.query())).await
    }

    pub async fn search_collections(
        &self,
        opts: &SearchCollectionsOptions,
    ) -> Result<ApiResponse<CollectionSearchResult>, UnsplashError> {
        opts.validate()?;
        self.api_client.get("search/collections", Some(&opts.query())).await
    }

    pub async fn search_users(
        &self,
        opts: &SearchUsersOptions,
    ) -> Result<ApiResponse<UserSearchResult>, UnsplashError> {
        opts.validate()?;
        self.api_client.get("search/users", Some(&opts.query())).await
    }
}
