/*
 * Copyright (c) 2025 kazhuravlev and Contributors.
 * Licensed under either of
 *  - Apache License, Version 2.0 <http://www.apache.org/licenses/LICENSE-2.0> OR
 *  - MIT license <http://opensource.org/licenses/MIT>
 *  at your option.
 */
use crate::v1::parsers::{from_empty_str_to_none, from_null_to_zero, from_number_or_string};
use crate::v1::{Photo, User};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Holds information returned for a Collection.
///
/// See [Unsplash API Docs](https://unsplash.com/documentation#collections) for more
/// details on the individual fields.
#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct Collection {
    #[serde(deserialize_with = "from_number_or_string")]
    pub id: String,

    pub title: String,

    #[serde(default, deserialize_with = "from_empty_str_to_none")]
    pub description: Option<String>,

    #[serde(default)]
    pub published_at: Option<DateTime<Utc>>,

    #[serde(default)]
    pub updated_at: Option<DateTime<Utc>>,

    #[serde(default)]
    pub featured: bool,

    #[serde(default, deserialize_with = "from_null_to_zero")]
    pub total_photos: u64,

    #[serde(default)]
    pub private: bool,

    #[serde(default)]
    pub share_key: Option<String>,

    #[serde(default)]
    pub cover_photo: Option<Box<Photo>>,

    #[serde(default)]
    pub user: Option<User>,

    #[serde(default)]
    pub links: CollectionLinks,
}

#[derive(Serialize, Deserialize, Clone, Debug, Default)]
pub struct CollectionLinks {
    #[serde(default, rename = "self")]
    pub self_link: String,

    #[serde(default)]
    pub html: String,

    #[serde(default)]
    pub photos: String,

    #[serde(default)]
    pub related: Option<String>,
}

/// A collection of the authenticated user that a photo belongs to.
///
/// The cover photo and owner are left as raw JSON since the API returns
/// them in varying levels of detail here.
#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct CurrentUserCollection {
    #[serde(deserialize_with = "from_number_or_string")]
    pub id: String,

    pub title: String,

    #[serde(default)]
    pub published_at: Option<DateTime<Utc>>,

    #[serde(default)]
    pub updated_at: Option<DateTime<Utc>>,

    #[serde(default)]
    pub curated: bool,

    #[serde(default)]
    pub cover_photo: Option<serde_json::Value>,

    #[serde(default)]
    pub user: Option<serde_json::Value>,
}
