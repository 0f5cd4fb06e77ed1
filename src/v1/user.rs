/*
 * Copyright (c) 2025 kazhuravlev and Contributors.
 * Licensed under either of
 *  - Apache License, Version 2.0 <http://www.apache.org/licenses/LICENSE-2.0> OR
 *  - MIT license <http://opensource.org/licenses/MIT>
 *  at your option.
 */
use crate::v1::parsers::{from_empty_str_to_none, from_null_to_zero};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Holds information returned for a User.
///
/// See [Unsplash API Docs](https://unsplash.com/documentation#users) for more
/// details on the individual fields.
#[derive(Serialize, Deserialize, Clone, Debug, Default)]
pub struct User {
    pub id: String,

    #[serde(default)]
    pub updated_at: Option<DateTime<Utc>>,

    pub username: String,

    #[serde(default)]
    pub name: Option<String>,

    #[serde(default)]
    pub first_name: Option<String>,

    #[serde(default)]
    pub last_name: Option<String>,

    #[serde(default, deserialize_with = "from_empty_str_to_none")]
    pub portfolio_url: Option<String>,

    #[serde(default, deserialize_with = "from_empty_str_to_none")]
    pub bio: Option<String>,

    #[serde(default, deserialize_with = "from_empty_str_to_none")]
    pub location: Option<String>,

    #[serde(default, deserialize_with = "from_null_to_zero")]
    pub total_likes: u64,

    #[serde(default, deserialize_with = "from_null_to_zero")]
    pub total_photos: u64,

    #[serde(default, deserialize_with = "from_null_to_zero")]
    pub total_collections: u64,

    #[serde(default)]
    pub profile_image: Option<ProfileImage>,

    #[serde(default)]
    pub links: UserLinks,
}

#[derive(Serialize, Deserialize, Clone, Debug, Default)]
pub struct UserLinks {
    #[serde(default, rename = "self")]
    pub self_link: String,

    #[serde(default)]
    pub html: String,

    #[serde(default)]
    pub photos: String,

    #[serde(default)]
    pub likes: String,

    #[serde(default)]
    pub portfolio: String,
}

#[derive(Serialize, Deserialize, Clone, Debug, Default)]
pub struct ProfileImage {
    pub small: String,
    pub medium: String,
    pub large: String,
}
