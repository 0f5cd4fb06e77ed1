/*
 * Copyright (c) 2025 kazhuravlev and Contributors.
 * Licensed under either of
 *  - Apache License, Version 2.0 <http://www.apache.org/licenses/LICENSE-2.0> OR
 *  - MIT license <http://opensource.org/licenses/MIT>
 *  at your option.
 */
use strum_macros::{EnumIter, EnumString, IntoStaticStr};

/// Photo orientation filter
#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumString, IntoStaticStr)]
#[strum(serialize_all = "lowercase")]
pub enum Orientation {
    Landscape,
    Portrait,
    Squarish,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, EnumString, IntoStaticStr)]
#[strum(serialize_all = "lowercase")]
pub enum OrderBy {
    Latest,
    Oldest,
    #[default]
    Popular,
}

/// Frequency of the photo statistics
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, EnumString, IntoStaticStr)]
#[strum(serialize_all = "lowercase")]
pub enum Resolution {
    #[default]
    Days,
}

/// OAuth2 permission scopes.
///
/// See [Unsplash API Docs](https://unsplash.com/documentation/user-authentication-workflow#permission-scopes)
#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumIter, EnumString, IntoStaticStr)]
#[strum(serialize_all = "snake_case")]
pub enum Scope {
    Public,
    ReadUser,
    WriteUser,
    ReadPhotos,
    WritePhotos,
    WriteLikes,
    WriteFollowers,
    ReadCollections,
    WriteCollections,
}

/// Joins scopes into the space separated form the authorize endpoint expects
pub fn scopes(scopes: &[Scope]) -> String {
    scopes
        .iter()
        .map(|s| <&'static str>::from(*s))
        .collect::<Vec<_>>()
        .join(" ")
}
