/*
 * Copyright (c) 2025 kazhuravlev and Contributors.
 * Licensed under either of
 *  - Apache License, Version 2.0 <http://www.apache.org/licenses/LICENSE-2.0> OR
 *  - MIT license <http://opensource.org/licenses/MIT>
 *  at your option.
 */

pub mod api;
pub mod client;
pub mod collection;
pub mod errors;
pub mod oauth2;
mod options;
mod parsers;
pub mod photo;
pub mod properties;
pub mod rate_limit;
pub mod search;
pub mod user;

pub use api::*;
pub use client::*;
pub use collection::*;
pub use errors::*;
pub use photo::*;
pub use properties::*;
pub use rate_limit::*;
pub use search::*;
pub use user::*;
