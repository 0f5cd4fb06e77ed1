/*
 * Copyright (c) 2025 kazhuravlev and Contributors.
 * Licensed under either of
 *  - Apache License, Version 2.0 <http://www.apache.org/licenses/LICENSE-2.0> OR
 *  - MIT license <http://opensource.org/licenses/MIT>
 *  at your option.
 */

extern crate unsplash;

use anyhow::Result;
use dotenvy::dotenv;
use futures::{StreamExt, pin_mut};
use unsplash::v1::{Client, Creds, OrderBy, Orientation, SearchPhotosOptions};

#[tokio::main]
async fn main() -> Result<()> {
    dotenv().ok();
    env_logger::init();

    let access_key = std::env::var("UNSPLASH_ACCESS_KEY")?;
    let term = std::env::args().nth(1).unwrap_or_else(|| "mountains".to_string());
    let client = Client::new(Creds::from_access_key(&access_key));

    let resp = client
        .search_photos(&SearchPhotosOptions {
            query: Some(term.clone()),
            orientation: Some(Orientation::Landscape),
            per_page: Some(5),
            ..Default::default()
        })
        .await?;
    println!(
        "{} results for '{}' ({} of {} requests left)",
        resp.payload.total, term, resp.rate_limit.remaining, resp.rate_limit.limit
    );
    for photo in &resp.payload.results {
        println!(
            "{} by {}: {}",
            photo.id,
            photo.user.as_ref().map_or("unknown", |u| u.username.as_str()),
            photo.urls.regular
        );
    }

    // Latest photos from the editorial feed, stopping after the first ten
    let latest = client.photos_stream(OrderBy::Latest).take(10);
    pin_mut!(latest);
    while let Some(photo) = latest.next().await {
        let photo = photo?;
        println!("{} {}", photo.id, photo.description.unwrap_or_default());
    }
    Ok(())
}
