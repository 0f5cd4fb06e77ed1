/*
 * Copyright (c) 2025 kazhuravlev and Contributors.
 * Licensed under either of
 *  - Apache License, Version 2.0 <http://www.apache.org/licenses/LICENSE-2.0> OR
 *  - MIT license <http://opensource.org/licenses/MIT>
 *  at your option.
 */
use httpmock::MockServer;
use serde_json::{Value, json};
use unsplash::v1::{Client, Creds};

#[allow(dead_code)]
pub(crate) const RATE_LIMIT: &str = "50";
#[allow(dead_code)]
pub(crate) const RATE_REMAINING: &str = "42";

#[allow(dead_code)]
pub(crate) fn mock_client(server: &MockServer) -> Client {
    let _ = env_logger::builder().is_test(true).try_init();
    Client::new(Creds::from_access_key("test-access-key"))
        .with_api_origin(&server.base_url())
        .unwrap()
}

#[allow(dead_code)]
pub(crate) fn user_json(username: &str) -> Value {
    json!({
        "id": format!("id-{username}"),
        "updated_at": "2016-07-10T11:00:01-05:00",
        "username": username,
        "name": "Jimmy Example",
        "portfolio_url": null,
        "bio": "",
        "location": "Montreal",
        "total_likes": 20,
        "total_photos": 10,
        "total_collections": null,
        "links": {
            "self": format!("https://api.unsplash.com/users/{username}"),
            "html": format!("https://unsplash.com/{username}"),
            "photos": format!("https://api.unsplash.com/users/{username}/photos"),
            "likes": format!("https://api.unsplash.com/users/{username}/likes"),
            "portfolio": format!("https://api.unsplash.com/users/{username}/portfolio")
        }
    })
}

#[allow(dead_code)]
pub(crate) fn photo_json(id: &str) -> Value {
    json!({
        "id": id,
        "created_at": "2016-05-03T11:00:28-04:00",
        "updated_at": "2016-07-10T11:00:01-05:00",
        "width": 2448,
        "height": 3264,
        "color": "#6E633A",
        "blur_hash": "LFC$yHwc8^$yIAS$%M%00KxukYIp",
        "downloads": 1345,
        "likes": 24,
        "liked_by_user": false,
        "description": "A man drinking a coffee.",
        "alt_description": null,
        "exif": {
            "make": "Canon",
            "model": "Canon EOS 40D",
            "exposure_time": "0.011111111111111112",
            "aperture": "4.970854",
            "focal_length": "37",
            "iso": 100
        },
        "location": {
            "name": "Montreal, Canada",
            "city": "Montreal",
            "country": "Canada",
            "position": { "latitude": 45.473298, "longitude": -73.638488 }
        },
        "current_user_collections": [
            {
                "id": 206,
                "title": "Makers: Cat and Ben",
                "published_at": "2016-01-12T18:16:09-05:00",
                "updated_at": "2016-07-10T11:00:01-05:00",
                "curated": false,
                "cover_photo": null,
                "user": null
            }
        ],
        "urls": {
            "raw": format!("https://images.unsplash.com/photo-{id}"),
            "full": format!("https://images.unsplash.com/photo-{id}?q=75&fm=jpg"),
            "regular": format!("https://images.unsplash.com/photo-{id}?q=75&fm=jpg&w=1080&fit=max"),
            "small": format!("https://images.unsplash.com/photo-{id}?q=75&fm=jpg&w=400&fit=max"),
            "thumb": format!("https://images.unsplash.com/photo-{id}?q=75&fm=jpg&w=200&fit=max")
        },
        "links": {
            "self": format!("https://api.unsplash.com/photos/{id}"),
            "html": format!("https://unsplash.com/photos/{id}"),
            "download": format!("https://unsplash.com/photos/{id}/download"),
            "download_location": format!("https://api.unsplash.com/photos/{id}/download")
        },
        "user": user_json("jimmyexample")
    })
}

#[allow(dead_code)]
pub(crate) fn photos_json(count: usize, prefix: &str) -> Value {
    Value::Array((0..count).map(|i| photo_json(&format!("{prefix}{i}"))).collect())
}

#[allow(dead_code)]
pub(crate) fn get_access_key() -> anyhow::Result<String> {
    Ok(std::env::var("UNSPLASH_ACCESS_KEY")?)
}

#[allow(dead_code)]
pub(crate) fn get_access_token() -> anyhow::Result<String> {
    Ok(std::env::var("UNSPLASH_ACCESS_TOKEN")?)
}
