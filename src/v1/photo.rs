/*
 * Copyright (c) 2025 kazhuravlev and Contributors.
 * Licensed under either of
 *  - Apache License, Version 2.0 <http://www.apache.org/licenses/LICENSE-2.0> OR
 *  - MIT license <http://opensource.org/licenses/MIT>
 *  at your option.
 */
use crate::v1::errors::UnsplashError;
use crate::v1::options::{
    check_id, check_max_items, check_query_or_collections, non_empty, or_default, photo_path,
};
use crate::v1::parsers::{from_empty_str_to_none, from_null_to_zero};
use crate::v1::{
    ApiResponse, Client, CurrentUserCollection, MAX_LIST_ITEMS, OrderBy, Orientation, Resolution,
    User,
};
use async_stream::try_stream;
use chrono::{DateTime, NaiveDate, Utc};
use futures::Stream;
use serde::{Deserialize, Serialize};

/// Holds information returned for a Photo.
///
/// Abbreviated representations (search results, likes, collection covers) leave
/// out several fields, which then take their defaults.
///
/// See [Unsplash API Docs](https://unsplash.com/documentation#photos) for more
/// details on the individual fields.
#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct Photo {
    pub id: String,

    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,

    #[serde(default)]
    pub updated_at: Option<DateTime<Utc>>,

    #[serde(default)]
    pub width: u32,

    #[serde(default)]
    pub height: u32,

    #[serde(default)]
    pub color: Option<String>,

    #[serde(default)]
    pub blur_hash: Option<String>,

    #[serde(default)]
    pub downloads: Option<u64>,

    #[serde(default, deserialize_with = "from_null_to_zero")]
    pub likes: u64,

    #[serde(default)]
    pub liked_by_user: bool,

    #[serde(default, deserialize_with = "from_empty_str_to_none")]
    pub description: Option<String>,

    #[serde(default, deserialize_with = "from_empty_str_to_none")]
    pub alt_description: Option<String>,

    #[serde(default)]
    pub exif: Option<Exif>,

    #[serde(default)]
    pub location: Option<Location>,

    #[serde(default)]
    pub current_user_collections: Vec<CurrentUserCollection>,

    #[serde(default)]
    pub urls: Urls,

    #[serde(default)]
    pub links: PhotoLinks,

    #[serde(default)]
    pub user: Option<User>,
}

#[derive(Serialize, Deserialize, Clone, Debug, Default)]
pub struct Exif {
    #[serde(default)]
    pub make: Option<String>,

    #[serde(default)]
    pub model: Option<String>,

    #[serde(default)]
    pub exposure_time: Option<String>,

    #[serde(default)]
    pub aperture: Option<String>,

    #[serde(default)]
    pub focal_length: Option<String>,

    #[serde(default)]
    pub iso: Option<u32>,
}

#[derive(Serialize, Deserialize, Clone, Debug, Default)]
pub struct Location {
    #[serde(default)]
    pub name: Option<String>,

    #[serde(default)]
    pub city: Option<String>,

    #[serde(default)]
    pub country: Option<String>,

    #[serde(default)]
    pub position: Option<Position>,
}

#[derive(Serialize, Deserialize, Clone, Copy, Debug, Default)]
pub struct Position {
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
}

#[derive(Serialize, Deserialize, Clone, Debug, Default)]
pub struct Urls {
    #[serde(default)]
    pub raw: String,

    #[serde(default)]
    pub full: String,

    #[serde(default)]
    pub regular: String,

    #[serde(default)]
    pub small: String,

    #[serde(default)]
    pub thumb: String,
}

#[derive(Serialize, Deserialize, Clone, Debug, Default)]
pub struct PhotoLinks {
    #[serde(default, rename = "self")]
    pub self_link: String,

    #[serde(default)]
    pub html: String,

    #[serde(default)]
    pub download: String,

    #[serde(default)]
    pub download_location: String,
}

/// Download, view and like counts for a photo
#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct PhotoStatistics {
    pub id: String,
    pub downloads: StatisticsEntry,
    pub views: StatisticsEntry,
    pub likes: StatisticsEntry,
}

#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct StatisticsEntry {
    pub total: u64,
    pub historical: Historical,
}

#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct Historical {
    pub change: i64,
    pub resolution: String,
    pub quantity: u32,
    pub values: Vec<HistoricalValue>,
}

#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct HistoricalValue {
    pub date: NaiveDate,
    pub value: u64,
}

/// Location of the full size image. Requesting it is what counts as a download.
#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct PhotoDownload {
    pub url: String,
}

/// Returned when liking or unliking a photo
#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct PhotoLike {
    pub photo: Photo,
    pub user: User,
}

/// Options for [`Client::random_photos`]
#[derive(Debug, Clone, Default)]
pub struct RandomPhotosOptions {
    /// Public collection ids to filter selection
    pub collections: Vec<String>,
    /// Limit selection to featured photos
    pub featured: bool,
    /// Limit selection to a single user
    pub username: Option<String>,
    /// Limit selection to photos matching a search term
    pub query: Option<String>,
    /// Filter by photo orientation
    pub orientation: Option<Orientation>,
    /// The number of photos to return. (Default: 1; max: 30)
    pub count: Option<u32>,
}

impl RandomPhotosOptions {
    pub fn validate(&self) -> Result<(), UnsplashError> {
        check_max_items(self.count)?;
        check_query_or_collections(&self.query, &self.collections)
    }

    pub fn query(&self) -> Vec<(&'static str, String)> {
        let mut query = Vec::new();
        if !self.collections.is_empty() {
            query.push(("collections", self.collections.join(",")));
        }
        if self.featured {
            query.push(("featured", "true".to_string()));
        }
        if let Some(username) = non_empty(&self.username) {
            query.push(("username", username.to_string()));
        }
        if let Some(q) = non_empty(&self.query) {
            query.push(("query", q.to_string()));
        }
        if let Some(orientation) = self.orientation {
            query.push(("orientation", <&str>::from(orientation).to_string()));
        }
        // Without count the API answers with a single object instead of a list
        query.push(("count", or_default(self.count, 1).to_string()));
        query
    }
}

/// Options for [`Client::photos`] and [`Client::curated_photos`]
#[derive(Debug, Clone, Default)]
pub struct PhotosOptions {
    /// Page number to retrieve. (Default: 1)
    pub page: Option<u32>,
    /// Number of items per page. (Default: 10; max: 30)
    pub per_page: Option<u32>,
    /// How to sort the photos. (Default: popular)
    pub order_by: OrderBy,
}

impl PhotosOptions {
    pub fn validate(&self) -> Result<(), UnsplashError> {
        check_max_items(self.per_page)
    }

    pub fn query(&self) -> Vec<(&'static str, String)> {
        vec![
            ("page", or_default(self.page, 1).to_string()),
            ("per_page", or_default(self.per_page, 10).to_string()),
            ("order_by", <&str>::from(self.order_by).to_string()),
        ]
    }
}

/// Options for [`Client::photo_statistics`]
#[derive(Debug, Clone, Default)]
pub struct PhotoStatisticsOptions {
    /// The public id of the photo
    pub id: String,
    /// The frequency of the stats. (Default: days)
    pub resolution: Resolution,
    /// The amount for each stat. (Default: 1; max: 30)
    pub quantity: Option<u32>,
}

impl PhotoStatisticsOptions {
    pub fn validate(&self) -> Result<(), UnsplashError> {
        check_id(&self.id)?;
        check_max_items(self.quantity)
    }

    pub fn query(&self) -> Vec<(&'static str, String)> {
        vec![
            ("resolution", <&str>::from(self.resolution).to_string()),
            ("quantity", or_default(self.quantity, 1).to_string()),
        ]
    }
}

#[derive(Debug, Clone, Default)]
pub struct UpdateLocation {
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
    pub name: Option<String>,
    pub city: Option<String>,
    pub country: Option<String>,
    pub confidential: Option<bool>,
}

#[derive(Debug, Clone, Default)]
pub struct UpdateExif {
    pub make: Option<String>,
    pub model: Option<String>,
    pub exposure_time: Option<String>,
    pub aperture_value: Option<String>,
    pub focal_length: Option<String>,
    pub iso_speed_ratings: Option<String>,
}

/// Options for [`Client::update_photo`]. Only the fields that are set are sent.
#[derive(Debug, Clone, Default)]
pub struct UpdatePhotoOptions {
    pub id: String,
    pub location: UpdateLocation,
    pub exif: UpdateExif,
}

impl UpdatePhotoOptions {
    pub fn validate(&self) -> Result<(), UnsplashError> {
        check_id(&self.id)
    }

    pub fn query(&self) -> Vec<(&'static str, String)> {
        let exif = &self.exif;
        let location = &self.location;
        let text_fields = [
            ("exif[make]", &exif.make),
            ("exif[model]", &exif.model),
            ("exif[exposure_time]", &exif.exposure_time),
            ("exif[aperture_value]", &exif.aperture_value),
            ("exif[focal_length]", &exif.focal_length),
            ("exif[iso_speed_ratings]", &exif.iso_speed_ratings),
            ("location[name]", &location.name),
            ("location[city]", &location.city),
            ("location[country]", &location.country),
        ];

        let mut query: Vec<(&'static str, String)> = text_fields
            .into_iter()
            .filter_map(|(k, v)| non_empty(v).map(|v| (k, v.to_string())))
            .collect();

        if let Some(latitude) = location.latitude {
            query.push(("location[latitude]", format!("{latitude:.10}")));
        }
        if let Some(longitude) = location.longitude {
            query.push(("location[longitude]", format!("{longitude:.10}")));
        }
        if let Some(confidential) = location.confidential {
            query.push(("location[confidential]", confidential.to_string()));
        }
        query
    }
}

impl Client {
    /// Retrieves a single page of random photos
    pub async fn random_photos(
        &self,
        opts: &RandomPhotosOptions,
    ) -> Result<ApiResponse<Vec<Photo>>, UnsplashError> {
        opts.validate()?;
        self.api_client.get("photos/random", Some(&opts.query())).await
    }

    /// Retrieves a single page from the editorial feed
    pub async fn photos(&self, opts: &PhotosOptions) -> Result<ApiResponse<Vec<Photo>>, UnsplashError> {
        opts.validate()?;
        self.api_client.get("photos", Some(&opts.query())).await
    }

    pub async fn curated_photos(
        &self,
        opts: &PhotosOptions,
    ) -> Result<ApiResponse<Vec<Photo>>, UnsplashError> {
        opts.validate()?;
        self.api_client.get("photos/curated", Some(&opts.query())).await
    }

    /// Retrieves a single photo
    pub async fn photo(&self, id: &str) -> Result<ApiResponse<Photo>, UnsplashError> {
        check_id(id)?;
        self.api_client.get(&photo_path(id, ""), None).await
    }

    pub async fn photo_statistics(
        &self,
        opts: &PhotoStatisticsOptions,
    ) -> Result<ApiResponse<PhotoStatistics>, UnsplashError> {
        opts.validate()?;
        self.api_client
            .get(&photo_path(&opts.id, "/statistics"), Some(&opts.query()))
            .await
    }

    /// Retrieves the download link for a photo.
    ///
    /// Applications are expected to call this whenever a photo is downloaded.
    pub async fn photo_download(&self, id: &str) -> Result<ApiResponse<PhotoDownload>, UnsplashError> {
        check_id(id)?;
        self.api_client.get(&photo_path(id, "/download"), None).await
    }

    /// Updates the location and exif data of a photo. Requires the `write_photos` scope.
    pub async fn update_photo(
        &self,
        opts: &UpdatePhotoOptions,
    ) -> Result<ApiResponse<Photo>, UnsplashError> {
        opts.validate()?;
        self.api_client
            .put(&photo_path(&opts.id, ""), Some(&opts.query()))
            .await
    }

    /// Likes a photo on behalf of the user. Requires the `write_likes` scope.
    pub async fn like_photo(&self, id: &str) -> Result<ApiResponse<PhotoLike>, UnsplashError> {
        check_id(id)?;
        self.api_client.post(&photo_path(id, "/like"), None).await
    }

    /// Removes the user's like of a photo. Requires the `write_likes` scope.
    pub async fn unlike_photo(&self, id: &str) -> Result<ApiResponse<PhotoLike>, UnsplashError> {
        check_id(id)?;
        self.api_client.delete(&photo_path(id, "/like"), None).await
    }

    /// Pages through the editorial feed, yielding each photo.
    ///
    /// Pages are requested at the maximum page size until a short page comes
    /// back or the reported total has been reached.
    pub fn photos_stream(&self, order_by: OrderBy) -> impl Stream<Item = Result<Photo, UnsplashError>> {
        try_stream! {
            let mut page = 1;
            let mut seen: u64 = 0;

            loop {
                let opts = PhotosOptions {
                    page: Some(page),
                    per_page: Some(MAX_LIST_ITEMS),
                    order_by,
                };
                let resp = self.photos(&opts).await?;
                let total = resp.pagination.map(|p| p.total);
                let is_done = resp.payload.len() < MAX_LIST_ITEMS as usize;

                for photo in resp.payload {
                    seen += 1;
                    yield photo
                }

                if is_done || total.is_some_and(|total| seen >= total) {
                    break;
                }
                page += 1;
            }
        }
    }
}
