/*
 * Copyright (c) 2025 kazhuravlev and Contributors.
 * Licensed under either of
 *  - Apache License, Version 2.0 <http://www.apache.org/licenses/LICENSE-2.0> OR
 *  - MIT license <http://opensource.org/licenses/MIT>
 *  at your option.
 */

#[cfg(test)]
mod test {
    use unsplash::v1::{
        MAX_LIST_ITEMS, OrderBy, Orientation, PhotoStatisticsOptions, PhotosOptions,
        RandomPhotosOptions, Resolution, SearchCollectionsOptions, SearchPhotosOptions,
        UnsplashError, UpdateExif, UpdateLocation, UpdatePhotoOptions,
    };

    fn value<'a>(query: &'a [(&'static str, String)], key: &str) -> Option<&'a str> {
        query.iter().find(|(k, _)| *k == key).map(|(_, v)| v.as_str())
    }

    #[test]
    fn random_photos_defaults() {
        let opts = RandomPhotosOptions::default();
        assert!(opts.validate().is_ok());
        assert_eq!(opts.query(), vec![("count", "1".to_string())]);

        let opts = RandomPhotosOptions {
            count: Some(0),
            ..Default::default()
        };
        assert_eq!(value(&opts.query(), "count"), Some("1"));
    }

    #[test]
    fn random_photos_all_fields() {
        let opts = RandomPhotosOptions {
            collections: vec!["1".into(), "2".into()],
            featured: true,
            username: Some("jimmy".into()),
            query: None,
            orientation: Some(Orientation::Squarish),
            count: Some(MAX_LIST_ITEMS),
        };
        assert!(opts.validate().is_ok());

        let query = opts.query();
        assert_eq!(value(&query, "collections"), Some("1,2"));
        assert_eq!(value(&query, "featured"), Some("true"));
        assert_eq!(value(&query, "username"), Some("jimmy"));
        assert_eq!(value(&query, "orientation"), Some("squarish"));
        assert_eq!(value(&query, "count"), Some("30"));
        assert_eq!(value(&query, "query"), None);
    }

    #[test]
    fn random_photos_validation() {
        let too_many = RandomPhotosOptions {
            count: Some(31),
            ..Default::default()
        };
        assert!(matches!(too_many.validate(), Err(UnsplashError::BadRequest(_))));

        let both = RandomPhotosOptions {
            query: Some("dogs".into()),
            collections: vec!["1".into()],
            ..Default::default()
        };
        assert!(matches!(both.validate(), Err(UnsplashError::BadRequest(_))));

        // An empty query doesn't count as one
        let empty_query = RandomPhotosOptions {
            query: Some(String::new()),
            collections: vec!["1".into()],
            ..Default::default()
        };
        assert!(empty_query.validate().is_ok());
    }

    #[test]
    fn photos_defaults() {
        let query = PhotosOptions::default().query();
        assert_eq!(
            query,
            vec![
                ("page", "1".to_string()),
                ("per_page", "10".to_string()),
                ("order_by", "popular".to_string()),
            ]
        );

        let opts = PhotosOptions {
            page: Some(4),
            per_page: Some(30),
            order_by: OrderBy::Oldest,
        };
        assert!(opts.validate().is_ok());
        assert_eq!(value(&opts.query(), "order_by"), Some("oldest"));

        let opts = PhotosOptions {
            per_page: Some(31),
            ..Default::default()
        };
        assert!(matches!(opts.validate(), Err(UnsplashError::BadRequest(_))));
    }

    #[test]
    fn statistics_options() {
        let opts = PhotoStatisticsOptions::default();
        assert!(matches!(opts.validate(), Err(UnsplashError::BadRequest(_))));

        let opts = PhotoStatisticsOptions {
            id: "abc".into(),
            resolution: Resolution::Days,
            quantity: None,
        };
        assert!(opts.validate().is_ok());
        assert_eq!(
            opts.query(),
            vec![("resolution", "days".to_string()), ("quantity", "1".to_string())]
        );

        let opts = PhotoStatisticsOptions {
            id: "abc".into(),
            quantity: Some(31),
            ..Default::default()
        };
        assert!(matches!(opts.validate(), Err(UnsplashError::BadRequest(_))));
    }

    #[test]
    fn update_photo_only_sends_set_fields() {
        let opts = UpdatePhotoOptions {
            id: "abc".into(),
            ..Default::default()
        };
        assert!(opts.validate().is_ok());
        assert!(opts.query().is_empty());

        let opts = UpdatePhotoOptions {
            id: "abc".into(),
            location: UpdateLocation {
                latitude: Some(45.473298),
                city: Some("Montreal".into()),
                country: Some(String::new()),
                confidential: Some(true),
                ..Default::default()
            },
            exif: UpdateExif {
                model: Some("Canon EOS 40D".into()),
                iso_speed_ratings: Some("100".into()),
                ..Default::default()
            },
        };
        let query = opts.query();
        assert_eq!(value(&query, "location[latitude]"), Some("45.4732980000"));
        assert_eq!(value(&query, "location[city]"), Some("Montreal"));
        assert_eq!(value(&query, "location[country]"), None);
        assert_eq!(value(&query, "location[confidential]"), Some("true"));
        assert_eq!(value(&query, "exif[model]"), Some("Canon EOS 40D"));
        assert_eq!(value(&query, "exif[iso_speed_ratings]"), Some("100"));
        assert_eq!(query.len(), 5);

        let missing_id = UpdatePhotoOptions::default();
        assert!(matches!(missing_id.validate(), Err(UnsplashError::BadRequest(_))));
    }

    #[test]
    fn search_options() {
        let opts = SearchPhotosOptions {
            query: Some("car".into()),
            page: Some(2),
            ..Default::default()
        };
        assert!(opts.validate().is_ok());
        assert_eq!(
            opts.query(),
            vec![
                ("query", "car".to_string()),
                ("page", "2".to_string()),
                ("per_page", "10".to_string()),
            ]
        );

        let opts = SearchCollectionsOptions::default();
        assert!(opts.validate().is_ok());
        assert_eq!(
            opts.query(),
            vec![("page", "1".to_string()), ("per_page", "10".to_string())]
        );
    }
}
