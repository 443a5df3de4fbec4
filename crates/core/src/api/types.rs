//! Wire types for the adoption service API.

use serde::{Deserialize, Serialize};

/// A dog record from the catalog.
///
/// Immutable once fetched, keyed by `id`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Dog {
    /// Catalog identifier.
    pub id: String,
    /// Photo URL.
    pub img: String,
    /// Dog's name.
    pub name: String,
    /// Age in years.
    pub age: u8,
    /// ZIP code of the shelter location.
    pub zip_code: String,
    /// Breed name.
    pub breed: String,
}

/// Query parameters for `GET /dogs/search`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DogSearchParams {
    /// Breed names to filter by (repeated `breeds` query key).
    pub breeds: Vec<String>,
    /// ZIP codes to filter by (repeated `zipCodes` query key). Empty means
    /// no geographic filter and the key is omitted.
    pub zip_codes: Vec<String>,
    /// Inclusive lower age bound.
    pub age_min: Option<u8>,
    /// Inclusive upper age bound.
    pub age_max: Option<u8>,
    /// Page size.
    pub size: Option<u32>,
    /// Result offset.
    pub from: Option<u32>,
    /// Sort directive, e.g. `breed:asc`.
    pub sort: Option<String>,
}

impl DogSearchParams {
    /// Flatten into query pairs, repeating keys for list parameters and
    /// omitting unset optionals.
    pub fn to_query_pairs(&self) -> Vec<(&'static str, String)> {
        let mut pairs = Vec::new();
        for breed in &self.breeds {
            pairs.push(("breeds", breed.clone()));
        }
        for zip in &self.zip_codes {
            pairs.push(("zipCodes", zip.clone()));
        }
        if let Some(age_min) = self.age_min {
            pairs.push(("ageMin", age_min.to_string()));
        }
        if let Some(age_max) = self.age_max {
            pairs.push(("ageMax", age_max.to_string()));
        }
        if let Some(size) = self.size {
            pairs.push(("size", size.to_string()));
        }
        if let Some(from) = self.from {
            pairs.push(("from", from.to_string()));
        }
        if let Some(sort) = &self.sort {
            pairs.push(("sort", sort.clone()));
        }
        pairs
    }
}

/// One page of search results: ordered IDs plus the total match count.
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct DogSearchPage {
    #[serde(rename = "resultIds")]
    pub result_ids: Vec<String>,
    pub total: u32,
}

/// A location record.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Location {
    pub zip_code: String,
    pub latitude: f64,
    pub longitude: f64,
    pub city: String,
    pub state: String,
    pub county: String,
}

/// A corner of a geographic bounding box.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct Coordinates {
    pub lat: f64,
    pub lon: f64,
}

/// Bounding box for `POST /locations/search`.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct GeoBoundingBox {
    pub bottom_left: Coordinates,
    pub top_right: Coordinates,
}

/// Body of `POST /locations/search`. Unset fields are omitted from the
/// serialized request.
#[derive(Debug, Clone, Default, Serialize, PartialEq)]
pub struct LocationSearchParams {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub city: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub states: Option<Vec<String>>,
    #[serde(rename = "geoBoundingBox", skip_serializing_if = "Option::is_none")]
    pub geo_bounding_box: Option<GeoBoundingBox>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub size: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub from: Option<u32>,
}

/// Response of `POST /locations/search`.
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct LocationSearchPage {
    pub results: Vec<Location>,
    pub total: u32,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_query_pairs_repeat_list_keys() {
        let params = DogSearchParams {
            breeds: vec!["Pug".to_string(), "Boxer".to_string()],
            zip_codes: vec!["10001".to_string()],
            age_min: Some(2),
            age_max: Some(2),
            size: Some(20),
            from: Some(40),
            sort: Some("breed:asc".to_string()),
        };

        let pairs = params.to_query_pairs();
        let breeds: Vec<_> = pairs.iter().filter(|(k, _)| *k == "breeds").collect();
        assert_eq!(breeds.len(), 2);
        assert!(pairs.contains(&("ageMin", "2".to_string())));
        assert!(pairs.contains(&("from", "40".to_string())));
        assert!(pairs.contains(&("sort", "breed:asc".to_string())));
    }

    #[test]
    fn test_query_pairs_omit_unset() {
        let params = DogSearchParams {
            breeds: vec![],
            zip_codes: vec![],
            ..Default::default()
        };

        assert!(params.to_query_pairs().is_empty());
    }

    #[test]
    fn test_search_page_deserialization() {
        let json = r#"{"resultIds": ["a", "b"], "total": 47}"#;
        let page: DogSearchPage = serde_json::from_str(json).unwrap();
        assert_eq!(page.result_ids, vec!["a", "b"]);
        assert_eq!(page.total, 47);
    }

    #[test]
    fn test_location_search_params_skip_unset() {
        let params = LocationSearchParams {
            states: Some(vec!["NY".to_string()]),
            size: Some(100),
            ..Default::default()
        };

        let json = serde_json::to_string(&params).unwrap();
        assert!(json.contains("states"));
        assert!(json.contains("size"));
        assert!(!json.contains("city"));
        assert!(!json.contains("geoBoundingBox"));
        assert!(!json.contains("from"));
    }

    #[test]
    fn test_dog_round_trip() {
        let dog = Dog {
            id: "d1".to_string(),
            img: "https://img.example/d1.jpg".to_string(),
            name: "Rex".to_string(),
            age: 3,
            zip_code: "10001".to_string(),
            breed: "Boxer".to_string(),
        };

        let json = serde_json::to_string(&dog).unwrap();
        let parsed: Dog = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, dog);
    }
}
