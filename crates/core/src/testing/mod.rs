//! Testing utilities and mock implementations.
//!
//! Provides a mock implementation of the adoption catalog boundary so the
//! search box, orchestration screen and favorites workflow can be exercised
//! without a real service.
//!
//! # Example
//!
//! ```rust,ignore
//! use pawfinder_core::testing::{fixtures, MockCatalog};
//!
//! let catalog = MockCatalog::new();
//! catalog.set_dogs(fixtures::dog_pack(47)).await;
//! catalog.set_breeds(vec!["Pug".to_string()]).await;
//!
//! // Use behind Arc<dyn AdoptionCatalog>...
//! ```

mod mock_catalog;

pub use mock_catalog::MockCatalog;

/// Test fixtures and helper functions.
pub mod fixtures {
    use crate::api::{Dog, Location};

    /// Create a dog record with a derived image URL.
    pub fn dog(id: &str, name: &str, breed: &str, age: u8, zip_code: &str) -> Dog {
        Dog {
            id: id.to_string(),
            img: format!("https://img.example/{id}.jpg"),
            name: name.to_string(),
            age,
            zip_code: zip_code.to_string(),
            breed: breed.to_string(),
        }
    }

    /// Create a location record with zeroed coordinates.
    pub fn location(zip_code: &str, city: &str, state: &str) -> Location {
        Location {
            zip_code: zip_code.to_string(),
            latitude: 0.0,
            longitude: 0.0,
            city: city.to_string(),
            state: state.to_string(),
            county: format!("{city} County"),
        }
    }

    /// Create a deterministic corpus of `count` dogs across five breeds.
    pub fn dog_pack(count: usize) -> Vec<Dog> {
        (0..count)
            .map(|i| {
                dog(
                    &format!("dog-{i:03}"),
                    &format!("Dog {i}"),
                    &format!("Breed {}", i % 5),
                    (i % 15) as u8,
                    &format!("{:05}", 10_000 + i % 100),
                )
            })
            .collect()
    }
}
