//! Browse flow integration tests.
//!
//! These tests drive the full search path: search-box input -> criterion
//! commit -> filter merge -> query derivation -> fetch -> pagination,
//! plus the favorites/match workflow, against the mock catalog.

use std::sync::Arc;

use tokio::sync::mpsc::{self, UnboundedReceiver};

use pawfinder_core::{
    testing::{fixtures, MockCatalog},
    AdoptionCatalog, Criterion, Favorites, GeoPanel, MatchOutcome, PageItem, SearchBox,
    SearchBoxEvent, SearchScreen,
};

/// Test helper wiring the search box, screen and favorites to one mock.
struct TestHarness {
    catalog: Arc<MockCatalog>,
    api: Arc<dyn AdoptionCatalog>,
    search_box: SearchBox,
    screen: SearchScreen,
    geo: GeoPanel,
    favorites: Favorites,
    events: UnboundedReceiver<SearchBoxEvent>,
}

impl TestHarness {
    async fn new() -> Self {
        let catalog = Arc::new(MockCatalog::new());
        catalog.set_dogs(fixtures::dog_pack(47)).await;
        catalog
            .set_breeds((0..5).map(|i| format!("Breed {i}")).collect())
            .await;

        let api: Arc<dyn AdoptionCatalog> = catalog.clone();
        let breeds = api.breeds().await.unwrap();

        let (tx, events) = mpsc::unbounded_channel();

        Self {
            catalog,
            api,
            search_box: SearchBox::new(breeds, tx),
            screen: SearchScreen::new(),
            geo: GeoPanel::new(),
            favorites: Favorites::new(),
            events,
        }
    }

    /// Feed search-box input and merge any committed criteria, refreshing
    /// like the shell does after every filter change.
    async fn type_input(&mut self, raw: &str) {
        if let Some(criteria) = self.search_box.input(raw, &self.api) {
            self.screen.apply_criteria(self.api.as_ref(), &criteria).await;
            self.screen.refresh(self.api.as_ref()).await.unwrap();
        }
    }
}

#[tokio::test]
async fn test_search_and_paginate() {
    let mut harness = TestHarness::new().await;

    harness.screen.refresh(harness.api.as_ref()).await.unwrap();
    assert_eq!(harness.screen.total(), 47);
    assert_eq!(harness.screen.total_pages(), 3);
    assert_eq!(harness.screen.dogs().len(), 20);

    assert!(harness.screen.next_page());
    harness.screen.refresh(harness.api.as_ref()).await.unwrap();
    assert_eq!(harness.screen.dogs().len(), 20);

    assert!(harness.screen.go_to_page(3));
    harness.screen.refresh(harness.api.as_ref()).await.unwrap();
    assert_eq!(harness.screen.dogs().len(), 7);

    assert!(!harness.screen.next_page());
    assert_eq!(
        harness.screen.page_items(),
        vec![PageItem::Page(1), PageItem::Page(2), PageItem::Page(3)]
    );
}

#[tokio::test]
async fn test_committed_breed_filters_results() {
    let mut harness = TestHarness::new().await;

    harness.type_input("Breed 1, x").await;

    assert_eq!(harness.screen.filters().breeds, vec!["Breed 1"]);
    assert_eq!(harness.screen.filters().page, 1);
    // 47 dogs across 5 breeds: Breed 1 covers indices 1, 6, 11, ...
    assert_eq!(harness.screen.total(), 10);

    let recorded = harness.catalog.recorded_dog_searches().await;
    let last = recorded.last().unwrap();
    assert_eq!(last.breeds, vec!["Breed 1"]);
    assert_eq!(last.size, Some(20));
    assert_eq!(last.from, Some(0));
}

#[tokio::test(start_paused = true)]
async fn test_city_suggestion_arrives_after_debounce() {
    let mut harness = TestHarness::new().await;
    harness
        .catalog
        .set_locations(vec![
            fixtures::location("02108", "Boston", "MA"),
            fixtures::location("02109", "Boston", "MA"),
        ])
        .await;

    harness.search_box.input("bost", &harness.api);

    // The debounced lookup fires after the quiet period and delivers an
    // event; paused time advances automatically.
    let event = harness.events.recv().await.unwrap();
    assert!(harness.search_box.apply_event(event));

    let suggestions = harness.search_box.suggestions();
    assert!(suggestions.contains(&Criterion::City {
        city: "Boston".to_string(),
        state: "MA".to_string(),
    }));
    // Duplicate (city, state) pairs collapse to one suggestion.
    assert_eq!(
        suggestions
            .iter()
            .filter(|c| matches!(c, Criterion::City { .. }))
            .count(),
        1
    );
}

#[tokio::test(start_paused = true)]
async fn test_superseded_city_lookup_cannot_resurrect_suggestions() {
    let mut harness = TestHarness::new().await;
    harness
        .catalog
        .set_locations(vec![fixtures::location("02108", "Boston", "MA")])
        .await;

    harness.search_box.input("bos", &harness.api);
    harness.search_box.input("bost", &harness.api);

    // Only the newest lookup's event survives; the first task was aborted
    // inside its debounce window.
    let event = harness.events.recv().await.unwrap();
    assert!(harness.search_box.apply_event(event));

    // A fabricated completion from the superseded generation is dropped.
    let stale = SearchBoxEvent::CitySuggestions {
        generation: 1,
        options: vec![Criterion::City {
            city: "Stale".to_string(),
            state: "ZZ".to_string(),
        }],
    };
    assert!(!harness.search_box.apply_event(stale));
    assert!(!harness.search_box.suggestions().contains(&Criterion::City {
        city: "Stale".to_string(),
        state: "ZZ".to_string(),
    }));
}

#[tokio::test]
async fn test_city_selection_resolves_zip_filter() {
    let mut harness = TestHarness::new().await;
    harness
        .catalog
        .set_locations(vec![
            fixtures::location("02108", "Boston", "MA"),
            fixtures::location("02109", "Boston", "MA"),
        ])
        .await;

    let criteria = harness
        .search_box
        .select(Criterion::City {
            city: "Boston".to_string(),
            state: "MA".to_string(),
        })
        .unwrap();
    harness
        .screen
        .apply_criteria(harness.api.as_ref(), &criteria)
        .await;

    assert_eq!(harness.screen.filters().zip_codes, vec!["02108", "02109"]);
}

#[tokio::test]
async fn test_geo_panel_emission_replaces_zip_filter() {
    let mut harness = TestHarness::new().await;
    harness
        .catalog
        .set_locations(vec![
            fixtures::location("90001", "Los Angeles", "CA"),
            fixtures::location("94102", "San Francisco", "CA"),
        ])
        .await;

    harness.screen.set_geo_zip_codes(vec!["10001".to_string()]);

    let zips = harness
        .geo
        .set_states(harness.api.as_ref(), vec!["CA".to_string()])
        .await
        .unwrap();
    harness.screen.set_geo_zip_codes(zips);

    assert_eq!(harness.screen.filters().zip_codes, vec!["90001", "94102"]);
    assert_eq!(harness.screen.filters().page, 1);

    // Reset emits an empty filter.
    let empty = harness.geo.reset();
    harness.screen.set_geo_zip_codes(empty);
    assert!(harness.screen.filters().zip_codes.is_empty());
}

#[tokio::test]
async fn test_favorites_match_flow() {
    let mut harness = TestHarness::new().await;

    harness.screen.refresh(harness.api.as_ref()).await.unwrap();
    let first_two: Vec<String> = harness.screen.dogs()[..2]
        .iter()
        .map(|dog| dog.id.clone())
        .collect();

    for id in &first_two {
        harness.favorites.toggle(id);
    }

    let records = harness.favorites.fetch_details(harness.api.as_ref()).await;
    assert_eq!(records.len(), 2);

    let outcome = harness
        .favorites
        .submit_match(harness.api.as_ref())
        .await
        .unwrap();
    match outcome {
        MatchOutcome::Matched { match_id, dog } => {
            assert_eq!(match_id, first_two[0]);
            assert!(dog.is_some());
        }
        other => panic!("unexpected outcome: {other:?}"),
    }

    assert!(harness.favorites.is_empty());
    assert!(harness.favorites.records().is_empty());
    assert_eq!(harness.catalog.match_count().await, 1);
}

#[tokio::test]
async fn test_full_reset_clears_box_panel_and_screen() {
    let mut harness = TestHarness::new().await;

    harness.type_input("Breed 2, 3, 10001, x").await;
    assert!(!harness.screen.filters().breeds.is_empty());

    harness.search_box.reset();
    let _ = harness.geo.reset();
    harness.screen.reset();

    assert!(harness.search_box.selected().is_empty());
    assert!(harness.search_box.suggestions().is_empty());
    assert!(harness.geo.selected().is_empty());
    assert!(harness.screen.filters().breeds.is_empty());
    assert!(harness.screen.filters().zip_codes.is_empty());
    assert_eq!(harness.screen.filters().age, None);
    assert_eq!(harness.screen.filters().page, 1);
}
