//! Integration tests for the project catalog.
//!
//! Tests cover:
//! - Seed content and its newest-first order
//! - Insertion at the front of the list
//! - Case-insensitive search over title and location

mod common;

use common::*;

#[test]
fn test_seeded_catalog_order() {
    let catalog = seeded_catalog();
    let titles: Vec<&str> = catalog.projects().iter().map(|p| p.title()).collect();
    assert_eq!(
        titles,
        vec![
            "Coastal Mangrove Restoration",
            "Seagrass Bed Restoration",
            "Coral Reef Restoration",
        ]
    );
    assert_eq!(catalog.projects()[0].planted(), "2023-05-15");
    assert_eq!(catalog.projects()[2].area(), "20 acres / Coral Reef");
    assert!(catalog.projects().iter().all(|p| p.images().len() == 1));
}

#[test]
fn test_insert_prepends() {
    let mut catalog = seeded_catalog();
    let placeholder = ImageRef::new(PLACEHOLDER);
    let project = Project::new(
        "Dune Grass Replanting",
        "Netherlands",
        "8 acres / Saltmarsh",
        "2025-04-01",
        images(&["file:///tmp/dune.png"]),
        &placeholder,
    );
    let id = project.id();
    catalog.insert(project);

    let all = catalog.filter("");
    assert_eq!(all.len(), 4);
    assert_eq!(all[0].id(), id);
    assert_eq!(all[1].title(), "Coastal Mangrove Restoration");
}

#[test]
fn test_filter_matches_title_or_location() {
    let catalog = seeded_catalog();

    let fiji = catalog.filter("fiji");
    assert_eq!(fiji.len(), 1);
    assert_eq!(fiji[0].title(), "Coral Reef Restoration");

    let reef = catalog.filter("REEF");
    assert_eq!(reef.len(), 1);
    assert_eq!(reef[0].location(), "Fiji");

    assert!(catalog.filter("brazil").is_empty());

    // "restoration" appears in every seed title; order is kept
    let all: Vec<&str> = catalog
        .filter("Restoration")
        .into_iter()
        .map(|p| p.title())
        .collect();
    assert_eq!(all.len(), 3);
    assert_eq!(all[0], "Coastal Mangrove Restoration");
}

#[test]
fn test_filter_does_not_mutate() {
    let catalog = seeded_catalog();
    let _ = catalog.filter("indonesia");
    assert_eq!(catalog.len(), 3);
    assert_eq!(catalog.filter("").len(), 3);
}

#[test]
fn test_project_without_images_gets_placeholder() {
    let placeholder = ImageRef::new(PLACEHOLDER);
    let project = Project::new("Bare", "Nowhere", "0 acres / Seagrass", "2025-01-01", vec![], &placeholder);
    assert_eq!(project.images(), &[placeholder.clone()]);
    assert_eq!(project.cover(), &placeholder);
}
