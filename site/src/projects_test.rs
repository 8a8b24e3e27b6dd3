use super::*;

// --- Catalog shape ---

#[test]
fn catalog_has_twelve_projects() {
    assert_eq!(CATALOG.len(), 12);
}

#[test]
fn ids_are_unique_and_ascending() {
    for pair in CATALOG.windows(2) {
        assert!(pair[0].id < pair[1].id);
    }
}

#[test]
fn image_paths_follow_the_asset_convention() {
    for project in CATALOG {
        assert!(project.image.starts_with("/images/project-"));
        assert!(project.image.ends_with(".jpg"));
    }
}

#[test]
fn titles_and_categories_are_nonempty() {
    for project in CATALOG {
        assert!(!project.title.is_empty());
        assert!(!project.category.is_empty());
    }
}

#[test]
fn the_featured_project_takes_the_big_slot() {
    assert_eq!(CATALOG[4].size, ProjectSize::Big);
    assert_eq!(CATALOG[4].category, "Featured");
}

// --- Tile classes ---

#[test]
fn tile_class_always_includes_the_base_class() {
    for size in [ProjectSize::Normal, ProjectSize::Wide, ProjectSize::Tall, ProjectSize::Big] {
        assert!(size.tile_class().starts_with("project-tile"));
    }
}

#[test]
fn tile_class_adds_span_modifiers() {
    assert_eq!(ProjectSize::Normal.tile_class(), "project-tile");
    assert!(ProjectSize::Wide.tile_class().contains("--wide"));
    assert!(ProjectSize::Tall.tile_class().contains("--tall"));
    assert!(ProjectSize::Big.tile_class().contains("--big"));
}
