//! Unit tests for category construction and validated mutation.

use rstest::{fixture, rstest};
use serde_json::json;

use super::*;

#[fixture]
fn movie() -> Category {
    Category::create(CategoryDraft::named("Movie").with_description("Feature films"))
        .expect("valid category")
}

#[rstest]
fn create_defaults_to_active() {
    let category = Category::create(CategoryDraft::named("Movie")).expect("valid category");
    assert_eq!(category.name(), "Movie");
    assert_eq!(category.description(), None);
    assert!(category.is_active());
}

#[rstest]
#[case::empty("", "name should not be empty")]
#[case::too_long(
    &"x".repeat(256),
    "name must be shorter than or equal to 255 characters"
)]
fn create_rejects_invalid_names(#[case] name: &str, #[case] message: &str) {
    let err = Category::create(CategoryDraft::named(name)).expect_err("invalid name");
    assert_eq!(err.entity_kind(), "Category");
    assert_eq!(err.errors().get("name"), Some([message.to_owned()].as_slice()));
}

#[rstest]
fn name_at_limit_is_accepted() {
    let name = "é".repeat(255);
    assert!(Category::create(CategoryDraft::named(name)).is_ok());
}

#[rstest]
fn failed_rename_leaves_category_unchanged(mut movie: Category) {
    let before = movie.clone();
    let err = movie.change_name("").expect_err("empty name");
    assert!(err.errors().contains("name"));
    assert_eq!(movie, before);
}

#[rstest]
fn update_changes_both_fields(mut movie: Category) {
    movie
        .update("Documentary", None)
        .expect("valid update");
    assert_eq!(movie.name(), "Documentary");
    assert_eq!(movie.description(), None);
}

#[rstest]
fn change_description_keeps_name(mut movie: Category) {
    movie
        .change_description(Some("Short films".to_owned()))
        .expect("valid description");
    assert_eq!(movie.name(), "Movie");
    assert_eq!(movie.description(), Some("Short films"));
}

#[rstest]
fn activation_toggles(mut movie: Category) {
    movie.deactivate();
    assert!(!movie.is_active());
    movie.activate();
    assert!(movie.is_active());
}

#[rstest]
fn restore_keeps_identity_and_timestamp(movie: Category) {
    let restored = Category::restore(
        movie.id().clone(),
        CategoryDraft::named("Movie")
            .with_description("Feature films")
            .with_active(true),
        movie.created_at(),
    )
    .expect("valid category");
    assert_eq!(restored, movie);
}

#[rstest]
fn json_projection_lists_every_property(movie: Category) {
    let value = movie.to_json().expect("serialise");
    assert_eq!(
        value,
        json!({
            "id": movie.id().as_ref(),
            "name": "Movie",
            "description": "Feature films",
            "is_active": true,
            "created_at": movie.created_at(),
        })
    );
}
