//! Unit tests for the genre aggregate and its category-set invariants.

use rstest::{fixture, rstest};
use serde_json::json;

use super::*;

fn category_ids(count: usize) -> Vec<CategoryId> {
    (0..count).map(|_| CategoryId::generate()).collect()
}

fn genre_with(ids: &[CategoryId]) -> Genre {
    let draft = GenreDraft::new("Drama", ids.iter().cloned()).expect("valid ids");
    Genre::create(draft).expect("valid genre")
}

fn members(genre: &Genre) -> IdentitySet<Category> {
    genre.categories_id().clone()
}

#[fixture]
fn ids() -> Vec<CategoryId> {
    category_ids(3)
}

#[rstest]
fn draft_accepts_raw_strings_and_identities(ids: Vec<CategoryId>) {
    let raw: Vec<String> = ids.iter().map(ToString::to_string).collect();
    let from_raw = GenreDraft::new("Drama", raw).expect("valid raw ids");
    let from_ids = GenreDraft::new("Drama", ids.clone()).expect("valid ids");
    assert_eq!(from_raw, from_ids);
}

#[rstest]
fn draft_collapses_duplicate_ids(ids: Vec<CategoryId>) {
    let repeated = [ids[0].clone(), ids[0].clone()];
    let draft = GenreDraft::new("Drama", repeated).expect("valid ids");
    assert_eq!(draft.categories_id.len(), 1);
}

#[rstest]
fn draft_rejects_malformed_ids() {
    let err = GenreDraft::new("Drama", ["nope"]).expect_err("malformed id");
    assert_eq!(err.kind(), "Category");
    assert_eq!(err.value(), "nope");
}

#[rstest]
fn create_reports_every_violated_field() {
    let draft = GenreDraft::new("", Vec::<CategoryId>::new()).expect("no ids to parse");
    let err = Genre::create(draft).expect_err("invalid genre");
    let fields: Vec<&str> = err.errors().fields().collect();
    assert_eq!(fields, ["categories_id", "name"]);
    assert_eq!(
        err.errors().get("categories_id"),
        Some(["categories_id should not be empty".to_owned()].as_slice())
    );
}

#[rstest]
fn add_is_idempotent(ids: Vec<CategoryId>) {
    let mut genre = genre_with(&ids[..1]);
    assert!(genre.add_category_id(ids[1].clone()).expect("valid add"));
    assert!(!genre.add_category_id(ids[1].clone()).expect("valid add"));
    assert_eq!(genre.categories_id().len(), 2);
}

#[rstest]
fn removing_last_category_fails_and_keeps_it(ids: Vec<CategoryId>) {
    let mut genre = genre_with(&ids[..1]);
    let err = genre
        .remove_category_id(&ids[0])
        .expect_err("cannot empty the set");
    assert!(err.errors().contains("categories_id"));
    assert_eq!(genre.categories_id().len(), 1);
    assert!(genre.categories_id().contains(&ids[0]));
}

#[rstest]
fn remove_drops_a_member(ids: Vec<CategoryId>) {
    let mut genre = genre_with(&ids);
    assert!(genre.remove_category_id(&ids[0]).expect("valid remove"));
    assert!(!genre.categories_id().contains(&ids[0]));
    assert!(!genre.remove_category_id(&ids[0]).expect("absent id"));
}

#[rstest]
fn update_replaces_membership(ids: Vec<CategoryId>) {
    let mut genre = genre_with(&ids[..2]);
    let replacement = [ids[2].clone(), ids[2].clone()];
    assert!(genre.update_categories_id(replacement).expect("valid update"));
    let expected: IdentitySet<Category> = [ids[2].clone()].into_iter().collect();
    assert_eq!(members(&genre), expected);
}

#[rstest]
fn empty_update_and_sync_are_no_ops(ids: Vec<CategoryId>) {
    let mut genre = genre_with(&ids);
    let before = members(&genre);

    assert!(!genre.update_categories_id(Vec::new()).expect("no-op"));
    assert!(genre.sync_categories(Vec::new()).expect("no-op").is_empty());
    assert_eq!(members(&genre), before);
}

#[rstest]
fn sync_reports_removed_then_added(ids: Vec<CategoryId>) {
    let mut genre = genre_with(&ids[..2]);
    let diff = genre
        .sync_categories([ids[1].clone(), ids[2].clone()])
        .expect("valid sync");

    assert_eq!(diff.removed, vec![ids[0].clone()]);
    assert_eq!(diff.added, vec![ids[2].clone()]);
    let expected: IdentitySet<Category> = ids[1..].iter().cloned().collect();
    assert_eq!(members(&genre), expected);
}

#[rstest]
fn sync_with_current_members_is_idempotent(ids: Vec<CategoryId>) {
    let mut genre = genre_with(&ids);
    let before = members(&genre);
    let current: Vec<CategoryId> = genre.categories_id().iter().cloned().collect();

    let diff = genre.sync_categories(current).expect("valid sync");
    assert!(diff.is_empty());
    assert_eq!(members(&genre), before);
}

#[rstest]
fn failed_rename_keeps_categories(ids: Vec<CategoryId>) {
    let mut genre = genre_with(&ids);
    let before = genre.clone();
    assert!(genre.change_name("").is_err());
    assert_eq!(genre, before);
}

#[rstest]
fn json_lists_category_ids(ids: Vec<CategoryId>) {
    let genre = genre_with(&ids[..1]);
    let value = genre.to_json().expect("serialise");
    assert_eq!(value["categories_id"], json!([ids[0].as_ref()]));
    assert_eq!(value["is_active"], json!(true));
    assert_eq!(value["id"], json!(genre.id().as_ref()));
}

#[rstest]
fn filter_collects_every_bad_category_id(ids: Vec<CategoryId>) {
    let raw = json!({"categories_id": ["bad-1", ids[0].as_ref(), "bad-2"]});
    let err = GenreFilter::parse(&raw).expect_err("malformed ids");
    assert_eq!(err.errors().get("categories_id").map(<[String]>::len), Some(2));
}

#[rstest]
fn filter_combines_name_and_categories(ids: Vec<CategoryId>) {
    let raw = json!({"name": "dra", "categories_id": ids[0].as_ref()});
    let filter = GenreFilter::parse(&raw)
        .expect("valid filter")
        .expect("populated filter");
    assert_eq!(filter.name.as_deref(), Some("dra"));
    assert_eq!(filter.categories_id, Some(vec![ids[0].clone()]));
}

#[rstest]
#[case::null(json!(null))]
#[case::empty_ids(json!({"categories_id": []}))]
#[case::empty_string(json!(""))]
#[case::null_ids(json!({"categories_id": null}))]
#[case::empty_id_string(json!({"categories_id": ""}))]
fn empty_filters_disable_filtering(#[case] raw: serde_json::Value) {
    assert_eq!(GenreFilter::parse(&raw), Ok(None));
}

#[rstest]
#[case::object_element(json!({"categories_id": [{}]}), 1)]
#[case::object_value(json!({"categories_id": {"a": 1}}), 1)]
#[case::nested_array(json!({"categories_id": [["x"], {"y": 2}]}), 2)]
#[case::mixed(json!({"categories_id": [null, true, []]}), 2)]
fn non_scalar_category_ids_are_rejected(
    #[case] raw: serde_json::Value,
    #[case] reported: usize,
) {
    let err = GenreFilter::parse(&raw).expect_err("malformed ids");
    assert_eq!(
        err.errors().get("categories_id").map(<[String]>::len),
        Some(reported)
    );
}
