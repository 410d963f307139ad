//! Behavioural tests for category search over the in-memory repository.

use catalog::domain::ports::{Repository, SearchableRepository};
use catalog::domain::{Category, CategoryDraft};
use catalog::outbound::memory::InMemoryCategoryRepository;
use pagination::{SearchInput, SearchParams, SortDirection};
use rstest::rstest;
use serde_json::json;

async fn seeded_repo() -> InMemoryCategoryRepository {
    let repo = InMemoryCategoryRepository::new();
    let categories: Vec<Category> = ["a", "AAA", "AaA", "b", "c"]
        .into_iter()
        .map(|name| Category::create(CategoryDraft::named(name)).expect("valid category"))
        .collect();
    repo.bulk_insert(&categories).await.expect("seed categories");
    repo
}

fn params_for(page: i64) -> SearchParams<String> {
    let input: SearchInput = serde_json::from_value(json!({
        "page": page,
        "per_page": 2,
        "sort": "name",
        "filter": "a",
    }))
    .expect("valid search input");
    SearchParams::from_input(&input).expect("text filters always parse")
}

fn names(items: &[Category]) -> Vec<&str> {
    items.iter().map(Category::name).collect()
}

#[rstest]
#[tokio::test]
async fn first_page_sorts_matching_names() {
    let repo = seeded_repo().await;
    let result = repo.search(&params_for(1)).await.expect("search succeeds");

    assert_eq!(names(result.items()), ["AAA", "AaA"]);
    assert_eq!(result.total(), 3);
    assert_eq!(result.current_page(), 1);
    assert_eq!(result.per_page(), 2);
    assert_eq!(result.last_page(), 2);
    assert_eq!(result.sort(), Some("name"));
    assert_eq!(result.sort_dir(), Some(SortDirection::Asc));
    assert_eq!(result.filter().map(String::as_str), Some("a"));
}

#[rstest]
#[tokio::test]
async fn second_page_holds_the_remainder() {
    let repo = seeded_repo().await;
    let result = repo.search(&params_for(2)).await.expect("search succeeds");

    assert_eq!(names(result.items()), ["a"]);
    assert_eq!(result.total(), 3);
    assert_eq!(result.last_page(), 2);
}

#[rstest]
#[tokio::test]
async fn invalid_paging_input_falls_back_to_defaults() {
    let repo = seeded_repo().await;
    let input: SearchInput = serde_json::from_value(json!({
        "page": 1.5,
        "per_page": "lots",
        "sort": "",
        "sort_dir": "sideways",
    }))
    .expect("valid search input");
    let params = SearchParams::<String>::from_input(&input).expect("text filters always parse");

    let result = repo.search(&params).await.expect("search succeeds");
    assert_eq!(result.current_page(), 1);
    assert_eq!(result.per_page(), 15);
    assert_eq!(result.sort(), None);
    assert_eq!(result.sort_dir(), None);
    assert_eq!(result.items().len(), 5);
    assert_eq!(result.last_page(), 1);
}

#[rstest]
#[tokio::test]
async fn pagination_envelope_omits_request_echo() {
    let repo = seeded_repo().await;
    let result = repo.search(&params_for(1)).await.expect("search succeeds");

    let envelope = result.into_pagination(|category| category.name().to_owned());
    assert_eq!(
        serde_json::to_value(&envelope).expect("serialise"),
        json!({
            "items": ["AAA", "AaA"],
            "total": 3,
            "current_page": 1,
            "last_page": 2,
            "per_page": 2,
        })
    );
}
