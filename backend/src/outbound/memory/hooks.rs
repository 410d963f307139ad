//! Per-entity filter predicates and sort comparators.

use std::cmp::Ordering;

use crate::domain::ports::{SearchHooks, contains_ignore_case};
use crate::domain::{
    CAST_MEMBER_SORTABLE_FIELDS, CATEGORY_SORTABLE_FIELDS, CastMember, CastMemberFilter, Category,
    CategoryFilter, Entity, GENRE_SORTABLE_FIELDS, Genre, GenreFilter,
};

fn compare_common<E: Entity>(field: &str, name: fn(&E) -> &str, left: &E, right: &E) -> Ordering {
    match field {
        "name" => name(left).cmp(name(right)),
        "created_at" => left.created_at().cmp(&right.created_at()),
        _ => Ordering::Equal,
    }
}

/// Category search: case-insensitive name substring.
pub struct CategorySearch;

impl SearchHooks<Category> for CategorySearch {
    type Filter = CategoryFilter;

    const SORTABLE_FIELDS: &'static [&'static str] = CATEGORY_SORTABLE_FIELDS;

    fn matches(entity: &Category, filter: &CategoryFilter) -> bool {
        contains_ignore_case(entity.name(), filter)
    }

    fn compare_field(field: &str, left: &Category, right: &Category) -> Ordering {
        compare_common(field, Category::name, left, right)
    }
}

/// Cast member search: name substring AND exact role.
pub struct CastMemberSearch;

impl SearchHooks<CastMember> for CastMemberSearch {
    type Filter = CastMemberFilter;

    const SORTABLE_FIELDS: &'static [&'static str] = CAST_MEMBER_SORTABLE_FIELDS;

    fn matches(entity: &CastMember, filter: &CastMemberFilter) -> bool {
        let name_matches = filter
            .name
            .as_deref()
            .is_none_or(|name| contains_ignore_case(entity.name(), name));
        let type_matches = filter
            .cast_member_type
            .is_none_or(|wanted| entity.cast_member_type() == wanted);
        name_matches && type_matches
    }

    fn compare_field(field: &str, left: &CastMember, right: &CastMember) -> Ordering {
        compare_common(field, CastMember::name, left, right)
    }
}

/// Genre search: name substring AND membership of any listed category.
pub struct GenreSearch;

impl SearchHooks<Genre> for GenreSearch {
    type Filter = GenreFilter;

    const SORTABLE_FIELDS: &'static [&'static str] = GENRE_SORTABLE_FIELDS;

    fn matches(entity: &Genre, filter: &GenreFilter) -> bool {
        let name_matches = filter
            .name
            .as_deref()
            .is_none_or(|name| contains_ignore_case(entity.name(), name));
        let category_matches = filter.categories_id.as_ref().is_none_or(|ids| {
            ids.iter()
                .any(|id| entity.categories_id().contains(id))
        });
        name_matches && category_matches
    }

    fn compare_field(field: &str, left: &Genre, right: &Genre) -> Ordering {
        compare_common(field, Genre::name, left, right)
    }
}
