//! Normalised search parameters.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::filter::SearchFilter;
use crate::input::{SearchInput, positive_or, sort_dir_text, sort_field};

/// Page used when the requested page is missing or invalid.
pub const DEFAULT_PAGE: usize = 1;

/// Page size used when the requested page size is missing or invalid.
pub const DEFAULT_PER_PAGE: usize = 15;

/// Ordering applied to the requested sort field.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortDirection {
    /// Smallest first.
    #[default]
    Asc,
    /// Largest first.
    Desc,
}

impl SortDirection {
    /// Lower-case wire representation.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Asc => "asc",
            Self::Desc => "desc",
        }
    }
}

impl fmt::Display for SortDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Raised when text is neither `asc` nor `desc`.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("sort direction must be asc or desc (got {value:?})")]
pub struct ParseSortDirectionError {
    /// The rejected input.
    pub value: String,
}

impl FromStr for SortDirection {
    type Err = ParseSortDirectionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "asc" => Ok(Self::Asc),
            "desc" => Ok(Self::Desc),
            _ => Err(ParseSortDirectionError {
                value: s.to_owned(),
            }),
        }
    }
}

/// Fallback paging values applied during normalisation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchDefaults {
    per_page: usize,
}

impl SearchDefaults {
    /// Build defaults with a custom page size; zero keeps [`DEFAULT_PER_PAGE`].
    #[must_use]
    pub const fn with_per_page(per_page: usize) -> Self {
        if per_page == 0 {
            Self {
                per_page: DEFAULT_PER_PAGE,
            }
        } else {
            Self { per_page }
        }
    }

    /// Page size used when the request carries none.
    #[must_use]
    pub const fn per_page(self) -> usize {
        self.per_page
    }
}

impl Default for SearchDefaults {
    fn default() -> Self {
        Self::with_per_page(DEFAULT_PER_PAGE)
    }
}

/// Normalised search request.
///
/// ## Invariants
/// - `page` and `per_page` are always at least one.
/// - `sort` is never the empty string.
/// - `sort_dir()` is `None` exactly when `sort` is `None`, and defaults to
///   [`SortDirection::Asc`] otherwise.
///
/// # Examples
///
/// ```
/// use pagination::{SearchInput, SearchParams, SortDirection};
/// use serde_json::json;
///
/// let input = SearchInput {
///     page: Some(json!(-3)),
///     sort: Some(json!("name")),
///     sort_dir: Some(json!("DESC")),
///     ..SearchInput::default()
/// };
/// let Ok(params) = SearchParams::<String>::from_input(&input);
/// assert_eq!(params.page(), 1);
/// assert_eq!(params.sort_dir(), Some(SortDirection::Desc));
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct SearchParams<F> {
    page: usize,
    per_page: usize,
    sort: Option<String>,
    requested_dir: Option<SortDirection>,
    filter: Option<F>,
    defaults: SearchDefaults,
}

impl<F> Default for SearchParams<F> {
    fn default() -> Self {
        Self::with_defaults(SearchDefaults::default())
    }
}

impl<F> SearchParams<F> {
    /// Parameters selecting the first page with the default page size.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Parameters selecting the first page with custom defaults.
    #[must_use]
    pub const fn with_defaults(defaults: SearchDefaults) -> Self {
        Self {
            page: DEFAULT_PAGE,
            per_page: defaults.per_page(),
            sort: None,
            requested_dir: None,
            filter: None,
            defaults,
        }
    }

    /// Set the page; non-positive values fall back to [`DEFAULT_PAGE`].
    #[must_use]
    pub fn with_page(mut self, page: i64) -> Self {
        self.page = usize::try_from(page)
            .ok()
            .filter(|value| *value > 0)
            .unwrap_or(DEFAULT_PAGE);
        self
    }

    /// Set the page size; non-positive values fall back to the defaults.
    #[must_use]
    pub fn with_per_page(mut self, per_page: i64) -> Self {
        self.per_page = usize::try_from(per_page)
            .ok()
            .filter(|value| *value > 0)
            .unwrap_or(self.defaults.per_page());
        self
    }

    /// Set the sort field; the empty string clears it.
    #[must_use]
    pub fn with_sort(mut self, sort: impl Into<String>) -> Self {
        self.sort = Some(sort.into()).filter(|field| !field.is_empty());
        self
    }

    /// Set the sort direction from text; unrecognised text means ascending.
    #[must_use]
    pub fn with_sort_dir(mut self, sort_dir: &str) -> Self {
        self.requested_dir = Some(sort_dir.parse().unwrap_or_default());
        self
    }

    /// Set the entity-specific filter.
    #[must_use]
    pub fn with_filter(mut self, filter: F) -> Self {
        self.filter = Some(filter);
        self
    }

    /// Requested page, 1-based.
    #[must_use]
    pub const fn page(&self) -> usize {
        self.page
    }

    /// Requested page size.
    #[must_use]
    pub const fn per_page(&self) -> usize {
        self.per_page
    }

    /// Requested sort field, if any.
    #[must_use]
    pub fn sort(&self) -> Option<&str> {
        self.sort.as_deref()
    }

    /// Effective sort direction; present only alongside a sort field.
    #[must_use]
    pub fn sort_dir(&self) -> Option<SortDirection> {
        self.sort
            .as_ref()
            .map(|_| self.requested_dir.unwrap_or_default())
    }

    /// Entity-specific filter, if any.
    #[must_use]
    pub const fn filter(&self) -> Option<&F> {
        self.filter.as_ref()
    }

    /// Number of items skipped before the requested page.
    #[must_use]
    pub const fn offset(&self) -> usize {
        self.page.saturating_sub(1).saturating_mul(self.per_page)
    }

    /// Maximum number of items on the requested page.
    #[must_use]
    pub const fn limit(&self) -> usize {
        self.per_page
    }
}

impl<F: SearchFilter> SearchParams<F> {
    /// Normalise raw input using [`SearchDefaults::default`].
    ///
    /// # Errors
    ///
    /// Returns the filter's parse error when the raw filter is malformed.
    /// Paging and sorting values never fail; they are clamped instead.
    pub fn from_input(input: &SearchInput) -> Result<Self, F::Error> {
        Self::from_input_with(input, SearchDefaults::default())
    }

    /// Normalise raw input using the supplied defaults.
    ///
    /// # Errors
    ///
    /// Returns the filter's parse error when the raw filter is malformed.
    pub fn from_input_with(
        input: &SearchInput,
        defaults: SearchDefaults,
    ) -> Result<Self, F::Error> {
        let filter = input.filter.as_ref().map(F::parse).transpose()?.flatten();
        Ok(Self {
            page: positive_or(input.page.as_ref(), DEFAULT_PAGE),
            per_page: positive_or(input.per_page.as_ref(), defaults.per_page()),
            sort: sort_field(input.sort.as_ref()),
            requested_dir: sort_dir_text(input.sort_dir.as_ref())
                .map(|text| text.parse().unwrap_or_default()),
            filter,
            defaults,
        })
    }
}

#[cfg(test)]
mod tests {
    //! Normalisation of search requests.

    use rstest::rstest;
    use serde_json::{Value, json};

    use super::*;

    fn params_from(input: &SearchInput) -> SearchParams<String> {
        let Ok(params) = SearchParams::<String>::from_input(input);
        params
    }

    #[rstest]
    fn defaults_select_first_page() {
        let params = SearchParams::<String>::new();
        assert_eq!(params.page(), 1);
        assert_eq!(params.per_page(), 15);
        assert_eq!(params.sort(), None);
        assert_eq!(params.sort_dir(), None);
        assert_eq!(params.filter(), None);
    }

    #[rstest]
    #[case(0, 1)]
    #[case(-5, 1)]
    #[case(1, 1)]
    #[case(9, 9)]
    fn builder_clamps_page(#[case] raw: i64, #[case] expected: usize) {
        assert_eq!(SearchParams::<String>::new().with_page(raw).page(), expected);
    }

    #[rstest]
    #[case(0, 15)]
    #[case(-2, 15)]
    #[case(40, 40)]
    fn builder_clamps_per_page(#[case] raw: i64, #[case] expected: usize) {
        let params = SearchParams::<String>::new().with_per_page(raw);
        assert_eq!(params.per_page(), expected);
    }

    #[rstest]
    fn custom_defaults_drive_per_page_fallback() {
        let params = SearchParams::<String>::with_defaults(SearchDefaults::with_per_page(50))
            .with_per_page(-1);
        assert_eq!(params.per_page(), 50);
    }

    #[rstest]
    #[case::absent(None, Some(SortDirection::Asc))]
    #[case::lower_desc(Some(json!("desc")), Some(SortDirection::Desc))]
    #[case::upper_desc(Some(json!("DESC")), Some(SortDirection::Desc))]
    #[case::mixed_asc(Some(json!("aSc")), Some(SortDirection::Asc))]
    #[case::garbage(Some(json!("sideways")), Some(SortDirection::Asc))]
    #[case::number(Some(json!(0)), Some(SortDirection::Asc))]
    #[case::null(Some(Value::Null), Some(SortDirection::Asc))]
    fn sort_dir_defaults_when_sorting(
        #[case] sort_dir: Option<Value>,
        #[case] expected: Option<SortDirection>,
    ) {
        let input = SearchInput {
            sort: Some(json!("name")),
            sort_dir,
            ..SearchInput::default()
        };
        assert_eq!(params_from(&input).sort_dir(), expected);
    }

    #[rstest]
    #[case::no_sort(None)]
    #[case::empty_sort(Some(json!("")))]
    #[case::null_sort(Some(Value::Null))]
    fn sort_dir_is_absent_without_sort(#[case] sort: Option<Value>) {
        let input = SearchInput {
            sort,
            sort_dir: Some(json!("desc")),
            ..SearchInput::default()
        };
        let params = params_from(&input);
        assert_eq!(params.sort(), None);
        assert_eq!(params.sort_dir(), None);
    }

    #[rstest]
    fn sort_dir_set_before_sort_is_kept() {
        let params = SearchParams::<String>::new()
            .with_sort_dir("desc")
            .with_sort("name");
        assert_eq!(params.sort_dir(), Some(SortDirection::Desc));
    }

    #[rstest]
    #[case::text(json!("abc"), Some("abc"))]
    #[case::number(json!(0), Some("0"))]
    #[case::boolean(json!(true), Some("true"))]
    #[case::empty(json!(""), None)]
    #[case::null(Value::Null, None)]
    fn text_filter_is_coerced(#[case] raw: Value, #[case] expected: Option<&str>) {
        let input = SearchInput {
            filter: Some(raw),
            ..SearchInput::default()
        };
        assert_eq!(params_from(&input).filter().map(String::as_str), expected);
    }

    #[rstest]
    #[case(1, 15, 0)]
    #[case(2, 15, 15)]
    #[case(3, 2, 4)]
    fn offset_tracks_page(#[case] page: i64, #[case] per_page: i64, #[case] expected: usize) {
        let params = SearchParams::<String>::new()
            .with_page(page)
            .with_per_page(per_page);
        assert_eq!(params.offset(), expected);
        assert_eq!(params.limit(), params.per_page());
    }

    #[rstest]
    fn input_deserialises_from_json() {
        let input: SearchInput = serde_json::from_value(json!({
            "page": "3",
            "per_page": 2,
            "sort": "created_at",
            "sort_dir": "desc",
            "filter": "drama",
        }))
        .unwrap_or_default();
        let params = params_from(&input);

        assert_eq!(params.page(), 3);
        assert_eq!(params.per_page(), 2);
        assert_eq!(params.sort(), Some("created_at"));
        assert_eq!(params.sort_dir(), Some(SortDirection::Desc));
        assert_eq!(params.filter().map(String::as_str), Some("drama"));
    }
}
