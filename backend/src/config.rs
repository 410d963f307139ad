//! Catalogue configuration loaded via OrthoConfig.

use ortho_config::OrthoConfig;
use pagination::SearchDefaults;
use serde::Deserialize;

/// Configuration values for the catalogue core.
#[derive(Debug, Clone, Deserialize, OrthoConfig)]
#[ortho_config(prefix = "CATALOG")]
pub struct CatalogSettings {
    /// Page size used when a search request gives none or an invalid one.
    pub default_per_page: Option<i64>,
    /// Emit logs as JSON lines instead of human-readable text.
    #[ortho_config(default = false)]
    pub json_logs: bool,
}

impl CatalogSettings {
    /// Search defaults derived from the configured page size.
    ///
    /// Missing or non-positive sizes fall back to the built-in default of 15.
    pub fn search_defaults(&self) -> SearchDefaults {
        self.default_per_page
            .and_then(|per_page| usize::try_from(per_page).ok())
            .map_or_else(SearchDefaults::default, SearchDefaults::with_per_page)
    }
}

#[cfg(test)]
mod tests {
    //! Unit tests for catalogue configuration parsing.

    use super::*;
    use std::ffi::OsString;

    use env_lock::lock_env;
    use pagination::DEFAULT_PER_PAGE;
    use rstest::rstest;

    fn load_from_empty_args() -> CatalogSettings {
        CatalogSettings::load_from_iter([OsString::from("catalog")]).expect("config should load")
    }

    #[rstest]
    fn default_values_are_used_when_missing() {
        let _guard = lock_env([
            ("CATALOG_DEFAULT_PER_PAGE", None::<String>),
            ("CATALOG_JSON_LOGS", None::<String>),
        ]);

        let settings = load_from_empty_args();
        assert!(!settings.json_logs);
        assert!(settings.default_per_page.is_none());
        assert_eq!(settings.search_defaults().per_page(), DEFAULT_PER_PAGE);
    }

    #[rstest]
    fn environment_overrides_are_respected() {
        let _guard = lock_env([
            ("CATALOG_DEFAULT_PER_PAGE", Some("25".to_owned())),
            ("CATALOG_JSON_LOGS", Some("true".to_owned())),
        ]);

        let settings = load_from_empty_args();
        assert!(settings.json_logs);
        assert_eq!(settings.search_defaults().per_page(), 25);
    }

    #[rstest]
    #[case(0)]
    #[case(-4)]
    fn non_positive_page_sizes_are_ignored(#[case] per_page: i64) {
        let settings = CatalogSettings {
            default_per_page: Some(per_page),
            json_logs: false,
        };
        assert_eq!(settings.search_defaults().per_page(), DEFAULT_PER_PAGE);
    }
}
