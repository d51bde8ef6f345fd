//! Unit tests for country name resolution.

use super::*;
use crate::config::ResolverConfig;
use crate::domain::{CountryCode, Locale};
use std::sync::Mutex;
use tempfile::tempdir;

/// Provider that counts how often it is asked for a name.
struct CountingProvider {
    table: NameTable,
    call_count: Mutex<usize>,
}

impl CountingProvider {
    fn new() -> Self {
        Self {
            table: NameTable::builtin(Locale::English).unwrap(),
            call_count: Mutex::new(0),
        }
    }

    fn calls(&self) -> usize {
        *self.call_count.lock().unwrap()
    }
}

impl NameProvider for CountingProvider {
    fn locale(&self) -> &str {
        self.table.locale()
    }

    fn name(&self, code: &CountryCode) -> Option<String> {
        *self.call_count.lock().unwrap() += 1;
        self.table.name(code)
    }

    fn codes(&self) -> Vec<CountryCode> {
        self.table.codes()
    }

    fn names(&self) -> Vec<String> {
        self.table.names()
    }
}

fn english() -> CountryNames {
    CountryNames::builtin(Locale::English).unwrap()
}

#[test]
fn resolves_known_codes() {
    let names = english();
    assert_eq!(names.resolve("CHN").unwrap(), "China");
    assert_eq!(names.resolve("USA").unwrap(), "United States");
    assert_eq!(
        names.resolve("COD").unwrap(),
        "Democratic Republic of the Congo"
    );
}

#[test]
fn every_supported_code_resolves() {
    for locale in Locale::ALL {
        let names = CountryNames::builtin(locale).unwrap();
        for code in names.supported_codes() {
            let name = names.resolve(code.as_str()).unwrap();
            assert!(!name.is_empty(), "empty name for {code} in {locale}");
        }
    }
}

#[test]
fn supported_codes_ranked_by_population() {
    let codes = english().supported_codes();
    assert_eq!(codes.len(), 130);
    assert_eq!(codes[0].as_str(), "CHN");
    assert_eq!(codes[1].as_str(), "IND");
    assert_eq!(codes[2].as_str(), "USA");
}

#[test]
fn codes_and_names_correspond() {
    let names = CountryNames::builtin(Locale::German).unwrap();
    let codes = names.supported_codes();
    let labels = names.supported_names();

    assert_eq!(codes.len(), labels.len());
    for (code, label) in codes.iter().zip(&labels) {
        assert_eq!(&names.resolve(code.as_str()).unwrap(), label);
    }
}

#[test]
fn countries_pairs_match_lists() {
    let names = english();
    let pairs = names.countries();
    assert_eq!(pairs.len(), 130);
    assert_eq!(pairs[0].0.as_str(), "CHN");
    assert_eq!(pairs[0].1, "China");
    assert_eq!(pairs[129].0.as_str(), "BIH");
    assert_eq!(pairs[129].1, "Bosnia and Herzegovina");
}

#[test]
fn empty_or_absent_code_is_invalid() {
    let names = english();
    assert_eq!(names.resolve(""), Err(NameError::InvalidArgument));
    assert_eq!(names.resolve("   "), Err(NameError::InvalidArgument));
    assert_eq!(names.resolve_opt(None), Err(NameError::InvalidArgument));
    assert_eq!(names.resolve_opt(Some("")), Err(NameError::InvalidArgument));
    assert_eq!(names.cached_count(), 0);
}

#[test]
fn invalid_argument_skips_provider() {
    let names = CountryNames::new(CountingProvider::new());
    let _ = names.resolve("");
    let _ = names.resolve_opt(None);
    assert_eq!(names.provider().calls(), 0);
}

#[test]
fn unknown_code_is_not_found() {
    let names = english();
    assert_eq!(
        names.resolve("ZZZ"),
        Err(NameError::NotFound {
            code: "ZZZ".to_string()
        })
    );
}

#[test]
fn malformed_code_is_not_found() {
    let names = CountryNames::new(CountingProvider::new());

    assert_eq!(
        names.resolve("usax"),
        Err(NameError::NotFound {
            code: "USAX".to_string()
        })
    );
    assert!(matches!(names.resolve("U1A"), Err(NameError::NotFound { .. })));

    // Never reaches the provider
    assert_eq!(names.provider().calls(), 0);
}

#[test]
fn second_lookup_served_from_cache() {
    let names = CountryNames::new(CountingProvider::new());

    let first = names.resolve("USA").unwrap();
    let second = names.resolve("USA").unwrap();

    assert_eq!(first, second);
    assert_eq!(names.provider().calls(), 1);
    assert_eq!(names.cached_count(), 1);
}

#[test]
fn misses_are_not_cached() {
    let names = CountryNames::new(CountingProvider::new());

    assert!(names.resolve("ZZZ").is_err());
    assert!(names.resolve("ZZZ").is_err());

    assert_eq!(names.provider().calls(), 2);
    assert_eq!(names.cached_count(), 0);
}

#[test]
fn case_and_whitespace_normalized() {
    let names = CountryNames::new(CountingProvider::new());

    let upper = names.resolve("USA").unwrap();
    assert_eq!(names.resolve("usa").unwrap(), upper);
    assert_eq!(names.resolve(" uSa\n").unwrap(), upper);

    // All three spellings share one cache entry
    assert_eq!(names.provider().calls(), 1);
}

#[test]
fn not_found_reports_normalized_code() {
    let names = english();
    assert_eq!(
        names.resolve(" zzz "),
        Err(NameError::NotFound {
            code: "ZZZ".to_string()
        })
    );
}

#[test]
fn clones_share_cache() {
    let names = CountryNames::new(CountingProvider::new());
    let other = names.clone();

    names.resolve("IND").unwrap();
    other.resolve("IND").unwrap();

    assert_eq!(names.provider().calls(), 1);
}

#[test]
fn separate_resolvers_have_separate_caches() {
    let a = english();
    let b = english();

    a.resolve("JPN").unwrap();
    assert_eq!(a.cached_count(), 1);
    assert_eq!(b.cached_count(), 0);
}

#[test]
fn injected_cache_is_used() {
    let cache = NameCache::default();
    let names = CountryNames::with_cache(CountingProvider::new(), cache.clone());

    names.resolve("BRA").unwrap();
    let code = CountryCode::parse("BRA").unwrap();
    assert_eq!(cache.get(&code).as_deref(), Some("Brazil"));
}

#[test]
fn concurrent_lookups_agree() {
    let names = CountryNames::new(CountingProvider::new());

    std::thread::scope(|s| {
        for _ in 0..8 {
            let names = names.clone();
            s.spawn(move || {
                for code in ["CHN", "IND", "USA"] {
                    assert!(names.resolve(code).is_ok());
                }
            });
        }
    });

    // Concurrent misses are coalesced into one lookup per code
    assert_eq!(names.provider().calls(), 3);
    assert_eq!(names.cached_count(), 3);
}

#[test]
fn german_locale() {
    let names = CountryNames::builtin(Locale::German).unwrap();
    assert_eq!(names.locale(), "de");
    assert_eq!(names.resolve("DEU").unwrap(), "Deutschland");
    assert_eq!(names.resolve("gbr").unwrap(), "Vereinigtes Königreich");
}

#[test]
fn from_config_uses_locale() {
    let config = ResolverConfig::default().with_locale(Locale::German);
    let names = CountryNames::from_config(&config).unwrap();
    assert_eq!(names.resolve("AUT").unwrap(), "Österreich");
}

#[test]
fn from_config_bundle_overrides_locale() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("fr.json");
    std::fs::write(
        &path,
        r#"{"locale": "fr", "countries": [{"code": "FRA", "name": "France"}]}"#,
    )
    .unwrap();

    let config = ResolverConfig::default()
        .with_locale(Locale::German)
        .with_bundle_path(&path);
    let names = CountryNames::from_config(&config).unwrap();

    assert_eq!(names.locale(), "fr");
    assert_eq!(names.supported_codes().len(), 1);
    assert_eq!(names.resolve("fra").unwrap(), "France");
    assert!(matches!(names.resolve("DEU"), Err(NameError::NotFound { .. })));
}

#[test]
fn from_config_missing_bundle_fails() {
    let config = ResolverConfig::default().with_bundle_path("/nonexistent/bundle.json");
    assert!(CountryNames::from_config(&config).is_err());
}

mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        /// Lookups are insensitive to ASCII case
        #[test]
        fn case_insensitive(idx in 0usize..130, mask in proptest::collection::vec(any::<bool>(), 3)) {
            let names = english();
            let code = names.supported_codes()[idx];
            let mixed: String = code
                .as_str()
                .chars()
                .zip(&mask)
                .map(|(c, &lower)| if lower { c.to_ascii_lowercase() } else { c })
                .collect();

            prop_assert_eq!(names.resolve(&mixed).unwrap(), names.resolve(code.as_str()).unwrap());
        }

        /// Codes outside the table never resolve and never get cached
        #[test]
        fn unknown_codes_not_found(s in "[A-Z]{3}") {
            let names = english();
            let code = CountryCode::parse(&s).unwrap();
            prop_assume!(!names.supported_codes().contains(&code));

            let is_not_found = matches!(names.resolve(&s), Err(NameError::NotFound { .. }));
            prop_assert!(is_not_found);
            prop_assert_eq!(names.cached_count(), 0);
        }
    }
}
