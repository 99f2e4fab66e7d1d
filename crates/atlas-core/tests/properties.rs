use atlas_core::query::{filter_countries, stages};
use atlas_core::{paginate, Country, CountrySortField, PageRequest, SearchCriteria, SortOrder};
use proptest::prelude::*;
use proptest::test_runner::Config;

fn arb_country() -> impl Strategy<Value = Country> {
    (
        "[A-Z]{2,3}",
        "[A-Za-z ]{1,12}",
        prop::sample::select(vec!["Asia", "Europe", "Africa"]),
        0_u64..1_000,
        0.0_f64..10_000.0,
    )
        .prop_map(|(code, name, region, population, area)| Country {
            official_name: format!("Republic of {name}"),
            capital: format!("{name} City"),
            name,
            country_code: code,
            region: region.to_string(),
            subregion: format!("Inner {region}"),
            population,
            area,
            latitude: 0.0,
            longitude: 0.0,
            borders: vec![],
            languages: vec!["English".into()],
            currencies: vec![],
        })
}

proptest! {
    #![proptest_config(Config::with_cases(128))]

    #[test]
    fn pages_reconstruct_sequence(items in prop::collection::vec(0_u32..1000, 0..60), size in 1_usize..=100) {
        let first = paginate(&items, PageRequest::new(1, size).unwrap());
        let mut rebuilt = first.items.clone();
        for page in 2..=first.meta.total_pages {
            rebuilt.extend(paginate(&items, PageRequest::new(page, size).unwrap()).items);
        }
        prop_assert_eq!(rebuilt, items.clone());
        prop_assert_eq!(first.meta.total_items, items.len());
        prop_assert_eq!(first.meta.total_pages, items.len().div_ceil(size));
    }

    #[test]
    fn unset_criteria_is_identity(countries in prop::collection::vec(arb_country(), 0..30)) {
        let out = filter_countries(&countries, &SearchCriteria::default()).unwrap();
        let expected: Vec<&Country> = countries.iter().collect();
        prop_assert_eq!(out, expected);
    }

    #[test]
    fn sorting_twice_changes_nothing(
        countries in prop::collection::vec(arb_country(), 0..30),
        desc in any::<bool>(),
    ) {
        let order = if desc { SortOrder::Desc } else { SortOrder::Asc };
        for field in [CountrySortField::Population, CountrySortField::Region, CountrySortField::Area] {
            let once = stages::sort_records(countries.iter().collect(), field, order);
            let twice = stages::sort_records(once.clone(), field, order);
            prop_assert_eq!(once, twice);
        }
    }

    #[test]
    fn search_ignores_case(countries in prop::collection::vec(arb_country(), 0..30), term in "[a-z]{1,3}") {
        let lower = filter_countries(&countries, &SearchCriteria::default().with_name(term.clone())).unwrap();
        let upper = filter_countries(&countries, &SearchCriteria::default().with_name(term.to_uppercase())).unwrap();
        prop_assert_eq!(lower, upper);
    }
}
