//! Property tests for query handling and result filtering

use mealdb_core::url::{build_lookup_url, build_search_by_name_url};
use mealdb_core::{filter_by_name, MealRecord};
use proptest::prelude::*;

fn record(id: usize, name: &str) -> MealRecord {
    serde_json::from_value(serde_json::json!({ "idMeal": id.to_string(), "strMeal": name }))
        .expect("Should build record")
}

proptest! {
    #[test]
    fn filter_keeps_exactly_the_matching_names(
        names in prop::collection::vec("[A-Za-z ]{0,12}", 0..16),
        query in "[A-Za-z]{1,3}",
    ) {
        let records: Vec<MealRecord> = names
            .iter()
            .enumerate()
            .map(|(i, n)| record(i, n))
            .collect();

        let kept = filter_by_name(records, &query);
        let needle = query.to_lowercase();

        let expected: Vec<String> = names
            .iter()
            .enumerate()
            .filter(|(_, n)| n.to_lowercase().contains(&needle))
            .map(|(i, _)| i.to_string())
            .collect();
        let actual: Vec<String> = kept.into_iter().map(|m| m.id).collect();

        prop_assert_eq!(actual, expected);
    }

    #[test]
    fn filter_ignores_query_case(name in "[A-Za-z]{1,10}") {
        let upper = filter_by_name(vec![record(0, &name)], &name.to_uppercase());
        let lower = filter_by_name(vec![record(0, &name)], &name.to_lowercase());
        prop_assert_eq!(upper.len(), 1);
        prop_assert_eq!(lower.len(), 1);
    }

    #[test]
    fn encoded_paths_never_contain_raw_separators(input in "\\PC{0,24}") {
        for built in [build_search_by_name_url(&input), build_lookup_url(&input)] {
            let (_, value) = built.split_once('=').expect("path has a query value");
            prop_assert!(!value.contains('&'));
            prop_assert!(!value.contains(' '));
            prop_assert!(!value.contains('#'));
        }
    }
}
