//! Property tests for filtering and aggregation invariants.

use proptest::prelude::*;

use salary_core::{
    Choice, FilterSet, Visualization, bottom_n, group_mean, render, top_k_plus_other,
    value_counts,
};
use salary_ingest::Dataset;
use salary_model::{Dimension, GroupKey, Metric, Record, RegionEntry, RegionLookup};

const LOCATIONS: [&str; 4] = ["US", "DE", "IN", "ZZ"];
const LEVELS: [&str; 5] = ["EN", "MI", "SE", "EX", "XX"];
const RATIOS: [i64; 4] = [0, 50, 100, 25];
const TITLES: [&str; 7] = [
    "Data Scientist",
    "Data Engineer",
    "Data Analyst",
    "ML Engineer",
    "BI Developer",
    "Research Scientist",
    "Data Architect",
];
const EMPLOYMENT: [&str; 3] = ["FT", "PT", "CT"];

fn lookup() -> RegionLookup {
    let entry = |country: &str, region: &str| RegionEntry {
        country: country.to_string(),
        region: Some(region.to_string()),
    };
    RegionLookup::from_entries([
        ("US", entry("United States of America", "Americas")),
        ("DE", entry("Germany", "Europe")),
        ("IN", entry("India", "Asia")),
    ])
}

fn record_strategy() -> impl Strategy<Value = Record> {
    (
        0..LOCATIONS.len(),
        0..LEVELS.len(),
        0..RATIOS.len(),
        0..TITLES.len(),
        0..EMPLOYMENT.len(),
        1_000u32..500_000,
    )
        .prop_map(|(location, level, ratio, title, employment, usd)| Record {
            work_year: 2023,
            experience_level: LEVELS[level].to_string(),
            employment_type: EMPLOYMENT[employment].to_string(),
            job_title: TITLES[title].to_string(),
            salary: f64::from(usd),
            salary_currency: "USD".to_string(),
            salary_in_usd: f64::from(usd),
            employee_residence: LOCATIONS[location].to_string(),
            remote_ratio: RATIOS[ratio],
            company_location: LOCATIONS[location].to_string(),
            company_size: "M".to_string(),
            ..Record::default()
        })
}

fn dataset_strategy() -> impl Strategy<Value = Dataset> {
    prop::collection::vec(record_strategy(), 0..60)
        .prop_map(|records| Dataset::from_parts(records, lookup()))
}

/// Per dimension: `None` keeps "Select All", otherwise a bitmask over the options.
fn selections_strategy() -> impl Strategy<Value = Vec<Option<u16>>> {
    prop::collection::vec(prop::option::of(any::<u16>()), Dimension::ALL.len())
}

fn configure(dataset: &Dataset, selections: &[Option<u16>]) -> FilterSet {
    let mut filters = FilterSet::new(dataset.filter_options().clone());
    for (dimension, selection) in Dimension::ALL.into_iter().zip(selections) {
        let Some(mask) = selection else {
            continue;
        };
        let choices: Vec<Choice> = dataset
            .options(dimension)
            .iter()
            .enumerate()
            .filter(|(idx, _)| *mask & (1u16 << (idx % 16)) != 0)
            .map(|(_, value)| Choice::Value(value.clone()))
            .collect();
        filters.select(dimension, choices);
    }
    filters
}

proptest! {
    #[test]
    fn filtered_rows_are_a_matching_subset(
        dataset in dataset_strategy(),
        selections in selections_strategy(),
    ) {
        let filters = configure(&dataset, &selections);
        let filtered = filters.apply(dataset.records());
        prop_assert!(filtered.len() <= dataset.len());
        let predicate = filters.predicate();
        for record in &filtered {
            prop_assert!(predicate.matches(record));
        }
        if !filters.awaiting_selection().is_empty() {
            prop_assert!(filtered.is_empty());
        }
    }

    #[test]
    fn select_all_equals_every_option(
        dataset in dataset_strategy(),
        dimension_idx in 0..Dimension::ALL.len(),
    ) {
        let dimension = Dimension::ALL[dimension_idx];
        let all = FilterSet::new(dataset.filter_options().clone());
        let mut explicit = all.clone();
        explicit.select(
            dimension,
            dataset.options(dimension).iter().cloned().map(Choice::Value),
        );
        prop_assert_eq!(all.apply(dataset.records()), explicit.apply(dataset.records()));
        prop_assert_eq!(
            all.effective_selection(dimension),
            explicit.effective_selection(dimension)
        );
    }

    #[test]
    fn group_mean_is_descending_and_bottom_n_is_ascending(
        dataset in dataset_strategy(),
        n in 0usize..8,
    ) {
        let records = dataset.records();
        let means = group_mean(records, GroupKey::JobTitle, Metric::SalaryInUsd);
        prop_assert!(means.windows(2).all(|pair| pair[0].value >= pair[1].value));

        let full_bottom = bottom_n(records, GroupKey::JobTitle, Metric::SalaryInUsd, usize::MAX);
        prop_assert_eq!(full_bottom.len(), means.len());
        prop_assert!(full_bottom.windows(2).all(|pair| pair[0].value <= pair[1].value));

        let bottom = bottom_n(records, GroupKey::JobTitle, Metric::SalaryInUsd, n);
        prop_assert_eq!(bottom.len(), n.min(means.len()));
        prop_assert_eq!(&bottom[..], &full_bottom[..bottom.len()]);
    }

    #[test]
    fn top_k_plus_other_sums_to_record_count(
        dataset in dataset_strategy(),
        k in 0usize..10,
    ) {
        let records = dataset.records();
        let counts = top_k_plus_other(records, GroupKey::JobTitle, k);
        if records.is_empty() {
            prop_assert!(counts.is_empty());
        } else {
            let distinct = value_counts(records, GroupKey::JobTitle).len();
            prop_assert_eq!(counts.len(), k.min(distinct) + 1);
            let total: usize = counts.iter().map(|entry| entry.count).sum();
            prop_assert_eq!(total, records.len());
        }
    }

    #[test]
    fn render_is_a_pure_function(
        dataset in dataset_strategy(),
        selections in selections_strategy(),
        visualization_idx in 0..Visualization::ALL.len(),
    ) {
        let filters = configure(&dataset, &selections);
        let visualization = Visualization::ALL[visualization_idx];
        let first = serde_json::to_string(&render(&dataset, &filters, visualization))
            .expect("serialize first");
        let second = serde_json::to_string(&render(&dataset, &filters, visualization))
            .expect("serialize second");
        prop_assert_eq!(first, second);
    }
}
