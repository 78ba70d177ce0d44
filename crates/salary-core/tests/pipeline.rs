//! End-to-end tests for the filter and render pipeline.

use std::sync::Arc;

use salary_core::{
    COUNTRY_RANK_LIMIT, ChartData, Choice, Event, FilterSet, LabeledCount, LabeledValue,
    OTHER_LABEL, Orientation, Session, ViewState, Visualization, group_mean, render,
};
use salary_ingest::Dataset;
use salary_model::{Dimension, FilterValue, GroupKey, Metric, Record, RegionEntry, RegionLookup};

fn record(level: &str, title: &str, location: &str, ratio: i64, usd: f64) -> Record {
    Record {
        work_year: 2023,
        experience_level: level.to_string(),
        employment_type: "FT".to_string(),
        job_title: title.to_string(),
        salary: usd,
        salary_currency: "USD".to_string(),
        salary_in_usd: usd,
        employee_residence: location.to_string(),
        remote_ratio: ratio,
        company_location: location.to_string(),
        company_size: "M".to_string(),
        ..Record::default()
    }
}

fn lookup() -> RegionLookup {
    let entry = |country: &str, region: &str| RegionEntry {
        country: country.to_string(),
        region: Some(region.to_string()),
    };
    RegionLookup::from_entries([
        ("US", entry("United States of America", "Americas")),
        ("CA", entry("Canada", "Americas")),
        ("DE", entry("Germany", "Europe")),
        ("GB", entry("United Kingdom", "Europe")),
        ("IN", entry("India", "Asia")),
    ])
}

fn scenario_dataset() -> Dataset {
    Dataset::from_parts(
        vec![
            record("EN", "Data Analyst", "US", 0, 50000.0),
            record("EN", "Data Analyst", "US", 0, 70000.0),
            record("SE", "Data Scientist", "DE", 100, 120000.0),
            record("EX", "Head of Data", "GB", 50, 200000.0),
        ],
        lookup(),
    )
}

fn wide_dataset() -> Dataset {
    let mut records = Vec::new();
    let locations = ["US", "CA", "DE", "GB", "IN", "ZZ"];
    let titles = [
        "Data Scientist",
        "Data Engineer",
        "Data Analyst",
        "ML Engineer",
        "Research Scientist",
        "Analytics Engineer",
        "Data Architect",
    ];
    for (idx, title) in titles.iter().enumerate() {
        for repeat in 0..=idx {
            let location = locations[(idx + repeat) % locations.len()];
            let usd = 40000.0 + (idx * 10000 + repeat * 1000) as f64;
            records.push(record("MI", title, location, 100, usd));
        }
    }
    Dataset::from_parts(records, lookup())
}

#[test]
fn group_mean_scenario_with_select_all() {
    let dataset = scenario_dataset();
    let filters = FilterSet::new(dataset.filter_options().clone());
    let filtered = filters.apply(dataset.records());
    assert_eq!(filtered.len(), 4);

    let means = group_mean(
        filtered.iter().copied(),
        GroupKey::ExperienceLevel,
        Metric::SalaryInUsd,
    );
    assert_eq!(
        means,
        vec![
            LabeledValue::new("EX", 200000.0),
            LabeledValue::new("SE", 120000.0),
            LabeledValue::new("EN", 60000.0),
        ]
    );
}

#[test]
fn salary_distribution_view_has_box_and_mean_charts() {
    let dataset = scenario_dataset();
    let filters = FilterSet::new(dataset.filter_options().clone());
    let view = render(&dataset, &filters, Visualization::SalaryDistribution);

    assert_eq!(view.filtered_records, 4);
    let charts = view.charts();
    assert_eq!(charts.len(), 2);
    match &charts[0].data {
        ChartData::Boxes(boxes) => {
            assert_eq!(charts[0].labels(), vec!["EN", "SE", "EX"]);
            assert_eq!(boxes[0].median, 60000.0);
        }
        other => panic!("expected box data, got {other:?}"),
    }
    match &charts[1].data {
        ChartData::Values(values) => assert_eq!(values[0], LabeledValue::new("EX", 200000.0)),
        other => panic!("expected values, got {other:?}"),
    }
}

#[test]
fn deselecting_a_dimension_awaits_selection() {
    let dataset = scenario_dataset();
    let mut filters = FilterSet::new(dataset.filter_options().clone());
    filters.select(Dimension::JobTitle, Vec::new());

    let view = render(&dataset, &filters, Visualization::JobDistribution);
    assert_eq!(view.filtered_records, 0);
    assert!(view.records.is_empty());
    assert_eq!(
        view.state,
        ViewState::AwaitingSelection {
            dimensions: vec![Dimension::JobTitle]
        }
    );
    assert!(view.charts().is_empty());
}

#[test]
fn empty_dataset_reports_no_results() {
    let dataset = Dataset::from_parts(Vec::new(), lookup());
    let filters = FilterSet::new(dataset.filter_options().clone());
    assert_eq!(filters.awaiting_selection().len(), Dimension::ALL.len());

    for visualization in Visualization::ALL {
        let view = render(&dataset, &filters, visualization);
        assert_eq!(view.total_records, 0);
        assert_eq!(view.state, ViewState::NoResults);
        assert!(view.charts().is_empty());
    }
}

#[test]
fn disjoint_selections_report_no_results() {
    let dataset = scenario_dataset();
    let mut filters = FilterSet::new(dataset.filter_options().clone());
    filters.select(Dimension::Region, [Choice::value("Europe")]);
    filters.select(Dimension::JobTitle, [Choice::value("Data Analyst")]);

    let view = render(&dataset, &filters, Visualization::Continents);
    assert_eq!(view.state, ViewState::NoResults);
    assert_eq!(view.total_records, 4);
}

#[test]
fn countries_view_ranks_top_and_bottom() {
    let dataset = wide_dataset();
    let filters = FilterSet::new(dataset.filter_options().clone());
    let view = render(&dataset, &filters, Visualization::TopBottomCountries);

    let charts = view.charts();
    assert_eq!(charts.len(), 3);
    assert!(charts.iter().all(|chart| chart.orientation == Orientation::Horizontal));
    let (ChartData::Values(top), ChartData::Values(bottom)) = (&charts[0].data, &charts[1].data)
    else {
        panic!("expected value charts");
    };
    assert!(top.len() <= COUNTRY_RANK_LIMIT);
    assert!(top.windows(2).all(|pair| pair[0].value >= pair[1].value));
    assert!(bottom.windows(2).all(|pair| pair[0].value <= pair[1].value));
    assert_eq!(top.first().map(|v| &v.label), bottom.last().map(|v| &v.label));
    // ZZ has no lookup entry, so only five countries are ranked.
    assert_eq!(top.len(), 5);
    assert_eq!(top[0].label, "India");
}

#[test]
fn continents_view_groups_by_region() {
    let dataset = scenario_dataset();
    let filters = FilterSet::new(dataset.filter_options().clone());
    let view = render(&dataset, &filters, Visualization::Continents);

    let charts = view.charts();
    assert_eq!(
        charts[0].data,
        ChartData::Values(vec![
            LabeledValue::new("Europe", 160000.0),
            LabeledValue::new("Americas", 60000.0),
        ])
    );
    assert_eq!(
        charts[1].data,
        ChartData::Counts(vec![
            LabeledCount::new("Americas", 2),
            LabeledCount::new("Europe", 2),
        ])
    );
}

#[test]
fn job_distribution_sums_to_filtered_rows() {
    let dataset = wide_dataset();
    let filters = FilterSet::new(dataset.filter_options().clone());
    let view = render(&dataset, &filters, Visualization::JobDistribution);

    let ChartData::Counts(counts) = &view.charts()[0].data else {
        panic!("expected counts");
    };
    assert_eq!(counts.len(), 6);
    assert_eq!(counts[0], LabeledCount::new("Data Architect", 7));
    assert_eq!(counts[5].label, OTHER_LABEL);
    let total: usize = counts.iter().map(|entry| entry.count).sum();
    assert_eq!(total, view.filtered_records);
}

#[test]
fn job_distribution_with_five_titles_keeps_zero_other() {
    let titles = ["A", "B", "C", "D", "E"];
    let records = titles
        .iter()
        .map(|title| record("SE", title, "US", 0, 100000.0))
        .collect();
    let dataset = Dataset::from_parts(records, lookup());
    let filters = FilterSet::new(dataset.filter_options().clone());
    let view = render(&dataset, &filters, Visualization::JobDistribution);

    let ChartData::Counts(counts) = &view.charts()[0].data else {
        panic!("expected counts");
    };
    assert_eq!(counts.len(), 6);
    assert_eq!(counts[5], LabeledCount::new(OTHER_LABEL, 0));
}

#[test]
fn unmatched_region_is_selectable_as_missing() {
    let dataset = wide_dataset();
    let mut filters = FilterSet::new(dataset.filter_options().clone());
    filters.select(Dimension::Region, [Choice::Value(FilterValue::Missing)]);

    let view = render(&dataset, &filters, Visualization::Continents);
    assert!(view.filtered_records > 0);
    assert!(view.records.iter().all(|record| record.company_location == "ZZ"));
    // Continents group by region, which is null for every kept record.
    assert_eq!(view.charts()[0].data, ChartData::Values(Vec::new()));
}

#[test]
fn render_is_idempotent() {
    let dataset = wide_dataset();
    let mut filters = FilterSet::new(dataset.filter_options().clone());
    filters.select(
        Dimension::Region,
        [Choice::value("Americas"), Choice::value("Europe")],
    );
    for visualization in Visualization::ALL {
        let first = serde_json::to_string(&render(&dataset, &filters, visualization))
            .expect("serialize first");
        let second = serde_json::to_string(&render(&dataset, &filters, visualization))
            .expect("serialize second");
        assert_eq!(first, second);
    }
}

#[test]
fn view_serializes_state_inline() {
    let dataset = scenario_dataset();
    let mut filters = FilterSet::new(dataset.filter_options().clone());
    filters.select(Dimension::Region, Vec::new());
    let view = render(&dataset, &filters, Visualization::Continents);

    let json = serde_json::to_value(&view).expect("serialize view");
    assert_eq!(json["visualization"], "Continents");
    assert_eq!(json["status"], "awaiting_selection");
    assert_eq!(json["dimensions"][0], "region");
    assert_eq!(json["total_records"], 4);
    assert!(json.get("records").is_none());
}

#[test]
fn session_handles_events_in_order() {
    let mut session = Session::new(Arc::new(scenario_dataset()));
    assert_eq!(session.visualization(), Visualization::SalaryDistribution);

    let view = session
        .handle(Event::Select {
            dimension: Dimension::ExperienceLevel,
            choices: vec![Choice::value("Entry-level")],
        })
        .expect("select entry level");
    assert_eq!(view.filtered_records, 2);

    let view = session
        .handle(Event::Visualize(Visualization::JobDistribution))
        .expect("switch view");
    assert_eq!(
        view.charts()[0].data,
        ChartData::Counts(vec![
            LabeledCount::new("Data Analyst", 2),
            LabeledCount::new(OTHER_LABEL, 0),
        ])
    );

    let view = session
        .handle(Event::Select {
            dimension: Dimension::JobType,
            choices: Vec::new(),
        })
        .expect("deselect job type");
    assert!(matches!(view.state, ViewState::AwaitingSelection { .. }));

    let view = session.handle(Event::Reset(None)).expect("reset");
    assert_eq!(view.filtered_records, 4);
}

#[test]
fn session_rejects_unknown_values_and_keeps_state() {
    let mut session = Session::new(Arc::new(scenario_dataset()));
    session
        .apply(Event::Select {
            dimension: Dimension::Region,
            choices: vec![Choice::value("Europe")],
        })
        .expect("select Europe");

    let result = session.apply(Event::Select {
        dimension: Dimension::Region,
        choices: vec![Choice::value("Oceania")],
    });
    assert!(result.is_err());
    assert_eq!(session.view().filtered_records, 2);
}
