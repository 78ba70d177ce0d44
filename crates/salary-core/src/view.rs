//! The render pipeline: dataset + filters + visualization -> view model.
//!
//! [`render`] is the only entry point. It applies the predicate to the full
//! dataset and computes the aggregates of the selected visualization, and
//! nothing else. It has no side effects besides logging, so calling it twice
//! with the same inputs yields the same view.

use std::fmt;
use std::str::FromStr;

use serde::{Serialize, Serializer};
use tracing::{debug, debug_span};

use salary_ingest::Dataset;
use salary_model::{Dimension, GroupKey, Metric, Record};

use crate::aggregate::{
    BoxSummary, DEFAULT_TOP_K, LabeledCount, LabeledValue, bottom_n, box_summary, group_mean,
    top_k_plus_other, top_n, value_counts,
};
use crate::filter::FilterSet;

/// Number of countries in each ranking of [`Visualization::TopBottomCountries`].
pub const COUNTRY_RANK_LIMIT: usize = 10;

/// The fixed set of views a user can pick.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Visualization {
    #[default]
    SalaryDistribution,
    TopBottomCountries,
    Continents,
    JobDistribution,
}

impl Visualization {
    pub const ALL: [Visualization; 4] = [
        Visualization::SalaryDistribution,
        Visualization::TopBottomCountries,
        Visualization::Continents,
        Visualization::JobDistribution,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Visualization::SalaryDistribution => "Salary Distribution",
            Visualization::TopBottomCountries => "Top and Bottom 10 Countries",
            Visualization::Continents => "Continents",
            Visualization::JobDistribution => "Job Distribution",
        }
    }

    /// Short name for command lines.
    pub fn slug(&self) -> &'static str {
        match self {
            Visualization::SalaryDistribution => "distribution",
            Visualization::TopBottomCountries => "countries",
            Visualization::Continents => "continents",
            Visualization::JobDistribution => "jobs",
        }
    }
}

impl fmt::Display for Visualization {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl FromStr for Visualization {
    type Err = String;

    /// Accepts the display name or the slug, case-insensitively.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        Visualization::ALL
            .into_iter()
            .find(|visualization| {
                trimmed.eq_ignore_ascii_case(visualization.name())
                    || trimmed.eq_ignore_ascii_case(visualization.slug())
            })
            .ok_or_else(|| format!("Unknown visualization: {s}"))
    }
}

impl Serialize for Visualization {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.name())
    }
}

/// Data series of one chart.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", content = "points", rename_all = "snake_case")]
pub enum ChartData {
    Values(Vec<LabeledValue>),
    Counts(Vec<LabeledCount>),
    Boxes(Vec<BoxSummary>),
}

impl ChartData {
    pub fn len(&self) -> usize {
        match self {
            ChartData::Values(points) => points.len(),
            ChartData::Counts(points) => points.len(),
            ChartData::Boxes(points) => points.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Direction of the bars; horizontal charts put categories on the y axis.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Orientation {
    #[default]
    Vertical,
    Horizontal,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Chart {
    pub title: String,
    /// Axis title of the grouping column.
    pub category_axis: String,
    /// Axis title of the measured value.
    pub value_axis: String,
    pub orientation: Orientation,
    pub data: ChartData,
}

impl Chart {
    fn new(title: &str, category_axis: &str, value_axis: &str, data: ChartData) -> Self {
        Self {
            title: title.to_string(),
            category_axis: category_axis.to_string(),
            value_axis: value_axis.to_string(),
            orientation: Orientation::Vertical,
            data,
        }
    }

    fn horizontal(mut self) -> Self {
        self.orientation = Orientation::Horizontal;
        self
    }

    /// Category labels in display order.
    pub fn labels(&self) -> Vec<&str> {
        match &self.data {
            ChartData::Values(points) => points.iter().map(|p| p.label.as_str()).collect(),
            ChartData::Counts(points) => points.iter().map(|p| p.label.as_str()).collect(),
            ChartData::Boxes(points) => points.iter().map(|p| p.label.as_str()).collect(),
        }
    }
}

/// Outcome of one render.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum ViewState {
    /// At least one dimension has nothing selected; no aggregates were computed.
    AwaitingSelection { dimensions: Vec<Dimension> },
    /// No record matches every selection, or the dataset has no records at all.
    NoResults,
    Ready { charts: Vec<Chart> },
}

/// Everything the presentation layer needs for one screen.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ViewModel<'a> {
    pub visualization: Visualization,
    pub total_records: usize,
    pub filtered_records: usize,
    #[serde(skip)]
    pub records: Vec<&'a Record>,
    #[serde(flatten)]
    pub state: ViewState,
}

impl ViewModel<'_> {
    pub fn charts(&self) -> &[Chart] {
        match &self.state {
            ViewState::Ready { charts } => charts,
            _ => &[],
        }
    }
}

/// Filters the dataset and computes the selected visualization.
pub fn render<'a>(
    dataset: &'a Dataset,
    filters: &FilterSet,
    visualization: Visualization,
) -> ViewModel<'a> {
    let span = debug_span!("render", visualization = visualization.slug());
    let _guard = span.enter();
    if dataset.is_empty() {
        debug!("dataset has no records");
        return ViewModel {
            visualization,
            total_records: 0,
            filtered_records: 0,
            records: Vec::new(),
            state: ViewState::NoResults,
        };
    }
    let awaiting = filters.awaiting_selection();
    if !awaiting.is_empty() {
        debug!(dimensions = ?awaiting, "awaiting selection");
        return ViewModel {
            visualization,
            total_records: dataset.len(),
            filtered_records: 0,
            records: Vec::new(),
            state: ViewState::AwaitingSelection {
                dimensions: awaiting,
            },
        };
    }
    let records = filters.apply(dataset.records());
    debug!(filtered = records.len(), total = dataset.len(), "applied filters");
    let state = if records.is_empty() {
        ViewState::NoResults
    } else {
        ViewState::Ready {
            charts: build_charts(visualization, &records),
        }
    };
    ViewModel {
        visualization,
        total_records: dataset.len(),
        filtered_records: records.len(),
        records,
        state,
    }
}

fn build_charts(visualization: Visualization, records: &[&Record]) -> Vec<Chart> {
    let rows = || records.iter().copied();
    match visualization {
        Visualization::SalaryDistribution => vec![
            Chart::new(
                "Salary Distribution by Experience Level",
                "Experience Level",
                "Salary in USD",
                ChartData::Boxes(box_summary(
                    rows(),
                    GroupKey::ExperienceLevel,
                    Metric::SalaryInUsd,
                )),
            ),
            Chart::new(
                "Mean Salary by Experience Level",
                "Experience Level",
                "Mean Salary in USD",
                ChartData::Values(group_mean(
                    rows(),
                    GroupKey::ExperienceLevel,
                    Metric::SalaryInUsd,
                )),
            ),
        ],
        Visualization::TopBottomCountries => {
            let means = group_mean(rows(), GroupKey::Country, Metric::SalaryInUsd);
            let counts = value_counts(rows(), GroupKey::Country);
            vec![
                Chart::new(
                    "Top 10 countries according to mean salaries",
                    "Countries",
                    "Mean Salary",
                    ChartData::Values(top_n(&means, COUNTRY_RANK_LIMIT)),
                )
                .horizontal(),
                Chart::new(
                    "Bottom 10 countries according to mean salaries",
                    "Countries",
                    "Mean Salary",
                    ChartData::Values(bottom_n(
                        rows(),
                        GroupKey::Country,
                        Metric::SalaryInUsd,
                        COUNTRY_RANK_LIMIT,
                    )),
                )
                .horizontal(),
                Chart::new(
                    "Top 10 countries having most job opportunities",
                    "Countries",
                    "Number of Job Opportunities",
                    ChartData::Counts(top_n(&counts, COUNTRY_RANK_LIMIT)),
                )
                .horizontal(),
            ]
        }
        Visualization::Continents => vec![
            Chart::new(
                "Mean salary by continent",
                "Continent",
                "Mean Salary in USD",
                ChartData::Values(group_mean(rows(), GroupKey::Region, Metric::SalaryInUsd)),
            ),
            Chart::new(
                "Job opportunities by continent",
                "Continent",
                "Number of Job Opportunities",
                ChartData::Counts(value_counts(rows(), GroupKey::Region)),
            ),
        ],
        Visualization::JobDistribution => vec![Chart::new(
            "Top 5 job titles",
            "Job Title",
            "Number of Records",
            ChartData::Counts(top_k_plus_other(rows(), GroupKey::JobTitle, DEFAULT_TOP_K)),
        )],
    }
}
