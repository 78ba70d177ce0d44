//! Filter dimensions, grouping keys and the option sets derived from a dataset.

use std::collections::HashSet;
use std::fmt;
use std::str::FromStr;

use serde::{Serialize, Serializer};

use crate::error::ModelError;
use crate::record::Record;

/// Display text for the missing value of a dimension.
pub const MISSING_LABEL: &str = "(missing)";

/// Categorical column used as a filter axis.
///
/// The order of [`Dimension::ALL`] is the order controls are presented in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Dimension {
    Region,
    ExperienceLevel,
    JobType,
    JobTitle,
    EmploymentType,
}

impl Dimension {
    pub const ALL: [Dimension; 5] = [
        Dimension::Region,
        Dimension::ExperienceLevel,
        Dimension::JobType,
        Dimension::JobTitle,
        Dimension::EmploymentType,
    ];

    /// Column name in the joined dataset.
    pub fn column(&self) -> &'static str {
        match self {
            Dimension::Region => "region",
            Dimension::ExperienceLevel => "experience_level_label",
            Dimension::JobType => "job_type_label",
            Dimension::JobTitle => "job_title",
            Dimension::EmploymentType => "employment_type",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Dimension::Region => "Region",
            Dimension::ExperienceLevel => "Experience Level",
            Dimension::JobType => "Job Type",
            Dimension::JobTitle => "Job Title",
            Dimension::EmploymentType => "Employment Type",
        }
    }

    pub fn index(&self) -> usize {
        match self {
            Dimension::Region => 0,
            Dimension::ExperienceLevel => 1,
            Dimension::JobType => 2,
            Dimension::JobTitle => 3,
            Dimension::EmploymentType => 4,
        }
    }
}

impl fmt::Display for Dimension {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

impl FromStr for Dimension {
    type Err = ModelError;

    /// Accepts the column name, the label, or a short alias (case-insensitive).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match normalize_key(s).as_str() {
            "region" | "continent" => Ok(Dimension::Region),
            "experience_level_label" | "experience_level" | "experience" => {
                Ok(Dimension::ExperienceLevel)
            }
            "job_type_label" | "job_type" => Ok(Dimension::JobType),
            "job_title" | "title" => Ok(Dimension::JobTitle),
            "employment_type" | "employment" => Ok(Dimension::EmploymentType),
            _ => Err(ModelError::UnknownDimension(s.to_string())),
        }
    }
}

/// A concrete value of a filter dimension.
///
/// `Missing` stands for a null cell (for example a `company_location` with
/// no region). It sorts after every present value.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum FilterValue {
    Present(String),
    Missing,
}

impl FilterValue {
    pub fn from_field(value: Option<&str>) -> Self {
        match value {
            Some(value) => FilterValue::Present(value.to_string()),
            None => FilterValue::Missing,
        }
    }

    /// Parses user input; `(missing)` selects the null value.
    pub fn parse(input: &str) -> Self {
        let trimmed = input.trim();
        if trimmed.eq_ignore_ascii_case(MISSING_LABEL) {
            FilterValue::Missing
        } else {
            FilterValue::Present(trimmed.to_string())
        }
    }

    /// True when a record field holds this value.
    pub fn matches(&self, value: Option<&str>) -> bool {
        match (self, value) {
            (FilterValue::Present(expected), Some(actual)) => expected == actual,
            (FilterValue::Missing, None) => true,
            _ => false,
        }
    }
}

impl fmt::Display for FilterValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FilterValue::Present(value) => write!(f, "{value}"),
            FilterValue::Missing => write!(f, "{MISSING_LABEL}"),
        }
    }
}

impl Serialize for FilterValue {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

/// Distinct values per dimension, taken from the unfiltered dataset.
///
/// Present values keep first-encountered order; `Missing` is listed last
/// when any record lacks the value.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterOptions {
    values: [Vec<FilterValue>; 5],
}

impl FilterOptions {
    pub fn from_records(records: &[Record]) -> Self {
        let mut values: [Vec<FilterValue>; 5] = Default::default();
        for dimension in Dimension::ALL {
            let mut seen: HashSet<&str> = HashSet::new();
            let mut options = Vec::new();
            let mut has_missing = false;
            for record in records {
                match record.dimension_value(dimension) {
                    Some(value) => {
                        if seen.insert(value) {
                            options.push(FilterValue::Present(value.to_string()));
                        }
                    }
                    None => has_missing = true,
                }
            }
            if has_missing {
                options.push(FilterValue::Missing);
            }
            values[dimension.index()] = options;
        }
        Self { values }
    }

    pub fn get(&self, dimension: Dimension) -> &[FilterValue] {
        &self.values[dimension.index()]
    }
}

/// Column a record set can be grouped by.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum GroupKey {
    WorkYear,
    ExperienceLevel,
    ExperienceLevelLabel,
    EmploymentType,
    JobTitle,
    JobType,
    SalaryCurrency,
    EmployeeResidence,
    CompanyLocation,
    CompanySize,
    Country,
    Region,
}

impl GroupKey {
    pub fn column(&self) -> &'static str {
        match self {
            GroupKey::WorkYear => "work_year",
            GroupKey::ExperienceLevel => "experience_level",
            GroupKey::ExperienceLevelLabel => "experience_level_label",
            GroupKey::EmploymentType => "employment_type",
            GroupKey::JobTitle => "job_title",
            GroupKey::JobType => "job_type_label",
            GroupKey::SalaryCurrency => "salary_currency",
            GroupKey::EmployeeResidence => "employee_residence",
            GroupKey::CompanyLocation => "company_location",
            GroupKey::CompanySize => "company_size",
            GroupKey::Country => "country",
            GroupKey::Region => "region",
        }
    }
}

impl fmt::Display for GroupKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.column())
    }
}

/// Numeric column aggregated by means and distributions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Metric {
    SalaryInUsd,
    Salary,
}

fn normalize_key(raw: &str) -> String {
    raw.trim()
        .chars()
        .map(|ch| match ch {
            '-' | ' ' => '_',
            other => other.to_ascii_lowercase(),
        })
        .collect()
}
