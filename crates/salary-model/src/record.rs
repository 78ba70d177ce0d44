use std::borrow::Cow;

use serde::Serialize;

use crate::dimension::{Dimension, GroupKey, Metric};
use crate::enums::{ExperienceLevel, JobType};
use crate::lookup::RegionLookup;

/// One employment-salary observation.
///
/// The first eleven fields come straight from the salaries table. The last
/// four are derived once at load time: the two labels from fixed code maps,
/// `country` and `region` from the region lookup (left join, so they stay
/// `None` when `company_location` has no match).
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Record {
    pub work_year: i64,
    pub experience_level: String,
    pub employment_type: String,
    pub job_title: String,
    pub salary: f64,
    pub salary_currency: String,
    pub salary_in_usd: f64,
    pub employee_residence: String,
    pub remote_ratio: i64,
    pub company_location: String,
    pub company_size: String,
    pub job_type_label: Option<&'static str>,
    pub experience_level_label: Option<&'static str>,
    pub country: Option<String>,
    pub region: Option<String>,
}

impl Record {
    /// Computes `job_type_label` and `experience_level_label`.
    ///
    /// Unmapped codes leave the label empty.
    pub fn derive_labels(&mut self) {
        self.job_type_label = JobType::label_for_ratio(self.remote_ratio);
        self.experience_level_label = ExperienceLevel::label_for_code(&self.experience_level);
    }

    /// Fills `country` and `region` from the lookup.
    ///
    /// Returns false when `company_location` has no lookup entry.
    pub fn join_region(&mut self, lookup: &RegionLookup) -> bool {
        match lookup.get(&self.company_location) {
            Some(entry) => {
                self.country = Some(entry.country.clone());
                self.region = entry.region.clone();
                true
            }
            None => {
                self.country = None;
                self.region = None;
                false
            }
        }
    }

    /// Value of a filter dimension. `None` is the missing value.
    pub fn dimension_value(&self, dimension: Dimension) -> Option<&str> {
        match dimension {
            Dimension::Region => self.region.as_deref(),
            Dimension::ExperienceLevel => self.experience_level_label,
            Dimension::JobType => self.job_type_label,
            Dimension::JobTitle => Some(self.job_title.as_str()),
            Dimension::EmploymentType => Some(self.employment_type.as_str()),
        }
    }

    /// Value of a grouping column. `None` means the record belongs to no group.
    pub fn group_value(&self, key: GroupKey) -> Option<Cow<'_, str>> {
        match key {
            GroupKey::WorkYear => Some(Cow::Owned(self.work_year.to_string())),
            GroupKey::ExperienceLevel => Some(Cow::Borrowed(&self.experience_level)),
            GroupKey::ExperienceLevelLabel => self.experience_level_label.map(Cow::Borrowed),
            GroupKey::EmploymentType => Some(Cow::Borrowed(&self.employment_type)),
            GroupKey::JobTitle => Some(Cow::Borrowed(&self.job_title)),
            GroupKey::JobType => self.job_type_label.map(Cow::Borrowed),
            GroupKey::SalaryCurrency => Some(Cow::Borrowed(&self.salary_currency)),
            GroupKey::EmployeeResidence => Some(Cow::Borrowed(&self.employee_residence)),
            GroupKey::CompanyLocation => Some(Cow::Borrowed(&self.company_location)),
            GroupKey::CompanySize => Some(Cow::Borrowed(&self.company_size)),
            GroupKey::Country => self.country.as_deref().map(Cow::Borrowed),
            GroupKey::Region => self.region.as_deref().map(Cow::Borrowed),
        }
    }

    pub fn metric(&self, metric: Metric) -> f64 {
        match metric {
            Metric::SalaryInUsd => self.salary_in_usd,
            Metric::Salary => self.salary,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lookup::RegionEntry;

    fn record(experience: &str, remote_ratio: i64, location: &str) -> Record {
        Record {
            experience_level: experience.to_string(),
            remote_ratio,
            company_location: location.to_string(),
            job_title: "Data Analyst".to_string(),
            employment_type: "FT".to_string(),
            ..Record::default()
        }
    }

    #[test]
    fn derives_labels_from_codes() {
        let mut rec = record("SE", 100, "US");
        rec.derive_labels();
        assert_eq!(rec.job_type_label, Some("Remote"));
        assert_eq!(rec.experience_level_label, Some("Senior-level"));
    }

    #[test]
    fn unmapped_codes_leave_labels_empty() {
        let mut rec = record("VP", 20, "US");
        rec.derive_labels();
        assert_eq!(rec.job_type_label, None);
        assert_eq!(rec.experience_level_label, None);
        assert_eq!(rec.dimension_value(Dimension::JobType), None);
    }

    #[test]
    fn joins_region_or_clears_it() {
        let lookup = RegionLookup::from_entries([(
            "DE",
            RegionEntry {
                country: "Germany".to_string(),
                region: Some("Europe".to_string()),
            },
        )]);
        let mut rec = record("MI", 0, "DE");
        assert!(rec.join_region(&lookup));
        assert_eq!(rec.country.as_deref(), Some("Germany"));
        assert_eq!(rec.dimension_value(Dimension::Region), Some("Europe"));

        rec.company_location = "ZZ".to_string();
        assert!(!rec.join_region(&lookup));
        assert_eq!(rec.country, None);
        assert_eq!(rec.group_value(GroupKey::Region), None);
    }

    #[test]
    fn group_value_formats_work_year() {
        let rec = Record {
            work_year: 2023,
            ..Record::default()
        };
        assert_eq!(rec.group_value(GroupKey::WorkYear).as_deref(), Some("2023"));
    }
}
