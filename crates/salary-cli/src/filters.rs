//! Filter flags shared by the one-shot commands.

use clap::Args;

use salary_core::{Choice, Event, Session, parse_choices};
use salary_model::Dimension;

use crate::error::CommandError;

/// Filter selections. An absent flag keeps "Select All" for its dimension.
///
/// Every flag is repeatable and accepts comma-separated values. `all`
/// selects everything and `(missing)` selects records without a value.
#[derive(Debug, Clone, Default, Args)]
pub struct FilterArgs {
    /// Regions (continents) to keep.
    #[arg(long = "region", value_name = "VALUES")]
    pub region: Vec<String>,

    /// Experience levels to keep, e.g. "Senior-level".
    #[arg(long = "experience", value_name = "VALUES")]
    pub experience: Vec<String>,

    /// Job types to keep (Remote, Onsite, Hybrid).
    #[arg(long = "job-type", value_name = "VALUES")]
    pub job_type: Vec<String>,

    /// Job titles to keep.
    #[arg(long = "job-title", value_name = "VALUES")]
    pub job_title: Vec<String>,

    /// Employment type codes to keep (FT, PT, CT, FL).
    #[arg(long = "employment-type", value_name = "VALUES")]
    pub employment_type: Vec<String>,

    /// Deselect every value of a dimension.
    #[arg(long = "none", value_name = "DIMENSION")]
    pub none: Vec<String>,
}

impl FilterArgs {
    fn values(&self, dimension: Dimension) -> &[String] {
        match dimension {
            Dimension::Region => &self.region,
            Dimension::ExperienceLevel => &self.experience,
            Dimension::JobType => &self.job_type,
            Dimension::JobTitle => &self.job_title,
            Dimension::EmploymentType => &self.employment_type,
        }
    }

    /// Converts the flags into selection events, in dimension order.
    pub fn events(&self) -> Result<Vec<Event>, CommandError> {
        let mut deselected = Vec::new();
        for name in &self.none {
            let dimension: Dimension = name.parse()?;
            if !self.values(dimension).is_empty() {
                return Err(CommandError::ConflictingFilter { dimension });
            }
            deselected.push(dimension);
        }
        let mut events = Vec::new();
        for dimension in Dimension::ALL {
            if deselected.contains(&dimension) {
                events.push(Event::Select {
                    dimension,
                    choices: Vec::new(),
                });
                continue;
            }
            let values = self.values(dimension);
            if values.is_empty() {
                continue;
            }
            let choices: Vec<Choice> = values
                .iter()
                .flat_map(|value| parse_choices(value))
                .collect();
            events.push(Event::Select { dimension, choices });
        }
        Ok(events)
    }

    /// Applies every selection to the session, stopping at the first rejected value.
    pub fn apply(&self, session: &mut Session) -> Result<(), CommandError> {
        for event in self.events()? {
            session.apply(event)?;
        }
        Ok(())
    }
}
