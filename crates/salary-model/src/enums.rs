//! Type-safe enumerations for the coded salary columns.
//!
//! The source table stores these as short codes (`EN`, `FT`, `M`) or as
//! integer ratios (`remote_ratio`). Records keep the raw codes so that
//! unknown values survive loading; these enums give the known codes a
//! canonical label.

use serde::Serialize;
use std::fmt;
use std::str::FromStr;

/// Experience level in the job during the work year.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum ExperienceLevel {
    /// EN: Entry-level / Junior.
    Entry,
    /// MI: Mid-level / Intermediate.
    Mid,
    /// SE: Senior-level / Expert.
    Senior,
    /// EX: Executive-level / Director.
    Executive,
}

impl ExperienceLevel {
    pub const ALL: [ExperienceLevel; 4] = [
        ExperienceLevel::Entry,
        ExperienceLevel::Mid,
        ExperienceLevel::Senior,
        ExperienceLevel::Executive,
    ];

    /// Returns the code as it appears in the dataset.
    pub fn as_code(&self) -> &'static str {
        match self {
            ExperienceLevel::Entry => "EN",
            ExperienceLevel::Mid => "MI",
            ExperienceLevel::Senior => "SE",
            ExperienceLevel::Executive => "EX",
        }
    }

    /// Returns the human-readable label used for filtering.
    pub fn label(&self) -> &'static str {
        match self {
            ExperienceLevel::Entry => "Entry-level",
            ExperienceLevel::Mid => "Mid-level",
            ExperienceLevel::Senior => "Senior-level",
            ExperienceLevel::Executive => "Executive-level",
        }
    }

    /// Maps a raw code to its label; unknown codes have no label.
    pub fn label_for_code(code: &str) -> Option<&'static str> {
        code.parse::<ExperienceLevel>().ok().map(|level| level.label())
    }
}

impl fmt::Display for ExperienceLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_code())
    }
}

impl FromStr for ExperienceLevel {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_uppercase().as_str() {
            "EN" => Ok(ExperienceLevel::Entry),
            "MI" => Ok(ExperienceLevel::Mid),
            "SE" => Ok(ExperienceLevel::Senior),
            "EX" => Ok(ExperienceLevel::Executive),
            _ => Err(format!("Unknown experience level: {s}")),
        }
    }
}

/// Type of employment for the role.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum EmploymentType {
    PartTime,
    FullTime,
    Contract,
    Freelance,
}

impl EmploymentType {
    pub fn as_code(&self) -> &'static str {
        match self {
            EmploymentType::PartTime => "PT",
            EmploymentType::FullTime => "FT",
            EmploymentType::Contract => "CT",
            EmploymentType::Freelance => "FL",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            EmploymentType::PartTime => "Part-time",
            EmploymentType::FullTime => "Full-time",
            EmploymentType::Contract => "Contract",
            EmploymentType::Freelance => "Freelance",
        }
    }

    /// Maps a raw code to its label; unknown codes have no label.
    pub fn label_for_code(code: &str) -> Option<&'static str> {
        code.parse::<EmploymentType>().ok().map(|kind| kind.label())
    }
}

impl fmt::Display for EmploymentType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_code())
    }
}

impl FromStr for EmploymentType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_uppercase().as_str() {
            "PT" => Ok(EmploymentType::PartTime),
            "FT" => Ok(EmploymentType::FullTime),
            "CT" => Ok(EmploymentType::Contract),
            "FL" => Ok(EmploymentType::Freelance),
            _ => Err(format!("Unknown employment type: {s}")),
        }
    }
}

/// Average headcount of the company during the year.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum CompanySize {
    /// S: less than 50 employees.
    Small,
    /// M: 50 to 250 employees.
    Medium,
    /// L: more than 250 employees.
    Large,
}

impl CompanySize {
    pub fn as_code(&self) -> &'static str {
        match self {
            CompanySize::Small => "S",
            CompanySize::Medium => "M",
            CompanySize::Large => "L",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            CompanySize::Small => "Small",
            CompanySize::Medium => "Medium",
            CompanySize::Large => "Large",
        }
    }

    pub fn label_for_code(code: &str) -> Option<&'static str> {
        code.parse::<CompanySize>().ok().map(|size| size.label())
    }
}

impl fmt::Display for CompanySize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_code())
    }
}

impl FromStr for CompanySize {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_uppercase().as_str() {
            "S" => Ok(CompanySize::Small),
            "M" => Ok(CompanySize::Medium),
            "L" => Ok(CompanySize::Large),
            _ => Err(format!("Unknown company size: {s}")),
        }
    }
}

/// Work arrangement derived from `remote_ratio`.
///
/// - 0: no remote work (less than 20%)
/// - 50: partially remote
/// - 100: fully remote (more than 80%)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum JobType {
    Onsite,
    Hybrid,
    Remote,
}

impl JobType {
    /// Maps a remote ratio to a job type. Only 0, 50 and 100 are defined.
    pub fn from_remote_ratio(ratio: i64) -> Option<JobType> {
        match ratio {
            0 => Some(JobType::Onsite),
            50 => Some(JobType::Hybrid),
            100 => Some(JobType::Remote),
            _ => None,
        }
    }

    pub fn remote_ratio(&self) -> i64 {
        match self {
            JobType::Onsite => 0,
            JobType::Hybrid => 50,
            JobType::Remote => 100,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            JobType::Onsite => "Onsite",
            JobType::Hybrid => "Hybrid",
            JobType::Remote => "Remote",
        }
    }

    /// Maps a remote ratio straight to its label.
    pub fn label_for_ratio(ratio: i64) -> Option<&'static str> {
        JobType::from_remote_ratio(ratio).map(|job_type| job_type.label())
    }
}

impl fmt::Display for JobType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

impl FromStr for JobType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_uppercase().as_str() {
            "ONSITE" | "0" => Ok(JobType::Onsite),
            "HYBRID" | "50" => Ok(JobType::Hybrid),
            "REMOTE" | "100" => Ok(JobType::Remote),
            _ => Err(format!("Unknown job type: {s}")),
        }
    }
}
