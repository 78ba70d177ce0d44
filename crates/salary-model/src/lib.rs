pub mod dimension;
pub mod enums;
pub mod error;
pub mod lookup;
pub mod record;

pub use dimension::{Dimension, FilterOptions, FilterValue, GroupKey, Metric};
pub use enums::{CompanySize, EmploymentType, ExperienceLevel, JobType};
pub use error::{ModelError, Result};
pub use lookup::{RegionEntry, RegionLookup};
pub use record::Record;
