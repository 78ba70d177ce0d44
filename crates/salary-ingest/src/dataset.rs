//! The joined, immutable salary dataset and its once-only loader.

use std::path::{Path, PathBuf};
use std::sync::{Arc, OnceLock};
use std::time::Instant;

use tracing::{debug, info, info_span, warn};

use salary_model::{Dimension, FilterOptions, FilterValue, Record, RegionLookup};

use crate::error::LoadError;
use crate::regions::read_region_lookup;
use crate::salaries::read_salaries;

pub const DEFAULT_SALARIES_FILE: &str = "salaries.csv";
pub const DEFAULT_REGIONS_FILE: &str = "regions.csv";

/// Locations of the two input tables.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DataPaths {
    pub salaries: PathBuf,
    pub regions: PathBuf,
}

impl DataPaths {
    /// Default file names resolved against `dir`.
    pub fn in_dir(dir: &Path) -> Self {
        Self {
            salaries: dir.join(DEFAULT_SALARIES_FILE),
            regions: dir.join(DEFAULT_REGIONS_FILE),
        }
    }
}

impl Default for DataPaths {
    fn default() -> Self {
        Self {
            salaries: PathBuf::from(DEFAULT_SALARIES_FILE),
            regions: PathBuf::from(DEFAULT_REGIONS_FILE),
        }
    }
}

/// Salary records joined with the region lookup.
///
/// Built once and never mutated; share it behind an `Arc`. The filter
/// options are computed here so they always reflect the unfiltered data.
#[derive(Debug)]
pub struct Dataset {
    records: Vec<Record>,
    lookup: RegionLookup,
    options: FilterOptions,
}

impl Dataset {
    /// Derives labels, left-joins regions, and computes filter options.
    pub fn from_parts(mut records: Vec<Record>, lookup: RegionLookup) -> Self {
        let mut unmatched = 0usize;
        let mut unlabeled_ratio = 0usize;
        let mut unlabeled_level = 0usize;
        for record in &mut records {
            record.derive_labels();
            if record.job_type_label.is_none() {
                unlabeled_ratio += 1;
            }
            if record.experience_level_label.is_none() {
                unlabeled_level += 1;
            }
            if !record.join_region(&lookup) {
                unmatched += 1;
            }
        }
        if unlabeled_ratio > 0 {
            warn!(
                records = unlabeled_ratio,
                "remote_ratio outside 0/50/100, job type left empty"
            );
        }
        if unlabeled_level > 0 {
            warn!(
                records = unlabeled_level,
                "unknown experience_level code, label left empty"
            );
        }
        debug!(unmatched, "records without a region match");
        let options = FilterOptions::from_records(&records);
        Self {
            records,
            lookup,
            options,
        }
    }

    pub fn records(&self) -> &[Record] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Distinct values of a dimension in the unfiltered data.
    pub fn options(&self, dimension: Dimension) -> &[FilterValue] {
        self.options.get(dimension)
    }

    pub fn filter_options(&self) -> &FilterOptions {
        &self.options
    }

    pub fn lookup(&self) -> &RegionLookup {
        &self.lookup
    }
}

/// Reads both tables and builds the dataset. Not memoized; see [`DatasetLoader`].
pub fn load_dataset(paths: &DataPaths) -> Result<Dataset, LoadError> {
    let span = info_span!("load", salaries = %paths.salaries.display());
    let _guard = span.enter();
    let start = Instant::now();
    let records = read_salaries(&paths.salaries)?;
    let lookup = read_region_lookup(&paths.regions)?;
    let dataset = Dataset::from_parts(records, lookup);
    info!(
        records = dataset.len(),
        countries = dataset.lookup().len(),
        duration_ms = start.elapsed().as_millis(),
        "dataset loaded"
    );
    Ok(dataset)
}

/// Loads the dataset at most once per loader.
///
/// The first successful [`load`](Self::load) reads the files; every later
/// call returns the same `Arc` without touching the file system. A failed
/// load is not cached.
#[derive(Debug)]
pub struct DatasetLoader {
    paths: DataPaths,
    dataset: OnceLock<Arc<Dataset>>,
}

impl DatasetLoader {
    pub fn new(paths: DataPaths) -> Self {
        Self {
            paths,
            dataset: OnceLock::new(),
        }
    }

    pub fn paths(&self) -> &DataPaths {
        &self.paths
    }

    pub fn is_loaded(&self) -> bool {
        self.dataset.get().is_some()
    }

    pub fn load(&self) -> Result<Arc<Dataset>, LoadError> {
        if let Some(dataset) = self.dataset.get() {
            return Ok(Arc::clone(dataset));
        }
        let dataset = Arc::new(load_dataset(&self.paths)?);
        Ok(Arc::clone(self.dataset.get_or_init(|| dataset)))
    }
}
