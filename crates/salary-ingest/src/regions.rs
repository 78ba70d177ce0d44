//! Reading the country-to-region reference table.
//!
//! The table follows the ISO-3166 "countries with regional codes" layout.
//! Only three columns are used: `name` becomes the country, `alpha-2` is
//! the join key against `company_location`, and `region` is the continent.

use std::path::Path;

use tracing::debug;

use salary_model::{RegionEntry, RegionLookup};

use crate::csv_table::{ColumnIndex, is_blank, open_csv, record_line};
use crate::error::LoadError;

pub const REGION_COLUMNS: [&str; 3] = ["name", "alpha-2", "region"];

/// Reads the region table and projects it to `alpha-2 -> (country, region)`.
///
/// Rows without a code are skipped. The first row for a duplicated code wins.
pub fn read_region_lookup(path: &Path) -> Result<RegionLookup, LoadError> {
    let (mut reader, headers) = open_csv(path)?;
    let columns = ColumnIndex::resolve(path, &headers, &REGION_COLUMNS)?;
    let mut lookup = RegionLookup::new();
    let mut duplicates = 0usize;
    for row in reader.records() {
        let row = row.map_err(|source| LoadError::Csv {
            path: path.to_path_buf(),
            source,
        })?;
        if is_blank(&row) {
            continue;
        }
        let code = columns.cell(&row, "alpha-2");
        if code.is_empty() {
            debug!(line = record_line(&row), "skipping region row without alpha-2 code");
            continue;
        }
        let region = columns.cell(&row, "region");
        let entry = RegionEntry {
            country: columns.cell(&row, "name").to_string(),
            region: (!region.is_empty()).then(|| region.to_string()),
        };
        if !lookup.insert(code, entry) {
            duplicates += 1;
        }
    }
    debug!(
        path = %path.display(),
        codes = lookup.len(),
        duplicates,
        "read region lookup"
    );
    Ok(lookup)
}
