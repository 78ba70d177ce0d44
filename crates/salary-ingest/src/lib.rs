pub mod csv_table;
pub mod dataset;
pub mod error;
pub mod frame;
pub mod regions;
pub mod salaries;

pub use csv_table::{ColumnIndex, normalize_header, open_csv};
pub use dataset::{
    DEFAULT_REGIONS_FILE, DEFAULT_SALARIES_FILE, DataPaths, Dataset, DatasetLoader, load_dataset,
};
pub use error::{ExportError, LoadError};
pub use frame::{FRAME_COLUMNS, records_to_frame, write_frame_csv};
pub use regions::{REGION_COLUMNS, read_region_lookup};
pub use salaries::{SALARY_COLUMNS, read_salaries};
