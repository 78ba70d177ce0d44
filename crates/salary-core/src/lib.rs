//! Filter-and-aggregate pipeline for the salaries dataset.

pub mod aggregate;
pub mod filter;
pub mod session;
pub mod view;

pub use aggregate::{
    BoxSummary, DEFAULT_TOP_K, LabeledCount, LabeledValue, OTHER_LABEL, bottom_n, box_summary,
    group_mean, top_k_plus_other, top_n, value_counts,
};
pub use filter::{Choice, FilterSet, Predicate, SELECT_ALL, SelectionError, parse_choices};
pub use session::{Event, Session};
pub use view::{
    COUNTRY_RANK_LIMIT, Chart, ChartData, Orientation, ViewModel, ViewState, Visualization, render,
};
